//! # Dijkstra / A* Shortest-Path Search
//!
//! One engine covers both algorithms. Without a heuristic the search is
//! exact uniform-cost Dijkstra: the candidate set is drained completely,
//! so distances to *every* reachable vertex are correct afterwards. With a
//! [`Heuristic`] the search turns into A*: candidates are prioritised by
//! `dist + estimate * scale` and the search stops the moment the goal is
//! dequeued.
//!
//! The `scale` is a damping factor, [`HEURISTIC_SCALE`] by default, not a
//! proof of admissibility. A* only returns optimal distances if the scaled
//! estimate never exceeds the true remaining cost on the given graph.
//! Callers that care should check against the exact search on their own
//! weight scale; see the divergence tests at the bottom of this file.

use std::collections::{BTreeMap, BTreeSet, BinaryHeap};

use thiserror::Error;

use crate::digraph::{Digraph, GraphError};

/// Default damping applied to heuristic estimates.
pub const HEURISTIC_SCALE: f64 = 1.0 / 30.0;

/// A cost estimate between two vertices, used to guide A*.
///
/// For the guided search to stay optimal, `estimated_cost(v, goal)` scaled
/// by the engine's damping factor must never exceed the true remaining
/// cost from `v` to `goal`.
pub trait Heuristic<V> {
    /// Estimates the cost of travelling from `from` to `to`.
    fn estimated_cost(&self, from: &V, to: &V) -> f64;
}

impl<V, F: Fn(&V, &V) -> f64> Heuristic<V> for F {
    fn estimated_cost(&self, from: &V, to: &V) -> f64 {
        self(from, to)
    }
}

/// The zero estimate. Guiding a search with it degenerates to Dijkstra
/// ordering, though the early-stop behaviour of the guided mode remains.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoHeuristic;

impl<V> Heuristic<V> for NoHeuristic {
    fn estimated_cost(&self, _from: &V, _to: &V) -> f64 {
        0.0
    }
}

/// How candidates are prioritised and when the search may stop.
pub enum Strategy<H> {
    /// Exact uniform-cost search. Drains the candidate set completely.
    Dijkstra,
    /// Guided search: priority is `dist + estimate * scale`, and the
    /// search stops as soon as the goal is dequeued as current.
    AStar { heuristic: H, scale: f64 },
}

/// Receives one notification per vertex visitation, in visitation order.
///
/// This is a fire-and-forget hook for visualisation or tracing; it has no
/// effect on the search itself.
pub trait SearchObserver<V> {
    fn visited(&mut self, vertex: &V, dist: f64);
}

impl<V, F: FnMut(&V, f64)> SearchObserver<V> for F {
    fn visited(&mut self, vertex: &V, dist: f64) {
        self(vertex, dist)
    }
}

/// Raised when distances or paths are queried before a completed search,
/// or for a goal the most recent search never reached.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    #[error("no shortest path has been computed")]
    NoPathComputed,
}

/// Per-search state, bound to the most recent `(source, goal)` pair.
struct SearchState<V> {
    source: V,
    goal: V,
    dist: BTreeMap<V, f64>,
    pred: BTreeMap<V, V>,
}

/// A shortest-path engine over one graph, re-armed on every
/// [`search`](ShortestPath::search).
///
/// Built with [`Digraph::shortest_path`] (exact) or
/// [`Digraph::shortest_path_with`] (guided). Distances and paths are
/// queryable once a search has completed.
pub struct ShortestPath<'g, V, H = NoHeuristic> {
    graph: &'g Digraph<V>,
    strategy: Strategy<H>,
    observer: Option<Box<dyn SearchObserver<V> + 'g>>,
    state: Option<SearchState<V>>,
}

/// Min-heap entry. Ordered by priority alone, smallest first, with
/// `total_cmp` so the heap never chokes on the float.
struct Candidate<V> {
    priority: f64,
    vertex: V,
}

impl<V> PartialEq for Candidate<V> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}

impl<V> Eq for Candidate<V> {}

impl<V> PartialOrd for Candidate<V> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<V> Ord for Candidate<V> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reversed: BinaryHeap is a max-heap, we want the smallest
        // priority on top.
        other.priority.total_cmp(&self.priority)
    }
}

impl<V: Ord + Clone> Digraph<V> {
    /// An exact Dijkstra engine over this graph.
    pub fn shortest_path(&self) -> ShortestPath<'_, V> {
        ShortestPath::new(self, Strategy::Dijkstra)
    }

    /// An A* engine over this graph, guided by `heuristic` damped with
    /// [`HEURISTIC_SCALE`]. Use
    /// [`heuristic_scale`](ShortestPath::heuristic_scale) to pick a
    /// different damping.
    pub fn shortest_path_with<H: Heuristic<V>>(&self, heuristic: H) -> ShortestPath<'_, V, H> {
        ShortestPath::new(
            self,
            Strategy::AStar {
                heuristic,
                scale: HEURISTIC_SCALE,
            },
        )
    }
}

impl<'g, V: Ord + Clone, H: Heuristic<V>> ShortestPath<'g, V, H> {
    pub fn new(graph: &'g Digraph<V>, strategy: Strategy<H>) -> Self {
        ShortestPath {
            graph,
            strategy,
            observer: None,
            state: None,
        }
    }

    /// Overrides the damping factor applied to heuristic estimates. No
    /// effect on an exact search.
    pub fn heuristic_scale(mut self, scale: f64) -> Self {
        if let Strategy::AStar { scale: s, .. } = &mut self.strategy {
            *s = scale;
        }
        self
    }

    /// Installs an observer notified of every vertex visitation of
    /// subsequent searches.
    pub fn set_observer(&mut self, observer: impl SearchObserver<V> + 'g) {
        self.observer = Some(Box::new(observer));
    }

    fn priority(&self, dist: f64, vertex: &V, goal: &V) -> f64 {
        match &self.strategy {
            Strategy::Dijkstra => dist,
            Strategy::AStar { heuristic, scale } => {
                dist + heuristic.estimated_cost(vertex, goal) * scale
            }
        }
    }

    /// Searches a shortest path from `source` to `goal`, discarding any
    /// previous search state.
    ///
    /// Every vertex enters the candidate set at most once and is visited
    /// at most once; distance improvements found after a vertex has been
    /// visited are recorded but not re-expanded. For non-negative weights
    /// that never happens in the exact mode; in the guided mode it can,
    /// which is exactly where an inadmissibly-scaled heuristic costs
    /// optimality.
    pub fn search(&mut self, source: V, goal: V) -> Result<(), GraphError<V>> {
        self.state = None;
        if !self.graph.contains_vertex(&source) {
            return Err(GraphError::VertexNotFound(source));
        }
        if !self.graph.contains_vertex(&goal) {
            return Err(GraphError::VertexNotFound(goal));
        }

        let mut dist: BTreeMap<V, f64> = self
            .graph
            .vertices()
            .map(|v| (v.clone(), f64::INFINITY))
            .collect();
        let mut pred: BTreeMap<V, V> = BTreeMap::new();
        let mut visited: BTreeSet<V> = BTreeSet::new();

        dist.insert(source.clone(), 0.0);
        let mut candidates = BinaryHeap::new();
        candidates.push(Candidate {
            priority: self.priority(0.0, &source, &goal),
            vertex: source.clone(),
        });

        while let Some(Candidate { vertex: current, .. }) = candidates.pop() {
            // Stale duplicate of an already-visited vertex.
            if !visited.insert(current.clone()) {
                continue;
            }
            let current_dist = dist[&current];

            if let Some(observer) = self.observer.as_deref_mut() {
                observer.visited(&current, current_dist);
            }

            if matches!(self.strategy, Strategy::AStar { .. }) && current == goal {
                break;
            }

            for (succ, weight) in self.graph.successor_weights(&current) {
                let next = current_dist + weight;
                if next < dist[succ] {
                    dist.insert(succ.clone(), next);
                    pred.insert(succ.clone(), current.clone());
                    if !visited.contains(succ) {
                        candidates.push(Candidate {
                            priority: self.priority(next, succ, &goal),
                            vertex: succ.clone(),
                        });
                    }
                }
            }
        }

        self.state = Some(SearchState {
            source,
            goal,
            dist,
            pred,
        });
        Ok(())
    }

    /// The distance of the most recent search's goal from its source.
    pub fn distance(&self) -> Result<f64, SearchError> {
        let state = self.state.as_ref().ok_or(SearchError::NoPathComputed)?;
        let dist = state.dist[&state.goal];
        if dist.is_finite() {
            Ok(dist)
        } else {
            Err(SearchError::NoPathComputed)
        }
    }

    /// The most recent search's path from source to goal, both inclusive,
    /// reconstructed by walking predecessors back from the goal.
    pub fn path(&self) -> Result<Vec<V>, SearchError> {
        let state = self.state.as_ref().ok_or(SearchError::NoPathComputed)?;
        let mut path = vec![state.goal.clone()];
        let mut current = &state.goal;
        while *current != state.source {
            current = state.pred.get(current).ok_or(SearchError::NoPathComputed)?;
            path.push(current.clone());
        }
        path.reverse();
        Ok(path)
    }
}
