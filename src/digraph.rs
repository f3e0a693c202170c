//! # Weighted Directed Graphs
//!
//! This module provides [`Digraph`], a mutable directed graph with `f64`
//! edge weights and totally-ordered vertex keys, together with the
//! algorithms built on top of it (see [`algorithms`]).
//!
//! ## Representation
//!
//! Two ordered adjacency maps are kept mutually consistent: one from each
//! vertex to its successors and one from each vertex to its predecessors.
//! This doubles the memory for edges but makes in- and out-neighbourhood
//! queries symmetric and makes [`Digraph::invert`] a pair of map clones.
//!
//! ## Determinism
//!
//! Vertex keys must implement [`Ord`]. The vertex set and every
//! neighbourhood are iterated in ascending key order, so traversal orders
//! are reproducible across runs. Several algorithm results (depth-first
//! orderings, component numbering) lean on this.

use std::collections::BTreeMap;
use std::fmt::Display;

use thiserror::Error;

/// Weight used by [`Digraph::add_unweighted_edge`] and
/// [`Digraph::from_edges`].
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// Errors from membership-dependent queries on a [`Digraph`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GraphError<V> {
    #[error("vertex {0} does not exist")]
    VertexNotFound(V),

    #[error("edge {0} --> {1} does not exist")]
    EdgeNotFound(V, V),
}

pub mod algorithms;

/// A mutable directed graph with `f64` edge weights.
///
/// Vertices and edges can be inserted but never removed. Re-inserting an
/// edge overwrites its weight without changing the edge count. Inserting an
/// edge implicitly inserts both endpoints.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(bound(
        serialize = "V: serde::Serialize + Ord",
        deserialize = "V: serde::Deserialize<'de> + Ord"
    ))
)]
pub struct Digraph<V> {
    successors: BTreeMap<V, BTreeMap<V, f64>>,
    predecessors: BTreeMap<V, BTreeMap<V, f64>>,
    edge_count: usize,
}

impl<V: Ord + Clone> Digraph<V> {
    pub fn new() -> Self {
        Digraph {
            successors: BTreeMap::new(),
            predecessors: BTreeMap::new(),
            edge_count: 0,
        }
    }

    /// Builds a graph from `from --> to` pairs, all weighted
    /// [`DEFAULT_WEIGHT`].
    pub fn from_edges<I: IntoIterator<Item = (V, V)>>(edges: I) -> Self {
        let mut graph = Digraph::new();
        for (from, to) in edges {
            graph.add_edge(from, to, DEFAULT_WEIGHT);
        }
        graph
    }

    /// Builds a graph from `(from, to, weight)` triples.
    pub fn from_weighted_edges<I: IntoIterator<Item = (V, V, f64)>>(edges: I) -> Self {
        let mut graph = Digraph::new();
        for (from, to, weight) in edges {
            graph.add_edge(from, to, weight);
        }
        graph
    }

    /// Inserts a vertex with empty neighbourhoods. Returns `true` if the
    /// vertex is new, `false` if it was already present.
    pub fn add_vertex(&mut self, v: V) -> bool {
        if self.successors.contains_key(&v) {
            return false;
        }
        self.predecessors.insert(v.clone(), BTreeMap::new());
        self.successors.insert(v, BTreeMap::new());
        true
    }

    /// Inserts the edge `from --> to`, inserting either endpoint if absent.
    ///
    /// Returns `true` if the edge is new. Re-inserting an existing edge
    /// overwrites the weight, returns `false`, and leaves the edge count
    /// untouched.
    pub fn add_edge(&mut self, from: V, to: V, weight: f64) -> bool {
        self.add_vertex(from.clone());
        self.add_vertex(to.clone());
        self.predecessors
            .entry(to.clone())
            .or_default()
            .insert(from.clone(), weight);
        let fresh = self
            .successors
            .entry(from)
            .or_default()
            .insert(to, weight)
            .is_none();
        if fresh {
            self.edge_count += 1;
        }
        fresh
    }

    /// [`Digraph::add_edge`] with [`DEFAULT_WEIGHT`].
    pub fn add_unweighted_edge(&mut self, from: V, to: V) -> bool {
        self.add_edge(from, to, DEFAULT_WEIGHT)
    }

    pub fn contains_vertex(&self, v: &V) -> bool {
        self.successors.contains_key(v)
    }

    pub fn contains_edge(&self, from: &V, to: &V) -> bool {
        self.successors
            .get(from)
            .is_some_and(|succ| succ.contains_key(to))
    }

    /// The weight of the edge `from --> to`.
    pub fn weight(&self, from: &V, to: &V) -> Result<f64, GraphError<V>> {
        self.successors
            .get(from)
            .and_then(|succ| succ.get(to))
            .copied()
            .ok_or_else(|| GraphError::EdgeNotFound(from.clone(), to.clone()))
    }

    /// Number of incoming edges of `v`.
    pub fn in_degree(&self, v: &V) -> Result<usize, GraphError<V>> {
        self.predecessors
            .get(v)
            .map(BTreeMap::len)
            .ok_or_else(|| GraphError::VertexNotFound(v.clone()))
    }

    /// Number of outgoing edges of `v`.
    pub fn out_degree(&self, v: &V) -> Result<usize, GraphError<V>> {
        self.successors
            .get(v)
            .map(BTreeMap::len)
            .ok_or_else(|| GraphError::VertexNotFound(v.clone()))
    }

    /// All vertices in ascending key order.
    pub fn vertices(&self) -> impl ExactSizeIterator<Item = &V> + DoubleEndedIterator + Clone {
        self.successors.keys()
    }

    /// Successors of `v` in ascending key order. Empty if `v` is absent.
    pub fn successors(&self, v: &V) -> impl DoubleEndedIterator<Item = &V> + Clone {
        self.successors.get(v).into_iter().flat_map(BTreeMap::keys)
    }

    /// Predecessors of `v` in ascending key order. Empty if `v` is absent.
    pub fn predecessors(&self, v: &V) -> impl DoubleEndedIterator<Item = &V> + Clone {
        self.predecessors
            .get(v)
            .into_iter()
            .flat_map(BTreeMap::keys)
    }

    /// Successors of `v` together with the connecting edge weights, in
    /// ascending key order. Empty if `v` is absent.
    pub fn successor_weights(&self, v: &V) -> impl DoubleEndedIterator<Item = (&V, f64)> + Clone {
        self.successors
            .get(v)
            .into_iter()
            .flat_map(|succ| succ.iter().map(|(to, weight)| (to, *weight)))
    }

    pub fn vertex_count(&self) -> usize {
        self.successors.len()
    }

    /// Number of distinct edges ever inserted. O(1); tracked independently
    /// of the adjacency maps.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// A new graph with every edge reversed and weights preserved. The
    /// receiver is untouched.
    ///
    /// The predecessor map of a graph *is* the successor map of its
    /// inversion, so this is a pair of clones.
    pub fn invert(&self) -> Self {
        Digraph {
            successors: self.predecessors.clone(),
            predecessors: self.successors.clone(),
            edge_count: self.edge_count,
        }
    }
}

impl<V: Ord + Display> Display for Digraph<V> {
    /// One line per edge, `from --> to weight = w`, vertices and successors
    /// in ascending key order.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (from, succ) in &self.successors {
            for (to, weight) in succ {
                writeln!(f, "{from} --> {to} weight = {weight:?}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
pub mod test_graphs;
