use std::collections::{BTreeMap, VecDeque};

use thiserror::Error;

use crate::digraph::Digraph;

/// Failure of Kahn's algorithm. Cyclicity is an expected, checkable
/// outcome of the sort, not a programming error; the residue in
/// `remaining_nodes` is exactly the set of vertices on or downstream of a
/// cycle, with their leftover in-degree.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TopoError<V: std::fmt::Debug> {
    #[error("not a DAG: {nodes_processed} nodes processed out of {total_nodes} total nodes. Remaining nodes with non-zero in-degrees: {remaining_nodes:?}")]
    NotDag {
        nodes_processed: usize,
        total_nodes: usize,
        remaining_nodes: Vec<(V, usize)>,
    },
}

impl<V: Ord + Clone + std::fmt::Debug> Digraph<V> {
    /// Topologically sorts the graph with Kahn's algorithm: all vertices of
    /// in-degree zero are seeded into a FIFO queue in ascending key order;
    /// dequeuing a vertex appends it to the result and decrements the
    /// running in-degree of each successor, enqueueing those that reach
    /// zero.
    ///
    /// On success the returned sequence contains every vertex, and for
    /// every edge `u --> v`, `u` precedes `v`.
    pub fn topological_order(&self) -> Result<Vec<V>, TopoError<V>> {
        let mut indeg: BTreeMap<&V, usize> = self
            .vertices()
            .map(|v| (v, self.predecessors(v).count()))
            .collect();

        let mut queue: VecDeque<&V> = indeg
            .iter()
            .filter(|(_, &degree)| degree == 0)
            .map(|(&v, _)| v)
            .collect();

        let mut order = Vec::with_capacity(self.vertex_count());
        while let Some(v) = queue.pop_front() {
            order.push(v.clone());
            for succ in self.successors(v) {
                if let Some(degree) = indeg.get_mut(succ) {
                    *degree -= 1;
                    if *degree == 0 {
                        queue.push_back(succ);
                    }
                }
            }
        }

        if order.len() != self.vertex_count() {
            let remaining_nodes = indeg
                .into_iter()
                .filter(|(_, degree)| *degree > 0)
                .map(|(v, degree)| (v.clone(), degree))
                .collect();

            return Err(TopoError::NotDag {
                nodes_processed: order.len(),
                total_nodes: self.vertex_count(),
                remaining_nodes,
            });
        }
        Ok(order)
    }
}
