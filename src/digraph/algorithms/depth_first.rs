use std::collections::BTreeSet;

use crate::digraph::Digraph;

/// The result of a full depth-first traversal: pre-order and post-order
/// vertex sequences and the number of trees in the depth-first forest.
///
/// Computed eagerly by [`Digraph::depth_first_order`]; immutable afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DepthFirstOrder<V> {
    pre_order: Vec<V>,
    post_order: Vec<V>,
    trees: usize,
}

impl<V> DepthFirstOrder<V> {
    /// Vertices in the order they were first visited.
    pub fn pre_order(&self) -> &[V] {
        &self.pre_order
    }

    /// Vertices in the order their successors were exhausted.
    pub fn post_order(&self) -> &[V] {
        &self.post_order
    }

    /// Number of trees in the depth-first forest, i.e. how many roots the
    /// traversal had to start from.
    pub fn number_of_trees(&self) -> usize {
        self.trees
    }
}

enum Frame<'a, V> {
    Enter(&'a V),
    Exit(&'a V),
}

impl<V: Ord + Clone> Digraph<V> {
    /// Runs a complete depth-first traversal, starting a fresh tree at
    /// every still-unvisited vertex in ascending key order. Within a tree,
    /// unvisited successors are descended into in ascending key order.
    ///
    /// Uses an explicit work stack, so traversal depth is bounded by memory
    /// rather than the call stack. Any finite graph, cyclic or
    /// disconnected, produces a result.
    pub fn depth_first_order(&self) -> DepthFirstOrder<V> {
        let mut visited: BTreeSet<&V> = BTreeSet::new();
        let mut pre_order = Vec::with_capacity(self.vertex_count());
        let mut post_order = Vec::with_capacity(self.vertex_count());
        let mut trees = 0;
        let mut stack = Vec::new();

        for root in self.vertices() {
            if visited.contains(root) {
                continue;
            }
            trees += 1;
            stack.push(Frame::Enter(root));
            while let Some(frame) = stack.pop() {
                match frame {
                    Frame::Enter(v) => {
                        // A vertex can be on the stack more than once; only
                        // the first pop visits it.
                        if !visited.insert(v) {
                            continue;
                        }
                        pre_order.push(v.clone());
                        stack.push(Frame::Exit(v));
                        // Reversed so the smallest successor is popped, and
                        // hence descended into, first.
                        for succ in self.successors(v).rev() {
                            if !visited.contains(succ) {
                                stack.push(Frame::Enter(succ));
                            }
                        }
                    }
                    Frame::Exit(v) => post_order.push(v.clone()),
                }
            }
        }

        DepthFirstOrder {
            pre_order,
            post_order,
            trees,
        }
    }
}
