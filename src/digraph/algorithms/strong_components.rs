use std::collections::{BTreeMap, BTreeSet};
use std::ops::Index;

use derive_more::{From, Into};
use itertools::Itertools;

use crate::digraph::Digraph;

/// Identifier of a strongly connected component.
///
/// Ids are sequential starting at 0, assigned in the order components are
/// first discovered during the reversed-post-order scan. The order is
/// deterministic but carries no meaning beyond uniqueness.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, From, Into)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComponentId(pub usize);

impl std::fmt::Display for ComponentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The strongly-connected-component decomposition of a digraph.
///
/// Two vertices share a component iff each is reachable from the other.
/// Computed by [`Digraph::strong_components`]; immutable afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(bound(
        serialize = "V: serde::Serialize + Ord",
        deserialize = "V: serde::Deserialize<'de> + Ord"
    ))
)]
pub struct StrongComponents<V> {
    components: Vec<BTreeSet<V>>,
    membership: BTreeMap<V, ComponentId>,
}

impl<V: Ord> StrongComponents<V> {
    /// Number of strongly connected components.
    pub fn count(&self) -> usize {
        self.components.len()
    }

    /// Components in id order, each with its ordered member set.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (ComponentId, &BTreeSet<V>)> {
        self.components
            .iter()
            .enumerate()
            .map(|(id, members)| (ComponentId(id), members))
    }

    /// The ordered member set of `id`, or `None` for an unknown id.
    pub fn members(&self, id: ComponentId) -> Option<&BTreeSet<V>> {
        self.components.get(id.0)
    }

    /// The component containing `v`, or `None` if `v` was not a vertex of
    /// the decomposed graph.
    pub fn component_of(&self, v: &V) -> Option<ComponentId> {
        self.membership.get(v).copied()
    }

    /// Whether `u` and `v` are mutually reachable, i.e. in the same
    /// component. `false` if either is unknown.
    pub fn same_component(&self, u: &V, v: &V) -> bool {
        match (self.component_of(u), self.component_of(v)) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}

impl<V: Ord> Index<ComponentId> for StrongComponents<V> {
    type Output = BTreeSet<V>;

    fn index(&self, id: ComponentId) -> &Self::Output {
        &self.components[id.0]
    }
}

impl<V: Ord + std::fmt::Display> std::fmt::Display for StrongComponents<V> {
    /// One line per component, `Component k: a, b, c`, in id order.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (id, members) in self.iter() {
            writeln!(f, "Component {id}: {}", members.iter().join(", "))?;
        }
        Ok(())
    }
}

impl<V: Ord + Clone> Digraph<V> {
    /// Decomposes the graph into strongly connected components with the
    /// Kosaraju–Sharir algorithm: a depth-first post-order of the graph is
    /// reversed and scanned, and every still-unassigned vertex roots a
    /// depth-first traversal of the inverted graph that collects exactly
    /// one component.
    pub fn strong_components(&self) -> StrongComponents<V> {
        let order = self.depth_first_order();
        let inverted = self.invert();

        let mut components: Vec<BTreeSet<V>> = Vec::new();
        let mut membership: BTreeMap<V, ComponentId> = BTreeMap::new();
        let mut stack: Vec<&V> = Vec::new();

        for root in order.post_order().iter().rev() {
            if membership.contains_key(root) {
                continue;
            }
            let id = ComponentId(components.len());
            let mut members = BTreeSet::new();
            stack.push(root);
            while let Some(v) = stack.pop() {
                if membership.contains_key(v) {
                    continue;
                }
                membership.insert(v.clone(), id);
                members.insert(v.clone());
                for succ in inverted.successors(v) {
                    if !membership.contains_key(succ) {
                        stack.push(succ);
                    }
                }
            }
            components.push(members);
        }

        StrongComponents {
            components,
            membership,
        }
    }
}

#[cfg(test)]
mod test {
    use std::collections::BTreeSet;

    use super::ComponentId;
    use crate::digraph::test_graphs;
    use crate::digraph::Digraph;

    fn members(vertices: &[u32]) -> BTreeSet<u32> {
        vertices.iter().copied().collect()
    }

    #[test]
    fn four_component_decomposition() {
        let graph = test_graphs::four_component_graph();
        let components = graph.strong_components();

        assert_eq!(components.count(), 4);
        assert_eq!(components[ComponentId(0)], members(&[5, 6, 7]));
        assert_eq!(components[ComponentId(1)], members(&[8]));
        assert_eq!(components[ComponentId(2)], members(&[1, 2, 3]));
        assert_eq!(components[ComponentId(3)], members(&[4]));
    }

    #[test]
    fn rendering_matches_component_numbering() {
        let graph = test_graphs::four_component_graph();
        insta::assert_snapshot!(graph.strong_components().to_string(), @r"
        Component 0: 5, 6, 7
        Component 1: 8
        Component 2: 1, 2, 3
        Component 3: 4
        ");
    }

    #[test]
    fn membership_agrees_with_mutual_reachability() {
        let graph = test_graphs::four_component_graph();
        let components = graph.strong_components();

        // Reachability oracle by brute-force traversal.
        let reaches = |from: u32, to: u32| -> bool {
            let mut seen = BTreeSet::new();
            let mut stack = vec![from];
            while let Some(v) = stack.pop() {
                if !seen.insert(v) {
                    continue;
                }
                for succ in graph.successors(&v) {
                    stack.push(*succ);
                }
            }
            seen.contains(&to)
        };

        for u in graph.vertices() {
            for v in graph.vertices() {
                let mutual = reaches(*u, *v) && reaches(*v, *u);
                assert_eq!(
                    components.same_component(u, v),
                    mutual,
                    "vertices {u} and {v}"
                );
            }
        }
    }

    #[test]
    fn acyclic_graph_has_singleton_components() {
        let graph = test_graphs::chain_dag();
        let components = graph.strong_components();

        assert_eq!(components.count(), graph.vertex_count());
        for (_, members) in components.iter() {
            assert_eq!(members.len(), 1);
        }
    }

    #[test]
    fn component_of_unknown_vertex_is_none() {
        let graph = test_graphs::chain_dag();
        let components = graph.strong_components();
        assert_eq!(components.component_of(&99), None);
        assert!(!components.same_component(&1, &99));
    }

    #[test]
    fn single_cycle_collapses_to_one_component() {
        let graph = Digraph::from_edges([(1, 2), (2, 3), (3, 1)]);
        let components = graph.strong_components();
        assert_eq!(components.count(), 1);
        assert_eq!(components[ComponentId(0)], members(&[1, 2, 3]));
    }
}
