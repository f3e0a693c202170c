//! Canonical graphs shared across the test suite.

use std::collections::BTreeMap;

use crate::digraph::Digraph;
use crate::parser;
use crate::parser::coordinates::EuclideanHeuristic;

/// Seven vertices, eight unit-weight edges, falling apart into two
/// depth-first trees.
pub fn two_tree_graph() -> Digraph<u32> {
    Digraph::from_edges([
        (1, 2),
        (2, 5),
        (5, 1),
        (2, 6),
        (3, 7),
        (4, 3),
        (4, 6),
        (7, 4),
    ])
}

/// Eight vertices with exactly four strongly connected components:
/// `{5, 6, 7}`, `{8}`, `{1, 2, 3}` and `{4}`.
pub fn four_component_graph() -> Digraph<u32> {
    Digraph::from_edges([
        (1, 2),
        (1, 3),
        (2, 1),
        (2, 3),
        (3, 1),
        (1, 4),
        (5, 4),
        (5, 7),
        (6, 5),
        (7, 6),
        (7, 8),
        (8, 2),
    ])
}

/// An acyclic chain with a diamond in the middle; its unique topological
/// order is `1..=7`.
pub fn chain_dag() -> Digraph<u32> {
    Digraph::from_edges([(1, 2), (2, 3), (3, 4), (3, 5), (4, 6), (5, 6), (6, 7)])
}

/// Getting-dressed precedences; acyclic, with several valid orders.
pub fn dressing_dag() -> Digraph<&'static str> {
    Digraph::from_edges([
        ("socks", "shoes"),
        ("shoes", "gloves"),
        ("underpants", "trousers"),
        ("trousers", "shoes"),
        ("trousers", "belt"),
        ("belt", "coat"),
        ("coat", "scarf"),
        ("scarf", "gloves"),
        ("undershirt", "shirt"),
        ("shirt", "sweater"),
        ("sweater", "coat"),
        ("cap", "gloves"),
    ])
}

/// A small transit map in the link-line format: eight stations on a
/// 60-pixel grid, ten symmetric links, and a few redundant lines that
/// exercise the cheapest-mode merge.
pub const TRANSIT_LINKS: &str = "\
1 2 Taxi
2 3 Taxi
1 4 Taxi
2 5 Bus
4 5 Taxi
5 6 Taxi
3 6 UBahn
5 7 Bus
6 8 Taxi
7 8 Taxi
2 5 UBahn
1 2 Bus
4 1 Taxi
";

/// Pixel coordinates for the stations of [`TRANSIT_LINKS`]. Adjacent
/// stations sit 60 pixels apart, so the damped straight-line estimate
/// (divided by 30) never exceeds the cheapest link weight.
pub const TRANSIT_COORDINATES: &str = "\
1 0 0
2 60 0
3 120 0
4 0 60
5 60 60
6 120 60
7 60 120
8 120 120
";

pub fn transit_graph() -> Digraph<u32> {
    parser::edge::digraph_from_str(TRANSIT_LINKS).unwrap()
}

pub fn transit_heuristic() -> EuclideanHeuristic {
    parser::coordinates::heuristic_from_str(TRANSIT_COORDINATES).unwrap()
}

/// A cheap two-hop route through a vertex that is geometrically far out of
/// the way, plus a direct but expensive edge. Straight-line estimates at
/// the default damping prefer the expensive edge, which makes this the
/// canonical inadmissibility fixture.
pub fn detour_graph() -> Digraph<u32> {
    Digraph::from_weighted_edges([(1, 2, 1.0), (2, 3, 1.0), (1, 3, 10.0)])
}

pub fn detour_heuristic() -> EuclideanHeuristic {
    EuclideanHeuristic::new(BTreeMap::from([
        (1, (0.0, 0.0)),
        (2, (200.0, 200.0)),
        (3, (10.0, 0.0)),
    ]))
}

/// Brute-force all-pairs distances by Floyd–Warshall, as an oracle for the
/// search tests. Missing pairs are `f64::INFINITY`.
pub fn all_pairs_distances(graph: &Digraph<u32>) -> BTreeMap<(u32, u32), f64> {
    let vertices: Vec<u32> = graph.vertices().copied().collect();
    let mut dist = BTreeMap::new();
    for &u in &vertices {
        for &v in &vertices {
            let direct = if u == v {
                0.0
            } else {
                graph.weight(&u, &v).unwrap_or(f64::INFINITY)
            };
            dist.insert((u, v), direct);
        }
    }
    for &k in &vertices {
        for &u in &vertices {
            for &v in &vertices {
                let through = dist[&(u, k)] + dist[&(k, v)];
                if through < dist[&(u, v)] {
                    dist.insert((u, v), through);
                }
            }
        }
    }
    dist
}

/// Sum of the edge weights along `path`, in path order.
pub fn path_weight(graph: &Digraph<u32>, path: &[u32]) -> f64 {
    let mut total = 0.0;
    for pair in path.windows(2) {
        total += graph.weight(&pair[0], &pair[1]).unwrap();
    }
    total
}
