//! # Graph Algorithms for Weighted Digraphs
//!
//! This module provides the classic algorithms over [`Digraph`]. All of
//! them take the graph strictly as read-only input and own their derived
//! result; none of them mutate the graph.
//!
//! ## Available Algorithms
//!
//! ### Vertex Orderings
//! - [`depth_first`]: pre-order and post-order sequences of a full
//!   depth-first traversal, plus the forest-tree count
//! - [`topological_order`]: topological sorting using Kahn's algorithm
//!
//! ### Decomposition
//! - [`strong_components`]: strongly-connected-component decomposition
//!   using the Kosaraju–Sharir algorithm
//!
//! ### Search
//! - [`shortest_path`]: a unified Dijkstra / A* shortest-path engine,
//!   optionally guided by a [`Heuristic`](shortest_path::Heuristic)
//!
//! ## Determinism
//!
//! Every traversal iterates vertices and neighbourhoods in ascending key
//! order, so the orderings produced here are reproducible across runs. The
//! depth-first components use explicit work stacks rather than native
//! recursion, so traversal depth is never limited by the call stack.
//!
//! [`Digraph`]: crate::digraph::Digraph

pub mod depth_first;
pub mod shortest_path;
pub mod strong_components;
pub mod topological_order;
