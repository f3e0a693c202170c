//! # Skein
//!
//! Skein is a Rust library dedicated to directed, edge-weighted graphs and
//! the classic algorithms that consume them: depth-first vertex orderings,
//! strongly-connected-component decomposition, topological sorting, and a
//! unified Dijkstra / A* shortest-path search.
//!
//! Vertex keys are generic and only need a total order. Iteration over the
//! vertex set and over any vertex's neighbourhood happens in ascending key
//! order, so every traversal in this library is deterministic and
//! reproducible.

pub mod digraph;
pub mod parser;
