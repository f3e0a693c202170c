//! # Plain-Text Graph Ingestion
//!
//! This module reads the two whitespace-separated line formats that
//! transit-map data ships in, and turns them into the core types:
//!
//! - **Link lines** `<from> <to> <mode>` describe a connection between two
//!   integer station ids by a transport mode (`Taxi`, `Bus` or `UBahn`,
//!   weighted 2, 3 and 5). Every link is inserted symmetrically, and when
//!   several modes connect the same pair the cheapest applicable one wins.
//!   Parsed into a [`Digraph<u32>`](crate::digraph::Digraph) by
//!   [`edge::digraph_from_str`] / [`edge::digraph_from_path`].
//! - **Coordinate lines** `<id> <x> <y>` give each station a pixel
//!   position. Parsed into a straight-line [`EuclideanHeuristic`] for the
//!   guided shortest-path search by [`coordinates::heuristic_from_str`] /
//!   [`coordinates::heuristic_from_path`].
//!
//! Both readers skip blank lines, reject anything else malformed with a
//! line-numbered [`ParseError`], and have no opinion about the order of
//! lines.

pub mod coordinates;
pub mod edge;
pub mod error;

pub use coordinates::EuclideanHeuristic;
pub use edge::Mode;
pub use error::ParseError;
