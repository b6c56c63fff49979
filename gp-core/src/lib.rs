#![deny(
    // Strict on purpose: anything these catch either gets fixed or gets an inline allow explaining
    // why it is fine.
    clippy::nursery,
    clippy::pedantic,
    missing_docs,
    clippy::missing_docs_in_private_items,
)]

//! # gp-core – all-pairs shortest paths over weighted directed graphs
//!
//! The engine ingests an edge list (optionally with per-edge weights, per-vertex coordinates and
//! per-vertex weights), indexes it, and solves shortest distances between every ordered pair of
//! vertices. Concrete paths are reconstructed on demand from a successor table.
//!
//! ## Pipeline overview
//! 1. Validation and indexing ([`Graph::new`]) – reject malformed input as a whole, then build
//!    the incidence map and the `(from, to) -> edge` lookup.
//! 2. One-hop tables – distances and next hops known from direct edges alone.
//! 3. Relaxation ([`Graph::solve`]) – Floyd–Warshall over the one-hop tables.
//! 4. Queries ([`Graph::distance`], [`Graph::path`]) – read-only, safe to share once solved.
//!
//! Construction input can also come from a JSON or YAML [`GraphDefinition`].

pub mod definition;
/// Path lengths with an explicit unreachable value
mod distance;
/// Error types
mod errors;
/// The graph aggregate and its solver
mod graph;
pub mod logging;
/// Dense square tables
mod matrix;

#[cfg(any(test, feature = "testutils"))]
pub mod testutils;

pub use definition::GraphDefinition;
pub use distance::Distance;
pub use errors::{
    GraphError,
    Result,
    ValidationIssue,
};
pub use graph::{
    Algorithm,
    Graph,
    ShortestPaths,
};
pub use matrix::SquareMatrix;
