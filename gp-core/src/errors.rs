//! Error types returned by graph construction, solving and querying.
use std::path::PathBuf;

use itertools::Itertools;
use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GraphError>;

/// A single problem found while validating the construction input of a [`Graph`](crate::Graph).
///
/// Validation runs to completion before anything is built, so a rejected graph reports every
/// issue at once instead of only the first.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationIssue {
    /// Both endpoints of an edge are the same vertex.
    #[error("edge {edge} is a self-loop on vertex {vertex}")]
    SelfLoop {
        /// Index of the offending edge.
        edge: usize,
        /// The repeated endpoint.
        vertex: usize,
    },

    /// An edge endpoint falls outside the contiguous range `0..vertex_count`.
    #[error("edge {edge} references vertex {vertex}, but only {vertex_count} distinct vertices were found")]
    VertexOutOfRange {
        /// Index of the offending edge.
        edge: usize,
        /// The out-of-range endpoint.
        vertex: usize,
        /// Number of distinct vertices discovered from the edge list.
        vertex_count: usize,
    },

    /// Two edges connect the same ordered pair of vertices.
    #[error("edge {duplicate} duplicates edge {first} ({from} -> {to})")]
    DuplicateEdge {
        /// Index of the edge that was seen first.
        first: usize,
        /// Index of the repeated edge.
        duplicate: usize,
        /// Source vertex.
        from: usize,
        /// Target vertex.
        to: usize,
    },

    /// Edge weights were supplied but are not aligned with the edge list.
    #[error("expected {expected} edge weights, got {actual}")]
    EdgeWeightCount {
        /// Number of edges.
        expected: usize,
        /// Number of weights supplied.
        actual: usize,
    },

    /// Vertex coordinates were supplied but their count differs from the discovered vertex count.
    #[error("expected coordinates for {expected} vertices, got {actual}")]
    VertexCount {
        /// Number of distinct vertices discovered from the edge list.
        expected: usize,
        /// Number of coordinate vectors supplied.
        actual: usize,
    },

    /// A coordinate vector has a different dimensionality than the first one.
    #[error("vertex {vertex} has {actual} coordinates, expected {expected}")]
    VertexDimension {
        /// The offending vertex.
        vertex: usize,
        /// Dimensionality of vertex 0.
        expected: usize,
        /// Dimensionality of this vertex.
        actual: usize,
    },

    /// Vertex weights were supplied but are not aligned with the vertex universe.
    #[error("expected {expected} vertex weights, got {actual}")]
    VertexWeightCount {
        /// Number of distinct vertices discovered from the edge list.
        expected: usize,
        /// Number of weights supplied.
        actual: usize,
    },
}

/// Errors produced by `gp-core`.
#[derive(Debug, Error)]
pub enum GraphError {
    /// The construction input failed validation.
    #[error("invalid graph: {}", .0.iter().join("; "))]
    Invalid(Vec<ValidationIssue>),

    /// There is no directed edge between the requested vertices.
    #[error("cannot find edge from {from} to {to}")]
    EdgeNotFound {
        /// Source vertex.
        from: usize,
        /// Target vertex.
        to: usize,
    },

    /// An edge has a negative or non-finite length once coordinates and weights are applied.
    #[error("edge {edge} has invalid length {length}; lengths must be finite and non-negative")]
    InvalidEdgeWeight {
        /// Index of the offending edge.
        edge: usize,
        /// The computed length.
        length: f64,
    },

    /// A relaxed path length exceeded the largest representable `f64`.
    #[error("distance from {from} to {to} through {via} overflows")]
    DistanceOverflow {
        /// Source vertex.
        from: usize,
        /// Target vertex.
        to: usize,
        /// Intermediate vertex of the overflowing route.
        via: usize,
    },

    /// The requested all-pairs algorithm is not implemented.
    #[error("unsupported shortest path algorithm: {0:?}")]
    UnsupportedAlgorithm(String),

    /// A distance or path was requested before the graph was solved.
    #[error("shortest paths have not been computed; call solve first")]
    NotSolved,

    /// A query named a vertex outside the graph.
    #[error("vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    VertexOutOfRange {
        /// The requested vertex.
        vertex: usize,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },

    /// Path reconstruction did not reach its target within `limit` hops.
    #[error("path from {from} to {to} did not terminate within {limit} hops")]
    PathTooLong {
        /// Source vertex.
        from: usize,
        /// Target vertex.
        to: usize,
        /// Maximum number of hops walked.
        limit: usize,
    },

    /// Path reconstruction hit a vertex with no successor toward the target.
    #[error("successor chain from {from} to {to} is broken at vertex {at}")]
    BrokenSuccessorChain {
        /// Source vertex.
        from: usize,
        /// Target vertex.
        to: usize,
        /// Vertex whose successor toward `to` is missing.
        at: usize,
    },

    /// A graph definition file could not be read.
    #[error("failed to read graph definition")]
    Io(#[from] std::io::Error),

    /// A JSON graph definition could not be parsed.
    #[error("failed to parse JSON graph definition")]
    Json(#[from] serde_json::Error),

    /// A YAML graph definition could not be parsed.
    #[error("failed to parse YAML graph definition")]
    Yaml(#[from] serde_yaml::Error),

    /// The definition file extension is not one of `json`, `yaml` or `yml`.
    #[error("unrecognised graph definition format: {}", .0.display())]
    UnknownFormat(PathBuf),
}
