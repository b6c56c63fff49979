//! The graph aggregate: construction input, derived edge index and solved shortest paths.
//!
//! A [`Graph`] is built once from an edge list plus optional edge weights, vertex coordinates and
//! vertex weights. The vertex universe is inferred from the edges and must be the contiguous range
//! `0..V`. Edge lengths are `1` without coordinates or the Euclidean distance between endpoints
//! with them, multiplied by the edge weight when weights are given.
//!
//! ```
//! use gp_core::{Algorithm, Graph};
//!
//! let mut graph = Graph::new(
//!     vec![(0, 1), (0, 3), (1, 2), (2, 3)],
//!     Some(vec![5.0, 10.0, 3.0, 1.0]),
//!     None,
//!     None,
//! )?;
//! graph.solve(Algorithm::FloydWarshall)?;
//!
//! assert_eq!(graph.distance(0, 3)?, 9.0);
//! assert_eq!(graph.path(0, 3)?, vec![0, 1, 2, 3]);
//! # Ok::<(), gp_core::GraphError>(())
//! ```

/// Edge lookup by endpoint pair and by incident vertex
mod edge_index;
/// Distance/successor tables, relaxation and path reconstruction
mod shortest_paths;
/// Construction-input checks
mod validation;

#[cfg(test)]
mod tests;

use tracing::{
    debug,
    info,
    instrument,
};

use self::edge_index::EdgeIndex;
pub use self::shortest_paths::{
    Algorithm,
    ShortestPaths,
};
use crate::definition::GraphDefinition;
use crate::distance::Distance;
use crate::errors::{
    GraphError,
    Result,
};

/// A directed graph with optionally weighted edges and an all-pairs shortest path solution.
///
/// The edge set is fixed for the lifetime of the value. Queries take `&self`, so a solved graph can
/// be shared between readers; solving takes `&mut self` and only swaps in the new tables once the
/// computation has finished successfully.
#[derive(Clone, Debug)]
pub struct Graph {
    /// Directed `(from, to)` pairs, in input order.
    edges: Vec<(usize, usize)>,
    /// One multiplier per edge.
    edge_weights: Option<Vec<f64>>,
    /// One coordinate vector per vertex.
    vertices: Option<Vec<Vec<f64>>>,
    /// Carried for vertex-weighted variants; the edge-length computation does not read it.
    vertex_weights: Option<Vec<f64>>,
    /// Incidence and pair lookup derived from `edges`.
    index: EdgeIndex,
    /// Tables from the last successful solve.
    solution: Option<ShortestPaths>,
}

impl Graph {
    /// Validate the input and build the edge index.
    ///
    /// # Errors
    ///
    /// [`GraphError::Invalid`] listing every problem found: self-loops, endpoints outside `0..V`,
    /// duplicate directed edges, and optional sequences whose lengths don't line up with the edges
    /// or the discovered vertices.
    #[instrument(skip_all, fields(edges = edges.len()))]
    pub fn new(
        edges: Vec<(usize, usize)>,
        edge_weights: Option<Vec<f64>>,
        vertices: Option<Vec<Vec<f64>>>,
        vertex_weights: Option<Vec<f64>>,
    ) -> Result<Self> {
        let vertex_count =
            validation::validate(&edges, edge_weights.as_deref(), vertices.as_deref(), vertex_weights.as_deref())?;

        let index = EdgeIndex::build(&edges);
        debug_assert_eq!(index.vertex_count(), vertex_count);
        debug!(vertex_count, "indexed edges");

        Ok(Self {
            edges,
            edge_weights,
            vertices,
            vertex_weights,
            index,
            solution: None,
        })
    }

    /// A graph with unit-length edges.
    ///
    /// # Errors
    ///
    /// As for [`new`](Self::new).
    pub fn from_edges(edges: Vec<(usize, usize)>) -> Result<Self> {
        Self::new(edges, None, None, None)
    }

    /// Number of distinct vertices, `V`.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.index.vertex_count()
    }

    /// Number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// The edge list as given at construction.
    #[must_use]
    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }

    /// Per-edge weights, if any were given.
    #[must_use]
    pub fn edge_weights(&self) -> Option<&[f64]> {
        self.edge_weights.as_deref()
    }

    /// Per-vertex coordinates, if any were given.
    #[must_use]
    pub fn vertices(&self) -> Option<&[Vec<f64>]> {
        self.vertices.as_deref()
    }

    /// Per-vertex weights, if any were given.
    #[must_use]
    pub fn vertex_weights(&self) -> Option<&[f64]> {
        self.vertex_weights.as_deref()
    }

    /// Indices of the edges that have `vertex` as either endpoint.
    #[must_use]
    pub fn incident_edges(&self, vertex: usize) -> &[usize] {
        self.index.incident(vertex)
    }

    /// Index of the directed edge `from -> to`.
    ///
    /// # Errors
    ///
    /// [`GraphError::EdgeNotFound`] if no such edge exists; the reverse edge does not count.
    pub fn get_edge(&self, from: usize, to: usize) -> Result<usize> {
        self.index.edge(from, to).ok_or(GraphError::EdgeNotFound { from, to })
    }

    /// Length of edge `edge` after applying coordinates and weights, or `None` for an unknown edge.
    ///
    /// This is the raw value; it is only guaranteed finite and non-negative after a successful solve.
    #[must_use]
    pub fn edge_length(&self, edge: usize) -> Option<f64> {
        (edge < self.edges.len()).then(|| self.raw_edge_length(edge))
    }

    /// Base length (Euclidean or unit) times the edge weight, unchecked.
    fn raw_edge_length(&self, edge: usize) -> f64 {
        let (i, j) = self.edges[edge];
        let base = self.vertices.as_ref().map_or(1.0, |coords| euclidean(&coords[i], &coords[j]));
        self.edge_weights.as_ref().map_or(base, |weights| base * weights[edge])
    }

    /// Compute shortest distances and successors for every ordered pair of vertices.
    ///
    /// Solving again on the same graph reproduces the same tables. On failure any previously
    /// computed solution is left in place.
    ///
    /// # Errors
    ///
    /// [`GraphError::InvalidEdgeWeight`] for a negative or non-finite edge length, and
    /// [`GraphError::DistanceOverflow`] if some route's total length does not fit in an `f64`.
    #[instrument(skip(self), fields(vertices = self.vertex_count(), edges = self.edge_count()))]
    pub fn solve(&mut self, algorithm: Algorithm) -> Result<()> {
        let paths = ShortestPaths::compute(self, algorithm)?;
        let reachable = paths.distances().cells().iter().filter(|d| d.is_finite()).count();
        info!(%algorithm, reachable, "solved all-pairs shortest paths");
        self.solution = Some(paths);
        Ok(())
    }

    /// [`solve`](Self::solve) with an algorithm given by name, e.g. `"floyd-warshall"` or `"FW"`.
    ///
    /// # Errors
    ///
    /// [`GraphError::UnsupportedAlgorithm`] for an unknown name, otherwise as for `solve`.
    pub fn solve_named(&mut self, algorithm: &str) -> Result<()> {
        self.solve(algorithm.parse()?)
    }

    /// Whether a solve has succeeded.
    #[must_use]
    pub const fn is_solved(&self) -> bool {
        self.solution.is_some()
    }

    /// The algorithm behind the current solution.
    #[must_use]
    pub fn solved_algorithm(&self) -> Option<Algorithm> {
        self.solution.as_ref().map(ShortestPaths::algorithm)
    }

    /// The solved tables.
    ///
    /// # Errors
    ///
    /// [`GraphError::NotSolved`] before the first successful solve. The same holds for every
    /// query below.
    pub fn solution(&self) -> Result<&ShortestPaths> {
        self.solution.as_ref().ok_or(GraphError::NotSolved)
    }

    /// Shortest distance from `from` to `to`; [`Distance::Infinite`] if unreachable.
    ///
    /// # Errors
    ///
    /// [`GraphError::NotSolved`], or [`GraphError::VertexOutOfRange`] for an unknown vertex.
    pub fn distance(&self, from: usize, to: usize) -> Result<Distance> {
        self.solution()?.distance(from, to)
    }

    /// Next hop from `from` toward `to`.
    ///
    /// # Errors
    ///
    /// As for [`distance`](Self::distance).
    pub fn successor(&self, from: usize, to: usize) -> Result<Option<usize>> {
        self.solution()?.successor(from, to)
    }

    /// A shortest path from `from` to `to`, empty if `to` is unreachable.
    ///
    /// # Errors
    ///
    /// As for [`ShortestPaths::path`].
    pub fn path(&self, from: usize, to: usize) -> Result<Vec<usize>> {
        self.solution()?.path(from, to)
    }

    /// Sum of edge lengths along `path`.
    ///
    /// An empty path has infinite length (it is what [`path`](Self::path) returns for unreachable
    /// pairs) and a single vertex has length zero.
    ///
    /// # Errors
    ///
    /// [`GraphError::EdgeNotFound`] if two consecutive vertices are not joined by an edge.
    pub fn path_length(&self, path: &[usize]) -> Result<Distance> {
        if path.is_empty() {
            return Ok(Distance::Infinite);
        }
        path.windows(2).try_fold(Distance::ZERO, |total, hop| {
            let edge = self.get_edge(hop[0], hop[1])?;
            Ok(total + Distance::finite(self.raw_edge_length(edge)))
        })
    }
}

impl TryFrom<GraphDefinition> for Graph {
    type Error = GraphError;

    fn try_from(def: GraphDefinition) -> Result<Self> {
        Self::new(def.edges, def.edge_weights, def.vertices, def.vertex_weights)
    }
}

/// Straight-line distance between two points of equal dimensionality.
fn euclidean(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| (x - y).powi(2)).sum::<f64>().sqrt()
}
