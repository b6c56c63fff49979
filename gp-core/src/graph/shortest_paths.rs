//! All-pairs shortest path tables and the procedures that fill and read them.
//!
//! Solving happens in two stages:
//! 1. One-hop build ([`ShortestPaths::one_hop`]) – the distance table holds `0` on the diagonal, the
//!    length of every direct edge, and [`Distance::Infinite`] elsewhere; the successor table points
//!    each edge source at its target.
//! 2. Relaxation ([`ShortestPaths::floyd_warshall`]) – every vertex in turn is tried as an
//!    intermediate hop, adopting any strictly shorter route and redirecting the first hop toward it.
//!
//! Paths are then recovered per query by following successors from the source toward the target.
use std::fmt;
use std::str::FromStr;

use tracing::debug;

use super::Graph;
use crate::distance::Distance;
use crate::errors::{
    GraphError,
    Result,
};
use crate::matrix::SquareMatrix;

/// The all-pairs shortest path algorithms this crate implements.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Algorithm {
    /// Triple-loop dynamic program over intermediate vertices, `O(V³)` time and `O(V²)` space.
    #[default]
    FloydWarshall,
}

impl FromStr for Algorithm {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "fw" | "floyd-warshall" | "floyd_warshall" | "floydwarshall" => Ok(Self::FloydWarshall),
            _ => Err(GraphError::UnsupportedAlgorithm(s.to_owned())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FloydWarshall => f.write_str("floyd-warshall"),
        }
    }
}

/// Solved distance and successor tables for every ordered vertex pair.
///
/// `successor[(i, j)]` is the vertex after `i` on a shortest path toward `j`, or `None` when `j` is
/// unreachable from `i` (and on the diagonal).
#[derive(Clone, Debug, PartialEq)]
pub struct ShortestPaths {
    /// The algorithm that filled the tables.
    algorithm: Algorithm,
    /// Shortest known length per ordered pair.
    distance: SquareMatrix<Distance>,
    /// First hop per ordered pair.
    successor: SquareMatrix<Option<usize>>,
}

impl ShortestPaths {
    /// Build the tables for `graph` and run `algorithm` over them.
    pub(super) fn compute(graph: &Graph, algorithm: Algorithm) -> Result<Self> {
        let mut paths = Self::one_hop(graph, algorithm)?;
        match algorithm {
            Algorithm::FloydWarshall => paths.floyd_warshall()?,
        }
        Ok(paths)
    }

    /// Initialise the tables from direct edges only.
    fn one_hop(graph: &Graph, algorithm: Algorithm) -> Result<Self> {
        let n = graph.vertex_count();
        let mut distance = SquareMatrix::filled(n, Distance::Infinite);
        let mut successor = SquareMatrix::filled(n, None);
        for i in 0..n {
            distance[(i, i)] = Distance::ZERO;
        }

        for (k, &(i, j)) in graph.edges().iter().enumerate() {
            let length = graph.raw_edge_length(k);
            if !length.is_finite() || length < 0.0 {
                return Err(GraphError::InvalidEdgeWeight { edge: k, length });
            }
            distance[(i, j)] = Distance::finite(length);
            successor[(i, j)] = Some(j);
        }

        debug!(vertices = n, edges = graph.edge_count(), "built one-hop tables");
        Ok(Self { algorithm, distance, successor })
    }

    /// Try every vertex as an intermediate hop; fails if a finite route overflows `f64`.
    fn floyd_warshall(&mut self) -> Result<()> {
        let n = self.order();
        for k in 0..n {
            for i in 0..n {
                let to_k = self.distance[(i, k)];
                if !to_k.is_finite() {
                    continue;
                }
                for j in 0..n {
                    let through_k = to_k
                        .checked_add(self.distance[(k, j)])
                        .ok_or(GraphError::DistanceOverflow { from: i, to: j, via: k })?;
                    if through_k < self.distance[(i, j)] {
                        self.distance[(i, j)] = through_k;
                        self.successor[(i, j)] = self.successor[(i, k)];
                    }
                }
            }
        }
        Ok(())
    }

    /// The algorithm that produced these tables.
    #[must_use]
    pub const fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Number of vertices covered.
    #[must_use]
    pub const fn order(&self) -> usize {
        self.distance.order()
    }

    /// The full distance table.
    #[must_use]
    pub const fn distances(&self) -> &SquareMatrix<Distance> {
        &self.distance
    }

    /// The full successor table.
    #[must_use]
    pub const fn successors(&self) -> &SquareMatrix<Option<usize>> {
        &self.successor
    }

    /// Shortest distance from `from` to `to`.
    ///
    /// # Errors
    ///
    /// [`GraphError::VertexOutOfRange`] for an unknown vertex.
    pub fn distance(&self, from: usize, to: usize) -> Result<Distance> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        Ok(self.distance[(from, to)])
    }

    /// Next hop from `from` toward `to`, or `None` if `to` is unreachable.
    ///
    /// # Errors
    ///
    /// [`GraphError::VertexOutOfRange`] for an unknown vertex.
    pub fn successor(&self, from: usize, to: usize) -> Result<Option<usize>> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        Ok(self.successor[(from, to)])
    }

    /// Reconstruct the vertex sequence of a shortest path from `from` to `to`.
    ///
    /// The result starts at `from` and ends at `to`; it is empty when `to` is unreachable. A vertex
    /// is trivially reachable from itself, so `path(v, v)` is `[v]`. The walk is capped at
    /// [`order`](Self::order) hops.
    ///
    /// # Errors
    ///
    /// [`GraphError::VertexOutOfRange`] for an unknown vertex. A chain that breaks
    /// ([`GraphError::BrokenSuccessorChain`]) or runs past the cap ([`GraphError::PathTooLong`]) is
    /// reported as an error rather than as "no path".
    pub fn path(&self, from: usize, to: usize) -> Result<Vec<usize>> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        if from == to {
            return Ok(vec![from]);
        }
        if self.successor[(from, to)].is_none() {
            return Ok(Vec::new());
        }

        let limit = self.order();
        let mut path = vec![from];
        let mut current = from;
        for _ in 0..limit {
            let Some(next) = self.successor[(current, to)] else {
                return Err(GraphError::BrokenSuccessorChain { from, to, at: current });
            };
            path.push(next);
            if next == to {
                return Ok(path);
            }
            current = next;
        }
        Err(GraphError::PathTooLong { from, to, limit })
    }

    /// Reject vertices outside `0..order`.
    fn check_vertex(&self, vertex: usize) -> Result<()> {
        if vertex < self.order() {
            Ok(())
        } else {
            Err(GraphError::VertexOutOfRange { vertex, vertex_count: self.order() })
        }
    }
}

/// Renders the distance table as a right-aligned grid, one row per source vertex:
///
/// ```text
/// 0 |   0   5   8   9
/// 1 |   ∞   0   3   4
/// ```
impl fmt::Display for ShortestPaths {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells: Vec<String> = self.distance.cells().iter().map(ToString::to_string).collect();
        let width = cells.iter().map(|c| c.chars().count()).max().unwrap_or(0).max(3);
        let label_width = self.order().saturating_sub(1).to_string().len();

        for (i, row) in cells.chunks(self.order().max(1)).enumerate() {
            write!(f, "{i:<label_width$} |")?;
            for cell in row {
                write!(f, " {cell:>width$}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    // tables that no solve could produce, to exercise the reconstruction guards
    fn corrupted(successors: &[((usize, usize), Option<usize>)]) -> ShortestPaths {
        let mut successor = SquareMatrix::filled(3, None);
        for &(cell, next) in successors {
            successor[cell] = next;
        }
        ShortestPaths {
            algorithm: Algorithm::FloydWarshall,
            distance: SquareMatrix::filled(3, Distance::finite(1.0)),
            successor,
        }
    }

    #[rstest]
    fn test_cyclic_successors_are_capped() {
        let paths = corrupted(&[((0, 2), Some(1)), ((1, 2), Some(0))]);
        assert!(matches!(paths.path(0, 2), Err(GraphError::PathTooLong { from: 0, to: 2, limit: 3 })));
    }

    #[rstest]
    fn test_broken_successor_chain() {
        let paths = corrupted(&[((0, 2), Some(1))]);
        assert!(matches!(paths.path(0, 2), Err(GraphError::BrokenSuccessorChain { from: 0, to: 2, at: 1 })));
    }
}
