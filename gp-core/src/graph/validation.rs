use std::collections::hash_map::Entry;
use std::collections::HashMap;

use itertools::Itertools;

use crate::errors::{
    GraphError,
    Result,
    ValidationIssue,
};

/// Check the raw construction input and return the size of the vertex universe.
///
/// Nothing is built here; every problem is collected so that [`GraphError::Invalid`] reports them
/// all at once.
pub(super) fn validate(
    edges: &[(usize, usize)],
    edge_weights: Option<&[f64]>,
    vertices: Option<&[Vec<f64>]>,
    vertex_weights: Option<&[f64]>,
) -> Result<usize> {
    let vertex_count = edges.iter().flat_map(|&(i, j)| [i, j]).unique().count();
    let mut issues = Vec::new();

    let mut first_seen = HashMap::with_capacity(edges.len());
    for (edge, &(from, to)) in edges.iter().enumerate() {
        if from == to {
            issues.push(ValidationIssue::SelfLoop { edge, vertex: from });
        }
        for vertex in [from, to].into_iter().dedup() {
            if vertex >= vertex_count {
                issues.push(ValidationIssue::VertexOutOfRange { edge, vertex, vertex_count });
            }
        }
        match first_seen.entry((from, to)) {
            Entry::Occupied(e) => {
                issues.push(ValidationIssue::DuplicateEdge { first: *e.get(), duplicate: edge, from, to });
            },
            Entry::Vacant(e) => {
                e.insert(edge);
            },
        }
    }

    if let Some(weights) = edge_weights {
        if weights.len() != edges.len() {
            issues.push(ValidationIssue::EdgeWeightCount { expected: edges.len(), actual: weights.len() });
        }
    }

    if let Some(coords) = vertices {
        if coords.len() != vertex_count {
            issues.push(ValidationIssue::VertexCount { expected: vertex_count, actual: coords.len() });
        }
        if let Some(expected) = coords.first().map(Vec::len) {
            for (vertex, c) in coords.iter().enumerate().skip(1) {
                if c.len() != expected {
                    issues.push(ValidationIssue::VertexDimension { vertex, expected, actual: c.len() });
                }
            }
        }
    }

    if let Some(weights) = vertex_weights {
        if weights.len() != vertex_count {
            issues.push(ValidationIssue::VertexWeightCount { expected: vertex_count, actual: weights.len() });
        }
    }

    if issues.is_empty() {
        Ok(vertex_count)
    } else {
        Err(GraphError::Invalid(issues))
    }
}
