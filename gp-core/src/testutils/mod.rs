//! Shared fixtures for tests in this crate and downstream crates (enable the `testutils` feature).
// rstest expands every #[fixture] into a helper struct that carries no docs
#![allow(missing_docs)]

use std::collections::{
    BTreeSet,
    HashMap,
};

use petgraph::algo::dijkstra;
use petgraph::graph::{
    DiGraph,
    NodeIndex,
};
use rand::rngs::StdRng;
use rand::{
    Rng,
    SeedableRng,
};
use rstest::fixture;

use crate::{
    Graph,
    GraphDefinition,
};

/// The four-vertex example:
///
/// ```text
///          [10]
///       0 ------> 3
///       |         ^
///   [5] |         | [1]
///       v         |
///       1 ------> 2
///           [3]
/// ```
#[fixture]
pub fn canonical_definition() -> GraphDefinition {
    GraphDefinition {
        edges: vec![(0, 1), (0, 3), (1, 2), (2, 3)],
        edge_weights: Some(vec![5.0, 10.0, 3.0, 1.0]),
        ..Default::default()
    }
}

/// [`canonical_definition`] as a validated, unsolved [`Graph`].
#[fixture]
pub fn canonical_graph(canonical_definition: GraphDefinition) -> Graph {
    Graph::try_from(canonical_definition).unwrap()
}

/// Unit square with one diagonal, so lengths come from coordinates:
/// `0 -> 1 -> 2` has length 2 while the direct `0 -> 2` has length √2.
#[fixture]
pub fn square_graph() -> Graph {
    Graph::new(
        vec![(0, 1), (1, 2), (2, 3), (3, 0), (0, 2)],
        None,
        Some(vec![vec![0.0, 0.0], vec![1.0, 0.0], vec![1.0, 1.0], vec![0.0, 1.0]]),
        None,
    )
    .unwrap()
}

/// A reproducible random graph on exactly `vertex_count` vertices with integer edge weights in
/// `1..=20`, so that sums of weights are exact in `f64`.
///
/// Every vertex is guaranteed at least one incident edge so the inferred universe is `0..vertex_count`.
///
/// # Panics
///
/// If `vertex_count < 2` or `edge_probability` is outside `0..=1`.
pub fn random_graph(seed: u64, vertex_count: usize, edge_probability: f64) -> Graph {
    assert!(vertex_count >= 2, "need at least two vertices to avoid self-loops");
    let mut rng = StdRng::seed_from_u64(seed);
    let mut pairs = BTreeSet::new();

    for i in 0..vertex_count {
        for j in 0..vertex_count {
            if i != j && rng.gen_bool(edge_probability) {
                pairs.insert((i, j));
            }
        }
    }
    for v in 0..vertex_count {
        if !pairs.iter().any(|&(i, j)| i == v || j == v) {
            pairs.insert((v, (v + 1) % vertex_count));
        }
    }

    let edges: Vec<_> = pairs.into_iter().collect();
    let weights = edges.iter().map(|_| f64::from(rng.gen_range(1..=20_u32))).collect();
    Graph::new(edges, Some(weights), None, None).unwrap()
}

/// Single-source distances from an independent implementation (petgraph's Dijkstra), keyed by
/// target vertex; unreachable targets are absent.
///
/// # Panics
///
/// If `source` is not a vertex of `graph`.
pub fn reference_distances(graph: &Graph, source: usize) -> HashMap<usize, f64> {
    let mut reference = DiGraph::<(), f64>::with_capacity(graph.vertex_count(), graph.edge_count());
    for _ in 0..graph.vertex_count() {
        reference.add_node(());
    }
    for (k, &(i, j)) in graph.edges().iter().enumerate() {
        let length = graph.edge_length(k).unwrap();
        reference.add_edge(NodeIndex::new(i), NodeIndex::new(j), length);
    }

    dijkstra(&reference, NodeIndex::new(source), None, |e| *e.weight())
        .into_iter()
        .map(|(node, d)| (node.index(), d))
        .collect()
}
