mod construction_test;

use assertables::*;
use rstest::*;
use tracing_test::traced_test;

use super::*;
use crate::testutils::*;
use crate::ValidationIssue;

#[fixture]
fn solved(canonical_graph: Graph) -> Graph {
    let mut graph = canonical_graph;
    graph.solve(Algorithm::FloydWarshall).unwrap();
    graph
}
