use super::*;

#[rstest]
fn test_canonical_counts(canonical_graph: Graph) {
    assert_eq!(canonical_graph.vertex_count(), 4);
    assert_eq!(canonical_graph.edge_count(), 4);
    assert!(!canonical_graph.is_solved());
}

#[rstest]
#[case(0, &[0, 1])]
#[case(1, &[0, 2])]
#[case(2, &[2, 3])]
#[case(3, &[1, 3])]
#[case::unknown_vertex(9, &[])]
fn test_incident_edges(canonical_graph: Graph, #[case] vertex: usize, #[case] expected: &[usize]) {
    let mut incident = canonical_graph.incident_edges(vertex).to_vec();
    incident.sort_unstable();
    assert_eq!(incident, expected);
}

#[rstest]
fn test_get_edge(canonical_graph: Graph) {
    assert_eq!(canonical_graph.get_edge(0, 3).unwrap(), 1);
    assert_eq!(canonical_graph.get_edge(1, 2).unwrap(), 2);
}

#[rstest]
fn test_get_edge_is_directed(canonical_graph: Graph) {
    let err = canonical_graph.get_edge(2, 1).unwrap_err();
    assert!(matches!(err, GraphError::EdgeNotFound { from: 2, to: 1 }));
    assert_eq!(err.to_string(), "cannot find edge from 2 to 1");
}

#[rstest]
fn test_edge_length(square_graph: Graph) {
    assert_eq!(square_graph.edge_length(0), Some(1.0));
    assert_eq!(square_graph.edge_length(4), Some(2.0_f64.sqrt()));
    assert_none!(square_graph.edge_length(5));
}

#[rstest]
fn test_large_vertex_indices() {
    // a packed `i + B*j` key would need B above the vertex count; pair keys have no such limit
    let n = 20_000;
    let edges: Vec<_> = (0..n - 1).map(|i| (i, i + 1)).collect();
    let graph = Graph::from_edges(edges).unwrap();

    assert_eq!(graph.vertex_count(), n);
    assert_eq!(graph.get_edge(n - 2, n - 1).unwrap(), n - 2);
    assert!(graph.get_edge(n - 1, n - 2).is_err());
}

#[rstest]
fn test_empty_graph() {
    let mut graph = Graph::from_edges(vec![]).unwrap();
    assert_eq!(graph.vertex_count(), 0);

    graph.solve(Algorithm::FloydWarshall).unwrap();
    assert_eq!(graph.solution().unwrap().to_string(), "");
    assert!(matches!(graph.distance(0, 0), Err(GraphError::VertexOutOfRange { vertex: 0, vertex_count: 0 })));
}

#[rstest]
fn test_validation_collects_every_issue() {
    let err = Graph::new(vec![(0, 0), (0, 1), (0, 1), (0, 5)], Some(vec![1.0, 2.0]), None, None).unwrap_err();

    let issues = match err {
        GraphError::Invalid(issues) => issues,
        other => panic!("expected a validation error, got {other:?}"),
    };
    assert_eq!(
        issues,
        vec![
            ValidationIssue::SelfLoop { edge: 0, vertex: 0 },
            ValidationIssue::DuplicateEdge { first: 1, duplicate: 2, from: 0, to: 1 },
            ValidationIssue::VertexOutOfRange { edge: 3, vertex: 5, vertex_count: 3 },
            ValidationIssue::EdgeWeightCount { expected: 4, actual: 2 },
        ]
    );
}

#[rstest]
fn test_validation_error_message() {
    let err = Graph::new(vec![(0, 1)], Some(vec![]), None, Some(vec![1.0])).unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid graph: expected 1 edge weights, got 0; expected 2 vertex weights, got 1"
    );
}

#[rstest]
#[case::too_few(vec![vec![0.0, 0.0]], ValidationIssue::VertexCount { expected: 2, actual: 1 })]
#[case::too_many(
    vec![vec![0.0], vec![1.0], vec![2.0]],
    ValidationIssue::VertexCount { expected: 2, actual: 3 }
)]
#[case::ragged(
    vec![vec![0.0, 0.0], vec![1.0, 0.0, 0.0]],
    ValidationIssue::VertexDimension { vertex: 1, expected: 2, actual: 3 }
)]
fn test_coordinate_validation(#[case] vertices: Vec<Vec<f64>>, #[case] expected: ValidationIssue) {
    let err = Graph::new(vec![(0, 1)], None, Some(vertices), None).unwrap_err();
    assert_eq!(err.to_string(), format!("invalid graph: {expected}"));
}

#[rstest]
fn test_vertex_weights_are_carried() {
    let graph = Graph::new(vec![(0, 1), (1, 2)], None, None, Some(vec![0.5, 1.5, 2.5])).unwrap();
    assert_eq!(graph.vertex_weights(), Some(&[0.5, 1.5, 2.5][..]));
}

#[rstest]
fn test_try_from_definition(canonical_definition: GraphDefinition) {
    let graph = Graph::try_from(canonical_definition.clone()).unwrap();
    assert_eq!(graph.edges(), canonical_definition.edges.as_slice());
    assert_eq!(graph.edge_weights(), canonical_definition.edge_weights.as_deref());
    assert_none!(graph.vertices());
}

#[rstest]
#[traced_test]
fn test_construction_is_logged() {
    Graph::from_edges(vec![(0, 1), (1, 2)]).unwrap();
    assert!(logs_contain("indexed edges"));
    assert!(logs_contain("vertex_count=3"));
}
