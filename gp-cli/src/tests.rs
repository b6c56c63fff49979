use std::fs;

use assertables::*;
use rstest::*;
use tempfile::TempDir;

use super::*;

const CANONICAL_JSON: &str = r#"{
    "edges": [[0, 1], [0, 3], [1, 2], [2, 3]],
    "edge_weights": [5, 10, 3, 1]
}"#;

#[fixture]
fn workdir() -> TempDir {
    tempfile::tempdir().unwrap()
}

fn write_input(dir: &TempDir, name: &str, contents: &str) -> String {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path.display().to_string()
}

fn run_to_string(argv: &[&str]) -> Result<String> {
    let args = Cli::try_parse_from(argv)?;
    let mut out = Vec::new();
    run(&args, &mut out)?;
    Ok(String::from_utf8(out)?)
}

#[rstest]
fn test_prints_matrix_without_query(workdir: TempDir) {
    let input = write_input(&workdir, "graph.json", CANONICAL_JSON);
    let output = run_to_string(&["gpctl", "--input", &input]).unwrap();

    assert_eq!(output.lines().next(), Some("0 |   0   5   8   9"));
    assert_eq!(output.lines().count(), 4);
}

#[rstest]
fn test_path_query(workdir: TempDir) {
    let input = write_input(&workdir, "graph.json", CANONICAL_JSON);
    let output = run_to_string(&["gpctl", "-i", &input, "--from", "0", "--to", "3"]).unwrap();

    assert_eq!(output, "distance 0 -> 3: 9\npath: 0 -> 1 -> 2 -> 3\n");
}

#[rstest]
fn test_unreachable_query_with_matrix(workdir: TempDir) {
    let input = write_input(&workdir, "graph.yaml", "edges: [[0, 1], [0, 3], [1, 2], [2, 3]]\n");
    let output = run_to_string(&["gpctl", "-i", &input, "--from", "3", "--to", "0", "-m"]).unwrap();

    assert_contains!(output, "3 |   ∞   ∞   ∞   0\n");
    assert_ends_with!(output, "distance 3 -> 0: ∞\npath: unreachable\n");
}

#[rstest]
#[case("FW")]
#[case("floyd-warshall")]
fn test_algorithm_flag(#[case] name: &str) {
    let args = Cli::try_parse_from(["gpctl", "-i", "g.json", "--algorithm", name]).unwrap();
    assert_eq!(args.algorithm, Algorithm::FloydWarshall);
}

#[rstest]
fn test_unsupported_algorithm_flag() {
    let err = Cli::try_parse_from(["gpctl", "-i", "g.json", "--algorithm", "johnson"]).unwrap_err();
    assert_contains!(err.to_string(), "unsupported shortest path algorithm");
}

#[rstest]
fn test_query_needs_both_endpoints() {
    assert!(Cli::try_parse_from(["gpctl", "-i", "g.json", "--from", "0"]).is_err());
}

#[rstest]
fn test_invalid_graph_is_reported(workdir: TempDir) {
    let input = write_input(&workdir, "graph.json", r#"{"edges": [[0, 1], [0, 1]]}"#);
    let err = run_to_string(&["gpctl", "-i", &input]).unwrap_err();

    let graph_err = err.downcast_ref::<GraphError>().unwrap();
    assert!(matches!(graph_err, GraphError::Invalid(_)));
}

#[rstest]
fn test_missing_input_has_context(workdir: TempDir) {
    let input = workdir.path().join("missing.json").display().to_string();
    let err = run_to_string(&["gpctl", "-i", &input]).unwrap_err();

    assert_starts_with!(err.to_string(), "could not load graph from");
}
