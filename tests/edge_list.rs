//! Loading edge lists from disk into a graph matrix.

use std::io::Write;

use graph_matrix::{read_connections_from_path, GraphError, GraphMatrix};
use tempfile::NamedTempFile;

fn edge_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_and_query() {
    let file = edge_file("# sample\na,b\nb,c\nf,y\n");

    let connections = read_connections_from_path(file.path()).unwrap();
    let graph = GraphMatrix::new(connections);

    let a = "a".to_string();
    let c = "c".to_string();
    assert_eq!(graph.len(), 5);
    assert!(graph.are_connected_bfs(&c, &a).unwrap());
    assert_eq!(graph.find_path_from_to(&a, &c).unwrap(), vec!["a", "b", "c"]);
}

#[test]
fn test_malformed_line_reports_line_number() {
    let file = edge_file("a,b\nb;c\n");

    let err = read_connections_from_path(file.path()).unwrap_err();
    assert!(matches!(err, GraphError::InvalidInput { line: 2, .. }));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();

    let err = read_connections_from_path(dir.path().join("missing.csv")).unwrap_err();
    assert!(matches!(err, GraphError::Io(_)));
}
