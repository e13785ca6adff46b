//! Integration tests for the graph-matrix binary.

use std::io::Write;

use assert_cmd::{cargo::cargo_bin_cmd, Command};
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn graph_matrix() -> Command {
    let mut cmd = cargo_bin_cmd!("graph-matrix");
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

fn edge_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

// ============================================================================
// Built-in sample graph
// ============================================================================

#[test]
fn test_default_query_is_connected() {
    graph_matrix()
        .assert()
        .success()
        .stdout("true\n");
}

#[test]
fn test_disjoint_components_print_false() {
    graph_matrix()
        .args(["a", "f"])
        .assert()
        .success()
        .stdout("false\n");
}

#[test]
fn test_dfs_method() {
    graph_matrix()
        .args(["--method", "dfs", "a", "c"])
        .assert()
        .success()
        .stdout("true\n");
}

#[test]
fn test_path_output() {
    graph_matrix()
        .args(["--path", "a", "c"])
        .assert()
        .success()
        .stdout("a -> b -> c\n");
}

// ============================================================================
// Failures exit non-zero with an error on stderr
// ============================================================================

#[test]
fn test_unknown_node_fails() {
    graph_matrix()
        .args(["z", "a"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("error:"))
        .stderr(predicate::str::contains("node \"z\" not in the matrix"));
}

#[test]
fn test_path_without_connection_fails() {
    graph_matrix()
        .args(["--path", "a", "f"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("no path from \"a\" to \"f\""));
}

#[test]
fn test_malformed_edge_file_fails() {
    let file = edge_file("a,b\nb\n");

    graph_matrix()
        .arg("--edges")
        .arg(file.path())
        .args(["a", "b"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid connection on line 2"));
}

#[test]
fn test_missing_edge_file_reports_cause_once() {
    let dir = tempfile::tempdir().unwrap();

    graph_matrix()
        .arg("--edges")
        .arg(dir.path().join("missing.csv"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("error:"))
        .stderr(predicate::str::contains("I/O error"))
        .stderr(predicate::str::contains("caused by:").count(1));
}

// ============================================================================
// Edge files and direction
// ============================================================================

#[test]
fn test_directed_edge_file() {
    let file = edge_file("# one-way chain\nx,y\ny,z\n");

    graph_matrix()
        .arg("--edges")
        .arg(file.path())
        .args(["--directed", "x", "z"])
        .assert()
        .success()
        .stdout("true\n");

    graph_matrix()
        .arg("--edges")
        .arg(file.path())
        .args(["--directed", "z", "x"])
        .assert()
        .success()
        .stdout("false\n");

    graph_matrix()
        .arg("--edges")
        .arg(file.path())
        .args(["z", "x"])
        .assert()
        .success()
        .stdout("true\n");
}
