//! E2E tests for the graph commands: `bough paths`, `bough centrality`,
//! `bough cluster`.
//!
//! Covers: text and JSON output on small known graphs, config-driven
//! linkage, and error codes for bad input.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::path::Path;
use tempfile::TempDir;

// ---------------------------------------------------------------------------
// Test harness helpers
// ---------------------------------------------------------------------------

const TRIANGLE: &str = "# shortcut triangle\n3\n0 1 1\n1 2 1\n0 2 5\n";
const DIAMOND: &str = "4\n0 1 1\n0 2 1\n1 3 1\n2 3 1\n";
const CLUSTERS: &str = "4\n0 1 4\n1 2 2\n2 3 1.25\n0 2 1\n0 3 0.5\n";

fn bough_cmd(dir: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("bough"));
    cmd.current_dir(dir);
    cmd.env("BOUGH_LOG", "error");
    cmd.env_remove("BOUGH_FORMAT");
    cmd
}

fn write_graph(dir: &Path, name: &str, contents: &str) {
    std::fs::write(dir.join(name), contents).expect("write graph");
}

fn json_of(dir: &Path, args: &[&str]) -> Value {
    let output = bough_cmd(dir)
        .args(args)
        .arg("--json")
        .output()
        .expect("command should not crash");
    assert!(
        output.status.success(),
        "{args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("valid JSON")
}

// ---------------------------------------------------------------------------
// bough paths
// ---------------------------------------------------------------------------

#[test]
fn paths_text_lists_distance_and_predecessors() {
    let dir = TempDir::new().expect("tempdir");
    write_graph(dir.path(), "g.txt", TRIANGLE);

    bough_cmd(dir.path())
        .args(["paths", "g.txt", "0"])
        .assert()
        .success()
        .stdout("0 0 []\n1 1 [0]\n2 2 [1]\n");
}

#[test]
fn paths_marks_unreachable_vertices() {
    let dir = TempDir::new().expect("tempdir");
    write_graph(dir.path(), "g.txt", TRIANGLE);

    bough_cmd(dir.path())
        .args(["paths", "g.txt", "2"])
        .assert()
        .success()
        .stdout("0 inf []\n1 inf []\n2 0 []\n");
}

#[test]
fn paths_json_includes_enumerated_paths() {
    let dir = TempDir::new().expect("tempdir");
    write_graph(dir.path(), "d.txt", DIAMOND);

    let report = json_of(dir.path(), &["paths", "d.txt", "0", "--to", "3"]);
    assert_eq!(report["source"], 0);
    assert_eq!(report["vertices"][3]["distance"], 2.0);
    assert_eq!(report["vertices"][3]["predecessors"], serde_json::json!([1, 2]));
    assert_eq!(report["vertices"][3]["path_count"], 2.0);
    assert_eq!(report["paths"], serde_json::json!([[0, 1, 3], [0, 2, 3]]));
}

#[test]
fn paths_rejects_out_of_range_source() {
    let dir = TempDir::new().expect("tempdir");
    write_graph(dir.path(), "g.txt", TRIANGLE);

    bough_cmd(dir.path())
        .args(["paths", "g.txt", "7"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("E2001"));
}

#[test]
fn malformed_graph_reports_line() {
    let dir = TempDir::new().expect("tempdir");
    write_graph(dir.path(), "bad.txt", "3\n0 1\n");

    bough_cmd(dir.path())
        .args(["paths", "bad.txt", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("E2003").and(predicate::str::contains("line 2")));
}

#[test]
fn negative_weight_is_rejected() {
    let dir = TempDir::new().expect("tempdir");
    write_graph(dir.path(), "neg.txt", "2\n0 1 -1\n");

    bough_cmd(dir.path())
        .args(["centrality", "neg.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("E2002"));
}

// ---------------------------------------------------------------------------
// bough centrality
// ---------------------------------------------------------------------------

#[test]
fn centrality_defaults_to_closeness() {
    let dir = TempDir::new().expect("tempdir");
    write_graph(dir.path(), "g.txt", "3\n0 1 1\n1 2 1\n");

    bough_cmd(dir.path())
        .args(["centrality", "g.txt"])
        .assert()
        .success()
        .stdout("0: 0.666667\n1: 0.500000\n2: 0.000000\n");
}

#[test]
fn centrality_betweenness_json() {
    let dir = TempDir::new().expect("tempdir");
    write_graph(dir.path(), "d.txt", DIAMOND);

    let report = json_of(dir.path(), &["centrality", "d.txt", "--measure", "betweenness"]);
    assert_eq!(report["measure"], "betweenness");
    assert_eq!(report["values"], serde_json::json!([0.0, 0.5, 0.5, 0.0]));
}

#[test]
fn normalised_betweenness_needs_three_vertices() {
    let dir = TempDir::new().expect("tempdir");
    write_graph(dir.path(), "pair.txt", "2\n0 1 1\n");

    bough_cmd(dir.path())
        .args(["centrality", "pair.txt", "--measure", "normalised"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("E2004"));
}

// ---------------------------------------------------------------------------
// bough cluster
// ---------------------------------------------------------------------------

#[test]
fn cluster_single_linkage_outline() {
    let dir = TempDir::new().expect("tempdir");
    write_graph(dir.path(), "c.txt", CLUSTERS);

    bough_cmd(dir.path())
        .args(["cluster", "c.txt"])
        .assert()
        .success()
        .stdout("+ 0.8\n  + 0.5\n    + 0.25\n      0\n      1\n    2\n  3\n");
}

#[test]
fn cluster_linkage_from_config() {
    let dir = TempDir::new().expect("tempdir");
    write_graph(dir.path(), "c.txt", CLUSTERS);
    std::fs::write(
        dir.path().join("bough.toml"),
        "[cluster]\nlinkage = \"complete\"\n",
    )
    .expect("write config");

    let report = json_of(dir.path(), &["cluster", "c.txt"]);
    assert_eq!(report["linkage"], "complete");
    assert_eq!(report["dendrogram"]["distance"], 2.0);
    assert_eq!(report["dendrogram"]["right"]["distance"], 0.8);

    // The flag wins over the config.
    let report = json_of(dir.path(), &["cluster", "c.txt", "--linkage", "single"]);
    assert_eq!(report["dendrogram"]["distance"], 0.8);
}

#[test]
fn cluster_unknown_linkage_in_config_is_a_config_error() {
    let dir = TempDir::new().expect("tempdir");
    write_graph(dir.path(), "c.txt", CLUSTERS);
    std::fs::write(dir.path().join("bough.toml"), "[cluster]\nlinkage = \"ward\"\n")
        .expect("write config");

    bough_cmd(dir.path())
        .args(["cluster", "c.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("E1001").and(predicate::str::contains("bough.toml")));
}

#[test]
fn cluster_empty_graph_is_null() {
    let dir = TempDir::new().expect("tempdir");
    write_graph(dir.path(), "empty.txt", "0\n");

    let report = json_of(dir.path(), &["cluster", "empty.txt"]);
    assert!(report["dendrogram"].is_null());
    assert_eq!(report["vertices"], 0);
}

#[test]
fn explicit_config_flag_overrides_project_file() {
    let dir = TempDir::new().expect("tempdir");
    write_graph(dir.path(), "c.txt", CLUSTERS);
    std::fs::write(dir.path().join("bough.toml"), "[cluster]\nlinkage = \"ward\"\n")
        .expect("write config");
    std::fs::write(
        dir.path().join("alt.toml"),
        "[cluster]\nlinkage = \"complete\"\n",
    )
    .expect("write config");

    let report = json_of(dir.path(), &["--config", "alt.toml", "cluster", "c.txt"]);
    assert_eq!(report["linkage"], "complete");
}
