//! Command-line tests for the `kmer-assembler` binary.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn cmd() -> Command {
    Command::cargo_bin("kmer-assembler").unwrap()
}

#[test]
fn test_assemble_from_file() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("kmers.txt");
    fs::write(&input, "# acgta\ngta\nacg\ncgt\n").unwrap();

    cmd()
        .arg("assemble")
        .arg(&input)
        .assert()
        .success()
        .stdout("acgta\n");
}

#[test]
fn test_assemble_from_stdin() {
    cmd()
        .args(["assemble", "-"])
        .write_stdin("cgt gta acg\n")
        .assert()
        .success()
        .stdout("acgta\n");
}

#[test]
fn test_assemble_json_output() {
    let output = cmd()
        .args(["--format", "json", "assemble", "-"])
        .write_stdin("aaaaa\naaaaa\naaaaa\n")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["sequence"], "aaaaaaa");
    assert_eq!(json["k"], 5);
    assert_eq!(json["kmer_count"], 3);
    assert_eq!(json["path_kind"], "circuit");
}

#[test]
fn test_assemble_writes_output_and_dot_files() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("kmers.txt");
    let output = dir.path().join("assembled.txt");
    let dot = dir.path().join("graph.dot");
    fs::write(&input, "acg\ncgt\n").unwrap();

    cmd()
        .arg("assemble")
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .arg("--dot")
        .arg(&dot)
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&output).unwrap(), "acgt\n");
    assert!(fs::read_to_string(&dot)
        .unwrap()
        .contains("ac->cg [label=acg];"));
}

#[test]
fn test_assemble_no_eulerian_path() {
    cmd()
        .args(["assemble", "-"])
        .write_stdin("acg\ngct\ntca\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No Eulerian path"));
}

#[test]
fn test_assemble_invalid_input() {
    cmd()
        .args(["assemble", "-"])
        .write_stdin("acg\nacgt\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid k-mer input"));
}

#[test]
fn test_assemble_missing_file() {
    cmd()
        .args(["assemble", "/nonexistent/kmers.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read k-mers"));
}

#[test]
fn test_graph_dot() {
    cmd()
        .args(["graph", "-"])
        .write_stdin("acg\ncgt\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("digraph {"))
        .stdout(predicate::str::contains("cg->gt [label=cgt];"));
}

#[test]
fn test_graph_json_summary() {
    let output = cmd()
        .args(["--format", "json", "graph", "-"])
        .write_stdin("acg\nttg\n")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["node_count"], 4);
    assert_eq!(json["component_count"], 2);
    assert_eq!(json["has_eulerian_path"], false);
}

#[test]
fn test_simulate_then_assemble_round_trip() {
    let dir = TempDir::new().unwrap();
    let kmers = dir.path().join("kmers.txt");
    let genome = dir.path().join("genome.txt");
    let assembled = dir.path().join("assembled.txt");

    cmd()
        .args(["simulate", "-k", "12", "--length", "2000", "--seed", "17"])
        .arg("--genome-output")
        .arg(&genome)
        .arg("--output")
        .arg(&kmers)
        .assert()
        .success();

    let kmer_lines = fs::read_to_string(&kmers).unwrap();
    assert_eq!(kmer_lines.lines().count(), 2000 - 12 + 1);

    cmd()
        .arg("assemble")
        .arg(&kmers)
        .arg("--output")
        .arg(&assembled)
        .assert()
        .success();

    cmd()
        .arg("compare")
        .arg(&genome)
        .arg(&assembled)
        .args(["-k", "12"])
        .assert()
        .success()
        .stdout(predicate::str::contains("identical").or(predicate::str::contains("same")));
}

#[test]
fn test_simulate_from_fasta_without_shuffle() {
    let dir = TempDir::new().unwrap();
    let fasta = dir.path().join("genome.fa");
    fs::write(&fasta, ">genome\nacgta\n").unwrap();

    cmd()
        .args(["simulate", "-k", "3", "--no-shuffle", "--from"])
        .arg(&fasta)
        .assert()
        .success()
        .stdout("acg\ncgt\ngta\n");
}

#[test]
fn test_simulate_rejects_small_k() {
    cmd()
        .args(["simulate", "-k", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("k must be at least 2"));
}

#[test]
fn test_compare_different() {
    let dir = TempDir::new().unwrap();
    let a = dir.path().join("a.txt");
    let b = dir.path().join("b.txt");
    fs::write(&a, "acgtacgt\n").unwrap();
    fs::write(&b, "ttttacgt\n").unwrap();

    cmd()
        .arg("compare")
        .arg(&a)
        .arg(&b)
        .args(["-k", "3"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("different"));
}
