//! End-to-end tests for the `shift` subcommand, driven through the compiled binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const SAMPLE_SRT: &str = "1\n00:00:01,000 --> 00:00:02,000\nHello\n\n2\n00:00:03,000 --> 00:00:04,000\nWorld\n";

#[test]
fn shifts_file_in_place_by_default() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("movie.srt");
    fs::write(&input, SAMPLE_SRT).unwrap();

    Command::cargo_bin("subtrack")
        .unwrap()
        .args(["shift", input.to_str().unwrap(), "1000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Shifted"));

    let rewritten = fs::read_to_string(&input).unwrap();
    assert!(rewritten.contains("00:00:02,000"));
    assert!(rewritten.contains("00:00:04,000"));
}

#[test]
fn writes_to_explicit_output_path_without_touching_input() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("movie.srt");
    let output = dir.path().join("shifted.srt");
    fs::write(&input, SAMPLE_SRT).unwrap();

    Command::cargo_bin("subtrack")
        .unwrap()
        .args(["shift", input.to_str().unwrap(), "-500", "-o", output.to_str().unwrap()])
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&input).unwrap(), SAMPLE_SRT);
    let shifted = fs::read_to_string(&output).unwrap();
    assert!(shifted.contains("00:00:00,500"));
}

#[test]
fn rejects_missing_input_file() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.srt");

    Command::cargo_bin("subtrack")
        .unwrap()
        .args(["shift", missing.to_str().unwrap(), "1000"])
        .assert()
        .failure();
}

#[test]
fn rejects_malformed_offset() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("movie.srt");
    fs::write(&input, SAMPLE_SRT).unwrap();

    Command::cargo_bin("subtrack")
        .unwrap()
        .args(["shift", input.to_str().unwrap(), "not-a-number"])
        .assert()
        .failure();
}
