//! End-to-end tests for the `config`, `detect-encoding`, and
//! `generate-completion` subcommands.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn config_list_prints_toml_sections() {
    let dir = TempDir::new().unwrap();

    Command::cargo_bin("subtrack")
        .unwrap()
        .env("HOME", dir.path())
        .args(["config", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[realign]"))
        .stdout(predicate::str::contains("[batch]"));
}

#[test]
fn config_get_returns_a_known_key() {
    let dir = TempDir::new().unwrap();

    Command::cargo_bin("subtrack")
        .unwrap()
        .env("HOME", dir.path())
        .args(["config", "get", "batch.max_concurrency"])
        .assert()
        .success();
}

#[test]
fn config_get_rejects_unknown_key() {
    let dir = TempDir::new().unwrap();

    Command::cargo_bin("subtrack")
        .unwrap()
        .env("HOME", dir.path())
        .args(["config", "get", "not.a.real.key"])
        .assert()
        .failure();
}

#[test]
fn detect_encoding_reports_utf8_for_plain_ascii_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("a.srt");
    fs::write(&path, "1\n00:00:01,000 --> 00:00:02,000\nHello\n").unwrap();

    Command::cargo_bin("subtrack")
        .unwrap()
        .args(["detect-encoding", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("utf-8"));
}

#[test]
fn generate_completion_emits_a_shell_script() {
    Command::cargo_bin("subtrack")
        .unwrap()
        .args(["generate-completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("subtrack"));
}
