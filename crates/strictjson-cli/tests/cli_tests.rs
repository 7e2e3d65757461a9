//! Integration tests for the `strictjson` CLI binary.
//!
//! These tests use `assert_cmd` and `predicates` to exercise the show, check,
//! and reshape subcommands through the actual binary, including stdin piping,
//! file I/O, and error reporting.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

fn fixture(name: &str) -> String {
    format!("{}/tests/fixtures/{name}", env!("CARGO_MANIFEST_DIR"))
}

fn strictjson() -> Command {
    Command::cargo_bin("strictjson").unwrap()
}

// ─────────────────────────────────────────────────────────────────────────────
// show
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn show_file_prints_tree() {
    strictjson()
        .args(["show", "-i", fixture("person.json").as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("-- lastname : \"Ivanov\"\n"))
        .stdout(predicate::str::contains("-- age : 25\n"))
        .stdout(predicate::str::contains("-- marks : \n---- 4\n---- 5\n"))
        .stdout(predicate::str::contains("-- address : \n---- city : \"Moscow\"\n"));
}

#[test]
fn show_stdin_prints_tree() {
    strictjson()
        .arg("show")
        .write_stdin("[true, null, [1.5]]")
        .assert()
        .success()
        .stdout("-- true\n-- null\n-- \n---- 1.5\n");
}

#[test]
fn show_rejects_top_level_scalar() {
    strictjson()
        .arg("show")
        .write_stdin("false")
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected start of JSON"));
}

// ─────────────────────────────────────────────────────────────────────────────
// check
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn check_object_summary() {
    strictjson()
        .args(["check", "-i", fixture("person.json").as_str()])
        .assert()
        .success()
        .stdout("object with 4 entries\n");
}

#[test]
fn check_array_summary() {
    strictjson()
        .arg("check")
        .write_stdin("[1, 2, 3]")
        .assert()
        .success()
        .stdout("array with 3 entries\n");
}

#[test]
fn check_reports_duplicated_key() {
    strictjson()
        .arg("check")
        .write_stdin(r#"{"k": 1, "k": 2}"#)
        .assert()
        .failure()
        .stderr(predicate::str::contains("duplicated key 'k'"));
}

#[test]
fn check_reports_malformed_number() {
    strictjson()
        .arg("check")
        .write_stdin("[1.2.3]")
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot parse number '1.2.3'"));
}

#[test]
fn check_missing_file_fails() {
    strictjson()
        .args(["check", "-i", "__definitely_not_existing_file__"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read file"));
}

// ─────────────────────────────────────────────────────────────────────────────
// reshape
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn reshape_to_stdout() {
    let output = strictjson()
        .args(["reshape", "-i", fixture("broker.json").as_str()])
        .output()
        .expect("reshape should run");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).expect("output should be UTF-8");
    assert!(stdout.contains("\n    {\n        \""), "expected 4-space indent:\n{stdout}");

    let value: serde_json::Value = serde_json::from_str(&stdout).expect("output should be JSON");
    assert_eq!(
        value,
        serde_json::json!([
            {"ticker": "Si-9.15", "id": 100024, "description": "Futures contract for USD/RUB"},
            {"ticker": "RTS-9.15", "id": 100027, "description": "Futures contract for index RTS"},
            {"ticker": "GAZP-9.15", "id": 100050, "description": "Futures contract for Gazprom shares"},
        ])
    );
}

#[test]
fn reshape_file_to_file() {
    let output_path = std::env::temp_dir().join("strictjson-test-reshape-output.json");
    let _ = std::fs::remove_file(&output_path);

    strictjson()
        .args(["reshape", "-i", fixture("broker.json").as_str(), "-o"])
        .arg(&output_path)
        .assert()
        .success()
        .stdout("");

    let content = std::fs::read_to_string(&output_path).expect("output file must exist");
    let value: serde_json::Value = serde_json::from_str(&content).expect("output should be JSON");
    assert_eq!(value.as_array().map(Vec::len), Some(3));
    assert_eq!(value[1]["ticker"], "RTS-9.15");

    let _ = std::fs::remove_file(&output_path);
}

#[test]
fn reshape_rejects_uneven_columns() {
    strictjson()
        .args(["reshape", "-i", fixture("broker_uneven.json").as_str()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nested array sizes are not equal"));
}

#[test]
fn reshape_rejects_object_input() {
    strictjson()
        .args(["reshape", "-i", fixture("person.json").as_str()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("input JSON is not an array"));
}

#[test]
fn reshape_requires_input() {
    strictjson().arg("reshape").assert().failure();
}
