//! End-to-end tests for the keyfilter binary
#![allow(deprecated)] // suppress assert_cmd::Command::cargo_bin deprecation in tests

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn input_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_filters_pairs_document() {
    let file = input_file(r#"[[null, 1], ["", 2], ["key", 3]]"#);
    Command::cargo_bin("keyfilter")
        .unwrap()
        .arg(file.path())
        .assert()
        .success()
        .stdout("{\"key\":3}\n");
}

#[test]
fn test_reads_stdin() {
    Command::cargo_bin("keyfilter")
        .unwrap()
        .write_stdin(r#"{"": "gone", "b": 2, "a": 1}"#)
        .assert()
        .success()
        .stdout("{\"a\":1,\"b\":2}\n");
}

#[test]
fn test_dash_reads_stdin() {
    Command::cargo_bin("keyfilter")
        .unwrap()
        .arg("-")
        .write_stdin("[]")
        .assert()
        .success()
        .stdout("{}\n");
}

#[test]
fn test_pretty_output() {
    let file = input_file(r#"[["key", [1, 2]]]"#);
    Command::cargo_bin("keyfilter")
        .unwrap()
        .arg("--pretty")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\n  \"key\": ["));
}

#[test]
fn test_report_on_stderr() {
    Command::cargo_bin("keyfilter")
        .unwrap()
        .arg("--report")
        .write_stdin(r#"[[null, 1], ["", 2], ["key", 3]]"#)
        .assert()
        .success()
        .stderr(predicate::str::contains(
            r#"{"retained":1,"absent":1,"empty":1}"#,
        ));
}

#[test]
fn test_missing_file_fails() {
    Command::cargo_bin("keyfilter")
        .unwrap()
        .arg("/nonexistent/keyfilter-missing.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("keyfilter-missing.json"));
}

#[test]
fn test_invalid_json_fails() {
    Command::cargo_bin("keyfilter")
        .unwrap()
        .write_stdin("[[null, 1]")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid input JSON"));
}
