//! End-to-end tests of the `splitscope` binary.

use assert_cmd::Command;
use predicates::prelude::*;

use super::common::fixtures::temp_data_dir;

fn splitscope(data_dir: &tempfile::TempDir) -> Command {
    let mut cmd = Command::cargo_bin("splitscope").expect("binary should build");
    cmd.arg("--data-dir").arg(data_dir.path());
    cmd
}

#[test]
fn test_trace_not_found() {
    let dir = temp_data_dir();
    splitscope(&dir)
        .args(["trace", "--array", "2,4,6", "--target", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Array: [2, 4, 6]"))
        .stdout(predicate::str::contains(
            "Step 2: Array[2] = 6 > 5. Searching left half.",
        ))
        .stdout(predicate::str::contains("5 not found after 2 comparisons"));
}

#[test]
fn test_trace_json() {
    let dir = temp_data_dir();
    let output = splitscope(&dir)
        .args([
            "trace",
            "--array",
            "1,5,9,12,17,23,29,34,41,50",
            "--target",
            "23",
            "--json",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["trace"]["found_index"], 5);
    assert_eq!(report["trace"]["comparisons"], 3);
    assert_eq!(report["trace"]["steps"].as_array().unwrap().len(), 4);
    assert_eq!(report["trace"]["steps"][3]["status"], "found");
}

#[test]
fn test_trace_unsorted_array_fails() {
    let dir = temp_data_dir();
    splitscope(&dir)
        .args(["trace", "--array", "5,1", "--target", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Array is not sorted"));
}

#[test]
fn test_trace_generated_array_is_seeded() {
    let dir = temp_data_dir();
    let run = || {
        splitscope(&dir)
            .args(["trace", "--size", "20", "--seed", "9", "--target", "50"])
            .output()
            .unwrap()
            .stdout
    };
    let first = run();
    assert_eq!(first, run());
    assert!(String::from_utf8(first).unwrap().contains("Found 50 at index"));
}

#[test]
fn test_play_runs_to_end() {
    let dir = temp_data_dir();
    splitscope(&dir)
        .args(["play", "--array", "2,4,6", "--target", "4", "--speed", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[Step 2 of 2]"))
        .stdout(predicate::str::contains("Found 4 at index 1 after 1 comparisons"));
}

#[test]
fn test_first_run_writes_example_config() {
    let dir = temp_data_dir();
    splitscope(&dir)
        .args(["trace", "--array", "1", "--target", "1"])
        .assert()
        .success();
    assert!(dir.path().join("config.toml").exists());
}
