//! End-to-end tests for the create-notebook binary.

#![allow(deprecated)] // Allow deprecated Command::cargo_bin for tests

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn create_notebook() -> Command {
    Command::cargo_bin("create-notebook").expect("Failed to find create-notebook binary")
}

fn read_json(path: &std::path::Path) -> serde_json::Value {
    let content = fs::read_to_string(path).expect("Failed to read notebook");
    serde_json::from_str(&content).expect("Notebook should be valid JSON")
}

#[test]
fn test_default_invocation() {
    let temp = TempDir::new().unwrap();

    create_notebook()
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout("Notebook created successfully!\n");

    let path = temp.path().join("retail-sales-eda.ipynb");
    assert!(path.exists(), "Default notebook should be written");

    let json = read_json(&path);
    let first_line = json["cells"][0]["source"][0].as_str().unwrap();
    assert!(first_line.starts_with("# Retail Sales Exploratory Data Analysis"));
    assert_eq!(json["nbformat"], 4);
    assert_eq!(json["nbformat_minor"], 4);
}

#[test]
fn test_output_flag() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("custom.ipynb");

    create_notebook()
        .args(["--output", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Notebook created successfully!"));

    assert_eq!(read_json(&path)["cells"].as_array().unwrap().len(), 15);
}

#[test]
fn test_repeated_runs_identical() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("retail-sales-eda.ipynb");

    create_notebook().current_dir(temp.path()).assert().success();
    let first = fs::read(&path).unwrap();

    create_notebook().current_dir(temp.path()).assert().success();
    let second = fs::read(&path).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_verbose_logs_stay_off_stdout() {
    let temp = TempDir::new().unwrap();

    create_notebook()
        .current_dir(temp.path())
        .arg("--verbose")
        .assert()
        .success()
        .stdout("Notebook created successfully!\n")
        .stderr(predicate::str::contains("markdown"));
}

#[test]
fn test_unwritable_path_fails() {
    let temp = TempDir::new().unwrap();
    let blocker = temp.path().join("blocker");
    fs::write(&blocker, "not a directory").unwrap();
    let path = blocker.join("nb.ipynb");

    create_notebook()
        .args(["-o", path.to_str().unwrap()])
        .assert()
        .failure()
        .stdout(predicate::str::contains("successfully").not())
        .stderr(predicate::str::contains("Failed to write file"));

    assert!(!path.exists());
}

#[test]
fn test_rejects_unknown_flag() {
    create_notebook()
        .arg("--bogus")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--bogus"));
}
