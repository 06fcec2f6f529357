//! Integration tests for the `sc` binary
//!
//! Each test writes a collection document into a temp dir and runs the binary from there.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const VALID_DOC: &str = r#"[
    {"id": "c1", "name": "posts", "type": "base", "schema": [{"name": "title", "type": "text"}]},
    {"id": "u1", "name": "users", "type": "auth", "schema": []},
    {"id": "n1", "name": "notifications", "type": "base", "schema": [
        {"name": "receiver", "type": "relation", "options": {"collectionId": "u1"}},
        {"name": "sender", "type": "relation", "options": {"collectionId": "u1"}}
    ]}
]"#;

fn workdir(doc: &str) -> TempDir {
    let temp = TempDir::new().expect("Failed to create temp dir");
    fs::write(temp.path().join("pocketbase_collections.json"), doc).expect("Failed to write document");
    temp
}

fn sc(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("sc").expect("Failed to find sc binary");
    cmd.current_dir(dir.path()).env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

// =============================================================================
// Default document
// =============================================================================

#[test]
fn test_zero_argument_run_passes() {
    let dir = workdir(VALID_DOC);

    sc(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Collections validated: 3"))
        .stdout(predicate::str::contains("Errors: 0"))
        .stdout(predicate::str::contains("Warnings: 0"))
        .stdout(predicate::str::contains("Schema validation passed!"))
        .stdout(predicate::str::contains("Next steps:"));
}

#[test]
fn test_missing_default_document() {
    let dir = TempDir::new().expect("Failed to create temp dir");

    sc(&dir)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Error loading collections: could not read"))
        .stderr(predicate::str::contains("well-formed").not());
}

#[test]
fn test_malformed_document() {
    let dir = workdir("[{\"id\": \"c1\",");

    sc(&dir)
        .assert()
        .code(2)
        .stderr(predicate::str::contains(
            "pocketbase_collections.json is not a well-formed collection document",
        ))
        .stderr(predicate::str::contains("failed to parse"));
}

#[test]
fn test_object_document_is_load_failure() {
    let dir = workdir(r#"{"collections": []}"#);

    sc(&dir)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("is not a well-formed collection document"))
        .stderr(predicate::str::contains("expected a list of collections"));
}

// =============================================================================
// Findings
// =============================================================================

#[test]
fn test_errors_fail_run() {
    let dir = workdir(r#"[{"name": "notifications", "type": "base", "schema": [{"name": "title", "type": "text"}]}]"#);

    sc(&dir)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Errors: 1"))
        .stdout(predicate::str::contains("Warnings: 2"))
        .stdout(predicate::str::contains("  - Collection 0: Missing id"))
        .stdout(predicate::str::contains(
            "  - Notifications collection: Missing receiver relation field",
        ))
        .stdout(predicate::str::contains("Schema validation failed!"))
        .stdout(predicate::str::contains("Next steps:").not());
}

#[test]
fn test_warnings_do_not_fail_run() {
    let dir = workdir(r#"[{"id": "n1", "name": "notifications", "type": "base", "schema": []}]"#);

    sc(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Warnings: 2"))
        .stdout(predicate::str::contains("Schema validation passed!"));
}

#[test]
fn test_explicit_path_and_json_format() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("export.json");
    fs::write(
        &path,
        r#"[{"id": "c1", "name": "posts", "type": "base", "schema": [{"name": "author", "type": "relation", "options": {}}]}]"#,
    )
    .expect("Failed to write document");

    let output = sc(&dir)
        .arg(&path)
        .args(["--format", "json"])
        .output()
        .expect("Failed to run sc");
    assert_eq!(output.status.code(), Some(1));

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(report["errorCount"], 1);
    assert_eq!(report["warningCount"], 0);
    assert_eq!(report["success"], false);
    assert_eq!(
        report["errors"][0],
        "Collection posts, field author: Relation missing collectionId"
    );
}

#[test]
fn test_quiet_prints_results_only() {
    let dir = workdir(VALID_DOC);

    sc(&dir)
        .arg("--quiet")
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Collection Schema Validation ===").not())
        .stdout(predicate::str::contains("Next steps:").not())
        .stdout(predicate::str::contains("=== Validation Results ==="));
}

#[test]
fn test_progress_goes_to_log_only() {
    let dir = workdir(VALID_DOC);

    sc(&dir)
        .args(["--log-level", "info"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Validating collection: posts"))
        .stdout(predicate::str::contains("Validating collection").not());
}

#[test]
fn test_config_file_input_path() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(dir.path().join("custom.json"), VALID_DOC).expect("Failed to write document");
    let config = dir.path().join("config.yml");
    fs::write(&config, "input_path: custom.json\nshow_next_steps: false\n").expect("Failed to write config");

    sc(&dir)
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Collections validated: 3"))
        .stdout(predicate::str::contains("Next steps:").not());
}
