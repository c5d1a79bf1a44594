//! Integration tests for the fileops CLI binary.
//!
//! These tests exercise the compiled binary using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

/// Get a Command for the fileops binary rooted at `dir`
fn fileops_in(dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("fileops").expect("Failed to find fileops binary");
    cmd.env_remove("FILEOPS_BASE_DIR")
        .env_remove("RUST_LOG")
        .arg("--base-dir")
        .arg(dir);
    cmd
}

// ============================================================================
// Help and Version Tests
// ============================================================================

#[test]
fn test_help_output() {
    Command::cargo_bin("fileops")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("create"))
        .stdout(predicate::str::contains("replace"));
}

#[test]
fn test_no_command_prints_hint() {
    Command::cargo_bin("fileops")
        .unwrap()
        .assert()
        .success()
        .stdout(predicate::str::contains("fileops --help"));
}

// ============================================================================
// Operation Tests
// ============================================================================

#[test]
fn test_lifecycle_scenario() {
    let dir = tempdir().unwrap();

    fileops_in(dir.path())
        .args(["create", "a.txt", "hello\n"])
        .assert()
        .success()
        .stdout("[SUCCESS]: Created file 'a.txt'\n");

    fileops_in(dir.path())
        .args(["update", "a.txt", "world\n", "--append"])
        .assert()
        .success()
        .stdout("[SUCCESS]: Updated file 'a.txt' (mode='append')\n");

    fileops_in(dir.path())
        .args(["read", "a.txt"])
        .assert()
        .success()
        .stdout("hello\nworld\n");

    fileops_in(dir.path())
        .args(["replace", "a.txt", "hello", "hi"])
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(dir.path().join("a.txt")).unwrap(),
        "hi\nworld\n"
    );

    fileops_in(dir.path())
        .args(["delete", "a.txt"])
        .assert()
        .success()
        .stdout("[SUCCESS]: Deleted file 'a.txt'\n");

    fileops_in(dir.path())
        .args(["read", "a.txt"])
        .assert()
        .failure()
        .code(1)
        .stdout("[ERROR]: File 'a.txt' not found.\n");
}

#[test]
fn test_create_existing_fails_and_keeps_content() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "original").unwrap();

    fileops_in(dir.path())
        .args(["create", "a.txt", "other"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("[WARNING]: File 'a.txt' already exists."));

    assert_eq!(fs::read_to_string(dir.path().join("a.txt")).unwrap(), "original");
}

#[test]
fn test_update_missing_fails() {
    let dir = tempdir().unwrap();

    fileops_in(dir.path())
        .args(["update", "missing.txt", "x"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Use create to create it."));

    assert!(!dir.path().join("missing.txt").exists());
}

#[test]
fn test_replace_without_match_succeeds() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("index.astro"), "<Hero />").unwrap();

    fileops_in(dir.path())
        .args(["replace", "index.astro", "<Footer />", "<div />"])
        .assert()
        .success()
        .stdout("[INFO]: No occurrences of '<Footer />' found in 'index.astro'.\n");
}

#[test]
fn test_create_from_stdin_with_nested_path() {
    let dir = tempdir().unwrap();

    fileops_in(dir.path())
        .args(["--quiet", "create", "src/layouts/Layout.astro", "--stdin"])
        .write_stdin("---\n---\n<body></body>\n")
        .assert()
        .success()
        .stdout("");

    assert_eq!(
        fs::read_to_string(dir.path().join("src/layouts/Layout.astro")).unwrap(),
        "---\n---\n<body></body>\n"
    );
}

#[test]
fn test_exists_exit_codes() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("package.json"), "{}").unwrap();

    fileops_in(dir.path())
        .args(["-q", "exists", "package.json"])
        .assert()
        .success();

    fileops_in(dir.path())
        .args(["-q", "exists", "astro.config.mjs"])
        .assert()
        .failure();
}

#[test]
fn test_json_output() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "ab ab").unwrap();

    let output = fileops_in(dir.path())
        .args(["--json", "replace", "a.txt", "ab", "c"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["operation"], "replace");
    assert_eq!(json["path"], "a.txt");
    assert_eq!(json["success"], true);
    assert_eq!(json["occurrences"], 2);
}

#[test]
fn test_json_read_includes_content() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "hello\nworld\n").unwrap();

    let output = fileops_in(dir.path())
        .args(["--json", "read", "a.txt"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["operation"], "read");
    assert_eq!(json["success"], true);
    assert_eq!(json["content"], "hello\nworld\n");
}

#[test]
fn test_json_failure_output() {
    let dir = tempdir().unwrap();

    let output = fileops_in(dir.path())
        .args(["--json", "delete", "ghost.txt"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["success"], false);
    assert!(json["message"].as_str().unwrap().contains("not found"));
}

#[test]
fn test_config_file_supplies_base_dir() {
    let dir = tempdir().unwrap();
    let site = dir.path().join("site");
    fs::create_dir(&site).unwrap();
    fs::write(site.join("package.json"), "{\"type\": \"module\"}").unwrap();
    let config = dir.path().join("fileops.toml");
    fs::write(
        &config,
        format!("base_dir = {:?}\n", site.to_string_lossy()),
    )
    .unwrap();

    Command::cargo_bin("fileops")
        .unwrap()
        .env_remove("FILEOPS_BASE_DIR")
        .arg("--config")
        .arg(&config)
        .args(["read", "package.json"])
        .assert()
        .success()
        .stdout("{\"type\": \"module\"}");
}

#[test]
fn test_unsupported_config_is_an_error() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("fileops.ini");
    fs::write(&config, "").unwrap();

    Command::cargo_bin("fileops")
        .unwrap()
        .arg("--config")
        .arg(&config)
        .args(["exists", "a.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported config format: ini"));
}
