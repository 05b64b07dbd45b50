//! Integration tests for szwrap-cli.
//!
//! Note: Tests use `unwrap`/`expect` which is acceptable in test code.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn szwrap_cmd() -> Command {
    cargo_bin_cmd!("szwrap")
}

/// Writes a plain file standing in for the executable. Commands using it
/// exercise validation paths that must fail before any spawn.
fn dummy_exe(temp: &TempDir) -> std::path::PathBuf {
    let exe = temp.path().join("7z");
    fs::write(&exe, "not a real binary").unwrap();
    exe
}

#[test]
fn test_version_flag() {
    szwrap_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("szwrap"));
}

#[test]
fn test_help_flag() {
    szwrap_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Command-line front-end"));
}

#[test]
fn test_create_help() {
    szwrap_cmd()
        .arg("create")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Create a 7z archive"));
}

#[test]
fn test_missing_executable_is_reported() {
    szwrap_cmd()
        .arg("--seven-zip")
        .arg("/definitely/not/a/real/7z")
        .arg("test")
        .arg("whatever.7z")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no 7-Zip executable found"))
        .stderr(predicate::str::contains("--seven-zip"));
}

#[test]
fn test_extract_missing_archive_fails_validation() {
    let temp = TempDir::new().unwrap();
    let exe = dummy_exe(&temp);

    szwrap_cmd()
        .arg("--seven-zip")
        .arg(&exe)
        .arg("extract")
        .arg(temp.path().join("absent.7z"))
        .arg(temp.path().join("out"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("archive does not exist"));
}

#[test]
fn test_create_duplicate_basenames_fails_validation() {
    let temp = TempDir::new().unwrap();
    let exe = dummy_exe(&temp);

    szwrap_cmd()
        .arg("--seven-zip")
        .arg(&exe)
        .arg("create")
        .arg(temp.path().join("out.7z"))
        .arg(temp.path().join("x/same.txt"))
        .arg(temp.path().join("y/same.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("same.txt"))
        .stderr(predicate::str::contains("HINT"));
}

#[test]
fn test_create_quoted_password_rejected() {
    let temp = TempDir::new().unwrap();
    let exe = dummy_exe(&temp);
    let input = temp.path().join("a.txt");
    fs::write(&input, "a").unwrap();

    szwrap_cmd()
        .arg("--seven-zip")
        .arg(&exe)
        .arg("create")
        .arg(temp.path().join("out.7z"))
        .arg(&input)
        .arg("--password")
        .arg(r#"has"quote"#)
        .assert()
        .failure()
        .stderr(predicate::str::contains("double quotes"));
}

#[test]
fn test_invalid_overwrite_mode_rejected_by_parser() {
    szwrap_cmd()
        .arg("extract")
        .arg("whatever.7z")
        .arg("--overwrite")
        .arg("prompt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid overwrite mode"));
}

#[test]
fn test_verbosity_out_of_range_rejected_by_parser() {
    szwrap_cmd()
        .arg("test")
        .arg("whatever.7z")
        .arg("--verbosity")
        .arg("7")
        .assert()
        .failure()
        .stderr(predicate::str::contains("level must be 0-3"));
}

#[test]
fn test_encrypt_headers_requires_password() {
    szwrap_cmd()
        .arg("create")
        .arg("out.7z")
        .arg("in.txt")
        .arg("--encrypt-headers")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--password"));
}
