#![allow(clippy::unwrap_used)]
#![allow(missing_docs)]

use assert_cmd::Command;
use predicates::prelude::predicate;

fn moviedb_cmd() -> Command {
    let mut cmd = Command::cargo_bin("moviedb").unwrap();
    cmd.env_remove("MOVIEDB_API_TOKEN");
    cmd
}

#[test]
fn test_help() {
    // Arrange & Act & Assert
    moviedb_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("discover"))
        .stdout(predicate::str::contains("search"))
        .stdout(predicate::str::contains("browse"));
}

#[test]
fn test_discover_help() {
    // Arrange & Act & Assert
    moviedb_cmd()
        .args(["discover", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--page"));
}

#[test]
fn test_search_help() {
    // Arrange & Act & Assert
    moviedb_cmd()
        .args(["search", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--query"));
}

#[test]
fn test_search_missing_query() {
    // Arrange & Act & Assert
    moviedb_cmd()
        .args(["search"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--query"));
}

#[test]
fn test_details_missing_id() {
    // Arrange & Act & Assert
    moviedb_cmd()
        .args(["details"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--id"));
}

#[test]
fn test_credits_missing_id() {
    // Arrange & Act & Assert
    moviedb_cmd()
        .args(["credits"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--id"));
}

#[test]
fn test_missing_api_token_fails() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();

    // Act & Assert: empty config dir and no env var means no token
    moviedb_cmd()
        .args(["discover", "--dir"])
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("no API token configured"));
}

#[test]
fn test_empty_config_token_fails() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("config.toml"), "[auth]\napi_token = \"\"\n").unwrap();

    // Act & Assert
    moviedb_cmd()
        .args(["discover", "--dir"])
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("no API token configured"));
}

#[test]
fn test_malformed_config_fails() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("config.toml"), "not toml {{{").unwrap();

    // Act & Assert
    moviedb_cmd()
        .args(["discover", "--dir"])
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load config"));
}

#[test]
fn test_version() {
    // Arrange & Act & Assert
    moviedb_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}
