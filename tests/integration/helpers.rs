//! Shared helpers for integration tests.

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// Directory holding the transcript fixtures.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Read a fixture into a string.
pub fn read_fixture(name: &str) -> String {
    fs::read_to_string(fixtures_dir().join(name))
        .unwrap_or_else(|e| panic!("missing fixture {}: {}", name, e))
}

/// Copy a fixture into a fresh temp dir; keep the `TempDir` alive while using the path.
pub fn temp_fixture(name: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join(name);
    fs::copy(fixtures_dir().join(name), &path).expect("Failed to copy fixture");
    (temp_dir, path)
}

/// The matchlog binary, isolated from the user's config file.
pub fn matchlog(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("matchlog").expect("binary should build");
    cmd.env("MATCHLOG_CONFIG", config_dir.path().join("config.toml"))
        .env_remove("RUST_LOG");
    cmd
}
