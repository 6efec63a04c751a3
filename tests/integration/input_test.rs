//! Tests for loading and splitting transcripts from disk.

use std::fs;

use tempfile::TempDir;

use super::helpers::{fixtures_dir, read_fixture};
use matchlog::input::{read_logs, split_games, InputError};

#[test]
fn concatenated_fixture_splits_into_two_games() {
    let games = split_games(&read_fixture("two_games.txt"));
    assert_eq!(games.len(), 2);
    assert!(games[0].starts_with("Turn 1: Krenko"));
    assert!(games[0].trim_end().ends_with("Game 1 ended in 120 seconds"));
    assert!(games[1].starts_with("Turn 1: Atraxa"));
}

#[test]
fn files_are_read_in_path_order() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("02-second.txt"), "Turn 2: B\n").unwrap();
    fs::write(dir.path().join("01-first.txt"), "Turn 1: A\n").unwrap();

    let logs = read_logs(&[dir.path()], true).unwrap();
    assert_eq!(logs, vec!["Turn 1: A\n".to_string(), "Turn 2: B\n".to_string()]);
}

#[test]
fn mixing_files_and_directories() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("extra.txt"), "Turn 7: Z\n").unwrap();

    let paths = vec![fixtures_dir().join("two_games.txt"), dir.path().to_path_buf()];
    let logs = read_logs(&paths, true).unwrap();
    assert_eq!(logs.len(), 3);
    assert_eq!(logs[2], "Turn 7: Z\n");
}

#[test]
fn missing_path_error_names_the_path() {
    let err = read_logs(&[fixtures_dir().join("does-not-exist.txt")], true).unwrap_err();
    assert!(matches!(err, InputError::NotFound { .. }));
    assert!(err.to_string().contains("does-not-exist.txt"));
}
