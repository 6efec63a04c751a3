//! Tests for the matchlog binary.

use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

use super::helpers::{fixtures_dir, matchlog, temp_fixture};

fn stdout_json(output: &std::process::Output) -> Value {
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}

#[test]
fn condense_file_prints_one_digest_per_game() {
    let config_dir = TempDir::new().unwrap();
    let (_dir, path) = temp_fixture("two_games.txt");

    let output = matchlog(&config_dir)
        .args(["condense", "--compact"])
        .arg(&path)
        .output()
        .unwrap();

    assert!(output.status.success());
    let games = stdout_json(&output);
    let games = games.as_array().unwrap();
    assert_eq!(games.len(), 2);
    assert_eq!(games[0]["turn_count"], 2);
    assert_eq!(games[0]["winner"], "Krenko");
    assert_eq!(games[1]["turn_count"], 3);
    assert_eq!(games[1]["winning_turn"], 3);
    assert_eq!(games[1]["kept_events"][0]["type"], "spell_cast_high_cmc");
}

#[test]
fn no_split_keeps_file_as_one_game() {
    let config_dir = TempDir::new().unwrap();
    let (_dir, path) = temp_fixture("two_games.txt");

    let output = matchlog(&config_dir)
        .args(["condense", "--no-split", "--sequential"])
        .arg(&path)
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(stdout_json(&output).as_array().unwrap().len(), 1);
}

#[test]
fn condense_reads_stdin_when_no_path_given() {
    let config_dir = TempDir::new().unwrap();

    let output = matchlog(&config_dir)
        .arg("condense")
        .write_stdin("Turn 1: A\nPlayer B loses 2 life.\n")
        .output()
        .unwrap();

    assert!(output.status.success());
    let games = stdout_json(&output);
    assert_eq!(games[0]["kept_events"][0]["type"], "life_change");
    assert_eq!(games[0]["turn_count"], 1);
}

#[test]
fn empty_stdin_yields_empty_digest() {
    let config_dir = TempDir::new().unwrap();

    let output = matchlog(&config_dir)
        .arg("condense")
        .write_stdin("")
        .output()
        .unwrap();

    assert!(output.status.success());
    let games = stdout_json(&output);
    assert_eq!(games[0]["kept_events"], Value::Array(vec![]));
    assert_eq!(games[0]["turn_count"], 0);
    assert!(games[0]["mana_per_turn"].as_object().unwrap().is_empty());
    assert!(games[0]["cards_drawn_per_turn"].as_object().unwrap().is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("some logs had no turns or events"));
}

#[test]
fn missing_log_reports_condensation_failure() {
    let config_dir = TempDir::new().unwrap();

    matchlog(&config_dir)
        .args(["condense", "/nonexistent/matchlog/game.txt"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("condensation failed"));
}

#[test]
fn directory_input_is_scanned() {
    let config_dir = TempDir::new().unwrap();

    let output = matchlog(&config_dir)
        .args(["condense", "--no-split"])
        .arg(fixtures_dir())
        .output()
        .unwrap();

    assert!(output.status.success());
    // krenko_decklist, metrics_shape, noise_only, reanimate, two_games
    assert_eq!(stdout_json(&output).as_array().unwrap().len(), 5);
}

#[test]
fn payload_uses_given_deck_names() {
    let config_dir = TempDir::new().unwrap();

    let output = matchlog(&config_dir)
        .args(["payload", "--deck", "Krenko", "--deck", "Atraxa", "--decklist"])
        .arg(fixtures_dir().join("krenko_decklist.txt"))
        .arg(fixtures_dir().join("two_games.txt"))
        .output()
        .unwrap();

    assert!(output.status.success());
    let payload = stdout_json(&output);
    assert_eq!(payload["total_games"], 2);
    assert_eq!(payload["outcomes"]["Krenko"]["wins"], 1);
    assert_eq!(payload["outcomes"]["Atraxa"]["winning_turns"][0], 3);
    assert!(payload["decks"][0]["decklist"]
        .as_str()
        .unwrap()
        .contains("Goblin Guide"));
    assert!(payload["decks"][1].get("decklist").is_none());
}

#[test]
fn payload_defaults_to_configured_decks() {
    let config_dir = TempDir::new().unwrap();

    let output = matchlog(&config_dir)
        .arg("payload")
        .arg(fixtures_dir().join("two_games.txt"))
        .output()
        .unwrap();

    assert!(output.status.success());
    let payload = stdout_json(&output);
    assert_eq!(payload["decks"].as_array().unwrap().len(), 4);
    assert_eq!(payload["decks"][0]["name"], "Deck 1");
}

#[test]
fn config_path_honors_env_override() {
    let config_dir = TempDir::new().unwrap();
    let expected = config_dir.path().join("config.toml");

    matchlog(&config_dir)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(expected.to_string_lossy().to_string()));
}

#[test]
fn config_init_refuses_to_overwrite() {
    let config_dir = TempDir::new().unwrap();

    matchlog(&config_dir)
        .args(["config", "init"])
        .assert()
        .success();
    assert!(config_dir.path().join("config.toml").exists());

    matchlog(&config_dir)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    matchlog(&config_dir)
        .args(["config", "init", "--force"])
        .assert()
        .success();
}

#[test]
fn config_file_controls_output_format() {
    let config_dir = TempDir::new().unwrap();
    std::fs::write(
        config_dir.path().join("config.toml"),
        "[output]\npretty = false\n",
    )
    .unwrap();

    matchlog(&config_dir)
        .arg("condense")
        .write_stdin("Turn 1: A\n")
        .assert()
        .success()
        .stdout(predicate::str::is_match("^\\[\\{.*\\}\\]\n$").unwrap());
}

#[test]
fn config_show_prints_toml() {
    let config_dir = TempDir::new().unwrap();

    matchlog(&config_dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[batch]"))
        .stdout(predicate::str::contains("split_games = true"));
}

#[test]
fn completions_are_generated() {
    let config_dir = TempDir::new().unwrap();

    matchlog(&config_dir)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("matchlog"));
}
