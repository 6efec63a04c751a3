//! Tests for batch condensing and the per-deck payload.

use super::helpers::read_fixture;
use matchlog::input::split_games;
use matchlog::{build_analyze_payload, condense_games};

#[test]
fn batch_over_fixture_detects_both_outcomes() {
    let games = condense_games(&split_games(&read_fixture("two_games.txt")), true);

    assert_eq!(games.len(), 2);
    assert_eq!(games[0].outcome.winner.as_deref(), Some("Krenko"));
    assert_eq!(games[0].outcome.winning_turn, Some(2));
    assert_eq!(games[1].outcome.winner.as_deref(), Some("Atraxa"));
    assert_eq!(games[1].outcome.winning_turn, Some(3));
}

#[test]
fn payload_over_fixture() {
    let games = condense_games(&split_games(&read_fixture("two_games.txt")), false);
    let decks = vec!["Krenko".to_string(), "Atraxa".to_string(), "Edgar".to_string()];
    let payload = build_analyze_payload(&games, &decks, &[]);

    assert_eq!(payload.total_games, 2);
    assert_eq!(payload.decks.len(), 3);

    assert_eq!(payload.outcomes["Krenko"].wins, 1);
    assert_eq!(payload.outcomes["Krenko"].winning_turns, vec![2]);
    assert_eq!(payload.outcomes["Krenko"].turns_lost_on, vec![3]);

    assert_eq!(payload.outcomes["Edgar"].wins, 0);
    assert_eq!(payload.outcomes["Edgar"].turns_lost_on, vec![2, 3]);
}
