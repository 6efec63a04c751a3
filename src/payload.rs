//! Structured per-deck outcome payload handed to the downstream judge.
//!
//! Only the data is built here. Turning it into a prompt and calling a model
//! is the caller's job.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::batch::CondensedGame;

/// A deck taking part in the games.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckInfo {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decklist: Option<String>,
}

/// Win/loss record of one deck across all games.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckOutcome {
    pub wins: u32,
    /// Decisive turn of every game this deck won.
    pub winning_turns: Vec<u32>,
    /// Decisive turn of every game another deck won.
    pub turns_lost_on: Vec<u32>,
}

/// Everything the judge needs besides the condensed games themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzePayload {
    pub decks: Vec<DeckInfo>,
    pub total_games: usize,
    pub outcomes: BTreeMap<String, DeckOutcome>,
}

/// Build the payload from condensed games.
///
/// A deck wins a game when the game's winner contains the deck's name. Games
/// without a detected winner only count toward `total_games`. Decklists pair
/// with deck names by index.
pub fn build_analyze_payload(
    games: &[CondensedGame],
    deck_names: &[String],
    deck_lists: &[String],
) -> AnalyzePayload {
    let decks = deck_names
        .iter()
        .enumerate()
        .map(|(i, name)| DeckInfo {
            name: name.clone(),
            decklist: deck_lists.get(i).cloned(),
        })
        .collect();

    let mut outcomes: BTreeMap<String, DeckOutcome> = deck_names
        .iter()
        .map(|name| (name.clone(), DeckOutcome::default()))
        .collect();

    for game in games {
        let Some(winner) = game.outcome.winner.as_deref() else {
            continue;
        };
        let turn = game.decisive_turn();

        for (name, outcome) in outcomes.iter_mut() {
            if winner.contains(name.as_str()) {
                outcome.wins += 1;
                outcome.winning_turns.push(turn);
            } else {
                outcome.turns_lost_on.push(turn);
            }
        }
    }

    AnalyzePayload {
        decks,
        total_games: games.len(),
        outcomes,
    }
}
