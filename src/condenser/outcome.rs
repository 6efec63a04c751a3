//! Winner and decisive-turn detection.

use serde::{Deserialize, Serialize};

use super::patterns::{WINNER, WIN_CONDITION};
use super::turns::{span_at, turn_count};
use super::types::TurnSpan;

/// Who won a game and on which turn it ended.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOutcome {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winner: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winning_turn: Option<u32>,
}

/// Detect the outcome of one game.
pub fn detect(log: &str, spans: &[TurnSpan]) -> GameOutcome {
    GameOutcome {
        winner: detect_winner(log),
        winning_turn: winning_turn(log, spans),
    }
}

/// The subject of the first "X wins the game" / "X has won" phrase.
///
/// Only the last sentence before the phrase is kept, so
/// `Game Over. Player A wins the game.` yields `Player A`.
pub fn detect_winner(log: &str) -> Option<String> {
    let caps = WINNER.captures(log)?;
    let subject = caps.get(1)?.as_str();
    let name = subject
        .rsplit(|c| matches!(c, '.' | '!' | '?' | ';'))
        .next()
        .unwrap_or(subject)
        .trim();
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

/// Turn number of the span holding the first win-condition line.
///
/// Falls back to the highest turn number when no win line lies inside a turn,
/// and to `None` when the log has no turns at all.
pub fn winning_turn(log: &str, spans: &[TurnSpan]) -> Option<u32> {
    if spans.is_empty() {
        return None;
    }

    let mut offset = 0;
    for line in log.split_inclusive('\n') {
        if WIN_CONDITION.is_match(line) {
            if let Some(span) = span_at(spans, offset) {
                return Some(span.turn_number);
            }
        }
        offset += line.len();
    }

    Some(turn_count(spans))
}
