//! Condensing many games at once.

use rayon::prelude::*;
use serde::Serialize;

use crate::condenser::{self, outcome, CondensedSummary, GameOutcome};

/// Summary of one game together with its detected outcome.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CondensedGame {
    #[serde(flatten)]
    pub summary: CondensedSummary,
    #[serde(flatten)]
    pub outcome: GameOutcome,
}

impl CondensedGame {
    /// Turn the game was decided on: the winning turn when known, else the turn count.
    pub fn decisive_turn(&self) -> u32 {
        self.outcome
            .winning_turn
            .unwrap_or(self.summary.turn_count)
    }
}

/// Condense one game, indexing its turns only once.
pub fn condense_game(raw_log: &str) -> CondensedGame {
    let spans = condenser::turn_spans(raw_log);
    CondensedGame {
        summary: condenser::condense_with_spans(raw_log, &spans),
        outcome: outcome::detect(raw_log, &spans),
    }
}

/// Condense every game, preserving input order.
///
/// Games are independent, so `parallel` fans them out over the rayon pool.
pub fn condense_games<S: AsRef<str> + Sync>(raw_logs: &[S], parallel: bool) -> Vec<CondensedGame> {
    let games: Vec<CondensedGame> = if parallel {
        raw_logs
            .par_iter()
            .map(|log| condense_game(log.as_ref()))
            .collect()
    } else {
        raw_logs
            .iter()
            .map(|log| condense_game(log.as_ref()))
            .collect()
    };

    tracing::debug!(games = games.len(), parallel, "condensed games");
    games
}
