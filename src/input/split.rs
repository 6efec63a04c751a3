//! Splitting of files that hold several games back to back.

use crate::condenser::patterns::GAME_RESULT;

/// Split a log into one transcript per game.
///
/// A game ends at (and includes) each `Game Result: Game N ended` line. Text
/// after the last result line forms a final game when it is not blank. A log
/// without any result line is returned whole.
pub fn split_games(raw: &str) -> Vec<String> {
    let mut games = Vec::new();
    let mut current = String::new();

    for line in raw.lines() {
        current.push_str(line);
        current.push('\n');
        if GAME_RESULT.is_match(line) {
            games.push(std::mem::take(&mut current));
        }
    }

    if games.is_empty() {
        return vec![raw.to_string()];
    }

    let remaining = current.trim();
    if !remaining.is_empty() {
        games.push(remaining.to_string());
    }

    tracing::debug!(games = games.len(), "split concatenated log");
    games
}
