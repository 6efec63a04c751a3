//! Condense command handler

use anyhow::{Context, Result};

use matchlog::batch::condense_games;
use matchlog::cli::CondenseArgs;
use matchlog::Config;

use super::{load_logs, print_json};

/// Condense every game and print the digests as one JSON array.
///
/// Nothing is printed unless every log was loaded and condensed.
pub fn handle(args: &CondenseArgs, config: &Config) -> Result<()> {
    let logs = load_logs(&args.input, config).context("condensation failed")?;
    let parallel = config.batch.parallel && !args.input.sequential;

    let games = condense_games(&logs, parallel);
    tracing::info!(games = games.len(), "condensed game logs");

    let empty = games.iter().filter(|game| game.summary.is_empty()).count();
    if empty > 0 {
        tracing::warn!(empty, "some logs had no turns or events");
    }

    print_json(&games, args.output.pretty_or(config.output.pretty))
}
