//! Payload command handler

use std::fs;

use anyhow::{Context, Result};

use matchlog::batch::condense_games;
use matchlog::cli::PayloadArgs;
use matchlog::payload::build_analyze_payload;
use matchlog::Config;

use super::{load_logs, print_json};

/// Condense the games and print the per-deck outcome payload.
pub fn handle(args: &PayloadArgs, config: &Config) -> Result<()> {
    let logs = load_logs(&args.input, config).context("condensation failed")?;
    let parallel = config.batch.parallel && !args.input.sequential;
    let games = condense_games(&logs, parallel);

    let deck_names = if args.decks.is_empty() {
        config.decks.names.clone()
    } else {
        args.decks.clone()
    };

    let deck_lists = args
        .decklists
        .iter()
        .map(|path| {
            fs::read_to_string(path)
                .with_context(|| format!("Failed to read decklist: {}", path.display()))
        })
        .collect::<Result<Vec<_>>>()?;

    if deck_lists.len() > deck_names.len() {
        tracing::warn!(
            decks = deck_names.len(),
            decklists = deck_lists.len(),
            "more decklists than decks, extra decklists ignored"
        );
    }

    let payload = build_analyze_payload(&games, &deck_names, &deck_lists);
    print_json(&payload, args.output.pretty_or(config.output.pretty))
}
