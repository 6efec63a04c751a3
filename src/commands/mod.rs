//! Subcommand handlers for the matchlog binary.

pub mod condense;
pub mod config;
pub mod payload;

use anyhow::{Context, Result};
use serde::Serialize;

use matchlog::cli::InputArgs;
use matchlog::input;
use matchlog::Config;

/// Load the transcripts named by `args`, or stdin when no path is given.
pub fn load_logs(args: &InputArgs, config: &Config) -> Result<Vec<String>> {
    let split = config.batch.split_games && !args.no_split;

    let logs = if args.paths.is_empty() {
        tracing::debug!("reading transcript from stdin");
        input::read_logs_from(std::io::stdin().lock(), split)?
    } else {
        input::read_logs(args.paths.as_slice(), split)?
    };

    tracing::info!(games = logs.len(), "loaded game logs");
    Ok(logs)
}

/// Serialize `value` as JSON and print it on stdout.
pub fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .context("Failed to serialize output")?;
    println!("{}", json);
    Ok(())
}
