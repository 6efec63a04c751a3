//! Command-line interface definition.
//!
//! Lives in the library so `xtask` can render man pages from it.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// Version string: `0.1.0 (abc1234 2026-01-01)` for dev builds.
#[cfg(not(feature = "release"))]
pub const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    " ",
    env!("MATCHLOG_BUILD_DATE"),
    ")"
);

/// Version string: `0.1.0 (2026-01-01)` for release builds.
#[cfg(feature = "release")]
pub const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("MATCHLOG_BUILD_DATE"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "matchlog")]
#[command(author, version = VERSION, about = "Condense match transcripts into compact JSON digests", long_about = None)]
pub struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Use this config file instead of the default location
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Condense game logs into a JSON array of digests, one per game
    Condense(CondenseArgs),

    /// Build the per-deck outcome payload for downstream analysis
    Payload(PayloadArgs),

    /// Inspect or initialize the configuration file
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Options shared by every command that reads game logs.
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Log files or directories of *.txt logs (reads stdin when omitted)
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Treat each file as a single game even if it holds several results
    #[arg(long)]
    pub no_split: bool,

    /// Condense games one after another instead of in parallel
    #[arg(long)]
    pub sequential: bool,
}

/// Output formatting flags.
#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// Pretty-print JSON
    #[arg(long, conflicts_with = "compact")]
    pub pretty: bool,

    /// Single-line JSON
    #[arg(long)]
    pub compact: bool,
}

impl OutputArgs {
    /// Resolve against the configured default.
    pub fn pretty_or(&self, default: bool) -> bool {
        if self.pretty {
            true
        } else if self.compact {
            false
        } else {
            default
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct CondenseArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args, Debug, Clone)]
pub struct PayloadArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub output: OutputArgs,

    /// Deck name (repeatable; defaults to the configured names)
    #[arg(long = "deck", value_name = "NAME")]
    pub decks: Vec<String>,

    /// Decklist file, paired with --deck by position (repeatable)
    #[arg(long = "decklist", value_name = "FILE")]
    pub decklists: Vec<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,

    /// Print the config file location
    Path,

    /// Write a config file with default settings
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
