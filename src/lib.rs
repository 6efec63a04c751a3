//! matchlog - Match Log Condenser
//!
//! Turns free-form, turn-delimited match transcripts into compact structured
//! digests that a downstream judge can reason over cheaply.
//!
//! The core is [`condenser::condense`]. [`batch`] condenses many games and
//! attaches their outcome, [`payload`] aggregates outcomes per deck, and
//! [`input`] loads transcripts from disk.

pub mod batch;
pub mod cli;
pub mod condenser;
pub mod config;
pub mod input;
pub mod payload;

pub use batch::{condense_game, condense_games, CondensedGame};
pub use condenser::{condense, CondensedSummary, EventKind, KeptEvent, TurnManaInfo};
pub use config::Config;
pub use payload::{build_analyze_payload, AnalyzePayload};
