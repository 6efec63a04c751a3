//! Log loading errors.

use std::path::PathBuf;

/// Errors that can occur while collecting or reading transcripts.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("Log path not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read transcript from stdin: {0}")]
    Stdin(#[source] std::io::Error),

    #[error("No game logs found")]
    NoLogs,
}
