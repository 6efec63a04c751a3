//! Transcript loading from files, directories and stdin.

mod error;
mod split;

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

pub use error::InputError;
pub use split::split_games;

/// Extension of transcript files picked up from directories.
const LOG_EXTENSION: &str = "txt";

/// Expand the given paths into a list of transcript files.
///
/// Files are taken as given. Directories contribute their `*.txt` entries
/// (non-recursive), sorted so the game order is stable between runs.
pub fn collect_log_files<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<PathBuf>, InputError> {
    let mut files = Vec::new();

    for path in paths {
        let path = path.as_ref();
        if path.is_file() {
            files.push(path.to_path_buf());
        } else if path.is_dir() {
            let entries = fs::read_dir(path).map_err(|source| InputError::Read {
                path: path.to_path_buf(),
                source,
            })?;
            let mut found: Vec<PathBuf> = entries
                .filter_map(|entry| entry.ok().map(|e| e.path()))
                .filter(|p| p.is_file() && p.extension().map_or(false, |ext| ext == LOG_EXTENSION))
                .collect();
            found.sort();
            tracing::debug!(dir = %path.display(), files = found.len(), "scanned log directory");
            files.extend(found);
        } else {
            return Err(InputError::NotFound {
                path: path.to_path_buf(),
            });
        }
    }

    Ok(files)
}

/// Read every transcript under `paths`, one entry per game.
///
/// With `split` set, files holding several concatenated games are split
/// with [`split_games`].
pub fn read_logs<P: AsRef<Path>>(paths: &[P], split: bool) -> Result<Vec<String>, InputError> {
    let files = collect_log_files(paths)?;
    if files.is_empty() {
        return Err(InputError::NoLogs);
    }

    let mut logs = Vec::new();
    for file in &files {
        let content = fs::read_to_string(file).map_err(|source| InputError::Read {
            path: file.clone(),
            source,
        })?;
        tracing::debug!(path = %file.display(), bytes = content.len(), "read log file");
        push_games(&mut logs, content, split);
    }

    Ok(logs)
}

/// Read transcripts from a reader (usually stdin).
pub fn read_logs_from<R: Read>(mut reader: R, split: bool) -> Result<Vec<String>, InputError> {
    let mut content = String::new();
    reader
        .read_to_string(&mut content)
        .map_err(InputError::Stdin)?;

    let mut logs = Vec::new();
    push_games(&mut logs, content, split);
    Ok(logs)
}

fn push_games(logs: &mut Vec<String>, content: String, split: bool) {
    if split {
        logs.extend(split_games(&content));
    } else {
        logs.push(content);
    }
}
