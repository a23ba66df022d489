//! CLI command implementations for Monpoke.

pub(crate) mod play;
pub(crate) mod validate;

mod output;

use clap::ValueEnum;
use std::error::Error;
use std::fmt;
use std::fs;
use std::io::{self, BufRead};
use std::path::Path;

/// Output format for the `play` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// One narration (or error message) per command.
    Text,
    /// One JSON object per command.
    Json,
}

/// CLI error type.
#[derive(Debug)]
pub(crate) struct CliError {
    message: String,
}

impl CliError {
    /// Create a new CLI error.
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for CliError {}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::new(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::new(format!("JSON serialization failed: {e}"))
    }
}

/// Boxed stream of input lines.
pub(crate) type Lines = Box<dyn Iterator<Item = io::Result<String>>>;

/// Open the command source.
///
/// A path is read fully and split on `\n` with `\r` removed. No path (or `-`)
/// streams standard input line by line.
pub(crate) fn open_lines(input: Option<&Path>) -> Result<Lines, CliError> {
    match input {
        Some(path) if path != Path::new("-") => {
            let content = fs::read_to_string(path).map_err(|e| {
                CliError::new(format!("Failed to read {}: {e}", path.display()))
            })?;
            let lines: Vec<io::Result<String>> = content
                .split('\n')
                .map(|s| Ok(s.replace('\r', "")))
                .collect();
            Ok(Box::new(lines.into_iter()))
        }
        _ => Ok(Box::new(io::stdin().lock().lines())),
    }
}
