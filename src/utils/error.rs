//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while analysing a log file
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Cannot read log file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed timestamp '{text}' on line {line}: {source}")]
    Timestamp {
        line: usize,
        text: String,
        #[source]
        source: TimestampError,
    },
}

/// Why a bracketed timestamp was rejected
#[derive(Error, Debug)]
pub enum TimestampError {
    #[error("expected YYYY-MM-DD HH:MM:SS")]
    Layout,

    #[error(transparent)]
    Invalid(#[from] chrono::ParseError),
}

impl AnalysisError {
    /// True when the log source could not be opened or read
    pub fn is_io(&self) -> bool {
        matches!(self, AnalysisError::Io { .. })
    }

    /// True when a matched line carried an unparseable timestamp
    pub fn is_parse(&self) -> bool {
        matches!(self, AnalysisError::Timestamp { .. })
    }
}
