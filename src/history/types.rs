//! Recent-question record and history error types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// A past lookup key and when it was asked
///
/// Persisted as `{ "word": "hello", "timestamp": 1718000000000 }` with the
/// timestamp in Unix milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentQuestion {
    /// Trimmed, lowercased key
    pub word: String,

    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
}

impl RecentQuestion {
    #[must_use]
    pub fn new(word: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            word: word.into(),
            timestamp,
        }
    }
}

/// Result type alias for history operations
pub type HistoryResult<T> = Result<T, HistoryError>;

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("History I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize history: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The history file exists but is not a valid question list
    #[error("History file {path:?} is corrupt: {message}")]
    Corrupt { path: PathBuf, message: String },
}
