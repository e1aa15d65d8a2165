//! Core configuration types for sheet lookups
//!
//! This module contains the main `LookupConfig` struct that defines where
//! the lookup table lives, how the client talks to it, and where recent
//! questions are persisted.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use crate::sheets::RetryConfig;

/// Main configuration struct for lookups and history
#[derive(Clone)]
pub struct LookupConfig {
    /// Spreadsheet id, the `SHEET_ID` part of
    /// `https://docs.google.com/spreadsheets/d/SHEET_ID/edit`
    pub(crate) sheet_id: String,

    /// Google API key restricted to the Sheets API.
    ///
    /// **INVARIANT:** never logged. `Debug` redacts it.
    pub(crate) api_key: String,

    /// A1 range to read; column A is the word, column B the video URL
    pub(crate) range: String,

    /// Scheme and host of the Sheets API, without trailing slash
    pub(crate) api_base: String,

    pub(crate) request_timeout: Duration,
    pub(crate) user_agent: String,

    /// JSON file holding recent questions
    pub(crate) history_path: PathBuf,

    /// Upper bound on remembered recent questions (>= 1)
    pub(crate) max_history: usize,

    /// Backoff policy for transient API failures
    pub(crate) retry: RetryConfig,
}

impl fmt::Debug for LookupConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LookupConfig")
            .field("sheet_id", &self.sheet_id)
            .field("api_key", &"<redacted>")
            .field("range", &self.range)
            .field("api_base", &self.api_base)
            .field("request_timeout", &self.request_timeout)
            .field("user_agent", &self.user_agent)
            .field("history_path", &self.history_path)
            .field("max_history", &self.max_history)
            .field("retry", &self.retry)
            .finish()
    }
}
