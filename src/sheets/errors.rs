//! Error types for sheet lookups
//!
//! This module defines the closed set of failure categories a lookup can
//! end in, classified by HTTP status, together with retry logic and the
//! actionable message shown to the user.

use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::utils::{MAX_ERROR_DETAIL_CHARS, truncate_detail};

/// Result type alias for lookup operations
pub type LookupResult<T> = Result<T, LookupError>;

/// Error types for lookup operations
///
/// "Key not found" is deliberately absent: it is a normal outcome,
/// see [`LookupOutcome::NotFound`](super::LookupOutcome::NotFound).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LookupError {
    /// Key is empty after trimming
    #[error("Lookup key is empty")]
    EmptyQuery,

    /// Key exceeds the accepted length
    #[error("Lookup key is too long ({len} characters, max {max})")]
    QueryTooLong { len: usize, max: usize },

    /// HTTP 400: bad range or malformed request
    #[error("Sheets API rejected the request: {0}")]
    BadRequest(String),

    /// HTTP 401/403: bad API key, API disabled, or sheet not shared
    #[error("Access to the sheet was denied (HTTP {status}): {detail}")]
    AccessDenied { status: u16, detail: String },

    /// HTTP 404: no such spreadsheet or tab
    #[error("Sheet not found: {0}")]
    SheetNotFound(String),

    /// HTTP 429
    #[error("Sheets API rate limit exceeded")]
    RateLimited { retry_after: Option<Duration> },

    /// HTTP 5xx
    #[error("Sheets API unavailable (HTTP {status}): {detail}")]
    ServiceUnavailable { status: u16, detail: String },

    /// Any other non-success status
    #[error("Unexpected Sheets API response (HTTP {status}): {detail}")]
    UnexpectedStatus { status: u16, detail: String },

    /// Request timed out
    #[error("Request to the Sheets API timed out")]
    Timeout,

    /// Connection or transport failure
    #[error("Network error: {0}")]
    Network(String),

    /// Body could not be parsed as a value range
    #[error("Malformed Sheets API response: {0}")]
    MalformedResponse(String),
}

/// Google API error envelope: `{ "error": { "code", "message", "status" } }`
#[derive(Debug, Deserialize)]
struct GoogleErrorEnvelope {
    error: GoogleErrorBody,
}

#[derive(Debug, Deserialize)]
struct GoogleErrorBody {
    #[serde(default)]
    message: String,
    #[serde(default)]
    status: Option<String>,
}

/// Best human-readable detail from an error response body
fn error_detail(body: &str) -> String {
    match serde_json::from_str::<GoogleErrorEnvelope>(body) {
        Ok(envelope) if !envelope.error.message.is_empty() => {
            let message = truncate_detail(&envelope.error.message, MAX_ERROR_DETAIL_CHARS);
            match envelope.error.status {
                Some(status) if !status.is_empty() => format!("{message} ({status})"),
                _ => message,
            }
        }
        _ => truncate_detail(body, MAX_ERROR_DETAIL_CHARS),
    }
}

impl LookupError {
    /// Classify a non-success HTTP response
    #[must_use]
    pub fn from_status(status: u16, body: &str, retry_after: Option<Duration>) -> Self {
        let detail = error_detail(body);
        match status {
            400 => LookupError::BadRequest(detail),
            401 | 403 => LookupError::AccessDenied { status, detail },
            404 => LookupError::SheetNotFound(detail),
            429 => LookupError::RateLimited { retry_after },
            500..=599 => LookupError::ServiceUnavailable { status, detail },
            _ => LookupError::UnexpectedStatus { status, detail },
        }
    }

    /// Check if error is transient and should be retried
    #[must_use]
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            LookupError::RateLimited { .. }
                | LookupError::ServiceUnavailable { .. }
                | LookupError::Timeout
                | LookupError::Network(_)
        )
    }

    /// Get suggested retry delay for transient errors
    ///
    /// A server-supplied `Retry-After` wins over the default.
    #[must_use]
    pub fn retry_delay(&self) -> Option<Duration> {
        match self {
            LookupError::RateLimited {
                retry_after: Some(delay),
            } => Some(*delay),
            e if e.is_transient() => Some(Duration::from_millis(100)),
            _ => None,
        }
    }

    /// Message suitable for showing to the person who asked
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            LookupError::EmptyQuery => "Please enter or speak a word first.".to_string(),
            LookupError::QueryTooLong { len, max } => format!(
                "That phrase is too long ({len} characters, max {max}). Please shorten it."
            ),
            LookupError::BadRequest(_) => {
                "The lookup table could not be read. Check the configured sheet range.".to_string()
            }
            LookupError::AccessDenied { .. } => "Access to the lookup table was denied. Check the \
                 API key and make sure the sheet is shared as \"Anyone with the link can view\"."
                .to_string(),
            LookupError::SheetNotFound(_) => {
                "The lookup table was not found. Check the configured sheet id.".to_string()
            }
            LookupError::RateLimited { .. } => {
                "Too many lookups right now. Please wait a moment and retry.".to_string()
            }
            LookupError::ServiceUnavailable { .. } => {
                "The lookup service is temporarily unavailable. Please retry shortly.".to_string()
            }
            LookupError::UnexpectedStatus { status, .. } => {
                format!("Failed to load video (HTTP {status}).")
            }
            LookupError::Timeout | LookupError::Network(_) => {
                "Failed to load video. Please check your internet connection.".to_string()
            }
            LookupError::MalformedResponse(_) => {
                "The lookup table returned data in an unexpected format.".to_string()
            }
        }
    }
}

impl From<reqwest::Error> for LookupError {
    fn from(error: reqwest::Error) -> Self {
        // The request URL carries the API key
        let error = error.without_url();
        if error.is_timeout() {
            LookupError::Timeout
        } else if error.is_decode() {
            LookupError::MalformedResponse(error.to_string())
        } else {
            LookupError::Network(error.to_string())
        }
    }
}

impl From<serde_json::Error> for LookupError {
    fn from(error: serde_json::Error) -> Self {
        LookupError::MalformedResponse(error.to_string())
    }
}

/// Retry configuration for lookup requests
#[derive(Debug, Clone, PartialEq)]
pub struct RetryConfig {
    /// Maximum number of attempts, including the first
    pub max_attempts: u32,
    /// Initial retry delay
    pub initial_delay: Duration,
    /// Backoff multiplier for exponential backoff
    pub backoff_multiplier: f64,
    /// Maximum retry delay
    pub max_delay: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_delay: Duration::from_millis(250),
            backoff_multiplier: 2.0,
            max_delay: Duration::from_secs(5),
        }
    }
}

impl RetryConfig {
    /// Single attempt, no retries
    #[must_use]
    pub fn no_retry() -> Self {
        Self {
            max_attempts: 1,
            ..Self::default()
        }
    }

    /// Calculate delay for given attempt number (0-based)
    #[must_use]
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let multiplier = self.backoff_multiplier.powi(attempt as i32);
        let delay_ms = (self.initial_delay.as_millis() as f64 * multiplier) as u64;
        let delay = Duration::from_millis(delay_ms);

        // Cap at max_delay
        if delay > self.max_delay {
            self.max_delay
        } else {
            delay
        }
    }

    /// Delay before the next attempt after `error`, capped at `max_delay`
    #[must_use]
    pub fn delay_after(&self, attempt: u32, error: &LookupError) -> Duration {
        let backoff = self.delay_for_attempt(attempt);
        let hinted = error.retry_delay().unwrap_or_default();
        backoff.max(hinted).min(self.max_delay)
    }
}
