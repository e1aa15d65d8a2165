//! Type-safe builder for `LookupConfig` using the typestate pattern
//!
//! This module provides a fluent builder interface with compile-time validation
//! ensuring that the sheet id and API key are set before building a `LookupConfig`.

use crate::sheets::RetryConfig;
use crate::utils::{
    DEFAULT_MAX_RECENT_QUESTIONS, DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_SHEET_RANGE,
    DEFAULT_SHEETS_API_BASE, USER_AGENT, is_valid_url,
};
use anyhow::{Result, anyhow, bail};
use std::marker::PhantomData;
use std::path::PathBuf;
use std::time::Duration;

use super::env::default_history_path;
use super::types::LookupConfig;

// Type states for the builder
pub struct WithSheetId;
pub struct WithApiKey;

pub struct LookupConfigBuilder<State = ()> {
    pub(crate) sheet_id: Option<String>,
    pub(crate) api_key: Option<String>,
    pub(crate) range: String,
    pub(crate) api_base: String,
    pub(crate) request_timeout: Duration,
    pub(crate) user_agent: String,
    pub(crate) history_path: Option<PathBuf>,
    pub(crate) max_history: usize,
    pub(crate) retry: RetryConfig,
    pub(crate) _phantom: PhantomData<State>,
}

impl Default for LookupConfigBuilder<()> {
    fn default() -> Self {
        Self {
            sheet_id: None,
            api_key: None,
            range: DEFAULT_SHEET_RANGE.to_string(),
            api_base: DEFAULT_SHEETS_API_BASE.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            user_agent: USER_AGENT.to_string(),
            history_path: None,
            max_history: DEFAULT_MAX_RECENT_QUESTIONS,
            retry: RetryConfig::default(),
            _phantom: PhantomData,
        }
    }
}

impl LookupConfig {
    /// Create a builder for configuring a `LookupConfig` with a fluent interface
    #[must_use]
    pub fn builder() -> LookupConfigBuilder<()> {
        LookupConfigBuilder::default()
    }
}

impl<State> LookupConfigBuilder<State> {
    fn transition<Next>(self) -> LookupConfigBuilder<Next> {
        LookupConfigBuilder {
            sheet_id: self.sheet_id,
            api_key: self.api_key,
            range: self.range,
            api_base: self.api_base,
            request_timeout: self.request_timeout,
            user_agent: self.user_agent,
            history_path: self.history_path,
            max_history: self.max_history,
            retry: self.retry,
            _phantom: PhantomData,
        }
    }
}

impl LookupConfigBuilder<()> {
    pub fn sheet_id(mut self, sheet_id: impl Into<String>) -> LookupConfigBuilder<WithSheetId> {
        self.sheet_id = Some(sheet_id.into().trim().to_string());
        self.transition()
    }
}

impl LookupConfigBuilder<WithSheetId> {
    pub fn api_key(mut self, api_key: impl Into<String>) -> LookupConfigBuilder<WithApiKey> {
        self.api_key = Some(api_key.into().trim().to_string());
        self.transition()
    }
}

// Build method only available when all required fields are set
impl LookupConfigBuilder<WithApiKey> {
    pub fn build(self) -> Result<LookupConfig> {
        let sheet_id = self
            .sheet_id
            .filter(|id| !id.is_empty())
            .ok_or_else(|| anyhow!("Sheet id must not be empty"))?;
        let api_key = self
            .api_key
            .filter(|key| !key.is_empty())
            .ok_or_else(|| anyhow!("API key must not be empty"))?;

        let range = self.range.trim().to_string();
        if range.is_empty() {
            bail!("Sheet range must not be empty");
        }

        // Normalize: no trailing slash so path joins stay single-slashed
        let api_base = self.api_base.trim().trim_end_matches('/').to_string();
        if !is_valid_url(&api_base) {
            bail!("Invalid API base URL '{api_base}': expected an http(s) URL");
        }

        if self.request_timeout.is_zero() {
            bail!("Request timeout must be greater than zero");
        }

        if self.max_history == 0 {
            bail!("History size must be at least 1");
        }

        if self.retry.max_attempts == 0 {
            bail!("Retry policy must allow at least one attempt");
        }

        Ok(LookupConfig {
            sheet_id,
            api_key,
            range,
            api_base,
            request_timeout: self.request_timeout,
            user_agent: self.user_agent,
            history_path: self.history_path.unwrap_or_else(default_history_path),
            max_history: self.max_history,
            retry: self.retry,
        })
    }
}

// Builder methods available at any state
impl<State> LookupConfigBuilder<State> {
    /// Set the A1 range to read (default: `Sheet1`)
    ///
    /// Use a tab name to read a whole tab, or a bounded range such as
    /// `Signs!A1:B500` for large sheets.
    #[must_use]
    pub fn range(mut self, range: impl Into<String>) -> Self {
        self.range = range.into();
        self
    }

    /// Point the client at a different API host
    ///
    /// Intended for tests against a local mock server.
    #[must_use]
    pub fn api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    #[must_use]
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the file recent questions are persisted to
    ///
    /// Defaults to `<data_local_dir>/sign_lookup/recent_questions.json`.
    #[must_use]
    pub fn history_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.history_path = Some(path.into());
        self
    }

    #[must_use]
    pub fn max_history(mut self, max: usize) -> Self {
        self.max_history = max;
        self
    }

    /// Set the backoff policy for transient failures
    ///
    /// `max_attempts: 1` disables retries.
    #[must_use]
    pub fn retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }
}
