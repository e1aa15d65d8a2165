//! Getter methods for `LookupConfig`
//!
//! This module provides all the accessor methods for retrieving configuration
//! values from a `LookupConfig` instance.

use std::path::Path;
use std::time::Duration;

use super::types::LookupConfig;
use crate::sheets::RetryConfig;
use crate::utils::sheet_edit_url;

impl LookupConfig {
    #[must_use]
    pub fn sheet_id(&self) -> &str {
        &self.sheet_id
    }

    #[must_use]
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    #[must_use]
    pub fn range(&self) -> &str {
        &self.range
    }

    #[must_use]
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    #[must_use]
    pub fn history_path(&self) -> &Path {
        &self.history_path
    }

    #[must_use]
    pub fn max_history(&self) -> usize {
        self.max_history
    }

    #[must_use]
    pub fn retry(&self) -> &RetryConfig {
        &self.retry
    }

    /// Browser URL of the configured spreadsheet
    #[must_use]
    pub fn sheet_edit_url(&self) -> String {
        sheet_edit_url(&self.sheet_id)
    }
}
