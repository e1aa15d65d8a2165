//! Environment-driven configuration and platform defaults

use std::path::PathBuf;

use anyhow::{Context, Result};

use super::types::LookupConfig;
use crate::utils::{APP_DIR_NAME, RECENT_QUESTIONS_FILENAME};

pub const ENV_SHEET_ID: &str = "SIGN_LOOKUP_SHEET_ID";
pub const ENV_API_KEY: &str = "SIGN_LOOKUP_API_KEY";
pub const ENV_RANGE: &str = "SIGN_LOOKUP_RANGE";
pub const ENV_API_BASE: &str = "SIGN_LOOKUP_API_BASE";
pub const ENV_HISTORY_PATH: &str = "SIGN_LOOKUP_HISTORY_PATH";

/// Default location of the recent-question file
///
/// Falls back to the working directory when the platform has no data dir.
#[must_use]
pub fn default_history_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
        .join(RECENT_QUESTIONS_FILENAME)
}

fn optional_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl LookupConfig {
    /// Build a configuration from `SIGN_LOOKUP_*` environment variables
    ///
    /// `SIGN_LOOKUP_SHEET_ID` and `SIGN_LOOKUP_API_KEY` are required;
    /// range, API base and history path are optional overrides.
    pub fn from_env() -> Result<Self> {
        let sheet_id = optional_var(ENV_SHEET_ID)
            .with_context(|| format!("{ENV_SHEET_ID} is not set"))?;
        let api_key =
            optional_var(ENV_API_KEY).with_context(|| format!("{ENV_API_KEY} is not set"))?;

        let mut builder = Self::builder().sheet_id(sheet_id).api_key(api_key);

        if let Some(range) = optional_var(ENV_RANGE) {
            builder = builder.range(range);
        }
        if let Some(api_base) = optional_var(ENV_API_BASE) {
            builder = builder.api_base(api_base);
        }
        if let Some(path) = optional_var(ENV_HISTORY_PATH) {
            builder = builder.history_path(path);
        }

        builder.build().context("Invalid lookup configuration")
    }
}
