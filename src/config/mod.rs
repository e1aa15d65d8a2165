//! Configuration module for sheet lookups
//!
//! This module provides the `LookupConfig` struct and its type-safe builder
//! for configuring the Sheets client and the history store with validation
//! and sensible defaults.

// Sub-modules
pub mod builder;
pub mod env;
pub mod getters;
pub mod types;

// Re-exports for public API
pub use builder::{LookupConfigBuilder, WithApiKey, WithSheetId};
pub use env::{
    ENV_API_BASE, ENV_API_KEY, ENV_HISTORY_PATH, ENV_RANGE, ENV_SHEET_ID, default_history_path,
};
pub use types::LookupConfig;
