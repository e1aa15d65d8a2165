//! Spreadsheet-backed video lookup
//!
//! Fetches the lookup table from the Google Sheets v4 values API, scans it
//! for a key, and rewrites sharing links into directly playable URLs.
//! Failures are classified into [`LookupError`] categories.

mod client;
pub mod errors;
mod matching;
mod types;

pub use client::SheetsClient;
pub use errors::{LookupError, LookupResult, RetryConfig};
pub use matching::{collect_videos, find_video, normalize_key, validate_query};
pub use types::{LookupOutcome, SheetRow, ValueRange, VideoEntry};
