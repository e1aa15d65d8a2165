//! Shared configuration constants for sign_lookup
//!
//! This module contains default values and configuration constants used
//! throughout the codebase to ensure consistency and avoid magic numbers.

/// Base URL of the Google Sheets v4 API
///
/// Overridable through `LookupConfig::api_base` so tests can point the
/// client at a local mock server.
pub const DEFAULT_SHEETS_API_BASE: &str = "https://sheets.googleapis.com";

/// Default A1 range queried from the sheet: the whole first tab
///
/// Column A holds the word or phrase, column B the video URL,
/// and row 1 is a header row that lookups skip.
pub const DEFAULT_SHEET_RANGE: &str = "Sheet1";

/// Default request timeout: 15 seconds
///
/// The values endpoint answers small sheets in well under a second.
/// Anything slower than this is treated as a network problem.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;

/// Maximum accepted lookup key length in characters
pub const MAX_QUERY_LENGTH: usize = 200;

/// Maximum number of remembered recent questions
pub const DEFAULT_MAX_RECENT_QUESTIONS: usize = 20;

/// File name of the persisted recent-question history
pub const RECENT_QUESTIONS_FILENAME: &str = "recent_questions.json";

/// Directory name created under the platform data dir
pub const APP_DIR_NAME: &str = "sign_lookup";

/// Maximum characters of an error body kept in error details
pub const MAX_ERROR_DETAIL_CHARS: usize = 200;

/// User agent sent with every Sheets API request
pub const USER_AGENT: &str = concat!("sign_lookup/", env!("CARGO_PKG_VERSION"));

/// Direct-download form of a Google Drive file link
pub const DRIVE_DIRECT_DOWNLOAD_BASE: &str = "https://drive.google.com/uc?export=download&id=";

/// Edit URL prefix for a spreadsheet, shown by the setup command
pub const SHEET_EDIT_URL_BASE: &str = "https://docs.google.com/spreadsheets/d/";

/// Cloud console page for enabling the Sheets API
pub const SHEETS_API_CONSOLE_URL: &str =
    "https://console.cloud.google.com/apis/library/sheets.googleapis.com";
