//! Test utilities and helper functions for the sign_lookup test suite

use mockito::{Matcher, Mock, Server, ServerGuard};
use serde_json::json;
use sign_lookup::{LookupConfig, RetryConfig};
use std::path::Path;
use std::time::Duration;
use tempfile::TempDir;

#[allow(dead_code)]
pub const SHEET_ID: &str = "test-sheet";
#[allow(dead_code)]
pub const API_KEY: &str = "test-key";
#[allow(dead_code)]
pub const VALUES_PATH: &str = "/v4/spreadsheets/test-sheet/values/Sheet1";

/// Creates a temporary directory for history files
#[allow(dead_code)]
pub fn create_test_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// Sets up a mock HTTP server standing in for the Sheets API
#[allow(dead_code)]
pub async fn setup_mock_server() -> ServerGuard {
    Server::new_async().await
}

/// Fast retry policy so transient-failure tests don't sleep
#[allow(dead_code)]
pub fn fast_retry(max_attempts: u32) -> RetryConfig {
    RetryConfig {
        max_attempts,
        initial_delay: Duration::from_millis(1),
        backoff_multiplier: 2.0,
        max_delay: Duration::from_millis(10),
    }
}

/// Config pointed at `server_url`, keeping history under `dir`
#[allow(dead_code)]
pub fn test_config(server_url: &str, dir: &Path, retry: RetryConfig) -> LookupConfig {
    LookupConfig::builder()
        .sheet_id(SHEET_ID)
        .api_key(API_KEY)
        .api_base(server_url)
        .request_timeout(Duration::from_secs(5))
        .history_path(dir.join("recent_questions.json"))
        .retry(retry)
        .build()
        .expect("test config must be valid")
}

/// Sheets values body for `rows`
#[allow(dead_code)]
pub fn values_body(rows: &[&[&str]]) -> String {
    json!({
        "range": "Sheet1!A1:B100",
        "majorDimension": "ROWS",
        "values": rows,
    })
    .to_string()
}

/// The sample table from the setup instructions
#[allow(dead_code)]
pub fn sample_body() -> String {
    values_body(&[
        &["Word", "Video URL"],
        &["hello", "https://drive.google.com/file/d/abc123/view"],
        &["thanks", "https://drive.google.com/file/d/def456/view?usp=sharing"],
        &["please", "https://www.example.com/videos/please.mp4"],
    ])
}

/// Creates a mock values endpoint answering with `status` and `body`
#[allow(dead_code)]
pub async fn mock_values(server: &mut Server, status: usize, body: &str, hits: usize) -> Mock {
    server
        .mock("GET", VALUES_PATH)
        .match_query(Matcher::UrlEncoded("key".into(), API_KEY.into()))
        .with_status(status)
        .with_header("content-type", "application/json; charset=UTF-8")
        .with_body(body)
        .expect(hits)
        .create_async()
        .await
}

/// Google-style error envelope
#[allow(dead_code)]
pub fn google_error(code: u16, message: &str, status: &str) -> String {
    json!({
        "error": { "code": code, "message": message, "status": status }
    })
    .to_string()
}
