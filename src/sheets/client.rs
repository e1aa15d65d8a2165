//! HTTP client for the Sheets v4 values endpoint

use reqwest::Client;
use reqwest::header::{ACCEPT, RETRY_AFTER};
use std::time::Duration;
use tracing::{debug, error, info, warn};

use super::errors::{LookupError, LookupResult};
use super::matching::{collect_videos, find_video, validate_query};
use super::types::{LookupOutcome, SheetRow, ValueRange, VideoEntry};
use crate::config::LookupConfig;

/// Client for a spreadsheet-backed lookup table
///
/// Every call fetches the table fresh; nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct SheetsClient {
    http: Client,
    config: LookupConfig,
}

impl SheetsClient {
    /// Create a client from a validated configuration
    pub fn new(config: LookupConfig) -> LookupResult<Self> {
        let http = Client::builder()
            .timeout(config.request_timeout())
            .user_agent(config.user_agent())
            .build()
            .map_err(|e| LookupError::Network(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    #[must_use]
    pub fn config(&self) -> &LookupConfig {
        &self.config
    }

    /// Full values URL, including the API key
    #[must_use]
    pub fn values_url(&self) -> String {
        format!(
            "{}/v4/spreadsheets/{}/values/{}?key={}",
            self.config.api_base(),
            urlencoding::encode(self.config.sheet_id()),
            urlencoding::encode(self.config.range()),
            urlencoding::encode(self.config.api_key()),
        )
    }

    /// Look `word` up in the table
    ///
    /// # Errors
    /// Invalid keys and every transport, status and parse failure are
    /// errors. A key missing from the table is `Ok(LookupOutcome::NotFound)`.
    pub async fn lookup(&self, word: &str) -> LookupResult<LookupOutcome> {
        let word = validate_query(word)?;
        info!(word, sheet_id = self.config.sheet_id(), "Looking up video");

        let rows = self.fetch_rows().await?;
        Ok(find_video(&rows, word))
    }

    /// Every word/video pair in the table
    pub async fn fetch_all(&self) -> LookupResult<Vec<VideoEntry>> {
        let rows = self.fetch_rows().await?;
        let videos = collect_videos(&rows);
        info!(count = videos.len(), "Fetched all videos");
        Ok(videos)
    }

    /// Fetch the raw rows, retrying transient failures
    pub async fn fetch_rows(&self) -> LookupResult<Vec<SheetRow>> {
        let retry = self.config.retry();
        let mut attempt = 0;

        loop {
            match self.fetch_once().await {
                Ok(rows) => return Ok(rows),
                Err(e) if e.is_transient() && attempt + 1 < retry.max_attempts => {
                    let delay = retry.delay_after(attempt, &e);
                    warn!(
                        attempt = attempt + 1,
                        max_attempts = retry.max_attempts,
                        delay_ms = delay.as_millis() as u64,
                        error = %e,
                        "Transient Sheets API failure, retrying"
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(e) => {
                    error!(error = %e, attempts = attempt + 1, "Error fetching sheet values");
                    return Err(e);
                }
            }
        }
    }

    async fn fetch_once(&self) -> LookupResult<Vec<SheetRow>> {
        debug!(
            sheet_id = self.config.sheet_id(),
            range = self.config.range(),
            "Fetching from Google Sheets"
        );

        let response = self
            .http
            .get(self.values_url())
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let retry_after = response
                .headers()
                .get(RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.trim().parse::<u64>().ok())
                .map(Duration::from_secs);
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "Google Sheets API error");
            return Err(LookupError::from_status(status.as_u16(), &body, retry_after));
        }

        let body = response.text().await?;
        let value_range: ValueRange = serde_json::from_str(&body)?;
        let rows = value_range.into_rows();
        debug!(rows = rows.len(), "Google Sheets response parsed");

        Ok(rows)
    }
}
