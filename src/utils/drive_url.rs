//! Sharing-link rewriting for cloud-hosted videos.
//!
//! Sheet rows usually carry the link a user copied from Google Drive's
//! "Share" dialog (`https://drive.google.com/file/d/<id>/view`). That page is
//! an HTML viewer, not media, so it is rewritten into the direct download
//! form before being handed to a player.

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use super::constants::DRIVE_DIRECT_DOWNLOAD_BASE;

const DRIVE_HOST_MARKER: &str = "drive.google.com";

/// `/d/<id>` path segment, as in `/file/d/<id>/view`
static DRIVE_PATH_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"/d/([^/?#\s]+)").expect("drive id pattern must compile")
});

/// Extract the Drive file id from a sharing link.
///
/// Recognizes `.../d/<id>/...` paths and `.../open?id=<id>` links.
/// Returns `None` for non-Drive URLs and Drive URLs without an id.
#[must_use]
pub fn extract_drive_file_id(url: &str) -> Option<String> {
    let url = url.trim();
    if !url.contains(DRIVE_HOST_MARKER) {
        return None;
    }

    if let Some(caps) = DRIVE_PATH_ID.captures(url) {
        return caps.get(1).map(|m| m.as_str().to_string());
    }

    let parsed = Url::parse(url).ok()?;
    if parsed.path() != "/open" {
        return None;
    }
    parsed
        .query_pairs()
        .find(|(k, v)| k == "id" && !v.is_empty())
        .map(|(_, v)| v.into_owned())
}

/// Convert a Google Drive sharing URL to a direct download link.
///
/// Any URL that is not a recognizable Drive sharing link is returned
/// unchanged (trimmed), so direct CDN links pass straight through.
#[must_use]
pub fn convert_drive_url_to_direct_link(url: &str) -> String {
    match extract_drive_file_id(url) {
        Some(file_id) => {
            let direct = format!("{DRIVE_DIRECT_DOWNLOAD_BASE}{file_id}");
            tracing::debug!(original = url.trim(), direct = %direct, "Rewrote Drive sharing link");
            direct
        }
        None => url.trim().to_string(),
    }
}
