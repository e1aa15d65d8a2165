//! URL and text helpers shared by the client and the CLI.

use super::constants::SHEET_EDIT_URL_BASE;

/// Check if a URL is a usable http(s) URL
#[must_use]
pub fn is_valid_url(url: &str) -> bool {
    if url.is_empty() {
        return false;
    }

    // Skip data URLs, javascript URLs, and other non-http schemes
    if url.starts_with("data:") || url.starts_with("javascript:") || url.starts_with("mailto:") {
        return false;
    }

    match url::Url::parse(url) {
        Ok(parsed) => {
            matches!(parsed.scheme(), "http" | "https")
        }
        Err(_) => false,
    }
}

/// Browser URL for editing a spreadsheet
#[must_use]
pub fn sheet_edit_url(sheet_id: &str) -> String {
    format!("{SHEET_EDIT_URL_BASE}{sheet_id}/edit")
}

/// Trim and cap a free-text detail to `max_chars` characters
///
/// Counts characters, not bytes, so multi-byte text is never split.
#[must_use]
pub fn truncate_detail(text: &str, max_chars: usize) -> String {
    let text = text.trim();
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max_chars).collect();
    out.push('…');
    out
}
