//! Row matching over a fetched lookup table
//!
//! Pure functions, no I/O: the client fetches rows and hands them here.

use super::errors::{LookupError, LookupResult};
use super::types::{LookupOutcome, SheetRow, VideoEntry};
use crate::utils::{MAX_QUERY_LENGTH, convert_drive_url_to_direct_link};

/// Rows before this index are headers
const FIRST_DATA_ROW: usize = 1;

/// Comparison form of a key or a column-A cell
#[must_use]
pub fn normalize_key(key: &str) -> String {
    key.trim().to_lowercase()
}

/// Validate a user-supplied key, returning it trimmed
pub fn validate_query(word: &str) -> LookupResult<&str> {
    let trimmed = word.trim();
    if trimmed.is_empty() {
        return Err(LookupError::EmptyQuery);
    }

    let len = trimmed.chars().count();
    if len > MAX_QUERY_LENGTH {
        return Err(LookupError::QueryTooLong {
            len,
            max: MAX_QUERY_LENGTH,
        });
    }

    Ok(trimmed)
}

/// Find the video for `word` in `rows`
///
/// Skips the header row and returns the first row whose column A matches
/// case-insensitively after trimming. A matching row with an empty
/// column B is reported as not found; later duplicates are not consulted.
#[must_use]
pub fn find_video(rows: &[SheetRow], word: &str) -> LookupOutcome {
    let needle = normalize_key(word);
    let not_found = || LookupOutcome::NotFound {
        word: word.trim().to_string(),
    };

    tracing::debug!(
        word = %needle,
        rows = rows.len(),
        "Searching lookup table"
    );

    let Some((row_index, row)) = rows
        .iter()
        .enumerate()
        .skip(FIRST_DATA_ROW)
        .find(|(_, row)| row.word().is_some_and(|cell| normalize_key(cell) == needle))
    else {
        tracing::debug!(word = %needle, "No matching word found in sheet");
        return not_found();
    };

    let raw_url = row.video_url().map(str::trim).unwrap_or_default();
    if raw_url.is_empty() {
        tracing::warn!(word = %needle, row = row_index, "Matching row has no video URL");
        return not_found();
    }

    let video_url = convert_drive_url_to_direct_link(raw_url);
    tracing::debug!(word = %needle, row = row_index, video_url = %video_url, "Found matching word");

    LookupOutcome::Found(VideoEntry {
        word: row.word().unwrap_or_default().trim().to_string(),
        video_url,
        row_index,
    })
}

/// Every complete (word + URL) data row, in sheet order
#[must_use]
pub fn collect_videos(rows: &[SheetRow]) -> Vec<VideoEntry> {
    rows.iter()
        .enumerate()
        .skip(FIRST_DATA_ROW)
        .filter_map(|(row_index, row)| {
            let word = row.word()?.trim();
            let url = row.video_url()?.trim();
            if word.is_empty() || url.is_empty() {
                return None;
            }
            Some(VideoEntry {
                word: word.to_string(),
                video_url: convert_drive_url_to_direct_link(url),
                row_index,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> Vec<SheetRow> {
        vec![
            SheetRow::new(["Word", "Video URL"]),
            SheetRow::new(["hello", "https://drive.google.com/file/d/abc123/view"]),
            SheetRow::new(["  Thank You ", "https://www.example.com/videos/thanks.mp4"]),
            SheetRow::new(["orphan"]),
            SheetRow::new(["please", "https://www.example.com/videos/please.mp4"]),
        ]
    }

    #[test]
    fn header_row_is_never_matched() {
        assert_eq!(
            find_video(&table(), "word"),
            LookupOutcome::NotFound {
                word: "word".to_string()
            }
        );
    }

    #[test]
    fn match_is_case_and_whitespace_insensitive() {
        let outcome = find_video(&table(), "  THANK you");
        let LookupOutcome::Found(entry) = outcome else {
            panic!("expected a match, got {outcome:?}");
        };
        assert_eq!(entry.word, "Thank You");
        assert_eq!(entry.row_index, 2);
        assert_eq!(entry.video_url, "https://www.example.com/videos/thanks.mp4");
    }

    #[test]
    fn drive_links_are_rewritten() {
        assert_eq!(
            find_video(&table(), "hello").video_url(),
            Some("https://drive.google.com/uc?export=download&id=abc123")
        );
    }

    #[test]
    fn row_without_url_is_not_found() {
        assert!(!find_video(&table(), "orphan").is_found());
    }

    #[test]
    fn first_match_wins() {
        let mut rows = table();
        rows.push(SheetRow::new(["hello", "https://www.example.com/other.mp4"]));
        assert_eq!(find_video(&rows, "hello").video_url().map(|u| u.contains("abc123")), Some(true));
    }

    #[test]
    fn collect_skips_incomplete_rows() {
        let words: Vec<_> = collect_videos(&table()).into_iter().map(|v| v.word).collect();
        assert_eq!(words, vec!["hello", "Thank You", "please"]);
    }

    #[test]
    fn validation_rejects_blank_and_oversized_keys() {
        assert_eq!(validate_query("   "), Err(LookupError::EmptyQuery));
        assert_eq!(validate_query("  hi "), Ok("hi"));
        let long = "a".repeat(MAX_QUERY_LENGTH + 1);
        assert!(matches!(
            validate_query(&long),
            Err(LookupError::QueryTooLong { .. })
        ));
    }
}
