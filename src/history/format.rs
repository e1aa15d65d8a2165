//! Human-friendly timestamps for history listings

use chrono::{DateTime, Utc};

/// Render `timestamp` relative to `now`
///
/// `Just now`, `5m ago`, `3h ago`, `2d ago`, then a calendar date once
/// the entry is a week old. Future timestamps count as just now.
#[must_use]
pub fn format_relative(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let diff = now.signed_duration_since(timestamp);

    let minutes = diff.num_minutes();
    let hours = diff.num_hours();
    let days = diff.num_days();

    if minutes < 1 {
        "Just now".to_string()
    } else if minutes < 60 {
        format!("{minutes}m ago")
    } else if hours < 24 {
        format!("{hours}h ago")
    } else if days < 7 {
        format!("{days}d ago")
    } else {
        timestamp.format("%Y-%m-%d").to_string()
    }
}
