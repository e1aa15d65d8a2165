//! Wire and result types for sheet lookups

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `GET /v4/spreadsheets/{id}/values/{range}`
///
/// `values` is omitted entirely by the API when the range is empty.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueRange {
    #[serde(default)]
    pub range: String,

    #[serde(default)]
    pub major_dimension: Option<String>,

    #[serde(default)]
    pub values: Vec<Vec<Value>>,
}

impl ValueRange {
    /// Flatten the raw cell grid into rows of text cells
    #[must_use]
    pub fn into_rows(self) -> Vec<SheetRow> {
        self.values.into_iter().map(SheetRow::from_values).collect()
    }
}

/// One row of the lookup table. Trailing empty cells are dropped by the
/// API, so rows may be shorter than the header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SheetRow(pub Vec<String>);

impl SheetRow {
    #[must_use]
    pub fn new<S: Into<String>>(cells: impl IntoIterator<Item = S>) -> Self {
        Self(cells.into_iter().map(Into::into).collect())
    }

    fn from_values(values: Vec<Value>) -> Self {
        Self(
            values
                .into_iter()
                .map(|value| match value {
                    Value::String(s) => s,
                    Value::Null => String::new(),
                    other => other.to_string(),
                })
                .collect(),
        )
    }

    /// Cell at `index`, if present
    #[must_use]
    pub fn cell(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    /// Column A: the word or phrase
    #[must_use]
    pub fn word(&self) -> Option<&str> {
        self.cell(0)
    }

    /// Column B: the video link as entered
    #[must_use]
    pub fn video_url(&self) -> Option<&str> {
        self.cell(1)
    }
}

/// A word paired with a playable video URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoEntry {
    /// Word as written in the sheet, trimmed
    pub word: String,

    /// Video URL after sharing-link rewriting
    pub video_url: String,

    /// 0-based row index in the fetched range (row 0 is the header)
    pub row_index: usize,
}

/// Result of looking a key up
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    Found(VideoEntry),
    NotFound { word: String },
}

impl LookupOutcome {
    #[must_use]
    pub fn is_found(&self) -> bool {
        matches!(self, LookupOutcome::Found(_))
    }

    #[must_use]
    pub fn video_url(&self) -> Option<&str> {
        match self {
            LookupOutcome::Found(entry) => Some(&entry.video_url),
            LookupOutcome::NotFound { .. } => None,
        }
    }
}
