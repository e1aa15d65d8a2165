//! Word-to-sign translation flow
//!
//! Ties the lookup client to the history store: validate what the user
//! typed or said, look it up, and remember the question.

use tracing::{info, warn};

use crate::history::HistoryStore;
use crate::sheets::{LookupOutcome, LookupResult, SheetsClient, validate_query};

/// A completed lookup for a user-supplied key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    /// Key as entered, trimmed
    pub word: String,
    pub outcome: LookupOutcome,
}

impl Translation {
    /// Text for the result view
    #[must_use]
    pub fn message(&self) -> String {
        match &self.outcome {
            LookupOutcome::Found(entry) => entry.video_url.clone(),
            LookupOutcome::NotFound { word } => {
                format!("No sign language video found for \"{word}\".")
            }
        }
    }
}

/// Lookup service used by the CLI
#[derive(Debug, Clone)]
pub struct Translator {
    client: SheetsClient,
    history: HistoryStore,
}

impl Translator {
    #[must_use]
    pub fn new(client: SheetsClient, history: HistoryStore) -> Self {
        Self { client, history }
    }

    #[must_use]
    pub fn client(&self) -> &SheetsClient {
        &self.client
    }

    #[must_use]
    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    /// Look `input` up and record it in recent history
    ///
    /// Found and not-found lookups are both recorded; failed lookups are not.
    pub async fn translate(&self, input: &str) -> LookupResult<Translation> {
        let word = validate_query(input)?;

        let outcome = match self.client.lookup(word).await {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!(word, error = %e, "Lookup failed");
                return Err(e);
            }
        };

        info!(word, found = outcome.is_found(), "Lookup complete");
        self.history.add(word).await;

        Ok(Translation {
            word: word.to_string(),
            outcome,
        })
    }

    /// Run the same lookup again
    pub async fn retry(&self, word: &str) -> LookupResult<Translation> {
        self.translate(word).await
    }
}
