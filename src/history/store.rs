//! File-backed recent-question store
//!
//! Provides safe file operations using write-to-temp-then-rename pattern
//! to prevent corruption from crashes or interrupted writes.

use chrono::{DateTime, Utc};
use log::{debug, error, info, warn};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::NamedTempFile;
use tokio::fs;
use tokio::sync::Mutex;

use super::types::{HistoryError, HistoryResult, RecentQuestion};
use crate::config::LookupConfig;
use crate::sheets::normalize_key;

/// Ordered, deduplicated, bounded list of recent lookup keys
///
/// Most recent first. Words are stored trimmed and lowercased, so
/// "Hello" and " hello " are the same entry.
///
/// The public operations (`add`, `list`, `remove`, `clear`) are
/// best-effort: storage failures are logged and never returned. The
/// `try_*` variants surface them.
///
/// Clones share one lock, so read-modify-write cycles through any clone
/// are serialized.
#[derive(Debug, Clone)]
pub struct HistoryStore {
    path: PathBuf,
    max_entries: usize,
    lock: Arc<Mutex<()>>,
}

impl HistoryStore {
    /// Open a store persisted at `path`, holding at most `max_entries`
    ///
    /// Nothing is read or created until the first operation.
    #[must_use]
    pub fn open(path: impl Into<PathBuf>, max_entries: usize) -> Self {
        Self {
            path: path.into(),
            max_entries: max_entries.max(1),
            lock: Arc::new(Mutex::new(())),
        }
    }

    #[must_use]
    pub fn from_config(config: &LookupConfig) -> Self {
        Self::open(config.history_path(), config.max_history())
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    /// Save a question to recent history
    pub async fn add(&self, word: &str) {
        self.add_at(word, Utc::now()).await;
    }

    /// Save a question with an explicit timestamp
    pub async fn add_at(&self, word: &str, timestamp: DateTime<Utc>) {
        if let Err(e) = self.try_add_at(word, timestamp).await {
            error!("Error saving recent question: {e}");
        }
    }

    /// All recent questions, most recent first
    pub async fn list(&self) -> Vec<RecentQuestion> {
        self.try_list().await.unwrap_or_else(|e| {
            error!("Error getting recent questions: {e}");
            Vec::new()
        })
    }

    /// Remove a specific question; returns whether anything was removed
    pub async fn remove(&self, word: &str) -> bool {
        self.try_remove(word).await.unwrap_or_else(|e| {
            error!("Error removing recent question: {e}");
            false
        })
    }

    /// Clear all recent questions
    pub async fn clear(&self) {
        if let Err(e) = self.try_clear().await {
            error!("Error clearing recent questions: {e}");
        }
    }

    pub async fn try_add(&self, word: &str) -> HistoryResult<()> {
        self.try_add_at(word, Utc::now()).await
    }

    pub async fn try_add_at(&self, word: &str, timestamp: DateTime<Utc>) -> HistoryResult<()> {
        let word = normalize_key(word);
        if word.is_empty() {
            debug!("Ignoring empty recent question");
            return Ok(());
        }

        let _guard = self.lock.lock().await;
        let existing = self.load_or_reset().await?;

        let mut updated = Vec::with_capacity(existing.len() + 1);
        updated.push(RecentQuestion::new(word.clone(), timestamp));
        updated.extend(
            existing
                .into_iter()
                .filter(|q| normalize_key(&q.word) != word),
        );
        updated.truncate(self.max_entries);

        self.persist(&updated).await?;
        info!("Saved recent question: {word}");
        Ok(())
    }

    pub async fn try_list(&self) -> HistoryResult<Vec<RecentQuestion>> {
        let _guard = self.lock.lock().await;
        let mut questions = self.load().await?;
        questions.truncate(self.max_entries);
        Ok(questions)
    }

    pub async fn try_remove(&self, word: &str) -> HistoryResult<bool> {
        let word = normalize_key(word);

        let _guard = self.lock.lock().await;
        let mut questions = self.load_or_reset().await?;
        let before = questions.len();
        questions.retain(|q| normalize_key(&q.word) != word);

        if questions.len() == before {
            debug!("Recent question not in history: {word}");
            return Ok(false);
        }

        self.persist(&questions).await?;
        info!("Removed recent question: {word}");
        Ok(true)
    }

    pub async fn try_clear(&self) -> HistoryResult<()> {
        let _guard = self.lock.lock().await;
        match fs::remove_file(&self.path).await {
            Ok(()) => {
                info!("Cleared recent questions");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Read the persisted list; a missing file is an empty list
    async fn load(&self) -> HistoryResult<Vec<RecentQuestion>> {
        let contents = match fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        if contents.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&contents).map_err(|e| HistoryError::Corrupt {
            path: self.path.clone(),
            message: e.to_string(),
        })
    }

    /// `load`, treating a corrupt file as empty so the next write replaces it
    async fn load_or_reset(&self) -> HistoryResult<Vec<RecentQuestion>> {
        match self.load().await {
            Err(e @ HistoryError::Corrupt { .. }) => {
                warn!("Discarding unreadable history: {e}");
                Ok(Vec::new())
            }
            other => other,
        }
    }

    /// Atomic write: uniquely named temp file beside the target, sync, rename
    ///
    /// Each write gets its own temp file, even across stores opened on
    /// the same path.
    async fn persist(&self, questions: &[RecentQuestion]) -> HistoryResult<()> {
        let parent = match self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            Some(parent) => {
                fs::create_dir_all(parent).await?;
                parent.to_path_buf()
            }
            None => PathBuf::from("."),
        };

        let json = serde_json::to_vec(questions)?;
        let path = self.path.clone();

        tokio::task::spawn_blocking(move || -> HistoryResult<()> {
            let mut temp = NamedTempFile::new_in(&parent)?;
            temp.write_all(&json)?;
            // Sync to disk before rename
            temp.as_file().sync_all()?;
            temp.persist(&path).map_err(|e| e.error)?;
            Ok(())
        })
        .await
        .map_err(|e| HistoryError::Io(std::io::Error::other(e)))?
    }
}
