//! Search history backing the "recent searches" list.

use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use chrono::Utc;
use thiserror::Error;
use tracing::warn;

use crate::suggestions::SearchHistoryEntry;

pub const DEFAULT_HISTORY_CAPACITY: usize = 20;

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("could not write search history `{path}`: {source}")]
    Write { path: PathBuf, source: std::io::Error },
    #[error("could not encode search history: {0}")]
    Encode(#[from] serde_json::Error),
}

pub trait SearchHistory: Send + Sync {
    /// Store `query` as the most recent search. Re-recording a query moves it to the front.
    fn record(&self, query: &str) -> Result<(), HistoryError>;

    /// Up to `limit` entries, newest first.
    fn recent(&self, limit: usize) -> Vec<SearchHistoryEntry>;

    fn clear(&self) -> Result<(), HistoryError>;
}

fn push_front(entries: &mut VecDeque<SearchHistoryEntry>, query: &str, capacity: usize) {
    entries.retain(|entry| !entry.query.eq_ignore_ascii_case(query));
    entries.push_front(SearchHistoryEntry { query: query.to_owned(), recorded_at: Utc::now() });
    entries.truncate(capacity);
}

/// Bounded history kept for the lifetime of the process.
#[derive(Debug)]
pub struct InMemorySearchHistory {
    capacity: usize,
    entries: Mutex<VecDeque<SearchHistoryEntry>>,
}

impl InMemorySearchHistory {
    pub fn new(capacity: usize) -> Self {
        Self { capacity: capacity.max(1), entries: Mutex::new(VecDeque::new()) }
    }
}

impl Default for InMemorySearchHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}

impl SearchHistory for InMemorySearchHistory {
    fn record(&self, query: &str) -> Result<(), HistoryError> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        push_front(&mut entries, query, self.capacity);
        Ok(())
    }

    fn recent(&self, limit: usize) -> Vec<SearchHistoryEntry> {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.iter().take(limit).cloned().collect()
    }

    fn clear(&self) -> Result<(), HistoryError> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).clear();
        Ok(())
    }
}

/// History persisted as a JSON array so it survives restarts.
///
/// A missing or unreadable file is treated as an empty history.
#[derive(Debug)]
pub struct FileSearchHistory {
    path: PathBuf,
    capacity: usize,
    guard: Mutex<()>,
}

impl FileSearchHistory {
    pub fn new(path: impl Into<PathBuf>, capacity: usize) -> Self {
        Self { path: path.into(), capacity: capacity.max(1), guard: Mutex::new(()) }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> VecDeque<SearchHistoryEntry> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => return VecDeque::new(),
            Err(error) => {
                warn!(
                    event_name = "search.history.read_failed",
                    path = %self.path.display(),
                    error = %error,
                    "search history unreadable, starting empty"
                );
                return VecDeque::new();
            }
        };

        match serde_json::from_str::<VecDeque<SearchHistoryEntry>>(&raw) {
            Ok(entries) => entries,
            Err(error) => {
                warn!(
                    event_name = "search.history.corrupt",
                    path = %self.path.display(),
                    error = %error,
                    "search history is not valid JSON, starting empty"
                );
                VecDeque::new()
            }
        }
    }

    fn store(&self, entries: &VecDeque<SearchHistoryEntry>) -> Result<(), HistoryError> {
        let encoded = serde_json::to_string_pretty(entries)?;
        if let Some(parent) = self.path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|source| HistoryError::Write { path: self.path.clone(), source })?;
        }
        fs::write(&self.path, encoded)
            .map_err(|source| HistoryError::Write { path: self.path.clone(), source })
    }
}

impl SearchHistory for FileSearchHistory {
    fn record(&self, query: &str) -> Result<(), HistoryError> {
        let _guard = self.guard.lock().unwrap_or_else(PoisonError::into_inner);
        let mut entries = self.load();
        push_front(&mut entries, query, self.capacity);
        self.store(&entries)
    }

    fn recent(&self, limit: usize) -> Vec<SearchHistoryEntry> {
        let _guard = self.guard.lock().unwrap_or_else(PoisonError::into_inner);
        self.load().into_iter().take(limit).collect()
    }

    fn clear(&self) -> Result<(), HistoryError> {
        let _guard = self.guard.lock().unwrap_or_else(PoisonError::into_inner);
        self.store(&VecDeque::new())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::{FileSearchHistory, InMemorySearchHistory, SearchHistory};

    fn queries(history: &dyn SearchHistory) -> Vec<String> {
        history.recent(100).into_iter().map(|entry| entry.query).collect()
    }

    #[test]
    fn in_memory_history_is_newest_first_and_bounded() {
        let history = InMemorySearchHistory::new(3);
        for query in ["a", "b", "c", "d"] {
            history.record(query).expect("record");
        }

        assert_eq!(queries(&history), vec!["d", "c", "b"]);
        assert_eq!(history.recent(1).len(), 1);
    }

    #[test]
    fn re_recording_moves_query_to_front_case_insensitively() {
        let history = InMemorySearchHistory::new(10);
        history.record("STM32").expect("record");
        history.record("lm317").expect("record");
        history.record("stm32").expect("record");

        assert_eq!(queries(&history), vec!["stm32", "lm317"]);

        history.clear().expect("clear");
        assert!(history.recent(10).is_empty());
    }

    #[test]
    fn file_history_survives_reload() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("nested").join("history.json");

        let history = FileSearchHistory::new(&path, 5);
        history.record("esp32").expect("record");
        history.record("bme280").expect("record");

        let reopened = FileSearchHistory::new(&path, 5);
        assert_eq!(queries(&reopened), vec!["bme280", "esp32"]);
    }

    #[test]
    fn corrupt_or_missing_file_reads_as_empty() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("history.json");

        let history = FileSearchHistory::new(&path, 5);
        assert!(history.recent(5).is_empty());

        fs::write(&path, "not json").expect("write corrupt file");
        assert!(history.recent(5).is_empty());

        history.record("ne555").expect("record over corrupt file");
        assert_eq!(queries(&history), vec!["ne555"]);
    }
}
