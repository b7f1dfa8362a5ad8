//! In-memory history for tests and frontends with their own persistence.

use std::sync::{Mutex, MutexGuard};

use shared::HistoryEntry;

use super::traits::{HistoryStorage, DEFAULT_HISTORY_LIMIT};

pub struct InMemoryHistoryStore {
    entries: Mutex<Vec<HistoryEntry>>,
    limit: usize,
}

impl Default for InMemoryHistoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryHistoryStore {
    pub fn new() -> Self {
        Self::with_limit(DEFAULT_HISTORY_LIMIT)
    }

    pub fn with_limit(limit: usize) -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
            limit,
        }
    }

    fn entries(&self) -> MutexGuard<'_, Vec<HistoryEntry>> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl HistoryStorage for InMemoryHistoryStore {
    fn load(&self) -> Vec<HistoryEntry> {
        self.entries().clone()
    }

    fn append(&self, entry: HistoryEntry) -> Vec<HistoryEntry> {
        let mut entries = self.entries();
        entries.insert(0, entry);
        entries.truncate(self.limit);
        entries.clone()
    }

    fn clear(&self) {
        self.entries().clear();
    }
}
