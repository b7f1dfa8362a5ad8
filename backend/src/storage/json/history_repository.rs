//! # JSON History Repository
//!
//! Stores recent generations as a JSON array in `history.json`, newest first.
//!
//! ```json
//! [
//!   {
//!     "timestamp": 1737487800000,
//!     "primary_numbers": [42, 48, 49, 52, 55],
//!     "secondary_number": 5,
//!     "date_of_birth": "1990-05-15",
//!     "western_zodiac": "Taurus",
//!     "chinese_zodiac": "Horse",
//!     "style": "balanced"
//!   }
//! ]
//! ```

use anyhow::Result;
use log::{debug, info, warn};
use std::fs;

use shared::HistoryEntry;

use super::connection::JsonConnection;
use crate::storage::traits::{HistoryStorage, DEFAULT_HISTORY_LIMIT};

/// File-backed history capped at `limit` entries. Writes are serialized
/// through the connection's history lock.
#[derive(Clone)]
pub struct HistoryRepository {
    connection: JsonConnection,
    limit: usize,
}

impl HistoryRepository {
    pub fn new(connection: JsonConnection) -> Self {
        Self::with_limit(connection, DEFAULT_HISTORY_LIMIT)
    }

    pub fn with_limit(connection: JsonConnection, limit: usize) -> Self {
        Self { connection, limit }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Read entries from disk. A missing file is an empty history.
    fn read_entries(&self) -> Result<Vec<HistoryEntry>> {
        let path = self.connection.history_file_path();
        if !path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&path)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        let entries: Vec<HistoryEntry> = serde_json::from_str(&content)?;
        debug!("Loaded {} history entries from {:?}", entries.len(), path);
        Ok(entries)
    }

    fn write_entries(&self, entries: &[HistoryEntry]) -> Result<()> {
        let json = serde_json::to_string_pretty(entries)?;
        self.connection
            .write_atomic(&self.connection.history_file_path(), &json)
    }

    fn load_or_empty(&self) -> Vec<HistoryEntry> {
        match self.read_entries() {
            Ok(entries) => entries,
            Err(e) => {
                warn!("History could not be read, starting empty: {}", e);
                Vec::new()
            }
        }
    }
}

impl HistoryStorage for HistoryRepository {
    fn load(&self) -> Vec<HistoryEntry> {
        let _guard = self.connection.lock_history();
        let mut entries = self.load_or_empty();
        entries.truncate(self.limit);
        entries
    }

    fn append(&self, entry: HistoryEntry) -> Vec<HistoryEntry> {
        let _guard = self.connection.lock_history();

        let mut entries = self.load_or_empty();
        entries.insert(0, entry);
        entries.truncate(self.limit);

        if let Err(e) = self.write_entries(&entries) {
            warn!("Failed to save history, keeping it in memory only: {}", e);
        } else {
            info!("Saved history ({} entries)", entries.len());
        }

        entries
    }

    fn clear(&self) {
        let _guard = self.connection.lock_history();
        if let Err(e) = self.write_entries(&[]) {
            warn!("Failed to clear history: {}", e);
        }
    }
}
