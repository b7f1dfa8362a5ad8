//! # Storage Traits
//!
//! Abstractions the domain layer uses for persistence, so history can live
//! in a JSON file, in memory, or anywhere else a frontend prefers.

use shared::HistoryEntry;

/// Default number of history entries retained
pub const DEFAULT_HISTORY_LIMIT: usize = 10;

/// Persistence for past generations.
///
/// Implementations never surface errors: unreadable or malformed data reads
/// as an empty history and failed writes are logged and dropped.
pub trait HistoryStorage: Send + Sync {
    /// All stored entries, newest first
    fn load(&self) -> Vec<HistoryEntry>;

    /// Insert `entry` at the front, evict anything past the limit and return
    /// the updated list. The read-modify-write is atomic with respect to
    /// other calls on the same store.
    fn append(&self, entry: HistoryEntry) -> Vec<HistoryEntry>;

    /// Remove every entry
    fn clear(&self);
}

/// A storage location that can hand out repositories
pub trait Connection: Send + Sync + Clone {
    type HistoryRepository: HistoryStorage;

    fn create_history_repository(&self, limit: usize) -> Self::HistoryRepository;
}
