//! # JSON Storage Module
//!
//! File-based storage rooted at a single data directory.
//!
//! ## File Structure
//!
//! ```text
//! data/
//! ├── luckracle_config.yaml   ← ConfigRepository
//! └── history.json            ← HistoryRepository
//! ```
//!
//! Writes go to a temp file that is renamed over the target, so a crash
//! mid-write never leaves a half-written history behind.

pub mod config_repository;
pub mod connection;
pub mod history_repository;

#[cfg(test)]
pub mod test_utils;

pub use config_repository::{AppConfig, ConfigRepository};
pub use connection::JsonConnection;
pub use history_repository::HistoryRepository;
