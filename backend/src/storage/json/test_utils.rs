//! Test utilities with RAII cleanup for file-backed storage tests
//!
//! The temporary directory lives as long as the `TestEnvironment`, so test
//! data is removed even when a test panics.

use anyhow::Result;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use shared::{HistoryEntry, Style};

use super::connection::JsonConnection;

pub struct TestEnvironment {
    /// Kept alive so the directory is not removed until drop
    _temp_dir: TempDir,
    pub connection: JsonConnection,
    pub base_path: PathBuf,
}

impl TestEnvironment {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::with_prefix("luckracle_test_")?;
        let base_path = temp_dir.path().to_path_buf();
        let connection = JsonConnection::new(&base_path)?;

        Ok(TestEnvironment {
            _temp_dir: temp_dir,
            connection,
            base_path,
        })
    }

    pub fn base_directory(&self) -> &Path {
        &self.base_path
    }
}

/// A history entry distinguishable by its timestamp
pub fn sample_entry(timestamp: i64) -> HistoryEntry {
    HistoryEntry {
        timestamp,
        primary_numbers: vec![4, 18, 22, 41, 63],
        secondary_number: 9,
        date_of_birth: "1990-05-15".to_string(),
        western_zodiac: Some("Taurus".to_string()),
        chinese_zodiac: Some("Horse".to_string()),
        style: Style::Balanced,
    }
}
