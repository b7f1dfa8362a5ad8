use anyhow::Result;
use log::{debug, info, warn};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use super::history_repository::HistoryRepository;
use crate::storage::traits::Connection;

/// Environment variable that overrides the default data directory
pub const DATA_DIR_ENV_VAR: &str = "LUCKRACLE_DATA_DIR";

const APP_DIRECTORY_NAME: &str = "LuckRacle";
const FALLBACK_DIRECTORY_NAME: &str = "luckracle_data";
const HISTORY_FILE_NAME: &str = "history.json";
const CONFIG_FILE_NAME: &str = "luckracle_config.yaml";

/// JsonConnection owns the data directory and the file layout inside it.
/// Clones share one history lock, so every repository created from the same
/// connection serializes its read-modify-write cycles against the others.
#[derive(Clone, Debug)]
pub struct JsonConnection {
    base_directory: PathBuf,
    history_lock: Arc<Mutex<()>>,
}

impl JsonConnection {
    /// Create a new connection rooted at `base_directory`, creating it if needed
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_path = base_directory.as_ref().to_path_buf();

        if !base_path.exists() {
            fs::create_dir_all(&base_path)?;
            info!("Created data directory: {}", base_path.display());
        }

        Ok(Self {
            base_directory: base_path,
            history_lock: Arc::new(Mutex::new(())),
        })
    }

    /// Resolve the default data directory without creating it.
    ///
    /// Uses `$LUCKRACLE_DATA_DIR` when set, otherwise the platform data
    /// directory (e.g. `~/.local/share/LuckRacle`), otherwise `./luckracle_data`.
    pub fn default_directory() -> PathBuf {
        if let Ok(dir) = std::env::var(DATA_DIR_ENV_VAR) {
            let dir = dir.trim();
            if !dir.is_empty() {
                info!("Using data directory from {}: {}", DATA_DIR_ENV_VAR, dir);
                return PathBuf::from(dir);
            }
        }

        match dirs::data_dir() {
            Some(dir) => dir.join(APP_DIRECTORY_NAME),
            None => {
                warn!(
                    "Could not determine platform data directory, using ./{}",
                    FALLBACK_DIRECTORY_NAME
                );
                PathBuf::from(FALLBACK_DIRECTORY_NAME)
            }
        }
    }

    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    pub fn history_file_path(&self) -> PathBuf {
        self.base_directory.join(HISTORY_FILE_NAME)
    }

    pub fn config_file_path(&self) -> PathBuf {
        self.base_directory.join(CONFIG_FILE_NAME)
    }

    /// Hold while reading and rewriting the history file
    pub fn lock_history(&self) -> MutexGuard<'_, ()> {
        // The guarded data is (), so a poisoned lock carries no broken state
        self.history_lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Write `contents` to `path` through a temp file and rename
    pub fn write_atomic(&self, path: &Path, contents: &str) -> Result<()> {
        if !self.base_directory.exists() {
            fs::create_dir_all(&self.base_directory)?;
        }

        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, contents)?;
        fs::rename(&temp_path, path)?;

        debug!("Wrote {} bytes to {}", contents.len(), path.display());
        Ok(())
    }
}

impl Connection for JsonConnection {
    type HistoryRepository = HistoryRepository;

    fn create_history_repository(&self, limit: usize) -> Self::HistoryRepository {
        HistoryRepository::with_limit(self.clone(), limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_new_creates_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a").join("b");

        let connection = JsonConnection::new(&nested).unwrap();
        assert!(nested.exists());
        assert_eq!(connection.base_directory(), nested.as_path());
    }

    #[test]
    fn test_file_layout() {
        let temp_dir = TempDir::new().unwrap();
        let connection = JsonConnection::new(temp_dir.path()).unwrap();

        assert_eq!(connection.history_file_path(), temp_dir.path().join("history.json"));
        assert_eq!(
            connection.config_file_path(),
            temp_dir.path().join("luckracle_config.yaml")
        );
    }

    #[test]
    fn test_write_atomic_replaces_contents() {
        let temp_dir = TempDir::new().unwrap();
        let connection = JsonConnection::new(temp_dir.path()).unwrap();
        let path = connection.history_file_path();

        connection.write_atomic(&path, "first").unwrap();
        connection.write_atomic(&path, "second").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn test_create_history_repository_uses_connection_directory() {
        let temp_dir = TempDir::new().unwrap();
        let connection = JsonConnection::new(temp_dir.path()).unwrap();

        let repo = connection.create_history_repository(3);
        assert_eq!(repo.limit(), 3);
    }
}
