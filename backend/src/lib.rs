//! # LuckRacle Backend
//!
//! Non-UI logic for the LuckRacle lucky number generator.
//!
//! ```text
//! UI layer (wizard, chips, share button)
//!     ↓
//! Domain layer (LuckService → NumberGenerator, derivations, explanations)
//!     ↓
//! Storage layer (HistoryStorage: JSON file or memory, YAML config)
//! ```
//!
//! Frontends build a [`Backend`] once and call into `luck_service`.

pub mod domain;
pub mod storage;

use log::{info, warn};
use std::path::Path;
use std::sync::Arc;

use crate::domain::{ExplanationService, HistoryService, LuckService, NumberGenerator};
use crate::storage::{
    AppConfig, ConfigRepository, Connection, HistoryStorage, InMemoryHistoryStore, JsonConnection,
};

/// Main backend struct that wires services to storage
#[derive(Clone)]
pub struct Backend {
    pub config: AppConfig,
    pub luck_service: LuckService,
    pub history_service: HistoryService,
}

impl Default for Backend {
    fn default() -> Self {
        Self::new()
    }
}

impl Backend {
    /// Backend in the default data directory
    pub fn new() -> Self {
        Self::with_data_directory(JsonConnection::default_directory())
    }

    /// Backend whose files live under `path`. An unusable directory does not
    /// stop generation: history is kept in memory and config uses defaults.
    pub fn with_data_directory<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match JsonConnection::new(path) {
            Ok(connection) => Self::with_connection(connection),
            Err(e) => {
                warn!(
                    "Data directory {} is unavailable, history will not be saved: {}",
                    path.display(),
                    e
                );
                let config = AppConfig::default();
                let history = Arc::new(InMemoryHistoryStore::with_limit(config.history_limit));
                Self::with_history_storage(config, history)
            }
        }
    }

    /// Backend whose config and history live under `connection`
    pub fn with_connection(connection: JsonConnection) -> Self {
        info!("Using data directory {}", connection.base_directory().display());

        let config = match ConfigRepository::new(connection.clone()).get_config() {
            Ok(config) => config,
            Err(e) => {
                warn!("Could not load app config, using defaults: {}", e);
                AppConfig::default()
            }
        };

        let history = Arc::new(connection.create_history_repository(config.history_limit));
        Self::with_history_storage(config, history)
    }

    /// Backend over any history storage, e.g. an in-memory store
    pub fn with_history_storage(config: AppConfig, storage: Arc<dyn HistoryStorage>) -> Self {
        info!(
            "Setting up services (history limit {}, favorite bias {}%)",
            config.history_limit, config.favorite_bias_percent
        );

        let history_service = HistoryService::new(storage);
        let luck_service = LuckService::new(
            NumberGenerator::with_favorite_bias(config.favorite_bias_percent),
            ExplanationService::new(),
            history_service.clone(),
        );

        Self {
            config,
            luck_service,
            history_service,
        }
    }
}
