//! # Storage Module
//!
//! Persistence for the LuckRacle backend.
//!
//! - **json**: file-backed storage rooted at a data directory
//!   (`history.json` plus the YAML app config)
//! - **memory**: process-local history, used by tests and frontends that
//!   persist on their own

pub mod json;
pub mod memory;
pub mod traits;

pub use json::{AppConfig, ConfigRepository, HistoryRepository, JsonConnection};
pub use memory::InMemoryHistoryStore;
pub use traits::*;
