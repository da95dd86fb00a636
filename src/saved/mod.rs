//! Saved searches
//!
//! A saved search pairs a query with `FilterCriteria` under a memorable name
//! so it can be re-run later, optionally refined by extra flags.
//!
//! # Storage
//!
//! Saved searches are stored in TOML format at
//! `~/.config/rentr/searches.toml` by default. The location can be changed
//! with the `saved_searches` configuration key.

pub mod error;
pub mod operations;
pub mod types;

pub use error::SavedSearchError;
pub use operations::SavedSearchManager;
pub use types::{SavedSearch, SavedSearchStorage, validate_search_name};

use crate::config::RentrConfig;
use std::path::PathBuf;

/// Get the default saved search storage path
///
/// # Errors
///
/// Returns `SavedSearchError` if the config directory cannot be determined
pub fn default_search_path() -> Result<PathBuf, SavedSearchError> {
    let config_dir = dirs::config_dir().ok_or_else(|| {
        SavedSearchError::Config(config::ConfigError::Message(
            "Could not determine config directory".to_string(),
        ))
    })?;

    Ok(config_dir.join("rentr").join("searches.toml"))
}

/// Build a manager for the configured storage path
///
/// # Errors
///
/// Returns `SavedSearchError` if no path is configured and the default cannot be determined
pub fn manager_from_config(config: &RentrConfig) -> Result<SavedSearchManager, SavedSearchError> {
    let path = match &config.saved_searches {
        Some(path) => path.clone(),
        None => default_search_path()?,
    };

    let mut manager = SavedSearchManager::new(path);
    manager.set_auto_backup(config.auto_backup);
    Ok(manager)
}
