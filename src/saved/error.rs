//! Error types for saved search operations
//!
//! This module defines all possible errors that can occur while storing,
//! loading, importing or exporting saved searches.

use std::io;
use thiserror::Error;

/// Errors that can occur during saved search operations
#[derive(Debug, Error)]
pub enum SavedSearchError {
    /// Saved search not found
    #[error("Saved search '{0}' not found")]
    NotFound(String),

    /// Saved search already exists
    #[error("Saved search '{0}' already exists")]
    AlreadyExists(String),

    /// Invalid saved search name
    #[error("Invalid saved search name '{0}': {1}")]
    InvalidName(String, String),

    /// Invalid search criteria
    #[error("Invalid search criteria: {0}")]
    InvalidCriteria(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl From<toml::de::Error> for SavedSearchError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<toml::ser::Error> for SavedSearchError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
