//! Error types for catalog loading

use std::io;
use thiserror::Error;

/// Errors that can occur while loading a listing catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The catalog is not a valid JSON array of listings
    #[error("Invalid catalog: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two listings share an identifier
    #[error("Duplicate listing id '{0}'")]
    DuplicateId(String),
}
