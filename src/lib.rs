//! Rentr - search and filter rental listings
//!
//! This library provides a listing catalog, a pure filter engine that
//! combines a free-text query with structured criteria, persisted saved
//! searches, and an interactive browse session built on top of them.
//!
//! ```
//! use rentr::catalog::Catalog;
//! use rentr::search::{FilterCriteria, filter_listings};
//!
//! let catalog = Catalog::seed().unwrap();
//! let criteria = FilterCriteria::builder().price_range(1000, 3000).build();
//! let cheap = filter_listings(catalog.listings(), "", &criteria);
//! assert!(cheap.iter().all(|l| l.price <= 3000));
//! ```

use thiserror::Error;

pub mod browse;
pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod listing;
pub mod output;
pub mod saved;
pub mod search;
pub mod ui;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum RentrError {
    /// Catalog could not be loaded
    #[error("Catalog error: {0}")]
    CatalogError(#[from] catalog::CatalogError),
    /// Saved search error
    #[error("Saved search error: {0}")]
    SavedSearchError(#[from] saved::SavedSearchError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Interactive input failed
    #[error("Input error: {0}")]
    InputError(#[from] ui::InputError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// CSV export failed
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    /// JSON export failed
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    /// No listing with the given id
    #[error("Listing '{0}' not found")]
    ListingNotFound(String),
}
