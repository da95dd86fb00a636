//! Listing catalog
//!
//! The catalog owns the listing collection for a session. It is loaded once,
//! either from the bundled seed table or from a JSON file, and afterwards the
//! only mutation is flipping a listing's favorite flag.
//!
//! # Examples
//!
//! ```
//! use rentr::catalog::Catalog;
//!
//! let mut catalog = Catalog::seed().unwrap();
//! let before = catalog.get("1").unwrap().is_favorite;
//!
//! let updated = catalog.toggle_favorite("1").unwrap();
//! assert_eq!(updated.is_favorite, !before);
//! ```

pub mod error;

pub use error::CatalogError;

use crate::listing::Listing;
use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Listing table compiled into the binary
const SEED: &str = include_str!("../../data/listings.json");

/// In-memory listing collection
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    listings: Vec<Listing>,
}

impl Catalog {
    /// Build a catalog from already-parsed listings
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::DuplicateId` if two listings share an id.
    pub fn new(listings: Vec<Listing>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(listings.len());
        for listing in &listings {
            if !seen.insert(listing.id.as_str()) {
                return Err(CatalogError::DuplicateId(listing.id.clone()));
            }
        }
        Ok(Self { listings })
    }

    /// Load the bundled listing table
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the bundled table is malformed.
    pub fn seed() -> Result<Self, CatalogError> {
        let catalog = Self::from_json(SEED)?;
        debug!(listings = catalog.len(), "loaded bundled catalog");
        Ok(catalog)
    }

    /// Parse a catalog from a JSON array of listings
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the JSON is malformed or ids are duplicated.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let listings: Vec<Listing> = serde_json::from_str(json)?;
        Self::new(listings)
    }

    /// Load a catalog from a JSON file
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the file cannot be read or parsed.
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let contents = fs::read_to_string(path)?;
        let catalog = Self::from_json(&contents)?;
        info!(path = %path.display(), listings = catalog.len(), "loaded catalog");
        Ok(catalog)
    }

    /// Load from `path` when given, otherwise the bundled table
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the selected source cannot be loaded.
    pub fn load(path: Option<&Path>) -> Result<Self, CatalogError> {
        match path {
            Some(path) => Self::from_path(path),
            None => Self::seed(),
        }
    }

    /// All listings in catalog order
    #[must_use]
    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.listings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    /// Look up a listing by id
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Listing> {
        self.listings.iter().find(|l| l.id == id)
    }

    fn get_mut(&mut self, id: &str) -> Option<&mut Listing> {
        self.listings.iter_mut().find(|l| l.id == id)
    }

    /// Flip the favorite flag of a single listing
    ///
    /// Returns the updated listing, or `None` if no listing has this id.
    /// Filtering is not re-run; callers re-derive their view.
    pub fn toggle_favorite(&mut self, id: &str) -> Option<&Listing> {
        let listing = self.get_mut(id)?;
        listing.is_favorite = !listing.is_favorite;
        debug!(id, favorite = listing.is_favorite, "toggled favorite");
        Some(&*listing)
    }

    /// Set the favorite flag of a single listing
    ///
    /// Returns the updated listing, or `None` if no listing has this id.
    pub fn set_favorite(&mut self, id: &str, favorite: bool) -> Option<&Listing> {
        let listing = self.get_mut(id)?;
        listing.is_favorite = favorite;
        Some(&*listing)
    }

    /// Listings flagged as favorite, in catalog order
    #[must_use]
    pub fn favorites(&self) -> Vec<&Listing> {
        self.listings.iter().filter(|l| l.is_favorite).collect()
    }

    /// Distinct amenity labels across the catalog, sorted
    #[must_use]
    pub fn amenities(&self) -> Vec<&str> {
        self.listings
            .iter()
            .flat_map(|l| l.amenities.iter().map(String::as_str))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}
