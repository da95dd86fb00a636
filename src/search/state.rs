//! Search state
//!
//! `SearchState` is the explicit value a front end keeps between input
//! events: the current query text and the current criteria. Deriving the
//! visible listings from it is a pure call, so front ends never cache a
//! filtered copy of the catalog.
//!
//! ```
//! use rentr::catalog::Catalog;
//! use rentr::search::{FilterCriteria, SearchState};
//!
//! let catalog = Catalog::seed().unwrap();
//! let mut state = SearchState::default();
//!
//! state.set_query("downtown");
//! state.apply(FilterCriteria::builder().furnished(true).build());
//!
//! for listing in state.results(&catalog) {
//!     println!("{}", listing.title);
//! }
//! ```

use super::criteria::FilterCriteria;
use super::filter::filter_listings;
use crate::catalog::Catalog;
use crate::listing::Listing;

/// Current query and criteria of a search session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    query: String,
    criteria: FilterCriteria,
}

impl SearchState {
    #[must_use]
    pub fn new(query: impl Into<String>, criteria: FilterCriteria) -> Self {
        Self {
            query: query.into(),
            criteria,
        }
    }

    /// Get the query text
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Get the criteria
    #[must_use]
    pub const fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Replace the query text
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn clear_query(&mut self) {
        self.query.clear();
    }

    /// Replace the criteria wholesale
    pub fn apply(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
    }

    /// Derive new criteria from the current ones and apply them
    pub fn edit(&mut self, f: impl FnOnce(&mut FilterCriteria)) {
        let mut next = self.criteria.clone();
        f(&mut next);
        self.apply(next);
    }

    /// Restore the default criteria; the query is kept
    pub fn reset(&mut self) {
        self.apply(FilterCriteria::reset());
    }

    /// Listings visible under this state, in catalog order
    #[must_use]
    pub fn results<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Listing> {
        filter_listings(catalog.listings(), &self.query, &self.criteria)
    }
}
