//! Listing search
//!
//! Combines a free-text query with structured `FilterCriteria` to select
//! listings from a catalog. See [`filter`] for the matching rules.

pub mod criteria;
pub mod filter;
pub mod state;

pub use criteria::{DEFAULT_MAX_PRICE, FilterCriteria, FilterCriteriaBuilder, PriceBounds, PriceRange};
pub use filter::{ListingFilterExt, Predicate, filter_listings, matches, rejections};
pub use state::SearchState;
