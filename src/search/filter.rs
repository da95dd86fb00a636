//! Listing filter engine
//!
//! Evaluates listings against a free-text query and a `FilterCriteria`.
//! A listing survives when every predicate in [`Predicate::ALL`] holds.
//! Evaluation is a pure function of its inputs: the result keeps the input
//! order and the same inputs always produce the same output.
//!
//! There is no error path. Criteria that cannot match (for example an
//! inverted price range) produce an empty result.
//!
//! # Iterator Adapter
//!
//! [`ListingFilterExt`] adds `.matching(query, criteria)` to any iterator of
//! `&Listing`, so an already filtered view can be narrowed further:
//!
//! ```
//! use rentr::catalog::Catalog;
//! use rentr::search::{FilterCriteria, ListingFilterExt};
//!
//! let catalog = Catalog::seed().unwrap();
//! let criteria = FilterCriteria::builder().min_bedrooms(2).build();
//!
//! let roomy = catalog.listings().iter().matching("", &criteria);
//! let roomy_in_sf = roomy.into_iter().matching("san francisco", &criteria);
//! assert!(roomy_in_sf.iter().all(|l| l.city == "San Francisco"));
//! ```

use super::criteria::FilterCriteria;
use crate::listing::Listing;
use tracing::debug;

/// One independent condition a listing must satisfy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Predicate {
    /// Query is empty or a substring of title, address or city
    Text,
    /// Price within the inclusive range
    Price,
    /// Bedroom count at or above the minimum
    Bedrooms,
    /// Bathroom count at or above the minimum
    Bathrooms,
    /// Property type among the accepted ones
    PropertyType,
    /// Every required amenity present
    Amenities,
    /// Pet policy equal to the requested one
    PetFriendly,
    /// Furnished status equal to the requested one
    Furnished,
    /// At least one parking space when parking is required
    Parking,
}

impl Predicate {
    pub const ALL: [Self; 9] = [
        Self::Text,
        Self::Price,
        Self::Bedrooms,
        Self::Bathrooms,
        Self::PropertyType,
        Self::Amenities,
        Self::PetFriendly,
        Self::Furnished,
        Self::Parking,
    ];

    /// Evaluate this predicate
    ///
    /// `needle` must already be lowercased; see [`normalize_query`].
    #[must_use]
    pub fn holds(self, listing: &Listing, needle: &str, criteria: &FilterCriteria) -> bool {
        match self {
            Self::Text => text_matches(listing, needle),
            Self::Price => criteria.price_range.contains(listing.price),
            Self::Bedrooms => criteria.min_bedrooms.is_none_or(|min| listing.bedrooms >= min),
            Self::Bathrooms => criteria.min_bathrooms.is_none_or(|min| listing.bathrooms >= min),
            Self::PropertyType => {
                criteria.property_types.is_empty()
                    || criteria.property_types.contains(&listing.property_type)
            }
            Self::Amenities => criteria.amenities.iter().all(|a| listing.has_amenity(a)),
            Self::PetFriendly => criteria.pet_friendly.is_none_or(|pets| listing.pet_friendly == pets),
            Self::Furnished => criteria.furnished.is_none_or(|f| listing.furnished == f),
            Self::Parking => !criteria.requires_parking() || listing.has_parking(),
        }
    }

    /// Short human-readable name
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Text => "search text",
            Self::Price => "price",
            Self::Bedrooms => "bedrooms",
            Self::Bathrooms => "bathrooms",
            Self::PropertyType => "property type",
            Self::Amenities => "amenities",
            Self::PetFriendly => "pet policy",
            Self::Furnished => "furnished",
            Self::Parking => "parking",
        }
    }
}

/// Lowercase a query once so it can be matched against many listings
#[must_use]
pub fn normalize_query(query: &str) -> String {
    query.to_lowercase()
}

/// Case-insensitive substring match on title, street address and city
///
/// `needle` must already be lowercased. An empty needle matches everything.
#[must_use]
pub fn text_matches(listing: &Listing, needle: &str) -> bool {
    needle.is_empty()
        || listing.title.to_lowercase().contains(needle)
        || listing.address.to_lowercase().contains(needle)
        || listing.city.to_lowercase().contains(needle)
}

fn matches_normalized(listing: &Listing, needle: &str, criteria: &FilterCriteria) -> bool {
    Predicate::ALL
        .iter()
        .all(|p| p.holds(listing, needle, criteria))
}

/// Check a single listing against a query and criteria
#[must_use]
pub fn matches(listing: &Listing, query: &str, criteria: &FilterCriteria) -> bool {
    matches_normalized(listing, &normalize_query(query), criteria)
}

/// Predicates a listing fails, in evaluation order
///
/// Empty exactly when [`matches`] returns true.
#[must_use]
pub fn rejections(listing: &Listing, query: &str, criteria: &FilterCriteria) -> Vec<Predicate> {
    let needle = normalize_query(query);
    Predicate::ALL
        .into_iter()
        .filter(|p| !p.holds(listing, &needle, criteria))
        .collect()
}

/// Filter listings by query and criteria
///
/// # Arguments
/// * `listings` - The full collection, in display order
/// * `query` - Free text; empty means no text restriction
/// * `criteria` - Structured filters
///
/// # Returns
/// The matching listings, in input order
#[must_use]
pub fn filter_listings<'a>(
    listings: &'a [Listing],
    query: &str,
    criteria: &FilterCriteria,
) -> Vec<&'a Listing> {
    let matched = listings.iter().matching(query, criteria);
    debug!(
        total = listings.len(),
        matched = matched.len(),
        query,
        active_filters = criteria.active_count(),
        "filtered listings"
    );
    matched
}

/// Extension trait for filtering iterators of `&Listing`
pub trait ListingFilterExt<'a>: IntoIterator<Item = &'a Listing> + Sized {
    /// Keep the listings matching `query` and `criteria`, preserving order
    fn matching(self, query: &str, criteria: &FilterCriteria) -> Vec<&'a Listing> {
        let needle = normalize_query(query);
        self.into_iter()
            .filter(|l| matches_normalized(l, &needle, criteria))
            .collect()
    }
}

impl<'a, I> ListingFilterExt<'a> for I where I: IntoIterator<Item = &'a Listing> {}
