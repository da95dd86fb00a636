//! Filter criteria
//!
//! This module defines the structured (non-text) half of a search:
//! - `PriceRange`: Inclusive monthly rent interval
//! - `PriceBounds`: Individually given bounds laid over a range
//! - `FilterCriteria`: Every optional filter dimension
//! - `FilterCriteriaBuilder`: Fluent construction
//!
//! Unset dimensions are `None` (or an empty list) and do not restrict the
//! result. The criteria value is always replaced wholesale when filters are
//! applied or reset.

use crate::listing::PropertyType;
use serde::{Deserialize, Serialize};

/// Upper bound of the price range after a reset
pub const DEFAULT_MAX_PRICE: u32 = 10_000;

/// Inclusive price interval `[min, max]`
///
/// An inverted range (`min > max`) is representable and simply matches
/// nothing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PriceRange {
    pub min: u32,
    pub max: u32,
}

impl PriceRange {
    #[must_use]
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Check whether a price lies within the bounds (both inclusive)
    #[must_use]
    pub const fn contains(self, price: u32) -> bool {
        price >= self.min && price <= self.max
    }

    /// True when `min > max`, which can never match
    #[must_use]
    pub const fn is_inverted(self) -> bool {
        self.min > self.max
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::new(0, DEFAULT_MAX_PRICE)
    }
}

impl std::fmt::Display for PriceRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} - {}",
            crate::output::format_price(self.min),
            crate::output::format_price(self.max)
        )
    }
}

/// Price bounds given one at a time, as `--min-price` and `--max-price` are
///
/// A bound that was not given keeps the value of the range it is laid over.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PriceBounds {
    pub min: Option<u32>,
    pub max: Option<u32>,
}

impl PriceBounds {
    #[must_use]
    pub const fn new(min: Option<u32>, max: Option<u32>) -> Self {
        Self { min, max }
    }

    #[must_use]
    pub const fn is_unset(self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    /// Replace the bounds of `base` that were given
    #[must_use]
    pub fn over(self, base: PriceRange) -> PriceRange {
        PriceRange::new(self.min.unwrap_or(base.min), self.max.unwrap_or(base.max))
    }
}

/// Structured search criteria
///
/// Serializes to TOML for saved searches; unset fields are omitted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct FilterCriteria {
    /// Minimum number of bedrooms
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_bedrooms: Option<u32>,

    /// Minimum number of bathrooms
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_bathrooms: Option<u32>,

    /// Accepted property types (empty = any type)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub property_types: Vec<PropertyType>,

    /// Amenities a listing must all have (empty = no requirement)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub amenities: Vec<String>,

    /// Required pet policy
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pet_friendly: Option<bool>,

    /// Required furnished status
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub furnished: Option<bool>,

    /// Require at least one parking space when `Some(true)`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parking_required: Option<bool>,

    /// Inclusive monthly rent bounds
    #[serde(default)]
    pub price_range: PriceRange,
}

impl FilterCriteria {
    /// Create a new filter criteria builder
    #[must_use]
    pub fn builder() -> FilterCriteriaBuilder {
        FilterCriteriaBuilder::default()
    }

    /// Create criteria that restrict nothing but the default price range
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The criteria a "Reset" action produces
    #[must_use]
    pub fn reset() -> Self {
        Self::default()
    }

    /// Whether parking is actually required
    #[must_use]
    pub fn requires_parking(&self) -> bool {
        self.parking_required.unwrap_or(false)
    }

    /// Number of dimensions that currently restrict results
    #[must_use]
    pub fn active_count(&self) -> usize {
        [
            self.price_range != PriceRange::default(),
            self.min_bedrooms.is_some(),
            self.min_bathrooms.is_some(),
            !self.property_types.is_empty(),
            !self.amenities.is_empty(),
            self.pet_friendly.is_some(),
            self.furnished.is_some(),
            self.requires_parking(),
        ]
        .into_iter()
        .filter(|active| *active)
        .count()
    }

    /// True if no dimension restricts results
    #[must_use]
    pub fn is_unrestricted(&self) -> bool {
        self.active_count() == 0
    }

    /// Overlay the explicitly set dimensions of `other`
    ///
    /// Used when command-line flags refine a saved search:
    /// - Thresholds and tri-state flags that are set replace ours
    /// - Property types and amenities are added
    ///
    /// The price range is left alone. A range cannot tell which of its
    /// bounds were given, so callers lay [`PriceBounds`] over it instead.
    pub fn merge(&mut self, other: &Self) {
        if other.min_bedrooms.is_some() {
            self.min_bedrooms = other.min_bedrooms;
        }
        if other.min_bathrooms.is_some() {
            self.min_bathrooms = other.min_bathrooms;
        }

        for ty in &other.property_types {
            if !self.property_types.contains(ty) {
                self.property_types.push(*ty);
            }
        }

        for amenity in &other.amenities {
            if !self.amenities.contains(amenity) {
                self.amenities.push(amenity.clone());
            }
        }

        if other.pet_friendly.is_some() {
            self.pet_friendly = other.pet_friendly;
        }
        if other.furnished.is_some() {
            self.furnished = other.furnished;
        }
        if other.parking_required.is_some() {
            self.parking_required = other.parking_required;
        }
    }

    /// Add the amenity if absent, remove it if present
    pub fn toggle_amenity(&mut self, amenity: &str) {
        if let Some(pos) = self.amenities.iter().position(|a| a == amenity) {
            self.amenities.remove(pos);
        } else {
            self.amenities.push(amenity.to_string());
        }
    }

    /// Validate the criteria before storing it
    ///
    /// The filter engine accepts any criteria; this only guards saved
    /// searches against values that could never match.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The price range is inverted
    /// - An amenity label is blank
    pub fn validate(&self) -> Result<(), String> {
        if self.price_range.is_inverted() {
            return Err(format!(
                "Minimum price {} is above maximum price {}",
                self.price_range.min, self.price_range.max
            ));
        }

        if self.amenities.iter().any(|a| a.trim().is_empty()) {
            return Err("Amenity labels cannot be empty".to_string());
        }

        Ok(())
    }
}

/// Builder for `FilterCriteria`
#[derive(Debug, Clone, Default)]
pub struct FilterCriteriaBuilder {
    price_range: Option<PriceRange>,
    min_bedrooms: Option<u32>,
    min_bathrooms: Option<u32>,
    property_types: Vec<PropertyType>,
    amenities: Vec<String>,
    pet_friendly: Option<bool>,
    furnished: Option<bool>,
    parking_required: Option<bool>,
}

impl FilterCriteriaBuilder {
    /// Set the inclusive price bounds
    #[must_use]
    pub const fn price_range(mut self, min: u32, max: u32) -> Self {
        self.price_range = Some(PriceRange::new(min, max));
        self
    }

    /// Require at least this many bedrooms
    #[must_use]
    pub const fn min_bedrooms(mut self, beds: u32) -> Self {
        self.min_bedrooms = Some(beds);
        self
    }

    /// Require at least this many bathrooms
    #[must_use]
    pub const fn min_bathrooms(mut self, baths: u32) -> Self {
        self.min_bathrooms = Some(baths);
        self
    }

    /// Accept a property type (repeatable)
    #[must_use]
    pub fn property_type(mut self, ty: PropertyType) -> Self {
        if !self.property_types.contains(&ty) {
            self.property_types.push(ty);
        }
        self
    }

    /// Accept these property types
    #[must_use]
    pub fn property_types(mut self, types: impl IntoIterator<Item = PropertyType>) -> Self {
        for ty in types {
            self = self.property_type(ty);
        }
        self
    }

    /// Require an amenity (repeatable)
    #[must_use]
    pub fn amenity(mut self, amenity: impl Into<String>) -> Self {
        let amenity = amenity.into();
        if !self.amenities.contains(&amenity) {
            self.amenities.push(amenity);
        }
        self
    }

    /// Require all of these amenities
    #[must_use]
    pub fn amenities<S: Into<String>>(mut self, amenities: impl IntoIterator<Item = S>) -> Self {
        for amenity in amenities {
            self = self.amenity(amenity);
        }
        self
    }

    #[must_use]
    pub const fn pet_friendly(mut self, pets: bool) -> Self {
        self.pet_friendly = Some(pets);
        self
    }

    #[must_use]
    pub const fn furnished(mut self, furnished: bool) -> Self {
        self.furnished = Some(furnished);
        self
    }

    #[must_use]
    pub const fn parking_required(mut self, required: bool) -> Self {
        self.parking_required = Some(required);
        self
    }

    /// Build the `FilterCriteria`
    #[must_use]
    pub fn build(self) -> FilterCriteria {
        FilterCriteria {
            min_bedrooms: self.min_bedrooms,
            min_bathrooms: self.min_bathrooms,
            property_types: self.property_types,
            amenities: self.amenities,
            pet_friendly: self.pet_friendly,
            furnished: self.furnished,
            parking_required: self.parking_required,
            price_range: self.price_range.unwrap_or_default(),
        }
    }
}

impl std::fmt::Display for FilterCriteria {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Price: {}", self.price_range)?;

        match self.min_bedrooms {
            Some(beds) => writeln!(f, "Bedrooms: {beds}+")?,
            None => writeln!(f, "Bedrooms: any")?,
        }

        match self.min_bathrooms {
            Some(baths) => writeln!(f, "Bathrooms: {baths}+")?,
            None => writeln!(f, "Bathrooms: any")?,
        }

        if self.property_types.is_empty() {
            writeln!(f, "Property Types: any")?;
        } else {
            let labels: Vec<&str> = self.property_types.iter().map(|t| t.label()).collect();
            writeln!(f, "Property Types: {}", labels.join(", "))?;
        }

        if !self.amenities.is_empty() {
            writeln!(f, "Amenities: {}", self.amenities.join(", "))?;
        }

        if let Some(pets) = self.pet_friendly {
            writeln!(f, "Pet Friendly: {}", if pets { "yes" } else { "no" })?;
        }

        if let Some(furnished) = self.furnished {
            writeln!(f, "Furnished: {}", if furnished { "yes" } else { "no" })?;
        }

        if self.requires_parking() {
            writeln!(f, "Parking: required")?;
        }

        Ok(())
    }
}
