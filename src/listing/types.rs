//! Listing data structures
//!
//! This module defines the records that make up the catalog:
//! - `Listing`: A single rental property
//! - `PropertyType`: The fixed set of property categories
//! - `Landlord`: Contact details shown on the detail view
//! - `Coordinates`: Map position of the property

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Property category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    Apartment,
    House,
    Condo,
    Townhouse,
}

impl PropertyType {
    /// Every category, in display order
    pub const ALL: [Self; 4] = [Self::Apartment, Self::House, Self::Condo, Self::Townhouse];

    /// Lowercase identifier used in files and on the command line
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Apartment => "apartment",
            Self::House => "house",
            Self::Condo => "condo",
            Self::Townhouse => "townhouse",
        }
    }

    /// Capitalized label for display
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Apartment => "Apartment",
            Self::House => "House",
            Self::Condo => "Condo",
            Self::Townhouse => "Townhouse",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PropertyType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "apartment" => Ok(Self::Apartment),
            "house" => Ok(Self::House),
            "condo" => Ok(Self::Condo),
            "townhouse" => Ok(Self::Townhouse),
            other => Err(format!(
                "Unknown property type '{other}' (expected apartment, house, condo or townhouse)"
            )),
        }
    }
}

/// Landlord contact details
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Landlord {
    pub name: String,
    pub phone: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// Map position
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// A single rental property record
///
/// Everything except `is_favorite` is read-only once the catalog is loaded.
/// Field names follow the camelCase keys of the catalog JSON.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    /// Unique identifier within a catalog
    pub id: String,

    pub title: String,

    /// Street address (without city)
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,

    /// Monthly rent in whole dollars
    pub price: u32,
    pub bedrooms: u32,
    pub bathrooms: u32,

    /// Floor area in square feet
    pub sqft: u32,

    pub property_type: PropertyType,

    #[serde(default)]
    pub images: Vec<String>,

    #[serde(default)]
    pub description: String,

    /// Amenity labels, matched exactly (case-sensitive)
    #[serde(default)]
    pub amenities: Vec<String>,

    pub landlord: Landlord,
    pub coordinates: Coordinates,

    pub available: bool,
    pub available_date: NaiveDate,
    pub pet_friendly: bool,
    pub furnished: bool,
    pub parking_spaces: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year_built: Option<u16>,

    #[serde(default)]
    pub is_favorite: bool,
}

impl Listing {
    /// Street address and city on one line, as shown on listing cards
    #[must_use]
    pub fn short_address(&self) -> String {
        format!("{}, {}", self.address, self.city)
    }

    /// Full postal address
    #[must_use]
    pub fn full_address(&self) -> String {
        format!("{}, {}, {} {}", self.address, self.city, self.state, self.zip_code)
    }

    /// Check whether the listing carries an amenity label
    #[must_use]
    pub fn has_amenity(&self, amenity: &str) -> bool {
        self.amenities.iter().any(|a| a == amenity)
    }

    /// Whether at least one parking space comes with the listing
    #[must_use]
    pub const fn has_parking(&self) -> bool {
        self.parking_spaces > 0
    }
}
