//! Testing utilities for rentr
//!
//! This module provides a `ListingBuilder` for constructing listing fixtures
//! with only the fields a test cares about, plus recording/scripted doubles
//! for the output and input traits.
//!
//! Only available when compiled with `cfg(test)`.

use crate::catalog::Catalog;
use crate::listing::{Coordinates, Landlord, Listing, PropertyType};
use crate::output::OutputWriter;
use crate::ui::{InputResult, UserInput};
use chrono::NaiveDate;
use std::cell::RefCell;
use std::collections::VecDeque;

/// Builder for listing fixtures
///
/// Every field has a neutral default: $1,000/mo, 1 bed / 1 bath apartment,
/// no amenities, not pet friendly, unfurnished, no parking, not a favorite.
///
/// # Examples
/// ```ignore
/// let listing = ListingBuilder::new("42")
///     .title("Sunny Loft")
///     .price(2400)
///     .amenities(&["Gym"])
///     .build();
/// ```
pub struct ListingBuilder {
    listing: Listing,
}

impl ListingBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            listing: Listing {
                id: id.to_string(),
                title: format!("Listing {id}"),
                address: format!("{id} Test Street"),
                city: "Testville".to_string(),
                state: "CA".to_string(),
                zip_code: "90000".to_string(),
                price: 1000,
                bedrooms: 1,
                bathrooms: 1,
                sqft: 600,
                property_type: PropertyType::Apartment,
                images: Vec::new(),
                description: String::new(),
                amenities: Vec::new(),
                landlord: Landlord {
                    name: "Test Landlord".to_string(),
                    phone: "+1 (555) 000-0000".to_string(),
                    email: "landlord@example.com".to_string(),
                    avatar: None,
                },
                coordinates: Coordinates {
                    latitude: 0.0,
                    longitude: 0.0,
                },
                available: true,
                available_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default(),
                pet_friendly: false,
                furnished: false,
                parking_spaces: 0,
                year_built: None,
                is_favorite: false,
            },
        }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.listing.title = title.to_string();
        self
    }

    pub fn address(mut self, street: &str, city: &str) -> Self {
        self.listing.address = street.to_string();
        self.listing.city = city.to_string();
        self
    }

    pub fn description(mut self, description: &str) -> Self {
        self.listing.description = description.to_string();
        self
    }

    pub const fn price(mut self, price: u32) -> Self {
        self.listing.price = price;
        self
    }

    pub const fn rooms(mut self, bedrooms: u32, bathrooms: u32) -> Self {
        self.listing.bedrooms = bedrooms;
        self.listing.bathrooms = bathrooms;
        self
    }

    pub const fn property_type(mut self, ty: PropertyType) -> Self {
        self.listing.property_type = ty;
        self
    }

    pub fn amenities(mut self, amenities: &[&str]) -> Self {
        self.listing.amenities = amenities.iter().map(ToString::to_string).collect();
        self
    }

    pub const fn pet_friendly(mut self, pets: bool) -> Self {
        self.listing.pet_friendly = pets;
        self
    }

    pub const fn furnished(mut self, furnished: bool) -> Self {
        self.listing.furnished = furnished;
        self
    }

    pub const fn parking_spaces(mut self, spaces: u32) -> Self {
        self.listing.parking_spaces = spaces;
        self
    }

    pub const fn favorite(mut self, favorite: bool) -> Self {
        self.listing.is_favorite = favorite;
        self
    }

    pub fn build(self) -> Listing {
        self.listing
    }
}

/// Catalog of three listings priced 1500, 2000 and 4500
///
/// # Panics
/// Never; the ids are distinct.
pub fn priced_catalog() -> Catalog {
    Catalog::new(vec![
        ListingBuilder::new("1").price(1500).build(),
        ListingBuilder::new("2").price(2000).build(),
        ListingBuilder::new("3").price(4500).build(),
    ])
    .expect("fixture ids are unique")
}

/// Message level recorded by `RecordingWriter`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Normal,
    Error,
    Success,
    Warning,
    Info,
}

/// Writer that records messages for assertions
#[derive(Default)]
pub struct RecordingWriter {
    pub messages: RefCell<Vec<(MessageLevel, String)>>,
}

impl RecordingWriter {
    pub fn contains(&self, level: MessageLevel, needle: &str) -> bool {
        self.messages
            .borrow()
            .iter()
            .any(|(l, m)| *l == level && m.contains(needle))
    }

    /// All messages of one level, in order
    pub fn at(&self, level: MessageLevel) -> Vec<String> {
        self.messages
            .borrow()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }

    fn push(&self, level: MessageLevel, message: &str) {
        self.messages.borrow_mut().push((level, message.to_string()));
    }
}

impl OutputWriter for RecordingWriter {
    fn write(&self, message: &str) {
        self.push(MessageLevel::Normal, message);
    }

    fn error(&self, message: &str) {
        self.push(MessageLevel::Error, message);
    }

    fn success(&self, message: &str) {
        self.push(MessageLevel::Success, message);
    }

    fn warning(&self, message: &str) {
        self.push(MessageLevel::Warning, message);
    }

    fn info(&self, message: &str) {
        self.push(MessageLevel::Info, message);
    }
}

/// Input that replays scripted lines, then reports end of input
pub struct ScriptedInput {
    lines: RefCell<VecDeque<String>>,
    confirm: bool,
}

impl ScriptedInput {
    pub fn new(lines: &[&str]) -> Self {
        Self {
            lines: RefCell::new(lines.iter().map(ToString::to_string).collect()),
            confirm: true,
        }
    }

    pub const fn confirming(mut self, confirm: bool) -> Self {
        self.confirm = confirm;
        self
    }
}

impl UserInput for ScriptedInput {
    fn prompt_line(&self, _prompt: &str) -> InputResult<Option<String>> {
        Ok(self.lines.borrow_mut().pop_front())
    }

    fn prompt_confirm(&self, _prompt: &str, _default: bool) -> InputResult<bool> {
        Ok(self.confirm)
    }
}
