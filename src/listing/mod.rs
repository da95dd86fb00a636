//! Listing records
//!
//! A listing is one rental property in the catalog. Listings are supplied
//! once per session and are read-only apart from the favorite flag.

pub mod types;

pub use types::{Coordinates, Landlord, Listing, PropertyType};
