//! Machine-readable result export (CSV and JSON)

use crate::listing::Listing;
use serde::Serialize;
use std::io::Write;

/// Flat CSV row; amenities are joined with `;`
#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    id: &'a str,
    title: &'a str,
    address: &'a str,
    city: &'a str,
    state: &'a str,
    zip_code: &'a str,
    price: u32,
    bedrooms: u32,
    bathrooms: u32,
    sqft: u32,
    property_type: &'static str,
    amenities: String,
    pet_friendly: bool,
    furnished: bool,
    parking_spaces: u32,
    available: bool,
    available_date: String,
    is_favorite: bool,
}

impl<'a> From<&'a Listing> for CsvRow<'a> {
    fn from(listing: &'a Listing) -> Self {
        Self {
            id: &listing.id,
            title: &listing.title,
            address: &listing.address,
            city: &listing.city,
            state: &listing.state,
            zip_code: &listing.zip_code,
            price: listing.price,
            bedrooms: listing.bedrooms,
            bathrooms: listing.bathrooms,
            sqft: listing.sqft,
            property_type: listing.property_type.as_str(),
            amenities: listing.amenities.join(";"),
            pet_friendly: listing.pet_friendly,
            furnished: listing.furnished,
            parking_spaces: listing.parking_spaces,
            available: listing.available,
            available_date: listing.available_date.to_string(),
            is_favorite: listing.is_favorite,
        }
    }
}

/// Write listings as CSV with a header row
///
/// # Errors
///
/// Returns `csv::Error` if a row cannot be written.
pub fn write_csv<W: Write>(listings: &[&Listing], writer: W) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for listing in listings {
        csv_writer.serialize(CsvRow::from(*listing))?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Serialize listings as a pretty JSON array (catalog format)
///
/// # Errors
///
/// Returns `serde_json::Error` if serialization fails.
pub fn to_json(listings: &[&Listing]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(listings)
}
