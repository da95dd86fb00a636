//! Output formatting for CLI display
//!
//! This module provides utilities for rendering listings in the terminal:
//! prices, listing cards for result lists, and the full detail view.
//! Machine-readable exports live in [`export`]; the message sink used by
//! commands lives in [`writer`].

pub mod export;
pub mod writer;

pub use writer::{OutputWriter, StdoutWriter};

use crate::listing::Listing;
use crate::search::{FilterCriteria, Predicate};
use colored::Colorize;

/// Number of amenities shown on a listing card before "+N more"
const CARD_AMENITIES: usize = 3;

/// Format a whole-dollar amount with thousands separators (`$12,500`)
#[must_use]
pub fn format_price(amount: u32) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("${grouped}")
}

/// Monthly rent label (`$3,200/mo`)
#[must_use]
pub fn price_per_month(amount: u32) -> String {
    format!("{}/mo", format_price(amount))
}

/// "N properties found"
#[must_use]
pub fn results_header(count: usize) -> String {
    match count {
        1 => "1 property found".to_string(),
        n => format!("{n} properties found"),
    }
}

/// Bedroom label; zero bedrooms is a studio
#[must_use]
pub fn bedrooms_label(bedrooms: u32) -> String {
    if bedrooms == 0 {
        "studio".to_string()
    } else {
        format!("{bedrooms} bed")
    }
}

fn heart(listing: &Listing) -> String {
    if listing.is_favorite {
        "♥".red().to_string()
    } else {
        "♡".dimmed().to_string()
    }
}

/// Compact multi-line card for result lists
///
/// In quiet mode only `id<TAB>title` is printed, for scripting.
#[must_use]
pub fn listing_card(listing: &Listing, quiet: bool) -> String {
    if quiet {
        return format!("{}\t{}", listing.id, listing.title);
    }

    let mut card = format!(
        "{} [{}] {}  {}\n",
        heart(listing),
        listing.id.cyan(),
        listing.title.bold(),
        price_per_month(listing.price).green()
    );

    card.push_str(&format!("    {}\n", listing.short_address().dimmed()));
    card.push_str(&format!(
        "    {} · {} bath · {} sq ft · {}",
        bedrooms_label(listing.bedrooms),
        listing.bathrooms,
        listing.sqft,
        listing.property_type.label()
    ));

    if !listing.amenities.is_empty() {
        let shown: Vec<&str> = listing
            .amenities
            .iter()
            .take(CARD_AMENITIES)
            .map(String::as_str)
            .collect();
        let more = listing.amenities.len().saturating_sub(CARD_AMENITIES);

        card.push_str(&format!("\n    {}", shown.join(", ")));
        if more > 0 {
            card.push_str(&format!(" +{more} more"));
        }
    }

    card
}

fn yes_no(value: bool) -> &'static str {
    if value { "Yes" } else { "No" }
}

/// Full detail view of a listing
#[must_use]
pub fn listing_detail(listing: &Listing) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{} {}\n",
        heart(listing),
        listing.title.bold()
    ));
    out.push_str(&format!("{}\n", listing.full_address().dimmed()));
    out.push_str(&format!("{}\n\n", price_per_month(listing.price).green().bold()));

    out.push_str(&format!(
        "{} · {} bath · {} sq ft · {}\n",
        bedrooms_label(listing.bedrooms),
        listing.bathrooms,
        listing.sqft,
        listing.property_type.label()
    ));
    out.push_str(&format!("Parking: {} space(s)\n", listing.parking_spaces));
    out.push_str(&format!("Pet Friendly: {}\n", yes_no(listing.pet_friendly)));
    out.push_str(&format!("Furnished: {}\n", yes_no(listing.furnished)));
    if let Some(year) = listing.year_built {
        out.push_str(&format!("Year Built: {year}\n"));
    }

    let availability = if listing.available {
        format!("Available from {}", listing.available_date.format("%B %-d, %Y"))
    } else {
        "Not currently available".to_string()
    };
    out.push_str(&format!("{availability}\n"));

    if !listing.description.is_empty() {
        out.push_str(&format!("\n{}\n{}\n", "About".bold(), listing.description));
    }

    if !listing.amenities.is_empty() {
        out.push_str(&format!("\n{}\n", "Amenities".bold()));
        for amenity in &listing.amenities {
            out.push_str(&format!("  • {amenity}\n"));
        }
    }

    out.push_str(&format!("\n{}\n", "Landlord".bold()));
    out.push_str(&format!("  {}\n", listing.landlord.name));
    out.push_str(&format!("  Phone: {}\n", listing.landlord.phone));
    out.push_str(&format!("  Email: {}\n", listing.landlord.email));

    out.push_str(&format!(
        "\nLocation: {:.4}, {:.4}",
        listing.coordinates.latitude, listing.coordinates.longitude
    ));

    out
}

/// One line per failed predicate, for explaining why a listing is hidden
#[must_use]
pub fn rejection_summary(listing: &Listing, failed: &[Predicate], criteria: &FilterCriteria) -> String {
    if failed.is_empty() {
        return format!("[{}] matches the current search", listing.id);
    }

    let reasons: Vec<String> = failed
        .iter()
        .map(|p| match p {
            Predicate::Price => format!("price {} outside {}", format_price(listing.price), criteria.price_range),
            other => other.label().to_string(),
        })
        .collect();

    format!("[{}] excluded by: {}", listing.id, reasons.join(", "))
}
