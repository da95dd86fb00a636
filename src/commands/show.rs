//! Show command - full details of one listing

use crate::{RentrError, catalog::Catalog, output::{self, OutputWriter}};

type Result<T> = std::result::Result<T, RentrError>;

/// Execute the show command
///
/// # Errors
/// Returns `RentrError::ListingNotFound` if no listing has the given id
pub fn execute(catalog: &Catalog, id: &str, out: &dyn OutputWriter) -> Result<()> {
    let listing = catalog
        .get(id)
        .ok_or_else(|| RentrError::ListingNotFound(id.to_string()))?;

    out.write(&output::listing_detail(listing));
    Ok(())
}
