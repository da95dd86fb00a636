//! Favorites command - listings marked as favorite in the catalog

use crate::{RentrError, catalog::Catalog, output::{self, OutputWriter}};

type Result<T> = std::result::Result<T, RentrError>;

/// Execute the favorites command
///
/// # Errors
/// Currently infallible; returns `Result` for consistency with other commands
pub fn execute(catalog: &Catalog, quiet: bool, out: &dyn OutputWriter) -> Result<()> {
    let favorites = catalog.favorites();

    if favorites.is_empty() {
        out.info("No favorites yet.");
        return Ok(());
    }

    out.info(&format!("{} favorite(s):", favorites.len()));
    for listing in favorites {
        out.write(&output::listing_card(listing, quiet));
    }
    Ok(())
}
