//! Browse command - interactive search session

use crate::{
    RentrError,
    browse::{self, BrowseSession},
    catalog::Catalog,
    output::OutputWriter,
    saved::SavedSearchManager,
    search::{FilterCriteria, PriceBounds},
    ui::UserInput,
};

type Result<T> = std::result::Result<T, RentrError>;

/// Execute the browse command
///
/// The session starts from the optional query and criteria (or a saved
/// search refined by them) and runs until `/quit` or end of input.
///
/// # Errors
/// Returns an error if the saved search cannot be loaded or terminal input fails
#[allow(clippy::too_many_arguments)]
pub fn execute(
    catalog: Catalog,
    manager: &SavedSearchManager,
    query: Option<&str>,
    criteria: &FilterCriteria,
    price: PriceBounds,
    from: Option<&str>,
    input: &dyn UserInput,
    out: &dyn OutputWriter,
) -> Result<()> {
    let state = super::search::resolve_state(manager, query, criteria, price, from, out)?;
    let mut session = BrowseSession::new(catalog, state);

    out.info("Type to search, /help for commands, /quit to leave.");
    browse::run(&mut session, input, out)?;
    Ok(())
}
