//! Browse loop controller
//!
//! Reads lines through a `UserInput`, feeds them to the `BrowseSession`
//! reducer, and renders each outcome through an `OutputWriter`. Parse and
//! lookup errors are reported and the loop continues.

use super::command::SessionCommand;
use super::session::{BrowseSession, Outcome};
use crate::output::{self, OutputWriter};
use crate::ui::{InputResult, UserInput};
use tracing::info;

const PROMPT: &str = "search (/help)";

/// Render the current result list
pub fn render_results(session: &BrowseSession, out: &dyn OutputWriter) {
    let results = session.results();

    if results.is_empty() {
        out.warning("No properties found");
        out.info("Try adjusting your search or filters (/reset clears filters)");
        return;
    }

    out.info(&output::results_header(results.len()));
    for listing in results {
        out.write(&output::listing_card(listing, false));
    }
}

/// Run the interactive loop until `/quit` or end of input
///
/// Returns the number of commands applied.
///
/// # Errors
///
/// Returns `InputError` if reading from the terminal fails.
pub fn run(
    session: &mut BrowseSession,
    input: &dyn UserInput,
    out: &dyn OutputWriter,
) -> InputResult<usize> {
    let mut applied = 0;
    render_results(session, out);

    while let Some(line) = input.prompt_line(PROMPT)? {
        let command = match line.parse::<SessionCommand>() {
            Ok(command) => command,
            Err(e) => {
                out.error(&e.to_string());
                continue;
            }
        };

        match session.apply(command) {
            Ok(Outcome::Refresh) => render_results(session, out),
            Ok(Outcome::Show(id)) => {
                if let Some(listing) = session.catalog().get(&id) {
                    out.write(&output::listing_detail(listing));
                }
            }
            Ok(Outcome::Message(text)) => out.write(&text),
            Ok(Outcome::Quit) => {
                applied += 1;
                break;
            }
            Err(e) => {
                out.error(&e.to_string());
                continue;
            }
        }
        applied += 1;
    }

    info!(applied, "browse session ended");
    Ok(applied)
}
