//! Browse session state and command reducer
//!
//! `BrowseSession` owns the catalog and the current `SearchState`. Applying
//! a `SessionCommand` mutates that state and returns an `Outcome` telling the
//! front end what to render next. The visible listings are always re-derived
//! from the catalog, never cached.
//!
//! ```text
//! input line ──parse──▶ SessionCommand ──apply──▶ Outcome
//!                                                   ├─ Refresh  → render results
//!                                                   ├─ Show(id) → render detail
//!                                                   ├─ Message  → print text
//!                                                   └─ Quit
//! ```

use super::command::{HELP, SessionCommand, SessionError};
use crate::catalog::Catalog;
use crate::listing::Listing;
use crate::output;
use crate::search::{PriceRange, SearchState, rejections};
use tracing::debug;

/// What the front end should do after a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Results may have changed; render them again
    Refresh,
    /// Render the detail view of this listing
    Show(String),
    /// Print this text
    Message(String),
    /// End the session
    Quit,
}

/// Interactive browse session
pub struct BrowseSession {
    catalog: Catalog,
    state: SearchState,
}

impl BrowseSession {
    #[must_use]
    pub const fn new(catalog: Catalog, state: SearchState) -> Self {
        Self { catalog, state }
    }

    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub const fn state(&self) -> &SearchState {
        &self.state
    }

    /// Listings matching the current state, in catalog order
    #[must_use]
    pub fn results(&self) -> Vec<&Listing> {
        self.state.results(&self.catalog)
    }

    fn listing(&self, id: &str) -> Result<&Listing, SessionError> {
        self.catalog
            .get(id)
            .ok_or_else(|| SessionError::UnknownListing(id.to_string()))
    }

    fn describe_filters(&self) -> String {
        let query = if self.state.query().is_empty() {
            "(none)"
        } else {
            self.state.query()
        };
        format!(
            "Query: {query}\n{}\nActive filters: {}",
            self.state.criteria(),
            self.state.criteria().active_count()
        )
    }

    fn describe_favorites(&self) -> String {
        let favorites = self.catalog.favorites();
        if favorites.is_empty() {
            return "No favorites yet (use /fav ID)".to_string();
        }

        favorites
            .iter()
            .map(|l| output::listing_card(l, false))
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Apply one command
    ///
    /// # Errors
    ///
    /// Returns `SessionError::UnknownListing` when a listing command names an
    /// id that is not in the catalog. The session state is unchanged.
    pub fn apply(&mut self, command: SessionCommand) -> Result<Outcome, SessionError> {
        debug!(?command, "applying session command");

        let outcome = match command {
            SessionCommand::Query(text) => {
                self.state.set_query(text);
                Outcome::Refresh
            }
            SessionCommand::ClearQuery => {
                self.state.clear_query();
                Outcome::Refresh
            }
            SessionCommand::Price { min, max } => {
                self.state.edit(|c| c.price_range = PriceRange::new(min, max));
                Outcome::Refresh
            }
            SessionCommand::Beds(min) => {
                self.state.edit(|c| c.min_bedrooms = min);
                Outcome::Refresh
            }
            SessionCommand::Baths(min) => {
                self.state.edit(|c| c.min_bathrooms = min);
                Outcome::Refresh
            }
            SessionCommand::Types(types) => {
                self.state.edit(|c| c.property_types = types);
                Outcome::Refresh
            }
            SessionCommand::Amenity(label) => {
                self.state.edit(|c| c.toggle_amenity(&label));
                Outcome::Refresh
            }
            SessionCommand::Pets(pets) => {
                self.state.edit(|c| c.pet_friendly = pets);
                Outcome::Refresh
            }
            SessionCommand::Furnished(furnished) => {
                self.state.edit(|c| c.furnished = furnished);
                Outcome::Refresh
            }
            SessionCommand::Parking(required) => {
                self.state.edit(|c| c.parking_required = required.then_some(true));
                Outcome::Refresh
            }
            SessionCommand::Reset => {
                self.state.reset();
                Outcome::Refresh
            }
            SessionCommand::Favorite(id) => {
                let listing = self
                    .catalog
                    .toggle_favorite(&id)
                    .ok_or_else(|| SessionError::UnknownListing(id.clone()))?;
                let verb = if listing.is_favorite { "Added" } else { "Removed" };
                let prep = if listing.is_favorite { "to" } else { "from" };
                Outcome::Message(format!("{verb} '{}' {prep} favorites", listing.title))
            }
            SessionCommand::Show(id) => {
                self.listing(&id)?;
                Outcome::Show(id)
            }
            SessionCommand::Why(id) => {
                let listing = self.listing(&id)?;
                let failed = rejections(listing, self.state.query(), self.state.criteria());
                Outcome::Message(output::rejection_summary(listing, &failed, self.state.criteria()))
            }
            SessionCommand::Amenities => {
                Outcome::Message(format!("Amenities: {}", self.catalog.amenities().join(", ")))
            }
            SessionCommand::Favorites => Outcome::Message(self.describe_favorites()),
            SessionCommand::Filters => Outcome::Message(self.describe_filters()),
            SessionCommand::Help => Outcome::Message(HELP.to_string()),
            SessionCommand::Quit => Outcome::Quit,
        };

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::FilterCriteria;
    use crate::testing::{ListingBuilder, priced_catalog};

    fn seed_session() -> BrowseSession {
        BrowseSession::new(Catalog::seed().unwrap(), SearchState::default())
    }

    fn ids(session: &BrowseSession) -> Vec<String> {
        session.results().iter().map(|l| l.id.clone()).collect()
    }

    fn run(session: &mut BrowseSession, line: &str) -> Outcome {
        session.apply(line.parse().unwrap()).unwrap()
    }

    #[test]
    fn test_query_then_clear() {
        let mut session = seed_session();

        assert_eq!(run(&mut session, "downtown"), Outcome::Refresh);
        assert_eq!(ids(&session), vec!["1", "5"]);

        run(&mut session, "/clear");
        assert_eq!(session.results().len(), 6);
    }

    #[test]
    fn test_price_scenario() {
        let mut session = BrowseSession::new(priced_catalog(), SearchState::default());
        run(&mut session, "/price 1000 3000");
        assert_eq!(ids(&session), vec!["1", "2"]);
    }

    #[test]
    fn test_inverted_price_is_empty_not_error() {
        let mut session = seed_session();
        assert_eq!(run(&mut session, "/price 5000 1000"), Outcome::Refresh);
        assert!(session.results().is_empty());
    }

    #[test]
    fn test_filters_combine() {
        let mut session = seed_session();
        run(&mut session, "san francisco");
        run(&mut session, "/beds 2");
        run(&mut session, "/type condo");
        assert_eq!(ids(&session), vec!["3"]);

        run(&mut session, "/type");
        assert_eq!(ids(&session), vec!["1", "3"]);

        run(&mut session, "/beds any");
        assert_eq!(ids(&session), vec!["1", "3", "5"]);
    }

    #[test]
    fn test_amenity_toggles() {
        let mut session = seed_session();
        run(&mut session, "/amenity Garden");
        assert_eq!(ids(&session), vec!["2", "4", "6"]);

        run(&mut session, "/amenity Garage");
        assert_eq!(ids(&session), vec!["2", "6"]);

        run(&mut session, "/amenity Garden");
        run(&mut session, "/amenity Garage");
        assert_eq!(session.results().len(), 6);
    }

    #[test]
    fn test_flags_and_parking() {
        let mut session = seed_session();
        run(&mut session, "/pets yes");
        assert_eq!(ids(&session), vec!["2", "4", "6"]);

        run(&mut session, "/parking on");
        assert_eq!(ids(&session), vec!["2", "6"]);

        run(&mut session, "/pets any");
        run(&mut session, "/furnished yes");
        assert_eq!(ids(&session), vec!["1", "3"]);

        run(&mut session, "/parking off");
        assert_eq!(session.state().criteria().parking_required, None);
        assert_eq!(ids(&session), vec!["1", "3", "5"]);
    }

    #[test]
    fn test_reset_keeps_query() {
        let mut session = seed_session();
        run(&mut session, "san francisco");
        run(&mut session, "/beds 3");
        assert!(session.results().is_empty());

        run(&mut session, "/reset");
        assert_eq!(session.state().criteria(), &FilterCriteria::default());
        assert_eq!(session.state().query(), "san francisco");
        assert_eq!(ids(&session), vec!["1", "3", "5"]);
    }

    #[test]
    fn test_favorite_toggle_flips_one_listing() {
        let mut session = seed_session();
        let before: Vec<bool> = session.catalog().listings().iter().map(|l| l.is_favorite).collect();

        let outcome = run(&mut session, "/fav 1");
        assert!(matches!(outcome, Outcome::Message(ref m) if m.contains("Added")));

        let after: Vec<bool> = session.catalog().listings().iter().map(|l| l.is_favorite).collect();
        let flipped = before.iter().zip(&after).filter(|(b, a)| b != a).count();
        assert_eq!(flipped, 1);
        assert!(after[0]);

        let outcome = run(&mut session, "/fav 1");
        assert!(matches!(outcome, Outcome::Message(ref m) if m.contains("Removed")));
    }

    #[test]
    fn test_favorite_does_not_change_results() {
        let mut session = seed_session();
        run(&mut session, "downtown");
        let before = ids(&session);
        run(&mut session, "/fav 5");
        assert_eq!(ids(&session), before);
    }

    #[test]
    fn test_unknown_listing_is_error() {
        let mut session = seed_session();
        let cmd = SessionCommand::Favorite("999".into());
        assert_eq!(session.apply(cmd), Err(SessionError::UnknownListing("999".into())));

        let cmd = SessionCommand::Show("999".into());
        assert!(session.apply(cmd).is_err());
    }

    #[test]
    fn test_show_known_listing() {
        let mut session = seed_session();
        assert_eq!(run(&mut session, "/show 4"), Outcome::Show("4".into()));
    }

    #[test]
    fn test_why_explains_rejection() {
        let mut session = seed_session();
        run(&mut session, "/pets yes");
        let Outcome::Message(text) = run(&mut session, "/why 1") else {
            panic!("Expected message");
        };
        assert!(text.contains("pet policy"));

        let Outcome::Message(text) = run(&mut session, "/why 2") else {
            panic!("Expected message");
        };
        assert!(text.contains("matches"));
    }

    #[test]
    fn test_favorites_listing() {
        let mut session = seed_session();
        let Outcome::Message(text) = run(&mut session, "/favorites") else {
            panic!("Expected message");
        };
        assert!(text.contains("Cozy Family House"));
        assert!(text.contains("Charming Townhouse"));

        let catalog = Catalog::new(vec![ListingBuilder::new("1").build()]).unwrap();
        let mut empty = BrowseSession::new(catalog, SearchState::default());
        let Outcome::Message(text) = run(&mut empty, "/favorites") else {
            panic!("Expected message");
        };
        assert!(text.contains("No favorites yet"));
    }

    #[test]
    fn test_amenities_message() {
        let mut session = seed_session();
        let Outcome::Message(text) = run(&mut session, "/amenities") else {
            panic!("Expected message");
        };
        assert!(text.starts_with("Amenities: Air Conditioning, Balcony, Fireplace"));
        assert!(text.contains("Pet Friendly"));
    }

    #[test]
    fn test_filters_message() {
        let mut session = seed_session();
        run(&mut session, "/beds 2");
        let Outcome::Message(text) = run(&mut session, "/filters") else {
            panic!("Expected message");
        };
        assert!(text.contains("Query: (none)"));
        assert!(text.contains("Bedrooms: 2+"));
        assert!(text.contains("Active filters: 1"));
    }

    #[test]
    fn test_quit_and_help() {
        let mut session = seed_session();
        assert_eq!(run(&mut session, "/quit"), Outcome::Quit);
        assert!(matches!(run(&mut session, "/help"), Outcome::Message(ref m) if m.contains("/price")));
    }
}
