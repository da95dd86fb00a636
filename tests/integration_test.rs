//! Integration tests for rentr
//!
//! These tests exercise the public API end to end: the bundled catalog, the
//! filter engine, the browse session, and saved search storage in a
//! temporary directory.

use rentr::browse::{BrowseSession, Outcome, SessionCommand};
use rentr::catalog::{Catalog, CatalogError};
use rentr::listing::PropertyType;
use rentr::saved::{SavedSearchError, SavedSearchManager};
use rentr::search::{FilterCriteria, ListingFilterExt, SearchState, filter_listings};
use std::fs;
use tempfile::TempDir;

fn ids<'a>(listings: impl IntoIterator<Item = &'a rentr::listing::Listing>) -> Vec<&'a str> {
    listings.into_iter().map(|l| l.id.as_str()).collect()
}

#[test]
fn test_seed_catalog_shape() {
    let catalog = Catalog::seed().unwrap();
    assert_eq!(catalog.len(), 6);
    assert_eq!(ids(catalog.favorites()), vec!["2", "4"]);
    assert!(catalog.amenities().contains(&"Pet Friendly"));
}

#[test]
fn test_unrestricted_search_returns_everything_in_order() {
    let catalog = Catalog::seed().unwrap();
    let all = filter_listings(catalog.listings(), "", &FilterCriteria::default());
    assert_eq!(ids(all), vec!["1", "2", "3", "4", "5", "6"]);
}

#[test]
fn test_text_query_is_case_insensitive() {
    let catalog = Catalog::seed().unwrap();
    let upper = filter_listings(catalog.listings(), "SAN FRANCISCO", &FilterCriteria::default());
    let lower = filter_listings(catalog.listings(), "san francisco", &FilterCriteria::default());
    assert_eq!(ids(upper), vec!["1", "3", "5"]);
    assert_eq!(ids(lower), vec!["1", "3", "5"]);
}

#[test]
fn test_combined_criteria() {
    let catalog = Catalog::seed().unwrap();
    let criteria = FilterCriteria::builder()
        .price_range(3000, 5000)
        .property_types([PropertyType::House, PropertyType::Townhouse])
        .pet_friendly(true)
        .parking_required(true)
        .build();

    let results = catalog.listings().matching("", &criteria);
    assert_eq!(ids(results), vec!["2", "6"]);
}

#[test]
fn test_filtering_is_idempotent() {
    let catalog = Catalog::seed().unwrap();
    let criteria = FilterCriteria::builder().min_bedrooms(2).furnished(false).build();

    let once = filter_listings(catalog.listings(), "house", &criteria);
    let owned: Vec<_> = once.iter().map(|l| (*l).clone()).collect();
    let twice = filter_listings(&owned, "house", &criteria);

    assert_eq!(ids(once), ids(twice));
}

#[test]
fn test_inverted_price_range_yields_nothing() {
    let catalog = Catalog::seed().unwrap();
    let criteria = FilterCriteria::builder().price_range(5000, 1000).build();
    assert!(filter_listings(catalog.listings(), "", &criteria).is_empty());
}

#[test]
fn test_catalog_from_file_and_errors() {
    let dir = TempDir::new().unwrap();

    let path = dir.path().join("listings.json");
    let seed = Catalog::seed().unwrap();
    fs::write(&path, serde_json::to_string(seed.listings()).unwrap()).unwrap();
    let loaded = Catalog::load(Some(path.as_path())).unwrap();
    assert_eq!(loaded.len(), 6);

    let broken = dir.path().join("broken.json");
    fs::write(&broken, "{ not json").unwrap();
    assert!(matches!(Catalog::load(Some(broken.as_path())), Err(CatalogError::Parse(_))));

    let missing = dir.path().join("missing.json");
    assert!(matches!(Catalog::load(Some(missing.as_path())), Err(CatalogError::Io(_))));
}

#[test]
fn test_browse_session_flow() {
    let mut session = BrowseSession::new(Catalog::seed().unwrap(), SearchState::default());

    for line in ["house", "/beds 3", "/pets yes"] {
        let command: SessionCommand = line.parse().unwrap();
        assert_eq!(session.apply(command).unwrap(), Outcome::Refresh);
    }
    assert_eq!(ids(session.results()), vec!["2", "6"]);

    session.apply("/fav 6".parse().unwrap()).unwrap();
    assert_eq!(ids(session.catalog().favorites()), vec!["2", "4", "6"]);

    session.apply("/reset".parse().unwrap()).unwrap();
    assert_eq!(session.state().query(), "house");
    assert_eq!(ids(session.results()), vec!["2", "6"]);
}

#[test]
fn test_saved_search_round_trip() {
    let dir = TempDir::new().unwrap();
    let manager = SavedSearchManager::new(dir.path().join("searches.toml"));

    let criteria = FilterCriteria::builder()
        .price_range(1000, 4000)
        .amenity("Laundry")
        .build();
    manager
        .create("laundry", "Has laundry".into(), String::new(), criteria.clone())
        .unwrap();

    let loaded = manager.get("laundry").unwrap();
    assert_eq!(loaded.criteria, criteria);

    let catalog = Catalog::seed().unwrap();
    let state = SearchState::new(loaded.query.clone(), loaded.criteria);
    assert_eq!(ids(state.results(&catalog)), vec!["1", "4", "5"]);

    manager.rename("laundry", "washer".into()).unwrap();
    assert!(matches!(manager.get("laundry"), Err(SavedSearchError::NotFound(_))));

    let export = dir.path().join("export.toml");
    assert_eq!(manager.export(&export, &[]).unwrap(), 1);

    manager.delete("washer").unwrap();
    assert!(manager.list().unwrap().is_empty());

    let (imported, skipped) = manager.import(&export, false, false).unwrap();
    assert_eq!((imported, skipped), (1, 0));
    assert_eq!(manager.get("washer").unwrap().description, "Has laundry");

    assert!(dir.path().join("searches.toml.backup").exists());
}
