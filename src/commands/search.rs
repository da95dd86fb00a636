//! Search command - filter the catalog once and print the results

use crate::{
    RentrError,
    catalog::Catalog,
    config::OutputFormat,
    listing::Listing,
    output::{self, OutputWriter, export},
    saved::SavedSearchManager,
    search::{FilterCriteria, PriceBounds, SearchState},
};

type Result<T> = std::result::Result<T, RentrError>;

/// Everything the search command needs besides its collaborators
#[derive(Debug, Clone, Default)]
pub struct SearchRequest<'a> {
    /// Free-text query; overrides the saved query when given
    pub query: Option<&'a str>,
    /// Criteria from command-line flags
    pub criteria: FilterCriteria,
    /// Price flags as given; each one replaces only its own bound
    pub price: PriceBounds,
    /// Saved search to start from
    pub from: Option<&'a str>,
    /// Save the effective search as (name, description)
    pub save_as: Option<(&'a str, Option<&'a str>)>,
    pub format: OutputFormat,
    pub quiet: bool,
}

/// Build the effective search state
///
/// Without `from` the state is the query plus the flag criteria. With
/// `from`, the saved search is loaded, the flag criteria are merged on top,
/// and its usage is recorded. In both cases the given price bounds replace
/// the matching bound of the range and leave the other one as it was.
///
/// # Errors
///
/// Returns `RentrError` if the saved search is unknown or its usage cannot be recorded.
pub fn resolve_state(
    manager: &SavedSearchManager,
    query: Option<&str>,
    criteria: &FilterCriteria,
    price: PriceBounds,
    from: Option<&str>,
    out: &dyn OutputWriter,
) -> Result<SearchState> {
    let Some(name) = from else {
        let mut criteria = criteria.clone();
        criteria.price_range = price.over(criteria.price_range);
        return Ok(SearchState::new(query.unwrap_or_default(), criteria));
    };

    let saved = manager.get(name)?;
    let mut effective = saved.criteria.clone();
    effective.merge(criteria);
    effective.price_range = price.over(effective.price_range);

    let query = query.map_or(saved.query, ToString::to_string);

    manager.record_use(name)?;
    out.info(&format!("Using saved search '{name}'"));

    Ok(SearchState::new(query, effective))
}

/// Render results in the requested format
///
/// # Errors
///
/// Returns `RentrError` if CSV or JSON serialization fails.
pub fn render(
    listings: &[&Listing],
    format: OutputFormat,
    quiet: bool,
    out: &dyn OutputWriter,
) -> Result<()> {
    match format {
        OutputFormat::Table => {
            if listings.is_empty() {
                out.warning("No properties found");
                return Ok(());
            }

            out.info(&output::results_header(listings.len()));
            for listing in listings {
                out.write(&output::listing_card(listing, quiet));
            }
        }
        OutputFormat::Csv => {
            let mut buf = Vec::new();
            export::write_csv(listings, &mut buf)?;
            out.write(String::from_utf8_lossy(&buf).trim_end());
        }
        OutputFormat::Json => {
            out.write(&export::to_json(listings)?);
        }
    }

    Ok(())
}

/// Execute the search command
///
/// # Errors
/// Returns an error if the saved search cannot be loaded or stored, or results cannot be rendered
pub fn execute(
    catalog: &Catalog,
    manager: &SavedSearchManager,
    request: &SearchRequest<'_>,
    out: &dyn OutputWriter,
) -> Result<()> {
    let state = resolve_state(
        manager,
        request.query,
        &request.criteria,
        request.price,
        request.from,
        out,
    )?;

    if let Some((name, description)) = request.save_as {
        manager.create(
            name,
            description.unwrap_or_default().to_string(),
            state.query().to_string(),
            state.criteria().clone(),
        )?;
        out.success(&format!("Saved search '{name}' created"));
    }

    let results = state.results(catalog);
    render(&results, request.format, request.quiet, out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::saved::SavedSearchError;
    use crate::search::{DEFAULT_MAX_PRICE, PriceRange};
    use crate::testing::{MessageLevel, RecordingWriter};
    use tempfile::TempDir;

    fn setup() -> (TempDir, SavedSearchManager, Catalog) {
        let dir = TempDir::new().unwrap();
        let manager = SavedSearchManager::without_backup(dir.path().join("searches.toml"));
        (dir, manager, Catalog::seed().unwrap())
    }

    #[test]
    fn test_plain_search_table() {
        let (_dir, manager, catalog) = setup();
        let out = RecordingWriter::default();
        let request = SearchRequest {
            query: Some("downtown"),
            ..Default::default()
        };

        execute(&catalog, &manager, &request, &out).unwrap();

        assert!(out.contains(MessageLevel::Info, "2 properties found"));
        assert!(out.contains(MessageLevel::Normal, "Modern Downtown Apartment"));
        assert!(out.contains(MessageLevel::Normal, "Studio Near Downtown"));
    }

    #[test]
    fn test_no_results() {
        let (_dir, manager, catalog) = setup();
        let out = RecordingWriter::default();
        let request = SearchRequest {
            query: Some("nowhere"),
            ..Default::default()
        };

        execute(&catalog, &manager, &request, &out).unwrap();
        assert!(out.contains(MessageLevel::Warning, "No properties found"));
    }

    #[test]
    fn test_quiet_table_prints_ids() {
        let (_dir, manager, catalog) = setup();
        let out = RecordingWriter::default();
        let request = SearchRequest {
            criteria: FilterCriteria::builder().pet_friendly(true).build(),
            quiet: true,
            ..Default::default()
        };

        execute(&catalog, &manager, &request, &out).unwrap();
        assert_eq!(
            out.at(MessageLevel::Normal),
            vec![
                "2\tCozy Family House".to_string(),
                "4\tCharming Townhouse".to_string(),
                "6\tSpacious Berkeley House".to_string(),
            ]
        );
    }

    #[test]
    fn test_csv_format() {
        let (_dir, manager, catalog) = setup();
        let out = RecordingWriter::default();
        let request = SearchRequest {
            criteria: FilterCriteria::builder().price_range(0, 2000).build(),
            format: OutputFormat::Csv,
            ..Default::default()
        };

        execute(&catalog, &manager, &request, &out).unwrap();
        let written = out.at(MessageLevel::Normal);
        assert_eq!(written.len(), 1);
        assert_eq!(written[0].lines().count(), 2);
        assert!(written[0].contains("Studio Near Downtown"));
    }

    #[test]
    fn test_json_format_empty_is_array() {
        let (_dir, manager, catalog) = setup();
        let out = RecordingWriter::default();
        let request = SearchRequest {
            query: Some("nowhere"),
            format: OutputFormat::Json,
            ..Default::default()
        };

        execute(&catalog, &manager, &request, &out).unwrap();
        assert_eq!(out.at(MessageLevel::Normal), vec!["[]".to_string()]);
    }

    #[test]
    fn test_save_then_refine() {
        let (_dir, manager, catalog) = setup();
        let out = RecordingWriter::default();

        let save = SearchRequest {
            query: Some("san francisco"),
            criteria: FilterCriteria::builder().furnished(true).build(),
            save_as: Some(("sf-furnished", Some("Furnished in SF"))),
            ..Default::default()
        };
        execute(&catalog, &manager, &save, &out).unwrap();
        assert!(out.contains(MessageLevel::Success, "sf-furnished"));

        let stored = manager.get("sf-furnished").unwrap();
        assert_eq!(stored.query, "san francisco");
        assert_eq!(stored.description, "Furnished in SF");
        assert_eq!(stored.criteria.furnished, Some(true));

        let refine = SearchRequest {
            price: PriceBounds::new(None, Some(4000)),
            from: Some("sf-furnished"),
            quiet: true,
            ..Default::default()
        };
        let out = RecordingWriter::default();
        execute(&catalog, &manager, &refine, &out).unwrap();

        assert_eq!(
            out.at(MessageLevel::Normal),
            vec!["1\tModern Downtown Apartment".to_string(), "5\tStudio Near Downtown".to_string()]
        );
        assert_eq!(manager.get("sf-furnished").unwrap().use_count, 1);
    }

    #[test]
    fn test_cli_query_overrides_saved_query() {
        let (_dir, manager, _catalog) = setup();
        manager
            .create("sf", String::new(), "san francisco".into(), FilterCriteria::default())
            .unwrap();

        let out = RecordingWriter::default();
        let state = resolve_state(
            &manager,
            Some("oakland"),
            &FilterCriteria::default(),
            PriceBounds::default(),
            Some("sf"),
            &out,
        ).unwrap();
        assert_eq!(state.query(), "oakland");

        let state = resolve_state(&manager, None, &FilterCriteria::default(), PriceBounds::default(), Some("sf"), &out).unwrap();
        assert_eq!(state.query(), "san francisco");
    }

    #[test]
    fn test_single_price_flag_refines_saved_range() {
        let (_dir, manager, _catalog) = setup();
        let saved = FilterCriteria::builder().price_range(2000, 3000).build();
        manager.create("mid", String::new(), String::new(), saved).unwrap();
        let out = RecordingWriter::default();

        let state = resolve_state(
            &manager,
            None,
            &FilterCriteria::default(),
            PriceBounds::new(None, Some(4000)),
            Some("mid"),
            &out,
        )
        .unwrap();
        assert_eq!(state.criteria().price_range, PriceRange::new(2000, 4000));

        let state = resolve_state(
            &manager,
            None,
            &FilterCriteria::default(),
            PriceBounds::new(Some(0), Some(DEFAULT_MAX_PRICE)),
            Some("mid"),
            &out,
        )
        .unwrap();
        assert_eq!(state.criteria().price_range, PriceRange::default());

        let state = resolve_state(
            &manager,
            None,
            &FilterCriteria::default(),
            PriceBounds::default(),
            Some("mid"),
            &out,
        )
        .unwrap();
        assert_eq!(state.criteria().price_range, PriceRange::new(2000, 3000));
    }

    #[test]
    fn test_price_bounds_without_saved_search() {
        let (_dir, manager, _catalog) = setup();
        let state = resolve_state(
            &manager,
            None,
            &FilterCriteria::default(),
            PriceBounds::new(Some(2500), None),
            None,
            &RecordingWriter::default(),
        )
        .unwrap();
        assert_eq!(state.criteria().price_range, PriceRange::new(2500, DEFAULT_MAX_PRICE));
    }

    #[test]
    fn test_unknown_saved_search() {
        let (_dir, manager, catalog) = setup();
        let request = SearchRequest {
            from: Some("missing"),
            ..Default::default()
        };

        let err = execute(&catalog, &manager, &request, &RecordingWriter::default()).unwrap_err();
        assert!(matches!(err, RentrError::SavedSearchError(SavedSearchError::NotFound(_))));
    }

    #[test]
    fn test_saving_inverted_price_is_rejected() {
        let (_dir, manager, catalog) = setup();
        let request = SearchRequest {
            criteria: FilterCriteria::builder().price_range(5000, 1000).build(),
            save_as: Some(("broken", None)),
            ..Default::default()
        };

        let err = execute(&catalog, &manager, &request, &RecordingWriter::default()).unwrap_err();
        assert!(matches!(err, RentrError::SavedSearchError(SavedSearchError::InvalidCriteria(_))));
    }
}
