//! Saved search management command implementation
//!
//! This module provides commands for managing saved searches:
//! - List all saved searches
//! - Show detailed information
//! - Create, delete and rename
//! - Export to and import from a TOML file
//! - Show usage statistics

use crate::RentrError;
use crate::cli::SavedCommands;
use crate::output::OutputWriter;
use crate::saved::{SavedSearchManager, SavedSearchStorage};
use crate::search::FilterCriteria;
use crate::ui::UserInput;
use std::path::{Path, PathBuf};

type Result<T> = std::result::Result<T, RentrError>;

/// How many entries the stats view shows per ranking
const STATS_TOP: usize = 5;

fn plural(count: usize) -> &'static str {
    if count == 1 { "" } else { "es" }
}

/// Execute a saved search management command
///
/// Routes to the appropriate subcommand handler based on the command type.
///
/// # Errors
///
/// Returns `RentrError` if:
/// - Saved search storage cannot be accessed
/// - Validation fails
/// - Any saved search operation fails
pub fn execute(
    manager: &SavedSearchManager,
    command: &SavedCommands,
    input: &dyn UserInput,
    out: &dyn OutputWriter,
    quiet: bool,
) -> Result<()> {
    match command {
        SavedCommands::List => list_searches(manager, out, quiet),
        SavedCommands::Show { name } => show_search(manager, name, out, quiet),
        SavedCommands::Create {
            name,
            description,
            query,
            criteria,
        } => create_search(
            manager,
            name,
            description.as_deref(),
            query.as_deref(),
            FilterCriteria::from(criteria),
            out,
        ),
        SavedCommands::Delete { name, force } => {
            delete_search(manager, name, *force || quiet, input, out)
        }
        SavedCommands::Rename { old_name, new_name } => {
            manager.rename(old_name, new_name.clone())?;
            out.success(&format!("Saved search '{old_name}' renamed to '{new_name}'"));
            Ok(())
        }
        SavedCommands::Export { names, output } => {
            export_searches(manager, names, output.as_ref(), out)
        }
        SavedCommands::Import {
            path,
            overwrite,
            skip_existing,
        } => import_searches(manager, path, *overwrite, *skip_existing, out),
        SavedCommands::Stats => show_stats(manager, out),
    }
}

/// List all saved searches
fn list_searches(manager: &SavedSearchManager, out: &dyn OutputWriter, quiet: bool) -> Result<()> {
    let searches = manager.list()?;

    if searches.is_empty() {
        out.info("No saved searches.");
        out.info("Create one with: rentr saved create <name> [options]");
        return Ok(());
    }

    if quiet {
        for search in &searches {
            out.write(&search.name);
        }
        return Ok(());
    }

    out.info("Saved Searches:");

    let max_name_len = searches.iter().map(|s| s.name.len()).max().unwrap_or(0).max(4);

    for search in &searches {
        let desc = if search.description.is_empty() {
            "(no description)"
        } else {
            search.description.as_str()
        };
        out.write(&format!("  {:<width$}  {desc}", search.name, width = max_name_len));

        let mut details = Vec::new();
        if !search.query.is_empty() {
            details.push(format!("query \"{}\"", search.query));
        }
        let active = search.criteria.active_count();
        if active > 0 {
            details.push(format!("{active} filter{}", if active == 1 { "" } else { "s" }));
        }
        if !details.is_empty() {
            out.write(&format!("  {:<width$}  ({})", "", details.join(", "), width = max_name_len));
        }
    }

    Ok(())
}

/// Show detailed information about a saved search
fn show_search(manager: &SavedSearchManager, name: &str, out: &dyn OutputWriter, quiet: bool) -> Result<()> {
    let search = manager.get(name)?;

    if quiet {
        out.write(&search.name);
    } else {
        out.write(&search.to_string());
    }

    Ok(())
}

/// Create a new saved search
fn create_search(
    manager: &SavedSearchManager,
    name: &str,
    description: Option<&str>,
    query: Option<&str>,
    criteria: FilterCriteria,
    out: &dyn OutputWriter,
) -> Result<()> {
    manager.create(
        name,
        description.unwrap_or_default().to_string(),
        query.unwrap_or_default().to_string(),
        criteria,
    )?;

    out.success(&format!("Saved search '{name}' created"));
    Ok(())
}

/// Delete a saved search, asking first unless `force`
fn delete_search(
    manager: &SavedSearchManager,
    name: &str,
    force: bool,
    input: &dyn UserInput,
    out: &dyn OutputWriter,
) -> Result<()> {
    manager.get(name)?;

    if !force && !input.prompt_confirm(&format!("Delete saved search '{name}'?"), false)? {
        out.info("Cancelled");
        return Ok(());
    }

    manager.delete(name)?;
    out.success(&format!("Saved search '{name}' deleted"));
    Ok(())
}

/// Export saved searches to a file or stdout
fn export_searches(
    manager: &SavedSearchManager,
    names: &[String],
    output: Option<&PathBuf>,
    out: &dyn OutputWriter,
) -> Result<()> {
    if let Some(output_path) = output {
        let count = manager.export(output_path, names)?;
        out.success(&format!(
            "Exported {count} saved search{} to {}",
            plural(count),
            output_path.display()
        ));
        return Ok(());
    }

    let searches = if names.is_empty() {
        manager.list()?
    } else {
        names
            .iter()
            .map(|name| manager.get(name))
            .collect::<std::result::Result<Vec<_>, _>>()?
    };

    let toml = toml::to_string_pretty(&SavedSearchStorage { searches })
        .map_err(|e| RentrError::SavedSearchError(e.into()))?;
    out.write(toml.trim_end());
    Ok(())
}

/// Import saved searches from a file
fn import_searches(
    manager: &SavedSearchManager,
    path: &Path,
    overwrite: bool,
    skip_existing: bool,
    out: &dyn OutputWriter,
) -> Result<()> {
    let (imported, skipped) = manager.import(path, overwrite, skip_existing)?;

    out.success(&format!("Imported {imported} saved search{}", plural(imported)));
    if skipped > 0 {
        out.info(&format!("Skipped {skipped} existing saved search{}", plural(skipped)));
    }

    Ok(())
}

/// Show usage statistics: totals plus most and recently used
fn show_stats(manager: &SavedSearchManager, out: &dyn OutputWriter) -> Result<()> {
    let storage = manager.storage()?;

    if storage.searches.is_empty() {
        out.info("No saved searches.");
        return Ok(());
    }

    let total_uses: u64 = storage.searches.iter().map(|s| u64::from(s.use_count)).sum();
    out.write(&format!("Saved searches: {}", storage.searches.len()));
    out.write(&format!("Total uses: {total_uses}"));

    out.write("\nMost used:");
    for search in storage.most_used().into_iter().take(STATS_TOP) {
        out.write(&format!("  {:<20} {}", search.name, search.use_count));
    }

    out.write("\nRecently used:");
    for search in storage.recently_used().into_iter().take(STATS_TOP) {
        out.write(&format!(
            "  {:<20} {}",
            search.name,
            search.last_used.format("%Y-%m-%d %H:%M")
        ));
    }

    Ok(())
}
