//! Saved search data structures
//!
//! - `SavedSearch`: A named query plus criteria, with usage metadata
//! - `SavedSearchStorage`: Container serialized to TOML

use crate::search::FilterCriteria;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A named search the user can re-run
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SavedSearch {
    /// Unique name
    pub name: String,

    /// Description (optional)
    #[serde(default)]
    pub description: String,

    /// Free-text query
    #[serde(default)]
    pub query: String,

    /// When the search was created
    pub created: DateTime<Utc>,

    /// When the search was last run
    pub last_used: DateTime<Utc>,

    /// Number of times the search has been run
    #[serde(default)]
    pub use_count: u32,

    /// Structured filters
    #[serde(default)]
    pub criteria: FilterCriteria,
}

impl SavedSearch {
    /// Create a new saved search
    #[must_use]
    pub fn new(name: String, description: String, query: String, criteria: FilterCriteria) -> Self {
        let now = Utc::now();
        Self {
            name,
            description,
            query,
            created: now,
            last_used: now,
            use_count: 0,
            criteria,
        }
    }

    /// Record that this search was run
    pub fn record_use(&mut self) {
        self.use_count += 1;
        self.last_used = Utc::now();
    }

    /// Validate the saved search
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The name is invalid
    /// - The criteria can never match
    pub fn validate(&self) -> Result<(), String> {
        validate_search_name(&self.name)?;
        self.criteria.validate()?;
        Ok(())
    }
}

/// Storage container for all saved searches
///
/// Each search becomes one `[[search]]` table in `searches.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SavedSearchStorage {
    #[serde(rename = "search", default)]
    pub searches: Vec<SavedSearch>,
}

impl SavedSearchStorage {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            searches: Vec::new(),
        }
    }

    /// Get a saved search by name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&SavedSearch> {
        self.searches.iter().find(|s| s.name == name)
    }

    /// Get a mutable saved search by name
    pub fn get_mut(&mut self, name: &str) -> Option<&mut SavedSearch> {
        self.searches.iter_mut().find(|s| s.name == name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.searches.iter().any(|s| s.name == name)
    }

    /// Append a new search; names are unique and an inverted price range
    /// is refused because it could never show a listing
    ///
    /// # Errors
    ///
    /// Returns a message naming the clash or the invalid criteria.
    pub fn add(&mut self, search: SavedSearch) -> Result<(), String> {
        if self.contains(&search.name) {
            return Err(format!("Saved search '{}' already exists", search.name));
        }
        search.validate()?;
        self.searches.push(search);
        Ok(())
    }

    /// Swap in a new version of a search with the same name
    ///
    /// # Errors
    ///
    /// Returns a message if no search has that name or the criteria are invalid.
    pub fn update(&mut self, search: SavedSearch) -> Result<(), String> {
        search.validate()?;
        if let Some(existing) = self.get_mut(&search.name) {
            *existing = search;
            Ok(())
        } else {
            Err(format!("Saved search '{}' not found", search.name))
        }
    }

    /// Remove a saved search by name
    pub fn remove(&mut self, name: &str) -> Option<SavedSearch> {
        let pos = self.searches.iter().position(|s| s.name == name)?;
        Some(self.searches.remove(pos))
    }

    #[must_use]
    pub fn list_names(&self) -> Vec<&str> {
        self.searches.iter().map(|s| s.name.as_str()).collect()
    }

    /// Saved searches sorted by use count (most used first)
    #[must_use]
    pub fn most_used(&self) -> Vec<&SavedSearch> {
        let mut sorted: Vec<&SavedSearch> = self.searches.iter().collect();
        sorted.sort_by(|a, b| b.use_count.cmp(&a.use_count));
        sorted
    }

    /// Saved searches sorted by last use (most recent first)
    #[must_use]
    pub fn recently_used(&self) -> Vec<&SavedSearch> {
        let mut sorted: Vec<&SavedSearch> = self.searches.iter().collect();
        sorted.sort_by(|a, b| b.last_used.cmp(&a.last_used));
        sorted
    }
}

/// Validate a saved search name
///
/// Names must be 1-64 characters of alphanumerics, hyphens and underscores.
///
/// # Errors
///
/// Returns an error if the name is empty, too long, or contains other characters.
pub fn validate_search_name(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("Saved search name cannot be empty".to_string());
    }

    if name.len() > 64 {
        return Err(format!(
            "Saved search name too long (max 64 chars): {}",
            name.len()
        ));
    }

    if !name
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(format!(
            "Saved search name '{name}' contains invalid characters (only alphanumeric, '-', and '_' allowed)"
        ));
    }

    Ok(())
}

impl std::fmt::Display for SavedSearch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Saved Search: {}", self.name)?;

        if !self.description.is_empty() {
            writeln!(f, "Description: {}", self.description)?;
        }

        writeln!(f)?;
        if self.query.is_empty() {
            writeln!(f, "Query: (none)")?;
        } else {
            writeln!(f, "Query: \"{}\"", self.query)?;
        }
        write!(f, "{}", self.criteria)?;

        writeln!(f)?;
        writeln!(f, "Created: {}", self.created.format("%Y-%m-%d %H:%M:%S"))?;
        writeln!(
            f,
            "Last Used: {}",
            self.last_used.format("%Y-%m-%d %H:%M:%S")
        )?;
        writeln!(f, "Use Count: {}", self.use_count)?;

        Ok(())
    }
}
