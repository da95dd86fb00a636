//! Reading and writing the saved search file
//!
//! `SavedSearchManager` re-reads `searches.toml` for every operation and
//! writes it back whole, so two `rentr` invocations never hold stale copies
//! between commands.

use super::error::SavedSearchError;
use super::types::{SavedSearch, SavedSearchStorage, validate_search_name};
use crate::search::FilterCriteria;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Manager for saved search operations
///
/// # Examples
///
/// ```no_run
/// use rentr::saved::SavedSearchManager;
/// use rentr::search::FilterCriteria;
/// use std::path::PathBuf;
///
/// let manager = SavedSearchManager::new(PathBuf::from("searches.toml"));
/// manager
///     .create(
///         "two-bed",
///         "Two bedrooms or more".to_string(),
///         String::new(),
///         FilterCriteria::builder().min_bedrooms(2).build(),
///     )
///     .unwrap();
/// let searches = manager.list().unwrap();
/// ```
pub struct SavedSearchManager {
    path: PathBuf,
    auto_backup: bool,
}

impl SavedSearchManager {
    /// Create a manager with auto-backup enabled
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self {
            path,
            auto_backup: true,
        }
    }

    /// Create a manager with auto-backup disabled
    #[must_use]
    pub const fn without_backup(path: PathBuf) -> Self {
        Self {
            path,
            auto_backup: false,
        }
    }

    /// Enable or disable auto-backup
    pub const fn set_auto_backup(&mut self, enabled: bool) {
        self.auto_backup = enabled;
    }

    /// Read every saved search; no file yet means none have been saved
    fn load(&self) -> Result<SavedSearchStorage, SavedSearchError> {
        if !self.path.exists() {
            return Ok(SavedSearchStorage::new());
        }

        let contents = fs::read_to_string(&self.path)?;
        let storage: SavedSearchStorage = toml::from_str(&contents)?;
        Ok(storage)
    }

    /// Rewrite the whole file, copying the previous version to
    /// `searches.toml.backup` first when backups are on
    fn save(&self, storage: &SavedSearchStorage) -> Result<(), SavedSearchError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        if self.auto_backup && self.path.exists() {
            let backup_path = self.path.with_extension("toml.backup");
            fs::copy(&self.path, backup_path)?;
        }

        let toml = toml::to_string_pretty(storage)?;
        fs::write(&self.path, toml)?;
        debug!(path = %self.path.display(), searches = storage.searches.len(), "saved searches written");

        Ok(())
    }

    /// Create a new saved search
    ///
    /// # Errors
    ///
    /// Returns `SavedSearchError` if:
    /// - The name is invalid
    /// - The criteria is invalid
    /// - A search with the same name already exists
    /// - The storage file cannot be written
    pub fn create(
        &self,
        name: &str,
        description: String,
        query: String,
        criteria: FilterCriteria,
    ) -> Result<SavedSearch, SavedSearchError> {
        validate_search_name(name)
            .map_err(|e| SavedSearchError::InvalidName(name.to_string(), e))?;

        let mut storage = self.load()?;
        if storage.contains(name) {
            return Err(SavedSearchError::AlreadyExists(name.to_string()));
        }

        let search = SavedSearch::new(name.to_string(), description, query, criteria);
        storage
            .add(search.clone())
            .map_err(SavedSearchError::InvalidCriteria)?;

        self.save(&storage)?;
        info!(name, "created saved search");

        Ok(search)
    }

    /// Get a saved search by name
    ///
    /// # Errors
    ///
    /// Returns `SavedSearchError` if the storage cannot be read or the name is unknown.
    pub fn get(&self, name: &str) -> Result<SavedSearch, SavedSearchError> {
        let storage = self.load()?;
        storage
            .get(name)
            .cloned()
            .ok_or_else(|| SavedSearchError::NotFound(name.to_string()))
    }

    /// Replace an existing saved search
    ///
    /// # Errors
    ///
    /// Returns `SavedSearchError` if:
    /// - The search is not found
    /// - The criteria is invalid
    /// - The storage file cannot be written
    pub fn update(&self, search: SavedSearch) -> Result<(), SavedSearchError> {
        let mut storage = self.load()?;

        if !storage.contains(&search.name) {
            return Err(SavedSearchError::NotFound(search.name));
        }

        storage
            .update(search)
            .map_err(SavedSearchError::InvalidCriteria)?;

        self.save(&storage)
    }

    /// Delete a saved search by name
    ///
    /// # Errors
    ///
    /// Returns `SavedSearchError` if the search is not found or the file cannot be written.
    pub fn delete(&self, name: &str) -> Result<SavedSearch, SavedSearchError> {
        let mut storage = self.load()?;

        let search = storage
            .remove(name)
            .ok_or_else(|| SavedSearchError::NotFound(name.to_string()))?;

        self.save(&storage)?;
        info!(name, "deleted saved search");

        Ok(search)
    }

    /// Rename a saved search
    ///
    /// # Errors
    ///
    /// Returns `SavedSearchError` if:
    /// - The old name is not found
    /// - The new name is invalid or already taken
    /// - The storage file cannot be written
    pub fn rename(&self, old_name: &str, new_name: String) -> Result<(), SavedSearchError> {
        let mut storage = self.load()?;

        validate_search_name(&new_name)
            .map_err(|e| SavedSearchError::InvalidName(new_name.clone(), e))?;

        if storage.contains(&new_name) {
            return Err(SavedSearchError::AlreadyExists(new_name));
        }

        let search = storage
            .get_mut(old_name)
            .ok_or_else(|| SavedSearchError::NotFound(old_name.to_string()))?;
        search.name = new_name;

        self.save(&storage)
    }

    /// Saved searches in the order they were created
    ///
    /// # Errors
    ///
    /// Returns `SavedSearchError` if the storage file cannot be read.
    pub fn list(&self) -> Result<Vec<SavedSearch>, SavedSearchError> {
        Ok(self.load()?.searches)
    }

    /// The whole file contents, for `saved stats`
    ///
    /// # Errors
    ///
    /// Returns `SavedSearchError` if the storage file cannot be read.
    pub fn storage(&self) -> Result<SavedSearchStorage, SavedSearchError> {
        self.load()
    }

    /// Note that a saved search was just run with `-F`
    ///
    /// Bumps its use count and stamps `last_used`, which drive the
    /// "Most used" and "Recently used" lists.
    ///
    /// # Errors
    ///
    /// Returns `SavedSearchError` if the search is not found or the file cannot be written.
    pub fn record_use(&self, name: &str) -> Result<(), SavedSearchError> {
        let mut storage = self.load()?;

        let search = storage
            .get_mut(name)
            .ok_or_else(|| SavedSearchError::NotFound(name.to_string()))?;
        search.record_use();

        self.save(&storage)
    }

    /// Export saved searches to a file
    ///
    /// Exports everything when `names` is empty, otherwise only the named searches.
    ///
    /// # Errors
    ///
    /// Returns `SavedSearchError` if a named search is missing or the file cannot be written.
    pub fn export(&self, export_path: &Path, names: &[String]) -> Result<usize, SavedSearchError> {
        let storage = self.load()?;

        let searches = if names.is_empty() {
            storage.searches
        } else {
            names
                .iter()
                .map(|name| {
                    storage
                        .get(name)
                        .cloned()
                        .ok_or_else(|| SavedSearchError::NotFound(name.clone()))
                })
                .collect::<Result<Vec<_>, _>>()?
        };

        let count = searches.len();
        let export_storage = SavedSearchStorage { searches };

        if let Some(parent) = export_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let toml = toml::to_string_pretty(&export_storage)?;
        fs::write(export_path, toml)?;

        Ok(count)
    }

    /// Import saved searches from a file
    ///
    /// # Arguments
    /// * `import_path` - File to read
    /// * `overwrite` - Replace existing searches with the same name
    /// * `skip_existing` - Skip name clashes instead of failing (when not overwriting)
    ///
    /// # Returns
    /// A tuple of (`imported_count`, `skipped_count`)
    ///
    /// # Errors
    ///
    /// Returns `SavedSearchError` if the file cannot be read, a clash is not
    /// allowed, an imported search is invalid, or storage cannot be written.
    pub fn import(
        &self,
        import_path: &Path,
        overwrite: bool,
        skip_existing: bool,
    ) -> Result<(usize, usize), SavedSearchError> {
        let mut storage = self.load()?;

        let contents = fs::read_to_string(import_path)?;
        let incoming: SavedSearchStorage = toml::from_str(&contents)?;

        let mut imported = 0;
        let mut skipped = 0;

        for search in incoming.searches {
            if storage.contains(&search.name) {
                if overwrite {
                    storage
                        .update(search)
                        .map_err(SavedSearchError::InvalidCriteria)?;
                    imported += 1;
                } else if skip_existing {
                    skipped += 1;
                } else {
                    return Err(SavedSearchError::AlreadyExists(search.name));
                }
            } else {
                storage
                    .add(search)
                    .map_err(SavedSearchError::InvalidCriteria)?;
                imported += 1;
            }
        }

        self.save(&storage)?;

        Ok((imported, skipped))
    }

    /// Get the storage path
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}
