//! Catalog use-case service.
//!
//! # Responsibility
//! - Tie store, category registry and persistence into one owned catalog.
//! - Provide the operations the presentation layer calls into.
//! - Mark the catalog dirty on every annotation edit and every import that
//!   adds records.
//!
//! # Invariants
//! - Batch edits are all-or-nothing: an unknown code point rejects the whole
//!   batch before anything is mutated.
//! - A batch touches each code point once and reports only records whose
//!   annotations actually changed; no-op batches leave the catalog clean.
//! - Startup never replaces an existing catalog with raw source data.

use crate::catalog::store::{CatalogStore, ImportSummary, LoadSummary};
use crate::catalog::{CatalogError, CatalogResult};
use crate::config::CatalogConfig;
use crate::model::category::CategoryRegistry;
use crate::model::symbol::SymbolRecord;
use crate::persistence::manager::{FlushOutcome, PersistenceManager};
use crate::persistence::scheduler::FlushTarget;
use crate::search::filter::{search, SearchOptions, SearchOutcome};
use log::info;
use std::collections::HashSet;

/// Where the catalog came from at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartupSource {
    /// Existing personal catalog file.
    CatalogFile(LoadSummary),
    /// First run: raw Unicode data source.
    RawSource(ImportSummary),
}

/// Owned personal catalog with its persistence state.
#[derive(Debug)]
pub struct SymbolCatalog {
    config: CatalogConfig,
    store: CatalogStore,
    categories: CategoryRegistry,
    persistence: PersistenceManager,
}

impl SymbolCatalog {
    /// Creates an empty catalog bound to the configured files.
    pub fn new(config: CatalogConfig) -> Self {
        Self::with_categories(config, CategoryRegistry::new())
    }

    pub fn with_categories(config: CatalogConfig, categories: CategoryRegistry) -> Self {
        let persistence = PersistenceManager::new(config.catalog_path.clone());
        Self {
            config,
            store: CatalogStore::new(),
            categories,
            persistence,
        }
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    pub fn store(&self) -> &CatalogStore {
        &self.store
    }

    pub fn categories(&self) -> &CategoryRegistry {
        &self.categories
    }

    pub fn persistence(&self) -> &PersistenceManager {
        &self.persistence
    }

    pub fn is_dirty(&self) -> bool {
        self.persistence.is_dirty()
    }

    /// Loads the personal catalog, or imports the raw source on first run.
    ///
    /// # Errors
    /// - Propagates load/import failures unchanged.
    pub fn import_or_load_on_startup(&mut self) -> CatalogResult<StartupSource> {
        if self.config.catalog_path.exists() {
            let summary = self
                .store
                .load_from_catalog_file(&self.config.catalog_path, self.config.load_policy())?;
            return Ok(StartupSource::CatalogFile(summary));
        }

        info!("event=catalog_startup module=service status=first_run");
        let summary = self.merge_source()?;
        Ok(StartupSource::RawSource(summary))
    }

    /// Additively merges the raw source into the current catalog.
    pub fn reimport_from_source(&mut self) -> CatalogResult<ImportSummary> {
        self.merge_source()
    }

    fn merge_source(&mut self) -> CatalogResult<ImportSummary> {
        let summary = self
            .store
            .import_from_source(&self.config.unicode_data_path)?;
        if summary.added > 0 {
            self.persistence.mark_dirty();
        }
        Ok(summary)
    }

    /// Runs a query with explicit visibility switches.
    pub fn search(
        &self,
        text: &str,
        show_hidden: bool,
        show_favorites_only: bool,
    ) -> SearchOutcome<'_> {
        search(
            &self.store,
            &self.categories,
            text,
            SearchOptions {
                show_hidden,
                show_favorites_only,
            },
        )
    }

    /// Runs a query with the configured default visibility switches.
    pub fn search_default(&self, text: &str) -> SearchOutcome<'_> {
        self.search(
            text,
            self.config.show_hidden,
            self.config.show_favorites_only,
        )
    }

    /// Sets the hidden flag on every listed record.
    ///
    /// Returns how many records changed; surrogates never become visible.
    pub fn set_hidden<S: AsRef<str>>(
        &mut self,
        code_points: &[S],
        hidden: bool,
    ) -> CatalogResult<usize> {
        self.edit_each(code_points, |record| record.set_hidden(hidden))
    }

    /// Flips the hidden flag on every listed record.
    pub fn toggle_hidden<S: AsRef<str>>(&mut self, code_points: &[S]) -> CatalogResult<usize> {
        self.edit_each(code_points, |record| {
            let hidden = record.is_hidden();
            record.set_hidden(!hidden);
        })
    }

    /// Sets the favorite flag on every listed record.
    pub fn set_favorite<S: AsRef<str>>(
        &mut self,
        code_points: &[S],
        favorite: bool,
    ) -> CatalogResult<usize> {
        self.edit_each(code_points, |record| record.set_favorite(favorite))
    }

    /// Flips the favorite flag on every listed record.
    pub fn toggle_favorite<S: AsRef<str>>(&mut self, code_points: &[S]) -> CatalogResult<usize> {
        self.edit_each(code_points, |record| {
            let favorite = record.is_favorite();
            record.set_favorite(!favorite);
        })
    }

    /// Replaces one record's personal comment.
    pub fn set_comment(&mut self, code_point: &str, text: &str) -> CatalogResult<()> {
        self.edit_each(&[code_point], |record| record.set_personal_comment(text))
            .map(|_| ())
    }

    fn edit_each<S, F>(&mut self, code_points: &[S], mut edit: F) -> CatalogResult<usize>
    where
        S: AsRef<str>,
        F: FnMut(&mut SymbolRecord),
    {
        let mut seen = HashSet::new();
        let keys: Vec<&str> = code_points
            .iter()
            .map(|key| key.as_ref())
            .filter(|key| seen.insert(*key))
            .collect();
        if let Some(missing) = keys.iter().find(|key| !self.store.contains(key)) {
            return Err(CatalogError::UnknownCodePoint(missing.to_string()));
        }

        let mut changed = 0;
        for key in keys {
            if let Some(record) = self.store.get_mut(key) {
                let before = annotations(record);
                edit(record);
                if annotations(record) != before {
                    changed += 1;
                }
            }
        }
        if changed > 0 {
            self.persistence.mark_dirty();
        }
        Ok(changed)
    }

    /// Writes the catalog if dirty, or unconditionally when `force` is set.
    pub fn flush(&mut self, force: bool) -> CatalogResult<FlushOutcome> {
        self.persistence.flush(&self.store, force)
    }

    /// Categories in table order as `(short_code, long_name, enabled)`.
    pub fn category_list(&self) -> Vec<(&'static str, &'static str, bool)> {
        self.categories
            .entries()
            .iter()
            .map(|entry| (entry.short_code, entry.long_name, entry.enabled))
            .collect()
    }

    /// Returns `false` when `short_code` is unknown.
    pub fn set_category_enabled(&mut self, short_code: &str, enabled: bool) -> bool {
        self.categories.set_enabled(short_code, enabled)
    }

    pub fn set_all_categories_enabled(&mut self, enabled: bool) {
        self.categories.set_all_enabled(enabled);
    }
}

fn annotations(record: &SymbolRecord) -> (bool, bool, String) {
    (
        record.is_hidden(),
        record.is_favorite(),
        record.personal_comment().to_string(),
    )
}

impl FlushTarget for SymbolCatalog {
    fn flush_pending(&mut self, force: bool) -> CatalogResult<FlushOutcome> {
        self.flush(force)
    }
}
