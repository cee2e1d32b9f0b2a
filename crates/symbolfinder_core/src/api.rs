//! Presentation-facing envelope API.
//!
//! # Responsibility
//! - Expose use-case functions with `ok + message` result envelopes.
//! - Convert typed core errors into human-readable messages.
//!
//! # Invariants
//! - Functions never panic and never block on user acknowledgment.
//! - Search responses own their data, so callers may drop the catalog borrow.

use crate::catalog::store::ImportSummary;
use crate::catalog::CatalogResult;
use crate::persistence::manager::FlushOutcome;
use crate::service::catalog_service::{StartupSource, SymbolCatalog};
use crate::service::export::{glyphs_text, list_text};

/// Generic action response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResponse {
    /// Whether the operation succeeded.
    pub ok: bool,
    /// Human-readable message for dialogs or status lines.
    pub message: String,
}

impl ActionResponse {
    fn success(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
        }
    }
}

/// One search row, detached from the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchItem {
    pub code_point: String,
    pub glyph: String,
    pub display_name: String,
    pub category: String,
    pub category_name: String,
    pub personal_comment: String,
    pub is_favorite: bool,
    pub is_hidden: bool,
}

/// Search envelope with result counters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResponse {
    pub items: Vec<SearchItem>,
    pub shown_count: usize,
    pub hidden_count: usize,
    /// Result line, e.g. `Found 3 (1 symbols hidden)`.
    pub message: String,
}

/// Loads the personal catalog or performs the first-run import.
pub fn startup(catalog: &mut SymbolCatalog) -> ActionResponse {
    match catalog.import_or_load_on_startup() {
        Ok(StartupSource::CatalogFile(summary)) => ActionResponse::success(format!(
            "Loaded {} symbols from {} ({} lines skipped)",
            summary.loaded,
            catalog.config().catalog_path.display(),
            summary.skipped
        )),
        Ok(StartupSource::RawSource(summary)) => ActionResponse::success(format!(
            "Imported Unicode data from {}. {}",
            catalog.config().unicode_data_path.display(),
            import_message(&summary)
        )),
        Err(err) => ActionResponse::failure(format!("Could not load symbols. {err}")),
    }
}

/// Merges new entries from the raw Unicode data file.
pub fn update_unicode_data(catalog: &mut SymbolCatalog) -> ActionResponse {
    match catalog.reimport_from_source() {
        Ok(summary) => ActionResponse::success(format!(
            "Unicode data updated from {}. {}",
            catalog.config().unicode_data_path.display(),
            import_message(&summary)
        )),
        Err(err) => ActionResponse::failure(format!("Unicode data was NOT updated. {err}")),
    }
}

/// Searches and returns owned rows plus counters.
pub fn search(
    catalog: &SymbolCatalog,
    text: &str,
    show_hidden: bool,
    show_favorites_only: bool,
) -> SearchResponse {
    let outcome = catalog.search(text, show_hidden, show_favorites_only);
    let categories = catalog.categories();
    let items = outcome
        .results
        .iter()
        .map(|record| SearchItem {
            code_point: record.code_point().to_string(),
            glyph: record.rendered_glyph().to_string(),
            display_name: record.display_name().to_string(),
            category: record.category().to_string(),
            category_name: categories.get_display_name(record.category()).to_string(),
            personal_comment: record.personal_comment().to_string(),
            is_favorite: record.is_favorite(),
            is_hidden: record.is_hidden(),
        })
        .collect();

    SearchResponse {
        items,
        shown_count: outcome.shown_count,
        hidden_count: outcome.hidden_count,
        message: outcome.summary(show_hidden),
    }
}

pub fn set_hidden(
    catalog: &mut SymbolCatalog,
    code_points: &[String],
    hidden: bool,
) -> ActionResponse {
    edit_response(
        catalog.set_hidden(code_points, hidden),
        if hidden { "Hid" } else { "Unhid" },
    )
}

pub fn toggle_hidden(catalog: &mut SymbolCatalog, code_points: &[String]) -> ActionResponse {
    edit_response(catalog.toggle_hidden(code_points), "Toggled hidden on")
}

pub fn set_favorite(
    catalog: &mut SymbolCatalog,
    code_points: &[String],
    favorite: bool,
) -> ActionResponse {
    edit_response(
        catalog.set_favorite(code_points, favorite),
        if favorite { "Favorited" } else { "Unfavorited" },
    )
}

pub fn toggle_favorite(catalog: &mut SymbolCatalog, code_points: &[String]) -> ActionResponse {
    edit_response(catalog.toggle_favorite(code_points), "Toggled favorite on")
}

pub fn set_comment(catalog: &mut SymbolCatalog, code_point: &str, text: &str) -> ActionResponse {
    match catalog.set_comment(code_point, text) {
        Ok(()) => ActionResponse::success(format!("Comment saved for {code_point}")),
        Err(err) => ActionResponse::failure(err.to_string()),
    }
}

/// Flushes pending edits; `force` writes even when nothing changed.
pub fn save(catalog: &mut SymbolCatalog, force: bool) -> ActionResponse {
    match catalog.flush(force) {
        Ok(FlushOutcome::Written { records }) => ActionResponse::success(format!(
            "Saved {records} symbols to {}",
            catalog.config().catalog_path.display()
        )),
        Ok(FlushOutcome::Clean) => ActionResponse::success("No unsaved changes"),
        Err(err) => ActionResponse::failure(format!("Couldn't save symbols file. {err}")),
    }
}

/// Text payload for copying the glyphs of the given code points.
pub fn copy_glyphs(catalog: &SymbolCatalog, code_points: &[String]) -> String {
    glyphs_text(
        code_points
            .iter()
            .filter_map(|code_point| catalog.store().get(code_point)),
    )
}

/// Text payload for copying the given code points as a list.
pub fn copy_list(catalog: &SymbolCatalog, code_points: &[String]) -> String {
    list_text(
        code_points
            .iter()
            .filter_map(|code_point| catalog.store().get(code_point)),
        &catalog.config().code_point_prefix,
    )
}

fn edit_response(result: CatalogResult<usize>, verb: &str) -> ActionResponse {
    match result {
        Ok(count) => ActionResponse::success(format!("{verb} {count} symbols")),
        Err(err) => ActionResponse::failure(err.to_string()),
    }
}

fn import_message(summary: &ImportSummary) -> String {
    format!(
        "Added {} symbols, skipped {} duplicate entries, {} lines skipped",
        summary.added, summary.duplicates, summary.skipped
    )
}
