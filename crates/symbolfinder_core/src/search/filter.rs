//! Query evaluation over the catalog store.
//!
//! # Responsibility
//! - Apply text criteria, then category/hidden/favorite visibility.
//! - Count shown matches and hidden matches for result reporting.
//!
//! # Invariants
//! - A record passes the text stage iff it contains every include term and
//!   no exclude term (case-insensitive over name, comment and code point).
//! - Unknown categories are never filtered out.
//! - `hidden_count` counts text matches flagged hidden, whatever the other
//!   visibility settings are.

use super::query::{parse_query, ParsedQuery, QueryMode};
use crate::catalog::store::CatalogStore;
use crate::model::category::CategoryRegistry;
use crate::model::symbol::SymbolRecord;
use log::debug;
use std::time::Instant;

/// Caller-controlled visibility switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchOptions {
    pub show_hidden: bool,
    pub show_favorites_only: bool,
}

/// Filtered view into the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome<'a> {
    /// Matching records in catalog order.
    pub results: Vec<&'a SymbolRecord>,
    /// Number of records returned.
    pub shown_count: usize,
    /// Number of text matches carrying the hidden flag.
    pub hidden_count: usize,
}

impl SearchOutcome<'_> {
    /// Human-readable result line for the search box.
    pub fn summary(&self, show_hidden: bool) -> String {
        if show_hidden {
            format!(
                "Found {} (including {} hidden symbols)",
                self.shown_count, self.hidden_count
            )
        } else {
            format!(
                "Found {} ({} symbols hidden)",
                self.shown_count, self.hidden_count
            )
        }
    }
}

/// Parses `text` and evaluates it against `store`.
pub fn search<'a>(
    store: &'a CatalogStore,
    categories: &CategoryRegistry,
    text: &str,
    options: SearchOptions,
) -> SearchOutcome<'a> {
    evaluate(store, categories, &parse_query(text), options)
}

/// Evaluates an already parsed query.
pub fn evaluate<'a>(
    store: &'a CatalogStore,
    categories: &CategoryRegistry,
    query: &ParsedQuery,
    options: SearchOptions,
) -> SearchOutcome<'a> {
    let started_at = Instant::now();
    let include = lowered(&query.include_terms);
    let exclude = lowered(&query.exclude_terms);

    let mut results = Vec::new();
    let mut hidden_count = 0;
    for record in store.records() {
        let text_match = include.iter().all(|term| record.contains_lowered(term))
            && !exclude.iter().any(|term| record.contains_lowered(term));
        if !text_match {
            continue;
        }

        if record.is_hidden() {
            hidden_count += 1;
        }
        if is_visible(record, categories, options) {
            results.push(record);
        }
    }

    debug!(
        "event=search module=search status=ok mode={} include_terms={} exclude_terms={} shown={} hidden={} duration_ms={}",
        mode_name(query.mode),
        query.include_terms.len(),
        query.exclude_terms.len(),
        results.len(),
        hidden_count,
        started_at.elapsed().as_millis()
    );

    SearchOutcome {
        shown_count: results.len(),
        results,
        hidden_count,
    }
}

fn is_visible(record: &SymbolRecord, categories: &CategoryRegistry, options: SearchOptions) -> bool {
    if !categories.is_visible(record.category()) {
        return false;
    }
    if record.is_hidden() && !options.show_hidden {
        return false;
    }
    if !record.is_favorite() && options.show_favorites_only {
        return false;
    }
    true
}

fn lowered(terms: &[String]) -> Vec<String> {
    terms.iter().map(|term| term.to_lowercase()).collect()
}

fn mode_name(mode: QueryMode) -> &'static str {
    match mode {
        QueryMode::Plain => "plain",
        QueryMode::Boolean => "boolean",
    }
}
