//! In-memory catalog store with file-backed bulk loading.
//!
//! # Responsibility
//! - Own the ordered record collection and its code point index.
//! - Replace contents from the personal catalog file.
//! - Merge new records from the raw Unicode data source.
//!
//! # Invariants
//! - `index[code_point]` is the position of that record in `records`.
//! - Catalog order is load/import order and never re-sorted.
//! - A failed load leaves previous contents untouched.

use super::format::{
    parse_catalog_line, record_from_unicode_fields, split_unicode_data_line, RawLine,
};
use super::{CatalogError, CatalogResult, LoadPolicy};
use crate::model::symbol::SymbolRecord;
use log::{debug, error, info};
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::Path;
use std::time::Instant;

/// Counters reported by [`CatalogStore::load_from_catalog_file`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadSummary {
    pub loaded: usize,
    pub skipped: usize,
    pub duplicates: usize,
}

/// Counters reported by [`CatalogStore::import_from_source`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ImportSummary {
    pub added: usize,
    pub duplicates: usize,
    pub skipped: usize,
}

/// Ordered, code-point-unique collection of symbol records.
#[derive(Debug, Default)]
pub struct CatalogStore {
    records: Vec<SymbolRecord>,
    index: HashMap<String, usize>,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in catalog order.
    pub fn records(&self) -> &[SymbolRecord] {
        &self.records
    }

    pub fn contains(&self, code_point: &str) -> bool {
        self.index.contains_key(code_point)
    }

    pub fn get(&self, code_point: &str) -> Option<&SymbolRecord> {
        self.index
            .get(code_point)
            .map(|&position| &self.records[position])
    }

    /// Mutable access for in-place annotation edits.
    pub fn get_mut(&mut self, code_point: &str) -> Option<&mut SymbolRecord> {
        self.index
            .get(code_point)
            .map(|&position| &mut self.records[position])
    }

    /// Appends a record unless its code point is already present.
    ///
    /// Returns `false` for duplicates.
    pub fn insert(&mut self, record: SymbolRecord) -> bool {
        if self.index.contains_key(record.code_point()) {
            return false;
        }
        self.index
            .insert(record.code_point().to_string(), self.records.len());
        self.records.push(record);
        true
    }

    /// Replaces the store contents with the personal catalog file.
    ///
    /// # Errors
    /// - `NotFound` when `path` does not exist.
    /// - `Io` when the file cannot be read.
    /// - `Format` for the first malformed line under [`LoadPolicy::Abort`].
    pub fn load_from_catalog_file(
        &mut self,
        path: impl AsRef<Path>,
        policy: LoadPolicy,
    ) -> CatalogResult<LoadSummary> {
        let path = path.as_ref();
        let started_at = Instant::now();
        info!("event=catalog_load module=catalog status=start");

        let text = read_text(path).inspect_err(|err| {
            error!(
                "event=catalog_load module=catalog status=error error_code=read_failed error={err}"
            );
        })?;

        let mut loaded = CatalogStore::new();
        let mut summary = LoadSummary::default();
        for (line_no, line) in text.lines().enumerate() {
            match parse_catalog_line(line) {
                Ok(record) => {
                    if loaded.insert(record) {
                        summary.loaded += 1;
                    } else {
                        summary.duplicates += 1;
                    }
                }
                Err(err) if policy == LoadPolicy::Abort => {
                    error!(
                        "event=catalog_load module=catalog status=error error_code=bad_line line={} error={err}",
                        line_no + 1
                    );
                    return Err(CatalogError::Format {
                        path: path.to_path_buf(),
                        line: line_no + 1,
                        source: err,
                    });
                }
                Err(err) => {
                    debug!(
                        "event=catalog_line_skipped module=catalog line={} reason={err}",
                        line_no + 1
                    );
                    summary.skipped += 1;
                }
            }
        }

        *self = loaded;
        info!(
            "event=catalog_load module=catalog status=ok records={} skipped={} duplicates={} duration_ms={}",
            summary.loaded,
            summary.skipped,
            summary.duplicates,
            started_at.elapsed().as_millis()
        );
        Ok(summary)
    }

    /// Merges records from the raw Unicode data file.
    ///
    /// Lines whose code point is already present count as duplicates; short or
    /// malformed lines are skipped. Existing records are never modified.
    ///
    /// # Errors
    /// - `NotFound` when `path` does not exist.
    /// - `Io` when the file cannot be read.
    pub fn import_from_source(&mut self, path: impl AsRef<Path>) -> CatalogResult<ImportSummary> {
        let path = path.as_ref();
        let started_at = Instant::now();
        info!(
            "event=source_import module=catalog status=start existing={}",
            self.records.len()
        );

        let text = read_text(path).inspect_err(|err| {
            error!(
                "event=source_import module=catalog status=error error_code=read_failed error={err}"
            );
        })?;

        let mut summary = ImportSummary::default();
        for (line_no, line) in text.lines().enumerate() {
            let fields = match split_unicode_data_line(line) {
                RawLine::Short { found } => {
                    debug!(
                        "event=source_line_skipped module=catalog line={} reason=too_few_fields found={found}",
                        line_no + 1
                    );
                    summary.skipped += 1;
                    continue;
                }
                RawLine::Data { code_point, .. } if self.contains(code_point) => {
                    summary.duplicates += 1;
                    continue;
                }
                RawLine::Data { fields, .. } => fields,
            };

            match record_from_unicode_fields(&fields) {
                Ok(record) => {
                    self.insert(record);
                    summary.added += 1;
                }
                Err(err) => {
                    debug!(
                        "event=source_line_skipped module=catalog line={} reason={err}",
                        line_no + 1
                    );
                    summary.skipped += 1;
                }
            }
        }

        info!(
            "event=source_import module=catalog status=ok added={} duplicates={} skipped={} duration_ms={}",
            summary.added,
            summary.duplicates,
            summary.skipped,
            started_at.elapsed().as_millis()
        );
        Ok(summary)
    }
}

fn read_text(path: &Path) -> CatalogResult<String> {
    std::fs::read_to_string(path).map_err(|err| match err.kind() {
        ErrorKind::NotFound => CatalogError::NotFound(path.to_path_buf()),
        _ => CatalogError::Io {
            path: path.to_path_buf(),
            source: err,
        },
    })
}
