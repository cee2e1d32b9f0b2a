//! Dirty flag and full-catalog writer.

use crate::catalog::format::render_catalog;
use crate::catalog::store::CatalogStore;
use crate::catalog::{CatalogError, CatalogResult};
use log::{debug, error, info};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Result of one flush request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlushOutcome {
    /// Catalog file was rewritten.
    Written { records: usize },
    /// Nothing pending and no force requested.
    Clean,
}

/// Tracks unsaved edits and writes the catalog file.
#[derive(Debug)]
pub struct PersistenceManager {
    catalog_path: PathBuf,
    dirty: bool,
    write_count: u64,
}

impl PersistenceManager {
    pub fn new(catalog_path: impl Into<PathBuf>) -> Self {
        Self {
            catalog_path: catalog_path.into(),
            dirty: false,
            write_count: 0,
        }
    }

    pub fn catalog_path(&self) -> &Path {
        &self.catalog_path
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Number of successful writes since construction.
    pub fn write_count(&self) -> u64 {
        self.write_count
    }

    /// Writes the full catalog when dirty or when `force` is set.
    ///
    /// # Errors
    /// - `Io` when the file or its parent directory cannot be written. The
    ///   dirty flag stays set so the next trigger retries.
    pub fn flush(&mut self, store: &CatalogStore, force: bool) -> CatalogResult<FlushOutcome> {
        if !self.dirty && !force {
            debug!("event=catalog_flush module=persistence status=skipped reason=clean");
            return Ok(FlushOutcome::Clean);
        }

        let started_at = Instant::now();
        let document = render_catalog(store.records());
        match write_atomically(&self.catalog_path, &document) {
            Ok(()) => {
                self.dirty = false;
                self.write_count += 1;
                info!(
                    "event=catalog_flush module=persistence status=ok force={} records={} bytes={} duration_ms={}",
                    force,
                    store.len(),
                    document.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(FlushOutcome::Written {
                    records: store.len(),
                })
            }
            Err(err) => {
                error!(
                    "event=catalog_flush module=persistence status=error force={} error_code=write_failed error={err}",
                    force
                );
                Err(err)
            }
        }
    }
}

fn write_atomically(path: &Path, contents: &str) -> CatalogResult<()> {
    let io_error = |source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(io_error)?;
    }

    let mut staging = path.as_os_str().to_owned();
    staging.push(".tmp");
    let staging = PathBuf::from(staging);

    if let Err(err) = std::fs::write(&staging, contents) {
        let _ = std::fs::remove_file(&staging);
        return Err(io_error(err));
    }
    std::fs::rename(&staging, path).map_err(|err| {
        let _ = std::fs::remove_file(&staging);
        io_error(err)
    })
}
