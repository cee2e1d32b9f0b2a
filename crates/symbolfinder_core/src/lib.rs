//! Core logic for SymbolFinder, a personal Unicode symbol catalog.
//! This crate owns the catalog, its query engine and its persistence.

pub mod api;
pub mod catalog;
pub mod config;
pub mod logging;
pub mod model;
pub mod persistence;
pub mod search;
pub mod service;

pub use api::{ActionResponse, SearchItem, SearchResponse};
pub use catalog::store::{CatalogStore, ImportSummary, LoadSummary};
pub use catalog::{CatalogError, CatalogResult, LoadPolicy};
pub use config::{CatalogConfig, ConfigError};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::category::{CategoryEntry, CategoryRegistry};
pub use model::symbol::{sanitize_comment, SymbolRecord, SymbolValidationError};
pub use persistence::manager::{FlushOutcome, PersistenceManager};
pub use persistence::scheduler::{FlushScheduler, FlushTarget};
pub use search::filter::{search, SearchOptions, SearchOutcome};
pub use search::query::{parse_query, ParsedQuery, QueryMode};
pub use service::catalog_service::{StartupSource, SymbolCatalog};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
