//! Catalog query engine.
//!
//! # Responsibility
//! - Parse the `+include-exclude` search mini-language.
//! - Evaluate parsed queries against the catalog with visibility rules.
//!
//! # Invariants
//! - Parsing never fails; malformed input degrades to a broader query.
//! - Results keep catalog order.

pub mod filter;
pub mod query;
