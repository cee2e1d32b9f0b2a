//! Catalog domain model.
//!
//! # Responsibility
//! - Define the symbol record and category reference data used by core.
//!
//! # Invariants
//! - Every record is identified by its hex `code_point`.
//! - Records are created by import only; users annotate, never create or delete.

pub mod category;
pub mod symbol;
