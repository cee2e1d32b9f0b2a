//! Dirty-tracked catalog persistence.
//!
//! # Responsibility
//! - Decide when the catalog must be written back.
//! - Serialize the full catalog to the catalog file.
//! - Run the periodic flush trigger off the interactive thread.
//!
//! # Invariants
//! - The dirty flag is cleared only by a successful write.
//! - A failed write leaves the dirty flag set for the next trigger.
//! - The catalog is read for serialization only under exclusive access.

pub mod manager;
pub mod scheduler;
