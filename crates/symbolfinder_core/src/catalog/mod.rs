//! Catalog storage: the ordered record collection and its file formats.
//!
//! # Responsibility
//! - Own the ordered sequence of symbol records.
//! - Parse the personal catalog file and the raw Unicode data source.
//! - Report whole-file failures as typed errors and per-line failures as counts.
//!
//! # Invariants
//! - `code_point` is unique within one store.
//! - A source merge is additive; existing records are never replaced.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub mod format;
pub mod store;

use format::LineFormatError;

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Whole-operation failure for catalog load, import and write.
#[derive(Debug)]
pub enum CatalogError {
    /// Expected input file does not exist.
    NotFound(PathBuf),
    /// Read or write failure.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// A line could not be parsed under the abort-on-error load policy.
    Format {
        path: PathBuf,
        line: usize,
        source: LineFormatError,
    },
    /// Mutation targeted a code point that is not in the catalog.
    UnknownCodePoint(String),
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(path) => write!(f, "file not found: {}", path.display()),
            Self::Io { path, source } => {
                write!(f, "error accessing file {}: {source}", path.display())
            }
            Self::Format { path, line, source } => {
                write!(f, "{}:{line}: {source}", path.display())
            }
            Self::UnknownCodePoint(code_point) => {
                write!(f, "code point not in catalog: {code_point}")
            }
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Format { source, .. } => Some(source),
            Self::NotFound(_) | Self::UnknownCodePoint(_) => None,
        }
    }
}

/// Policy for malformed lines in the personal catalog file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPolicy {
    /// Skip the line, count it and continue.
    #[default]
    SkipInvalid,
    /// Abort the whole load on the first malformed line.
    Abort,
}
