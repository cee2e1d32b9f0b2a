//! Catalog configuration.
//!
//! # Responsibility
//! - Describe file locations and runtime defaults for one catalog.
//! - Load overrides from an optional JSON document.
//!
//! # Invariants
//! - Every field has a default; a missing config file is not an error.
//! - A loaded config has passed `validate()`.

use crate::catalog::LoadPolicy;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_CATALOG_PATH: &str = "data/symbols.txt";
pub const DEFAULT_UNICODE_DATA_PATH: &str = "data/UnicodeData.txt";
pub const DEFAULT_FLUSH_INTERVAL_SECS: u64 = 30;
pub const DEFAULT_CODE_POINT_PREFIX: &str = "U+";

/// Configuration loading/validation error.
#[derive(Debug)]
pub enum ConfigError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    Invalid(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read config `{}`: {source}", path.display())
            }
            Self::Parse { path, source } => {
                write!(f, "failed to parse config `{}`: {source}", path.display())
            }
            Self::Invalid(message) => write!(f, "invalid config: {message}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            Self::Invalid(_) => None,
        }
    }
}

/// Runtime configuration for one personal catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// The personal catalog file (annotated, rewritten on flush).
    pub catalog_path: PathBuf,
    /// Raw UnicodeData.txt used for first-run import and explicit updates.
    pub unicode_data_path: PathBuf,
    /// Seconds between periodic flush attempts.
    pub flush_interval_secs: u64,
    /// Prefix written before code points in list exports.
    pub code_point_prefix: String,
    pub show_hidden: bool,
    pub show_favorites_only: bool,
    /// Abort catalog load on the first malformed line instead of skipping it.
    pub strict_catalog_load: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from(DEFAULT_CATALOG_PATH),
            unicode_data_path: PathBuf::from(DEFAULT_UNICODE_DATA_PATH),
            flush_interval_secs: DEFAULT_FLUSH_INTERVAL_SECS,
            code_point_prefix: DEFAULT_CODE_POINT_PREFIX.to_string(),
            show_hidden: false,
            show_favorites_only: false,
            strict_catalog_load: false,
        }
    }
}

impl CatalogConfig {
    /// Loads a JSON config, falling back to defaults when `path` is missing.
    ///
    /// # Errors
    /// - `Io` when the file exists but cannot be read.
    /// - `Parse` when the document is not valid config JSON.
    /// - `Invalid` when the parsed values fail validation.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(err) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        };

        let config: Self = serde_json::from_str(&text).map_err(|err| ConfigError::Parse {
            path: path.to_path_buf(),
            source: err,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.catalog_path.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("catalog_path cannot be empty".into()));
        }
        if self.unicode_data_path.as_os_str().is_empty() {
            return Err(ConfigError::Invalid(
                "unicode_data_path cannot be empty".into(),
            ));
        }
        if self.flush_interval_secs == 0 {
            return Err(ConfigError::Invalid(
                "flush_interval_secs must be greater than zero".into(),
            ));
        }
        Ok(())
    }

    pub fn flush_interval(&self) -> Duration {
        Duration::from_secs(self.flush_interval_secs)
    }

    pub fn load_policy(&self) -> LoadPolicy {
        if self.strict_catalog_load {
            LoadPolicy::Abort
        } else {
            LoadPolicy::SkipInvalid
        }
    }
}
