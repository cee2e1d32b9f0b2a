//! Symbol record domain model.
//!
//! # Responsibility
//! - Define the canonical catalog entry for one Unicode code point.
//! - Derive the rendered glyph once at construction.
//! - Keep user annotations (`hidden`, `favorite`, comment) in one place.
//!
//! # Invariants
//! - `code_point` is 1-6 hex digits and is never mutated.
//! - `rendered_glyph` is a pure function of `code_point` and `display_name`.
//! - `personal_comment` never contains `;`, `\r` or `\n`.
//! - Surrogate entries render an empty glyph and are always hidden.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

static CODE_POINT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9A-Fa-f]{1,6}$").expect("valid code point regex"));

const SURROGATE_MARKER: &str = "surrogate";

/// Validation error for symbol construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SymbolValidationError {
    /// Code point is not a 1-6 digit hexadecimal string.
    InvalidCodePoint(String),
}

impl Display for SymbolValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCodePoint(value) => {
                write!(f, "code point `{value}` is not a valid hex value")
            }
        }
    }
}

impl Error for SymbolValidationError {}

/// One Unicode code point in the personal catalog.
///
/// Fields are private so the glyph and comment invariants cannot be bypassed;
/// only the three annotation fields are mutable after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SymbolRecord {
    code_point: String,
    display_name: String,
    category: String,
    legacy_name: String,
    personal_comment: String,
    is_favorite: bool,
    is_hidden: bool,
    rendered_glyph: String,
}

impl SymbolRecord {
    /// Creates an unannotated record.
    ///
    /// # Errors
    /// - Returns `InvalidCodePoint` when `code_point` is not 1-6 hex digits.
    pub fn new(
        code_point: impl Into<String>,
        display_name: impl Into<String>,
        category: impl Into<String>,
        legacy_name: impl Into<String>,
    ) -> Result<Self, SymbolValidationError> {
        let code_point = code_point.into();
        if !CODE_POINT_RE.is_match(&code_point) {
            return Err(SymbolValidationError::InvalidCodePoint(code_point));
        }

        let display_name = display_name.into();
        let surrogate = is_surrogate_name(&display_name);
        let rendered_glyph = if surrogate {
            String::new()
        } else {
            render_glyph(&code_point)
        };

        Ok(Self {
            code_point,
            display_name,
            category: category.into(),
            legacy_name: legacy_name.into(),
            personal_comment: String::new(),
            is_favorite: false,
            is_hidden: surrogate,
            rendered_glyph,
        })
    }

    /// Applies persisted annotations, as read back from the catalog file.
    ///
    /// Surrogate entries stay hidden regardless of the persisted flag.
    pub fn with_annotations(mut self, comment: &str, is_favorite: bool, is_hidden: bool) -> Self {
        self.personal_comment = sanitize_comment(comment);
        self.is_favorite = is_favorite;
        self.is_hidden = is_hidden || self.is_surrogate();
        self
    }

    pub fn code_point(&self) -> &str {
        &self.code_point
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn legacy_name(&self) -> &str {
        &self.legacy_name
    }

    pub fn personal_comment(&self) -> &str {
        &self.personal_comment
    }

    pub fn is_favorite(&self) -> bool {
        self.is_favorite
    }

    pub fn is_hidden(&self) -> bool {
        self.is_hidden
    }

    /// Literal character for this code point, empty when it cannot be rendered.
    pub fn rendered_glyph(&self) -> &str {
        &self.rendered_glyph
    }

    /// Returns whether this entry names a surrogate code point.
    pub fn is_surrogate(&self) -> bool {
        is_surrogate_name(&self.display_name)
    }

    pub fn set_favorite(&mut self, value: bool) {
        self.is_favorite = value;
    }

    /// Sets the hidden flag. Surrogates cannot be unhidden.
    pub fn set_hidden(&mut self, value: bool) {
        self.is_hidden = value || self.is_surrogate();
    }

    /// Replaces the personal comment, stripping field separators.
    pub fn set_personal_comment(&mut self, value: &str) {
        self.personal_comment = sanitize_comment(value);
    }

    /// Case-insensitive containment test over name, comment and code point.
    ///
    /// `lowered_term` must already be lowercased by the caller so one query
    /// term is normalized once rather than once per record.
    pub fn contains_lowered(&self, lowered_term: &str) -> bool {
        if lowered_term.is_empty() {
            return true;
        }
        self.display_name.to_lowercase().contains(lowered_term)
            || self.personal_comment.to_lowercase().contains(lowered_term)
            || self.code_point.to_lowercase().contains(lowered_term)
    }
}

/// Replaces characters that would break the catalog line format.
///
/// `;` becomes `,`; CR and LF become spaces.
pub fn sanitize_comment(value: &str) -> String {
    value
        .chars()
        .map(|c| match c {
            ';' => ',',
            '\r' | '\n' => ' ',
            other => other,
        })
        .collect()
}

fn is_surrogate_name(display_name: &str) -> bool {
    display_name.to_lowercase().contains(SURROGATE_MARKER)
}

fn render_glyph(code_point: &str) -> String {
    u32::from_str_radix(code_point, 16)
        .ok()
        .and_then(char::from_u32)
        .map(String::from)
        .unwrap_or_default()
}
