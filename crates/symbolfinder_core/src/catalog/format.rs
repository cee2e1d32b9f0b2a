//! Line formats for the personal catalog file and the raw Unicode data file.
//!
//! # Responsibility
//! - Parse one `;`-separated line into a `SymbolRecord`.
//! - Serialize records back into the catalog line format.
//!
//! # Invariants
//! - `parse_catalog_line(format_catalog_line(r)) == r` for every record.
//! - Booleans are written as `True`/`False` and parsed case-insensitively.

use crate::model::symbol::{SymbolRecord, SymbolValidationError};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub const FIELD_SEPARATOR: char = ';';

/// Minimum fields for a catalog line.
pub const CATALOG_FIELD_COUNT: usize = 7;
/// Raw lines shorter than this are not data lines at all.
pub const UNICODE_DATA_MIN_FIELDS: usize = 5;
/// Standard UnicodeData.txt record width.
pub const UNICODE_DATA_FIELD_COUNT: usize = 15;

mod catalog_field {
    pub const CODE_POINT: usize = 0;
    pub const DISPLAY_NAME: usize = 1;
    pub const CATEGORY: usize = 2;
    pub const LEGACY_NAME: usize = 3;
    pub const COMMENT: usize = 4;
    pub const FAVORITE: usize = 5;
    pub const HIDDEN: usize = 6;
}

mod unicode_field {
    pub const CODE_POINT: usize = 0;
    pub const NAME: usize = 1;
    pub const GENERAL_CATEGORY: usize = 2;
    pub const UNICODE_1_NAME: usize = 10;
}

/// Per-line parse failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineFormatError {
    TooFewFields { expected: usize, found: usize },
    InvalidBool { field: &'static str, value: String },
    InvalidCodePoint(String),
}

impl Display for LineFormatError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TooFewFields { expected, found } => {
                write!(f, "expected at least {expected} fields, found {found}")
            }
            Self::InvalidBool { field, value } => {
                write!(f, "field `{field}` is not a boolean: `{value}`")
            }
            Self::InvalidCodePoint(value) => write!(f, "invalid code point `{value}`"),
        }
    }
}

impl Error for LineFormatError {}

impl From<SymbolValidationError> for LineFormatError {
    fn from(value: SymbolValidationError) -> Self {
        match value {
            SymbolValidationError::InvalidCodePoint(code_point) => {
                Self::InvalidCodePoint(code_point)
            }
        }
    }
}

/// Parses one personal catalog line.
pub fn parse_catalog_line(line: &str) -> Result<SymbolRecord, LineFormatError> {
    let fields = line.split(FIELD_SEPARATOR).collect::<Vec<_>>();
    if fields.len() < CATALOG_FIELD_COUNT {
        return Err(LineFormatError::TooFewFields {
            expected: CATALOG_FIELD_COUNT,
            found: fields.len(),
        });
    }

    let is_favorite = parse_bool(fields[catalog_field::FAVORITE], "is_favorite")?;
    let is_hidden = parse_bool(fields[catalog_field::HIDDEN], "is_hidden")?;
    let record = SymbolRecord::new(
        fields[catalog_field::CODE_POINT],
        fields[catalog_field::DISPLAY_NAME],
        fields[catalog_field::CATEGORY],
        fields[catalog_field::LEGACY_NAME],
    )?;

    Ok(record.with_annotations(fields[catalog_field::COMMENT], is_favorite, is_hidden))
}

/// Serializes one record as a catalog line, without the line terminator.
pub fn format_catalog_line(record: &SymbolRecord) -> String {
    let mut line = String::with_capacity(
        record.code_point().len()
            + record.display_name().len()
            + record.legacy_name().len()
            + record.personal_comment().len()
            + 24,
    );
    for field in [
        record.code_point(),
        record.display_name(),
        record.category(),
        record.legacy_name(),
        record.personal_comment(),
        format_bool(record.is_favorite()),
        format_bool(record.is_hidden()),
    ] {
        line.push_str(field);
        line.push(FIELD_SEPARATOR);
    }
    line
}

/// Renders a full catalog document, one terminated line per record.
pub fn render_catalog<'a>(records: impl IntoIterator<Item = &'a SymbolRecord>) -> String {
    let mut document = String::new();
    for record in records {
        document.push_str(&format_catalog_line(record));
        document.push('\n');
    }
    document
}

/// Outcome of classifying one raw Unicode data line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawLine<'a> {
    /// Fewer than [`UNICODE_DATA_MIN_FIELDS`] fields; not a data line.
    Short { found: usize },
    /// A data line keyed by its first field.
    Data {
        code_point: &'a str,
        fields: Vec<&'a str>,
    },
}

/// Splits a raw line and extracts its key without building a record.
pub fn split_unicode_data_line(line: &str) -> RawLine<'_> {
    let fields = line.split(FIELD_SEPARATOR).collect::<Vec<_>>();
    if fields.len() < UNICODE_DATA_MIN_FIELDS {
        return RawLine::Short {
            found: fields.len(),
        };
    }
    RawLine::Data {
        code_point: fields[unicode_field::CODE_POINT],
        fields,
    }
}

/// Builds a record from the fields of a raw Unicode data line.
pub fn record_from_unicode_fields(fields: &[&str]) -> Result<SymbolRecord, LineFormatError> {
    if fields.len() < UNICODE_DATA_FIELD_COUNT {
        return Err(LineFormatError::TooFewFields {
            expected: UNICODE_DATA_FIELD_COUNT,
            found: fields.len(),
        });
    }

    Ok(SymbolRecord::new(
        fields[unicode_field::CODE_POINT],
        fields[unicode_field::NAME],
        fields[unicode_field::GENERAL_CATEGORY],
        fields[unicode_field::UNICODE_1_NAME],
    )?)
}

fn parse_bool(value: &str, field: &'static str) -> Result<bool, LineFormatError> {
    let trimmed = value.trim();
    if trimmed.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if trimmed.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(LineFormatError::InvalidBool {
            field,
            value: value.to_string(),
        })
    }
}

fn format_bool(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}
