//! Unicode general category reference data.
//!
//! # Responsibility
//! - Provide the fixed TR44 general-category table with display metadata.
//! - Hold per-run visibility toggles used by the search filter.
//!
//! # Invariants
//! - The key set is fixed at construction; only `enabled` mutates.
//! - Iteration order is insertion order of the TR44 table.
//! - Toggles are never persisted and reset to enabled on every run.
//!
//! # See also
//! - https://www.unicode.org/reports/tr44/#General_Category_Values

use serde::Serialize;
use std::collections::BTreeMap;

const GENERAL_CATEGORIES: &[(&str, &str, &str)] = &[
    ("Lu", "Uppercase Letter", "an uppercase letter"),
    ("Ll", "Lowercase Letter", "a lowercase letter"),
    (
        "Lt",
        "Titlecase Letter",
        "a digraph encoded as a single character, with first part uppercase",
    ),
    ("Lm", "Modifier Letter", "a modifier letter"),
    (
        "Lo",
        "Other Letter",
        "other letters, including syllables and ideographs",
    ),
    (
        "Mn",
        "Nonspacing Mark",
        "a nonspacing combining mark (zero advance width)",
    ),
    (
        "Mc",
        "Spacing Mark",
        "a spacing combining mark (positive advance width)",
    ),
    ("Me", "Enclosing Mark", "an enclosing combining mark"),
    ("Nd", "Decimal Number", "a decimal digit"),
    ("Nl", "Letter Number", "a letterlike numeric character"),
    ("No", "Other Number", "a numeric character of other type"),
    (
        "Pc",
        "Connector Punctuation",
        "a connecting punctuation mark, like a tie",
    ),
    ("Pd", "Dash Punctuation", "a dash or hyphen punctuation mark"),
    (
        "Ps",
        "Open Punctuation",
        "an opening punctuation mark (of a pair)",
    ),
    (
        "Pe",
        "Close Punctuation",
        "a closing punctuation mark (of a pair)",
    ),
    ("Pi", "Initial Punctuation", "an initial quotation mark"),
    ("Pf", "Final Punctuation", "a final quotation mark"),
    ("Po", "Other Punctuation", "a punctuation mark of other type"),
    ("Sm", "Math Symbol", "a symbol of mathematical use"),
    ("Sc", "Currency Symbol", "a currency sign"),
    ("Sk", "Modifier Symbol", "a non-letterlike modifier symbol"),
    ("So", "Other Symbol", "a symbol of other type"),
    (
        "Zs",
        "Space Separator",
        "a space character (of various non-zero widths)",
    ),
    ("Zl", "Line Separator", "U+2028 LINE SEPARATOR only"),
    ("Zp", "Paragraph Separator", "U+2029 PARAGRAPH SEPARATOR only"),
    ("Cc", "Control", "a C0 or C1 control code"),
    ("Cf", "Format", "a format control character"),
    ("Cs", "Surrogate", "a surrogate code point"),
    ("Co", "Private Use", "a private-use character"),
    (
        "Cn",
        "Unassigned",
        "a reserved unassigned code point or a noncharacter",
    ),
];

/// One general-category entry with its visibility toggle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryEntry {
    pub short_code: &'static str,
    pub long_name: &'static str,
    pub description: &'static str,
    pub enabled: bool,
}

/// Category table constructed once per process and passed by reference.
#[derive(Debug, Clone)]
pub struct CategoryRegistry {
    entries: Vec<CategoryEntry>,
    index: BTreeMap<&'static str, usize>,
}

impl Default for CategoryRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CategoryRegistry {
    /// Builds the registry with every category enabled.
    pub fn new() -> Self {
        let entries = GENERAL_CATEGORIES
            .iter()
            .map(|&(short_code, long_name, description)| CategoryEntry {
                short_code,
                long_name,
                description,
                enabled: true,
            })
            .collect::<Vec<_>>();
        let index = entries
            .iter()
            .enumerate()
            .map(|(position, entry)| (entry.short_code, position))
            .collect();

        Self { entries, index }
    }

    pub fn get(&self, short_code: &str) -> Option<&CategoryEntry> {
        self.index
            .get(short_code)
            .map(|&position| &self.entries[position])
    }

    /// Returns the long name, or an empty string for unknown codes.
    pub fn get_display_name(&self, short_code: &str) -> &'static str {
        self.get(short_code)
            .map(|entry| entry.long_name)
            .unwrap_or("")
    }

    /// Enables or disables one category.
    ///
    /// Returns `false` when `short_code` is unknown.
    pub fn set_enabled(&mut self, short_code: &str, enabled: bool) -> bool {
        match self.index.get(short_code) {
            Some(&position) => {
                self.entries[position].enabled = enabled;
                true
            }
            None => false,
        }
    }

    /// Bulk toggle for select-all / select-none.
    pub fn set_all_enabled(&mut self, enabled: bool) {
        for entry in &mut self.entries {
            entry.enabled = enabled;
        }
    }

    /// Visibility rule used by search. Unknown categories are always visible.
    pub fn is_visible(&self, short_code: &str) -> bool {
        self.get(short_code).map_or(true, |entry| entry.enabled)
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[CategoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
