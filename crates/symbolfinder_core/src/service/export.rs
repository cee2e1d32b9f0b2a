//! Text payloads for copying selected records.
//!
//! The clipboard itself belongs to the presentation layer; these helpers
//! only build the text it receives.

use crate::model::symbol::SymbolRecord;

/// Concatenates the rendered glyphs of `records` in order.
pub fn glyphs_text<'a>(records: impl IntoIterator<Item = &'a SymbolRecord>) -> String {
    records
        .into_iter()
        .map(SymbolRecord::rendered_glyph)
        .collect()
}

/// One line per record: `{prefix}{code_point}\t{glyph}\t{name}[ - {comment}]`.
pub fn list_text<'a>(
    records: impl IntoIterator<Item = &'a SymbolRecord>,
    code_point_prefix: &str,
) -> String {
    let mut text = String::new();
    for record in records {
        text.push_str(code_point_prefix);
        text.push_str(record.code_point());
        text.push('\t');
        text.push_str(record.rendered_glyph());
        text.push('\t');
        text.push_str(record.display_name());
        if !record.personal_comment().is_empty() {
            text.push_str(" - ");
            text.push_str(record.personal_comment());
        }
        text.push('\n');
    }
    text
}
