//! Search text tokenizer.
//!
//! The language has three tokens: `+`, `-` and a literal run. A literal run
//! before the first sign is an include term.
//!
//! # Invariants
//! - Empty runs are never emitted as terms.
//! - Boolean mode always has at least one include term; an exclude-only
//!   query gets an empty include term that matches everything.

const INCLUDE_SIGN: char = '+';
const EXCLUDE_SIGN: char = '-';

/// How the search text was interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryMode {
    /// No sign characters: the whole text is one substring term.
    Plain,
    /// Signed include/exclude terms.
    Boolean,
}

/// Structured include/exclude criteria.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedQuery {
    pub mode: QueryMode,
    pub include_terms: Vec<String>,
    pub exclude_terms: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Sign {
    Include,
    Exclude,
}

/// Parses raw search text into include/exclude terms.
pub fn parse_query(text: &str) -> ParsedQuery {
    if !text.contains([INCLUDE_SIGN, EXCLUDE_SIGN]) {
        return ParsedQuery {
            mode: QueryMode::Plain,
            include_terms: vec![text.to_string()],
            exclude_terms: Vec::new(),
        };
    }

    let mut include_terms = Vec::new();
    let mut exclude_terms = Vec::new();
    let mut sign = Sign::Include;
    let mut current = String::new();

    for c in text.chars() {
        let next_sign = match c {
            INCLUDE_SIGN => Sign::Include,
            EXCLUDE_SIGN => Sign::Exclude,
            other => {
                current.push(other);
                continue;
            }
        };
        flush_term(sign, &mut current, &mut include_terms, &mut exclude_terms);
        sign = next_sign;
    }
    flush_term(sign, &mut current, &mut include_terms, &mut exclude_terms);

    if include_terms.is_empty() {
        include_terms.push(String::new());
    }

    ParsedQuery {
        mode: QueryMode::Boolean,
        include_terms,
        exclude_terms,
    }
}

fn flush_term(
    sign: Sign,
    current: &mut String,
    include_terms: &mut Vec<String>,
    exclude_terms: &mut Vec<String>,
) {
    if current.is_empty() {
        return;
    }
    let term = std::mem::take(current);
    match sign {
        Sign::Include => include_terms.push(term),
        Sign::Exclude => exclude_terms.push(term),
    }
}
