use std::fs;
use symbolfinder_core::{
    parse_query, search, CatalogStore, CategoryRegistry, LoadPolicy, QueryMode, SearchOptions,
};

fn store_from_catalog(contents: &str) -> CatalogStore {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("symbols.txt");
    fs::write(&path, contents).unwrap();
    let mut store = CatalogStore::new();
    store
        .load_from_catalog_file(&path, LoadPolicy::SkipInvalid)
        .unwrap();
    store
}

fn codes(outcome: &symbolfinder_core::SearchOutcome<'_>) -> Vec<String> {
    outcome
        .results
        .iter()
        .map(|record| record.code_point().to_string())
        .collect()
}

const SAMPLE: &str = "\
0041;LATIN CAPITAL LETTER A;Lu;;;False;False;
0042;LATIN CAPITAL LETTER B;Lu;;;False;True;
0061;LATIN SMALL LETTER A;Ll;;vowel;True;False;
2190;LEFTWARDS ARROW;Sm;;;False;False;
2192;RIGHTWARDS ARROW;Sm;;pointing right;True;False;
000A;<control>;Cc;LINE FEED (LF);;False;False;
";

#[test]
fn parse_splits_include_and_exclude_terms() {
    let query = parse_query("cat+dog-fish");
    assert_eq!(query.mode, QueryMode::Boolean);
    assert_eq!(query.include_terms, vec!["cat", "dog"]);
    assert_eq!(query.exclude_terms, vec!["fish"]);
}

#[test]
fn exclude_only_query_gets_an_empty_include_term() {
    let query = parse_query("-fish");
    assert_eq!(query.include_terms, vec![""]);
    assert_eq!(query.exclude_terms, vec!["fish"]);
}

#[test]
fn text_without_signs_is_one_plain_term() {
    let query = parse_query("latin letter");
    assert_eq!(query.mode, QueryMode::Plain);
    assert_eq!(query.include_terms, vec!["latin letter"]);
    assert!(query.exclude_terms.is_empty());

    let empty = parse_query("");
    assert_eq!(empty.mode, QueryMode::Plain);
    assert_eq!(empty.include_terms, vec![""]);
}

#[test]
fn lone_signs_degrade_to_full_catalog() {
    for text in ["+", "-", "+-+"] {
        let query = parse_query(text);
        assert_eq!(query.include_terms, vec![""], "query {text:?}");
        assert!(query.exclude_terms.is_empty(), "query {text:?}");
    }
}

#[test]
fn end_to_end_hidden_record_visibility() {
    let store = store_from_catalog(
        "0041;LATIN CAPITAL LETTER A;Lu;;;False;False;\n\
         0042;LATIN CAPITAL LETTER B;Lu;;;False;True;\n",
    );
    let registry = CategoryRegistry::new();

    let hidden_off = search(&store, &registry, "letter", SearchOptions::default());
    assert_eq!(codes(&hidden_off), vec!["0041"]);
    assert_eq!(hidden_off.shown_count, 1);
    assert_eq!(hidden_off.hidden_count, 1);

    let hidden_on = search(
        &store,
        &registry,
        "letter",
        SearchOptions {
            show_hidden: true,
            show_favorites_only: false,
        },
    );
    assert_eq!(codes(&hidden_on), vec!["0041", "0042"]);
    assert_eq!(hidden_on.shown_count, 2);
    assert_eq!(hidden_on.hidden_count, 1);
}

#[test]
fn plain_search_matches_name_comment_and_code_point() {
    let store = store_from_catalog(SAMPLE);
    let registry = CategoryRegistry::new();
    let options = SearchOptions::default();

    assert_eq!(codes(&search(&store, &registry, "Arrow", options)), vec!["2190", "2192"]);
    assert_eq!(codes(&search(&store, &registry, "VOWEL", options)), vec!["0061"]);
    assert_eq!(codes(&search(&store, &registry, "219", options)), vec!["2190", "2192"]);
    assert_eq!(search(&store, &registry, "", options).shown_count, 5);
}

#[test]
fn legacy_name_is_not_searched() {
    let store = store_from_catalog(SAMPLE);
    let registry = CategoryRegistry::new();

    let outcome = search(&store, &registry, "line feed", SearchOptions::default());
    assert!(outcome.results.is_empty());
}

#[test]
fn boolean_search_requires_all_includes_and_no_excludes() {
    let store = store_from_catalog(SAMPLE);
    let registry = CategoryRegistry::new();
    let options = SearchOptions {
        show_hidden: true,
        show_favorites_only: false,
    };

    assert_eq!(
        codes(&search(&store, &registry, "latin+capital", options)),
        vec!["0041", "0042"]
    );
    assert_eq!(
        codes(&search(&store, &registry, "letter-small", options)),
        vec!["0041", "0042"]
    );
    assert_eq!(
        codes(&search(&store, &registry, "-letter-arrow", options)),
        vec!["000A"]
    );
    assert_eq!(
        codes(&search(&store, &registry, "arrow-RIGHT", options)),
        vec!["2190"]
    );
}

#[test]
fn favorites_only_keeps_favorites() {
    let store = store_from_catalog(SAMPLE);
    let registry = CategoryRegistry::new();

    let outcome = search(
        &store,
        &registry,
        "",
        SearchOptions {
            show_hidden: false,
            show_favorites_only: true,
        },
    );
    assert_eq!(codes(&outcome), vec!["0061", "2192"]);
}

#[test]
fn disabled_category_wins_over_hidden_and_favorite_flags() {
    let store = store_from_catalog(SAMPLE);
    let mut registry = CategoryRegistry::new();
    registry.set_enabled("Sm", false);
    registry.set_enabled("Lu", false);

    let outcome = search(
        &store,
        &registry,
        "",
        SearchOptions {
            show_hidden: true,
            show_favorites_only: false,
        },
    );
    assert_eq!(codes(&outcome), vec!["0061", "000A"]);
    // 0042 is still a hidden text match even though its category is off.
    assert_eq!(outcome.hidden_count, 1);
}

#[test]
fn unknown_category_records_stay_visible() {
    let store = store_from_catalog("E000;PRIVATE THING;Qq;;;False;False;\n");
    let mut registry = CategoryRegistry::new();
    registry.set_all_enabled(false);

    let outcome = search(&store, &registry, "private", SearchOptions::default());
    assert_eq!(codes(&outcome), vec!["E000"]);
}

#[test]
fn summary_text_reflects_hidden_mode() {
    let store = store_from_catalog(SAMPLE);
    let registry = CategoryRegistry::new();

    let outcome = search(&store, &registry, "latin", SearchOptions::default());
    assert_eq!(outcome.summary(false), "Found 2 (1 symbols hidden)");
    assert_eq!(
        outcome.summary(true),
        "Found 2 (including 1 hidden symbols)"
    );
}
