use std::fs;
use std::path::Path;
use symbolfinder_core::service::export::{glyphs_text, list_text};
use symbolfinder_core::{
    api, CatalogConfig, CatalogError, FlushOutcome, StartupSource, SymbolCatalog,
};
use tempfile::TempDir;

const UNICODE_DATA: &str = "\
0041;LATIN CAPITAL LETTER A;Lu;0;L;;;;;N;;;;0061;
0042;LATIN CAPITAL LETTER B;Lu;0;L;;;;;N;;;;0062;
2192;RIGHTWARDS ARROW;Sm;0;ON;;;;;N;RIGHT ARROW;;;;
";

fn config_in(dir: &Path) -> CatalogConfig {
    CatalogConfig {
        catalog_path: dir.join("data").join("symbols.txt"),
        unicode_data_path: dir.join("UnicodeData.txt"),
        ..CatalogConfig::default()
    }
}

fn started_catalog() -> (TempDir, SymbolCatalog) {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());
    fs::write(&config.unicode_data_path, UNICODE_DATA).unwrap();
    let mut catalog = SymbolCatalog::new(config);
    catalog.import_or_load_on_startup().unwrap();
    (dir, catalog)
}

#[test]
fn first_run_imports_source_and_marks_dirty() {
    let (_dir, catalog) = started_catalog();
    assert_eq!(catalog.store().len(), 3);
    assert!(catalog.is_dirty());
}

#[test]
fn later_runs_load_the_catalog_file_exclusively() {
    let (dir, mut catalog) = started_catalog();
    catalog.set_comment("0041", "keep me").unwrap();
    catalog.flush(false).unwrap();

    // A source change must not leak into a normal startup.
    fs::write(
        dir.path().join("UnicodeData.txt"),
        "0043;LATIN CAPITAL LETTER C;Lu;0;L;;;;;N;;;;0063;\n",
    )
    .unwrap();

    let mut reopened = SymbolCatalog::new(config_in(dir.path()));
    let source = reopened.import_or_load_on_startup().unwrap();
    assert!(matches!(source, StartupSource::CatalogFile(summary) if summary.loaded == 3));
    assert!(!reopened.is_dirty());
    assert!(!reopened.store().contains("0043"));
    assert_eq!(
        reopened.store().get("0041").unwrap().personal_comment(),
        "keep me"
    );

    let summary = reopened.reimport_from_source().unwrap();
    assert_eq!(summary.added, 1);
    assert_eq!(reopened.store().len(), 4);
    assert!(reopened.is_dirty());
}

#[test]
fn reimport_without_new_records_stays_clean() {
    let (_dir, mut catalog) = started_catalog();
    catalog.flush(false).unwrap();

    let summary = catalog.reimport_from_source().unwrap();
    assert_eq!(summary.added, 0);
    assert_eq!(summary.duplicates, 3);
    assert!(!catalog.is_dirty());
}

#[test]
fn first_run_without_source_fails_with_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let mut catalog = SymbolCatalog::new(config_in(dir.path()));

    let err = catalog.import_or_load_on_startup().unwrap_err();
    assert!(matches!(err, CatalogError::NotFound(_)));

    let response = api::startup(&mut catalog);
    assert!(!response.ok);
    assert!(response.message.contains("not found"));
}

#[test]
fn annotation_edits_mark_dirty() {
    let (_dir, mut catalog) = started_catalog();
    catalog.flush(false).unwrap();
    assert!(!catalog.is_dirty());

    catalog.set_hidden(&["0042"], true).unwrap();
    assert!(catalog.is_dirty());
    catalog.flush(false).unwrap();

    catalog.toggle_favorite(&["0041", "2192"]).unwrap();
    assert!(catalog.is_dirty());
    assert!(catalog.store().get("0041").unwrap().is_favorite());
    assert!(catalog.store().get("2192").unwrap().is_favorite());
    catalog.flush(false).unwrap();

    catalog.set_comment("2192", "a;b;c").unwrap();
    assert!(catalog.is_dirty());
    assert_eq!(
        catalog.store().get("2192").unwrap().personal_comment(),
        "a,b,c"
    );
}

#[test]
fn toggle_hidden_flips_each_record() {
    let (_dir, mut catalog) = started_catalog();
    catalog.set_hidden(&["0041"], true).unwrap();

    let edited = catalog.toggle_hidden(&["0041", "0042"]).unwrap();
    assert_eq!(edited, 2);
    assert!(!catalog.store().get("0041").unwrap().is_hidden());
    assert!(catalog.store().get("0042").unwrap().is_hidden());
}

#[test]
fn unhiding_a_surrogate_is_not_an_edit() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());
    fs::write(
        &config.unicode_data_path,
        "D800;<Non Private Use High Surrogate, First>;Cs;0;L;;;;;N;;;;;\n",
    )
    .unwrap();
    let mut catalog = SymbolCatalog::new(config);
    catalog.import_or_load_on_startup().unwrap();
    catalog.flush(false).unwrap();

    let response = api::set_hidden(&mut catalog, &["D800".to_string()], false);
    assert!(response.ok);
    assert_eq!(response.message, "Unhid 0 symbols");
    assert!(catalog.store().get("D800").unwrap().is_hidden());
    assert!(!catalog.is_dirty());
}

#[test]
fn repeated_code_points_are_edited_once() {
    let (_dir, mut catalog) = started_catalog();
    catalog.flush(false).unwrap();

    let edited = catalog.toggle_favorite(&["0041", "0041"]).unwrap();
    assert_eq!(edited, 1);
    assert!(catalog.store().get("0041").unwrap().is_favorite());
    assert!(catalog.is_dirty());
}

#[test]
fn setting_an_unchanged_value_keeps_the_catalog_clean() {
    let (_dir, mut catalog) = started_catalog();
    catalog.flush(false).unwrap();

    assert_eq!(catalog.set_favorite(&["0041", "0042"], false).unwrap(), 0);
    catalog.set_comment("2192", "").unwrap();
    assert!(!catalog.is_dirty());
}

#[test]
fn startup_envelope_reports_skipped_source_lines() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());
    fs::write(
        &config.unicode_data_path,
        format!("{UNICODE_DATA}garbage\nZZZZ;NOT HEX;Lu;0;L;;;;;N;;;;;\n"),
    )
    .unwrap();
    let mut catalog = SymbolCatalog::new(config);

    let response = api::startup(&mut catalog);
    assert!(response.ok);
    assert!(response
        .message
        .ends_with("Added 3 symbols, skipped 0 duplicate entries, 2 lines skipped"));
}

#[test]
fn unknown_code_point_rejects_the_whole_batch() {
    let (_dir, mut catalog) = started_catalog();
    catalog.flush(false).unwrap();

    let err = catalog.set_favorite(&["0041", "FFFF"], true).unwrap_err();
    assert!(matches!(err, CatalogError::UnknownCodePoint(ref code) if code == "FFFF"));
    assert!(!catalog.store().get("0041").unwrap().is_favorite());
    assert!(!catalog.is_dirty());
}

#[test]
fn search_uses_catalog_categories() {
    let (_dir, mut catalog) = started_catalog();

    assert_eq!(catalog.search("", false, false).shown_count, 3);
    assert!(catalog.set_category_enabled("Sm", false));
    assert_eq!(catalog.search("", false, false).shown_count, 2);

    catalog.set_all_categories_enabled(false);
    assert_eq!(catalog.search("", false, false).shown_count, 0);
    catalog.set_all_categories_enabled(true);
    assert_eq!(catalog.search_default("arrow").shown_count, 1);
}

#[test]
fn category_list_is_in_table_order() {
    let (_dir, mut catalog) = started_catalog();
    catalog.set_category_enabled("Ll", false);

    let list = catalog.category_list();
    assert_eq!(list.len(), 30);
    assert_eq!(list[0], ("Lu", "Uppercase Letter", true));
    assert_eq!(list[1], ("Ll", "Lowercase Letter", false));
}

#[test]
fn api_envelopes_report_counts() {
    let (_dir, mut catalog) = started_catalog();

    let hidden = api::set_hidden(&mut catalog, &["0042".to_string()], true);
    assert!(hidden.ok);
    assert_eq!(hidden.message, "Hid 1 symbols");

    let missing = api::set_comment(&mut catalog, "ZZZZ", "nope");
    assert!(!missing.ok);

    let results = api::search(&catalog, "latin", false, false);
    assert_eq!(results.items.len(), 1);
    assert_eq!(results.items[0].code_point, "0041");
    assert_eq!(results.items[0].category_name, "Uppercase Letter");
    assert_eq!(results.message, "Found 1 (1 symbols hidden)");

    let update = api::update_unicode_data(&mut catalog);
    assert!(update.ok);
    assert!(update
        .message
        .contains("Added 0 symbols, skipped 3 duplicate entries, 0 lines skipped"));

    let saved = api::save(&mut catalog, false);
    assert!(saved.ok);
    assert!(saved.message.starts_with("Saved 3 symbols"));
    assert_eq!(api::save(&mut catalog, false).message, "No unsaved changes");
}

#[test]
fn forced_flush_writes_even_when_clean() {
    let (_dir, mut catalog) = started_catalog();
    catalog.flush(false).unwrap();

    assert_eq!(catalog.flush(false).unwrap(), FlushOutcome::Clean);
    assert_eq!(
        catalog.flush(true).unwrap(),
        FlushOutcome::Written { records: 3 }
    );
    assert_eq!(catalog.persistence().write_count(), 2);
}

#[test]
fn export_builds_glyph_and_list_payloads() {
    let (_dir, mut catalog) = started_catalog();
    catalog.set_comment("2192", "next").unwrap();

    let records = ["0041", "2192"]
        .iter()
        .filter_map(|code| catalog.store().get(code))
        .collect::<Vec<_>>();
    assert_eq!(glyphs_text(records.iter().copied()), "A\u{2192}");
    assert_eq!(
        list_text(records.iter().copied(), "U+"),
        "U+0041\tA\tLATIN CAPITAL LETTER A\nU+2192\t\u{2192}\tRIGHTWARDS ARROW - next\n"
    );

    let selection = vec!["0042".to_string(), "0041".to_string()];
    assert_eq!(api::copy_glyphs(&catalog, &selection), "BA");
    assert!(api::copy_list(&catalog, &selection).starts_with("U+0042\tB\t"));
}
