// tests/readme.rs
use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;

use pub_readme::{
    config::consts::{EMPTY_NOTICE, FALLBACK_NOTICE, TABLE_HEADER},
    readme::{self, extract_names, render_at, render_package_list_at, table_row},
    PackageRecord,
};

fn at() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 3, 0, 0).unwrap()
}

fn records(names: &[&str]) -> Vec<PackageRecord> {
    names.iter().map(|n| PackageRecord::named(*n)).collect()
}

#[test]
fn batch_document_for_three_packages() {
    let doc = render_at(&records(&["foo", "bar", "baz"]), false, at());

    let expected = [
        "# 📦 GLLB-Apps Dart Packages\n",
        "My published packages on pub.dev\n",
        TABLE_HEADER,
        "|---------|---------|------------|------------|------|",
        table_row("bar").as_str(),
        table_row("baz").as_str(),
        table_row("foo").as_str(),
        "\n---",
        "*Last updated: 2025-06-01 03:00:00 UTC*",
        "\n*Auto-updated daily via GitHub Actions*",
    ]
    .join("\n");

    assert_eq!(doc, expected);
    assert!(!doc.contains(FALLBACK_NOTICE));
}

#[test]
fn fallback_notice_sits_between_intro_and_table() {
    let doc = render_at(&records(&["wireframe_theme"]), true, at());
    let intro = doc.find("My published packages").unwrap();
    let notice = doc.find(FALLBACK_NOTICE).unwrap();
    let header = doc.find(TABLE_HEADER).unwrap();
    assert!(intro < notice && notice < header);
}

#[test]
fn empty_batch_has_notice_and_no_table() {
    let doc = render_at(&[], true, at());
    assert!(doc.contains(EMPTY_NOTICE));
    assert!(doc.contains(FALLBACK_NOTICE));
    assert!(!doc.contains(TABLE_HEADER));
}

#[test]
fn rendered_names_read_back_in_order() {
    let doc = render_package_list_at(&["zeta", "alpha", "mid_1"], at());
    assert_eq!(extract_names(&doc), vec!["alpha", "mid_1", "zeta"]);

    let doc = render_at(&records(&["b_pkg", "a_pkg"]), false, at());
    assert_eq!(extract_names(&doc), vec!["a_pkg", "b_pkg"]);
}

#[test]
fn editor_output_is_stable_apart_from_the_timestamp() {
    let first = render_package_list_at(&["one", "two"], at());
    let names = extract_names(&first);
    let second = render_package_list_at(&names, at());
    assert_eq!(first, second);
}

#[test]
fn badges_never_show_fetched_version() {
    let mut rec = PackageRecord::named("foo");
    rec.version = "9.9.9".to_string();
    rec.description = Some("A description".to_string());
    let doc = readme::render(&[rec], false);
    assert!(!doc.contains("9.9.9"));
    assert!(!doc.contains("A description"));
    assert!(doc.contains(&table_row("foo")));
}
