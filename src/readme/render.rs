// src/readme/render.rs
//
// Two layouts share the title block and the row template:
// - batch (`render`): optional fallback notice, empty-state notice instead of
//   an empty table, plain "Last updated" footer.
// - editor (`render_package_list`): always a table, bold timestamp footer.
//
// Rows are templated from the name alone. Version/description never reach
// the table, even when they were fetched.

use chrono::{DateTime, Utc};

use crate::config::consts::*;
use crate::specs::package::PackageRecord;

pub fn render(records: &[PackageRecord], fallback_used: bool) -> String {
    render_at(records, fallback_used, Utc::now())
}

pub fn render_at(records: &[PackageRecord], fallback_used: bool, now: DateTime<Utc>) -> String {
    let mut lines = title_block();

    if fallback_used {
        lines.push(join!(FALLBACK_NOTICE, "\n"));
    }

    let names = sorted_unique(records.iter().map(|r| r.name.as_str()));
    if names.is_empty() {
        lines.push(join!(EMPTY_NOTICE, "\n"));
    } else {
        push_table(&mut lines, &names);
    }

    lines.push(s!("\n---"));
    lines.push(format!("*Last updated: {} UTC*", now.format(TIMESTAMP_FORMAT)));
    lines.push(join!("\n", BATCH_FOOTER_NOTICE));

    lines.join("\n")
}

pub fn render_package_list<S: AsRef<str>>(names: &[S]) -> String {
    render_package_list_at(names, Utc::now())
}

pub fn render_package_list_at<S: AsRef<str>>(names: &[S], now: DateTime<Utc>) -> String {
    let mut lines = title_block();

    let names = sorted_unique(names.iter().map(|n| n.as_ref()));
    push_table(&mut lines, &names);

    lines.push(s!("\n---"));
    lines.push(format!("**Last updated:** `{} UTC` 🤖", now.format(TIMESTAMP_FORMAT)));
    lines.push(join!("\n", EDITOR_FOOTER_NOTICE));

    lines.join("\n")
}

pub fn table_row(name: &str) -> String {
    format!(
        "| **{name}** | \
         ![version](https://img.shields.io/pub/v/{name}.svg?color=blue) | \
         ![points](https://img.shields.io/pub/points/{name}?color=green) | \
         ![popularity](https://img.shields.io/pub/popularity/{name}?color=orange) | \
         [pub.dev](https://pub.dev/packages/{name}) |"
    )
}

fn title_block() -> Vec<String> {
    vec![join!(TITLE, "\n"), join!(INTRO, "\n")]
}

fn push_table(lines: &mut Vec<String>, names: &[&str]) {
    lines.push(s!(TABLE_HEADER));
    lines.push(s!(TABLE_SEPARATOR));
    lines.extend(names.iter().map(|n| table_row(n)));
}

fn sorted_unique<'a>(names: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut v: Vec<&str> = names.collect();
    v.sort_unstable();
    v.dedup();
    v
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 3, 0, 7).unwrap()
    }

    #[test]
    fn row_template_is_exact() {
        assert_eq!(
            table_row("foo"),
            "| **foo** | ![version](https://img.shields.io/pub/v/foo.svg?color=blue) | \
             ![points](https://img.shields.io/pub/points/foo?color=green) | \
             ![popularity](https://img.shields.io/pub/popularity/foo?color=orange) | \
             [pub.dev](https://pub.dev/packages/foo) |"
        );
    }

    #[test]
    fn empty_batch_layout() {
        let doc = render_at(&[], false, at());
        let expected = "# 📦 GLLB-Apps Dart Packages\n\n\
My published packages on pub.dev\n\n\
*No packages found.*\n\n\
\n---\n\
*Last updated: 2025-03-01 03:00:07 UTC*\n\
\n*Auto-updated daily via GitHub Actions*";
        assert_eq!(doc, expected);
    }

    #[test]
    fn editor_layout_keeps_header_when_empty() {
        let doc = render_package_list_at::<&str>(&[], at());
        assert!(doc.contains(TABLE_HEADER));
        assert!(!doc.contains(EMPTY_NOTICE));
        assert!(doc.ends_with(
            "\n---\n**Last updated:** `2025-03-01 03:00:07 UTC` 🤖\n\n*Auto-updated daily at 03:00 UTC via GitHub Actions*"
        ));
    }

    #[test]
    fn duplicate_names_render_once() {
        let recs = vec![PackageRecord::named("b"), PackageRecord::named("a"), PackageRecord::named("b")];
        let doc = render_at(&recs, false, at());
        assert_eq!(doc.matches("| **b** |").count(), 1);
        assert!(doc.find("| **a** |").unwrap() < doc.find("| **b** |").unwrap());
    }
}
