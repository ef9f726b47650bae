// src/gui/table_model.rs
//! Display order for the package table.
//!
//! The session keeps entries in insertion order; the table shows them sorted
//! by whichever column header was clicked last. Ties fall back to the name so
//! the order is stable between frames.

use std::cmp::Ordering;

use crate::{config::state::SortColumn, session::PackageEntry};

pub fn sorted_rows(entries: &[PackageEntry], column: SortColumn, ascending: bool) -> Vec<&PackageEntry> {
    let mut rows: Vec<&PackageEntry> = entries.iter().collect();
    rows.sort_by(|a, b| {
        let ord = compare(a, b, column);
        if ascending { ord } else { ord.reverse() }
    });
    rows
}

fn compare(a: &PackageEntry, b: &PackageEntry, column: SortColumn) -> Ordering {
    let primary = match column {
        SortColumn::Name => Ordering::Equal,
        SortColumn::Version => a.version.cmp(&b.version),
        SortColumn::Source => a.source.to_string().cmp(&b.source.to_string()),
    };
    primary.then_with(|| a.name.cmp(&b.name))
}

/// Header label with a direction arrow on the active column.
pub fn header_label(title: &str, column: SortColumn, active: SortColumn, ascending: bool) -> String {
    if column != active {
        return s!(title);
    }
    join!(title, if ascending { " ▲" } else { " ▼" })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::EntrySource;

    fn entry(name: &str, version: &str, source: EntrySource) -> PackageEntry {
        PackageEntry { name: s!(name), version: s!(version), source }
    }

    #[test]
    fn sorts_by_each_column() {
        let rows = vec![
            entry("b", "2.0.0", EntrySource::Manual),
            entry("a", "Unknown", EntrySource::Readme),
            entry("c", "1.0.0", EntrySource::Readme),
        ];
        let names = |v: Vec<&PackageEntry>| v.iter().map(|e| e.name.clone()).collect::<Vec<_>>();

        assert_eq!(names(sorted_rows(&rows, SortColumn::Name, true)), ["a", "b", "c"]);
        assert_eq!(names(sorted_rows(&rows, SortColumn::Name, false)), ["c", "b", "a"]);
        assert_eq!(names(sorted_rows(&rows, SortColumn::Version, true)), ["c", "b", "a"]);
        assert_eq!(names(sorted_rows(&rows, SortColumn::Source, true)), ["b", "a", "c"]);
    }

    #[test]
    fn arrow_only_on_active_column() {
        assert_eq!(header_label("Package", SortColumn::Name, SortColumn::Name, true), "Package ▲");
        assert_eq!(header_label("Version", SortColumn::Version, SortColumn::Name, true), "Version");
    }
}
