// src/readme/parse.rs

use std::sync::LazyLock;

use regex::Regex;

// First cell of a generated row: `| **name** |`
static NAME_CELL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\|\s*\*\*([^*]+)\*\*\s*\|").expect("static pattern"));

/// Package names from bolded table cells, in document order.
/// Names are trimmed but otherwise taken as-is.
pub fn extract_names(text: &str) -> Vec<String> {
    NAME_CELL
        .captures_iter(text)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string())
        .collect()
}
