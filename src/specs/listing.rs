// src/specs/listing.rs
//! Package names from a registry listing page (publisher or search results).
//!
//! Three selectors run over the same page and their results are unioned:
//! - `a[href^="/packages/"]`: any package-detail link
//! - `h3.packages-title a`: links inside the result title headings
//! - `.package-name a`: links inside name containers
//!
//! For every matched link the name is the path segment right after
//! `/packages/`, cut at the next `/` or `?`. Links that yield nothing are
//! dropped without complaint.

use std::collections::BTreeSet;

use crate::config::consts::PACKAGE_PATH_PREFIX;
use crate::core::html::{Tag, Tags};

pub type Selector = fn(&str) -> BTreeSet<String>;

pub static SELECTORS: &[(&str, Selector)] = &[
    ("a[href^=/packages/]", package_links),
    ("h3.packages-title a", title_links),
    (".package-name a", name_links),
];

/// Union of every selector's matches on one page.
pub fn extract_package_names(doc: &str) -> BTreeSet<String> {
    let mut out = BTreeSet::new();
    for (label, select) in SELECTORS {
        let found = select(doc);
        logd!("Listing: selector {label} matched {}", found.len());
        out.extend(found);
    }
    out
}

/// `/packages/foo/versions?x=1` → `foo`. `None` when the prefix is absent
/// or the segment after it is empty.
pub fn package_name_from_href(href: &str) -> Option<&str> {
    let (_, after) = href.split_once(PACKAGE_PATH_PREFIX)?;
    let name = after.split('/').next()?.split('?').next()?;
    if name.is_empty() { None } else { Some(name) }
}

fn package_links(doc: &str) -> BTreeSet<String> {
    Tags::new(doc)
        .filter(|t| !t.closing && t.name == "a")
        .filter_map(|t| {
            let href = t.attr("href")?;
            if !href.starts_with(PACKAGE_PATH_PREFIX) { return None; }
            package_name_from_href(href).map(|n| s!(n))
        })
        .collect()
}

fn title_links(doc: &str) -> BTreeSet<String> {
    links_within(doc, |t| t.name == "h3" && t.has_class("packages-title"))
}

fn name_links(doc: &str) -> BTreeSet<String> {
    links_within(doc, |t| t.has_class("package-name"))
}

/// Package links that sit anywhere below an element accepted by `scope`.
/// Keeps a loose stack of open elements; a closer pops back to its nearest
/// matching opener, which also closes anything left unclosed inside it.
fn links_within(doc: &str, scope: impl Fn(&Tag) -> bool) -> BTreeSet<String> {
    let mut out = BTreeSet::new();
    let mut stack: Vec<(String, bool)> = Vec::new();
    let mut open_scopes = 0usize;

    for tag in Tags::new(doc) {
        if tag.closing {
            if let Some(pos) = stack.iter().rposition(|(name, _)| *name == tag.name) {
                for (_, scoped) in stack.drain(pos..) {
                    if scoped { open_scopes -= 1; }
                }
            }
            continue;
        }

        if tag.name == "a" && open_scopes > 0 {
            if let Some(name) = tag.attr("href").and_then(package_name_from_href) {
                out.insert(s!(name));
            }
        }

        if tag.is_void() { continue; }

        let scoped = scope(&tag);
        if scoped { open_scopes += 1; }
        stack.push((tag.name, scoped));
    }

    out
}
