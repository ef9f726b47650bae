// src/specs/mod.rs
//! # Registry page "specs"
//!
//! Each spec here knows how to read exactly one kind of registry response and
//! nothing else.
//!
//! ## What lives here
//! - **Listing pages** (`listing`): the publisher page and the search page
//!   share one layout family, so they share one extractor. It is a union of
//!   independent selectors, each a pure `&str -> BTreeSet<String>`:
//!   `a[href^="/packages/"]`, `h3.packages-title a`, `.package-name a`.
//! - **Package metadata** (`package`): the per-package JSON document
//!   (`/api/packages/<name>`) shaped into a `PackageRecord`.
//!
//! ## What does **not** live here
//! - Strategy order and the fallback list (`discover`).
//! - Batching, progress and per-package failure policy (`scrape`).
//! - Markdown output (`readme`).
//!
//! ## Conventions
//! - Markup scanning goes through `core::html` (case-insensitive, tolerant of
//!   attribute order and quoting). No full-document regexes.
//! - Anything that does not match is skipped silently; an empty result is a
//!   normal outcome, not an error.
//! - Specs are testable offline against inline HTML/JSON fixtures.
pub mod listing;
pub mod package;
