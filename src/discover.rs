// src/discover.rs
//
// Candidate package names: try each listing strategy in order, stop at the
// first page that yields any names, else fall back to the fixed list.

use std::collections::BTreeSet;

use crate::{
    config::options::RegistryOptions,
    core::Fetch,
    error::Error,
    progress::Progress,
    specs::listing,
};

/// One way of finding a listing page.
pub struct Strategy {
    pub label: &'static str,
    pub url: fn(&RegistryOptions) -> String,
}

pub static STRATEGIES: &[Strategy] = &[
    Strategy { label: "publisher", url: RegistryOptions::publisher_url },
    Strategy { label: "search", url: RegistryOptions::search_url },
];

/// Outcome of one strategy. Transport and status faults land in `Failed`
/// and are treated like `Empty` by the loop.
#[derive(Debug)]
pub enum Attempt {
    Found(BTreeSet<String>),
    Empty,
    Failed(Error),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    Strategy(&'static str),
    Fallback,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Discovery {
    pub names: BTreeSet<String>,
    pub source: Source,
}

impl Discovery {
    pub fn fallback_used(&self) -> bool {
        self.source == Source::Fallback
    }
}

pub fn attempt(client: &dyn Fetch, url: &str) -> Attempt {
    match client.get_text(url) {
        Ok(doc) => {
            let names = listing::extract_package_names(&doc);
            if names.is_empty() { Attempt::Empty } else { Attempt::Found(names) }
        }
        Err(e) => Attempt::Failed(e),
    }
}

pub fn discover(
    client: &dyn Fetch,
    registry: &RegistryOptions,
    progress: &mut dyn Progress,
) -> Discovery {
    for strategy in STRATEGIES {
        let url = (strategy.url)(registry);
        progress.log(&format!("🔍 Checking {}: {url}", strategy.label));

        match attempt(client, &url) {
            Attempt::Found(names) => {
                logf!("Discover: {} → {} package(s)", strategy.label, names.len());
                progress.log(&format!("✓ Found {} packages from {}", names.len(), strategy.label));
                return Discovery { names, source: Source::Strategy(strategy.label) };
            }
            Attempt::Empty => {
                logd!("Discover: {} page had no package links", strategy.label);
            }
            Attempt::Failed(e) => {
                loge!("Discover: {} failed: {e}", strategy.label);
                progress.log(&format!("⚠️  {} check failed: {e}", strategy.label));
            }
        }
    }

    progress.log("⚠️  Scraping failed, using fallback list...");
    logf!("Discover: fallback list ({} names)", registry.fallback.len());
    Discovery {
        names: registry.fallback.iter().cloned().collect(),
        source: Source::Fallback,
    }
}
