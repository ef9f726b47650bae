// src/scrape.rs
//
// Discovery followed by one metadata fetch per candidate, strictly one at a
// time in the discovered set's order. A failed fetch drops that package and
// the batch carries on.

use crate::{
    config::options::RegistryOptions,
    core::Fetch,
    discover::{self, Discovery},
    progress::Progress,
    specs::package::{self, PackageRecord},
};

pub struct Collection {
    pub discovery: Discovery,
    pub records: Vec<PackageRecord>,
    /// Names whose metadata could not be fetched
    pub failed: Vec<String>,
}

impl Collection {
    pub fn fallback_used(&self) -> bool {
        self.discovery.fallback_used()
    }
}

/// `None` on any transport, status or parse fault; the reason goes to the log.
pub fn fetch_record(
    client: &dyn Fetch,
    registry: &RegistryOptions,
    name: &str,
) -> Option<PackageRecord> {
    match package::fetch(client, registry, name) {
        Ok(rec) => Some(rec),
        Err(e) => {
            loge!("Fetch: {name}: {e}");
            None
        }
    }
}

pub fn collect_packages(
    client: &dyn Fetch,
    registry: &RegistryOptions,
    progress: &mut dyn Progress,
) -> Collection {
    let discovery = discover::discover(client, registry, progress);

    progress.log(&format!("📦 Processing {} packages...", discovery.names.len()));
    progress.begin(discovery.names.len());

    let mut records = Vec::with_capacity(discovery.names.len());
    let mut failed = Vec::new();

    for name in &discovery.names {
        match fetch_record(client, registry, name) {
            Some(rec) => {
                progress.item_done(&rec.name, &rec.version);
                records.push(rec);
            }
            None => {
                progress.item_failed(name);
                failed.push(name.clone());
            }
        }
    }

    progress.finish();
    logf!("Collect: ok={} failed={}", records.len(), failed.len());

    Collection { discovery, records, failed }
}
