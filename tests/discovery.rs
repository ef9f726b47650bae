// tests/discovery.rs
use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap};

use pub_readme::{
    config::options::RegistryOptions,
    core::Fetch,
    discover::{self, Source},
    progress::LinesProgress,
    scrape, Error, Result,
};

/// Canned responses keyed by URL; anything else is a 404.
#[derive(Default)]
struct FakeRegistry {
    pages: HashMap<String, String>,
    statuses: HashMap<String, u16>,
    requests: RefCell<Vec<String>>,
}

impl FakeRegistry {
    fn page(mut self, url: &str, body: &str) -> Self {
        self.pages.insert(url.to_string(), body.to_string());
        self
    }
    fn status(mut self, url: &str, status: u16) -> Self {
        self.statuses.insert(url.to_string(), status);
        self
    }
    fn requested(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

impl Fetch for FakeRegistry {
    fn get_text(&self, url: &str) -> Result<String> {
        self.requests.borrow_mut().push(url.to_string());
        if let Some(&status) = self.statuses.get(url) {
            return Err(Error::Status { url: url.to_string(), status });
        }
        match self.pages.get(url) {
            Some(body) => Ok(body.clone()),
            None => Err(Error::Status { url: url.to_string(), status: 404 }),
        }
    }
}

fn registry() -> RegistryOptions {
    RegistryOptions::default().with_base_url("http://registry.test")
}

fn names(list: &[&str]) -> BTreeSet<String> {
    list.iter().map(|n| n.to_string()).collect()
}

fn metadata(version: &str) -> String {
    format!(r#"{{"latest":{{"version":"{version}","pubspec":{{"description":"d"}}}}}}"#)
}

const PUBLISHER_PAGE: &str = r#"
<html><body>
  <div class="packages">
    <div class="packages-item">
      <h3 class="packages-title"><a href="/packages/wireframe_theme">wireframe_theme</a></h3>
    </div>
    <div class="packages-item">
      <h3 class="packages-title"><a href="/packages/flux_wireframe_theme_cli">flux_wireframe_theme_cli</a></h3>
      <a href="/packages/flux_wireframe_theme_cli/versions">versions</a>
    </div>
  </div>
</body></html>
"#;

#[test]
fn publisher_page_wins_and_search_is_skipped() {
    let reg = registry();
    let fake = FakeRegistry::default().page(&reg.publisher_url(), PUBLISHER_PAGE);
    let mut progress = LinesProgress::default();

    let found = discover::discover(&fake, &reg, &mut progress);

    assert_eq!(found.names, names(&["flux_wireframe_theme_cli", "wireframe_theme"]));
    assert_eq!(found.source, Source::Strategy("publisher"));
    assert!(!found.fallback_used());
    assert_eq!(fake.requested(), vec![reg.publisher_url()]);
    assert!(progress.lines.contains(&"✓ Found 2 packages from publisher".to_string()));
}

#[test]
fn empty_publisher_page_falls_through_to_search() {
    let reg = registry();
    let fake = FakeRegistry::default()
        .page(&reg.publisher_url(), "<html><body>No packages</body></html>")
        .page(&reg.search_url(), r#"<div class="package-name"><a href="/packages/only_in_search">x</a></div>"#);

    let found = discover::discover(&fake, &reg, &mut LinesProgress::default());

    assert_eq!(found.names, names(&["only_in_search"]));
    assert_eq!(found.source, Source::Strategy("search"));
    assert_eq!(fake.requested(), vec![reg.publisher_url(), reg.search_url()]);
}

#[test]
fn non_200_responses_count_as_failure() {
    let reg = registry();
    let fake = FakeRegistry::default()
        .status(&reg.publisher_url(), 500)
        .page(&reg.search_url(), PUBLISHER_PAGE);
    let mut progress = LinesProgress::default();

    let found = discover::discover(&fake, &reg, &mut progress);

    assert_eq!(found.source, Source::Strategy("search"));
    assert!(progress.lines.iter().any(|l| l.contains("publisher check failed")));
}

#[test]
fn everything_empty_uses_fallback_list() {
    let reg = registry();
    let fake = FakeRegistry::default();
    let mut progress = LinesProgress::default();

    let found = discover::discover(&fake, &reg, &mut progress);

    assert!(found.fallback_used());
    assert_eq!(found.names, names(&["flux_wireframe_theme_cli", "wireframe_theme"]));
    assert_eq!(progress.lines.last().map(String::as_str), Some("⚠️  Scraping failed, using fallback list..."));
}

#[test]
fn failed_metadata_drops_only_that_package() {
    let reg = registry();
    let page = r#"
        <a href="/packages/alpha">alpha</a>
        <a href="/packages/beta">beta</a>
        <a href="/packages/gamma">gamma</a>
    "#;
    let fake = FakeRegistry::default()
        .page(&reg.publisher_url(), page)
        .page(&reg.package_api_url("alpha"), &metadata("1.0.0"))
        .page(&reg.package_api_url("beta"), "{ not json")
        .page(&reg.package_api_url("gamma"), &metadata("0.3.1"));
    let mut progress = LinesProgress::default();

    let collection = scrape::collect_packages(&fake, &reg, &mut progress);

    let got: Vec<_> = collection.records.iter().map(|r| (r.name.as_str(), r.version.as_str())).collect();
    assert_eq!(got, vec![("alpha", "1.0.0"), ("gamma", "0.3.1")]);
    assert_eq!(collection.failed, vec!["beta".to_string()]);
    assert!(progress.lines.contains(&"  ✓ alpha v1.0.0".to_string()));
    assert!(progress.lines.contains(&"  ✗ beta (failed)".to_string()));

    // metadata fetched one by one, in name order, after the listing
    assert_eq!(
        fake.requested()[1..],
        [reg.package_api_url("alpha"), reg.package_api_url("beta"), reg.package_api_url("gamma")]
    );
}
