// src/config/options.rs
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub registry: RegistryOptions,
    pub readme: ReadmeOptions,
    pub git: GitOptions,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegistryOptions {
    /// Scheme + host, no trailing slash (e.g. `https://pub.dev`)
    pub base_url: String,
    pub publisher: String,
    /// Search string for the second discovery strategy.
    /// `None` → `publisher:<publisher>`.
    pub search_query: Option<String>,
    pub fallback: Vec<String>,
    pub timeout: Duration,
}

impl Default for RegistryOptions {
    fn default() -> Self {
        Self {
            base_url: s!(REGISTRY_URL),
            publisher: s!(DEFAULT_PUBLISHER),
            search_query: None,
            fallback: FALLBACK_PACKAGES.iter().map(|n| s!(*n)).collect(),
            timeout: Duration::from_secs(HTTP_TIMEOUT_SECS),
        }
    }
}

impl RegistryOptions {
    pub fn with_base_url(mut self, url: &str) -> Self {
        self.base_url = s!(url.trim_end_matches('/'));
        self
    }

    pub fn search_query(&self) -> String {
        match &self.search_query {
            Some(q) => q.clone(),
            None => join!("publisher:", &self.publisher),
        }
    }

    pub fn publisher_url(&self) -> String {
        format!("{}/publishers/{}/packages", self.base_url, self.publisher)
    }

    pub fn search_url(&self) -> String {
        format!("{}/packages?q={}", self.base_url, self.search_query())
    }

    pub fn package_api_url(&self, name: &str) -> String {
        format!("{}/api/packages/{}", self.base_url, name)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReadmeOptions {
    pub repo_path: PathBuf,
    pub file_name: String,
}

impl Default for ReadmeOptions {
    fn default() -> Self {
        Self {
            repo_path: PathBuf::from("."),
            file_name: s!(README_FILE),
        }
    }
}

impl ReadmeOptions {
    pub fn for_repo(repo_path: impl AsRef<Path>) -> Self {
        Self { repo_path: repo_path.as_ref().to_path_buf(), ..Self::default() }
    }

    pub fn readme_path(&self) -> PathBuf {
        self.repo_path.join(&self.file_name)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GitOptions {
    pub commit_message: String,
    /// Batch updater only: add/commit/force-push after writing.
    pub push: bool,
}

impl Default for GitOptions {
    fn default() -> Self {
        Self {
            commit_message: s!(DEFAULT_COMMIT_MESSAGE),
            push: false,
        }
    }
}

impl GitOptions {
    /// Blank or whitespace-only messages fall back to the default.
    pub fn message_or_default(message: &str) -> String {
        let m = message.trim();
        if m.is_empty() { s!(DEFAULT_COMMIT_MESSAGE) } else { s!(m) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_follow_registry_layout() {
        let r = RegistryOptions::default().with_base_url("http://localhost:8080/");
        assert_eq!(r.publisher_url(), "http://localhost:8080/publishers/gllb-apps.github.io/packages");
        assert_eq!(r.search_url(), "http://localhost:8080/packages?q=publisher:gllb-apps.github.io");
        assert_eq!(r.package_api_url("wireframe_theme"), "http://localhost:8080/api/packages/wireframe_theme");
    }

    #[test]
    fn explicit_search_query_wins() {
        let r = RegistryOptions { search_query: Some(s!("wireframe")), ..Default::default() };
        assert_eq!(r.search_query(), "wireframe");
    }

    #[test]
    fn blank_commit_message_uses_default() {
        assert_eq!(GitOptions::message_or_default("   "), DEFAULT_COMMIT_MESSAGE);
        assert_eq!(GitOptions::message_or_default(" Bump list "), "Bump list");
    }
}
