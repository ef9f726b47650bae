// src/specs/package.rs
//! Package metadata from `/api/packages/<name>`.
//!
//! Only three fields are read: `latest.version` (required),
//! `latest.pubspec.description` and `latest.published` (both optional).
//! A document without `latest.version` is malformed.

use serde::Deserialize;

use crate::config::{consts::UNKNOWN_VERSION, options::RegistryOptions};
use crate::core::Fetch;
use crate::error::{Error, Result};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PackageRecord {
    pub name: String,
    pub version: String,
    pub description: Option<String>,
    pub published: Option<String>,
}

impl PackageRecord {
    /// A record with nothing known beyond the name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: s!(UNKNOWN_VERSION),
            description: None,
            published: None,
        }
    }
}

#[derive(Deserialize)]
struct PackageDoc {
    latest: LatestVersion,
}

#[derive(Deserialize)]
struct LatestVersion {
    version: String,
    #[serde(default)]
    pubspec: Option<Pubspec>,
    #[serde(default)]
    published: Option<String>,
}

#[derive(Deserialize)]
struct Pubspec {
    #[serde(default)]
    description: Option<String>,
}

pub fn parse_metadata(name: &str, body: &str) -> Result<PackageRecord> {
    let doc: PackageDoc = serde_json::from_str(body)
        .map_err(|source| Error::Metadata { name: s!(name), source })?;

    let latest = doc.latest;
    let description = latest
        .pubspec
        .and_then(|p| p.description)
        .map(|d| d.trim().to_string())
        .filter(|d| !d.is_empty());

    Ok(PackageRecord {
        name: s!(name),
        version: latest.version,
        description,
        published: latest.published.filter(|p| !p.is_empty()),
    })
}

pub fn fetch(client: &dyn Fetch, registry: &RegistryOptions, name: &str) -> Result<PackageRecord> {
    let body = client.get_text(&registry.package_api_url(name))?;
    parse_metadata(name, &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_document() {
        let body = r#"{
            "name": "wireframe_theme",
            "latest": {
                "version": "1.2.0",
                "pubspec": { "name": "wireframe_theme", "description": " Sketchy Flutter theme. " },
                "published": "2025-01-04T10:00:00.000Z"
            },
            "versions": []
        }"#;
        let rec = parse_metadata("wireframe_theme", body).unwrap();
        assert_eq!(rec.version, "1.2.0");
        assert_eq!(rec.description.as_deref(), Some("Sketchy Flutter theme."));
        assert_eq!(rec.published.as_deref(), Some("2025-01-04T10:00:00.000Z"));
    }

    #[test]
    fn optional_fields_may_be_missing() {
        let rec = parse_metadata("x", r#"{"latest":{"version":"0.0.1"}}"#).unwrap();
        assert_eq!(rec, PackageRecord {
            name: s!("x"),
            version: s!("0.0.1"),
            description: None,
            published: None,
        });

        let rec = parse_metadata("x", r#"{"latest":{"version":"0.0.1","pubspec":{}}}"#).unwrap();
        assert!(rec.description.is_none());
    }

    #[test]
    fn missing_version_is_malformed() {
        let err = parse_metadata("x", r#"{"latest":{}}"#).unwrap_err();
        assert!(matches!(err, Error::Metadata { .. }));
        assert!(parse_metadata("x", "<html>").is_err());
    }
}
