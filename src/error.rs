// src/error.rs
//
// One error type for the library. Variants follow the failure classes the
// tool cares about: transport, parse, validation, file I/O and git.

use std::{io, path::PathBuf};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("malformed metadata for '{name}': {source}")]
    Metadata {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("README not found: {}", .0.display())]
    ReadmeMissing(PathBuf),

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to launch `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },

    /// Non-zero exit from git. `stderr` is kept verbatim for the user.
    #[error("`{command}` exited with {status}: {stderr}")]
    Git {
        command: String,
        status: String,
        stderr: String,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io { path: path.into(), source }
    }
}

/// Rejections from the package list editor. None of these mutate the list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a package name.")]
    Empty,

    #[error("Invalid package name '{0}'. Use only: a-z, 0-9, underscore (_)")]
    Invalid(String),

    #[error("Package '{0}' already exists!")]
    Duplicate(String),

    #[error("Please select a package to remove")]
    NoSelection,

    #[error("Package '{0}' is not in the list")]
    Unknown(String),
}
