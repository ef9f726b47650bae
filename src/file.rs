// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::config::consts::{REPO_DIR_NAME, REPO_HOME_SUBDIRS};
use crate::error::{Error, Result};

/// Read the README as UTF-8. A missing file gets its own error so the UI
/// can say so plainly.
pub fn read_readme(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(Error::ReadmeMissing(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(|e| Error::io(path, e))
}

/// Overwrite the README wholesale. Parent directories must already exist;
/// the file lives at a repository root.
pub fn write_readme(path: &Path, contents: &str) -> Result<PathBuf> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.is_dir() {
            return Err(Error::io(
                parent,
                std::io::Error::new(std::io::ErrorKind::NotFound, "directory does not exist"),
            ));
        }
    }
    fs::write(path, contents).map_err(|e| Error::io(path, e))?;
    Ok(path.to_path_buf())
}

pub fn is_git_checkout(dir: &Path) -> bool {
    dir.join(".git").exists()
}

/// Best guess at the package list repository:
/// the cwd if it is a checkout, else a few conventional locations,
/// else the cwd anyway.
pub fn find_repo_path() -> PathBuf {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let home = dirs::home_dir();
    find_repo_path_from(&cwd, home.as_deref())
}

pub fn find_repo_path_from(cwd: &Path, home: Option<&Path>) -> PathBuf {
    if is_git_checkout(cwd) {
        return cwd.to_path_buf();
    }

    let mut candidates: Vec<PathBuf> = Vec::new();
    if let Some(home) = home {
        for sub in REPO_HOME_SUBDIRS {
            candidates.push(home.join(sub).join(REPO_DIR_NAME));
        }
    }
    if let Some(parent) = cwd.parent() {
        candidates.push(parent.join(REPO_DIR_NAME));
    }

    candidates
        .into_iter()
        .find(|p| p.is_dir() && is_git_checkout(p))
        .unwrap_or_else(|| cwd.to_path_buf())
}

/// Walk up until an existing directory is found (falls back to ".").
pub fn nearest_existing_dir(path: &Path) -> PathBuf {
    let mut current = path.to_path_buf();
    loop {
        if current.is_dir() {
            return current;
        }
        match current.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => current = parent.to_path_buf(),
            _ => return PathBuf::from("."),
        }
    }
}

/// Immediate subdirectories, sorted by name, hidden ones skipped.
pub fn list_subdirs(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut out = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| Error::io(dir, e))? {
        let path = entry.map_err(|e| Error::io(dir, e))?.path();
        let hidden = path
            .file_name()
            .and_then(|s| s.to_str())
            .map(|s| s.starts_with('.'))
            .unwrap_or(false);
        if path.is_dir() && !hidden {
            out.push(path);
        }
    }
    out.sort();
    Ok(out)
}
