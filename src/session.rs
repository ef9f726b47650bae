// src/session.rs
//
// In-memory package list behind the editor (GUI and CLI edit commands).
// The README is both the source and the sink: load reads names from its
// table, generate writes a fresh document from the list.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::{
    config::{
        consts::{README_FILE, UNKNOWN_VERSION},
        options::GitOptions,
    },
    core::sanitize::validate_package_name,
    error::{Error, Result, ValidationError},
    file,
    git::{CommitOutcome, Git, GitOutput},
    progress::Progress,
    readme,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum EntrySource {
    Readme,
    Manual,
}

impl fmt::Display for EntrySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EntrySource::Readme => "README",
            EntrySource::Manual => "Manual",
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PackageEntry {
    pub name: String,
    pub version: String,
    pub source: EntrySource,
}

impl PackageEntry {
    pub fn new(name: impl Into<String>, source: EntrySource) -> Self {
        Self { name: name.into(), version: s!(UNKNOWN_VERSION), source }
    }
}

/// What `publish` got through. Push failure is an `Err`, not a variant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublishReport {
    pub readme: PathBuf,
    pub commit: CommitOutcome,
    pub push: GitOutput,
}

pub struct Session {
    repo_path: PathBuf,
    file_name: String,
    packages: Vec<PackageEntry>,
}

impl Session {
    pub fn new(repo_path: impl AsRef<Path>) -> Self {
        Self {
            repo_path: repo_path.as_ref().to_path_buf(),
            file_name: s!(README_FILE),
            packages: Vec::new(),
        }
    }

    pub fn repo_path(&self) -> &Path {
        &self.repo_path
    }

    /// Point at another repository. The list is kept until the next load.
    pub fn set_repo_path(&mut self, path: impl AsRef<Path>) {
        self.repo_path = path.as_ref().to_path_buf();
    }

    pub fn readme_path(&self) -> PathBuf {
        self.repo_path.join(&self.file_name)
    }

    pub fn packages(&self) -> &[PackageEntry] {
        &self.packages
    }

    pub fn contains(&self, name: &str) -> bool {
        self.packages.iter().any(|p| p.name == name)
    }

    /// Replace the list with the names found in the README table.
    /// On any error the current list is left untouched.
    pub fn load_from_readme(&mut self, progress: &mut dyn Progress) -> Result<usize> {
        progress.log("📖 Reading packages from README...");
        let path = self.readme_path();

        let text = match file::read_readme(&path) {
            Ok(t) => t,
            Err(e) => {
                match &e {
                    Error::ReadmeMissing(p) => {
                        progress.log(&format!("❌ README not found: {}", p.display()))
                    }
                    other => progress.log(&format!("❌ Error reading README: {other}")),
                }
                return Err(e);
            }
        };

        self.packages = readme::extract_names(&text)
            .into_iter()
            .map(|n| PackageEntry::new(n, EntrySource::Readme))
            .collect();

        logf!("Session: loaded {} package(s) from {}", self.packages.len(), path.display());
        progress.log(&format!("✅ Loaded {} packages from README", self.packages.len()));
        Ok(self.packages.len())
    }

    /// Normalize, validate and append. Rejections leave the list unchanged.
    pub fn add_package(&mut self, raw: &str, progress: &mut dyn Progress) -> Result<String> {
        let name = validate_package_name(raw)?;
        if self.contains(&name) {
            return Err(ValidationError::Duplicate(name).into());
        }
        self.packages.push(PackageEntry::new(name.clone(), EntrySource::Manual));
        progress.log(&format!("✅ Added package: {name}"));
        Ok(name)
    }

    /// Remove by exact name. `None` means nothing was selected.
    pub fn remove_package(&mut self, name: Option<&str>, progress: &mut dyn Progress) -> Result<()> {
        let name = name.ok_or(ValidationError::NoSelection)?;
        let before = self.packages.len();
        self.packages.retain(|p| p.name != name);
        if self.packages.len() == before {
            return Err(ValidationError::Unknown(s!(name)).into());
        }
        progress.log(&format!("🗑️ Removed package: {name}"));
        Ok(())
    }

    /// Ascending by name; the order every view and the README use.
    pub fn sorted_packages(&self) -> Vec<&PackageEntry> {
        let mut v: Vec<&PackageEntry> = self.packages.iter().collect();
        v.sort_by(|a, b| a.name.cmp(&b.name));
        v
    }

    pub fn names(&self) -> Vec<&str> {
        self.sorted_packages().into_iter().map(|p| p.name.as_str()).collect()
    }

    pub fn render(&self) -> String {
        readme::render_package_list(self.names().as_slice())
    }

    /// Write the editor layout to the README, overwriting it.
    pub fn generate_readme(&self, progress: &mut dyn Progress) -> Result<PathBuf> {
        progress.log("📝 Generating README...");
        let path = self.readme_path();
        match file::write_readme(&path, &self.render()) {
            Ok(p) => {
                logf!("Session: wrote {} ({} package(s))", p.display(), self.packages.len());
                progress.log(&format!("✅ README generated: {}", p.display()));
                Ok(p)
            }
            Err(e) => {
                progress.log(&format!("❌ Error generating README: {e}"));
                Err(e)
            }
        }
    }

    /// Pull with "ours" merge strategy, then reload the list from the README.
    /// Only the pull itself can fail; a failed reload is logged and the
    /// current list is kept.
    pub fn pull(&mut self, progress: &mut dyn Progress) -> Result<GitOutput> {
        progress.log("⬇️ Pulling from GitHub...");
        let git = Git::new(&self.repo_path);

        let out = match git.pull() {
            Ok(out) => out,
            Err(e) => {
                progress.log(&format!("  ❌ {}", git_error_text(&e)));
                return Err(e);
            }
        };

        for line in out.stdout_lines() {
            progress.log(&join!("  ", line));
        }
        if out.is_up_to_date() {
            progress.log("  ℹ️ Already up to date");
        } else {
            progress.log("✅ Pull complete!");
        }

        if let Err(e) = self.load_from_readme(progress) {
            loge!("Pull: reload skipped: {e}");
        }
        Ok(out)
    }

    /// Generate, add, commit, force push. Stops at the first hard failure.
    /// A commit that fails for another reason than "nothing to commit" is
    /// reported and the push is still attempted.
    pub fn publish(&self, message: &str, progress: &mut dyn Progress) -> Result<PublishReport> {
        progress.log(&format!("📂 Working in: {}", self.repo_path.display()));
        let readme = self.generate_readme(progress)?;
        let git = Git::new(&self.repo_path);

        progress.log(&format!("📝 git add {}", self.file_name));
        if let Err(e) = git.add(&self.file_name) {
            progress.log(&format!("❌ git add failed: {}", git_error_text(&e)));
            return Err(e);
        }

        progress.log("💾 git commit");
        let message = GitOptions::message_or_default(message);
        let commit = match git.commit(&message) {
            Ok(c) => c,
            Err(e) => {
                progress.log(&format!("❌ Commit error: {e}"));
                return Err(e);
            }
        };
        match &commit {
            CommitOutcome::NothingToCommit => {
                progress.log("  ℹ️ Nothing to commit (README unchanged)")
            }
            CommitOutcome::Committed(out) | CommitOutcome::Failed(out) => {
                log_output(out, progress)
            }
        }

        progress.log("🚀 git push --force-with-lease");
        match git.push_force() {
            Ok(push) => {
                log_output(&push, progress);
                progress.log("✅ Force push complete!");
                Ok(PublishReport { readme, commit, push })
            }
            Err(e) => {
                if let Error::Git { stderr, .. } = &e {
                    if !stderr.is_empty() {
                        progress.log(&join!("  ", stderr));
                    }
                }
                progress.log("❌ Force push failed!");
                Err(e)
            }
        }
    }
}

pub(crate) fn log_output(out: &GitOutput, progress: &mut dyn Progress) {
    if !out.stdout.is_empty() {
        progress.log(&join!("  ", &out.stdout));
    }
    if !out.stderr.is_empty() {
        progress.log(&join!("  ", &out.stderr));
    }
}

/// Git stderr on its own reads better in the log than the full error.
fn git_error_text(e: &Error) -> String {
    match e {
        Error::Git { stderr, .. } if !stderr.is_empty() => stderr.clone(),
        other => other.to_string(),
    }
}
