// src/runner.rs
//
// Batch updater: discover → fetch → render → write README, then optionally
// add/commit/force-push. Frontends pass a `Progress` to see what happens.

use std::path::PathBuf;

use crate::{
    config::options::AppOptions,
    core::Fetch,
    error::Result,
    file,
    git::{CommitOutcome, Git},
    progress::Progress,
    readme,
    scrape::{self, Collection},
    session,
};

/// Summary of what was produced.
pub struct UpdateSummary {
    pub readme: PathBuf,
    pub collection: Collection,
    /// Set when `--push` was requested and went through.
    pub pushed: bool,
}

impl UpdateSummary {
    pub fn updated(&self) -> usize {
        self.collection.records.len()
    }
}

/// Top-level batch run. Discovery and per-package faults never fail the run;
/// only writing the README (or a requested push) can.
pub fn run_update(
    options: &AppOptions,
    client: &dyn Fetch,
    progress: &mut dyn Progress,
) -> Result<UpdateSummary> {
    let collection = scrape::collect_packages(client, &options.registry, progress);

    progress.log("📝 Generating README...");
    let doc = readme::render(&collection.records, collection.fallback_used());
    let path = file::write_readme(&options.readme.readme_path(), &doc)?;

    progress.log(&format!("✅ Updated {} packages!", collection.records.len()));
    progress.log(&format!("📄 Wrote to: {}", path.display()));
    logf!(
        "Update: {} record(s), fallback={}, wrote {}",
        collection.records.len(),
        collection.fallback_used(),
        path.display()
    );

    let mut pushed = false;
    if options.git.push {
        push_readme(options, progress)?;
        pushed = true;
    }

    Ok(UpdateSummary { readme: path, collection, pushed })
}

/// Add and commit the README, then force push. A commit with nothing to
/// record still pushes, so earlier local commits reach the remote.
pub fn push_readme(options: &AppOptions, progress: &mut dyn Progress) -> Result<()> {
    let git = Git::new(&options.readme.repo_path);

    progress.log(&format!("📝 git add {}", options.readme.file_name));
    git.add(&options.readme.file_name)?;

    progress.log("💾 git commit");
    match git.commit(&options.git.commit_message)? {
        CommitOutcome::NothingToCommit => {
            progress.log("  ℹ️ Nothing to commit (README unchanged)")
        }
        CommitOutcome::Committed(out) | CommitOutcome::Failed(out) => {
            session::log_output(&out, progress)
        }
    }

    progress.log("🚀 git push --force-with-lease");
    let out = git.push_force()?;
    session::log_output(&out, progress);
    progress.log("✅ Force push complete!");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::{consts::FALLBACK_NOTICE, options::ReadmeOptions},
        error::Error,
        progress::LinesProgress,
    };

    /// Registry that is down for listings but serves metadata.
    struct ListingsDown;

    impl Fetch for ListingsDown {
        fn get_text(&self, url: &str) -> Result<String> {
            if url.contains("/api/packages/") {
                Ok(s!(r#"{"latest":{"version":"1.0.0"}}"#))
            } else {
                Err(Error::Status { url: s!(url), status: 503 })
            }
        }
    }

    #[test]
    fn fallback_run_writes_readme_with_notice() {
        let dir = tempfile::tempdir().unwrap();
        let options = AppOptions { readme: ReadmeOptions::for_repo(dir.path()), ..Default::default() };
        let mut progress = LinesProgress::default();

        let summary = run_update(&options, &ListingsDown, &mut progress).unwrap();

        assert_eq!(summary.updated(), 2);
        assert!(!summary.pushed);
        let text = std::fs::read_to_string(&summary.readme).unwrap();
        assert!(text.contains(FALLBACK_NOTICE));
        assert_eq!(readme::extract_names(&text), vec!["flux_wireframe_theme_cli", "wireframe_theme"]);
        assert!(progress.lines.contains(&s!("✅ Updated 2 packages!")));
    }

    #[test]
    fn unwritable_repo_fails_the_run() {
        let dir = tempfile::tempdir().unwrap();
        let options = AppOptions {
            readme: ReadmeOptions::for_repo(dir.path().join("missing")),
            ..Default::default()
        };
        assert!(run_update(&options, &ListingsDown, &mut LinesProgress::default()).is_err());
    }
}
