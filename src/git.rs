// src/git.rs
//
// Thin wrapper over the `git` executable, always run inside the repository
// directory. No retries, no rollback: non-zero exits surface with stderr as-is.

use std::{
    path::{Path, PathBuf},
    process::Command,
};

use crate::error::{Error, Result};

/// Captured output of one git invocation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GitOutput {
    pub success: bool,
    pub status: String,
    pub stdout: String,
    pub stderr: String,
}

impl GitOutput {
    /// Non-empty trimmed stdout lines.
    pub fn stdout_lines(&self) -> impl Iterator<Item = &str> {
        self.stdout.lines().map(str::trim).filter(|l| !l.is_empty())
    }

    pub fn is_up_to_date(&self) -> bool {
        self.stdout.to_lowercase().contains("already up to date")
    }

    fn nothing_to_commit(&self) -> bool {
        let combined = join!(&self.stdout, &self.stderr).to_lowercase();
        combined.contains("nothing to commit")
    }
}

/// `git commit` result. "nothing to commit" is not an error for us.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CommitOutcome {
    Committed(GitOutput),
    NothingToCommit,
    Failed(GitOutput),
}

impl CommitOutcome {
    pub fn classify(out: GitOutput) -> Self {
        if out.nothing_to_commit() {
            CommitOutcome::NothingToCommit
        } else if out.success {
            CommitOutcome::Committed(out)
        } else {
            CommitOutcome::Failed(out)
        }
    }
}

pub struct Git {
    repo: PathBuf,
}

impl Git {
    pub fn new(repo: impl AsRef<Path>) -> Self {
        Self { repo: repo.as_ref().to_path_buf() }
    }

    /// Run `git <args>` and capture everything, whatever the exit status.
    pub fn run(&self, args: &[&str]) -> Result<GitOutput> {
        let command = join!("git ", &args.join(" "));
        logd!("Git: {command} (in {})", self.repo.display());

        let output = Command::new("git")
            .args(args)
            .current_dir(&self.repo)
            .output()
            .map_err(|source| Error::Spawn { command: command.clone(), source })?;

        let out = GitOutput {
            success: output.status.success(),
            status: output.status.to_string(),
            stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        };
        if !out.success {
            loge!("Git: {command} → {}: {}", out.status, out.stderr);
        }
        Ok(out)
    }

    /// Like `run`, but a non-zero exit becomes `Error::Git`.
    pub fn run_checked(&self, args: &[&str]) -> Result<GitOutput> {
        let out = self.run(args)?;
        if out.success {
            Ok(out)
        } else {
            Err(Error::Git {
                command: join!("git ", &args.join(" ")),
                status: out.status,
                stderr: out.stderr,
            })
        }
    }

    /// Merge pull that keeps our side on conflicts.
    pub fn pull(&self) -> Result<GitOutput> {
        self.run_checked(&["pull", "--no-rebase", "-X", "ours"])
    }

    pub fn add(&self, file: &str) -> Result<GitOutput> {
        self.run_checked(&["add", file])
    }

    pub fn commit(&self, message: &str) -> Result<CommitOutcome> {
        Ok(CommitOutcome::classify(self.run(&["commit", "-m", message])?))
    }

    pub fn push_force(&self) -> Result<GitOutput> {
        self.run_checked(&["push", "--force-with-lease"])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn out(success: bool, stdout: &str, stderr: &str) -> GitOutput {
        GitOutput {
            success,
            status: s!(if success { "exit status: 0" } else { "exit status: 1" }),
            stdout: s!(stdout),
            stderr: s!(stderr),
        }
    }

    #[test]
    fn nothing_to_commit_wins_over_exit_status() {
        let o = out(false, "On branch main\nnothing to commit, working tree clean", "");
        assert_eq!(CommitOutcome::classify(o), CommitOutcome::NothingToCommit);

        let o = out(false, "", "Nothing To Commit");
        assert_eq!(CommitOutcome::classify(o), CommitOutcome::NothingToCommit);
    }

    #[test]
    fn commit_success_and_failure() {
        let ok = out(true, "[main 1a2b3c] Update", "");
        assert!(matches!(CommitOutcome::classify(ok), CommitOutcome::Committed(_)));

        let bad = out(false, "", "Author identity unknown");
        assert!(matches!(CommitOutcome::classify(bad), CommitOutcome::Failed(_)));
    }

    #[test]
    fn up_to_date_detection() {
        assert!(out(true, "Already up to date.", "").is_up_to_date());
        assert!(!out(true, "Fast-forward\n README.md | 2 +-", "").is_up_to_date());
    }

    #[test]
    fn stdout_lines_skip_blanks() {
        let o = out(true, "  a \n\n b", "");
        assert_eq!(o.stdout_lines().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn missing_directory_is_a_spawn_error() {
        let git = Git::new("/definitely/not/here");
        assert!(matches!(git.run(&["status"]), Err(Error::Spawn { .. })));
    }
}
