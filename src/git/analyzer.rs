//! Per-repository analyzer: clone-or-open, iterate, filter, sort.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use git2::Repository;
use tempfile::TempDir;
use tracing::{debug, info, warn};

use crate::config::RepositoryEntry;
use crate::git::commit::{commit_date, CommitRecord};

/// Analyzes a single configured repository and extracts commit history.
///
/// Remote entries are cloned into a temporary directory that lives as long as
/// the analyzer; call [`RepoAnalyzer::close`] (or drop the analyzer) to remove
/// it.
pub struct RepoAnalyzer {
    entry: RepositoryEntry,
    repo: Repository,
    temp_dir: Option<TempDir>,
}

impl std::fmt::Debug for RepoAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RepoAnalyzer")
            .field("entry", &self.entry)
            .field("temp_dir", &self.temp_dir)
            .finish_non_exhaustive()
    }
}

impl RepoAnalyzer {
    /// Open a local repository or clone a remote one.
    pub fn open(entry: RepositoryEntry) -> Result<Self> {
        entry.location()?;

        if entry.is_remote() {
            Self::clone_remote(entry)
        } else {
            Self::open_local(entry)
        }
    }

    fn open_local(entry: RepositoryEntry) -> Result<Self> {
        // location() above guarantees the path is present for local entries
        let raw_path = entry.path.clone().unwrap_or_default();
        let path = expand_home(&raw_path);

        if !path.exists() {
            anyhow::bail!("Repository path not found: {}", path.display());
        }

        let repo = Repository::open(&path)
            .with_context(|| format!("Not a valid git repository: {}", path.display()))?;

        Ok(Self {
            entry,
            repo,
            temp_dir: None,
        })
    }

    fn clone_remote(entry: RepositoryEntry) -> Result<Self> {
        // location() has already rejected entries with no URL
        let url = entry.repo.clone().unwrap_or_default();

        let temp_dir = tempfile::Builder::new()
            .prefix(&format!("git-reporter-{}-", entry.name))
            .tempdir()
            .context("Failed to create temporary clone directory")?;

        info!(url = %url, dir = %temp_dir.path().display(), "Cloning remote repository");

        // A failed clone drops `temp_dir` here, removing the partial checkout
        let repo = Repository::clone(&url, temp_dir.path())
            .with_context(|| format!("Failed to clone repository: {url}"))?;

        Ok(Self {
            entry,
            repo,
            temp_dir: Some(temp_dir),
        })
    }

    /// Retrieve commits across all branches within an inclusive date window.
    ///
    /// When `author_email` is `None`, the entry's configured filter applies.
    /// Results are sorted newest-first.
    pub fn collect_commits(
        &self,
        start: DateTime<Local>,
        end: DateTime<Local>,
        author_email: Option<&str>,
    ) -> Result<Vec<CommitRecord>> {
        let author_email = author_email.or(self.entry.author_email.as_deref());

        let mut revwalk = self.repo.revwalk().context("Failed to create revwalk")?;
        revwalk
            .push_glob("refs/heads/*")
            .context("Failed to push local branches")?;
        revwalk
            .push_glob("refs/remotes/*")
            .context("Failed to push remote-tracking branches")?;
        // Detached HEAD commits are not reachable from any branch ref
        let _ = revwalk.push_head();

        let mut commits = Vec::new();

        for oid in revwalk {
            let oid = oid.context("Failed to get commit OID from revwalk")?;
            let commit = self
                .repo
                .find_commit(oid)
                .context("Failed to find commit")?;

            let date = commit_date(&commit)?;
            if date < start || date > end {
                continue;
            }

            if let Some(filter) = author_email {
                if commit.author().email() != Some(filter) {
                    continue;
                }
            }

            commits.push(CommitRecord::from_git_commit(
                &self.repo,
                &commit,
                &self.entry.name,
            )?);
        }

        commits.sort_by(|a, b| b.date.cmp(&a.date));

        debug!(
            repository = %self.entry.name,
            count = commits.len(),
            "Collected commits in window"
        );

        Ok(commits)
    }

    /// Current branch name, or `"HEAD"` when detached or unborn.
    pub fn branch_name(&self) -> String {
        match self.repo.head() {
            Ok(head) => match head.shorthand() {
                Some(name) if name != "HEAD" => name.to_string(),
                _ => "HEAD".to_string(),
            },
            Err(_) => "HEAD".to_string(),
        }
    }

    /// URL of the first configured remote, if any.
    pub fn remote_url(&self) -> Option<String> {
        let remotes = self.repo.remotes().ok()?;
        let name = remotes.get(0)?;
        let remote = self.repo.find_remote(name).ok()?;
        remote.url().map(ToString::to_string)
    }

    /// Remove the temporary clone directory, if one was created.
    ///
    /// Removal failures are logged, not fatal.
    pub fn close(mut self) {
        if let Some(temp_dir) = self.temp_dir.take() {
            let path = temp_dir.path().to_path_buf();
            if let Err(e) = temp_dir.close() {
                warn!(
                    dir = %path.display(),
                    error = %e,
                    "Failed to remove temporary clone directory"
                );
            }
        }
    }
}

/// Expand a leading `~` to the user's home directory.
fn expand_home(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn local_entry(path: &str) -> RepositoryEntry {
        RepositoryEntry {
            name: "test".to_string(),
            path: Some(path.to_string()),
            repo: None,
            author_email: None,
        }
    }

    #[test]
    fn open_missing_path_fails() {
        let err = RepoAnalyzer::open(local_entry("/definitely/not/a/real/path")).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn open_non_repository_fails() {
        let temp_dir = tempfile::tempdir().unwrap();
        let entry = local_entry(temp_dir.path().to_str().unwrap());
        let err = RepoAnalyzer::open(entry).unwrap_err();
        assert!(err.to_string().contains("Not a valid git repository"));
    }

    #[test]
    fn open_entry_without_location_fails() {
        let entry = RepositoryEntry {
            name: "empty".to_string(),
            path: None,
            repo: None,
            author_email: None,
        };
        assert!(RepoAnalyzer::open(entry).is_err());
    }

    #[test]
    fn expand_home_passthrough() {
        assert_eq!(expand_home("/abs/path"), PathBuf::from("/abs/path"));
        assert_eq!(expand_home("rel/path"), PathBuf::from("rel/path"));
    }
}
