//! Commit record extraction from git history.

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use git2::{Commit, Repository};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A single commit read from git history. Immutable once produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitRecord {
    /// Full SHA-1 hash of the commit.
    pub hash: String,
    /// Commit author name.
    pub author: String,
    /// Commit author email address.
    pub email: String,
    /// Commit timestamp in the local timezone.
    pub date: DateTime<Local>,
    /// The commit message as written by the author.
    pub message: String,
    /// Name of the repository this commit came from.
    pub repository: String,
    /// Number of files changed in this commit.
    pub files_changed: usize,
    /// Number of lines added.
    pub insertions: usize,
    /// Number of lines removed.
    pub deletions: usize,
}

impl CommitRecord {
    /// Create a `CommitRecord` from a `git2::Commit`.
    ///
    /// Diff statistics default to zero when they cannot be computed.
    pub fn from_git_commit(repo: &Repository, commit: &Commit, repo_name: &str) -> Result<Self> {
        let hash = commit.id().to_string();
        let author = commit.author().name().unwrap_or("Unknown").to_string();
        let email = commit.author().email().unwrap_or("").to_string();
        let date = commit_date(commit)?;
        let message = commit.message().unwrap_or("").trim().to_string();

        let (files_changed, insertions, deletions) = match diff_stats(repo, commit) {
            Ok(stats) => stats,
            Err(e) => {
                debug!(hash = %hash, error = %e, "Failed to compute diff stats, defaulting to zero");
                (0, 0, 0)
            }
        };

        Ok(Self {
            hash,
            author,
            email,
            date,
            message,
            repository: repo_name.to_string(),
            files_changed,
            insertions,
            deletions,
        })
    }

    /// First line of the commit message.
    pub fn summary_line(&self) -> &str {
        self.message.lines().next().unwrap_or("")
    }
}

/// Convert a commit's author timestamp to local time.
pub(crate) fn commit_date(commit: &Commit) -> Result<DateTime<Local>> {
    let timestamp = commit.author().when();
    let date = DateTime::from_timestamp(timestamp.seconds(), 0)
        .context("Invalid commit timestamp")?
        .with_timezone(&Local);
    Ok(date)
}

/// Compute (files changed, insertions, deletions) against the first parent.
fn diff_stats(repo: &Repository, commit: &Commit) -> Result<(usize, usize, usize)> {
    let commit_tree = commit.tree().context("Failed to get commit tree")?;

    let parent_tree = if commit.parent_count() > 0 {
        Some(
            commit
                .parent(0)
                .context("Failed to get parent commit")?
                .tree()
                .context("Failed to get parent tree")?,
        )
    } else {
        None
    };

    // Initial commits diff against the empty tree
    let diff = repo
        .diff_tree_to_tree(parent_tree.as_ref(), Some(&commit_tree), None)
        .context("Failed to create diff")?;

    let stats = diff.stats().context("Failed to get diff stats")?;

    Ok((stats.files_changed(), stats.insertions(), stats.deletions()))
}
