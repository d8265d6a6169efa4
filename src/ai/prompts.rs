//! Prompt assembly for report summaries.

use crate::git::CommitRecord;
use crate::report::Period;

/// Commit message characters included per line in the prompt, keeping the
/// prompt bounded even for noisy histories.
const MESSAGE_CHAR_LIMIT: usize = 100;

/// Role instruction describing the desired report style.
pub fn system_prompt(period: Period) -> String {
    format!(
        "You are a helpful assistant that creates concise, professional {period} \
         work reports based on git commit history. Your reports should:\n\
         1. Summarize the main accomplishments and work done\n\
         2. Group related commits into logical themes or projects\n\
         3. Highlight significant changes, features, or bug fixes\n\
         4. Be written in a professional tone suitable for a manager\n\
         5. Focus on what was achieved, not just listing commits\n\
         6. Be structured with clear sections and bullet points\n"
    )
}

/// The user prompt carrying the formatted commit list.
pub fn user_prompt(commits: &[CommitRecord], period: Period) -> String {
    format!(
        "Please create a {period} work report based on these commits:\n\n{}\n\n\
         Generate a professional summary suitable for sharing with a manager.",
        format_commits(commits)
    )
}

/// One bounded-length line per commit.
pub fn format_commits(commits: &[CommitRecord]) -> String {
    let lines: Vec<String> = commits
        .iter()
        .map(|commit| {
            let message: String = commit.summary_line().chars().take(MESSAGE_CHAR_LIMIT).collect();
            format!(
                "- [{}] {}: {} (+{}/-{}, {} files)",
                commit.repository,
                commit.date.format("%Y-%m-%d %H:%M"),
                message,
                commit.insertions,
                commit.deletions,
                commit.files_changed
            )
        })
        .collect();

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};

    fn commit(message: &str) -> CommitRecord {
        CommitRecord {
            hash: "abcdef1234567890".to_string(),
            author: "Test User".to_string(),
            email: "test@example.com".to_string(),
            date: Local.with_ymd_and_hms(2024, 1, 3, 9, 15, 0).single().unwrap(),
            message: message.to_string(),
            repository: "api".to_string(),
            files_changed: 1,
            insertions: 4,
            deletions: 2,
        }
    }

    #[test]
    fn format_commits_one_line_each() {
        let commits = vec![commit("Add login"), commit("Fix logout")];
        let formatted = format_commits(&commits);
        assert_eq!(formatted.lines().count(), 2);
        assert!(formatted.contains("- [api] 2024-01-03 09:15: Add login (+4/-2, 1 files)"));
    }

    #[test]
    fn format_commits_bounds_message_length() {
        let long = "x".repeat(500);
        let formatted = format_commits(&[commit(&long)]);
        assert!(formatted.len() < 200);
    }

    #[test]
    fn system_prompt_mentions_period() {
        let prompt = system_prompt(Period::Quarterly);
        assert!(prompt.contains("quarterly"));
    }

    #[test]
    fn user_prompt_embeds_commit_list() {
        let prompt = user_prompt(&[commit("Add login")], Period::Weekly);
        assert!(prompt.contains("weekly work report"));
        assert!(prompt.contains("Add login"));
    }
}
