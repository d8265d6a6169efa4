//! Report rendering to the terminal and to Markdown.

use crate::git::SHORT_HASH_LEN;
use crate::report::Report;

/// Render a report as a Markdown document.
pub fn render_markdown(report: &Report) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "# {} Report\n\n",
        report.period.to_string().to_uppercase()
    ));
    out.push_str(&format!(
        "Period: {} to {}\n",
        report.start_date.format("%Y-%m-%d"),
        report.end_date.format("%Y-%m-%d")
    ));
    out.push_str(&format!("Commits: {}\n", report.commits.len()));
    out.push_str(&format!(
        "Generated: {}\n\n",
        report.generated_at.format("%Y-%m-%d %H:%M:%S")
    ));

    out.push_str("## Summary\n\n");
    out.push_str(&report.summary);
    out.push_str("\n\n## Commit Details\n\n");

    for commit in &report.commits {
        out.push_str(&format!(
            "- [{}] {}: {}\n",
            commit.repository,
            commit.date.format("%Y-%m-%d %H:%M"),
            truncate_chars(commit.summary_line(), 100)
        ));
    }

    out
}

/// Print a report to stdout with a colored header panel.
pub fn print_report(report: &Report) {
    println!();
    println!(
        "\x1b[1;36m=== {} REPORT ===\x1b[0m",
        report.period.to_string().to_uppercase()
    );
    println!(
        "Period: {} to {}",
        report.start_date.format("%Y-%m-%d"),
        report.end_date.format("%Y-%m-%d")
    );
    println!("Commits: {}", report.commits.len());
    println!(
        "Generated: {}",
        report.generated_at.format("%Y-%m-%d %H:%M:%S")
    );

    println!();
    println!("\x1b[1mSummary:\x1b[0m");
    println!();
    println!("{}", report.summary);

    if !report.commits.is_empty() {
        println!();
        println!("\x1b[1mCommits:\x1b[0m");
        for commit in &report.commits {
            println!(
                "  {} [{}] {} {} (+{}/-{}, {} files)",
                short_hash(&commit.hash),
                commit.repository,
                commit.date.format("%Y-%m-%d %H:%M"),
                commit.summary_line(),
                commit.insertions,
                commit.deletions,
                commit.files_changed
            );
        }
    }
}

fn short_hash(hash: &str) -> &str {
    if hash.len() > SHORT_HASH_LEN {
        &hash[..SHORT_HASH_LEN]
    } else {
        hash
    }
}

fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::CommitRecord;
    use crate::report::Period;
    use chrono::{Local, TimeZone};

    fn sample_report() -> Report {
        let date = Local.with_ymd_and_hms(2024, 1, 3, 10, 30, 0).single().unwrap();
        Report {
            period: Period::Weekly,
            start_date: Local.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).single().unwrap(),
            end_date: date,
            commits: vec![CommitRecord {
                hash: "abc1234567890abcdef1234567890abcdef123456".to_string(),
                author: "Test User".to_string(),
                email: "test@example.com".to_string(),
                date,
                message: "Add report rendering\n\nLonger body here.".to_string(),
                repository: "backend".to_string(),
                files_changed: 2,
                insertions: 10,
                deletions: 3,
            }],
            summary: "Work happened.".to_string(),
            generated_at: date,
        }
    }

    #[test]
    fn markdown_contains_header_and_commits() {
        let md = render_markdown(&sample_report());
        assert!(md.starts_with("# WEEKLY Report\n"));
        assert!(md.contains("Period: 2024-01-01 to 2024-01-03"));
        assert!(md.contains("Commits: 1"));
        assert!(md.contains("## Summary\n\nWork happened."));
        assert!(md.contains("- [backend] 2024-01-03 10:30: Add report rendering"));
        // Body lines never leak into the listing
        assert!(!md.contains("Longer body here."));
    }

    #[test]
    fn short_hash_truncates() {
        assert_eq!(short_hash("abc1234567890"), "abc12345");
        assert_eq!(short_hash("abc"), "abc");
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        let truncated = truncate_chars("héllo wörld", 5);
        assert_eq!(truncated, "héllo");
    }
}
