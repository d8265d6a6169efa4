//! List-repos command — prints the configured repositories.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::config::{ConfigManager, RepositoryEntry};

/// List-repos command options.
#[derive(Parser)]
pub struct ListReposCommand {
    /// Path to the configuration file.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl ListReposCommand {
    /// Executes the list-repos command.
    pub fn execute(self) -> Result<()> {
        let manager = ConfigManager::new(self.config);
        let config = manager.load()?;

        if config.repos.is_empty() {
            println!("No repositories configured.");
            println!("Run 'git-reporter add-repo' to add repositories.");
            return Ok(());
        }

        print!("{}", format_repo_table(&config.repos));

        Ok(())
    }
}

/// Render the repository list as an aligned plain-text table.
fn format_repo_table(repos: &[RepositoryEntry]) -> String {
    let rows: Vec<[String; 4]> = repos
        .iter()
        .map(|repo| {
            let repo_type = if repo.is_remote() { "Remote" } else { "Local" };
            let location = repo
                .path
                .as_deref()
                .or(repo.repo.as_deref())
                .unwrap_or("")
                .to_string();
            [
                repo.name.clone(),
                repo_type.to_string(),
                location,
                repo.author_email.clone().unwrap_or_default(),
            ]
        })
        .collect();

    let headers = ["Name", "Type", "Location", "Author Email"];
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.len());
        }
    }

    let mut out = String::new();
    let header_line: Vec<String> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| format!("{h:<width$}", width = widths[i]))
        .collect();
    out.push_str(&header_line.join("  "));
    out.push('\n');
    out.push_str(&"-".repeat(widths.iter().sum::<usize>() + 2 * (widths.len() - 1)));
    out.push('\n');

    for row in &rows {
        let line: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(i, cell)| format!("{cell:<width$}", width = widths[i]))
            .collect();
        out.push_str(line.join("  ").trim_end());
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_aligns_columns() {
        let repos = vec![
            RepositoryEntry {
                name: "backend".to_string(),
                path: Some("/src/backend".to_string()),
                repo: None,
                author_email: Some("dev@example.com".to_string()),
            },
            RepositoryEntry {
                name: "app".to_string(),
                path: None,
                repo: Some("https://example.com/app.git".to_string()),
                author_email: None,
            },
        ];

        let table = format_repo_table(&repos);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Name"));
        assert!(lines[2].contains("backend"));
        assert!(lines[2].contains("Local"));
        assert!(lines[3].contains("Remote"));
        assert!(lines[3].contains("https://example.com/app.git"));
    }
}
