//! Top-level report orchestration.

use anyhow::Result;
use chrono::{DateTime, Local};
use tracing::{debug, info, warn};

use crate::ai::{Summarizer, NO_COMMITS_MESSAGE};
use crate::config::{Config, RepositoryEntry};
use crate::git::{CommitRecord, RepoAnalyzer};
use crate::report::{resolve_window, Report, ReportRequest};

/// Generates reports from git commit history using an AI summarizer.
pub struct ReportGenerator {
    config: Config,
}

impl ReportGenerator {
    /// Create a generator over a loaded configuration.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Generate a report for the requested period.
    ///
    /// Repositories are analyzed one at a time; a failure on any single
    /// repository is logged and skipped so the remaining repositories still
    /// contribute to the report.
    pub async fn generate(&self, request: &ReportRequest) -> Result<Report> {
        let (start_date, end_date) = resolve_window(
            request.period,
            request.start_date,
            request.end_date,
            Local::now(),
        )?;

        debug!(
            period = %request.period,
            start = %start_date,
            end = %end_date,
            "Resolved report window"
        );

        let mut all_commits = Vec::new();

        for entry in &self.config.repos {
            if let Some(selected) = &request.repositories {
                if !selected.iter().any(|name| name == &entry.name) {
                    continue;
                }
            }

            match analyze_repository(entry, start_date, end_date) {
                Ok(mut commits) => all_commits.append(&mut commits),
                Err(e) => {
                    warn!(
                        repository = %entry.name,
                        error = %e,
                        "Skipping repository after analysis failure"
                    );
                }
            }
        }

        all_commits.sort_by(|a, b| b.date.cmp(&a.date));
        info!(commit_count = all_commits.len(), "Merged commits across repositories");

        // No point requiring an API key for a report with nothing to say
        let summary = if all_commits.is_empty() {
            NO_COMMITS_MESSAGE.to_string()
        } else {
            let summarizer = Summarizer::from_config(&self.config)?;
            summarizer.summarize(&all_commits, request.period).await?
        };

        Ok(Report {
            period: request.period,
            start_date,
            end_date,
            commits: all_commits,
            summary,
            generated_at: Local::now(),
        })
    }
}

/// Analyze one repository, always releasing its temporary clone directory.
fn analyze_repository(
    entry: &RepositoryEntry,
    start: DateTime<Local>,
    end: DateTime<Local>,
) -> Result<Vec<CommitRecord>> {
    let analyzer = RepoAnalyzer::open(entry.clone())?;
    let commits = analyzer.collect_commits(start, end, None);
    analyzer.close();
    commits
}
