//! Generate command — produces an AI-summarized report of commit history.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::config::{ConfigManager, ProviderKind};
use crate::report::period::{parse_end_date, parse_start_date};
use crate::report::render;
use crate::report::{Period, ReportGenerator, ReportRequest};

/// Generate command options.
#[derive(Parser)]
pub struct GenerateCommand {
    /// Path to the configuration file.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Report period (defaults to the configured default period).
    #[arg(short, long, value_enum)]
    pub period: Option<Period>,

    /// Start date for a custom period (YYYY-MM-DD).
    #[arg(short, long, value_name = "YYYY-MM-DD")]
    pub start: Option<String>,

    /// End date for a custom period (YYYY-MM-DD, inclusive).
    #[arg(short, long, value_name = "YYYY-MM-DD")]
    pub end: Option<String>,

    /// Restrict to specific configured repositories (repeatable).
    #[arg(short, long = "repo", value_name = "NAME")]
    pub repo: Vec<String>,

    /// Write the report to a Markdown file.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// AI provider to use (overrides config).
    #[arg(long, value_enum)]
    pub provider: Option<ProviderKind>,
}

impl GenerateCommand {
    /// Executes the generate command.
    pub async fn execute(self) -> Result<()> {
        let manager = ConfigManager::new(self.config);
        let mut config = manager.load()?;

        if let Some(provider) = self.provider {
            config.ai_provider = provider;
        }

        let period = self.period.unwrap_or(config.default_period);

        let (start_date, end_date) = if period == Period::Custom {
            let (Some(start), Some(end)) = (&self.start, &self.end) else {
                anyhow::bail!("Custom period requires --start and --end dates");
            };
            (Some(parse_start_date(start)?), Some(parse_end_date(end)?))
        } else {
            (None, None)
        };

        let request = ReportRequest {
            period,
            start_date,
            end_date,
            repositories: if self.repo.is_empty() {
                None
            } else {
                Some(self.repo)
            },
        };

        println!("Analyzing commit history...");
        let generator = ReportGenerator::new(config);
        let report = generator.generate(&request).await?;

        render::print_report(&report);

        if let Some(output) = &self.output {
            fs::write(output, render::render_markdown(&report))
                .with_context(|| format!("Failed to write report to {}", output.display()))?;
            println!();
            println!("✅ Report saved to: {}", output.display());
        }

        Ok(())
    }
}
