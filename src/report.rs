//! Report data model, period resolution, orchestration, and rendering.

pub mod generator;
pub mod period;
pub mod render;

pub use generator::ReportGenerator;
pub use period::resolve_window;

use chrono::{DateTime, Local};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::git::CommitRecord;

/// A named or custom date window over which commits are aggregated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    /// Midnight today to now.
    Daily,
    /// Monday of the current week to now.
    Weekly,
    /// First day of the current month to now.
    Monthly,
    /// First day of the current quarter to now.
    Quarterly,
    /// First day of the current year to now.
    Yearly,
    /// Explicit start and end dates.
    Custom,
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Period::Daily => "daily",
            Period::Weekly => "weekly",
            Period::Monthly => "monthly",
            Period::Quarterly => "quarterly",
            Period::Yearly => "yearly",
            Period::Custom => "custom",
        };
        write!(f, "{name}")
    }
}

/// A request for generating a report.
#[derive(Debug, Clone)]
pub struct ReportRequest {
    /// Report time period.
    pub period: Period,
    /// Start date for a custom period.
    pub start_date: Option<DateTime<Local>>,
    /// End date for a custom period.
    pub end_date: Option<DateTime<Local>>,
    /// Restrict to these configured repository names (`None` = all).
    pub repositories: Option<Vec<String>>,
}

/// A generated report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Report period.
    pub period: Period,
    /// Resolved window start.
    pub start_date: DateTime<Local>,
    /// Resolved window end.
    pub end_date: DateTime<Local>,
    /// Commits in this period, newest first.
    pub commits: Vec<CommitRecord>,
    /// AI-generated summary text.
    pub summary: String,
    /// When the report was generated.
    pub generated_at: DateTime<Local>,
}
