//! Calendar-aligned period boundary calculation.

use anyhow::{Context, Result};
use chrono::{DateTime, Datelike, Duration, Local, NaiveDate};

use crate::report::Period;

/// Resolve a period tag and optional explicit bounds into a concrete window.
///
/// For all tags except [`Period::Custom`] the window runs from a
/// calendar-aligned boundary up to `now`. Custom requires both bounds and
/// returns them verbatim.
pub fn resolve_window(
    period: Period,
    start: Option<DateTime<Local>>,
    end: Option<DateTime<Local>>,
    now: DateTime<Local>,
) -> Result<(DateTime<Local>, DateTime<Local>)> {
    let today = now.date_naive();

    let start = match period {
        Period::Custom => {
            let (Some(start), Some(end)) = (start, end) else {
                anyhow::bail!("Custom period requires both start and end dates");
            };
            return Ok((start, end));
        }
        Period::Daily => midnight(today)?,
        Period::Weekly => {
            let days_since_monday = i64::from(now.weekday().num_days_from_monday());
            midnight(today - Duration::days(days_since_monday))?
        }
        Period::Monthly => {
            midnight(today.with_day(1).context("Invalid month start")?)?
        }
        Period::Quarterly => {
            let quarter_start_month = (now.month0() / 3) * 3 + 1;
            midnight(
                NaiveDate::from_ymd_opt(now.year(), quarter_start_month, 1)
                    .context("Invalid quarter start")?,
            )?
        }
        Period::Yearly => midnight(
            NaiveDate::from_ymd_opt(now.year(), 1, 1).context("Invalid year start")?,
        )?,
    };

    Ok((start, now))
}

/// Parse a `YYYY-MM-DD` CLI argument as the start of that day.
pub fn parse_start_date(raw: &str) -> Result<DateTime<Local>> {
    midnight(parse_date(raw)?)
}

/// Parse a `YYYY-MM-DD` CLI argument as the end of that day, so an inclusive
/// window covers commits made on the end date itself.
pub fn parse_end_date(raw: &str) -> Result<DateTime<Local>> {
    let date = parse_date(raw)?;
    let naive = date
        .and_hms_opt(23, 59, 59)
        .context("Invalid end-of-day time")?;
    naive
        .and_local_timezone(Local)
        .earliest()
        .context("Ambiguous local end-of-day time")
}

fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{raw}', expected YYYY-MM-DD"))
}

fn midnight(date: NaiveDate) -> Result<DateTime<Local>> {
    let naive = date.and_hms_opt(0, 0, 0).context("Invalid midnight time")?;
    naive
        .and_local_timezone(Local)
        .earliest()
        .context("Ambiguous local midnight")
}
