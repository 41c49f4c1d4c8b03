pub mod fleet;
pub mod menu;
pub mod orders;

use anyhow::{Context, Result};
use chrono::{Duration, NaiveDate};

/// Parse an optional `--from`/`--to` pair into an inclusive date range.
///
/// Dates are YYYY-MM-DD. Missing bounds default to the trailing week ending
/// today; a reversed pair is normalized so start <= end.
pub fn parse_range(
    from: Option<String>,
    to: Option<String>,
    today: NaiveDate,
) -> Result<(NaiveDate, NaiveDate)> {
    let end = match to {
        Some(s) => parse_date(&s)?,
        None => today,
    };
    let start = match from {
        Some(s) => parse_date(&s)?,
        None => end - Duration::days(6),
    };
    Ok((start.min(end), start.max(end)))
}

fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("Invalid date format '{}'. Use YYYY-MM-DD", s))
}
