//! Shared utilities for CLI commands.

use std::sync::LazyLock;

use anyhow::Context;
use chrono::{Duration, NaiveDate};
use mm_core::{MoodColor, Rgba, YearMonth};
use regex::Regex;

/// Pre-compiled regex for relative day parsing.
static RELATIVE_DAY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\s+(day|week)s?\s+ago$").unwrap());

/// Conservative bound for relative days (~1000 years).
const MAX_RELATIVE_DAYS: i64 = 1000 * 366;

/// Parse a day as an ISO date, a keyword, or a relative offset from `today`.
///
/// Supports:
/// - ISO 8601: "2024-06-15"
/// - Keywords: "today", "yesterday"
/// - Relative: "3 days ago", "1 week ago"
pub fn parse_date(s: &str, today: NaiveDate) -> anyhow::Result<NaiveDate> {
    let s = s.trim();
    match s.to_ascii_lowercase().as_str() {
        "today" => return Ok(today),
        "yesterday" => return Ok(today - Duration::days(1)),
        _ => {}
    }

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(date);
    }

    let Some(caps) = RELATIVE_DAY_RE.captures(s) else {
        anyhow::bail!(
            "Invalid date: {s}. Use YYYY-MM-DD, 'today', 'yesterday' or relative (e.g., '2 days ago')"
        );
    };

    let n: i64 = caps[1]
        .parse()
        .context("failed to parse number in relative date")?;
    let days = match &caps[2] {
        "day" => n,
        "week" => n.saturating_mul(7),
        unit => anyhow::bail!("Unknown date unit: {unit}"),
    };

    if days > MAX_RELATIVE_DAYS {
        anyhow::bail!("Relative date too far back: {s}");
    }

    Ok(today - Duration::days(days))
}

/// Parse a colour as a palette name ("calm") or hex ("#6BCB77").
pub fn parse_color(s: &str) -> anyhow::Result<Rgba> {
    if let Ok(named) = s.parse::<MoodColor>() {
        return Ok(named.rgba());
    }
    s.parse::<Rgba>()
        .with_context(|| format!("Invalid color: {s}. Use a palette name (see `mm palette`) or #RRGGBB"))
}

/// Parse an optional YYYY-MM month, defaulting to the month containing `today`.
pub fn parse_month(s: Option<&str>, today: NaiveDate) -> anyhow::Result<YearMonth> {
    s.map_or_else(
        || Ok(YearMonth::of(today)),
        |s| {
            s.parse::<YearMonth>()
                .with_context(|| format!("Invalid month: {s}. Use YYYY-MM"))
        },
    )
}
