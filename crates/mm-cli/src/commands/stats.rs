//! Stats command: streaks, distribution and weekday patterns.

use std::fmt::Write as _;
use std::io::Write;

use anyhow::{Context, Result};
use mm_core::{Clock, Journal, MoodAnalysis};
use mm_db::Database;

fn plural(n: u32) -> &'static str {
    if n == 1 { "day" } else { "days" }
}

pub fn format_analysis(analysis: &MoodAnalysis) -> String {
    let mut output = String::new();

    if analysis.total_days == 0 {
        writeln!(output, "No moods logged yet.").unwrap();
        return output;
    }

    let streaks = analysis.streaks;
    writeln!(output, "OVERVIEW").unwrap();
    writeln!(output, "────────").unwrap();
    writeln!(output, "Days tracked:     {}", analysis.total_days).unwrap();
    writeln!(
        output,
        "Current streak:   {} {}",
        streaks.current_streak,
        plural(streaks.current_streak)
    )
    .unwrap();
    writeln!(
        output,
        "Longest streak:   {} {}",
        streaks.longest_streak,
        plural(streaks.longest_streak)
    )
    .unwrap();
    writeln!(output, "Per week:         {:.1}", analysis.average_per_week).unwrap();
    if let Some(emoji) = &analysis.most_frequent_mood {
        writeln!(output, "Most frequent:    {emoji}").unwrap();
    }

    writeln!(output).unwrap();
    writeln!(output, "MOODS").unwrap();
    writeln!(output, "─────").unwrap();
    for stat in &analysis.distribution {
        #[allow(clippy::cast_possible_truncation)]
        let pct = (stat.percentage * 100.0).round() as i64;
        writeln!(output, "{}  {:>3}  {pct:>3}%", stat.emoji, stat.count).unwrap();
    }

    writeln!(output).unwrap();
    writeln!(output, "WEEKDAYS").unwrap();
    writeln!(output, "────────").unwrap();
    for day in &analysis.weekday_stats {
        match &day.most_common_emoji {
            Some(emoji) => writeln!(output, "{}  {:>3}  {emoji}", day.weekday, day.count).unwrap(),
            None => writeln!(output, "{}  {:>3}", day.weekday, day.count).unwrap(),
        }
    }
    output
}

pub fn run<W: Write>(writer: &mut W, db: &Database, clock: &impl Clock, json: bool) -> Result<()> {
    let analysis = Journal::new(db, clock)
        .analysis()
        .context("failed to analyze moods")?;

    if json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&analysis)?)?;
    } else {
        write!(writer, "{}", format_analysis(&analysis))?;
    }
    Ok(())
}
