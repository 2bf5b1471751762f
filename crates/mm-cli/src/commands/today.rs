//! Today command: the at-a-glance summary.

use std::fmt::Write as _;
use std::io::Write;

use anyhow::{Context, Result};
use mm_core::{Clock, Emoji, Journal, TodaySummary};
use mm_db::Database;

pub fn format_summary(summary: &TodaySummary) -> String {
    let mut output = String::new();
    writeln!(output, "{}", summary.today.format("%a, %b %-d")).unwrap();

    match &summary.today_entry {
        Some(entry) if entry.note().is_empty() => {
            writeln!(output, "Today: {}", entry.emoji()).unwrap();
        }
        Some(entry) => {
            writeln!(output, "Today: {} \"{}\"", entry.emoji(), entry.note()).unwrap();
        }
        None => writeln!(output, "Today: not logged yet").unwrap(),
    }

    let days: Vec<String> = summary
        .past_days
        .iter()
        .map(|day| {
            let mark = day.emoji.as_ref().map_or("·", Emoji::as_str);
            format!("{} {mark}", day.date.format("%a"))
        })
        .collect();
    writeln!(output, "Past days: {}", days.join("  ")).unwrap();

    let streak = summary.current_streak;
    writeln!(output, "Streak: {streak} {}", if streak == 1 { "day" } else { "days" }).unwrap();
    output
}

pub fn run<W: Write>(writer: &mut W, db: &Database, clock: &impl Clock, json: bool) -> Result<()> {
    let summary = Journal::new(db, clock)
        .today_summary()
        .context("failed to load today's summary")?;

    if json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&summary)?)?;
    } else {
        write!(writer, "{}", format_summary(&summary))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::NaiveDate;
    use insta::assert_snapshot;
    use mm_core::{FixedClock, MoodColor, MoodEntry};

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn save(db: &mut Database, day: &str, emoji: &str, note: &str) {
        db.save_entry(
            &MoodEntry::new(date(day), MoodColor::Calm.rgba(), Emoji::new(emoji).unwrap())
                .with_note(note),
        )
        .unwrap();
    }

    fn today(db: &Database, json: bool) -> String {
        let mut output = Vec::new();
        run(&mut output, db, &FixedClock(date("2024-06-15")), json).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_today_logged() {
        let mut db = Database::open_in_memory().unwrap();
        save(&mut db, "2024-06-11", "😢", "");
        save(&mut db, "2024-06-13", "😊", "");
        save(&mut db, "2024-06-14", "😊", "");
        save(&mut db, "2024-06-15", "🥳", "birthday");

        assert_snapshot!(today(&db, false), @r#"
        Sat, Jun 15
        Today: 🥳 "birthday"
        Past days: Mon ·  Tue 😢  Wed ·  Thu 😊  Fri 😊
        Streak: 3 days
        "#);
    }

    #[test]
    fn test_today_not_logged() {
        let mut db = Database::open_in_memory().unwrap();
        save(&mut db, "2024-06-14", "😊", "");

        assert_snapshot!(today(&db, false), @r"
        Sat, Jun 15
        Today: not logged yet
        Past days: Mon ·  Tue ·  Wed ·  Thu ·  Fri 😊
        Streak: 0 days
        ");
    }

    #[test]
    fn test_today_json() {
        let mut db = Database::open_in_memory().unwrap();
        save(&mut db, "2024-06-15", "😊", "");

        let value: serde_json::Value = serde_json::from_str(&today(&db, true)).unwrap();
        assert_eq!(value["today"], "2024-06-15");
        assert_eq!(value["current_streak"], 1);
        assert_eq!(value["today_entry"]["emoji"], "😊");
        assert_eq!(value["past_days"][0]["date"], "2024-06-10");
        assert!(value["past_days"][0]["emoji"].is_null());
    }
}
