//! Log command for recording or editing a day's mood.

use std::io::Write;

use anyhow::{Context, Result};
use mm_core::{Clock, EditWindow, Emoji, MoodColor, MoodEntry};
use mm_db::Database;

use super::util::{parse_color, parse_date};
use crate::cli::LogArgs;

pub fn run<W: Write>(
    writer: &mut W,
    db: &mut Database,
    clock: &impl Clock,
    args: &LogArgs,
) -> Result<()> {
    let today = clock.today();
    let date = parse_date(&args.date, today)?;
    EditWindow::default()
        .check(date, today)
        .with_context(|| format!("cannot log a mood for {date}"))?;

    let emoji = Emoji::new(args.emoji.as_str()).context("invalid emoji")?;
    let color = parse_color(&args.color)?;

    let existing = db.get_entry(date).context("failed to read existing mood")?;
    let entry = match &existing {
        // Editing keeps the original creation time and, unless replaced, the note.
        Some(previous) => {
            let note = args.note.as_deref().unwrap_or_else(|| previous.note());
            previous.with_mood(color, emoji, note)
        }
        None => MoodEntry::new(date, color, emoji).with_note(args.note.clone().unwrap_or_default()),
    };
    db.save_entry(&entry).context("failed to save mood")?;

    let verb = if existing.is_some() { "Updated" } else { "Logged" };
    let color_label = MoodColor::name_of(entry.color())
        .map_or_else(|| entry.color().to_hex(), str::to_string);
    writeln!(writer, "{verb} {} ({color_label}) for {date}", entry.emoji())?;
    Ok(())
}
