//! Delete command for removing a day's mood.

use std::io::Write;

use anyhow::{Context, Result};
use mm_core::{Clock, EditWindow};
use mm_db::Database;

use super::util::parse_date;

pub fn run<W: Write>(writer: &mut W, db: &mut Database, clock: &impl Clock, day: &str) -> Result<()> {
    let today = clock.today();
    let date = parse_date(day, today)?;
    EditWindow::default()
        .check(date, today)
        .with_context(|| format!("cannot delete the mood for {date}"))?;

    if db.delete_entry(date).context("failed to delete mood")? {
        writeln!(writer, "Deleted mood for {date}")?;
    } else {
        writeln!(writer, "No mood logged for {date}")?;
    }
    Ok(())
}
