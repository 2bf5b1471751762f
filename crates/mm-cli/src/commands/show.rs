//! Show command: a month as a text calendar.

use std::fmt::Write as _;
use std::io::Write;

use anyhow::{Context, Result};
use mm_core::render::painter::WEEKDAY_LABELS;
use mm_core::{Clock, Journal, MonthGrid};
use mm_db::Database;

use super::util::parse_month;

const CELL_WIDTH: usize = 4;

/// Formats a month grid, one line per week.
///
/// Logged days show their emoji; other days show the day number.
pub fn format_month(grid: &MonthGrid) -> String {
    let month = grid.month();
    let mut output = String::new();
    writeln!(
        output,
        "{} {} • {} days tracked",
        month.name(),
        month.year(),
        grid.populated_count()
    )
    .unwrap();

    let header: String = WEEKDAY_LABELS
        .iter()
        .map(|label| format!("{label:>CELL_WIDTH$}"))
        .collect();
    writeln!(output, "{header}").unwrap();

    for row in 0..grid.rows() {
        let mut line = String::new();
        for col in 0..grid.columns() {
            match grid.cell(row, col) {
                Some(cell) => match &cell.entry {
                    // Emoji render two columns wide.
                    Some(entry) => write!(line, "  {}", entry.emoji()).unwrap(),
                    None => write!(line, "{:>CELL_WIDTH$}", chrono::Datelike::day(&cell.date)).unwrap(),
                },
                None => line.push_str(&" ".repeat(CELL_WIDTH)),
            }
        }
        writeln!(output, "{}", line.trim_end()).unwrap();
    }

    let mut editable = grid.days().filter(|c| c.is_editable).map(|c| c.date);
    if let Some(first) = editable.next() {
        let last = editable.last().unwrap_or(first);
        writeln!(output).unwrap();
        writeln!(output, "Editable: {first} to {last}").unwrap();
    }
    output
}

pub fn run<W: Write>(
    writer: &mut W,
    db: &Database,
    clock: &impl Clock,
    month: Option<&str>,
) -> Result<()> {
    let month = parse_month(month, clock.today())?;
    let grid = Journal::new(db, clock)
        .month_grid(month)
        .with_context(|| format!("failed to load moods for {month}"))?;

    write!(writer, "{}", format_month(&grid))?;
    if grid.populated_count() == 0 {
        writeln!(writer, "No moods logged this month.")?;
    }
    Ok(())
}
