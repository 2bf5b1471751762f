//! Calendar grid layouts for mosaics.
//!
//! A month is laid out Sunday-first, 7 columns wide, with blank padding
//! before the first and after the last day. A year in "pixels" form is a
//! linear run of every day, 20 columns wide. Grids never include days of
//! neighbouring months or years.

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};

use crate::calendar::{CalendarError, YearMonth, days_in_year, start_of_year};
use crate::editable::EditWindow;
use crate::entry::MoodEntry;
use crate::source::index_by_date;

/// Columns in a month grid.
pub const MONTH_COLUMNS: usize = 7;

/// Columns in a year pixel grid.
pub const YEAR_COLUMNS: usize = 20;

/// One calendar day in a grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridCell {
    pub date: NaiveDate,
    pub entry: Option<MoodEntry>,
    pub is_today: bool,
    pub is_editable: bool,
}

impl GridCell {
    fn resolve(
        date: NaiveDate,
        lookup: &BTreeMap<NaiveDate, &MoodEntry>,
        today: NaiveDate,
        window: EditWindow,
    ) -> Self {
        Self {
            date,
            entry: lookup.get(&date).map(|e| (*e).clone()),
            is_today: date == today,
            is_editable: window.is_editable(date, today),
        }
    }
}

/// A month laid out as a 7-column calendar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    month: YearMonth,
    rows: usize,
    cells: Vec<Option<GridCell>>,
}

impl MonthGrid {
    /// Lays out `month`, attaching entries that fall inside it.
    ///
    /// Entries outside the month are ignored. If a date repeats, the later
    /// entry in `entries` wins.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub fn build(
        month: YearMonth,
        entries: &[MoodEntry],
        today: NaiveDate,
        window: EditWindow,
    ) -> Self {
        let lookup = index_by_date(entries);
        let days = month.days_in_month() as usize;
        let offset = month.first_weekday_offset() as usize;
        let rows = (days + offset).div_ceil(MONTH_COLUMNS);

        let cells = (0..rows * MONTH_COLUMNS)
            .map(|idx| {
                if idx < offset || idx >= offset + days {
                    return None;
                }
                let date = month.first_day() + Duration::days((idx - offset) as i64);
                Some(GridCell::resolve(date, &lookup, today, window))
            })
            .collect();

        Self { month, rows, cells }
    }

    pub const fn month(&self) -> YearMonth {
        self.month
    }

    pub const fn rows(&self) -> usize {
        self.rows
    }

    pub const fn columns(&self) -> usize {
        MONTH_COLUMNS
    }

    /// Cells in row-major order; padding cells are `None`.
    pub fn cells(&self) -> &[Option<GridCell>] {
        &self.cells
    }

    /// The cell at `(row, col)`; `None` for padding or out-of-range positions.
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<&GridCell> {
        if col >= MONTH_COLUMNS {
            return None;
        }
        self.cells.get(row * MONTH_COLUMNS + col)?.as_ref()
    }

    /// Every calendar day of the month, in order.
    pub fn days(&self) -> impl Iterator<Item = &GridCell> {
        self.cells.iter().flatten()
    }

    /// Days that have an entry.
    #[must_use]
    pub fn populated_count(&self) -> usize {
        self.days().filter(|c| c.entry.is_some()).count()
    }
}

/// A whole year laid out as a 20-column run of days.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearGrid {
    year: i32,
    rows: usize,
    cells: Vec<GridCell>,
}

impl YearGrid {
    /// Lays out every day of `year`, attaching entries that fall inside it.
    #[allow(clippy::cast_possible_wrap)]
    pub fn build(
        year: i32,
        entries: &[MoodEntry],
        today: NaiveDate,
        window: EditWindow,
    ) -> Result<Self, CalendarError> {
        let start = start_of_year(year)?;
        let lookup = index_by_date(entries);
        let total = days_in_year(year) as usize;
        let rows = total.div_ceil(YEAR_COLUMNS);

        let cells = (0..total)
            .map(|i| {
                let date = start + Duration::days(i as i64);
                GridCell::resolve(date, &lookup, today, window)
            })
            .collect();

        Ok(Self { year, rows, cells })
    }

    pub const fn year(&self) -> i32 {
        self.year
    }

    pub const fn rows(&self) -> usize {
        self.rows
    }

    pub const fn columns(&self) -> usize {
        YEAR_COLUMNS
    }

    /// Every day of the year, January 1 first.
    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    /// The cell at `(row, col)`; `None` past the last day.
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<&GridCell> {
        if col >= YEAR_COLUMNS {
            return None;
        }
        self.cells.get(row * YEAR_COLUMNS + col)
    }

    /// Days that have an entry.
    #[must_use]
    pub fn populated_count(&self) -> usize {
        self.cells.iter().filter(|c| c.entry.is_some()).count()
    }
}

/// The year-review form: twelve independent month grids, January first.
pub fn year_month_grids(
    year: i32,
    entries: &[MoodEntry],
    today: NaiveDate,
    window: EditWindow,
) -> Result<Vec<MonthGrid>, CalendarError> {
    (1..=12)
        .map(|month| {
            YearMonth::new(year, month).map(|ym| MonthGrid::build(ym, entries, today, window))
        })
        .collect()
}
