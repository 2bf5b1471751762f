//! One handle over an entry source and a clock.
//!
//! Every call pulls a fresh snapshot, so results always reflect the store
//! as it is at call time.

use chrono::NaiveDate;
use thiserror::Error;

use crate::calendar::{CalendarError, YearMonth, year_range};
use crate::clock::Clock;
use crate::editable::{EditRejection, EditWindow};
use crate::entry::MoodEntry;
use crate::grid::{MonthGrid, YearGrid, year_month_grids};
use crate::source::{DateRange, EntrySource};
use crate::stats::MoodAnalysis;
use crate::today::TodaySummary;

#[derive(Error, Debug)]
pub enum JournalError<E> {
    #[error("failed to read mood entries")]
    Source(#[source] E),

    #[error(transparent)]
    Calendar(#[from] CalendarError),
}

pub type Result<T, E> = std::result::Result<T, JournalError<E>>;

#[derive(Debug, Clone)]
pub struct Journal<S, C> {
    source: S,
    clock: C,
    window: EditWindow,
}

impl<S: EntrySource, C: Clock> Journal<S, C> {
    pub fn new(source: S, clock: C) -> Self {
        Self {
            source,
            clock,
            window: EditWindow::default(),
        }
    }

    #[must_use]
    pub fn with_window(mut self, window: EditWindow) -> Self {
        self.window = window;
        self
    }

    pub const fn source(&self) -> &S {
        &self.source
    }

    pub const fn window(&self) -> EditWindow {
        self.window
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    fn snapshot(&self, range: Option<DateRange>) -> Result<Vec<MoodEntry>, S::Error> {
        let entries = self
            .source
            .list_entries(range)
            .map_err(JournalError::Source)?;
        tracing::debug!(entries = entries.len(), ?range, "loaded snapshot");
        Ok(entries)
    }

    /// Streaks and distributions over the full history.
    pub fn analysis(&self) -> Result<MoodAnalysis, S::Error> {
        let entries = self.snapshot(None)?;
        Ok(MoodAnalysis::from_entries(&entries, self.today()))
    }

    pub fn month_grid(&self, month: YearMonth) -> Result<MonthGrid, S::Error> {
        let entries = self.snapshot(Some(month.date_range()))?;
        Ok(MonthGrid::build(month, &entries, self.today(), self.window))
    }

    /// The month containing today.
    pub fn current_month_grid(&self) -> Result<MonthGrid, S::Error> {
        self.month_grid(YearMonth::of(self.today()))
    }

    pub fn year_grid(&self, year: i32) -> Result<YearGrid, S::Error> {
        let entries = self.snapshot(Some(year_range(year)?))?;
        Ok(YearGrid::build(year, &entries, self.today(), self.window)?)
    }

    /// Twelve month grids for `year`, January first.
    pub fn year_review(&self, year: i32) -> Result<Vec<MonthGrid>, S::Error> {
        let entries = self.snapshot(Some(year_range(year)?))?;
        Ok(year_month_grids(year, &entries, self.today(), self.window)?)
    }

    pub fn today_summary(&self) -> Result<TodaySummary, S::Error> {
        let entries = self.snapshot(None)?;
        Ok(TodaySummary::build(&entries, self.today()))
    }

    pub fn entry(&self, date: NaiveDate) -> Result<Option<MoodEntry>, S::Error> {
        self.source.get_entry(date).map_err(JournalError::Source)
    }

    pub fn is_editable(&self, date: NaiveDate) -> bool {
        self.window.is_editable(date, self.today())
    }

    pub fn check_editable(&self, date: NaiveDate) -> std::result::Result<(), EditRejection> {
        self.window.check(date, self.today())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::convert::Infallible;

    use super::*;
    use crate::clock::FixedClock;
    use crate::entry::{Emoji, Rgba};

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn entry(d: &str, emoji: &str) -> MoodEntry {
        MoodEntry::new(date(d), Rgba::rgb(0x4E, 0xCD, 0xC4), Emoji::new(emoji).unwrap())
    }

    fn history() -> Vec<MoodEntry> {
        vec![
            entry("2023-12-31", "😴"),
            entry("2024-06-13", "😊"),
            entry("2024-06-14", "😊"),
            entry("2024-06-15", "😢"),
        ]
    }

    /// Counts queries and remembers the last range asked for.
    struct SpySource {
        entries: Vec<MoodEntry>,
        calls: Cell<usize>,
        last_range: Cell<Option<DateRange>>,
    }

    impl EntrySource for SpySource {
        type Error = Infallible;

        fn list_entries(
            &self,
            range: Option<DateRange>,
        ) -> std::result::Result<Vec<MoodEntry>, Infallible> {
            self.calls.set(self.calls.get() + 1);
            self.last_range.set(range);
            self.entries.list_entries(range)
        }

        fn get_entry(&self, date: NaiveDate) -> std::result::Result<Option<MoodEntry>, Infallible> {
            self.entries.get_entry(date)
        }
    }

    #[test]
    fn test_analysis_uses_clock() {
        let journal = Journal::new(history(), FixedClock(date("2024-06-15")));
        let analysis = journal.analysis().unwrap();
        assert_eq!(analysis.total_days, 4);
        assert_eq!(analysis.streaks.current_streak, 3);

        let later = Journal::new(history(), FixedClock(date("2024-06-20")));
        assert_eq!(later.analysis().unwrap().streaks.current_streak, 0);
    }

    #[test]
    fn test_month_grid_queries_only_that_month() {
        let source = SpySource {
            entries: history(),
            calls: Cell::new(0),
            last_range: Cell::new(None),
        };
        let journal = Journal::new(&source, FixedClock(date("2024-06-15")));
        let grid = journal.current_month_grid().unwrap();

        assert_eq!(grid.populated_count(), 3);
        assert_eq!(
            source.last_range.get(),
            Some(DateRange::new(date("2024-06-01"), date("2024-06-30")))
        );

        journal.month_grid(YearMonth::new(2024, 5).unwrap()).unwrap();
        assert_eq!(source.calls.get(), 2);
    }

    #[test]
    fn test_each_call_sees_the_current_store() {
        let mut entries = history();
        let journal = Journal::new(&entries, FixedClock(date("2024-06-15")));
        assert_eq!(journal.year_grid(2024).unwrap().populated_count(), 3);

        entries.push(entry("2024-01-01", "🥳"));
        let journal = Journal::new(&entries, FixedClock(date("2024-06-15")));
        assert_eq!(journal.year_grid(2024).unwrap().populated_count(), 4);
        assert_eq!(journal.year_grid(2023).unwrap().populated_count(), 1);
    }

    #[test]
    fn test_year_review_and_summary() {
        let journal = Journal::new(history(), FixedClock(date("2024-06-15")));
        let review = journal.year_review(2024).unwrap();
        assert_eq!(review.len(), 12);
        assert_eq!(review[5].populated_count(), 3);

        let summary = journal.today_summary().unwrap();
        assert_eq!(summary.current_streak, 3);
        assert_eq!(summary.today_entry.unwrap().emoji().as_str(), "😢");
    }

    #[test]
    fn test_editability_follows_window() {
        let journal = Journal::new(history(), FixedClock(date("2024-06-15")));
        assert!(journal.is_editable(date("2024-06-12")));
        assert!(!journal.is_editable(date("2024-06-11")));
        assert!(matches!(
            journal.check_editable(date("2024-06-16")),
            Err(EditRejection::Future { .. })
        ));

        let wide = journal.with_window(EditWindow::new(7));
        assert!(wide.is_editable(date("2024-06-08")));
    }

    #[test]
    fn test_point_lookup() {
        let journal = Journal::new(history(), FixedClock(date("2024-06-15")));
        assert!(journal.entry(date("2024-06-14")).unwrap().is_some());
        assert!(journal.entry(date("2024-06-01")).unwrap().is_none());
    }
}
