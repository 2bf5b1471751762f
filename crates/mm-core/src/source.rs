//! Read access to stored mood entries.
//!
//! The core never owns persisted entries. It pulls a point-in-time snapshot
//! from an [`EntrySource`] and works on that list; callers re-query when the
//! underlying store changes.

use std::collections::BTreeMap;
use std::convert::Infallible;

use chrono::NaiveDate;

use crate::entry::MoodEntry;

/// An inclusive range of calendar dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a range; `start` and `end` are swapped if given in reverse.
    #[must_use]
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        if start <= end {
            Self { start, end }
        } else {
            Self {
                start: end,
                end: start,
            }
        }
    }

    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// A store of mood entries, queried by range or by date.
///
/// Implementations return entries in any order; the core sorts what it needs.
pub trait EntrySource {
    type Error;

    /// Lists entries within `range`, or every entry when `range` is `None`.
    fn list_entries(&self, range: Option<DateRange>) -> Result<Vec<MoodEntry>, Self::Error>;

    /// Fetches the entry for a single date.
    fn get_entry(&self, date: NaiveDate) -> Result<Option<MoodEntry>, Self::Error>;
}

/// A borrowed snapshot is itself a source.
///
/// Point lookups follow the same last-one-wins rule as [`dedupe_by_date`].
impl EntrySource for [MoodEntry] {
    type Error = Infallible;

    fn list_entries(&self, range: Option<DateRange>) -> Result<Vec<MoodEntry>, Self::Error> {
        Ok(self
            .iter()
            .filter(|e| range.is_none_or(|r| r.contains(e.date())))
            .cloned()
            .collect())
    }

    fn get_entry(&self, date: NaiveDate) -> Result<Option<MoodEntry>, Self::Error> {
        Ok(self.iter().rev().find(|e| e.date() == date).cloned())
    }
}

impl EntrySource for Vec<MoodEntry> {
    type Error = Infallible;

    fn list_entries(&self, range: Option<DateRange>) -> Result<Vec<MoodEntry>, Self::Error> {
        self.as_slice().list_entries(range)
    }

    fn get_entry(&self, date: NaiveDate) -> Result<Option<MoodEntry>, Self::Error> {
        self.as_slice().get_entry(date)
    }
}

impl<S: EntrySource + ?Sized> EntrySource for &S {
    type Error = S::Error;

    fn list_entries(&self, range: Option<DateRange>) -> Result<Vec<MoodEntry>, Self::Error> {
        (**self).list_entries(range)
    }

    fn get_entry(&self, date: NaiveDate) -> Result<Option<MoodEntry>, Self::Error> {
        (**self).get_entry(date)
    }
}

/// Indexes entries by date. When a date repeats, the later entry in the slice wins.
#[must_use]
pub fn index_by_date(entries: &[MoodEntry]) -> BTreeMap<NaiveDate, &MoodEntry> {
    entries.iter().map(|e| (e.date(), e)).collect()
}

/// Reduces a snapshot to one entry per date, sorted ascending.
///
/// When a date repeats, the later entry in the slice wins.
#[must_use]
pub fn dedupe_by_date(entries: &[MoodEntry]) -> Vec<MoodEntry> {
    index_by_date(entries).into_values().cloned().collect()
}
