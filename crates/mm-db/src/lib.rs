//! Storage layer for the mood journal.
//!
//! Provides persistence for mood entries using `rusqlite`.
//!
//! # Thread Safety
//!
//! The [`Database`] type wraps a `rusqlite::Connection`, which is `Send` but not `Sync`.
//! A `Database` can be moved between threads but not shared without external
//! synchronization. Open one per thread, or wrap it in a `Mutex`.
//!
//! # Schema
//!
//! One row per calendar day in `moods`, keyed by the date.
//!
//! - `date` is TEXT in `YYYY-MM-DD` form, so lexicographic order is date order.
//! - `color` is the packed `0xAARRGGBB` value as an INTEGER.
//! - `created_at` is an RFC 3339 UTC timestamp with millisecond precision.

use std::path::Path;

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use mm_core::calendar::{CalendarError, YearMonth, year_range};
use mm_core::entry::{Emoji, MoodEntry, Rgba, ValidationError};
use mm_core::source::{DateRange, EntrySource};
use rusqlite::{Connection, OptionalExtension, Row, params};
use thiserror::Error;

/// Database errors.
#[derive(Debug, Error)]
pub enum DbError {
    /// An error from the underlying database.
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    /// A stored date or timestamp could not be parsed.
    #[error("invalid {column} for mood on {date}: {value}")]
    Parse {
        date: String,
        column: &'static str,
        value: String,
        #[source]
        source: chrono::ParseError,
    },
    /// A stored colour does not fit in 32 bits.
    #[error("invalid color for mood on {date}: {value}")]
    InvalidColor { date: String, value: i64 },
    /// A stored emoji failed validation.
    #[error("invalid emoji for mood on {date}")]
    InvalidEmoji {
        date: String,
        #[source]
        source: ValidationError,
    },
    #[error(transparent)]
    Calendar(#[from] CalendarError),
}

/// Database connection wrapper.
///
/// See the [module documentation](self) for thread safety considerations.
pub struct Database {
    conn: Connection,
}

/// A `moods` row before validation.
struct MoodRow {
    date: String,
    color: i64,
    emoji: String,
    note: String,
    created_at: String,
}

impl MoodRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            date: row.get(0)?,
            color: row.get(1)?,
            emoji: row.get(2)?,
            note: row.get(3)?,
            created_at: row.get(4)?,
        })
    }

    fn into_entry(self) -> Result<MoodEntry, DbError> {
        let date: NaiveDate = self.date.parse().map_err(|source| DbError::Parse {
            date: self.date.clone(),
            column: "date",
            value: self.date.clone(),
            source,
        })?;
        let color = u32::try_from(self.color).map_err(|_| DbError::InvalidColor {
            date: self.date.clone(),
            value: self.color,
        })?;
        let emoji = Emoji::new(self.emoji).map_err(|source| DbError::InvalidEmoji {
            date: self.date.clone(),
            source,
        })?;
        let created_at = DateTime::parse_from_rfc3339(&self.created_at)
            .map_err(|source| DbError::Parse {
                date: self.date.clone(),
                column: "created_at",
                value: self.created_at.clone(),
                source,
            })?
            .with_timezone(&Utc);

        Ok(MoodEntry::new(date, Rgba::from_argb(color), emoji)
            .with_note(self.note)
            .with_created_at(created_at))
    }
}

const SELECT_MOODS: &str = "SELECT date, color, emoji, note, created_at FROM moods";

impl Database {
    /// Opens a database at the given path, creating it if necessary.
    ///
    /// The database schema is automatically initialized on first open.
    pub fn open(path: &Path) -> Result<Self, DbError> {
        let conn = Connection::open(path)?;
        let db = Self { conn };
        db.init()?;
        Ok(db)
    }

    /// Opens an in-memory database.
    ///
    /// Useful for testing. The database is destroyed when the connection closes.
    pub fn open_in_memory() -> Result<Self, DbError> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.init()?;
        Ok(db)
    }

    /// Initializes the database schema.
    ///
    /// This is idempotent - safe to call on an already-initialized database.
    fn init(&self) -> Result<(), DbError> {
        self.conn.execute_batch(
            "
            -- moods: one row per calendar day
            -- date: 'YYYY-MM-DD'
            -- color: packed 0xAARRGGBB
            -- created_at: RFC 3339 UTC
            CREATE TABLE IF NOT EXISTS moods (
                date TEXT PRIMARY KEY,
                color INTEGER NOT NULL,
                emoji TEXT NOT NULL,
                note TEXT NOT NULL DEFAULT '',
                created_at TEXT NOT NULL
            );
            ",
        )?;
        Ok(())
    }

    /// Inserts an entry, replacing any entry already stored for its date.
    pub fn save_entry(&mut self, entry: &MoodEntry) -> Result<(), DbError> {
        self.conn.execute(
            "INSERT OR REPLACE INTO moods (date, color, emoji, note, created_at) VALUES (?, ?, ?, ?, ?)",
            params![
                format_date(entry.date()),
                i64::from(entry.color().to_argb()),
                entry.emoji().as_str(),
                entry.note(),
                format_timestamp(entry.created_at()),
            ],
        )?;
        tracing::debug!(date = %entry.date(), emoji = %entry.emoji(), "saved mood");
        Ok(())
    }

    /// Updates the entry stored for the entry's date.
    ///
    /// Returns `false` when no entry exists for that date.
    pub fn update_entry(&mut self, entry: &MoodEntry) -> Result<bool, DbError> {
        let changed = self.conn.execute(
            "UPDATE moods SET color = ?, emoji = ?, note = ?, created_at = ? WHERE date = ?",
            params![
                i64::from(entry.color().to_argb()),
                entry.emoji().as_str(),
                entry.note(),
                format_timestamp(entry.created_at()),
                format_date(entry.date()),
            ],
        )?;
        Ok(changed > 0)
    }

    /// Deletes the entry for `date`. Returns `false` when there was none.
    pub fn delete_entry(&mut self, date: NaiveDate) -> Result<bool, DbError> {
        let changed = self
            .conn
            .execute("DELETE FROM moods WHERE date = ?", params![format_date(date)])?;
        if changed > 0 {
            tracing::debug!(%date, "deleted mood");
        }
        Ok(changed > 0)
    }

    pub fn get_entry(&self, date: NaiveDate) -> Result<Option<MoodEntry>, DbError> {
        let row = self
            .conn
            .query_row(
                &format!("{SELECT_MOODS} WHERE date = ?"),
                params![format_date(date)],
                MoodRow::from_row,
            )
            .optional()?;
        row.map(MoodRow::into_entry).transpose()
    }

    /// Lists every entry, newest first.
    pub fn list_entries(&self) -> Result<Vec<MoodEntry>, DbError> {
        self.query_moods(&format!("{SELECT_MOODS} ORDER BY date DESC"), &[])
    }

    /// Lists entries between `range.start` and `range.end` inclusive, oldest first.
    pub fn list_entries_in_range(&self, range: DateRange) -> Result<Vec<MoodEntry>, DbError> {
        self.query_moods(
            &format!("{SELECT_MOODS} WHERE date >= ? AND date <= ? ORDER BY date ASC"),
            &[format_date(range.start), format_date(range.end)],
        )
    }

    pub fn list_entries_for_month(&self, month: YearMonth) -> Result<Vec<MoodEntry>, DbError> {
        self.list_entries_in_range(month.date_range())
    }

    pub fn list_entries_for_year(&self, year: i32) -> Result<Vec<MoodEntry>, DbError> {
        self.list_entries_in_range(year_range(year)?)
    }

    pub fn count_entries(&self) -> Result<usize, DbError> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM moods", [], |row| row.get(0))?;
        Ok(usize::try_from(count).unwrap_or_default())
    }

    pub fn count_entries_for_year(&self, year: i32) -> Result<usize, DbError> {
        let range = year_range(year)?;
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM moods WHERE date >= ? AND date <= ?",
            params![format_date(range.start), format_date(range.end)],
            |row| row.get(0),
        )?;
        Ok(usize::try_from(count).unwrap_or_default())
    }

    /// Runs a mood query, skipping rows that no longer validate.
    fn query_moods(&self, sql: &str, args: &[String]) -> Result<Vec<MoodEntry>, DbError> {
        let mut stmt = self.conn.prepare(sql)?;
        let rows = stmt.query_map(rusqlite::params_from_iter(args), MoodRow::from_row)?;
        let mut entries = Vec::new();
        for row in rows {
            match row?.into_entry() {
                Ok(entry) => entries.push(entry),
                Err(err) => tracing::warn!(error = %err, "skipping unreadable mood row"),
            }
        }
        Ok(entries)
    }
}

impl EntrySource for Database {
    type Error = DbError;

    fn list_entries(&self, range: Option<DateRange>) -> Result<Vec<MoodEntry>, DbError> {
        match range {
            Some(range) => self.list_entries_in_range(range),
            None => Self::list_entries(self),
        }
    }

    fn get_entry(&self, date: NaiveDate) -> Result<Option<MoodEntry>, DbError> {
        Self::get_entry(self, date)
    }
}

fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}
