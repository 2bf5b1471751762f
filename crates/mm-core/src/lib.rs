//! Core domain logic for the mood journal.
//!
//! This crate contains the fundamental types and logic for:
//! - Entries: one colour and emoji per calendar day
//! - Analysis: streaks, mood distribution and weekday patterns
//! - Layout: month and year calendar grids
//! - Rendering: shareable mosaic images built from those grids
//! - Editability: which days can still be logged or changed
//!
//! Nothing here owns storage. Callers supply an [`EntrySource`] and a
//! [`Clock`], and every computation works on a snapshot of entries.

pub mod calendar;
pub mod clock;
pub mod editable;
pub mod entry;
pub mod grid;
pub mod journal;
pub mod palette;
pub mod render;
pub mod source;
pub mod stats;
pub mod theme;
pub mod today;

pub use calendar::{CalendarError, YearMonth, year_range};
pub use clock::{Clock, FixedClock, SystemClock};
pub use editable::{EditRejection, EditWindow, is_editable};
pub use entry::{Emoji, MoodEntry, Rgba, ValidationError};
pub use grid::{GridCell, MonthGrid, YearGrid, year_month_grids};
pub use journal::{Journal, JournalError};
pub use palette::MoodColor;
pub use render::{Raster, Rasterizer, RenderError};
pub use source::{DateRange, EntrySource};
pub use stats::{MoodAnalysis, MoodStat, StreakStats, WeekdayStat};
pub use theme::{Theme, ThemeColors};
pub use today::{DayMood, TodaySummary};
