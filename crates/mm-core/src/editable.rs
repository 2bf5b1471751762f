//! Which days can still be logged or edited.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of days before today that stay editable.
pub const DEFAULT_TRAILING_DAYS: u32 = 3;

/// Why a date cannot be edited.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EditRejection {
    #[error("{date} is in the future")]
    Future { date: NaiveDate },

    #[error("{date} is older than the {trailing_days}-day edit window")]
    Expired { date: NaiveDate, trailing_days: u32 },
}

/// The trailing window of editable days, today included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditWindow {
    pub trailing_days: u32,
}

impl Default for EditWindow {
    fn default() -> Self {
        Self {
            trailing_days: DEFAULT_TRAILING_DAYS,
        }
    }
}

impl EditWindow {
    #[must_use]
    pub const fn new(trailing_days: u32) -> Self {
        Self { trailing_days }
    }

    /// Oldest editable date relative to `today`.
    #[must_use]
    pub fn earliest(&self, today: NaiveDate) -> NaiveDate {
        today - Duration::days(i64::from(self.trailing_days))
    }

    #[must_use]
    pub fn is_editable(&self, date: NaiveDate, today: NaiveDate) -> bool {
        self.check(date, today).is_ok()
    }

    /// Like [`is_editable`](Self::is_editable) but says why a date is refused.
    pub fn check(&self, date: NaiveDate, today: NaiveDate) -> Result<(), EditRejection> {
        if date > today {
            return Err(EditRejection::Future { date });
        }
        if date < self.earliest(today) {
            return Err(EditRejection::Expired {
                date,
                trailing_days: self.trailing_days,
            });
        }
        Ok(())
    }
}

/// Editability under the default three-day window.
#[must_use]
pub fn is_editable(date: NaiveDate, today: NaiveDate) -> bool {
    EditWindow::default().is_editable(date, today)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_default_window_covers_today_and_three_days_back() {
        let today = date("2024-06-15");
        assert!(is_editable(date("2024-06-15"), today));
        assert!(is_editable(date("2024-06-14"), today));
        assert!(is_editable(date("2024-06-12"), today));
        assert!(!is_editable(date("2024-06-11"), today));
        assert!(!is_editable(date("2024-06-16"), today));
    }

    #[test]
    fn test_check_reports_the_reason() {
        let today = date("2024-06-15");
        let window = EditWindow::default();
        assert_eq!(
            window.check(date("2024-06-16"), today),
            Err(EditRejection::Future {
                date: date("2024-06-16")
            })
        );
        assert_eq!(
            window.check(date("2024-01-01"), today),
            Err(EditRejection::Expired {
                date: date("2024-01-01"),
                trailing_days: 3
            })
        );
    }

    #[test]
    fn test_window_crosses_month_boundary() {
        let today = date("2024-03-01");
        assert!(is_editable(date("2024-02-27"), today));
        assert!(!is_editable(date("2024-02-26"), today));
    }

    #[test]
    fn test_zero_day_window_is_today_only() {
        let window = EditWindow::new(0);
        let today = date("2024-06-15");
        assert!(window.is_editable(today, today));
        assert!(!window.is_editable(date("2024-06-14"), today));
    }
}
