//! Calendar arithmetic for months and years.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::source::DateRange;

/// Errors for out-of-range calendar periods.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CalendarError {
    /// A month, year or period string outside the supported range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Gregorian leap-year rule.
#[must_use]
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a year: 365 or 366.
#[must_use]
pub const fn days_in_year(year: i32) -> u32 {
    if is_leap_year(year) { 366 } else { 365 }
}

/// First day of a year, if the year is representable.
pub fn start_of_year(year: i32) -> Result<NaiveDate, CalendarError> {
    NaiveDate::from_ymd_opt(year, 1, 1)
        .ok_or_else(|| CalendarError::InvalidArgument(format!("year {year} is out of range")))
}

/// January 1 through December 31 of `year`.
pub fn year_range(year: i32) -> Result<DateRange, CalendarError> {
    let start = start_of_year(year)?;
    let end = NaiveDate::from_ymd_opt(year, 12, 31)
        .ok_or_else(|| CalendarError::InvalidArgument(format!("year {year} is out of range")))?;
    Ok(DateRange::new(start, end))
}

/// A calendar month of a specific year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct YearMonth {
    year: i32,
    month: u32,
    first_day: NaiveDate,
}

impl YearMonth {
    /// Creates a year-month; `month` is 1-based.
    pub fn new(year: i32, month: u32) -> Result<Self, CalendarError> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidArgument(format!(
                "month must be between 1 and 12, got {month}"
            )));
        }
        let first_day = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| {
            CalendarError::InvalidArgument(format!("year {year} is out of range"))
        })?;
        Ok(Self {
            year,
            month,
            first_day,
        })
    }

    /// The month containing `date`.
    #[must_use]
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            first_day: date.with_day(1).unwrap_or(date),
        }
    }

    pub const fn year(&self) -> i32 {
        self.year
    }

    pub const fn month(&self) -> u32 {
        self.month
    }

    /// English month name, e.g. `"June"`.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        MONTH_NAMES[(self.month - 1) as usize]
    }

    pub const fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    /// The last day of the month.
    #[must_use]
    pub fn last_day(&self) -> NaiveDate {
        self.first_day + chrono::Duration::days(i64::from(self.days_in_month()) - 1)
    }

    /// First through last day of the month.
    #[must_use]
    pub fn date_range(&self) -> DateRange {
        DateRange::new(self.first_day, self.last_day())
    }

    /// Day `day` (1-based) of this month.
    #[must_use]
    pub fn day(&self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, day)
    }

    #[must_use]
    pub const fn days_in_month(&self) -> u32 {
        match self.month {
            4 | 6 | 9 | 11 => 30,
            2 if is_leap_year(self.year) => 29,
            2 => 28,
            _ => 31,
        }
    }

    /// Column of the first day in a Sunday-start week (0 = Sunday .. 6 = Saturday).
    #[must_use]
    pub fn first_weekday_offset(&self) -> u32 {
        self.first_day.weekday().num_days_from_sunday()
    }

    /// Whether `date` falls in this month.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Shifts by `delta` months, crossing year boundaries as needed.
    pub fn plus_months(&self, delta: i32) -> Result<Self, CalendarError> {
        let out_of_range =
            || CalendarError::InvalidArgument(format!("{self} shifted by {delta} months"));
        let shifted = if delta >= 0 {
            self.first_day.checked_add_months(Months::new(delta.unsigned_abs()))
        } else {
            self.first_day.checked_sub_months(Months::new(delta.unsigned_abs()))
        }
        .ok_or_else(out_of_range)?;
        Ok(Self::of(shifted))
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CalendarError::InvalidArgument(format!("expected YYYY-MM, got {s:?}"));
        let (year, month) = s.split_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        Self::new(year, month)
    }
}

impl TryFrom<String> for YearMonth {
    type Error = CalendarError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<YearMonth> for String {
    fn from(ym: YearMonth) -> Self {
        ym.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leap_years() {
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(2023));
        assert!(!is_leap_year(1900));
        assert!(is_leap_year(2000));
        assert_eq!(days_in_year(2024), 366);
        assert_eq!(days_in_year(2023), 365);
    }

    #[test]
    fn test_ranges_cover_whole_periods() {
        let year = year_range(2024).unwrap();
        assert_eq!(year.start, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(year.end, NaiveDate::from_ymd_opt(2024, 12, 31).unwrap());
        assert!(year_range(i32::MAX).is_err());

        let feb = YearMonth::new(2024, 2).unwrap().date_range();
        assert_eq!(feb.end, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    }

    #[test]
    fn test_month_outside_range_is_rejected() {
        assert!(matches!(
            YearMonth::new(2024, 0),
            Err(CalendarError::InvalidArgument(_))
        ));
        assert!(YearMonth::new(2024, 13).is_err());
        assert!(YearMonth::new(2024, 12).is_ok());
    }

    #[test]
    fn test_month_lengths() {
        assert_eq!(YearMonth::new(2024, 2).unwrap().days_in_month(), 29);
        assert_eq!(YearMonth::new(2023, 2).unwrap().days_in_month(), 28);
        assert_eq!(YearMonth::new(2024, 6).unwrap().days_in_month(), 30);
        assert_eq!(YearMonth::new(2024, 7).unwrap().days_in_month(), 31);
        assert_eq!(
            YearMonth::new(2024, 6).unwrap().last_day(),
            NaiveDate::from_ymd_opt(2024, 6, 30).unwrap()
        );
    }

    #[test]
    fn test_first_weekday_is_sunday_based() {
        // 2024-09-01 was a Sunday, 2024-05-01 a Wednesday.
        assert_eq!(YearMonth::new(2024, 9).unwrap().first_weekday_offset(), 0);
        assert_eq!(YearMonth::new(2024, 5).unwrap().first_weekday_offset(), 3);
        // 2024-06-01 was a Saturday.
        assert_eq!(YearMonth::new(2024, 6).unwrap().first_weekday_offset(), 6);
    }

    #[test]
    fn test_plus_months_crosses_years() {
        let jan = YearMonth::new(2024, 1).unwrap();
        assert_eq!(jan.plus_months(-1).unwrap(), YearMonth::new(2023, 12).unwrap());
        assert_eq!(jan.plus_months(13).unwrap(), YearMonth::new(2025, 2).unwrap());
        assert_eq!(jan.plus_months(0).unwrap(), jan);
    }

    #[test]
    fn test_parse_and_display() {
        let ym: YearMonth = "2024-06".parse().unwrap();
        assert_eq!(ym.to_string(), "2024-06");
        assert_eq!(ym.name(), "June");
        assert!("2024-13".parse::<YearMonth>().is_err());
        assert!("June 2024".parse::<YearMonth>().is_err());
    }
}
