//! Source of "today" for date-relative calculations.

use chrono::{Local, NaiveDate};

/// Supplies the current calendar date.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// The local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock pinned to a single date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}
