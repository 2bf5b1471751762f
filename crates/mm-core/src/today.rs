//! The at-a-glance summary shown on the home screen widget.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::entry::{Emoji, MoodEntry};
use crate::source::index_by_date;

/// Previous days shown next to today.
pub const PAST_DAYS: i64 = 5;

/// One of the previous days and what was logged, if anything.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayMood {
    pub date: NaiveDate,
    pub emoji: Option<Emoji>,
}

impl DayMood {
    pub const fn has_entry(&self) -> bool {
        self.emoji.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodaySummary {
    pub today: NaiveDate,
    pub today_entry: Option<MoodEntry>,
    /// The five days before today, oldest first.
    pub past_days: Vec<DayMood>,
    /// Consecutive logged days ending today. Zero until today is logged.
    pub current_streak: u32,
}

impl TodaySummary {
    #[must_use]
    pub fn build(entries: &[MoodEntry], today: NaiveDate) -> Self {
        let lookup = index_by_date(entries);

        let past_days = (1..=PAST_DAYS)
            .rev()
            .map(|ago| {
                let date = today - Duration::days(ago);
                DayMood {
                    date,
                    emoji: lookup.get(&date).map(|e| e.emoji().clone()),
                }
            })
            .collect();

        let mut current_streak = 0;
        let mut cursor = today;
        while lookup.contains_key(&cursor) {
            current_streak += 1;
            cursor -= Duration::days(1);
        }

        Self {
            today,
            today_entry: lookup.get(&today).map(|e| (*e).clone()),
            past_days,
            current_streak,
        }
    }

    pub const fn has_today_entry(&self) -> bool {
        self.today_entry.is_some()
    }
}
