//! Streaks and mood distributions over a history of entries.
//!
//! # Streaks
//!
//! The current streak walks backward from today and allows one grace day:
//! if today has not been logged yet but yesterday has, the streak still
//! counts through yesterday. The longest streak is a forward pass in which
//! any gap, duplicate date or out-of-order date restarts the run.
//!
//! # Distributions
//!
//! [`MoodAnalysis::from_entries`] first reduces the snapshot to one entry per
//! date (later entries win) and sorts it by date, so ties are broken by the
//! earliest date and results do not depend on input order.

use std::collections::HashMap;

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::entry::{Emoji, MoodEntry, Rgba};
use crate::source::dedupe_by_date;

/// Weekdays in report order.
pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Current and longest streaks, in days.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakStats {
    pub current_streak: u32,
    pub longest_streak: u32,
}

/// How often one emoji was logged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodStat {
    pub emoji: Emoji,
    /// Colour of the first entry logged with this emoji.
    pub color: Rgba,
    pub count: usize,
    /// Share of all entries, 0.0 to 1.0.
    pub percentage: f32,
}

/// Entries logged on one weekday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekdayStat {
    pub weekday: Weekday,
    pub count: usize,
    pub most_common_emoji: Option<Emoji>,
}

/// Everything shown on the analysis screen.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MoodAnalysis {
    pub total_days: usize,
    #[serde(flatten)]
    pub streaks: StreakStats,
    pub distribution: Vec<MoodStat>,
    pub weekday_stats: Vec<WeekdayStat>,
    pub most_frequent_mood: Option<Emoji>,
    pub average_per_week: f32,
}

impl MoodAnalysis {
    /// Analyzes a snapshot relative to `today`.
    ///
    /// Empty input yields [`MoodAnalysis::default`].
    #[must_use]
    pub fn from_entries(entries: &[MoodEntry], today: NaiveDate) -> Self {
        if entries.is_empty() {
            return Self::default();
        }
        let entries = dedupe_by_date(entries);
        let distribution = distribution(&entries);
        tracing::debug!(
            entries = entries.len(),
            distinct_moods = distribution.len(),
            "analyzed mood history"
        );

        Self {
            total_days: entries.len(),
            streaks: streak_stats(&entries, today),
            most_frequent_mood: distribution.first().map(|s| s.emoji.clone()),
            weekday_stats: weekday_stats(&entries),
            average_per_week: average_per_week(&entries, today),
            distribution,
        }
    }
}

/// Both streaks at once.
#[must_use]
pub fn streak_stats(entries: &[MoodEntry], today: NaiveDate) -> StreakStats {
    StreakStats {
        current_streak: current_streak(entries, today),
        longest_streak: longest_streak(entries),
    }
}

/// Consecutive logged days ending today, or ending yesterday when today is not logged yet.
#[must_use]
pub fn current_streak(entries: &[MoodEntry], today: NaiveDate) -> u32 {
    let mut dates: Vec<NaiveDate> = entries.iter().map(MoodEntry::date).collect();
    dates.sort_unstable_by(|a, b| b.cmp(a));

    let mut streak = 0;
    let mut cursor = today;
    for date in dates {
        let continues = date == cursor;
        // Grace day: an unlogged today does not break yesterday's streak.
        let starts_yesterday = streak == 0 && date == cursor - Duration::days(1);
        if !(continues || starts_yesterday) {
            break;
        }
        streak += 1;
        cursor = date - Duration::days(1);
    }
    streak
}

/// Longest run of consecutive calendar days.
#[must_use]
pub fn longest_streak(entries: &[MoodEntry]) -> u32 {
    let mut dates: Vec<NaiveDate> = entries.iter().map(MoodEntry::date).collect();
    dates.sort_unstable();

    let mut longest = 0;
    let mut run = 0;
    let mut prev: Option<NaiveDate> = None;
    for date in dates {
        run = match prev {
            Some(p) if date != p + Duration::days(1) => 1,
            _ => run + 1,
        };
        longest = longest.max(run);
        prev = Some(date);
    }
    longest
}

/// Per-emoji counts, most frequent first. Ties keep first-encountered order.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn distribution(entries: &[MoodEntry]) -> Vec<MoodStat> {
    let total = entries.len();
    let mut stats: Vec<MoodStat> = Vec::new();
    let mut positions: HashMap<&Emoji, usize> = HashMap::new();

    for entry in entries {
        if let Some(&idx) = positions.get(entry.emoji()) {
            stats[idx].count += 1;
        } else {
            positions.insert(entry.emoji(), stats.len());
            stats.push(MoodStat {
                emoji: entry.emoji().clone(),
                color: entry.color(),
                count: 1,
                percentage: 0.0,
            });
        }
    }

    for stat in &mut stats {
        stat.percentage = stat.count as f32 / total as f32;
    }
    // Stable sort keeps first-encountered order among equal counts.
    stats.sort_by(|a, b| b.count.cmp(&a.count));
    stats
}

/// Count and most common emoji for each weekday, Monday first.
#[must_use]
pub fn weekday_stats(entries: &[MoodEntry]) -> Vec<WeekdayStat> {
    WEEKDAYS
        .iter()
        .map(|&weekday| {
            let on_day: Vec<MoodEntry> = entries
                .iter()
                .filter(|e| e.date().weekday() == weekday)
                .cloned()
                .collect();
            WeekdayStat {
                weekday,
                count: on_day.len(),
                most_common_emoji: distribution(&on_day).into_iter().next().map(|s| s.emoji),
            }
        })
        .collect()
}

/// Entries per week since the earliest entry, counting at least one week.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
pub fn average_per_week(entries: &[MoodEntry], today: NaiveDate) -> f32 {
    let Some(earliest) = entries.iter().map(MoodEntry::date).min() else {
        return 0.0;
    };
    let days = (today - earliest).num_days();
    let weeks = (days as f64 / 7.0).max(1.0);
    (entries.len() as f64 / weeks) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn entry(d: &str, emoji: &str) -> MoodEntry {
        MoodEntry::new(date(d), Rgba::WHITE, Emoji::new(emoji).unwrap())
    }

    fn colored(d: &str, emoji: &str, color: Rgba) -> MoodEntry {
        MoodEntry::new(date(d), color, Emoji::new(emoji).unwrap())
    }

    fn june_except_tenth() -> Vec<MoodEntry> {
        (1..=30)
            .filter(|&d| d != 10)
            .map(|d| entry(&format!("2024-06-{d:02}"), "😊"))
            .collect()
    }

    #[test]
    fn test_empty_history_is_all_zero() {
        let today = date("2024-06-15");
        assert_eq!(current_streak(&[], today), 0);
        assert_eq!(longest_streak(&[]), 0);
        assert!(distribution(&[]).is_empty());
        assert!((average_per_week(&[], today)).abs() < f32::EPSILON);
        assert_eq!(MoodAnalysis::from_entries(&[], today), MoodAnalysis::default());
    }

    #[test]
    fn test_three_days_ending_today() {
        let entries = vec![
            entry("2024-06-13", "😊"),
            entry("2024-06-14", "😊"),
            entry("2024-06-15", "😊"),
        ];
        let stats = streak_stats(&entries, date("2024-06-15"));
        assert_eq!(stats.current_streak, 3);
        assert_eq!(stats.longest_streak, 3);
    }

    #[test]
    fn test_streak_counts_through_yesterday_when_today_is_missing() {
        let entries = vec![entry("2024-06-13", "😊"), entry("2024-06-14", "😊")];
        assert_eq!(current_streak(&entries, date("2024-06-15")), 2);
    }

    #[test]
    fn test_streak_is_zero_when_latest_entry_is_older_than_yesterday() {
        let entries = vec![entry("2024-06-12", "😊"), entry("2024-06-13", "😊")];
        assert_eq!(current_streak(&entries, date("2024-06-15")), 0);
    }

    #[test]
    fn test_future_entries_break_the_current_streak() {
        let entries = vec![entry("2024-06-15", "😊"), entry("2024-06-20", "😊")];
        assert_eq!(current_streak(&entries, date("2024-06-15")), 0);
    }

    #[test]
    fn test_gap_on_the_tenth_splits_june() {
        let entries = june_except_tenth();
        assert_eq!(longest_streak(&entries), 20);

        // With only the first nine days logged the run stops at the gap.
        let first_part: Vec<MoodEntry> = entries.iter().take(9).cloned().collect();
        assert_eq!(longest_streak(&first_part), 9);

        assert_eq!(current_streak(&entries, date("2024-06-30")), 20);
        assert_eq!(current_streak(&entries, date("2024-07-01")), 20);
        assert_eq!(current_streak(&entries, date("2024-07-02")), 0);

        assert_eq!(current_streak(&first_part, date("2024-06-09")), 9);
        assert_eq!(current_streak(&first_part, date("2024-06-10")), 9);
        assert_eq!(current_streak(&first_part, date("2024-06-11")), 0);
    }

    #[test]
    fn test_duplicate_dates_reset_the_longest_run() {
        let entries = vec![
            entry("2024-06-01", "😊"),
            entry("2024-06-02", "😊"),
            entry("2024-06-02", "😢"),
            entry("2024-06-03", "😊"),
        ];
        assert_eq!(longest_streak(&entries), 2);
    }

    #[test]
    fn test_longest_is_at_least_current() {
        let histories = [
            june_except_tenth(),
            vec![entry("2024-06-14", "😊")],
            vec![entry("2024-06-14", "😊"), entry("2024-06-15", "😊")],
            vec![entry("2024-05-01", "😊"), entry("2024-06-15", "😊")],
        ];
        for today in ["2024-06-15", "2024-06-16", "2024-07-01"] {
            for entries in &histories {
                let stats = streak_stats(entries, date(today));
                assert!(stats.longest_streak >= stats.current_streak);
            }
        }
    }

    #[test]
    fn test_distribution_counts_sum_to_total() {
        let entries = vec![
            colored("2024-06-01", "😊", Rgba::rgb(1, 1, 1)),
            colored("2024-06-02", "😢", Rgba::rgb(2, 2, 2)),
            colored("2024-06-03", "😊", Rgba::rgb(3, 3, 3)),
            colored("2024-06-04", "🥳", Rgba::rgb(4, 4, 4)),
            colored("2024-06-05", "😢", Rgba::rgb(5, 5, 5)),
            colored("2024-06-06", "😊", Rgba::rgb(6, 6, 6)),
        ];
        let stats = distribution(&entries);

        let total: usize = stats.iter().map(|s| s.count).sum();
        assert_eq!(total, entries.len());
        let share: f32 = stats.iter().map(|s| s.percentage).sum();
        assert!((share - 1.0).abs() < 1e-5);

        let order: Vec<(&str, usize)> = stats.iter().map(|s| (s.emoji.as_str(), s.count)).collect();
        assert_eq!(order, vec![("😊", 3), ("😢", 2), ("🥳", 1)]);
        assert_eq!(stats[0].color, Rgba::rgb(1, 1, 1));
        assert_eq!(stats[1].color, Rgba::rgb(2, 2, 2));
    }

    #[test]
    fn test_distribution_ties_keep_first_seen_order() {
        let entries = vec![
            entry("2024-06-01", "😴"),
            entry("2024-06-02", "😊"),
            entry("2024-06-03", "😊"),
            entry("2024-06-04", "😴"),
        ];
        let stats = distribution(&entries);
        assert_eq!(stats[0].emoji.as_str(), "😴");
        assert_eq!(stats[1].emoji.as_str(), "😊");
    }

    #[test]
    fn test_weekday_stats_cover_all_days() {
        // 2024-06-03 and 2024-06-10 are Mondays.
        let entries = vec![
            entry("2024-06-03", "😴"),
            entry("2024-06-10", "😊"),
            entry("2024-06-17", "😊"),
            entry("2024-06-04", "🥳"),
        ];
        let stats = weekday_stats(&entries);
        assert_eq!(stats.len(), 7);
        assert_eq!(stats[0].weekday, Weekday::Mon);
        assert_eq!(stats[0].count, 3);
        assert_eq!(stats[0].most_common_emoji.as_ref().unwrap().as_str(), "😊");
        assert_eq!(stats[1].most_common_emoji.as_ref().unwrap().as_str(), "🥳");
        assert_eq!(stats[6].weekday, Weekday::Sun);
        assert_eq!(stats[6].count, 0);
        assert!(stats[6].most_common_emoji.is_none());
    }

    #[test]
    fn test_average_counts_at_least_one_week() {
        let entries = vec![entry("2024-06-14", "😊"), entry("2024-06-15", "😊")];
        assert!((average_per_week(&entries, date("2024-06-15")) - 2.0).abs() < 1e-6);

        // 28 days of history with 14 entries is 3.5 per week.
        let entries: Vec<MoodEntry> = (0..14)
            .map(|i| entry(&format!("2024-06-{:02}", 1 + i * 2), "😊"))
            .collect();
        assert!((average_per_week(&entries, date("2024-06-29")) - 3.5).abs() < 1e-6);
    }

    #[test]
    fn test_analysis_ignores_input_order() {
        let mut entries = june_except_tenth();
        entries.push(entry("2024-05-20", "😢"));
        let today = date("2024-06-30");
        let forward = MoodAnalysis::from_entries(&entries, today);
        entries.reverse();
        let backward = MoodAnalysis::from_entries(&entries, today);
        assert_eq!(forward, backward);
        assert_eq!(forward.total_days, 30);
        assert_eq!(forward.most_frequent_mood.unwrap().as_str(), "😊");
    }

    #[test]
    fn test_analysis_dedupes_by_date_last_wins() {
        let entries = vec![entry("2024-06-14", "😊"), entry("2024-06-14", "😡")];
        let analysis = MoodAnalysis::from_entries(&entries, date("2024-06-15"));
        assert_eq!(analysis.total_days, 1);
        assert_eq!(analysis.distribution.len(), 1);
        assert_eq!(analysis.distribution[0].emoji.as_str(), "😡");
        assert_eq!(analysis.streaks.current_streak, 1);
    }
}
