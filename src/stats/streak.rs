//! Consecutive-day writing streaks.
//!
//! A day is *active* when its aggregated total is strictly greater than the
//! previous calendar day's total. Equal totals, net deletions and missing days
//! all break a streak.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::aggregate::{DailyTotals, aggregate};
use crate::snapshot::DailySnapshot;

/// Where the current streak is anchored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StreakPolicy {
    /// The newest snapshot must be from `today`, otherwise the streak is 0.
    #[default]
    Today,
    /// The newest snapshot is treated as today, whatever its date.
    Latest,
}

impl std::str::FromStr for StreakPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "today" => Ok(Self::Today),
            "latest" => Ok(Self::Latest),
            _ => Err(format!("Unknown streak policy: {s}")),
        }
    }
}

impl std::fmt::Display for StreakPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Today => write!(f, "today"),
            Self::Latest => write!(f, "latest"),
        }
    }
}

/// Current streak anchored to `today`.
#[must_use]
pub fn current_streak(snapshots: &[DailySnapshot], today: NaiveDate) -> u32 {
    current_streak_with(snapshots, today, StreakPolicy::Today)
}

#[must_use]
pub fn current_streak_with(
    snapshots: &[DailySnapshot],
    today: NaiveDate,
    policy: StreakPolicy,
) -> u32 {
    current_streak_from(&aggregate(snapshots), today, policy)
}

/// Walk totals newest first, counting strictly increasing consecutive pairs.
#[must_use]
pub fn current_streak_from(totals: &DailyTotals, today: NaiveDate, policy: StreakPolicy) -> u32 {
    let Some((latest, _)) = totals.latest() else {
        return 0;
    };

    if policy == StreakPolicy::Today && days_between(today, latest) != 0 {
        return 0;
    }

    let days: Vec<(NaiveDate, u64)> = totals.descending().collect();
    let mut streak = 0;
    for pair in days.windows(2) {
        let (current, previous) = (pair[0], pair[1]);
        if !is_active_step(previous, current) {
            break;
        }
        streak += 1;
    }

    log::debug!("current streak {streak} (latest {latest}, today {today}, policy {policy})");
    streak
}

/// Longest run of active days anywhere in the history.
#[must_use]
pub fn longest_streak(snapshots: &[DailySnapshot]) -> u32 {
    longest_streak_from(&aggregate(snapshots))
}

#[must_use]
pub fn longest_streak_from(totals: &DailyTotals) -> u32 {
    let days: Vec<(NaiveDate, u64)> = totals.ascending().collect();
    let mut best = 0;
    let mut run = 0;
    for pair in days.windows(2) {
        if is_active_step(pair[0], pair[1]) {
            run += 1;
            best = u32::max(best, run);
        } else {
            run = 0;
        }
    }
    best
}

/// Whether `later` is the calendar day after `earlier` with a higher total.
fn is_active_step(earlier: (NaiveDate, u64), later: (NaiveDate, u64)) -> bool {
    days_between(later.0, earlier.0) == 1 && later.1 > earlier.1
}

/// Calendar-day difference `newer - older`.
fn days_between(newer: NaiveDate, older: NaiveDate) -> i64 {
    (newer - older).num_days()
}

#[cfg(test)]
#[path = "streak_tests.rs"]
mod tests;
