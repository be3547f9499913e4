//! Dense calendar view of daily word deltas.
//!
//! The heatmap always spans July 1 of last year through December 31 of the
//! current year, one cell per day, so a calendar grid can be drawn without
//! gap handling. Missing days count as a total of 0.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use super::aggregate::{DailyTotals, aggregate, signed_total};
use crate::snapshot::{DailySnapshot, format_iso_date};

/// Lower bound (inclusive) of level 2.
pub const LEVEL_2_MIN: i64 = 100;
/// Lower bound (inclusive) of level 3.
pub const LEVEL_3_MIN: i64 = 500;
/// Lower bound (inclusive) of level 4.
pub const LEVEL_4_MIN: i64 = 1000;

/// Color intensity bucket for a day's delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum HeatmapLevel {
    /// No net writing (or net deletion).
    #[default]
    None,
    Low,
    Medium,
    High,
    Peak,
}

impl HeatmapLevel {
    /// Bucket a signed daily delta.
    #[must_use]
    pub const fn from_delta(delta: i64) -> Self {
        if delta <= 0 {
            Self::None
        } else if delta < LEVEL_2_MIN {
            Self::Low
        } else if delta < LEVEL_3_MIN {
            Self::Medium
        } else if delta < LEVEL_4_MIN {
            Self::High
        } else {
            Self::Peak
        }
    }

    /// Numeric level in `0..=4`.
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        match self {
            Self::None => 0,
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
            Self::Peak => 4,
        }
    }
}

impl Serialize for HeatmapLevel {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.as_u8())
    }
}

/// One day of the heatmap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeatmapCell {
    #[serde(serialize_with = "serialize_date")]
    pub date: NaiveDate,
    /// Positive part of the delta; deletions display as 0.
    pub count: u64,
    pub level: HeatmapLevel,
}

/// Inclusive range of days rendered by the heatmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeatmapWindow {
    start: NaiveDate,
    end: NaiveDate,
}

impl HeatmapWindow {
    /// July 1 of `today`'s previous year through December 31 of `today`'s year.
    #[must_use]
    pub fn for_today(today: NaiveDate) -> Self {
        let year = today.year();
        // Both dates exist in every year chrono can represent around `today`.
        let start = NaiveDate::from_ymd_opt(year - 1, 7, 1).unwrap_or(today);
        let end = NaiveDate::from_ymd_opt(year, 12, 31).unwrap_or(today);
        Self { start, end }
    }

    /// Arbitrary inclusive window; `start` and `end` are swapped if reversed.
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
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of days in the window.
    #[must_use]
    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)] // end >= start
    pub fn len(&self) -> usize {
        ((self.end - self.start).num_days() + 1) as usize
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Every day of the window in order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |day| *day <= end)
    }
}

/// Build the heatmap for the standard window around `today`.
#[must_use]
pub fn build_heatmap(snapshots: &[DailySnapshot], today: NaiveDate) -> Vec<HeatmapCell> {
    build_heatmap_in(&aggregate(snapshots), HeatmapWindow::for_today(today))
}

/// Build one cell per day of `window` from pre-aggregated totals.
#[must_use]
pub fn build_heatmap_in(totals: &DailyTotals, window: HeatmapWindow) -> Vec<HeatmapCell> {
    let mut cells = Vec::with_capacity(window.len());
    let mut previous_total: i64 = 0;

    for day in window.days() {
        let total = signed_total(totals.get(day));
        let delta = total.saturating_sub(previous_total);
        previous_total = total;

        cells.push(HeatmapCell {
            date: day,
            count: delta.max(0).unsigned_abs(),
            level: HeatmapLevel::from_delta(delta),
        });
    }

    cells
}

pub(crate) fn serialize_date<S: serde::Serializer>(
    date: &NaiveDate,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_iso_date(*date))
}

#[cfg(test)]
#[path = "heatmap_tests.rs"]
mod tests;
