use chrono::NaiveDate;
use serde::Serialize;

use super::aggregate::{DailyTotals, aggregate, signed_total};
use super::heatmap::serialize_date;
use crate::snapshot::DailySnapshot;

/// One recorded day on the trend line.
///
/// Snapshots are absolute totals, so `cumulative` is the day's aggregated
/// total as-is; `daily` reconstructs the change from the previous recorded day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CumulativePoint {
    #[serde(serialize_with = "serialize_date")]
    pub date: NaiveDate,
    pub cumulative: u64,
    pub daily: i64,
}

/// Build the sparse trend series: one point per recorded date, ascending.
#[must_use]
pub fn build_cumulative(snapshots: &[DailySnapshot]) -> Vec<CumulativePoint> {
    build_cumulative_from(&aggregate(snapshots))
}

#[must_use]
pub fn build_cumulative_from(totals: &DailyTotals) -> Vec<CumulativePoint> {
    let mut previous: i64 = 0;
    totals
        .ascending()
        .map(|(date, total)| {
            let current = signed_total(total);
            let daily = current.saturating_sub(previous);
            previous = current;
            CumulativePoint {
                date,
                cumulative: total,
                daily,
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "cumulative_tests.rs"]
mod tests;
