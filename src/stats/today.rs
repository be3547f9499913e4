use chrono::NaiveDate;

use super::aggregate::{DailyTotals, aggregate, signed_total};
use crate::snapshot::DailySnapshot;

/// Aggregated word total recorded on `today`.
#[must_use]
pub fn today_total(snapshots: &[DailySnapshot], today: NaiveDate) -> u64 {
    aggregate(snapshots).get(today)
}

/// Words gained today relative to the most recent earlier recorded day.
///
/// Returns 0 while nothing has been recorded today, so an unsaved day never
/// shows as a loss. Negative when today's total dropped.
#[must_use]
pub fn today_word_change(snapshots: &[DailySnapshot], today: NaiveDate) -> i64 {
    today_word_change_from(&aggregate(snapshots), today)
}

#[must_use]
pub fn today_word_change_from(totals: &DailyTotals, today: NaiveDate) -> i64 {
    let today_total = totals.get(today);
    if today_total == 0 {
        return 0;
    }

    let previous = totals.latest_before(today).map_or(0, |(_, total)| total);
    signed_total(today_total).saturating_sub(signed_total(previous))
}

#[cfg(test)]
#[path = "today_tests.rs"]
mod tests;
