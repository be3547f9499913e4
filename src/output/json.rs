use serde::Serialize;

use crate::error::Result;
use crate::stats::{CumulativePoint, HeatmapCell, StreakPolicy, WritingReport};

use super::ReportFormatter;

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    today: String,
    summary: Summary,
    heatmap: &'a [HeatmapCell],
    cumulative: &'a [CumulativePoint],
}

#[derive(Serialize)]
struct Summary {
    today_total: u64,
    today_change: i64,
    current_streak: u32,
    longest_streak: u32,
    streak_policy: StreakPolicy,
    active_days: usize,
    total_snapshots: usize,
    entities: usize,
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &WritingReport) -> Result<String> {
        let output = JsonOutput {
            today: crate::snapshot::format_iso_date(report.today),
            summary: Summary {
                today_total: report.today_total,
                today_change: report.today_change,
                current_streak: report.current_streak,
                longest_streak: report.longest_streak,
                streak_policy: report.streak_policy,
                active_days: report.active_days,
                total_snapshots: report.total_snapshots,
                entities: report.entities,
            },
            heatmap: &report.heatmap,
            cumulative: &report.cumulative,
        };

        to_json(&output)
    }
}

/// Pretty-printed JSON for any serializable view.
///
/// # Errors
/// Returns an error if serialization fails.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
