use chrono::NaiveDate;
use serde::Serialize;

use super::aggregate::aggregate_with;
use super::cumulative::{CumulativePoint, build_cumulative_from};
use super::heatmap::{HeatmapCell, HeatmapLevel, HeatmapWindow, build_heatmap_in, serialize_date};
use super::streak::{StreakPolicy, current_streak_from, longest_streak_from};
use super::today::today_word_change_from;
use crate::config::StatsConfig;
use crate::snapshot::DailySnapshot;

/// Every derived view of a snapshot history, computed once per invocation.
#[derive(Debug, Clone, Serialize)]
pub struct WritingReport {
    #[serde(serialize_with = "serialize_date")]
    pub today: NaiveDate,
    pub today_total: u64,
    pub today_change: i64,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub streak_policy: StreakPolicy,
    /// Heatmap days with any net writing.
    pub active_days: usize,
    pub total_snapshots: usize,
    pub entities: usize,
    pub heatmap: Vec<HeatmapCell>,
    pub cumulative: Vec<CumulativePoint>,
}

impl WritingReport {
    #[must_use]
    pub fn build(snapshots: &[DailySnapshot], today: NaiveDate, config: &StatsConfig) -> Self {
        let totals = aggregate_with(snapshots, config.duplicates);
        let heatmap = build_heatmap_in(&totals, HeatmapWindow::for_today(today));
        let active_days = heatmap
            .iter()
            .filter(|cell| cell.level != HeatmapLevel::None)
            .count();

        let mut entities: Vec<&str> = snapshots.iter().map(DailySnapshot::entity_id).collect();
        entities.sort_unstable();
        entities.dedup();

        Self {
            today,
            today_total: totals.get(today),
            today_change: today_word_change_from(&totals, today),
            current_streak: current_streak_from(&totals, today, config.streak_policy),
            longest_streak: longest_streak_from(&totals),
            streak_policy: config.streak_policy,
            active_days,
            total_snapshots: snapshots.len(),
            entities: entities.len(),
            heatmap,
            cumulative: build_cumulative_from(&totals),
        }
    }

    /// The most recent `n` trend points, oldest first.
    #[must_use]
    pub fn recent_points(&self, n: usize) -> &[CumulativePoint] {
        let start = self.cumulative.len().saturating_sub(n);
        &self.cumulative[start..]
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total_snapshots == 0
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
