//! Writing statistics derived from daily snapshots.
//!
//! Everything here is pure: callers pass the snapshots and the reference
//! `today`, and get freshly allocated views back.

mod aggregate;
mod cumulative;
mod heatmap;
mod report;
mod streak;
mod today;

pub use aggregate::{DailyTotals, DuplicatePolicy, aggregate, aggregate_with};
pub use cumulative::{CumulativePoint, build_cumulative, build_cumulative_from};
pub use heatmap::{
    HeatmapCell, HeatmapLevel, HeatmapWindow, LEVEL_2_MIN, LEVEL_3_MIN, LEVEL_4_MIN,
    build_heatmap, build_heatmap_in,
};
pub use report::WritingReport;
pub use streak::{
    StreakPolicy, current_streak, current_streak_from, current_streak_with, longest_streak,
    longest_streak_from,
};
pub use today::{today_total, today_word_change, today_word_change_from};
