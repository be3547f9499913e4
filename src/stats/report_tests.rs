use super::*;
use crate::stats::DuplicatePolicy;
use crate::stats::test_support::{date, snap};

fn history() -> Vec<DailySnapshot> {
    vec![
        snap("2024-01-01", "ch-1", 100),
        snap("2024-01-02", "ch-1", 250),
        snap("2024-01-03", "ch-1", 300),
        snap("2024-01-03", "ch-2", 100),
    ]
}

#[test]
fn combines_all_views() {
    let report = WritingReport::build(&history(), date("2024-01-03"), &StatsConfig::default());

    assert_eq!(report.today_total, 400);
    assert_eq!(report.today_change, 150);
    assert_eq!(report.current_streak, 2);
    assert_eq!(report.longest_streak, 2);
    assert_eq!(report.active_days, 3);
    assert_eq!(report.total_snapshots, 4);
    assert_eq!(report.entities, 2);
    assert_eq!(report.cumulative.len(), 3);
    assert_eq!(
        report.heatmap.len(),
        HeatmapWindow::for_today(date("2024-01-03")).len()
    );
}

#[test]
fn empty_history_report() {
    let report = WritingReport::build(&[], date("2024-01-03"), &StatsConfig::default());

    assert!(report.is_empty());
    assert_eq!(report.current_streak, 0);
    assert_eq!(report.today_change, 0);
    assert!(report.cumulative.is_empty());
    assert!(!report.heatmap.is_empty());
}

#[test]
fn honors_streak_policy() {
    let config = StatsConfig {
        streak_policy: StreakPolicy::Latest,
        ..StatsConfig::default()
    };
    let report = WritingReport::build(&history(), date("2024-01-10"), &config);

    assert_eq!(report.current_streak, 2);
    assert_eq!(report.streak_policy, StreakPolicy::Latest);
}

#[test]
fn honors_duplicate_policy() {
    let snapshots = vec![snap("2024-01-01", "a", 100), snap("2024-01-01", "a", 300)];
    let config = StatsConfig {
        duplicates: DuplicatePolicy::Last,
        ..StatsConfig::default()
    };

    let report = WritingReport::build(&snapshots, date("2024-01-01"), &config);

    assert_eq!(report.today_total, 300);
}

#[test]
fn recent_points_keeps_tail() {
    let report = WritingReport::build(&history(), date("2024-01-03"), &StatsConfig::default());

    let recent = report.recent_points(2);
    assert_eq!(recent.len(), 2);
    assert_eq!(recent[1].date, date("2024-01-03"));
    assert_eq!(report.recent_points(50).len(), 3);
}
