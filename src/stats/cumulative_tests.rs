use super::*;
use crate::stats::test_support::{date, snap};

#[test]
fn empty_input_yields_empty_series() {
    assert!(build_cumulative(&[]).is_empty());
}

#[test]
fn one_point_per_recorded_date_sorted() {
    let snapshots = vec![
        snap("2024-01-05", "a", 500),
        snap("2024-01-01", "a", 100),
        snap("2024-01-03", "a", 250),
    ];

    let points = build_cumulative(&snapshots);

    let dates: Vec<_> = points.iter().map(|p| p.date).collect();
    assert_eq!(
        dates,
        vec![date("2024-01-01"), date("2024-01-03"), date("2024-01-05")]
    );
}

#[test]
fn gaps_are_not_filled() {
    let points = build_cumulative(&[snap("2024-01-01", "a", 1), snap("2024-02-01", "a", 2)]);
    assert_eq!(points.len(), 2);
}

#[test]
fn cumulative_is_day_total_not_running_sum() {
    let snapshots = vec![
        snap("2024-01-01", "a", 100),
        snap("2024-01-01", "b", 50),
        snap("2024-01-02", "a", 120),
        snap("2024-01-02", "b", 50),
    ];

    let points = build_cumulative(&snapshots);

    assert_eq!(points[0].cumulative, 150);
    assert_eq!(points[1].cumulative, 170);
}

#[test]
fn first_daily_equals_its_total() {
    let points = build_cumulative(&[snap("2024-01-01", "a", 300)]);
    assert_eq!(points[0].daily, 300);
}

#[test]
fn daily_can_be_negative() {
    let points = build_cumulative(&[snap("2024-01-01", "a", 300), snap("2024-01-02", "a", 120)]);
    assert_eq!(points[1].daily, -180);
}

#[test]
fn summing_dailies_reproduces_cumulative() {
    let snapshots = vec![
        snap("2024-03-01", "a", 40),
        snap("2024-03-04", "a", 400),
        snap("2024-03-05", "b", 90),
        snap("2024-03-09", "a", 380),
        snap("2024-03-10", "a", 1200),
    ];

    let points = build_cumulative(&snapshots);

    let mut running: i64 = 0;
    for point in &points {
        running += point.daily;
        assert_eq!(running, i64::try_from(point.cumulative).unwrap());
    }
}

#[test]
fn point_serializes_iso_date() {
    let json = serde_json::to_string(&build_cumulative(&[snap("2024-01-01", "a", 3)])).unwrap();
    assert_eq!(json, r#"[{"date":"2024-01-01","cumulative":3,"daily":3}]"#);
}
