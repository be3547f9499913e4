use super::*;
use crate::stats::test_support::{date, snap};

#[test]
fn empty_input_yields_empty_totals() {
    let totals = aggregate(&[]);
    assert!(totals.is_empty());
    assert_eq!(totals.len(), 0);
    assert!(totals.latest().is_none());
}

#[test]
fn sums_entities_sharing_a_date() {
    let snapshots = vec![
        snap("2024-05-01", "chapter-a", 30),
        snap("2024-05-01", "chapter-b", 70),
    ];

    let totals = aggregate(&snapshots);

    assert_eq!(totals.len(), 1);
    assert_eq!(totals.get(date("2024-05-01")), 100);
}

#[test]
fn missing_day_reads_as_zero() {
    let totals = aggregate(&[snap("2024-05-01", "a", 10)]);
    assert_eq!(totals.get(date("2024-05-02")), 0);
    assert!(!totals.contains(date("2024-05-02")));
}

#[test]
fn order_of_input_does_not_matter() {
    let rows = vec![
        snap("2024-05-03", "a", 5),
        snap("2024-05-01", "b", 7),
        snap("2024-05-01", "a", 11),
        snap("2024-05-02", "c", 13),
    ];
    let mut reversed = rows.clone();
    reversed.reverse();
    let mut rotated = rows.clone();
    rotated.rotate_left(2);

    let expected = aggregate(&rows);
    assert_eq!(aggregate(&reversed), expected);
    assert_eq!(aggregate(&rotated), expected);
}

#[test]
fn ascending_and_descending_are_mirror_images() {
    let totals = aggregate(&[
        snap("2024-05-03", "a", 3),
        snap("2024-05-01", "a", 1),
        snap("2024-05-02", "a", 2),
    ]);

    let asc: Vec<_> = totals.ascending().map(|(_, t)| t).collect();
    let desc: Vec<_> = totals.descending().map(|(_, t)| t).collect();

    assert_eq!(asc, vec![1, 2, 3]);
    assert_eq!(desc, vec![3, 2, 1]);
    assert_eq!(totals.latest(), Some((date("2024-05-03"), 3)));
}

#[test]
fn latest_before_skips_gaps() {
    let totals = aggregate(&[snap("2024-05-01", "a", 40), snap("2024-05-05", "a", 90)]);

    assert_eq!(
        totals.latest_before(date("2024-05-05")),
        Some((date("2024-05-01"), 40))
    );
    assert_eq!(totals.latest_before(date("2024-05-01")), None);
}

#[test]
fn duplicate_rows_are_summed_by_default() {
    let rows = vec![snap("2024-05-01", "a", 40), snap("2024-05-01", "a", 60)];
    assert_eq!(aggregate(&rows).get(date("2024-05-01")), 100);
}

#[test]
fn last_policy_keeps_final_duplicate() {
    let rows = vec![
        snap("2024-05-01", "a", 40),
        snap("2024-05-01", "b", 5),
        snap("2024-05-01", "a", 60),
    ];

    let totals = aggregate_with(&rows, DuplicatePolicy::Last);

    assert_eq!(totals.get(date("2024-05-01")), 65);
}

#[test]
fn duplicate_policy_deserializes_from_lowercase() {
    #[derive(serde::Deserialize)]
    struct Wrapper {
        policy: DuplicatePolicy,
    }

    let sum: Wrapper = toml::from_str(r#"policy = "sum""#).unwrap();
    let last: Wrapper = toml::from_str(r#"policy = "last""#).unwrap();

    assert_eq!(sum.policy, DuplicatePolicy::Sum);
    assert_eq!(last.policy, DuplicatePolicy::Last);
}

#[test]
fn duplicate_policy_display_matches_config_names() {
    assert_eq!(DuplicatePolicy::Sum.to_string(), "sum");
    assert_eq!(DuplicatePolicy::Last.to_string(), "last");
}

#[test]
fn signed_total_saturates() {
    assert_eq!(signed_total(1_200), 1_200);
    assert_eq!(signed_total(u64::MAX), i64::MAX);
}
