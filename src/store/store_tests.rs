use tempfile::TempDir;

use super::*;
use crate::stats::test_support::{date, snap};

fn sample_log() -> SnapshotLog {
    [
        snap("2024-01-01", "ch-1", 100),
        snap("2024-01-02", "ch-1", 250),
        snap("2024-01-02", "ch-2", 40),
        snap("2024-01-05", "ch-2", 90),
    ]
    .into_iter()
    .collect()
}

// =============================================================================
// Upsert Tests
// =============================================================================

#[test]
fn upsert_inserts_new_key() {
    let mut log = SnapshotLog::new();
    assert_eq!(log.upsert(snap("2024-01-01", "ch-1", 10)), UpsertOutcome::Inserted);
    assert_eq!(log.len(), 1);
}

#[test]
fn upsert_same_key_replaces_count() {
    let mut log = SnapshotLog::new();
    log.upsert(snap("2024-01-01", "ch-1", 10));

    let outcome = log.upsert(snap("2024-01-01", "ch-1", 35));

    assert_eq!(outcome, UpsertOutcome::Updated { previous: 10 });
    assert_eq!(log.len(), 1);
    assert_eq!(log.snapshots()[0].word_count(), 35);
}

#[test]
fn upsert_identical_is_unchanged() {
    let mut log = SnapshotLog::new();
    log.upsert(snap("2024-01-01", "ch-1", 10));
    assert_eq!(log.upsert(snap("2024-01-01", "ch-1", 10)), UpsertOutcome::Unchanged);
}

#[test]
fn upsert_keeps_insertion_order_on_update() {
    let mut log = sample_log();
    log.upsert(snap("2024-01-01", "ch-1", 999));

    let first = &log.snapshots()[0];
    assert_eq!(first.date(), date("2024-01-01"));
    assert_eq!(first.word_count(), 999);
}

#[test]
fn extend_counts_changes_only() {
    let mut log = sample_log();
    let changed = log.extend([
        snap("2024-01-01", "ch-1", 100),
        snap("2024-01-06", "ch-1", 300),
        snap("2024-01-05", "ch-2", 95),
    ]);
    assert_eq!(changed, 2);
    assert_eq!(log.len(), 5);
}

// =============================================================================
// Query Tests
// =============================================================================

#[test]
fn range_is_inclusive() {
    let log = sample_log();
    let rows = log.range(date("2024-01-02"), date("2024-01-05"));
    assert_eq!(rows.len(), 3);
    assert!(rows.iter().all(|s| s.date() >= date("2024-01-02")));
}

#[test]
fn range_inverted_is_empty() {
    let log = sample_log();
    assert!(log.range(date("2024-01-05"), date("2024-01-01")).is_empty());
}

#[test]
fn for_entity_filters() {
    let log = sample_log();
    let rows = log.for_entity("ch-2");
    assert_eq!(rows.len(), 2);
    assert!(log.for_entity("missing").is_empty());
}

#[test]
fn entities_sorted_and_distinct() {
    let log = sample_log();
    assert_eq!(log.entities(), vec!["ch-1", "ch-2"]);
}

// =============================================================================
// Retention Tests
// =============================================================================

#[test]
fn retention_without_limit_keeps_everything() {
    let mut log = sample_log();
    let removed = log.apply_retention(&StoreConfig::default(), date("2030-01-01"));
    assert_eq!(removed, 0);
    assert_eq!(log.len(), 4);
}

#[test]
fn retention_drops_old_snapshots() {
    let mut log = sample_log();
    let config = StoreConfig {
        max_age_days: Some(3),
        ..StoreConfig::default()
    };

    // Cutoff is 2024-01-03
    let removed = log.apply_retention(&config, date("2024-01-06"));

    assert_eq!(removed, 3);
    assert_eq!(log.snapshots(), vec![snap("2024-01-05", "ch-2", 90)]);
}

#[test]
fn retention_window_beyond_calendar_keeps_everything() {
    let mut log = sample_log();
    let config = StoreConfig {
        max_age_days: Some(u32::MAX),
        ..StoreConfig::default()
    };
    assert!(crate::config::validate_config_semantics(&crate::config::Config {
        store: config.clone(),
        ..crate::config::Config::default()
    })
    .is_ok());

    let removed = log.apply_retention(&config, date("2024-06-01"));

    assert_eq!(removed, 0);
    assert_eq!(log.len(), 4);
}

// =============================================================================
// Persistence Tests
// =============================================================================

#[test]
fn save_then_load_preserves_rows() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("snapshots.json");
    let log = sample_log();

    assert_eq!(log.save(&path).unwrap(), SaveOutcome::Saved);
    let loaded = SnapshotLog::load(&path).unwrap();

    assert_eq!(loaded, log);
}

#[test]
fn saved_file_has_versioned_layout() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("snapshots.json");
    let _ = sample_log().save(&path).unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();

    assert_eq!(value["version"], 1);
    assert_eq!(value["snapshots"][0]["date"], "2024-01-01");
    assert_eq!(value["snapshots"][0]["entity_id"], "ch-1");
    assert_eq!(value["snapshots"][0]["word_count"], 100);
}

#[test]
fn load_or_default_missing_file_is_empty() {
    let temp_dir = TempDir::new().unwrap();
    let log = SnapshotLog::load_or_default(&temp_dir.path().join("nope.json")).unwrap();
    assert!(log.is_empty());
}

#[test]
fn load_or_default_corrupt_file_is_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("snapshots.json");
    fs::write(&path, "{not json").unwrap();

    assert!(matches!(
        SnapshotLog::load_or_default(&path),
        Err(InkstreakError::Json(_))
    ));
}

#[test]
fn load_rejects_unknown_version() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("snapshots.json");
    fs::write(&path, r#"{"version": 9, "snapshots": []}"#).unwrap();

    let err = SnapshotLog::load(&path).unwrap_err();
    assert!(err.to_string().contains("version 9"));
}

#[test]
fn load_collapses_duplicate_rows() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("snapshots.json");
    fs::write(
        &path,
        r#"{"version": 1, "snapshots": [
            {"date": "2024-01-01", "entity_id": "a", "word_count": 5},
            {"date": "2024-01-01", "entity_id": "a", "word_count": 8}
        ]}"#,
    )
    .unwrap();

    let log = SnapshotLog::load(&path).unwrap();
    assert_eq!(log.snapshots(), vec![snap("2024-01-01", "a", 8)]);
}

#[test]
fn load_rejects_invalid_row() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("snapshots.json");
    fs::write(
        &path,
        r#"{"version": 1, "snapshots": [
            {"date": "2024-02-30", "entity_id": "a", "word_count": 5}
        ]}"#,
    )
    .unwrap();

    assert!(SnapshotLog::load(&path).is_err());
}
