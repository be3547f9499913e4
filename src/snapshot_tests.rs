use super::*;

#[test]
fn parses_iso_date() {
    let date = parse_iso_date("2024-02-29").unwrap();
    assert_eq!(date, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    assert_eq!(format_iso_date(date), "2024-02-29");
}

#[test]
fn rejects_non_padded_date() {
    assert!(parse_iso_date("2024-1-05").is_err());
    assert!(parse_iso_date("2024-01-5").is_err());
}

#[test]
fn rejects_impossible_calendar_day() {
    assert!(matches!(
        parse_iso_date("2023-02-29"),
        Err(InkstreakError::InvalidDate { .. })
    ));
    assert!(parse_iso_date("2024-13-01").is_err());
}

#[test]
fn rejects_other_separators_and_garbage() {
    assert!(parse_iso_date("2024/01/01").is_err());
    assert!(parse_iso_date("").is_err());
    assert!(parse_iso_date("yesterday").is_err());
    assert!(parse_iso_date("+2024-01-01").is_err());
}

#[test]
fn parse_rejects_negative_word_count() {
    let err = DailySnapshot::parse("2024-01-01", "ch-1", -1).unwrap_err();
    assert!(matches!(
        err,
        InkstreakError::InvalidSnapshot {
            field: "word_count",
            ..
        }
    ));
}

#[test]
fn parse_rejects_blank_entity() {
    let err = DailySnapshot::parse("2024-01-01", "  ", 10).unwrap_err();
    assert!(matches!(
        err,
        InkstreakError::InvalidSnapshot {
            field: "entity_id",
            ..
        }
    ));
}

#[test]
fn parse_accepts_zero_words() {
    let snapshot = DailySnapshot::parse("2024-01-01", "ch-1", 0).unwrap();
    assert_eq!(snapshot.word_count(), 0);
    assert_eq!(snapshot.entity_id(), "ch-1");
}

#[test]
fn json_uses_iso_date_string() {
    let snapshot = DailySnapshot::parse("2024-03-09", "doc", 120).unwrap();
    let json = serde_json::to_string(&snapshot).unwrap();
    assert_eq!(
        json,
        r#"{"date":"2024-03-09","entity_id":"doc","word_count":120}"#
    );
}

#[test]
fn json_accepts_legacy_entity_field_names() {
    let from_document: DailySnapshot =
        serde_json::from_str(r#"{"date":"2024-03-09","document_id":"d1","word_count":5}"#)
            .unwrap();
    let from_owner: DailySnapshot = serde_json::from_str(
        r#"{"date":"2024-03-09","owner_entity_id":"c1","word_count":5}"#,
    )
    .unwrap();

    assert_eq!(from_document.entity_id(), "d1");
    assert_eq!(from_owner.entity_id(), "c1");
}

#[test]
fn json_rejects_malformed_rows() {
    let bad_date =
        serde_json::from_str::<DailySnapshot>(r#"{"date":"03/09/2024","entity_id":"d","word_count":5}"#);
    let negative =
        serde_json::from_str::<DailySnapshot>(r#"{"date":"2024-03-09","entity_id":"d","word_count":-5}"#);

    assert!(bad_date.is_err());
    assert!(negative.is_err());
}

#[test]
fn rejects_word_count_beyond_log_range() {
    let day = NaiveDate::from_ymd_opt(2024, 3, 3).unwrap();
    let err = DailySnapshot::new(day, "ch-1", MAX_WORD_COUNT + 1).unwrap_err();
    assert!(matches!(
        err,
        InkstreakError::InvalidSnapshot { field: "word_count", .. }
    ));
    assert!(DailySnapshot::new(day, "ch-1", u64::MAX).is_err());
}

#[test]
fn largest_word_count_survives_json() {
    let day = NaiveDate::from_ymd_opt(2024, 3, 3).unwrap();
    let snapshot = DailySnapshot::new(day, "ch-1", MAX_WORD_COUNT).unwrap();

    let json = serde_json::to_string(&snapshot).unwrap();
    assert!(json.contains(&format!("\"word_count\":{}", i64::MAX)));

    let back: DailySnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back, snapshot);
}
