use super::*;

#[test]
fn short_label_is_month_and_day() {
    let point = DataPoint::new(NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(), 10.0, 2);
    assert_eq!(point.short_label(), "03/04");
}
