// Tests for report date windows
//
// - A single-day window covers 00:00:00 through 23:59:59 inclusive
// - Neighbouring days fall outside
// - Only YYYY-MM-DD is accepted; empty strings count as absent
// - Undated documents match only an unbounded window

use chrono::{Duration, NaiveDate, NaiveDateTime};
use proptest::prelude::*;
use quotation_analytics::core::date_range::parse_date_param;
use quotation_analytics::core::{AppError, DateRange};

fn ts(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").unwrap()
}

#[test]
fn test_reference_day_window() {
    let range = DateRange::parse(Some("2026-01-01"), Some("2026-01-01")).unwrap();

    assert!(range.contains(Some(ts("2026-01-01T00:00:00"))));
    assert!(range.contains(Some(ts("2026-01-01T23:59:59"))));
    assert!(!range.contains(Some(ts("2025-12-31T23:59:59"))));
    assert!(!range.contains(Some(ts("2026-01-02T00:00:00"))));
}

#[test]
fn test_open_ended_windows() {
    let from = DateRange::parse(Some("2026-01-01"), None).unwrap();
    assert!(from.contains(Some(ts("2030-06-01T08:00:00"))));
    assert!(!from.contains(Some(ts("2025-12-31T23:59:59"))));

    let until = DateRange::parse(None, Some("2026-01-01")).unwrap();
    assert!(until.contains(Some(ts("1999-01-01T00:00:00"))));
    assert!(!until.contains(Some(ts("2026-01-02T00:00:00"))));
}

#[test]
fn test_undated_documents() {
    assert!(DateRange::unbounded().contains(None));
    assert!(!DateRange::parse(Some("2026-01-01"), None).unwrap().contains(None));
}

#[test]
fn test_empty_params_are_unbounded() {
    let range = DateRange::parse(Some(""), Some("")).unwrap();
    assert!(range.is_unbounded());
}

#[test]
fn test_malformed_dates_name_the_field() {
    for raw in ["2026/01/01", "01-01-2026", "2026-13-01", "2026-02-30", "yesterday"] {
        let err = DateRange::parse(Some(raw), None).unwrap_err();
        assert!(
            matches!(&err, AppError::InvalidDateFormat { field } if field == "startDate"),
            "{raw}: {err:?}"
        );

        let err = DateRange::parse(None, Some(raw)).unwrap_err();
        assert!(
            matches!(&err, AppError::InvalidDateFormat { field } if field == "endDate"),
            "{raw}: {err:?}"
        );
    }
}

#[test]
fn test_parse_date_param() {
    assert_eq!(parse_date_param("startDate", None).unwrap(), None);
    assert_eq!(
        parse_date_param("startDate", Some("2026-03-15")).unwrap(),
        NaiveDate::from_ymd_opt(2026, 3, 15)
    );
}

proptest! {
    #[test]
    fn test_day_window_bounds(days in 0i64..50_000i64, second in 0u32..86_400u32) {
        let date = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap() + Duration::days(days);
        let raw = date.format("%Y-%m-%d").to_string();
        let range = DateRange::parse(Some(&raw), Some(&raw)).unwrap();

        let inside = date.and_hms_opt(0, 0, 0).unwrap() + Duration::seconds(second as i64);
        prop_assert!(range.contains(Some(inside)));

        let before = date.and_hms_opt(0, 0, 0).unwrap() - Duration::seconds(1);
        let after = date.and_hms_opt(23, 59, 59).unwrap() + Duration::seconds(1);
        prop_assert!(!range.contains(Some(before)));
        prop_assert!(!range.contains(Some(after)));
    }
}
