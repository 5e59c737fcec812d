use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Weekday};
use shopdesk_core::time::range::{
    compute_range, in_range, FiscalYearStart, RangeKind, TimeRange,
};

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

fn end_of_day(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_milli_opt(23, 59, 59, 999)
        .unwrap()
}

#[test]
fn every_named_range_contains_now() {
    let fiscal = FiscalYearStart::default();
    let samples = [
        at(2025, 3, 15, 0, 0),
        at(2025, 4, 1, 0, 0),
        at(2024, 2, 29, 23, 59),
        at(2025, 12, 31, 12, 30),
        at(2025, 10, 12, 9, 0),
    ];
    for now in samples {
        for kind in [
            RangeKind::Today,
            RangeKind::Week,
            RangeKind::Month,
            RangeKind::FiscalYear,
        ] {
            let range = compute_range(kind, now, fiscal);
            assert!(range.contains(now), "{kind:?} range misses {now}");
        }
    }
}

#[test]
fn today_spans_midnight_to_last_millisecond() {
    let range = compute_range(RangeKind::Today, at(2025, 10, 14, 16, 30), FiscalYearStart::default());
    assert_eq!(range.start, Some(at(2025, 10, 14, 0, 0)));
    assert_eq!(range.end, Some(end_of_day(2025, 10, 14)));
}

#[test]
fn week_starts_on_sunday_and_spans_seven_days() {
    for offset in 0..14 {
        let now = at(2025, 10, 1, 10, 0) + Duration::days(offset);
        let range = compute_range(RangeKind::Week, now, FiscalYearStart::default());
        let start = range.start.unwrap();
        let end = range.end.unwrap();
        assert_eq!(start.weekday(), Weekday::Sun);
        assert_eq!(end.weekday(), Weekday::Sat);
        assert_eq!((end.date() - start.date()).num_days(), 6);
        assert_eq!(end, end_of_day(end.year(), end.month(), end.day()));
    }
}

#[test]
fn week_on_a_sunday_starts_that_day() {
    let sunday = at(2025, 10, 12, 8, 0);
    let range = compute_range(RangeKind::Week, sunday, FiscalYearStart::default());
    assert_eq!(range.start, Some(at(2025, 10, 12, 0, 0)));
    assert_eq!(range.end, Some(end_of_day(2025, 10, 18)));
}

#[test]
fn month_covers_leap_february() {
    let range = compute_range(RangeKind::Month, at(2024, 2, 10, 9, 0), FiscalYearStart::default());
    assert_eq!(range.start, Some(at(2024, 2, 1, 0, 0)));
    assert_eq!(range.end, Some(end_of_day(2024, 2, 29)));

    let december = compute_range(RangeKind::Month, at(2025, 12, 31, 23, 0), FiscalYearStart::default());
    assert_eq!(december.end, Some(end_of_day(2025, 12, 31)));
}

#[test]
fn fiscal_year_before_start_uses_previous_year() {
    let range = compute_range(
        RangeKind::FiscalYear,
        at(2025, 3, 15, 10, 0),
        FiscalYearStart::new(4, 1).unwrap(),
    );
    assert_eq!(range.start, Some(at(2024, 4, 1, 0, 0)));
    assert_eq!(range.end, Some(end_of_day(2025, 3, 31)));
}

#[test]
fn fiscal_year_on_or_after_start_uses_current_year() {
    let fiscal = FiscalYearStart::new(4, 1).unwrap();
    let range = compute_range(RangeKind::FiscalYear, at(2025, 4, 15, 10, 0), fiscal);
    assert_eq!(range.start, Some(at(2025, 4, 1, 0, 0)));
    assert_eq!(range.end, Some(end_of_day(2026, 3, 31)));

    let boundary = compute_range(RangeKind::FiscalYear, at(2025, 4, 1, 0, 0), fiscal);
    assert_eq!(boundary.start, Some(at(2025, 4, 1, 0, 0)));
}

#[test]
fn in_range_treats_missing_bounds_as_unbounded() {
    let ts = at(2025, 10, 14, 12, 0);
    assert!(in_range(ts, None, None));
    assert!(in_range(ts, Some(ts), Some(ts)));
    assert!(in_range(ts, None, Some(ts)));
    assert!(!in_range(ts, Some(ts + Duration::milliseconds(1)), None));
    assert!(!in_range(ts, None, Some(ts - Duration::milliseconds(1))));
}

#[test]
fn custom_dates_end_at_last_second_of_day() {
    let range = TimeRange::custom_dates(
        NaiveDate::from_ymd_opt(2025, 10, 1).unwrap(),
        NaiveDate::from_ymd_opt(2025, 10, 14).unwrap(),
    );
    assert!(range.contains(at(2025, 10, 14, 23, 59)));
    assert!(!range.contains(end_of_day(2025, 10, 14)));
    assert!(!range.contains(at(2025, 10, 15, 0, 0)));
}

#[test]
fn custom_kind_has_no_canonical_bounds() {
    let range = compute_range(RangeKind::Custom, at(2025, 10, 14, 12, 0), FiscalYearStart::default());
    assert_eq!(range, TimeRange::UNBOUNDED);
}
