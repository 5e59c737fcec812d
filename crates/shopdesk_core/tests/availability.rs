use chrono::{NaiveDate, NaiveTime};
use shopdesk_core::model::staff::{Staff, StaffOverride, StaffRole};
use shopdesk_core::store::seed::default_data;
use shopdesk_core::AvailabilityResolver;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn hm(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
}

#[test]
fn override_wins_over_matching_schedule() {
    let data = default_data();
    let resolver = AvailabilityResolver::new(&data);

    // Monday; the weekly schedule alone would give 09:00-18:00.
    let window = resolver.get_availability("Rajesh Kumar", date(2025, 10, 20)).unwrap();
    assert!(window.is_override);
    assert_eq!((window.start, window.end), (hm(10, 0), hm(17, 0)));

    let regular = resolver.get_availability("Rajesh Kumar", date(2025, 10, 21)).unwrap();
    assert!(!regular.is_override);
    assert_eq!((regular.start, regular.end), (hm(9, 0), hm(18, 0)));
}

#[test]
fn day_off_and_unknown_staff_are_unavailable() {
    let data = default_data();
    let resolver = AvailabilityResolver::new(&data);

    assert_eq!(resolver.get_availability("Rajesh Kumar", date(2025, 10, 19)), None);
    assert_eq!(resolver.get_availability("Nobody", date(2025, 10, 20)), None);
}

#[test]
fn first_matching_override_wins() {
    let mut data = default_data();
    data.staff_overrides.push(StaffOverride {
        id: 2,
        name: "Rajesh Kumar".to_string(),
        date: date(2025, 10, 20),
        start: hm(12, 0),
        end: hm(14, 0),
    });
    let resolver = AvailabilityResolver::new(&data);
    let window = resolver.get_availability("Rajesh Kumar", date(2025, 10, 20)).unwrap();
    assert_eq!(window.start, hm(10, 0));
}

#[test]
fn override_can_open_a_regular_day_off() {
    let mut data = default_data();
    data.staff_overrides.push(StaffOverride {
        id: 3,
        name: "Suresh Patel".to_string(),
        date: date(2025, 10, 19),
        start: hm(11, 0),
        end: hm(15, 0),
    });
    let resolver = AvailabilityResolver::new(&data);
    assert!(resolver.is_available_at("Suresh Patel", date(2025, 10, 19), hm(11, 0)));
}

#[test]
fn is_available_at_excludes_the_end_minute() {
    let data = default_data();
    let resolver = AvailabilityResolver::new(&data);
    let tuesday = date(2025, 10, 21);

    assert!(resolver.is_available_at("Suresh Patel", tuesday, hm(10, 0)));
    assert!(resolver.is_available_at("Suresh Patel", tuesday, hm(18, 59)));
    assert!(!resolver.is_available_at("Suresh Patel", tuesday, hm(19, 0)));
    assert!(!resolver.is_available_at("Suresh Patel", tuesday, hm(9, 59)));
    assert!(!resolver.is_available_at("Rajesh Kumar", date(2025, 10, 20), hm(17, 0)));
}

#[test]
fn range_grid_covers_every_staff_member_and_date() {
    let mut data = default_data();
    data.staff.push(Staff::new("Walk In", StaffRole::Receptionist, ""));
    let resolver = AvailabilityResolver::new(&data);

    let grid = resolver.availability_for_range(date(2025, 10, 19), date(2025, 10, 25));
    assert_eq!(grid.dates.len(), 7);
    assert_eq!(grid.rows.len(), 4);
    assert_eq!(grid.rows[0].name, "Rajesh Kumar");
    assert!(grid.rows.iter().all(|row| row.days.len() == 7));

    assert!(grid.get("Rajesh Kumar", date(2025, 10, 19)).is_none());
    assert!(grid.get("Rajesh Kumar", date(2025, 10, 20)).unwrap().is_override);
    assert!(grid.get("Walk In", date(2025, 10, 21)).is_none());
    assert!(grid.get("Suresh Patel", date(2025, 10, 25)).is_some());

    assert_eq!(
        grid,
        resolver.availability_for_range(date(2025, 10, 19), date(2025, 10, 25))
    );
}

#[test]
fn inverted_range_yields_empty_grid_dates() {
    let data = default_data();
    let resolver = AvailabilityResolver::new(&data);
    let grid = resolver.availability_for_range(date(2025, 10, 25), date(2025, 10, 19));
    assert!(grid.dates.is_empty());
    assert!(grid.rows.iter().all(|row| row.days.is_empty()));
}
