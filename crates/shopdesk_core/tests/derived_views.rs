use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use shopdesk_core::model::appointment::AppointmentStatus;
use shopdesk_core::model::history::Section;
use shopdesk_core::model::staff::{Staff, StaffRole};
use shopdesk_core::store::seed::default_data;
use shopdesk_core::view::export::{ExportRow, ExportSource, RowExporter};
use shopdesk_core::view::slots::booking_slots;
use shopdesk_core::view::stats::NO_LEADER;
use shopdesk_core::view::ALL_BARBERS;
use shopdesk_core::{
    compute_range, FiscalYearStart, OrgSettings, RangeKind, ShopData, ShopView, TimeRange,
};

fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 10, 15)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn month_view<'a>(data: &'a ShopData, settings: &'a OrgSettings) -> ShopView<'a> {
    let range = compute_range(RangeKind::Month, now(), FiscalYearStart::default());
    ShopView::new(data, range, now(), settings)
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn sales_and_appointments_follow_the_active_range() {
    let data = default_data();
    let settings = OrgSettings::default();
    let view = month_view(&data, &settings);

    assert_eq!(view.sales().len(), 3);
    // Seed bookings are in November.
    assert!(view.appointments().is_empty());

    let november = ShopView::new(
        &data,
        TimeRange::custom_dates(date(2025, 11, 2), date(2025, 11, 2)),
        now(),
        &settings,
    );
    assert_eq!(november.appointments().len(), 2);
    assert!(november.sales().is_empty());
    assert_eq!(november.appointments_by_barber("Rajesh Kumar").len(), 1);
    assert_eq!(november.appointments_by_barber(ALL_BARBERS).len(), 2);
}

#[test]
fn appointments_for_date_ignore_the_range() {
    let data = default_data();
    let settings = OrgSettings::default();
    let view = month_view(&data, &settings);

    let on_day = view.appointments_for_date(date(2025, 11, 2));
    assert_eq!(on_day.len(), 2);
    assert_eq!(on_day[0].customer, "Arjun Sharma");
}

#[test]
fn sales_summary_and_groupings() {
    let data = default_data();
    let settings = OrgSettings::default();
    let view = month_view(&data, &settings);

    let summary = view.sales_summary();
    assert_eq!(summary.count, 3);
    assert_close(summary.revenue, 1000.0);
    assert_close(summary.average_ticket, 1000.0 / 3.0);

    let by_barber = view.sales_by_barber();
    assert_eq!(by_barber.len(), 2);
    assert_eq!(by_barber[0].0, "Rajesh");
    assert_eq!(by_barber[0].1.count, 2);
    assert_close(by_barber[0].1.revenue, 500.0);

    let by_service = view.sales_by_service();
    let services: Vec<&str> = by_service.iter().map(|(name, _)| name.as_str()).collect();
    assert_eq!(services, vec!["Haircut", "Hair Color", "Beard Trim"]);
}

#[test]
fn empty_range_reports_zero_average() {
    let data = ShopData::default();
    let settings = OrgSettings::default();
    let view = month_view(&data, &settings);

    let summary = view.sales_summary();
    assert_eq!(summary.count, 0);
    assert_close(summary.average_ticket, 0.0);

    let report = view.report_summary();
    assert_eq!(report.top_service.name, NO_LEADER);
    assert_eq!(report.top_barber.name, NO_LEADER);
    assert_close(report.average_ticket, 0.0);
    assert!(report.service_distribution.is_empty());
}

#[test]
fn period_totals_use_calendar_bounds() {
    let data = default_data();
    let settings = OrgSettings::default();
    let view = month_view(&data, &settings);

    let periods = view.sales_by_period();
    assert_close(periods.today, 0.0);
    assert_close(periods.week, 1000.0);
    assert_close(periods.month, 1000.0);
}

#[test]
fn appointment_stats_count_each_status() {
    let mut data = default_data();
    data.appointments[0].status = AppointmentStatus::Completed;
    let settings = OrgSettings::default();
    let view = ShopView::new(&data, TimeRange::UNBOUNDED, now(), &settings);

    let stats = view.appointment_stats();
    assert_eq!(stats.total, 3);
    assert_eq!(stats.completed, 1);
    assert_eq!(stats.confirmed, 1);
    assert_eq!(stats.pending, 1);
    assert_eq!(stats.cancelled, 0);
    assert_eq!(view.appointments_by_status(AppointmentStatus::Pending).len(), 1);
}

#[test]
fn report_summary_ranks_by_appointment_count() {
    let data = default_data();
    let settings = OrgSettings::default();
    let view = month_view(&data, &settings);

    let report = view.report_summary();
    assert_close(report.monthly_revenue, 1000.0);
    assert_close(report.average_ticket, 1000.0 / 3.0);
    // Every service has one booking; the first seen wins the tie.
    assert_eq!(report.top_service.name, "Haircut");
    assert_eq!(report.top_service.count, 1);
    assert_eq!(report.top_barber.name, "Rajesh Kumar");
    assert_eq!(report.top_barber.count, 2);
    assert_eq!(
        report.service_distribution,
        vec![
            ("Haircut".to_string(), 1),
            ("Hair Color".to_string(), 1),
            ("Hair + Beard".to_string(), 1),
        ]
    );
}

#[test]
fn open_slots_respect_schedule_overrides_and_bookings() {
    let mut data = default_data();
    let settings = OrgSettings::default();

    {
        let view = month_view(&data, &settings);
        // Monday 2025-11-03: 09:00-18:00 with a 14:00 booking.
        let monday = view.open_slots("Rajesh Kumar", date(2025, 11, 3));
        assert_eq!(monday.len(), 17);
        assert_eq!(monday[0].value, "09:00");
        assert_eq!(monday.last().unwrap().value, "17:30");
        assert!(monday.iter().all(|slot| slot.value != "14:00"));

        // Override on 2025-10-20: 10:00-17:00.
        let overridden = view.open_slots("Rajesh Kumar", date(2025, 10, 20));
        assert_eq!(overridden.len(), 14);
        assert_eq!(overridden[0].label, "10:00 AM");

        assert!(view.open_slots("Rajesh Kumar", date(2025, 11, 9)).is_empty());
        assert!(view.open_slots("Nobody", date(2025, 11, 3)).is_empty());
    }

    data.appointments[2].status = AppointmentStatus::Cancelled;
    let view = month_view(&data, &settings);
    assert_eq!(view.open_slots("Rajesh Kumar", date(2025, 11, 3)).len(), 18);
    assert!(view
        .appointment_at("Rajesh Kumar", date(2025, 11, 3), NaiveTime::from_hms_opt(14, 0, 0).unwrap())
        .is_none());
}

#[test]
fn booking_slots_follow_settings() {
    let settings = OrgSettings {
        open_hour: 10,
        close_hour: 12,
        slot_minutes: 45,
        ..OrgSettings::default()
    };
    let values: Vec<String> = booking_slots(&settings)
        .into_iter()
        .map(|slot| slot.value)
        .collect();
    assert_eq!(values, vec!["10:00", "10:45", "11:30"]);
}

#[test]
fn roster_stock_and_history_views() {
    let mut data = default_data();
    data.staff.push(Staff::new("Neha Verma", StaffRole::Receptionist, ""));
    data.inventory[3].quantity = 1;
    let settings = OrgSettings::default();
    let view = month_view(&data, &settings);

    let barbers: Vec<&str> = view.barbers().iter().map(|m| m.name.as_str()).collect();
    assert_eq!(barbers, vec!["Rajesh Kumar", "Suresh Patel", "Amit Singh"]);

    let low: Vec<&str> = view.low_stock().iter().map(|i| i.name.as_str()).collect();
    assert_eq!(low, vec!["Hair Clippers"]);

    assert_eq!(view.history(None).len(), 2);
    let sales_history = view.history(Some(Section::Sales));
    assert_eq!(sales_history.len(), 1);
    assert_eq!(sales_history[0].details, "Rohit Kumar - Beard Trim");
}

#[derive(Default)]
struct RecordingExporter {
    files: Vec<(String, Vec<ExportRow>)>,
}

impl RowExporter for RecordingExporter {
    type Error = String;

    fn export(&mut self, rows: &[ExportRow], filename: &str) -> Result<(), Self::Error> {
        if rows.is_empty() {
            return Err(format!("nothing to export for {filename}"));
        }
        self.files.push((filename.to_string(), rows.to_vec()));
        Ok(())
    }
}

#[test]
fn export_rows_use_range_for_dated_collections_only() {
    let data = default_data();
    let settings = OrgSettings::default();
    let view = month_view(&data, &settings);

    assert!(view.export_rows(ExportSource::Appointments).is_empty());
    assert_eq!(view.export_rows(ExportSource::Customers).len(), 3);

    let sales = view.export_rows(ExportSource::Sales);
    assert_eq!(sales.len(), 3);
    assert_eq!(sales[0].get("payment"), Some("UPI"));
    assert_eq!(sales[0].get("date"), Some("2025-10-12T09:45:00"));
    assert_eq!(
        sales[0].columns().collect::<Vec<_>>(),
        vec!["id", "date", "customer", "service", "barber", "amount", "payment"]
    );

    let inventory = view.export_rows(ExportSource::Inventory);
    assert_eq!(inventory[0].get("category"), Some("Hair Products"));
    assert_eq!(inventory[0].get("status"), Some("in_stock"));
}

#[test]
fn export_to_hands_rows_to_the_exporter() {
    let data = default_data();
    let settings = OrgSettings::default();
    let view = month_view(&data, &settings);
    let mut exporter = RecordingExporter::default();

    view.export_to(ExportSource::Staff, &mut exporter).unwrap();
    assert!(view.export_to(ExportSource::Appointments, &mut exporter).is_err());

    assert_eq!(exporter.files.len(), 1);
    let (filename, rows) = &exporter.files[0];
    assert_eq!(filename, "staff.csv");
    assert_eq!(rows[0].get("role"), Some("Senior Barber"));
    assert_eq!(rows[2].get("schedule"), Some("Mon-Sat 9AM-6PM"));
}
