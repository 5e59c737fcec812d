//! CLI smoke entry point.
//!
//! Opens a seeded in-memory store and prints deterministic smoke lines.

use chrono::NaiveDate;
use shopdesk_core::{FixedClock, MemorySnapshotRepository, OrgSettings, ShopStore};

fn main() {
    println!("shopdesk_core ping={}", shopdesk_core::ping());
    println!("shopdesk_core version={}", shopdesk_core::core_version());

    let Some(sample_day) = NaiveDate::from_ymd_opt(2025, 10, 15) else {
        return;
    };
    let Some(noon) = sample_day.and_hms_opt(12, 0, 0) else {
        return;
    };
    let store = ShopStore::open(
        MemorySnapshotRepository::new(),
        FixedClock::at_local(noon),
        OrgSettings::default(),
    );

    let data = store.data();
    println!(
        "seed appointments={} sales={} staff={} inventory={} customers={} history={}",
        data.appointments.len(),
        data.sales.len(),
        data.staff.len(),
        data.inventory.len(),
        data.customers.len(),
        data.history.len()
    );

    let availability = store.availability();
    for member in &data.staff {
        let window = availability
            .get_availability(&member.name, sample_day)
            .map(|window| format!("{}-{}", window.start.format("%H:%M"), window.end.format("%H:%M")))
            .unwrap_or_else(|| "off".to_string());
        println!("availability {} {}={}", sample_day, member.name, window);
    }
}
