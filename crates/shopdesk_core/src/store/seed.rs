//! Built-in sample dataset used when no snapshot exists.

use crate::model::aggregate::ShopData;
use crate::model::appointment::{Appointment, AppointmentStatus};
use crate::model::customer::Customer;
use crate::model::history::{HistoryAction, HistoryEntry, Section, DEFAULT_ACTOR};
use crate::model::inventory::{InventoryCategory, InventoryItem};
use crate::model::sale::{PaymentMethod, Sale};
use crate::model::staff::{Staff, StaffOverride, StaffRole, StaffStatus};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

/// Sample appointments, sales, staff, inventory, customers, one override and
/// two history entries.
pub fn default_data() -> ShopData {
    ShopData {
        appointments: vec![
            appointment("1", "Arjun Sharma", "9876543210", "Haircut", "Rajesh Kumar", (2025, 11, 2), (9, 0), AppointmentStatus::Confirmed),
            appointment("2", "Priya Singh", "9876543211", "Hair Color", "Suresh Patel", (2025, 11, 2), (10, 30), AppointmentStatus::Confirmed),
            appointment("3", "Rahul Gupta", "9876543212", "Hair + Beard", "Rajesh Kumar", (2025, 11, 3), (14, 0), AppointmentStatus::Pending),
        ],
        sales: vec![
            sale(1, (2025, 10, 12), (9, 45), "Arjun Sharma", "Haircut", "Rajesh", 300.0, PaymentMethod::Upi),
            sale(2, (2025, 10, 13), (11, 15), "Priya Singh", "Hair Color", "Suresh", 500.0, PaymentMethod::Card),
            sale(3, (2025, 10, 14), (16, 30), "Rohit Kumar", "Beard Trim", "Rajesh", 200.0, PaymentMethod::Cash),
        ],
        staff: vec![
            staff("Rajesh Kumar", StaffRole::SeniorBarber, "9876543201", "rajesh@barbershop.com", "Mon-Fri 9AM-6PM"),
            staff("Suresh Patel", StaffRole::Barber, "9876543202", "suresh@barbershop.com", "Tue-Sat 10AM-7PM"),
            staff("Amit Singh", StaffRole::Barber, "9876543203", "amit@barbershop.com", "Mon-Sat 9AM-6PM"),
        ],
        inventory: vec![
            item(1, "Hair Gel", InventoryCategory::HairProducts, 25, 10),
            item(2, "Shampoo", InventoryCategory::HairProducts, 15, 5),
            item(3, "Razor Blades", InventoryCategory::Shaving, 50, 20),
            item(4, "Hair Clippers", InventoryCategory::Tools, 3, 2),
            item(5, "Disinfectant", InventoryCategory::Cleaning, 8, 5),
        ],
        customers: vec![
            customer(1, "Arjun Sharma", "9876543210", "arjun@email.com", 12, (2025, 10, 12), "Prefers fade cuts"),
            customer(2, "Priya Singh", "9876543211", "priya@email.com", 8, (2025, 10, 13), "Regular hair color customer"),
            customer(3, "Rohit Kumar", "9876543212", "rohit@email.com", 5, (2025, 10, 14), "Sensitive skin"),
        ],
        staff_overrides: vec![StaffOverride {
            id: 1,
            name: "Rajesh Kumar".to_string(),
            date: date((2025, 10, 20)),
            start: time((10, 0)),
            end: time((17, 0)),
        }],
        history: vec![
            history((2025, 10, 14), (10, 30), Section::Appointments, "Rahul Gupta on 2025-10-18 14:00"),
            history((2025, 10, 14), (9, 15), Section::Sales, "Rohit Kumar - Beard Trim"),
        ],
    }
}

type Ymd = (i32, u32, u32);
type Hm = (u32, u32);

fn date((year, month, day): Ymd) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn time((hour, minute): Hm) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or_default()
}

fn local(ymd: Ymd, hm: Hm) -> NaiveDateTime {
    date(ymd).and_time(time(hm))
}

#[allow(clippy::too_many_arguments)]
fn appointment(
    id: &str,
    customer: &str,
    phone: &str,
    service: &str,
    barber: &str,
    ymd: Ymd,
    hm: Hm,
    status: AppointmentStatus,
) -> Appointment {
    Appointment {
        id: id.to_string(),
        customer: customer.to_string(),
        phone: phone.to_string(),
        service: service.to_string(),
        barber: barber.to_string(),
        date: date(ymd),
        time: time(hm),
        amount: None,
        status,
    }
}

#[allow(clippy::too_many_arguments)]
fn sale(
    id: i64,
    ymd: Ymd,
    hm: Hm,
    customer: &str,
    service: &str,
    barber: &str,
    amount: f64,
    payment: PaymentMethod,
) -> Sale {
    Sale {
        id,
        date: local(ymd, hm),
        customer: customer.to_string(),
        service: service.to_string(),
        barber: barber.to_string(),
        amount,
        payment,
    }
}

fn staff(name: &str, role: StaffRole, phone: &str, email: &str, schedule: &str) -> Staff {
    Staff {
        name: name.to_string(),
        role,
        phone: phone.to_string(),
        email: email.to_string(),
        schedule: schedule.to_string(),
        status: StaffStatus::Active,
    }
}

fn item(id: u64, name: &str, category: InventoryCategory, quantity: u32, min_stock: u32) -> InventoryItem {
    InventoryItem {
        id,
        name: name.to_string(),
        category,
        quantity,
        min_stock,
        unit_cost: None,
        supplier: None,
    }
}

fn customer(
    id: u64,
    name: &str,
    phone: &str,
    email: &str,
    visits: u32,
    last_visit: Ymd,
    notes: &str,
) -> Customer {
    Customer {
        id,
        name: name.to_string(),
        phone: phone.to_string(),
        email: Some(email.to_string()),
        visits,
        last_visit: Some(date(last_visit)),
        notes: Some(notes.to_string()),
    }
}

fn history(ymd: Ymd, hm: Hm, section: Section, details: &str) -> HistoryEntry {
    let timestamp: DateTime<Utc> = Utc.from_utc_datetime(&local(ymd, hm));
    HistoryEntry {
        timestamp,
        action: HistoryAction::Added,
        section,
        details: details.to_string(),
        user: DEFAULT_ACTOR.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::default_data;

    #[test]
    fn seed_has_one_override_and_two_history_entries() {
        let data = default_data();
        assert_eq!(data.appointments.len(), 3);
        assert_eq!(data.staff.len(), 3);
        assert_eq!(data.inventory.len(), 5);
        assert_eq!(data.staff_overrides.len(), 1);
        assert_eq!(data.history.len(), 2);
        assert!(data.history[0].timestamp > data.history[1].timestamp);
    }
}
