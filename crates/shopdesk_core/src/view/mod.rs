//! Read-only projections over the store aggregate.
//!
//! # Responsibility
//! - Filter time-stamped collections by the active reporting range.
//! - Compute dashboard, report, booking and export projections on demand.
//!
//! # Invariants
//! - Views borrow the aggregate and never mutate it.
//! - Appointments are placed in time by `date + time`, sales by `date`.
//! - "Now" is an input captured when the view is built.

use crate::config::OrgSettings;
use crate::model::aggregate::ShopData;
use crate::model::appointment::{Appointment, AppointmentStatus};
use crate::model::history::{HistoryEntry, Section};
use crate::model::inventory::InventoryItem;
use crate::model::sale::Sale;
use crate::model::staff::Staff;
use crate::time::range::TimeRange;
use chrono::{NaiveDate, NaiveDateTime};

pub mod export;
pub mod slots;
pub mod stats;

/// Barber filter value that matches every barber.
pub const ALL_BARBERS: &str = "ALL";

/// Borrowed view over the aggregate at one instant and range.
#[derive(Debug, Clone, Copy)]
pub struct ShopView<'a> {
    data: &'a ShopData,
    range: TimeRange,
    now: NaiveDateTime,
    settings: &'a OrgSettings,
}

impl<'a> ShopView<'a> {
    pub fn new(
        data: &'a ShopData,
        range: TimeRange,
        now: NaiveDateTime,
        settings: &'a OrgSettings,
    ) -> Self {
        Self {
            data,
            range,
            now,
            settings,
        }
    }

    pub fn range(&self) -> TimeRange {
        self.range
    }

    pub fn now(&self) -> NaiveDateTime {
        self.now
    }

    pub fn settings(&self) -> &'a OrgSettings {
        self.settings
    }

    pub fn data(&self) -> &'a ShopData {
        self.data
    }

    /// Appointments starting inside the active range.
    pub fn appointments(&self) -> Vec<&'a Appointment> {
        self.data
            .appointments
            .iter()
            .filter(|appointment| self.range.contains(appointment.starts_at()))
            .collect()
    }

    /// Sales recorded inside the active range.
    pub fn sales(&self) -> Vec<&'a Sale> {
        self.data
            .sales
            .iter()
            .filter(|sale| self.range.contains(sale.date))
            .collect()
    }

    /// In-range appointments for `barber`; [`ALL_BARBERS`] disables the filter.
    pub fn appointments_by_barber(&self, barber: &str) -> Vec<&'a Appointment> {
        self.appointments()
            .into_iter()
            .filter(|appointment| barber == ALL_BARBERS || appointment.barber == barber)
            .collect()
    }

    pub fn appointments_by_status(&self, status: AppointmentStatus) -> Vec<&'a Appointment> {
        self.appointments()
            .into_iter()
            .filter(|appointment| appointment.status == status)
            .collect()
    }

    /// Every appointment on `date`, regardless of the active range.
    pub fn appointments_for_date(&self, date: NaiveDate) -> Vec<&'a Appointment> {
        self.data
            .appointments
            .iter()
            .filter(|appointment| appointment.date == date)
            .collect()
    }

    /// Staff whose role takes bookings, in staff order.
    pub fn barbers(&self) -> Vec<&'a Staff> {
        self.data.staff.iter().filter(|member| member.is_barber()).collect()
    }

    pub fn low_stock(&self) -> Vec<&'a InventoryItem> {
        self.data
            .inventory
            .iter()
            .filter(|item| item.is_low_stock())
            .collect()
    }

    /// Audit entries, most recent first; `None` keeps every section.
    pub fn history(&self, section: Option<Section>) -> Vec<&'a HistoryEntry> {
        self.data
            .history
            .iter()
            .filter(|entry| section.map_or(true, |wanted| entry.section == wanted))
            .collect()
    }
}
