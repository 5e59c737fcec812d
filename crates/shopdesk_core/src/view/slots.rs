//! Bookable time slots.
//!
//! # Invariants
//! - Slots run from `open_hour` up to, not including, `close_hour`.
//! - Cancelled appointments never occupy a slot.

use crate::config::OrgSettings;
use crate::model::appointment::{Appointment, AppointmentStatus};
use crate::model::wire::format_hhmm;
use crate::schedule::availability::AvailabilityResolver;
use crate::view::ShopView;
use chrono::{NaiveDate, NaiveTime, Timelike};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeSlot {
    pub time: NaiveTime,
    /// `HH:MM`, as stored on appointments.
    pub value: String,
    /// 12-hour display label, for example `9:30 AM`.
    pub label: String,
}

impl TimeSlot {
    fn at(time: NaiveTime) -> Self {
        Self {
            time,
            value: format_hhmm(time),
            label: format_12h(time),
        }
    }
}

/// Every slot of a business day.
pub fn booking_slots(settings: &OrgSettings) -> Vec<TimeSlot> {
    let step = settings.slot_minutes.max(1);
    let close_minutes = settings.close_hour.min(24) * 60;
    let mut minutes = settings.open_hour * 60;
    let mut slots = Vec::new();
    while minutes < close_minutes {
        let Some(time) = NaiveTime::from_hms_opt(minutes / 60, minutes % 60, 0) else {
            break;
        };
        slots.push(TimeSlot::at(time));
        minutes += step;
    }
    slots
}

/// `h:MM AM|PM` label for a time of day.
pub fn format_12h(time: NaiveTime) -> String {
    let (is_pm, hour) = time.hour12();
    format!(
        "{hour}:{:02} {}",
        time.minute(),
        if is_pm { "PM" } else { "AM" }
    )
}

impl ShopView<'_> {
    /// First non-cancelled appointment booked for `barber` at `date` `time`.
    pub fn appointment_at(
        &self,
        barber: &str,
        date: NaiveDate,
        time: NaiveTime,
    ) -> Option<&Appointment> {
        self.data().appointments.iter().find(|appointment| {
            appointment.barber == barber
                && appointment.date == date
                && appointment.time == time
                && appointment.status != AppointmentStatus::Cancelled
        })
    }

    /// Slots on `date` where `barber` is working and not already booked.
    pub fn open_slots(&self, barber: &str, date: NaiveDate) -> Vec<TimeSlot> {
        let resolver = AvailabilityResolver::new(self.data());
        let Some(window) = resolver.get_availability(barber, date) else {
            return Vec::new();
        };
        booking_slots(self.settings())
            .into_iter()
            .filter(|slot| window.covers(slot.time))
            .filter(|slot| self.appointment_at(barber, date, slot.time).is_none())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{booking_slots, format_12h};
    use crate::config::OrgSettings;
    use chrono::NaiveTime;

    #[test]
    fn default_day_has_twenty_half_hour_slots() {
        let slots = booking_slots(&OrgSettings::default());
        assert_eq!(slots.len(), 20);
        assert_eq!(slots[0].value, "09:00");
        assert_eq!(slots[0].label, "9:00 AM");
        assert_eq!(slots[19].value, "18:30");
    }

    #[test]
    fn twelve_hour_labels_handle_noon_and_midnight() {
        assert_eq!(format_12h(NaiveTime::from_hms_opt(0, 5, 0).unwrap()), "12:05 AM");
        assert_eq!(format_12h(NaiveTime::from_hms_opt(12, 0, 0).unwrap()), "12:00 PM");
        assert_eq!(format_12h(NaiveTime::from_hms_opt(15, 30, 0).unwrap()), "3:30 PM");
    }
}
