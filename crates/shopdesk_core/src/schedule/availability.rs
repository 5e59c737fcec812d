//! Staff availability resolution.
//!
//! # Responsibility
//! - Decide the effective working window of a staff member on a date.
//! - Answer point-in-time "is this person working" queries for booking.
//!
//! # Invariants
//! - A per-date override always wins over the weekly schedule.
//! - When several overrides match, the first in collection order wins.
//! - Unknown staff names are never available, even with a matching override.
//! - Queries are read-only and may be recomputed freely.
//!
//! # See also
//! - `schedule::parser` for the weekly schedule grammar.

use crate::model::aggregate::ShopData;
use crate::schedule::parser::{parse_schedule_for, Interval};
use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use serde::Serialize;

/// Effective window for one staff member on one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Availability {
    pub start: NaiveTime,
    pub end: NaiveTime,
    /// `true` when the window comes from a per-date override.
    pub is_override: bool,
}

impl Availability {
    pub fn interval(&self) -> Interval {
        Interval::new(self.start, self.end)
    }

    /// `start <= time < end`, compared at minute precision.
    pub fn covers(&self, time: NaiveTime) -> bool {
        let minute = minutes_since_midnight(time);
        minutes_since_midnight(self.start) <= minute && minute < minutes_since_midnight(self.end)
    }
}

/// Availability of one staff member across consecutive dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StaffAvailabilityRow {
    pub name: String,
    /// One slot per date of the grid, in date order.
    pub days: Vec<Option<Availability>>,
}

/// Staff-by-date availability matrix.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct AvailabilityGrid {
    pub dates: Vec<NaiveDate>,
    /// Rows in staff collection order.
    pub rows: Vec<StaffAvailabilityRow>,
}

impl AvailabilityGrid {
    pub fn get(&self, name: &str, date: NaiveDate) -> Option<Availability> {
        let column = self.dates.iter().position(|value| *value == date)?;
        let row = self.rows.iter().find(|row| row.name == name)?;
        row.days.get(column).copied().flatten()
    }
}

/// Read-only availability queries over staff and override records.
pub struct AvailabilityResolver<'a> {
    data: &'a ShopData,
}

impl<'a> AvailabilityResolver<'a> {
    pub fn new(data: &'a ShopData) -> Self {
        Self { data }
    }

    /// Effective working window of `name` on `date`, or `None` if not working.
    pub fn get_availability(&self, name: &str, date: NaiveDate) -> Option<Availability> {
        let staff = self.data.find_staff(name)?;

        if let Some(found) = self
            .data
            .staff_overrides
            .iter()
            .find(|entry| entry.name == name && entry.date == date)
        {
            return Some(Availability {
                start: found.start,
                end: found.end,
                is_override: true,
            });
        }

        parse_schedule_for(&staff.schedule, date.weekday()).map(|interval| Availability {
            start: interval.start,
            end: interval.end,
            is_override: false,
        })
    }

    /// Whether `name` is working at `time` on `date` (end-exclusive).
    pub fn is_available_at(&self, name: &str, date: NaiveDate, time: NaiveTime) -> bool {
        self.get_availability(name, date)
            .is_some_and(|window| window.covers(time))
    }

    /// Availability of every staff member for each date in `[start, end]`.
    ///
    /// An inverted range yields a grid with no dates.
    pub fn availability_for_range(&self, start: NaiveDate, end: NaiveDate) -> AvailabilityGrid {
        let dates = dates_between(start, end);
        let rows = self
            .data
            .staff
            .iter()
            .map(|member| StaffAvailabilityRow {
                name: member.name.clone(),
                days: dates
                    .iter()
                    .map(|date| self.get_availability(&member.name, *date))
                    .collect(),
            })
            .collect();
        AvailabilityGrid { dates, rows }
    }
}

fn dates_between(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let mut dates = Vec::new();
    let mut current = Some(start);
    while let Some(date) = current.filter(|date| *date <= end) {
        dates.push(date);
        current = date.succ_opt();
    }
    dates
}

fn minutes_since_midnight(time: NaiveTime) -> u32 {
    time.hour() * 60 + time.minute()
}
