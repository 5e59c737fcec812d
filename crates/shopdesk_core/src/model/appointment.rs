//! Appointment domain model.
//!
//! # Responsibility
//! - Define the booking record shown in schedule grids and reports.
//! - Provide add-input and partial-update shapes with validation.
//!
//! # Invariants
//! - `id` is assigned by the store and never reused.
//! - `barber` names a staff member by display name; it is not checked
//!   against the staff collection.

use crate::model::validation::{
    require_amount, require_optional_text, require_text, ValidationError,
};
use crate::model::wire::hhmm;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// Store-generated appointment identifier.
pub type AppointmentId = String;

/// Booking lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AppointmentStatus {
    /// Booked and agreed with the customer.
    #[default]
    Confirmed,
    /// Awaiting confirmation.
    Pending,
    /// Called off; keeps its slot free for other bookings.
    Cancelled,
    /// Service delivered.
    Completed,
}

impl AppointmentStatus {
    /// Stable label used in snapshots and export rows.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Confirmed => "Confirmed",
            Self::Pending => "Pending",
            Self::Cancelled => "Cancelled",
            Self::Completed => "Completed",
        }
    }
}

/// One customer booking with a barber.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    /// Stable store-generated ID.
    pub id: AppointmentId,
    /// Customer display name.
    pub customer: String,
    /// Customer contact phone.
    pub phone: String,
    /// Booked service name.
    pub service: String,
    /// Staff display name handling the booking.
    pub barber: String,
    /// Calendar date of the booking.
    pub date: NaiveDate,
    /// Local start time, persisted as `HH:MM`.
    #[serde(with = "hhmm")]
    pub time: NaiveTime,
    /// Quoted price when known at booking time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    pub status: AppointmentStatus,
}

impl Appointment {
    /// Local wall-clock instant the booking starts at.
    ///
    /// This is the timestamp range filters test against.
    pub fn starts_at(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }
}

/// Caller input for booking a new appointment.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAppointment {
    pub customer: String,
    pub phone: String,
    pub service: String,
    pub barber: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub amount: Option<f64>,
    pub status: AppointmentStatus,
}

impl NewAppointment {
    /// Creates a confirmed booking input with no quoted amount.
    pub fn new(
        customer: impl Into<String>,
        phone: impl Into<String>,
        service: impl Into<String>,
        barber: impl Into<String>,
        date: NaiveDate,
        time: NaiveTime,
    ) -> Self {
        Self {
            customer: customer.into(),
            phone: phone.into(),
            service: service.into(),
            barber: barber.into(),
            date,
            time,
            amount: None,
            status: AppointmentStatus::Confirmed,
        }
    }

    /// Checks that every required booking field is filled in.
    ///
    /// # Errors
    /// - `MissingField` for a blank customer, phone, service or barber.
    /// - `InvalidAmount` for a negative or non-finite quoted amount.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("customer", &self.customer)?;
        require_text("phone", &self.phone)?;
        require_text("service", &self.service)?;
        require_text("barber", &self.barber)?;
        if let Some(amount) = self.amount {
            require_amount(amount)?;
        }
        Ok(())
    }

    pub(crate) fn into_appointment(self, id: AppointmentId) -> Appointment {
        Appointment {
            id,
            customer: self.customer,
            phone: self.phone,
            service: self.service,
            barber: self.barber,
            date: self.date,
            time: self.time,
            amount: self.amount,
            status: self.status,
        }
    }
}

/// Partial update for an existing appointment.
///
/// Only `Some` fields are written; the ID is never patchable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppointmentPatch {
    pub customer: Option<String>,
    pub phone: Option<String>,
    pub service: Option<String>,
    pub barber: Option<String>,
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    pub amount: Option<f64>,
    pub status: Option<AppointmentStatus>,
}

impl AppointmentPatch {
    /// Patch that only moves the booking to another status.
    pub fn status(status: AppointmentStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    /// Supplied text fields must not be blank.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_optional_text("customer", self.customer.as_ref())?;
        require_optional_text("phone", self.phone.as_ref())?;
        require_optional_text("service", self.service.as_ref())?;
        require_optional_text("barber", self.barber.as_ref())?;
        if let Some(amount) = self.amount {
            require_amount(amount)?;
        }
        Ok(())
    }

    pub(crate) fn apply_to(self, target: &mut Appointment) {
        if let Some(customer) = self.customer {
            target.customer = customer;
        }
        if let Some(phone) = self.phone {
            target.phone = phone;
        }
        if let Some(service) = self.service {
            target.service = service;
        }
        if let Some(barber) = self.barber {
            target.barber = barber;
        }
        if let Some(date) = self.date {
            target.date = date;
        }
        if let Some(time) = self.time {
            target.time = time;
        }
        if let Some(amount) = self.amount {
            target.amount = Some(amount);
        }
        if let Some(status) = self.status {
            target.status = status;
        }
    }
}
