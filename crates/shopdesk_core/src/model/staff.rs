//! Staff members and their per-date availability overrides.
//!
//! # Responsibility
//! - Define the staff record, including the compact weekly schedule text.
//! - Define one-off availability windows that supersede that schedule.
//!
//! # Invariants
//! - `Staff::name` is the identity key; overrides and appointments refer to
//!   staff by name.
//! - Collection order of staff is preserved by the store so index-based
//!   addressing stays stable between reads.
//! - An override window always ends after it starts.

use crate::model::validation::{require_text, ValidationError};
use crate::model::wire::hhmm;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StaffRole {
    Barber,
    #[serde(rename = "Senior Barber")]
    SeniorBarber,
    Manager,
    Receptionist,
}

impl StaffRole {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Barber => "Barber",
            Self::SeniorBarber => "Senior Barber",
            Self::Manager => "Manager",
            Self::Receptionist => "Receptionist",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum StaffStatus {
    #[default]
    Active,
    Inactive,
}

impl StaffStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
        }
    }
}

/// Staff member record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Staff {
    /// Display name, unique within the staff collection.
    pub name: String,
    pub role: StaffRole,
    pub phone: String,
    pub email: String,
    /// Weekly schedule text such as `Mon-Fri 9AM-6PM`; may be empty.
    #[serde(default)]
    pub schedule: String,
    pub status: StaffStatus,
}

impl Staff {
    /// Creates an active staff member with empty contact details.
    pub fn new(name: impl Into<String>, role: StaffRole, schedule: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role,
            phone: String::new(),
            email: String::new(),
            schedule: schedule.into(),
            status: StaffStatus::Active,
        }
    }

    /// Whether the role takes bookings (any role containing "barber").
    pub fn is_barber(&self) -> bool {
        self.role
            .as_str()
            .to_ascii_lowercase()
            .contains("barber")
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("name", &self.name)
    }
}

/// Store-generated override identifier.
pub type OverrideId = i64;

/// One-off availability window for a staff member on one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffOverride {
    pub id: OverrideId,
    /// Staff identity (`Staff::name`).
    pub name: String,
    pub date: NaiveDate,
    #[serde(with = "hhmm")]
    pub start: NaiveTime,
    #[serde(with = "hhmm")]
    pub end: NaiveTime,
}

/// Caller input for declaring an availability override.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStaffOverride {
    pub name: String,
    pub date: NaiveDate,
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl NewStaffOverride {
    pub fn new(name: impl Into<String>, date: NaiveDate, start: NaiveTime, end: NaiveTime) -> Self {
        Self {
            name: name.into(),
            date,
            start,
            end,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("name", &self.name)?;
        if self.end <= self.start {
            return Err(ValidationError::InvalidWindow {
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }

    pub(crate) fn into_override(self, id: OverrideId) -> StaffOverride {
        StaffOverride {
            id,
            name: self.name,
            date: self.date,
            start: self.start,
            end: self.end,
        }
    }
}
