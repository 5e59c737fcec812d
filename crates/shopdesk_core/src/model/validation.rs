//! Caller-facing validation failures for store commands.
//!
//! # Invariants
//! - A command rejected with `ValidationError` leaves the aggregate and the
//!   history untouched.

use chrono::NaiveTime;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Reason a command was rejected before any state change.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// A required text field is empty or whitespace only.
    MissingField(&'static str),
    /// Currency amount is negative or not a finite number.
    InvalidAmount(f64),
    /// Another staff member already uses this name.
    DuplicateStaffName(String),
    /// Availability window does not end after it starts.
    InvalidWindow { start: NaiveTime, end: NaiveTime },
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "required field `{field}` is missing"),
            Self::InvalidAmount(value) => {
                write!(f, "amount must be a non-negative number, got {value}")
            }
            Self::DuplicateStaffName(name) => write!(f, "staff name already in use: `{name}`"),
            Self::InvalidWindow { start, end } => write!(
                f,
                "availability end ({}) must be after start ({})",
                end.format("%H:%M"),
                start.format("%H:%M")
            ),
        }
    }
}

impl Error for ValidationError {}

pub(crate) fn require_text(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    Ok(())
}

pub(crate) fn require_optional_text(
    field: &'static str,
    value: Option<&String>,
) -> Result<(), ValidationError> {
    match value {
        Some(text) => require_text(field, text),
        None => Ok(()),
    }
}

pub(crate) fn require_amount(value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ValidationError::InvalidAmount(value));
    }
    Ok(())
}
