//! Organization settings.
//!
//! # Responsibility
//! - Hold business-wide settings read by range math and booking views.
//! - Load them from JSON with per-field defaults.
//!
//! # Invariants
//! - A validated `OrgSettings` always yields a usable `FiscalYearStart`.
//! - Opening hours satisfy `open_hour < close_hour <= 24`.

use crate::time::range::FiscalYearStart;
use chrono::NaiveDate;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

const MAX_SLOT_MINUTES: u32 = 240;

/// Business-wide settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrgSettings {
    pub currency_symbol: String,
    pub currency_code: String,
    /// IANA zone name; informational, the clock supplies the actual offset.
    pub timezone: String,
    pub fy_start_month: u32,
    pub fy_start_day: u32,
    pub open_hour: u32,
    pub close_hour: u32,
    pub slot_minutes: u32,
}

impl Default for OrgSettings {
    fn default() -> Self {
        Self {
            currency_symbol: "₹".to_string(),
            currency_code: "INR".to_string(),
            timezone: "Asia/Kolkata".to_string(),
            fy_start_month: 4,
            fy_start_day: 1,
            open_hour: 9,
            close_hour: 19,
            slot_minutes: 30,
        }
    }
}

impl OrgSettings {
    /// Parses settings JSON; unknown keys are ignored, missing keys default.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let settings: Self = serde_json::from_str(text).map_err(ConfigError::Parse)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::Io)?;
        match Self::from_json_str(&text) {
            Ok(settings) => {
                info!(
                    "event=config_load module=config status=ok fy_start={}-{} slot_minutes={}",
                    settings.fy_start_month, settings.fy_start_day, settings.slot_minutes
                );
                Ok(settings)
            }
            Err(err) => {
                warn!("event=config_load module=config status=error error={err}");
                Err(err)
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        // 2024 is a leap year, so Feb 29 counts as a valid fiscal start.
        if NaiveDate::from_ymd_opt(2024, self.fy_start_month, self.fy_start_day).is_none() {
            return Err(ConfigError::Invalid(format!(
                "fiscal year start {}-{} is not a calendar day",
                self.fy_start_month, self.fy_start_day
            )));
        }
        if self.close_hour > 24 || self.open_hour >= self.close_hour {
            return Err(ConfigError::Invalid(format!(
                "opening hours {}..{} are out of range",
                self.open_hour, self.close_hour
            )));
        }
        if self.slot_minutes == 0 || self.slot_minutes > MAX_SLOT_MINUTES {
            return Err(ConfigError::Invalid(format!(
                "slot length {} must be within 1..={MAX_SLOT_MINUTES} minutes",
                self.slot_minutes
            )));
        }
        Ok(())
    }

    /// Fiscal-year start; falls back to April 1 for unvalidated input.
    pub fn fiscal_year_start(&self) -> FiscalYearStart {
        FiscalYearStart::new(self.fy_start_month, self.fy_start_day).unwrap_or_default()
    }

    /// `amount` with the currency symbol and two decimals.
    pub fn format_amount(&self, amount: f64) -> String {
        format!("{}{amount:.2}", self.currency_symbol)
    }
}

/// Failure to load organization settings.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    /// Parsed but out of range.
    Invalid(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "cannot read settings: {err}"),
            Self::Parse(err) => write!(f, "malformed settings: {err}"),
            Self::Invalid(message) => write!(f, "invalid settings: {message}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
            Self::Invalid(_) => None,
        }
    }
}
