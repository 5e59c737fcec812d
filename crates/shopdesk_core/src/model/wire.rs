//! Snapshot wire helpers for time-of-day fields.
//!
//! Times are persisted as `HH:MM` to match the snapshot format the console
//! has always written. Seconds, and any fraction of them, are appended only
//! when set, so every `NaiveTime` survives a save and load unchanged.

use chrono::{NaiveTime, Timelike};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serializer};

/// Parses a 24-hour `HH:MM`, `HH:MM:SS` or `HH:MM:SS.fff` time-of-day string.
pub fn parse_hhmm(value: &str) -> Option<NaiveTime> {
    let trimmed = value.trim();
    NaiveTime::parse_from_str(trimmed, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M:%S%.f"))
        .ok()
}

/// Formats a time-of-day the way snapshots and history details expect.
pub fn format_hhmm(value: NaiveTime) -> String {
    match (value.second(), value.nanosecond()) {
        (0, 0) => value.format("%H:%M").to_string(),
        (_, 0) => value.format("%H:%M:%S").to_string(),
        _ => value.format("%H:%M:%S%.f").to_string(),
    }
}

pub(crate) mod hhmm {
    use super::*;

    pub fn serialize<S: Serializer>(value: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format_hhmm(*value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_hhmm(&raw)
            .ok_or_else(|| D::Error::custom(format!("invalid time of day `{raw}`; expected HH:MM")))
    }
}

#[cfg(test)]
mod tests {
    use super::{format_hhmm, parse_hhmm};
    use chrono::NaiveTime;

    #[test]
    fn parse_accepts_minutes_and_seconds_forms() {
        assert_eq!(
            parse_hhmm("09:30"),
            Some(NaiveTime::from_hms_opt(9, 30, 0).unwrap())
        );
        assert_eq!(
            parse_hhmm(" 17:05:10 "),
            Some(NaiveTime::from_hms_opt(17, 5, 10).unwrap())
        );
        assert_eq!(
            parse_hhmm("10:30:00.500"),
            Some(NaiveTime::from_hms_milli_opt(10, 30, 0, 500).unwrap())
        );
        assert_eq!(parse_hhmm("9AM"), None);
        assert_eq!(parse_hhmm("25:00"), None);
    }

    #[test]
    fn format_drops_zero_seconds_only() {
        assert_eq!(format_hhmm(NaiveTime::from_hms_opt(8, 0, 0).unwrap()), "08:00");
        assert_eq!(
            format_hhmm(NaiveTime::from_hms_opt(8, 0, 7).unwrap()),
            "08:00:07"
        );
        assert_eq!(
            format_hhmm(NaiveTime::from_hms_milli_opt(10, 30, 0, 500).unwrap()),
            "10:30:00.500"
        );
    }
}
