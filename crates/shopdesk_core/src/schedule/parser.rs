//! Weekly schedule text parser.
//!
//! # Responsibility
//! - Resolve `"<DayRange> <Start>-<End>"` text (for example `Mon-Fri 9AM-6PM`)
//!   into the working interval for one weekday.
//!
//! # Invariants
//! - Never fails loudly: malformed input resolves to documented defaults or
//!   to "not working" (`None`).
//! - Day abbreviations are matched case-sensitively against `WEEK_ORDER`.
//! - A day range whose start comes after its end wraps across Saturday.

use chrono::{NaiveTime, Weekday};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Sunday-first week order used by schedule day ranges.
pub const WEEK_ORDER: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

static CLOCK_TOKEN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(\d{1,2})(?::(\d{2}))?\s*(AM|PM)").expect("valid clock token regex")
});

const DEFAULT_START: (u32, u32) = (9, 0);
const DEFAULT_END: (u32, u32) = (18, 0);

/// Working window on one day. `end` is exclusive for booking checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Interval {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl Interval {
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }
}

/// Three-letter abbreviation of `day` as used in schedule text.
pub fn day_abbrev(day: Weekday) -> &'static str {
    WEEK_ORDER[day.num_days_from_sunday() as usize]
}

/// Interval worked on `day_abbrev` according to `schedule`, if any.
///
/// Returns `None` when the text is empty, has no space between the day range
/// and the times, or when the day is not in the resolved day set.
pub fn parse_schedule(schedule: &str, day_abbrev: &str) -> Option<Interval> {
    let (days, rest) = schedule.split_once(' ')?;
    if !active_days(days).contains(&day_abbrev) {
        return None;
    }

    let times = rest.split(' ').next().unwrap_or_default();
    let mut bounds = times.split('-');
    let start = bounds
        .next()
        .and_then(parse_clock_token)
        .unwrap_or_else(|| default_time(DEFAULT_START));
    let end = bounds
        .next()
        .and_then(parse_clock_token)
        .unwrap_or_else(|| default_time(DEFAULT_END));
    Some(Interval::new(start, end))
}

/// Same as [`parse_schedule`], keyed by `chrono::Weekday`.
pub fn parse_schedule_for(schedule: &str, day: Weekday) -> Option<Interval> {
    parse_schedule(schedule, day_abbrev(day))
}

/// Days covered by a `From-To` token, in week order starting at `From`.
///
/// Either bound missing or unknown yields an empty set.
pub fn active_days(range: &str) -> Vec<&'static str> {
    let mut bounds = range.split('-');
    let from = bounds.next().and_then(week_index);
    let to = bounds.next().and_then(week_index);
    let (Some(from), Some(to)) = (from, to) else {
        return Vec::new();
    };

    let span = (to + WEEK_ORDER.len() - from) % WEEK_ORDER.len() + 1;
    (0..span)
        .map(|step| WEEK_ORDER[(from + step) % WEEK_ORDER.len()])
        .collect()
}

/// Parses a 12-hour clock token such as `9AM`, `6:30 pm` or `12PM`.
///
/// Out-of-range hour or minute values are treated as unparseable.
pub fn parse_clock_token(token: &str) -> Option<NaiveTime> {
    let captures = CLOCK_TOKEN_RE.captures(token)?;
    let mut hour: u32 = captures.get(1)?.as_str().parse().ok()?;
    let minute: u32 = match captures.get(2) {
        Some(value) => value.as_str().parse().ok()?,
        None => 0,
    };
    let is_pm = captures.get(3)?.as_str().eq_ignore_ascii_case("PM");

    if is_pm && hour < 12 {
        hour += 12;
    } else if !is_pm && hour == 12 {
        hour = 0;
    }
    NaiveTime::from_hms_opt(hour, minute, 0)
}

fn week_index(abbrev: &str) -> Option<usize> {
    WEEK_ORDER.iter().position(|day| *day == abbrev)
}

fn default_time((hour, minute): (u32, u32)) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN)
}

#[cfg(test)]
mod tests {
    use super::{active_days, parse_clock_token};
    use chrono::NaiveTime;

    fn hm(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    #[test]
    fn clock_token_handles_noon_and_midnight() {
        assert_eq!(parse_clock_token("12PM"), Some(hm(12, 0)));
        assert_eq!(parse_clock_token("12AM"), Some(hm(0, 0)));
        assert_eq!(parse_clock_token("6:30 pm"), Some(hm(18, 30)));
        assert_eq!(parse_clock_token("9"), None);
        assert_eq!(parse_clock_token("10:75AM"), None);
    }

    #[test]
    fn active_days_wraps_and_rejects_unknown_bounds() {
        assert_eq!(active_days("Fri-Mon"), vec!["Fri", "Sat", "Sun", "Mon"]);
        assert_eq!(active_days("Mon-Mon"), vec!["Mon"]);
        assert!(active_days("Mon-Funday").is_empty());
        assert!(active_days("Sat").is_empty());
        assert!(active_days("mon-fri").is_empty());
    }
}
