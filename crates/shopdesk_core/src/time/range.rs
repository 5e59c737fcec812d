//! Reporting time ranges.
//!
//! # Responsibility
//! - Compute canonical `[start, end]` bounds for named periods.
//! - Test timestamp membership with optional (unbounded) sides.
//!
//! # Invariants
//! - All functions are pure: "now" and the fiscal-year start are inputs.
//! - Both bounds are inclusive; named periods end at `23:59:59.999`.
//! - `week` starts on Sunday and spans seven calendar days.
//! - Membership is decided at millisecond precision.
//! - Date arithmetic saturates at the calendar limits instead of panicking.

use chrono::{Datelike, Duration, Months, NaiveDate, NaiveDateTime, NaiveTime, SubsecRound};
use serde::{Deserialize, Serialize};

/// Named reporting period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RangeKind {
    Today,
    Week,
    #[default]
    Month,
    FiscalYear,
    /// Caller-supplied bounds.
    Custom,
}

impl RangeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Today => "today",
            Self::Week => "week",
            Self::Month => "month",
            Self::FiscalYear => "fiscal_year",
            Self::Custom => "custom",
        }
    }

    /// Accepts the UI names, including the short `fy` alias.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "today" => Some(Self::Today),
            "week" => Some(Self::Week),
            "month" => Some(Self::Month),
            "fy" | "fiscal_year" | "fiscalyear" => Some(Self::FiscalYear),
            "custom" => Some(Self::Custom),
            _ => None,
        }
    }
}

/// Inclusive instant pair; `None` is unbounded on that side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TimeRange {
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
}

impl TimeRange {
    pub const UNBOUNDED: Self = Self {
        start: None,
        end: None,
    };

    pub fn new(start: Option<NaiveDateTime>, end: Option<NaiveDateTime>) -> Self {
        Self { start, end }
    }

    /// Range over whole calendar days, built from date-only input.
    ///
    /// The end is normalized to `23:59:59` of `end`.
    pub fn custom_dates(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start: Some(day_start(start)),
            end: end.and_hms_opt(23, 59, 59),
        }
    }

    pub fn contains(&self, timestamp: NaiveDateTime) -> bool {
        in_range(timestamp, self.start, self.end)
    }
}

/// First day of the fiscal year, as `(month, day)`.
///
/// A day past the end of the month rolls into the next month, the way
/// calendar arithmetic on `(year, month, day)` does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FiscalYearStart {
    month: u32,
    day: u32,
}

impl FiscalYearStart {
    /// Returns `None` when `month` is outside `1..=12` or `day` outside `1..=31`.
    pub fn new(month: u32, day: u32) -> Option<Self> {
        if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
            return None;
        }
        Some(Self { month, day })
    }

    pub fn month(self) -> u32 {
        self.month
    }

    pub fn day(self) -> u32 {
        self.day
    }

    /// Fiscal-year start date falling in calendar `year`.
    pub fn start_in(self, year: i32) -> Option<NaiveDate> {
        let first = NaiveDate::from_ymd_opt(year, self.month, 1)?;
        first.checked_add_signed(Duration::days(i64::from(self.day) - 1))
    }
}

impl Default for FiscalYearStart {
    fn default() -> Self {
        Self { month: 4, day: 1 }
    }
}

/// Computes the canonical bounds of `kind` around `now`.
///
/// `Custom` has no canonical bounds and yields an unbounded range.
pub fn compute_range(kind: RangeKind, now: NaiveDateTime, fiscal: FiscalYearStart) -> TimeRange {
    match kind {
        RangeKind::Today => today_range(now),
        RangeKind::Week => week_range(now),
        RangeKind::Month => month_range(now),
        RangeKind::FiscalYear => fiscal_year_range(now, fiscal),
        RangeKind::Custom => TimeRange::UNBOUNDED,
    }
}

pub fn today_range(now: NaiveDateTime) -> TimeRange {
    let today = now.date();
    TimeRange::new(Some(day_start(today)), Some(day_end(today)))
}

/// Sunday through Saturday of the week containing `now`.
pub fn week_range(now: NaiveDateTime) -> TimeRange {
    let sunday = week_start(now.date());
    TimeRange::new(
        Some(day_start(sunday)),
        Some(day_end(shift_days(sunday, 6))),
    )
}

pub fn month_range(now: NaiveDateTime) -> TimeRange {
    let date = now.date();
    let first = date.with_day(1).unwrap_or(date);
    match first.checked_add_months(Months::new(1)) {
        Some(next_first) => TimeRange::new(
            Some(day_start(first)),
            Some(day_start(next_first) - Duration::milliseconds(1)),
        ),
        None => TimeRange::new(Some(day_start(first)), None),
    }
}

/// Fiscal year containing `now`.
///
/// On or after this calendar year's fiscal start the range is
/// `[this start, next start - 1ms]`, otherwise `[last start, this start - 1ms]`.
pub fn fiscal_year_range(now: NaiveDateTime, fiscal: FiscalYearStart) -> TimeRange {
    let year = now.year();
    let Some(this_start) = fiscal.start_in(year).map(day_start) else {
        return TimeRange::UNBOUNDED;
    };
    let (start, next) = if now >= this_start {
        (Some(this_start), fiscal.start_in(year + 1).map(day_start))
    } else {
        (fiscal.start_in(year - 1).map(day_start), Some(this_start))
    };
    TimeRange::new(start, next.map(|value| value - Duration::milliseconds(1)))
}

/// `true` iff `(start is None || ts >= start) && (end is None || ts <= end)`.
///
/// `timestamp` is truncated to whole milliseconds first, so an instant inside
/// the last millisecond of a day still falls before its `.999` end.
pub fn in_range(
    timestamp: NaiveDateTime,
    start: Option<NaiveDateTime>,
    end: Option<NaiveDateTime>,
) -> bool {
    let timestamp = timestamp.trunc_subsecs(3);
    start.map_or(true, |start| timestamp >= start) && end.map_or(true, |end| timestamp <= end)
}

/// Local midnight of `date`.
pub fn day_start(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// `23:59:59.999` of `date`.
pub fn day_end(date: NaiveDate) -> NaiveDateTime {
    date.and_hms_milli_opt(23, 59, 59, 999)
        .unwrap_or_else(|| day_start(date))
}

/// Most recent Sunday on or before `date`, or `date` itself at the calendar floor.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let back = i64::from(date.weekday().num_days_from_sunday());
    date.checked_sub_signed(Duration::days(back)).unwrap_or(date)
}

/// Sunday-first dates of the week `offset` weeks away from the one holding `today`.
///
/// Offsets past the calendar limits clamp to `NaiveDate::MIN`/`NaiveDate::MAX`.
pub fn week_dates(today: NaiveDate, offset: i32) -> [NaiveDate; 7] {
    let sunday = shift_days(week_start(today), i64::from(offset) * 7);
    std::array::from_fn(|index| shift_days(sunday, index as i64))
}

/// `date` moved by `days`, saturating at the calendar limits.
fn shift_days(date: NaiveDate, days: i64) -> NaiveDate {
    match date.checked_add_signed(Duration::days(days)) {
        Some(shifted) => shifted,
        None if days < 0 => NaiveDate::MIN,
        None => NaiveDate::MAX,
    }
}

/// Which side of a custom range a bound is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundSide {
    Start,
    End,
}

/// Parses a custom-range bound from UI text.
///
/// A date-only value (`YYYY-MM-DD`) becomes midnight for the start side and
/// `23:59:59` for the end side. A full timestamp is used verbatim.
pub fn parse_range_bound(text: &str, side: BoundSide) -> Option<NaiveDateTime> {
    let trimmed = text.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(match side {
            BoundSide::Start => day_start(date),
            BoundSide::End => TimeRange::custom_dates(date, date).end?,
        });
    }
    const TIMESTAMP_FORMATS: &[&str] = &[
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%d %H:%M",
    ];
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
}
