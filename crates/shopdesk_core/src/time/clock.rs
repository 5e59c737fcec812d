//! Injectable wall clock.
//!
//! Store transitions read time only through `Clock`, so tests can pin "now".
//!
//! # Invariants
//! - `local_now` and `utc_now` are truncated to whole milliseconds, the
//!   precision reporting ranges are bounded at.

use chrono::{DateTime, Duration, FixedOffset, Local, NaiveDateTime, Offset, SubsecRound, Utc};
use std::cell::Cell;
use std::rc::Rc;

/// Source of the current instant.
pub trait Clock {
    /// Current instant with the UTC offset of the business location.
    fn now(&self) -> DateTime<FixedOffset>;

    /// Current local wall-clock time; range math runs on this.
    fn local_now(&self) -> NaiveDateTime {
        self.now().naive_local().trunc_subsecs(3)
    }

    /// Current instant in UTC; audit timestamps use this.
    fn utc_now(&self) -> DateTime<Utc> {
        self.now().with_timezone(&Utc).trunc_subsecs(3)
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> DateTime<FixedOffset> {
        (**self).now()
    }
}

impl<C: Clock + ?Sized> Clock for Rc<C> {
    fn now(&self) -> DateTime<FixedOffset> {
        (**self).now()
    }
}

/// Reads the host clock in the host time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

/// Clock frozen at a settable instant.
#[derive(Debug, Clone)]
pub struct FixedClock {
    instant: Cell<DateTime<FixedOffset>>,
}

impl FixedClock {
    pub fn new(instant: DateTime<FixedOffset>) -> Self {
        Self {
            instant: Cell::new(instant),
        }
    }

    /// Frozen at the given wall-clock time with a zero UTC offset.
    pub fn at_local(local: NaiveDateTime) -> Self {
        Self::new(DateTime::from_naive_utc_and_offset(local, Utc.fix()))
    }

    pub fn set(&self, instant: DateTime<FixedOffset>) {
        self.instant.set(instant);
    }

    pub fn set_local(&self, local: NaiveDateTime) {
        let offset = *self.instant.get().offset();
        self.instant
            .set(DateTime::from_naive_utc_and_offset(local - offset_duration(offset), offset));
    }

    pub fn advance(&self, step: Duration) {
        self.instant.set(self.instant.get() + step);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.instant.get()
    }
}

fn offset_duration(offset: FixedOffset) -> Duration {
    Duration::seconds(i64::from(offset.local_minus_utc()))
}

#[cfg(test)]
mod tests {
    use super::{Clock, FixedClock};
    use chrono::{Duration, FixedOffset, NaiveDate, TimeZone};

    #[test]
    fn fixed_clock_keeps_wall_time_when_offset_is_non_zero() {
        let offset = FixedOffset::east_opt(5 * 3600 + 1800).unwrap();
        let clock = FixedClock::new(offset.with_ymd_and_hms(2025, 3, 15, 10, 0, 0).unwrap());

        let local = NaiveDate::from_ymd_opt(2025, 3, 16)
            .unwrap()
            .and_hms_opt(8, 30, 0)
            .unwrap();
        clock.set_local(local);
        assert_eq!(clock.local_now(), local);
        assert_eq!(
            clock.utc_now().naive_utc(),
            local - Duration::minutes(330)
        );
    }

    #[test]
    fn advance_moves_the_frozen_instant() {
        let start = NaiveDate::from_ymd_opt(2025, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let clock = FixedClock::at_local(start);
        clock.advance(Duration::milliseconds(1));
        assert_eq!(clock.local_now(), start + Duration::milliseconds(1));
    }

    #[test]
    fn readings_drop_sub_millisecond_digits() {
        let late = NaiveDate::from_ymd_opt(2025, 10, 15)
            .unwrap()
            .and_hms_nano_opt(23, 59, 59, 999_500_000)
            .unwrap();
        let clock = FixedClock::at_local(late);

        let expected = late - Duration::microseconds(500);
        assert_eq!(clock.local_now(), expected);
        assert_eq!(clock.utc_now().naive_utc(), expected);
    }
}
