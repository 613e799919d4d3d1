//! Time source for lead-time checks.
//!
//! The store never reads the system clock directly. It asks a [`Clock`],
//! which lets tests and the CLI's `--now` flag pin the current time.

use std::cell::Cell;

use chrono::{Duration, Local, NaiveDateTime};

/// Trait for reading the current wall-clock time.
///
/// All times are naive local times; the court has no notion of time zones.
///
/// # Examples
///
/// ```
/// use court::clock::{Clock, FixedClock};
/// use chrono::NaiveDate;
///
/// let now = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap().and_hms_opt(8, 0, 0).unwrap();
/// let clock = FixedClock::new(now);
/// assert_eq!(clock.now(), now);
/// ```
#[cfg_attr(test, mockall::automock)]
pub trait Clock {
    /// Returns the current time.
    fn now(&self) -> NaiveDateTime;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }
}

/// Production clock backed by the local system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock that only moves when told to.
///
/// # Examples
///
/// ```
/// use court::clock::{Clock, FixedClock};
/// use chrono::{Duration, NaiveDate};
///
/// let start = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap().and_hms_opt(8, 0, 0).unwrap();
/// let clock = FixedClock::new(start);
/// clock.advance(Duration::minutes(90));
/// assert_eq!(clock.now(), start + Duration::minutes(90));
/// ```
#[derive(Debug, Clone)]
pub struct FixedClock {
    now: Cell<NaiveDateTime>,
}

impl FixedClock {
    /// Creates a clock frozen at `now`.
    #[must_use]
    pub const fn new(now: NaiveDateTime) -> Self {
        Self {
            now: Cell::new(now),
        }
    }

    /// Moves the clock to `now`.
    pub fn set(&self, now: NaiveDateTime) {
        self.now.set(now);
    }

    /// Moves the clock forward by `by`.
    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.now.get()
    }
}
