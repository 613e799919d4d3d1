//! Common test utilities for integration tests.
//!
//! This module provides helper functions and fixture builders for testing
//! the court library.

use chrono::{Duration, NaiveDate, NaiveDateTime};

use court::{BookingPolicy, FixedClock, ReservationStore};

/// Monday 10 June 2024, the first day of ISO week 24.
#[allow(dead_code)]
pub fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
}

/// A time `days` after [`monday`].
#[allow(dead_code)]
pub fn at(days: i64, hour: u32, minute: u32) -> NaiveDateTime {
    (monday() + Duration::days(days))
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

/// Creates a temporary directory for testing.
///
/// The directory will be automatically cleaned up when the returned
/// `TempDir` is dropped.
#[allow(dead_code)]
pub fn create_temp_dir() -> std::io::Result<tempfile::TempDir> {
    tempfile::tempdir()
}

/// Builder for creating stores with sensible defaults.
///
/// # Examples
///
/// ```no_run
/// # use common::StoreFixture;
/// let store = StoreFixture::new()
///     .with_booking("Alice", at(0, 10, 0), 60)
///     .build();
/// ```
#[allow(dead_code)]
pub struct StoreFixture {
    policy: BookingPolicy,
    now: NaiveDateTime,
    bookings: Vec<(String, NaiveDateTime, i64)>,
}

#[allow(dead_code)]
impl StoreFixture {
    /// Creates a new fixture builder.
    ///
    /// Defaults:
    /// - policy: `BookingPolicy::default()`
    /// - now: Monday 08:00
    /// - no bookings
    pub fn new() -> Self {
        Self {
            policy: BookingPolicy::default(),
            now: at(0, 8, 0),
            bookings: Vec::new(),
        }
    }

    /// Sets the booking policy.
    pub fn with_policy(mut self, policy: BookingPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Sets the clock's current time.
    pub fn with_now(mut self, now: NaiveDateTime) -> Self {
        self.now = now;
        self
    }

    /// Adds a booking made through the store's normal rules.
    pub fn with_booking(mut self, holder: &str, start: NaiveDateTime, minutes: i64) -> Self {
        self.bookings.push((holder.to_string(), start, minutes));
        self
    }

    /// Builds the store, panicking if any fixture booking is rejected.
    pub fn build(self) -> ReservationStore<FixedClock> {
        let mut store = ReservationStore::with_clock(self.policy, FixedClock::new(self.now));
        for (holder, start, minutes) in self.bookings {
            store
                .add_reservation(&holder, start, Duration::minutes(minutes))
                .unwrap_or_else(|e| panic!("fixture booking for {holder} failed: {e}"));
        }
        store
    }
}

impl Default for StoreFixture {
    fn default() -> Self {
        Self::new()
    }
}
