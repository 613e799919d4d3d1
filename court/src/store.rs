//! The reservation store: booking rules, queries and mutations.
//!
//! The store owns an ordered collection of [`Reservation`]s. Insertion order
//! is preserved; callers that want a chronological view sort explicitly.
//! Every query scans the full collection.

use chrono::{Duration, NaiveDate, NaiveDateTime, Timelike};
use log::{debug, info, warn};

use crate::clock::{Clock, SystemClock};
use crate::error::{BookingAction, Error, Result};
use crate::policy::BookingPolicy;
use crate::reservation::Reservation;

/// In-memory reservation store for a single court.
///
/// # Examples
///
/// ```
/// use chrono::{Duration, NaiveDate};
/// use court::clock::FixedClock;
/// use court::{BookingPolicy, ReservationStore};
///
/// let day = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
/// let clock = FixedClock::new(day.and_hms_opt(8, 0, 0).unwrap());
/// let mut store = ReservationStore::with_clock(BookingPolicy::default(), clock);
///
/// let ten = day.and_hms_opt(10, 0, 0).unwrap();
/// store.add_reservation("Alice", ten, Duration::minutes(60)).unwrap();
///
/// assert!(!store.is_available(day.and_hms_opt(10, 30, 0).unwrap(), Duration::minutes(30)));
/// assert!(store.is_available(day.and_hms_opt(11, 0, 0).unwrap(), Duration::minutes(30)));
/// ```
#[derive(Debug)]
pub struct ReservationStore<C: Clock = SystemClock> {
    reservations: Vec<Reservation>,
    policy: BookingPolicy,
    clock: C,
}

impl ReservationStore<SystemClock> {
    /// Creates an empty store with the default policy and the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_policy(BookingPolicy::default())
    }

    /// Creates an empty store with the given policy and the system clock.
    #[must_use]
    pub fn with_policy(policy: BookingPolicy) -> Self {
        Self::with_clock(policy, SystemClock)
    }
}

impl Default for ReservationStore<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> ReservationStore<C> {
    /// Creates an empty store that reads the current time from `clock`.
    #[must_use]
    pub fn with_clock(policy: BookingPolicy, clock: C) -> Self {
        Self {
            reservations: Vec::new(),
            policy,
            clock,
        }
    }

    /// Returns all reservations in insertion order.
    #[must_use]
    pub fn reservations(&self) -> &[Reservation] {
        &self.reservations
    }

    /// Returns the number of reservations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.reservations.len()
    }

    /// Returns true if there are no reservations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reservations.is_empty()
    }

    /// Returns the booking policy.
    #[must_use]
    pub const fn policy(&self) -> &BookingPolicy {
        &self.policy
    }

    /// Returns the clock used for lead-time checks.
    #[must_use]
    pub const fn clock(&self) -> &C {
        &self.clock
    }

    /// Books the court.
    ///
    /// Rules are checked in order and the first failure is returned:
    /// 1. The holder must have fewer than the per-period limit of bookings
    ///    in the period containing `start`
    /// 2. `start` must be at least the lead time after now
    /// 3. `[start, start + duration)` must not overlap an existing booking
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The holder is blank or the duration is not positive (`Validation`)
    /// - The holder is at the limit (`WeeklyLimitExceeded`)
    /// - `start` is inside the lead-time window (`LeadTimeViolation`)
    /// - The slot is taken (`SlotConflict`, carrying the nearest free start
    ///   time when the bounded search finds one)
    pub fn add_reservation(
        &mut self,
        holder: &str,
        start: NaiveDateTime,
        duration: Duration,
    ) -> Result<()> {
        let reservation = Reservation::new(holder, start, duration)?;

        let count = self.count_for_user_in_period(reservation.holder(), reservation.date());
        if count >= self.policy.weekly_limit() {
            debug!(
                "rejecting booking for {}: {count} booking(s) this {}",
                reservation.holder(),
                self.policy.limit_period()
            );
            return Err(Error::WeeklyLimitExceeded {
                holder: reservation.holder().to_string(),
                limit: self.policy.weekly_limit(),
                period: self.policy.limit_period(),
            });
        }

        self.check_lead_time(start, BookingAction::Book)?;

        if !self.is_available(start, duration) {
            let suggested = match self.find_next_available(start, duration) {
                Ok(at) => Some(at),
                Err(Error::NoSlotFound { .. }) => None,
                Err(e) => return Err(e),
            };
            debug!(
                "rejecting booking for {} at {start}: slot taken",
                reservation.holder()
            );
            return Err(Error::SlotConflict {
                requested: start,
                suggested,
            });
        }

        info!(
            "booked court for {} from {} to {}",
            reservation.holder(),
            reservation.start(),
            reservation.end()
        );
        self.reservations.push(reservation);
        Ok(())
    }

    /// Cancels the reservation made by `holder` starting at `start`.
    ///
    /// Returns the removed reservation. The order of the remaining
    /// reservations is unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No reservation matches exactly (`NotFound`)
    /// - `start` is inside the lead-time window (`LeadTimeViolation`)
    pub fn cancel_reservation(&mut self, holder: &str, start: NaiveDateTime) -> Result<Reservation> {
        let Some(index) = self
            .reservations
            .iter()
            .position(|r| r.matches(holder, start))
        else {
            debug!("no reservation for {holder} at {start} to cancel");
            return Err(Error::NotFound {
                holder: holder.trim().to_string(),
                start,
            });
        };

        self.check_lead_time(start, BookingAction::Cancel)?;

        let removed = self.reservations.remove(index);
        info!("cancelled booking for {} at {}", removed.holder(), removed.start());
        Ok(removed)
    }

    /// Looks up the reservation made by `holder` starting at `start`.
    #[must_use]
    pub fn find_reservation(&self, holder: &str, start: NaiveDateTime) -> Option<&Reservation> {
        self.reservations.iter().find(|r| r.matches(holder, start))
    }

    /// Returns true if no reservation intersects `[start, start + duration)`.
    ///
    /// An interval that would end past the last representable date-time is
    /// never available.
    #[must_use]
    pub fn is_available(&self, start: NaiveDateTime, duration: Duration) -> bool {
        match start.checked_add_signed(duration) {
            Some(end) => !self.reservations.iter().any(|r| r.overlaps(start, end)),
            None => false,
        }
    }

    /// Counts the bookings `holder` has in the policy period containing `reference`.
    #[must_use]
    pub fn count_for_user_in_period(&self, holder: &str, reference: NaiveDate) -> usize {
        let holder = holder.trim();
        let period = self.policy.limit_period();
        self.reservations
            .iter()
            .filter(|r| r.holder() == holder && period.contains(reference, r.date()))
            .count()
    }

    /// Finds the earliest free start time at or after `from`.
    ///
    /// `from` itself is tried first. After that, candidates sit on a grid of
    /// `probe_step` anchored at midnight, so a search from 10:15 with a
    /// 30-minute step tries 10:15, 10:30, 11:00 and so on. The search stops
    /// after the policy's horizon.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The probe step is not positive (`Validation`)
    /// - Nothing is free before the horizon (`NoSlotFound`)
    pub fn find_next_available(
        &self,
        from: NaiveDateTime,
        duration: Duration,
    ) -> Result<NaiveDateTime> {
        let step = self.policy.probe_step();
        if step <= Duration::zero() {
            return Err(Error::Validation {
                field: "probe_step".into(),
                message: "probe step must be positive".into(),
            });
        }

        let horizon = self.policy.search_horizon();
        let last = from.checked_add_signed(horizon).unwrap_or(NaiveDateTime::MAX);

        let mut candidate = Some(from);
        while let Some(at) = candidate.filter(|at| *at <= last) {
            if self.is_available(at, duration) {
                return Ok(at);
            }
            candidate = next_probe(at, step);
        }

        warn!(
            "no free {}-minute slot within {} day(s) of {from}",
            duration.num_minutes(),
            horizon.num_days()
        );
        Err(Error::NoSlotFound {
            from,
            horizon_days: horizon.num_days(),
        })
    }

    /// Returns the reservations starting on `date`, in insertion order.
    #[must_use]
    pub fn list_for_day(&self, date: NaiveDate) -> Vec<&Reservation> {
        self.reservations
            .iter()
            .filter(|r| r.date() == date)
            .collect()
    }

    fn check_lead_time(&self, start: NaiveDateTime, action: BookingAction) -> Result<()> {
        let lead_time = self.policy.lead_time();
        if start - self.clock.now() < lead_time {
            debug!("rejecting {action} at {start}: inside the lead-time window");
            return Err(Error::LeadTimeViolation {
                action,
                lead_time_minutes: lead_time.num_minutes(),
            });
        }
        Ok(())
    }
}

/// Returns the first grid point strictly after `at`, where the grid is
/// `step` wide and anchored at midnight of `at`'s day.
fn next_probe(at: NaiveDateTime, step: Duration) -> Option<NaiveDateTime> {
    let step_secs = step.num_seconds().max(1);
    let elapsed = i64::from(at.num_seconds_from_midnight());
    let floor = at
        - Duration::seconds(elapsed % step_secs)
        - Duration::nanoseconds(i64::from(at.nanosecond()));
    floor.checked_add_signed(Duration::seconds(step_secs))
}

#[cfg(test)]
mod proptests;
