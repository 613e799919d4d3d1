//! Booking rules applied by the reservation store.
//!
//! A [`BookingPolicy`] carries every tunable number the store consults: how
//! many bookings a holder may make per period, how far ahead booking and
//! cancelling must happen, and how the next-slot search steps and stops.

use std::fmt;

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Default number of reservations a holder may make per period.
pub const DEFAULT_WEEKLY_LIMIT: usize = 2;

/// Default minimum lead time for booking and cancelling, in minutes.
pub const DEFAULT_LEAD_TIME_MINUTES: i64 = 60;

/// Default step between candidate start times in the next-slot search, in minutes.
pub const DEFAULT_PROBE_STEP_MINUTES: i64 = 30;

/// Default distance the next-slot search looks ahead, in days.
pub const DEFAULT_SEARCH_HORIZON_DAYS: i64 = 14;

/// The calendar window a holder's booking limit is counted over.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use court::LimitPeriod;
///
/// let monday = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
/// let sunday = NaiveDate::from_ymd_opt(2024, 6, 16).unwrap();
/// let next_monday = NaiveDate::from_ymd_opt(2024, 6, 17).unwrap();
///
/// assert!(LimitPeriod::Week.contains(monday, sunday));
/// assert!(!LimitPeriod::Week.contains(monday, next_monday));
/// assert!(!LimitPeriod::Day.contains(monday, sunday));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LimitPeriod {
    /// ISO calendar week, Monday through Sunday.
    #[default]
    Week,
    /// A single calendar day.
    Day,
}

impl LimitPeriod {
    /// Returns true if `candidate` falls in the same period as `reference`.
    #[must_use]
    pub fn contains(self, reference: NaiveDate, candidate: NaiveDate) -> bool {
        match self {
            Self::Week => reference.iso_week() == candidate.iso_week(),
            Self::Day => reference == candidate,
        }
    }

    /// Parses a period name (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error message if the name is not `week` or `day`.
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.trim().to_lowercase().as_str() {
            "week" => Ok(Self::Week),
            "day" => Ok(Self::Day),
            _ => Err(format!("invalid limit period: {s}")),
        }
    }
}

impl fmt::Display for LimitPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Week => write!(f, "week"),
            Self::Day => write!(f, "day"),
        }
    }
}

/// Tunable booking rules.
///
/// # Examples
///
/// ```
/// use chrono::Duration;
/// use court::{BookingPolicy, LimitPeriod};
///
/// let policy = BookingPolicy::default()
///     .with_weekly_limit(3)
///     .with_lead_time(Duration::minutes(30));
///
/// assert_eq!(policy.weekly_limit(), 3);
/// assert_eq!(policy.limit_period(), LimitPeriod::Week);
/// assert_eq!(policy.lead_time(), Duration::minutes(30));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingPolicy {
    weekly_limit: usize,
    limit_period: LimitPeriod,
    lead_time: Duration,
    probe_step: Duration,
    search_horizon: Duration,
}

impl Default for BookingPolicy {
    fn default() -> Self {
        Self {
            weekly_limit: DEFAULT_WEEKLY_LIMIT,
            limit_period: LimitPeriod::Week,
            lead_time: Duration::minutes(DEFAULT_LEAD_TIME_MINUTES),
            probe_step: Duration::minutes(DEFAULT_PROBE_STEP_MINUTES),
            search_horizon: Duration::days(DEFAULT_SEARCH_HORIZON_DAYS),
        }
    }
}

impl BookingPolicy {
    /// Sets how many reservations a holder may make per period.
    #[must_use]
    pub const fn with_weekly_limit(mut self, limit: usize) -> Self {
        self.weekly_limit = limit;
        self
    }

    /// Sets the period the holder limit is counted over.
    #[must_use]
    pub const fn with_limit_period(mut self, period: LimitPeriod) -> Self {
        self.limit_period = period;
        self
    }

    /// Sets the minimum lead time for booking and cancelling.
    #[must_use]
    pub const fn with_lead_time(mut self, lead_time: Duration) -> Self {
        self.lead_time = lead_time;
        self
    }

    /// Sets the step between candidates in the next-slot search.
    #[must_use]
    pub const fn with_probe_step(mut self, step: Duration) -> Self {
        self.probe_step = step;
        self
    }

    /// Sets how far ahead the next-slot search looks before giving up.
    #[must_use]
    pub const fn with_search_horizon(mut self, horizon: Duration) -> Self {
        self.search_horizon = horizon;
        self
    }

    /// Returns the per-period reservation limit.
    #[must_use]
    pub const fn weekly_limit(&self) -> usize {
        self.weekly_limit
    }

    /// Returns the period the limit is counted over.
    #[must_use]
    pub const fn limit_period(&self) -> LimitPeriod {
        self.limit_period
    }

    /// Returns the minimum lead time.
    #[must_use]
    pub const fn lead_time(&self) -> Duration {
        self.lead_time
    }

    /// Returns the next-slot search step.
    #[must_use]
    pub const fn probe_step(&self) -> Duration {
        self.probe_step
    }

    /// Returns the next-slot search horizon.
    #[must_use]
    pub const fn search_horizon(&self) -> Duration {
        self.search_horizon
    }
}
