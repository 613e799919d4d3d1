//! The reservation entity.
//!
//! A reservation books the court for one holder over the half-open interval
//! `[start, start + duration)`.

use chrono::{Duration, NaiveDate, NaiveDateTime};

/// A single court booking.
///
/// # Examples
///
/// ```
/// use chrono::{Duration, NaiveDate};
/// use court::Reservation;
///
/// let start = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap().and_hms_opt(10, 0, 0).unwrap();
/// let reservation = Reservation::new("Alice", start, Duration::minutes(60)).unwrap();
///
/// assert_eq!(reservation.holder(), "Alice");
/// assert_eq!(reservation.end(), start + Duration::hours(1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Reservation {
    holder: String,
    start: NaiveDateTime,
    duration: Duration,
    end: NaiveDateTime,
}

impl Reservation {
    /// Creates a new reservation.
    ///
    /// The holder name is trimmed of leading/trailing whitespace.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The holder is empty after trimming
    /// - The duration is zero or negative
    /// - The booking would end past the last representable date-time
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{Duration, NaiveDate};
    /// use court::Reservation;
    ///
    /// let start = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap().and_hms_opt(10, 0, 0).unwrap();
    ///
    /// assert!(Reservation::new("  ", start, Duration::minutes(60)).is_err());
    /// assert!(Reservation::new("Bob", start, Duration::zero()).is_err());
    /// ```
    pub fn new(
        holder: impl AsRef<str>,
        start: NaiveDateTime,
        duration: Duration,
    ) -> Result<Self, ValidationError> {
        let holder = holder.as_ref().trim();
        if holder.is_empty() {
            return Err(ValidationError {
                field: "holder".into(),
                message: "holder must be non-empty after trimming whitespace".into(),
            });
        }

        if duration <= Duration::zero() {
            return Err(ValidationError {
                field: "duration".into(),
                message: format!(
                    "duration must be positive, got {} minute(s)",
                    duration.num_minutes()
                ),
            });
        }

        let end = start
            .checked_add_signed(duration)
            .ok_or_else(|| ValidationError {
                field: "duration".into(),
                message: format!("booking starting at {start} ends out of range"),
            })?;

        Ok(Self {
            holder: holder.to_string(),
            start,
            duration,
            end,
        })
    }

    /// Returns the name of the person who booked.
    #[must_use]
    pub fn holder(&self) -> &str {
        &self.holder
    }

    /// Returns when play begins.
    #[must_use]
    pub const fn start(&self) -> NaiveDateTime {
        self.start
    }

    /// Returns the length of the booking.
    #[must_use]
    pub const fn duration(&self) -> Duration {
        self.duration
    }

    /// Returns when play ends (exclusive).
    #[must_use]
    pub const fn end(&self) -> NaiveDateTime {
        self.end
    }

    /// Returns the calendar day the booking starts on.
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.start.date()
    }

    /// Returns true if this booking intersects `[start, end)`.
    ///
    /// Intervals that only touch do not overlap.
    #[must_use]
    pub fn overlaps(&self, start: NaiveDateTime, end: NaiveDateTime) -> bool {
        self.start < end && start < self.end()
    }

    /// Returns true if this booking belongs to `holder` and starts at `start`.
    #[must_use]
    pub fn matches(&self, holder: &str, start: NaiveDateTime) -> bool {
        self.holder == holder.trim() && self.start == start
    }
}

/// Error type for validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The field that failed validation.
    pub field: String,
    /// A description of the validation failure.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "validation error for '{}': {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}
