//! Error types for the court library.
//!
//! Every booking rule has its own variant so callers can match on the kind of
//! failure instead of parsing messages. Infrastructure failures (I/O,
//! serialization, configuration parsing) are wrapped with `#[from]`.

use chrono::NaiveDateTime;
use thiserror::Error;

use crate::policy::LimitPeriod;

/// Result type alias for operations that may fail with a court error.
///
/// # Examples
///
/// ```
/// use court::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(2)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the court library.
#[derive(Debug, Error)]
pub enum Error {
    /// The holder already has the maximum number of bookings in the period.
    #[error("{holder} already has {limit} reservation(s) this {period}")]
    WeeklyLimitExceeded {
        /// The holder that hit the limit.
        holder: String,
        /// The configured per-period limit.
        limit: usize,
        /// The period the limit applies to.
        period: LimitPeriod,
    },

    /// A booking or cancellation was attempted inside the lead-time window.
    #[error("cannot {action} less than {lead_time_minutes} minute(s) before play starts")]
    LeadTimeViolation {
        /// Whether the caller was booking or cancelling.
        action: BookingAction,
        /// The required lead time in minutes.
        lead_time_minutes: i64,
    },

    /// The requested interval overlaps an existing reservation.
    #[error("court is already booked at {}{}", format_slot(.requested), suggestion(.suggested))]
    SlotConflict {
        /// Start of the rejected request.
        requested: NaiveDateTime,
        /// The nearest free start time of the same duration, if one was found.
        suggested: Option<NaiveDateTime>,
    },

    /// No reservation matches the given holder and start time.
    #[error("no reservation for {holder} at {}", format_slot(.start))]
    NotFound {
        /// The holder that was looked up.
        holder: String,
        /// The start time that was looked up.
        start: NaiveDateTime,
    },

    /// The bounded forward search found no free slot.
    #[error("no free slot within {horizon_days} day(s) of {}", format_slot(.from))]
    NoSlotFound {
        /// Where the search started.
        from: NaiveDateTime,
        /// How far ahead the search looked.
        horizon_days: i64,
    },

    /// Export was requested in a format the library does not write.
    #[error("unsupported format '{format}' (supported: {supported})")]
    UnsupportedFormat {
        /// The rejected format name.
        format: String,
        /// Comma-separated list of supported formats.
        supported: String,
    },

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV serialization failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// What the caller was doing when a lead-time rule fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingAction {
    /// Creating a reservation.
    Book,
    /// Cancelling a reservation.
    Cancel,
}

impl std::fmt::Display for BookingAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Book => write!(f, "book"),
            Self::Cancel => write!(f, "cancel"),
        }
    }
}

fn format_slot(at: &NaiveDateTime) -> String {
    at.format("%Y-%m-%d %H:%M").to_string()
}

fn suggestion(suggested: &Option<NaiveDateTime>) -> String {
    match suggested {
        Some(at) => format!("; next free slot is {}", format_slot(at)),
        None => String::new(),
    }
}

impl From<crate::reservation::ValidationError> for Error {
    fn from(err: crate::reservation::ValidationError) -> Self {
        Self::Validation {
            field: err.field,
            message: err.message,
        }
    }
}

impl Error {
    /// Check if the error is a booking-rule rejection rather than an
    /// infrastructure failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use court::Error;
    ///
    /// let err = Error::UnsupportedFormat {
    ///     format: "xml".to_string(),
    ///     supported: "json, csv".to_string(),
    /// };
    /// assert!(!err.is_rule_violation());
    /// ```
    #[must_use]
    pub fn is_rule_violation(&self) -> bool {
        matches!(
            self,
            Self::WeeklyLimitExceeded { .. }
                | Self::LeadTimeViolation { .. }
                | Self::SlotConflict { .. }
                | Self::NotFound { .. }
                | Self::NoSlotFound { .. }
        )
    }

    /// The suggested alternative start time carried by a slot conflict.
    #[must_use]
    pub fn suggested_slot(&self) -> Option<NaiveDateTime> {
        match self {
            Self::SlotConflict { suggested, .. } => *suggested,
            _ => None,
        }
    }
}
