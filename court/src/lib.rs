#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # court
//!
//! A library for booking a single shared court.
//!
//! The [`ReservationStore`] keeps an ordered list of reservations and enforces
//! the club's booking rules: no overlapping play, a per-holder limit per
//! period, and a minimum lead time for booking and cancelling. When a request
//! collides with existing play the store suggests the nearest free start.
//!
//! ## Core Types
//!
//! - [`ReservationStore`]: the booking rules and the reservation list
//! - [`Reservation`]: one holder's claim on the court
//! - [`BookingPolicy`] and [`LimitPeriod`]: the tunable rules
//! - [`Clock`], [`SystemClock`] and [`FixedClock`]: the source of "now"
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use chrono::{Duration, NaiveDate};
//! use court::{BookingPolicy, Error, FixedClock, ReservationStore};
//!
//! let day = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
//! let at = |h, m| day.and_hms_opt(h, m, 0).unwrap();
//!
//! let mut store = ReservationStore::with_clock(BookingPolicy::default(), FixedClock::new(at(8, 0)));
//! store.add_reservation("Alice", at(10, 0), Duration::minutes(60)).unwrap();
//!
//! assert!(!store.is_available(at(10, 30), Duration::minutes(30)));
//! assert!(store.is_available(at(11, 0), Duration::minutes(30)));
//!
//! let err = store.add_reservation("Bob", at(10, 15), Duration::minutes(30)).unwrap_err();
//! assert_eq!(err.suggested_slot(), Some(at(11, 0)));
//! assert!(matches!(err, Error::SlotConflict { .. }));
//! ```

pub mod clock;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod policy;
pub mod reservation;
pub mod store;

// Re-export key types at crate root for convenience
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{Config, ConfigBuilder};
pub use error::{BookingAction, Error, Result};
pub use logging::{init_logger, install_logger, LogLevel, Logger};
pub use output::{export_schedule, render_schedule, ExportFormat};
pub use policy::{BookingPolicy, LimitPeriod};
pub use reservation::{Reservation, ValidationError};
pub use store::ReservationStore;
