//! Per-day projections of a reservation store.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use log::info;
use serde::Serialize;

use super::{ExportFormat, TextFormatter};
use crate::clock::Clock;
use crate::reservation::Reservation;
use crate::store::ReservationStore;
use crate::Result;

/// Reservations starting on one calendar day, in store order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySchedule<'a> {
    /// The day.
    pub date: NaiveDate,
    /// Reservations starting that day.
    pub reservations: Vec<&'a Reservation>,
}

/// One exported row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleEntry {
    /// Holder name.
    pub name: String,
    /// Start of play, `HH:MM`.
    pub start_time: String,
    /// End of play, `HH:MM`.
    pub end_time: String,
    /// Day of play, `YYYY-MM-DD`.
    pub date: String,
}

impl From<&Reservation> for ScheduleEntry {
    fn from(reservation: &Reservation) -> Self {
        Self {
            name: reservation.holder().to_string(),
            start_time: reservation.start().format("%H:%M").to_string(),
            end_time: reservation.end().format("%H:%M").to_string(),
            date: reservation.date().format("%Y-%m-%d").to_string(),
        }
    }
}

/// The exported document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Schedule {
    /// Entries ordered by day, then store order.
    pub reservations: Vec<ScheduleEntry>,
}

impl Schedule {
    /// Flattens per-day listings into entries.
    #[must_use]
    pub fn from_days(days: &[DaySchedule<'_>]) -> Self {
        Self {
            reservations: days
                .iter()
                .flat_map(|day| day.reservations.iter().map(|r| ScheduleEntry::from(*r)))
                .collect(),
        }
    }
}

/// Lists every day in `[start, end]` with its reservations.
///
/// Returns an empty list if `end` is before `start`.
#[must_use]
pub fn days_between<C: Clock>(
    store: &ReservationStore<C>,
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<DaySchedule<'_>> {
    start
        .iter_days()
        .take_while(|date| *date <= end)
        .map(|date| DaySchedule {
            date,
            reservations: store.list_for_day(date),
        })
        .collect()
}

/// Builds the flattened schedule for `[start, end]`.
#[must_use]
pub fn build_schedule<C: Clock>(
    store: &ReservationStore<C>,
    start: NaiveDate,
    end: NaiveDate,
) -> Schedule {
    Schedule::from_days(&days_between(store, start, end))
}

/// Renders one text block per day in `[start, end]`.
///
/// Each block is a `Monday, 10 June 2024` header, then either
/// `No reservations` or one `* holder HH:MM - HH:MM` line per booking,
/// then a blank line.
#[must_use]
pub fn render_schedule<C: Clock>(
    store: &ReservationStore<C>,
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<String> {
    days_between(store, start, end)
        .iter()
        .map(TextFormatter::render_day)
        .collect()
}

/// Formats `[start, end]` in `format` and returns the text.
///
/// # Errors
///
/// Returns an error if:
/// - `format` is not `json` or `csv` (`UnsupportedFormat`)
/// - Serialization fails
pub fn write_schedule<C: Clock>(
    store: &ReservationStore<C>,
    start: NaiveDate,
    end: NaiveDate,
    format: &str,
) -> Result<String> {
    let format: ExportFormat = format.parse()?;
    format
        .create_formatter()
        .format(&days_between(store, start, end))
}

/// Exports `[start, end]` to `destination` in `format`.
///
/// # Errors
///
/// Returns an error if:
/// - `format` is not `json` or `csv` (`UnsupportedFormat`)
/// - Serialization fails
/// - The file cannot be written
pub fn export_schedule<C: Clock>(
    store: &ReservationStore<C>,
    start: NaiveDate,
    end: NaiveDate,
    format: &str,
    destination: impl AsRef<Path>,
) -> Result<()> {
    let contents = write_schedule(store, start, end, format)?;
    let destination = destination.as_ref();
    fs::write(destination, contents)?;
    info!(
        "exported schedule {start}..={end} as {} to {}",
        format.trim().to_lowercase(),
        destination.display()
    );
    Ok(())
}
