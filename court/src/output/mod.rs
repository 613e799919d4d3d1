//! Schedule output: console rendering and JSON/CSV export.
//!
//! The store is projected into per-day listings ([`DaySchedule`]) which the
//! formatters turn into text. Exports flatten those listings into
//! [`ScheduleEntry`] rows.

mod formatters;
mod schedule;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

pub use formatters::{CsvFormatter, JsonFormatter, TextFormatter, CSV_HEADERS};
pub use schedule::{
    build_schedule, days_between, export_schedule, render_schedule, write_schedule, DaySchedule,
    Schedule, ScheduleEntry,
};

/// Human-readable list of the formats `export_schedule` accepts.
pub const SUPPORTED_FORMATS: &str = "json, csv";

/// Trait for turning per-day schedules into a string.
pub trait ScheduleFormatter {
    /// Format the given days.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn format(&self, days: &[DaySchedule<'_>]) -> Result<String>;
}

/// File formats a schedule can be exported in.
///
/// # Examples
///
/// ```
/// use court::output::ExportFormat;
///
/// let format: ExportFormat = "JSON".parse().unwrap();
/// assert_eq!(format, ExportFormat::Json);
/// assert!("xml".parse::<ExportFormat>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Indented JSON document.
    Json,
    /// Comma-separated values with a header row.
    Csv,
}

impl ExportFormat {
    /// Create a formatter for this export format.
    #[must_use]
    pub fn create_formatter(self) -> Box<dyn ScheduleFormatter> {
        match self {
            Self::Json => Box::new(JsonFormatter),
            Self::Csv => Box::new(CsvFormatter),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            _ => Err(Error::UnsupportedFormat {
                format: s.to_string(),
                supported: SUPPORTED_FORMATS.to_string(),
            }),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
        }
    }
}
