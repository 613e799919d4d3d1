//! Schedule formatter implementations.

use std::fmt::Write as _;

use crate::{Error, Result};

use super::{DaySchedule, Schedule, ScheduleFormatter};

/// Column headers for CSV output.
pub const CSV_HEADERS: [&str; 4] = ["Name", "Date", "Start time", "End time"];

/// Formatter for the console schedule.
pub struct TextFormatter;

impl TextFormatter {
    /// Render a single day as a text block ending in a blank line.
    #[must_use]
    pub fn render_day(day: &DaySchedule<'_>) -> String {
        let mut block = format!("{}\n", day.date.format("%A, %d %B %Y"));

        if day.reservations.is_empty() {
            block.push_str("No reservations\n");
        }

        for reservation in &day.reservations {
            let _ = writeln!(
                block,
                "* {} {} - {}",
                reservation.holder(),
                reservation.start().format("%H:%M"),
                reservation.end().format("%H:%M"),
            );
        }

        block.push('\n');
        block
    }
}

impl ScheduleFormatter for TextFormatter {
    fn format(&self, days: &[DaySchedule<'_>]) -> Result<String> {
        Ok(days.iter().map(Self::render_day).collect())
    }
}

/// Formatter for JSON output.
pub struct JsonFormatter;

impl ScheduleFormatter for JsonFormatter {
    fn format(&self, days: &[DaySchedule<'_>]) -> Result<String> {
        let mut json = serde_json::to_string_pretty(&Schedule::from_days(days))?;
        json.push('\n');
        Ok(json)
    }
}

/// Formatter for CSV output.
///
/// The header row is always written, even when there are no entries.
pub struct CsvFormatter;

impl ScheduleFormatter for CsvFormatter {
    fn format(&self, days: &[DaySchedule<'_>]) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(CSV_HEADERS)?;

        for entry in Schedule::from_days(days).reservations {
            writer.write_record([&entry.name, &entry.date, &entry.start_time, &entry.end_time])?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| Error::Io(e.into_error()))?;

        String::from_utf8(bytes).map_err(|e| Error::Validation {
            field: "csv_output".to_string(),
            message: format!("CSV output is not valid UTF-8: {e}"),
        })
    }
}
