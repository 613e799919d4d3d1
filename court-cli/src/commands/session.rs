//! Session commands run by the interactive shell.
//!
//! Each input line is split into words and parsed with clap as one
//! [`SessionCommand`], which then runs against the session's store.

use crate::error::CliError;
use crate::utils::{format_slot, parse_date, parse_datetime, split_words};
use chrono::{Duration, NaiveDate, NaiveDateTime};
use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use court::output::{write_schedule, ExportFormat};
use court::{export_schedule, render_schedule, Clock, Error, ReservationStore};
use std::io::Write;
use std::path::PathBuf;

/// One parsed session line.
#[derive(Parser, Debug)]
#[command(
    name = "",
    no_binary_name = true,
    disable_version_flag = true,
    disable_help_flag = true,
    help_template = "Commands:\n{subcommands}"
)]
struct SessionLine {
    #[command(subcommand)]
    command: SessionCommand,
}

/// Commands accepted inside a session.
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum SessionCommand {
    /// Book the court: reserve NAME START MINUTES
    Reserve {
        /// Name of the person booking
        name: String,
        /// Start of play (YYYY-MM-DDTHH:MM)
        #[arg(value_parser = parse_datetime)]
        start: NaiveDateTime,
        /// Length of play in minutes
        minutes: u32,
    },

    /// Cancel a booking: cancel NAME START
    Cancel {
        /// Name the booking was made under
        name: String,
        /// Start of the booking (YYYY-MM-DDTHH:MM)
        #[arg(value_parser = parse_datetime)]
        start: NaiveDateTime,
    },

    /// Check whether a slot is free: available START MINUTES
    Available {
        /// Start of the slot (YYYY-MM-DDTHH:MM)
        #[arg(value_parser = parse_datetime)]
        start: NaiveDateTime,
        /// Length of the slot in minutes
        minutes: u32,
    },

    /// Find the nearest free slot: next FROM MINUTES
    Next {
        /// Earliest acceptable start (YYYY-MM-DDTHH:MM)
        #[arg(value_parser = parse_datetime)]
        from: NaiveDateTime,
        /// Length of the slot in minutes
        minutes: u32,
    },

    /// Show one day's bookings: day DATE
    Day {
        /// Day to show (YYYY-MM-DD)
        #[arg(value_parser = parse_date)]
        date: NaiveDate,
    },

    /// Count a holder's bookings in the period containing DATE: count NAME DATE
    Count {
        /// Holder name
        name: String,
        /// Any day in the period (YYYY-MM-DD)
        #[arg(value_parser = parse_date)]
        date: NaiveDate,
    },

    /// List every booking in the order it was made
    List,

    /// Print the schedule for a date range: schedule FROM TO
    Schedule {
        /// First day (YYYY-MM-DD)
        #[arg(value_parser = parse_date)]
        from: NaiveDate,
        /// Last day, inclusive (YYYY-MM-DD)
        #[arg(value_parser = parse_date)]
        to: NaiveDate,
    },

    /// Export the schedule: export FROM TO [FORMAT] [FILE]
    Export {
        /// First day (YYYY-MM-DD)
        #[arg(value_parser = parse_date)]
        from: NaiveDate,
        /// Last day, inclusive (YYYY-MM-DD)
        #[arg(value_parser = parse_date)]
        to: NaiveDate,
        /// json or csv (defaults to the configured output format)
        format: Option<String>,
        /// Destination file (stdout if omitted)
        file: Option<PathBuf>,
    },

    /// End the session
    #[command(alias = "exit")]
    Quit,
}

/// What the shell should do after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOutcome {
    /// Read the next line.
    Continue,
    /// Stop reading input.
    Quit,
}

/// A store plus the settings session commands need.
pub struct Session<C: Clock> {
    store: ReservationStore<C>,
    export_format: ExportFormat,
}

impl<C: Clock> Session<C> {
    /// Create a session over `store`.
    pub fn new(store: ReservationStore<C>, export_format: ExportFormat) -> Self {
        Self {
            store,
            export_format,
        }
    }

    #[cfg(test)]
    fn store(&self) -> &ReservationStore<C> {
        &self.store
    }

    /// Parse and run one input line, writing results to `out`.
    ///
    /// Blank lines and lines starting with `#` are ignored.
    pub fn run_line(&mut self, line: &str, out: &mut impl Write) -> Result<LineOutcome, CliError> {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return Ok(LineOutcome::Continue);
        }

        let words = split_words(trimmed)?;
        let parsed = match SessionLine::try_parse_from(words) {
            Ok(parsed) => parsed,
            Err(e) if e.kind() == ErrorKind::DisplayHelp => {
                write!(out, "{}", e.render())?;
                return Ok(LineOutcome::Continue);
            }
            Err(e) => return Err(CliError::InvalidArguments(clap_message(&e))),
        };

        self.execute(parsed.command, out)
    }

    /// Run one parsed command.
    pub fn execute(
        &mut self,
        command: SessionCommand,
        out: &mut impl Write,
    ) -> Result<LineOutcome, CliError> {
        match command {
            SessionCommand::Reserve {
                name,
                start,
                minutes,
            } => {
                let duration = Duration::minutes(i64::from(minutes));
                self.store.add_reservation(&name, start, duration)?;
                if let Some(booked) = self.store.find_reservation(&name, start) {
                    writeln!(
                        out,
                        "Reserved court for {} from {} to {}",
                        booked.holder(),
                        format_slot(booked.start()),
                        booked.end().format("%H:%M")
                    )?;
                }
            }
            SessionCommand::Cancel { name, start } => {
                let removed = self.store.cancel_reservation(&name, start)?;
                writeln!(
                    out,
                    "Cancelled reservation for {} at {}",
                    removed.holder(),
                    format_slot(removed.start())
                )?;
            }
            SessionCommand::Available { start, minutes } => {
                let free = self.store.is_available(start, slot_length(minutes)?);
                writeln!(out, "{}", if free { "free" } else { "taken" })?;
            }
            SessionCommand::Next { from, minutes } => {
                let at = self
                    .store
                    .find_next_available(from, slot_length(minutes)?)?;
                writeln!(out, "{}", format_slot(at))?;
            }
            SessionCommand::Day { date } => {
                for block in render_schedule(&self.store, date, date) {
                    write!(out, "{block}")?;
                }
            }
            SessionCommand::Count { name, date } => {
                writeln!(out, "{}", self.store.count_for_user_in_period(&name, date))?;
            }
            SessionCommand::List => {
                if self.store.is_empty() {
                    writeln!(out, "No reservations")?;
                }
                for reservation in self.store.reservations() {
                    writeln!(
                        out,
                        "* {} {} - {}",
                        reservation.holder(),
                        format_slot(reservation.start()),
                        reservation.end().format("%H:%M")
                    )?;
                }
            }
            SessionCommand::Schedule { from, to } => {
                for block in render_schedule(&self.store, from, to) {
                    write!(out, "{block}")?;
                }
            }
            SessionCommand::Export {
                from,
                to,
                format,
                file,
            } => {
                let format = format.unwrap_or_else(|| self.export_format.to_string());
                match file {
                    Some(path) => {
                        export_schedule(&self.store, from, to, &format, &path)?;
                        writeln!(out, "Exported schedule to {}", path.display())?;
                    }
                    None => write!(out, "{}", write_schedule(&self.store, from, to, &format)?)?,
                }
            }
            SessionCommand::Quit => return Ok(LineOutcome::Quit),
        }

        Ok(LineOutcome::Continue)
    }
}

/// Length of a queried slot; an empty slot is rejected like an empty booking.
fn slot_length(minutes: u32) -> Result<Duration, CliError> {
    if minutes == 0 {
        return Err(CliError::Library(Error::Validation {
            field: "duration".into(),
            message: "duration must be positive, got 0 minute(s)".into(),
        }));
    }
    Ok(Duration::minutes(i64::from(minutes)))
}

/// First line of a clap error without its `error: ` prefix.
fn clap_message(e: &clap::Error) -> String {
    let rendered = e.render().to_string();
    let first = rendered.lines().next().unwrap_or_default();
    first.strip_prefix("error: ").unwrap_or(first).to_string()
}
