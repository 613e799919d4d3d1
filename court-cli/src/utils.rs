//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including configuration loading, clock selection, and argument parsing.

use crate::error::CliError;
use chrono::{NaiveDate, NaiveDateTime};
use court::{Clock, Config, ConfigBuilder, FixedClock, ReservationStore, SystemClock};
use std::path::PathBuf;

/// Accepted formats for date-time arguments, tried in order.
const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
];

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the user configuration directory.
    pub config_dir: Option<PathBuf>,

    /// Pin the clock to this time instead of reading the system clock.
    pub now: Option<NaiveDateTime>,
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Environment variables
/// 2. Project configuration files
/// 3. User configuration (`--config-dir` or `~/.court`)
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();

    if let Some(ref dir) = global.config_dir {
        builder = builder.with_config_dir(dir);
    }

    builder.build().map_err(|e| CliError::Config(e.to_string()))
}

/// The clock a CLI session runs against.
#[derive(Debug)]
pub enum CliClock {
    /// The local system time.
    System(SystemClock),
    /// A time pinned with `--now`.
    Fixed(FixedClock),
}

impl CliClock {
    /// Select the clock for the given global options.
    pub fn from_options(global: &GlobalOptions) -> Self {
        match global.now {
            Some(now) => CliClock::Fixed(FixedClock::new(now)),
            None => CliClock::System(SystemClock),
        }
    }
}

impl Clock for CliClock {
    fn now(&self) -> NaiveDateTime {
        match self {
            CliClock::System(clock) => clock.now(),
            CliClock::Fixed(clock) => clock.now(),
        }
    }
}

/// Build an empty store using the configured policy and selected clock.
pub fn open_store(global: &GlobalOptions, config: &Config) -> ReservationStore<CliClock> {
    ReservationStore::with_clock(config.booking_policy(), CliClock::from_options(global))
}

/// Parse a date-time argument such as `2024-06-10T10:00`.
pub fn parse_datetime(s: &str) -> Result<NaiveDateTime, String> {
    let s = s.trim();
    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(s, format).ok())
        .ok_or_else(|| format!("invalid date-time '{s}' (expected YYYY-MM-DDTHH:MM)"))
}

/// Parse a date argument such as `2024-06-10`.
pub fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| format!("invalid date '{s}' (expected YYYY-MM-DD)"))
}

/// Format a time slot for display.
pub fn format_slot(at: NaiveDateTime) -> String {
    at.format("%Y-%m-%d %H:%M").to_string()
}

/// Split a session line into words.
///
/// Words are separated by whitespace. Single or double quotes group words
/// containing spaces, and a backslash outside single quotes escapes the next
/// character.
pub fn split_words(line: &str) -> Result<Vec<String>, CliError> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some('\''), c) => current.push(c),
            (_, '\\') => {
                let escaped = chars.next().ok_or_else(|| {
                    CliError::InvalidArguments("trailing backslash".to_string())
                })?;
                current.push(escaped);
                in_word = true;
            }
            (Some(_), c) => current.push(c),
            (None, '"' | '\'') => {
                quote = Some(c);
                in_word = true;
            }
            (None, c) if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            (None, c) => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if let Some(q) = quote {
        return Err(CliError::InvalidArguments(format!("unterminated {q} quote")));
    }
    if in_word {
        words.push(current);
    }

    Ok(words)
}
