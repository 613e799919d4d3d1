//! Diagnostics for the court library.
//!
//! Booking code reports through the `log` facade: `info!` for accepted and
//! cancelled bookings, `debug!` for rejected requests, `warn!` for exhausted
//! searches. [`Logger`] is the stderr backend the CLI installs; its
//! [`LogLevel`] decides how much of that reaches the terminal.

use std::env;
use std::fmt;
use std::str::FromStr;

use log::{LevelFilter, Metadata, Record};

/// Environment variable consulted when no verbosity flag is given.
pub const LOG_MODE_ENV: &str = "COURT_LOG_MODE";

/// How chatty the court tools are on stderr.
///
/// ```
/// use court::LogLevel;
///
/// let level: LogLevel = "Verbose".parse().unwrap();
/// assert_eq!(level, LogLevel::Verbose);
/// assert!(LogLevel::Quiet < level);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Nothing but command output.
    Quiet,
    /// Warnings and errors, such as a search that ran past its horizon.
    #[default]
    Normal,
    /// Everything, including each accepted, cancelled or rejected booking.
    Verbose,
}

impl LogLevel {
    const NAMES: [(&'static str, Self); 3] = [
        ("quiet", Self::Quiet),
        ("normal", Self::Normal),
        ("verbose", Self::Verbose),
    ];

    /// Pick a level from the CLI flags, falling back to `COURT_LOG_MODE`.
    ///
    /// `--verbose` wins over `--quiet`. An unrecognised environment value is
    /// ignored.
    #[must_use]
    pub fn from_flags(verbose: bool, quiet: bool) -> Self {
        match (verbose, quiet) {
            (true, _) => Self::Verbose,
            (false, true) => Self::Quiet,
            (false, false) => env::var(LOG_MODE_ENV)
                .ok()
                .and_then(|mode| mode.parse().ok())
                .unwrap_or_default(),
        }
    }

    /// The highest `log` level this verbosity lets through.
    #[must_use]
    pub const fn filter(self) -> LevelFilter {
        match self {
            Self::Quiet => LevelFilter::Off,
            Self::Normal => LevelFilter::Warn,
            Self::Verbose => LevelFilter::Debug,
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::NAMES
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(s.trim()))
            .map(|&(_, level)| level)
            .ok_or_else(|| format!("unknown log mode '{s}' (expected quiet, normal or verbose)"))
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = Self::NAMES
            .iter()
            .find(|(_, level)| level == self)
            .map_or("normal", |(name, _)| name);
        f.write_str(name)
    }
}

/// `log` backend that writes `court: <level>: <message>` lines to stderr.
#[derive(Debug, Default)]
pub struct Logger {
    level: LogLevel,
}

impl Logger {
    /// A logger at `level`.
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// The verbosity this logger was built with.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level.filter()
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let level = record.level().as_str().to_ascii_lowercase();
        eprintln!("court: {level}: {}", record.args());
    }

    fn flush(&self) {}
}

/// Build the stderr logger for the given CLI flags.
///
/// ```
/// use court::{init_logger, LogLevel};
///
/// assert_eq!(init_logger(false, true).level(), LogLevel::Quiet);
/// ```
#[must_use]
pub fn init_logger(verbose: bool, quiet: bool) -> Logger {
    Logger::new(LogLevel::from_flags(verbose, quiet))
}

/// Install `logger` as the process-wide `log` backend.
///
/// # Errors
///
/// Fails if a backend is already installed; the existing one stays active.
pub fn install_logger(logger: Logger) -> Result<(), log::SetLoggerError> {
    let filter = logger.level().filter();
    log::set_boxed_logger(Box::new(logger))?;
    log::set_max_level(filter);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::{Level, Log};
    use serial_test::serial;

    fn with_log_mode<F: FnOnce()>(value: Option<&str>, f: F) {
        let saved = env::var(LOG_MODE_ENV).ok();
        match value {
            Some(v) => env::set_var(LOG_MODE_ENV, v),
            None => env::remove_var(LOG_MODE_ENV),
        }
        f();
        match saved {
            Some(v) => env::set_var(LOG_MODE_ENV, v),
            None => env::remove_var(LOG_MODE_ENV),
        }
    }

    #[test]
    fn test_names_round_trip_through_display() {
        for level in [LogLevel::Quiet, LogLevel::Normal, LogLevel::Verbose] {
            assert_eq!(level.to_string().parse::<LogLevel>(), Ok(level));
        }
        assert_eq!(" QUIET ".parse::<LogLevel>(), Ok(LogLevel::Quiet));
    }

    #[test]
    fn test_unknown_mode_is_rejected() {
        let err = "chatty".parse::<LogLevel>().unwrap_err();
        assert!(err.contains("chatty"));
        assert!("".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_filters() {
        assert_eq!(LogLevel::Quiet.filter(), LevelFilter::Off);
        assert_eq!(LogLevel::Normal.filter(), LevelFilter::Warn);
        assert_eq!(LogLevel::Verbose.filter(), LevelFilter::Debug);
    }

    #[test]
    fn test_enabled_follows_level() {
        let warn = Metadata::builder().level(Level::Warn).build();
        let debug = Metadata::builder().level(Level::Debug).build();
        let trace = Metadata::builder().level(Level::Trace).build();

        assert!(Logger::default().enabled(&warn));
        assert!(!Logger::default().enabled(&debug));
        assert!(Logger::new(LogLevel::Verbose).enabled(&debug));
        assert!(!Logger::new(LogLevel::Verbose).enabled(&trace));
        assert!(!Logger::new(LogLevel::Quiet).enabled(&warn));
    }

    #[test]
    fn test_flags_take_priority() {
        assert_eq!(init_logger(true, false).level(), LogLevel::Verbose);
        assert_eq!(init_logger(true, true).level(), LogLevel::Verbose);
        assert_eq!(init_logger(false, true).level(), LogLevel::Quiet);
    }

    #[test]
    #[serial]
    fn test_env_mode_used_without_flags() {
        with_log_mode(None, || {
            assert_eq!(LogLevel::from_flags(false, false), LogLevel::Normal);
        });
        with_log_mode(Some("verbose"), || {
            assert_eq!(LogLevel::from_flags(false, false), LogLevel::Verbose);
            assert_eq!(LogLevel::from_flags(false, true), LogLevel::Quiet);
        });
        with_log_mode(Some("loud"), || {
            assert_eq!(LogLevel::from_flags(false, false), LogLevel::Normal);
        });
    }
}
