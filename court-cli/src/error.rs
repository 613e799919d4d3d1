//! Errors surfaced by the `court` binary and the exit code each maps to.
//!
//! | code | meaning                                         |
//! |------|-------------------------------------------------|
//! | 1    | a booking rule refused the request, or a session line failed |
//! | 4    | malformed input                                 |
//! | 5    | reading or writing a file failed                |
//! | 6    | any other library failure                       |
//! | 7    | configuration could not be loaded               |

use court::Error as LibError;
use thiserror::Error;

/// Failure of a `court` subcommand.
#[derive(Debug, Error)]
pub enum CliError {
    /// Raised by the court library.
    #[error(transparent)]
    Library(#[from] LibError),

    /// A flag, argument or session line could not be understood.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// Terminal or script I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Layered configuration was unreadable or rejected.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The command ran but did not succeed, e.g. a session with failed lines.
    #[error("{0}")]
    SemanticFailure(String),
}

impl CliError {
    /// Process exit status for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::SemanticFailure(_) => 1,
            Self::InvalidArguments(_) => 4,
            Self::Io(_) => 5,
            Self::Config(_) => 7,
            Self::Library(e) if e.is_rule_violation() => 1,
            Self::Library(LibError::Validation { .. } | LibError::UnsupportedFormat { .. }) => 4,
            Self::Library(LibError::Io(_)) => 5,
            Self::Library(LibError::Configuration(_)) => 7,
            Self::Library(_) => 6,
        }
    }
}
