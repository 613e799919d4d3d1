//! CLI command implementations.
//!
//! - `shell`: Run booking commands against an in-memory court
//! - `validate`: Validate a configuration file
//! - `completions`: Generate shell completion scripts
//!
//! The commands understood inside a shell session live in [`session`].

pub mod completions;
pub mod session;
pub mod shell;
pub mod validate;

pub use completions::CompletionsCommand;
pub use session::{LineOutcome, Session, SessionCommand};
pub use shell::ShellCommand;
pub use validate::ValidateCommand;
