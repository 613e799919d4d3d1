//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{CompletionsCommand, ShellCommand, ValidateCommand};
use crate::utils::parse_datetime;
use chrono::NaiveDateTime;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for booking a single shared court.
#[derive(Parser, Debug)]
#[command(name = "court")]
#[command(version, about = "Book a shared court by time slot", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the user configuration directory
    #[arg(long, value_name = "PATH", global = true, env = "COURT_CONFIG_DIR")]
    pub config_dir: Option<PathBuf>,

    /// Pin the current time (YYYY-MM-DDTHH:MM) instead of using the system clock
    #[arg(long, value_name = "DATETIME", global = true, env = "COURT_NOW", value_parser = parse_datetime)]
    pub now: Option<NaiveDateTime>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run booking commands from stdin or a script (default)
    Shell(ShellCommand),

    /// Validate a configuration file
    Validate(ValidateCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
