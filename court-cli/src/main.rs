//! Main entry point for the court CLI.
//!
//! This is the command-line interface for the court reservation system.
//! It provides commands for:
//! - `shell`: Book, cancel and inspect reservations in a session (default)
//! - `validate`: Check a configuration file
//! - `completions`: Generate shell completion scripts

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    if let Err(e) = court::install_logger(court::init_logger(cli.verbose, cli.quiet)) {
        eprintln!("Warning: {e}");
    }

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        config_dir: cli.config_dir,
        now: cli.now,
    };

    // Execute the command
    let result = match cli.command {
        None => commands::ShellCommand::default().execute(&global),
        Some(cli::Command::Shell(cmd)) => cmd.execute(&global),
        Some(cli::Command::Validate(cmd)) => cmd.execute(&global),
        Some(cli::Command::Completions(cmd)) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
