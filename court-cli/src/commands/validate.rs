//! `court validate <CONFIG_PATH>`: check one configuration file on its own,
//! without layering it over any other source.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use court::config::{Config, ConfigValidator};
use std::path::PathBuf;

/// Validate a court configuration file.
#[derive(Args, Debug)]
pub struct ValidateCommand {
    /// Configuration file to validate
    #[arg(value_name = "CONFIG_PATH")]
    pub config_path: PathBuf,
}

impl ValidateCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        if !self.config_path.is_file() {
            return Err(CliError::InvalidArguments(format!(
                "File not found: {}",
                self.config_path.display()
            )));
        }

        let text = std::fs::read_to_string(&self.config_path)?;
        let config = parse(&text).map_err(|e| {
            eprintln!("Parse error: {e}");
            CliError::SemanticFailure("Configuration file is invalid".into())
        })?;

        ConfigValidator::validate(&config).map_err(|e| {
            eprintln!("Validation error: {e}");
            CliError::SemanticFailure("Configuration validation failed".into())
        })?;

        if !global.quiet {
            println!("Configuration is valid");
        }
        if global.verbose {
            print_effective_settings(&config);
        }
        Ok(())
    }
}

fn parse(text: &str) -> Result<Config, serde_yaml::Error> {
    if text.trim().is_empty() {
        Ok(Config::default())
    } else {
        serde_yaml::from_str(text)
    }
}

fn print_effective_settings(config: &Config) {
    let policy = config.booking_policy();
    println!("  limit: {} per {}", policy.weekly_limit(), policy.limit_period());
    println!("  lead time: {} minute(s)", policy.lead_time().num_minutes());
    println!(
        "  search: every {} minute(s) for {} day(s)",
        policy.probe_step().num_minutes(),
        policy.search_horizon().num_days()
    );
    println!("  export format: {}", config.export_format());
}
