//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `COURT_*` environment variables that
//! override configuration file values.

use std::env;
use std::str::FromStr;

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::output::ExportFormat;
use crate::policy::LimitPeriod;

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use court::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// Reads `COURT_WEEKLY_LIMIT`, `COURT_LIMIT_PERIOD`,
    /// `COURT_LEAD_TIME_MINUTES`, `COURT_PROBE_STEP_MINUTES`,
    /// `COURT_SEARCH_HORIZON_DAYS` and `COURT_OUTPUT_FORMAT`.
    ///
    /// # Errors
    ///
    /// Returns an error if any environment variable value is invalid
    /// (e.g., a non-numeric limit or an unknown period).
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        let mut policy = config.policy.clone().unwrap_or_default();
        let mut modified = false;

        if let Ok(val) = env::var("COURT_WEEKLY_LIMIT") {
            policy.weekly_limit = Some(Self::parse_number("COURT_WEEKLY_LIMIT", &val)?);
            modified = true;
        }

        if let Ok(val) = env::var("COURT_LIMIT_PERIOD") {
            policy.limit_period = Some(LimitPeriod::parse(&val).map_err(|message| {
                Error::Validation {
                    field: "COURT_LIMIT_PERIOD".into(),
                    message,
                }
            })?);
            modified = true;
        }

        if let Ok(val) = env::var("COURT_LEAD_TIME_MINUTES") {
            policy.lead_time_minutes = Some(Self::parse_number("COURT_LEAD_TIME_MINUTES", &val)?);
            modified = true;
        }

        if let Ok(val) = env::var("COURT_PROBE_STEP_MINUTES") {
            policy.probe_step_minutes =
                Some(Self::parse_number("COURT_PROBE_STEP_MINUTES", &val)?);
            modified = true;
        }

        if let Ok(val) = env::var("COURT_SEARCH_HORIZON_DAYS") {
            policy.search_horizon_days =
                Some(Self::parse_number("COURT_SEARCH_HORIZON_DAYS", &val)?);
            modified = true;
        }

        if modified {
            config.policy = Some(policy);
        }

        if let Ok(val) = env::var("COURT_OUTPUT_FORMAT") {
            config.output_format = Some(val.parse::<ExportFormat>().map_err(|e| {
                Error::Validation {
                    field: "COURT_OUTPUT_FORMAT".into(),
                    message: e.to_string(),
                }
            })?);
        }

        Ok(())
    }

    /// Parse a non-negative integer from an environment variable value.
    fn parse_number<T: FromStr>(field: &str, s: &str) -> Result<T> {
        s.trim().parse().map_err(|_| Error::Validation {
            field: field.into(),
            message: format!("Must be a non-negative integer, got '{s}'"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 6] = [
        "COURT_WEEKLY_LIMIT",
        "COURT_LIMIT_PERIOD",
        "COURT_LEAD_TIME_MINUTES",
        "COURT_PROBE_STEP_MINUTES",
        "COURT_SEARCH_HORIZON_DAYS",
        "COURT_OUTPUT_FORMAT",
    ];

    /// Runs `f` with the given variables set, restoring the environment after.
    fn with_env(vars: &[(&str, &str)], f: impl FnOnce()) {
        let saved: Vec<_> = VARS.iter().map(|name| (*name, env::var(name).ok())).collect();
        for name in VARS {
            env::remove_var(name);
        }
        for (name, value) in vars {
            env::set_var(name, value);
        }

        f();

        for (name, value) in saved {
            match value {
                Some(value) => env::set_var(name, value),
                None => env::remove_var(name),
            }
        }
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(EnvironmentConfig::parse_number::<u32>("X", "15").unwrap(), 15);
        assert_eq!(EnvironmentConfig::parse_number::<u32>("X", " 7 ").unwrap(), 7);
        assert!(EnvironmentConfig::parse_number::<u32>("X", "-1").is_err());
        assert!(EnvironmentConfig::parse_number::<usize>("X", "many").is_err());
    }

    #[test]
    #[serial]
    fn test_apply_overrides_no_env_vars() {
        with_env(&[], || {
            let mut config = Config::default();
            EnvironmentConfig::apply_overrides(&mut config).unwrap();
            assert_eq!(config, Config::default());
        });
    }

    #[test]
    #[serial]
    fn test_apply_policy_overrides() {
        with_env(
            &[
                ("COURT_WEEKLY_LIMIT", "3"),
                ("COURT_LIMIT_PERIOD", "Day"),
                ("COURT_LEAD_TIME_MINUTES", "0"),
            ],
            || {
                let mut config = Config::default();
                EnvironmentConfig::apply_overrides(&mut config).unwrap();

                let policy = config.policy.unwrap();
                assert_eq!(policy.weekly_limit, Some(3));
                assert_eq!(policy.limit_period, Some(LimitPeriod::Day));
                assert_eq!(policy.lead_time_minutes, Some(0));
                assert_eq!(policy.probe_step_minutes, None);
            },
        );
    }

    #[test]
    #[serial]
    fn test_apply_output_format_override() {
        with_env(&[("COURT_OUTPUT_FORMAT", "csv")], || {
            let mut config = Config::default();
            EnvironmentConfig::apply_overrides(&mut config).unwrap();
            assert_eq!(config.output_format, Some(ExportFormat::Csv));
            assert!(config.policy.is_none());
        });
    }

    #[test]
    #[serial]
    fn test_invalid_values_rejected() {
        with_env(&[("COURT_SEARCH_HORIZON_DAYS", "soon")], || {
            let err = EnvironmentConfig::apply_overrides(&mut Config::default()).unwrap_err();
            assert!(
                matches!(err, Error::Validation { ref field, .. } if field == "COURT_SEARCH_HORIZON_DAYS")
            );
        });

        with_env(&[("COURT_LIMIT_PERIOD", "month")], || {
            assert!(EnvironmentConfig::apply_overrides(&mut Config::default()).is_err());
        });

        with_env(&[("COURT_OUTPUT_FORMAT", "xml")], || {
            assert!(EnvironmentConfig::apply_overrides(&mut Config::default()).is_err());
        });
    }
}
