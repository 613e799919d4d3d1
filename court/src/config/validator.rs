//! Configuration validation.
//!
//! Rejects settings the store cannot work with, such as a zero booking limit
//! or a next-slot search that never advances.

use crate::config::schema::{Config, PolicyConfig};
use crate::error::{Error, Result};
use crate::policy::{DEFAULT_PROBE_STEP_MINUTES, DEFAULT_SEARCH_HORIZON_DAYS};

/// Validates configuration values.
///
/// # Examples
///
/// ```
/// use court::config::{Config, ConfigValidator};
///
/// let config = Config::default();
/// ConfigValidator::validate(&config).unwrap();
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the first offending field.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref policy) = config.policy {
            Self::validate_policy(policy)?;
        }

        Ok(())
    }

    /// Validate booking rule settings.
    fn validate_policy(policy: &PolicyConfig) -> Result<()> {
        if policy.weekly_limit == Some(0) {
            return Err(Error::Validation {
                field: "policy.weekly_limit".into(),
                message: "Limit must be greater than 0".into(),
            });
        }

        if policy.probe_step_minutes == Some(0) {
            return Err(Error::Validation {
                field: "policy.probe_step_minutes".into(),
                message: "Probe step must be greater than 0".into(),
            });
        }

        if policy.search_horizon_days == Some(0) {
            return Err(Error::Validation {
                field: "policy.search_horizon_days".into(),
                message: "Search horizon must be greater than 0".into(),
            });
        }

        // Unset values are compared using their defaults.
        let step = policy
            .probe_step_minutes
            .map_or(DEFAULT_PROBE_STEP_MINUTES, i64::from);
        let days = policy
            .search_horizon_days
            .map_or(DEFAULT_SEARCH_HORIZON_DAYS, i64::from);
        if step > days * 24 * 60 {
            return Err(Error::Validation {
                field: "policy.probe_step_minutes".into(),
                message: format!(
                    "Probe step of {step} minute(s) exceeds the {days}-day search horizon"
                ),
            });
        }

        Ok(())
    }
}
