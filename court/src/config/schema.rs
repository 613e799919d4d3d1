//! Configuration schema definitions.
//!
//! This module defines the configuration structure for court: the booking
//! rules applied by the store and the default export format.

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::output::ExportFormat;
use crate::policy::{BookingPolicy, LimitPeriod};

/// Complete configuration structure.
///
/// Every field is optional so that configuration files only need to mention
/// what they change. Unset fields fall back to the library defaults.
///
/// # Examples
///
/// ```
/// use court::config::{Config, PolicyConfig};
///
/// let config = Config {
///     policy: Some(PolicyConfig {
///         weekly_limit: Some(3),
///         ..Default::default()
///     }),
///     ..Default::default()
/// };
/// assert_eq!(config.booking_policy().weekly_limit(), 3);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Booking rule settings.
    pub policy: Option<PolicyConfig>,

    /// Default format for schedule exports.
    pub output_format: Option<ExportFormat>,
}

/// Booking rule settings.
///
/// # Examples
///
/// ```
/// use court::config::PolicyConfig;
///
/// let yaml = "weekly_limit: 4\nlimit_period: day\n";
/// let policy: PolicyConfig = serde_yaml::from_str(yaml).unwrap();
/// assert_eq!(policy.weekly_limit, Some(4));
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct PolicyConfig {
    /// Reservations a holder may make per period.
    pub weekly_limit: Option<usize>,

    /// Period the limit is counted over (`week` or `day`).
    pub limit_period: Option<LimitPeriod>,

    /// Minimum minutes between now and the start of play for booking and
    /// cancelling.
    pub lead_time_minutes: Option<u32>,

    /// Minutes between candidate start times in the next-slot search.
    pub probe_step_minutes: Option<u32>,

    /// Days the next-slot search looks ahead.
    pub search_horizon_days: Option<u32>,
}

impl Config {
    /// Builds the booking policy described by this configuration.
    ///
    /// Unset values keep the [`BookingPolicy`] defaults.
    #[must_use]
    pub fn booking_policy(&self) -> BookingPolicy {
        let mut policy = BookingPolicy::default();
        let Some(settings) = &self.policy else {
            return policy;
        };

        if let Some(limit) = settings.weekly_limit {
            policy = policy.with_weekly_limit(limit);
        }
        if let Some(period) = settings.limit_period {
            policy = policy.with_limit_period(period);
        }
        if let Some(minutes) = settings.lead_time_minutes {
            policy = policy.with_lead_time(Duration::minutes(i64::from(minutes)));
        }
        if let Some(minutes) = settings.probe_step_minutes {
            policy = policy.with_probe_step(Duration::minutes(i64::from(minutes)));
        }
        if let Some(days) = settings.search_horizon_days {
            policy = policy.with_search_horizon(Duration::days(i64::from(days)));
        }

        policy
    }

    /// Returns the configured export format, or JSON if unset.
    #[must_use]
    pub fn export_format(&self) -> ExportFormat {
        self.output_format.unwrap_or(ExportFormat::Json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.policy.is_none());
        assert!(config.output_format.is_none());
        assert_eq!(config.booking_policy(), BookingPolicy::default());
        assert_eq!(config.export_format(), ExportFormat::Json);
    }

    #[test]
    fn test_config_deny_unknown_fields() {
        let yaml = "unknown_field: value\n";
        let result: std::result::Result<Config, _> = serde_yaml::from_str(yaml);
        assert!(result.is_err());

        let yaml = "policy:\n  weekly_limt: 3\n";
        let result: std::result::Result<Config, _> = serde_yaml::from_str(yaml);
        assert!(result.is_err());
    }

    #[test]
    fn test_minimal_config() {
        let config: Config = serde_yaml::from_str("output_format: csv\n").unwrap();
        assert_eq!(config.output_format, Some(ExportFormat::Csv));
        assert!(config.policy.is_none());
    }

    #[test]
    fn test_complete_config() {
        let yaml = r"
policy:
  weekly_limit: 5
  limit_period: day
  lead_time_minutes: 30
  probe_step_minutes: 15
  search_horizon_days: 7
output_format: json
";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        let policy = config.booking_policy();

        assert_eq!(policy.weekly_limit(), 5);
        assert_eq!(policy.limit_period(), LimitPeriod::Day);
        assert_eq!(policy.lead_time(), Duration::minutes(30));
        assert_eq!(policy.probe_step(), Duration::minutes(15));
        assert_eq!(policy.search_horizon(), Duration::days(7));
        assert_eq!(config.export_format(), ExportFormat::Json);
    }

    #[test]
    fn test_partial_policy_keeps_defaults() {
        let config = Config {
            policy: Some(PolicyConfig {
                lead_time_minutes: Some(0),
                ..Default::default()
            }),
            ..Default::default()
        };
        let policy = config.booking_policy();

        assert_eq!(policy.lead_time(), Duration::zero());
        assert_eq!(policy.weekly_limit(), 2);
        assert_eq!(policy.probe_step(), Duration::minutes(30));
    }

    #[test]
    fn test_invalid_limit_period_rejected() {
        let result: std::result::Result<Config, _> =
            serde_yaml::from_str("policy:\n  limit_period: month\n");
        assert!(result.is_err());
    }
}
