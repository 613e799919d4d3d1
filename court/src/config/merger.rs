//! Configuration merging and precedence handling.
//!
//! Sources are merged field by field: a value set in a higher-precedence
//! source replaces the same value from a lower one, and unset values leave
//! the lower one in place.

use crate::config::loader::ConfigSource;
use crate::config::schema::{Config, PolicyConfig};

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use court::config::{Config, ConfigMerger};
/// use court::output::ExportFormat;
///
/// let low = Config { output_format: Some(ExportFormat::Json), ..Default::default() };
/// let high = Config { output_format: Some(ExportFormat::Csv), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.output_format, Some(ExportFormat::Csv));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple configuration sources into final config.
    ///
    /// Sources should be provided in order from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();

        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }

        result
    }

    /// Merge source config into target (source overwrites target).
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.output_format.is_some() {
            target.output_format = source.output_format;
        }

        if let Some(ref source_policy) = source.policy {
            target.policy = Some(match &target.policy {
                Some(target_policy) => Self::merge_policy(target_policy, source_policy),
                None => source_policy.clone(),
            });
        }
    }

    /// Merge policy settings, preferring values from `source`.
    fn merge_policy(target: &PolicyConfig, source: &PolicyConfig) -> PolicyConfig {
        PolicyConfig {
            weekly_limit: source.weekly_limit.or(target.weekly_limit),
            limit_period: source.limit_period.or(target.limit_period),
            lead_time_minutes: source.lead_time_minutes.or(target.lead_time_minutes),
            probe_step_minutes: source.probe_step_minutes.or(target.probe_step_minutes),
            search_horizon_days: source.search_horizon_days.or(target.search_horizon_days),
        }
    }
}
