//! Property-based tests for configuration merging.

use super::merger::ConfigMerger;
use super::schema::{Config, PolicyConfig};
use crate::output::ExportFormat;
use crate::policy::LimitPeriod;
use proptest::prelude::*;

fn policy_strategy() -> impl Strategy<Value = PolicyConfig> {
    (
        prop::option::of(1usize..=10),
        prop::option::of(prop_oneof![Just(LimitPeriod::Week), Just(LimitPeriod::Day)]),
        prop::option::of(0u32..=240),
        prop::option::of(1u32..=120),
        prop::option::of(1u32..=30),
    )
        .prop_map(
            |(weekly_limit, limit_period, lead_time_minutes, probe_step_minutes, search_horizon_days)| {
                PolicyConfig {
                    weekly_limit,
                    limit_period,
                    lead_time_minutes,
                    probe_step_minutes,
                    search_horizon_days,
                }
            },
        )
}

fn config_strategy() -> impl Strategy<Value = Config> {
    (
        prop::option::of(policy_strategy()),
        prop::option::of(prop_oneof![Just(ExportFormat::Json), Just(ExportFormat::Csv)]),
    )
        .prop_map(|(policy, output_format)| Config {
            policy,
            output_format,
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 1000,
        .. ProptestConfig::default()
    })]

    // Every value set in the higher source survives; unset ones fall through.
    #[test]
    fn config_merge_higher_precedence_wins(low in config_strategy(), high in config_strategy()) {
        let mut result = low.clone();
        ConfigMerger::merge_into(&mut result, &high);

        prop_assert_eq!(result.output_format, high.output_format.or(low.output_format));

        let merged = result.policy.clone().unwrap_or_default();
        let low_policy = low.policy.clone().unwrap_or_default();
        let high_policy = high.policy.clone().unwrap_or_default();
        prop_assert_eq!(merged.weekly_limit, high_policy.weekly_limit.or(low_policy.weekly_limit));
        prop_assert_eq!(merged.limit_period, high_policy.limit_period.or(low_policy.limit_period));
        prop_assert_eq!(
            merged.lead_time_minutes,
            high_policy.lead_time_minutes.or(low_policy.lead_time_minutes)
        );
        prop_assert_eq!(
            merged.search_horizon_days,
            high_policy.search_horizon_days.or(low_policy.search_horizon_days)
        );
    }

    // Merging a config into itself changes nothing.
    #[test]
    fn config_merge_idempotent(config in config_strategy()) {
        let mut result = config.clone();
        ConfigMerger::merge_into(&mut result, &config);
        prop_assert_eq!(result, config);
    }

    // Merging an empty config is the identity.
    #[test]
    fn config_merge_empty_is_identity(config in config_strategy()) {
        let mut result = config.clone();
        ConfigMerger::merge_into(&mut result, &Config::default());
        prop_assert_eq!(result, config);
    }

    // Serialized configs parse back to the same value.
    #[test]
    fn config_yaml_roundtrip(config in config_strategy()) {
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
        prop_assert_eq!(parsed, config);
    }
}
