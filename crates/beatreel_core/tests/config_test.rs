//! Tests for configuration value objects.

use beatreel_core::{PlannerConfig, ReelConfig, StitchPolicy};

#[test]
fn test_default_config_is_valid() {
    let config = ReelConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.request.min_script_chars, 20);
    assert_eq!(config.defaults.target_duration_secs, 480.0);
}

#[test]
fn test_partial_sections_fill_defaults() {
    let json = r#"{ "planner": { "min_beat_seconds": 6.0 }, "stitch": { "policy": "require-all" } }"#;
    let config: ReelConfig = serde_json::from_str(json).expect("valid config");

    assert_eq!(config.planner.min_beat_seconds, 6.0);
    assert_eq!(config.planner.base_order, 1);
    assert_eq!(config.stitch.policy, StitchPolicy::RequireAll);
    assert_eq!(config.render.max_concurrent, 8);
}

#[test]
fn test_invalid_planner_values_rejected() {
    let config = PlannerConfig {
        ceiling_ratio: 0.5,
        ..PlannerConfig::default()
    };
    assert!(config.validate().is_err());

    let config = PlannerConfig {
        min_beat_seconds: 0.0,
        ..PlannerConfig::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn test_inverted_request_bounds_rejected() {
    let mut config = ReelConfig::default();
    config.request.min_target_duration_secs = 900.0;
    config.request.max_target_duration_secs = 300.0;
    assert!(config.validate().is_err());
}

#[test]
fn test_zero_concurrency_rejected() {
    let mut config = ReelConfig::default();
    config.render.max_concurrent = 0;
    assert!(config.validate().is_err());
}
