//! Tests for layered configuration loading.

use beatreel_core::{ReelConfig, StitchPolicy};
use beatreel_error::BeatreelErrorKind;
use std::io::Write;
use tempfile::Builder;

#[test]
fn test_bundled_config_matches_type_defaults() {
    let bundled: ReelConfig = {
        let path = Builder::new().suffix(".toml").tempfile().unwrap();
        std::fs::write(path.path(), beatreel_config::BUNDLED_CONFIG).unwrap();
        beatreel_config::from_file(path.path()).unwrap()
    };

    assert_eq!(bundled, ReelConfig::default());
}

#[test]
fn test_config_from_file_overrides_sections() {
    let mut temp_file = Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(
        temp_file,
        r#"
[planner]
min_beat_seconds = 8.0

[stitch]
policy = "require-all"

[render]
max_concurrent = 2
"#
    )
    .unwrap();

    let config = beatreel_config::from_file(temp_file.path()).unwrap();

    assert_eq!(config.planner.min_beat_seconds, 8.0);
    assert_eq!(config.stitch.policy, StitchPolicy::RequireAll);
    assert_eq!(config.render.max_concurrent, 2);
    // Untouched sections keep their defaults
    assert_eq!(config.defaults.voice_profile, "narrator-vivid");
}

#[test]
fn test_invalid_values_fail_validation() {
    let mut temp_file = Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(
        temp_file,
        r#"
[render]
max_concurrent = 0
"#
    )
    .unwrap();

    let err = beatreel_config::from_file(temp_file.path()).unwrap_err();
    assert!(format!("{}", err).contains("max_concurrent"));
}

#[test]
fn test_missing_file_is_an_error() {
    let result = beatreel_config::from_file("/definitely/not/here/beatreel.toml");
    assert!(result.is_err());
}

#[test]
fn test_load_with_override_applies_file() {
    let mut temp_file = Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(
        temp_file,
        r#"
[defaults]
voice_profile = "narrator-calm"
"#
    )
    .unwrap();

    let config = beatreel_config::load_with_override(Some(temp_file.path())).unwrap();
    assert_eq!(config.defaults.voice_profile, "narrator-calm");
}

#[test]
fn test_validation_error_names_its_file() {
    let mut temp_file = Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(
        temp_file,
        r#"
[planner]
min_beat_seconds = 0.0
"#
    )
    .unwrap();

    let err = beatreel_config::from_file(temp_file.path()).unwrap_err();
    match err.kind() {
        BeatreelErrorKind::Config(e) => {
            let expected = temp_file.path().display().to_string();
            assert_eq!(e.origin.as_deref(), Some(expected.as_str()));
            assert!(e.message.contains("min_beat_seconds"));
        }
        other => panic!("expected a configuration error, got {other:?}"),
    }
}
