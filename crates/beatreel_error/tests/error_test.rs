//! Tests for error construction, conversion and user-facing messages.

use beatreel_error::{
    BeatreelError, BeatreelErrorKind, BeatreelResult, ConfigError, PlanningError,
    PlanningErrorKind, RenderError, RenderErrorKind, ValidationError, ValidationErrorKind,
};

#[test]
fn test_validation_error_tracks_location() {
    let err = ValidationError::new(ValidationErrorKind::MissingScript);
    assert!(err.file.ends_with("error_test.rs"));
    assert!(err.line > 0);
}

#[test]
fn test_script_too_short_reason() {
    let err = ValidationError::new(ValidationErrorKind::ScriptTooShort {
        minimum: 20,
        actual: 19,
    });
    assert_eq!(
        err.reason(),
        "Script must contain at least 20 characters (got 19)."
    );
}

#[test]
fn test_question_mark_converts_into_beatreel_error() {
    fn fails() -> BeatreelResult<()> {
        Err(PlanningError::new(PlanningErrorKind::NoBeats))?
    }

    let err = fails().unwrap_err();
    assert!(matches!(err.kind(), BeatreelErrorKind::Planning(_)));
    assert!(err.is_request_failure());
}

#[test]
fn test_user_message_strips_location() {
    let err: BeatreelError = PlanningError::new(PlanningErrorKind::NoBeats).into();
    assert_eq!(
        err.user_message(),
        "Unable to derive story beats from the provided script."
    );
    assert!(!err.user_message().contains("line"));
}

#[test]
fn test_render_and_config_errors_are_not_request_failures() {
    let render: BeatreelError = RenderError::new(RenderErrorKind::Timeout { seconds: 5 }).into();
    assert!(!render.is_request_failure());

    let config: BeatreelError = ConfigError::new("bad").into();
    assert!(!config.is_request_failure());
    assert!(format!("{}", config).contains("Configuration Error: bad"));
}
