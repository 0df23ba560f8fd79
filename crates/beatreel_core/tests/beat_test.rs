//! Tests for assembling story beats.

use beatreel_core::{EmotionalTone, StoryBeatBuilder};
use beatreel_error::{BeatreelErrorKind, BeatreelResult, BuilderErrorKind};

fn complete() -> StoryBeatBuilder {
    let mut builder = StoryBeatBuilder::default();
    builder
        .id("beat-01")
        .order(1u32)
        .title("Dawn over the harbor")
        .summary("Fishing boats leave the harbor at dawn.")
        .duration_seconds(12.5)
        .emotional_tone(EmotionalTone::Hopeful)
        .location("harbor");
    builder
}

#[test]
fn test_complete_builder_yields_beat() {
    let beat = complete().build().expect("valid beat");
    assert_eq!(beat.id(), "beat-01");
    assert_eq!(*beat.duration_seconds(), 12.5);
}

#[test]
fn test_unset_field_is_reported_by_name() {
    let err = StoryBeatBuilder::default()
        .id("beat-01")
        .build()
        .unwrap_err();

    match err.kind() {
        BuilderErrorKind::MissingField(field) => assert_eq!(field, "order"),
        other => panic!("expected a missing field, got {other:?}"),
    }
}

#[test]
fn test_non_positive_duration_is_rejected() {
    for seconds in [0.0, -3.0, f64::NAN, f64::INFINITY] {
        let err = complete().duration_seconds(seconds).build().unwrap_err();
        assert!(
            matches!(err.kind(), BuilderErrorKind::InvalidField { field, .. } if field == "duration_seconds"),
            "{seconds} accepted"
        );
    }
}

#[test]
fn test_blank_id_is_rejected() {
    let err = complete().id("  ").build().unwrap_err();
    assert!(err.to_string().contains("id is invalid"));
}

#[test]
fn test_builder_error_converts_with_question_mark() {
    fn assemble() -> BeatreelResult<()> {
        complete().duration_seconds(0.0).build()?;
        Ok(())
    }

    let err = assemble().unwrap_err();
    assert!(matches!(err.kind(), BeatreelErrorKind::Builder(_)));
    assert!(!err.is_request_failure());
}
