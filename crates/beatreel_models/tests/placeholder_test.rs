//! Tests for the offline placeholder drivers.

use beatreel_core::{EmotionalTone, RenderDirectives, RenderPrompt, StoryBeat};
use beatreel_error::StitchErrorKind;
use beatreel_interface::{RenderDriver, StitchDriver};
use beatreel_models::{
    PLACEHOLDER_SCHEME, PlaceholderRenderDriver, PlaceholderStitchDriver, placeholder_drivers,
};

fn prompt(id: &str) -> RenderPrompt {
    let beat = StoryBeat::new(id, 3, "Title", "Summary.", 12.0, EmotionalTone::Tense, "harbor");
    RenderPrompt::for_beat(&beat, &RenderDirectives::new("Noir", "Drums", "narrator", true))
}

#[tokio::test]
async fn test_placeholder_render_is_deterministic() {
    let driver = PlaceholderRenderDriver;
    let first = driver.render(&prompt("beat-03")).await.expect("clip");
    let second = driver.render(&prompt("beat-03")).await.expect("clip");

    assert_eq!(first, second);
    assert_eq!(first.video_url(), "placeholder://render/beat-03.mp4");
    assert!(first.video_url().starts_with(PLACEHOLDER_SCHEME));
}

#[tokio::test]
async fn test_placeholder_stitch() {
    let driver = PlaceholderStitchDriver;
    let clips = vec!["a".to_string(), "b".to_string()];

    assert_eq!(
        driver.stitch(&clips).await.expect("combined"),
        "placeholder://stitch/2-clips.mp4"
    );
    let err = driver.stitch(&[]).await.expect_err("nothing to stitch");
    assert_eq!(err.kind, StitchErrorKind::NoSegments);
}

#[test]
fn test_placeholder_pair() {
    let drivers = placeholder_drivers();
    assert_eq!(drivers.render.provider_name(), "placeholder");
    assert_eq!(drivers.stitch.provider_name(), "placeholder");
}
