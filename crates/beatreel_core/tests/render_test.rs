//! Tests for render status transitions and render set lookups.

use beatreel_core::{
    EmotionalTone, RenderSet, RenderStatus, SceneRender, StitchOutcome, StoryBeat,
    StoryBeatBuilder,
};

fn beat(order: u32) -> StoryBeat {
    StoryBeatBuilder::default()
        .id(format!("beat-{:02}", order))
        .order(order)
        .title("Title")
        .summary("Summary")
        .duration_seconds(10.0)
        .emotional_tone(EmotionalTone::Neutral)
        .location("unspecified")
        .build()
        .expect("valid beat")
}

#[test]
fn test_pending_to_completed() {
    let render = SceneRender::pending("beat-01");
    assert_eq!(*render.status(), RenderStatus::Pending);

    let render = render.begin();
    assert_eq!(*render.status(), RenderStatus::Rendering);

    let render = render.complete("https://cdn.example/1.mp4");
    assert!(render.is_completed());
    assert_eq!(render.video_url().as_deref(), Some("https://cdn.example/1.mp4"));
    assert!(render.message().is_none());
}

#[test]
fn test_failed_is_never_reverted() {
    let render = SceneRender::pending("beat-02").begin().fail("rejected");
    let render = render.complete("https://cdn.example/2.mp4");

    assert!(render.is_failed());
    assert!(render.video_url().is_none());
    assert_eq!(render.message().as_deref(), Some("rejected"));
}

#[test]
fn test_render_set_joins_on_beat_id() {
    let set = RenderSet::new(vec![
        SceneRender::pending("beat-03").begin().complete("c.mp4"),
        SceneRender::pending("beat-01").begin().fail("boom"),
        SceneRender::pending("beat-02").begin().complete("b.mp4"),
    ]);

    assert_eq!(set.get("beat-01").map(|r| *r.status()), Some(RenderStatus::Failed));
    assert_eq!(
        set.get("beat-03").and_then(|r| r.video_url().clone()),
        Some("c.mp4".to_string())
    );
    assert!(set.get("beat-04").is_none());
    assert_eq!(set.completed().count(), 2);
    assert_eq!(set.failed().count(), 1);
    assert!(!set.all_completed());
}

#[test]
fn test_render_set_covers_beats() {
    let beats = vec![beat(1), beat(2)];

    let complete = RenderSet::new(vec![
        SceneRender::pending("beat-02").begin().complete("b.mp4"),
        SceneRender::pending("beat-01").begin().fail("boom"),
    ]);
    assert!(complete.covers(&beats));

    let missing = RenderSet::new(vec![SceneRender::pending("beat-01").begin().fail("boom")]);
    assert!(!missing.covers(&beats));

    let duplicate = RenderSet::new(vec![
        SceneRender::pending("beat-01").begin().fail("boom"),
        SceneRender::pending("beat-01").begin().fail("boom"),
    ]);
    assert!(!duplicate.covers(&beats));

    let in_flight = RenderSet::new(vec![
        SceneRender::pending("beat-01").begin(),
        SceneRender::pending("beat-02").begin().complete("b.mp4"),
    ]);
    assert!(!in_flight.covers(&beats));
}

#[test]
fn test_render_serializes_camel_case_lowercase_status() {
    let render = SceneRender::pending("beat-01").begin().complete("a.mp4");
    let json = serde_json::to_value(&render).expect("serializable");
    assert_eq!(json["beatId"], "beat-01");
    assert_eq!(json["status"], "completed");
    assert_eq!(json["videoUrl"], "a.mp4");
    assert!(json.get("message").is_none());
}

#[test]
fn test_stitch_outcome_distinguishes_not_attempted() {
    let vetoed = StitchOutcome::Vetoed {
        failed_beats: vec!["beat-02".to_string()],
    };
    assert!(!vetoed.was_attempted());
    assert!(vetoed.combined_url().is_none());

    let empty = StitchOutcome::NoCompletedSegments;
    assert!(empty.was_attempted());
    assert!(empty.combined_url().is_none());

    let stitched = StitchOutcome::Stitched {
        url: "final.mp4".to_string(),
        segment_count: 2,
        skipped_beats: vec![],
    };
    assert_eq!(stitched.combined_url(), Some("final.mp4"));
}

#[test]
fn test_emotional_tone_labels() {
    assert_eq!(EmotionalTone::Mysterious.to_string(), "mysterious");
    assert_eq!(
        "triumphant".parse::<EmotionalTone>().ok(),
        Some(EmotionalTone::Triumphant)
    );
    assert_eq!(EmotionalTone::default(), EmotionalTone::Neutral);
}
