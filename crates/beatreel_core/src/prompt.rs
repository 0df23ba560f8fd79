//! Payloads exchanged with the rendering capability.

use crate::{EmotionalTone, RenderDirectives, StoryBeat};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Everything the rendering capability receives for one beat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct RenderPrompt {
    /// Beat identifier
    beat_id: String,
    /// Timeline position
    order: u32,
    /// Beat title
    title: String,
    /// Scene description to render
    summary: String,
    /// Clip length in seconds
    duration_seconds: f64,
    /// Mood label
    emotional_tone: EmotionalTone,
    /// Scene setting
    location: String,
    /// Visual style directive
    visual_style: String,
    /// Music style directive
    music_style: String,
    /// Voice profile identifier
    voice_profile: String,
    /// Auto-refine flag
    auto_refine: bool,
}

impl RenderPrompt {
    /// Combine a beat with the request's pass-through directives.
    pub fn for_beat(beat: &StoryBeat, directives: &RenderDirectives) -> Self {
        Self {
            beat_id: beat.id().clone(),
            order: *beat.order(),
            title: beat.title().clone(),
            summary: beat.summary().clone(),
            duration_seconds: *beat.duration_seconds(),
            emotional_tone: *beat.emotional_tone(),
            location: beat.location().clone(),
            visual_style: directives.visual_style().clone(),
            music_style: directives.music_style().clone(),
            voice_profile: directives.voice_profile().clone(),
            auto_refine: *directives.auto_refine(),
        }
    }
}

/// A clip produced by the rendering capability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct RenderClip {
    /// Reference to the rendered video
    video_url: String,
    /// Provider-side job identifier, if reported
    #[serde(default, skip_serializing_if = "Option::is_none")]
    job_id: Option<String>,
}

impl RenderClip {
    /// Create a clip reference.
    pub fn new(video_url: impl Into<String>, job_id: Option<String>) -> Self {
        Self {
            video_url: video_url.into(),
            job_id,
        }
    }
}
