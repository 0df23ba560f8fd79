//! Aggregate generation result.

use crate::{RenderSet, StitchOutcome, StoryBeat};
use chrono::{DateTime, Utc};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Everything returned to the caller for one request.
///
/// Not persisted; owned by the orchestration flow for the lifetime of the request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult {
    /// Job identifier
    job_id: Uuid,
    /// When the request was received
    requested_at: DateTime<Utc>,
    /// Ordered beat plan
    beats: Vec<StoryBeat>,
    /// One render per beat
    renders: RenderSet,
    /// Combined artifact, absent unless stitching succeeded
    combined_video_url: Option<String>,
    /// Full stitching outcome
    stitch: StitchOutcome,
}

impl GenerationResult {
    /// Assemble a result; the combined URL is taken from the stitch outcome.
    pub fn new(
        job_id: Uuid,
        requested_at: DateTime<Utc>,
        beats: Vec<StoryBeat>,
        renders: RenderSet,
        stitch: StitchOutcome,
    ) -> Self {
        let combined_video_url = stitch.combined_url().map(str::to_string);
        Self {
            job_id,
            requested_at,
            beats,
            renders,
            combined_video_url,
            stitch,
        }
    }

    /// Beats joined with their renders, in beat order.
    pub fn timeline(&self) -> impl Iterator<Item = (&StoryBeat, Option<&crate::SceneRender>)> {
        self.beats.iter().map(|beat| (beat, self.renders.get(beat.id())))
    }
}
