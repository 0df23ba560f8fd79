//! Wire payloads of the render and stitch services.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Body returned by `POST {base}/render`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct RenderResponse {
    /// Reference to the rendered clip
    #[serde(default)]
    video_url: Option<String>,
    /// Provider-side job identifier
    #[serde(default)]
    job_id: Option<String>,
}

/// Body sent to `POST {base}/stitch`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StitchRequest<'a> {
    /// Clip references in playback order
    clips: &'a [String],
}

impl<'a> StitchRequest<'a> {
    /// Wrap an ordered clip list.
    pub fn new(clips: &'a [String]) -> Self {
        Self { clips }
    }

    /// Clip references in playback order.
    pub fn clips(&self) -> &'a [String] {
        self.clips
    }
}

/// Body returned by `POST {base}/stitch`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct StitchResponse {
    /// Reference to the combined artifact
    #[serde(default)]
    video_url: Option<String>,
}
