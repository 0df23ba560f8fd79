//! Offline drivers producing deterministic placeholder references.

use async_trait::async_trait;
use beatreel_core::{RenderClip, RenderPrompt};
use beatreel_error::{RenderError, StitchError, StitchErrorKind};
use beatreel_interface::{RenderDriver, StitchDriver};
use tracing::debug;

/// URI scheme of every placeholder reference.
pub const PLACEHOLDER_SCHEME: &str = "placeholder://";

/// Render driver that answers immediately with `placeholder://render/<beat>.mp4`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderRenderDriver;

#[async_trait]
impl RenderDriver for PlaceholderRenderDriver {
    async fn render(&self, prompt: &RenderPrompt) -> Result<RenderClip, RenderError> {
        debug!(beat_id = %prompt.beat_id(), "Placeholder render");
        Ok(RenderClip::new(
            format!("{PLACEHOLDER_SCHEME}render/{}.mp4", prompt.beat_id()),
            Some(format!("placeholder-{}", prompt.beat_id())),
        ))
    }

    fn provider_name(&self) -> &'static str {
        "placeholder"
    }
}

/// Stitch driver that answers immediately with `placeholder://stitch/<n>-clips.mp4`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderStitchDriver;

#[async_trait]
impl StitchDriver for PlaceholderStitchDriver {
    async fn stitch(&self, clips: &[String]) -> Result<String, StitchError> {
        if clips.is_empty() {
            return Err(StitchError::new(StitchErrorKind::NoSegments));
        }
        debug!(clips = clips.len(), "Placeholder stitch");
        Ok(format!("{PLACEHOLDER_SCHEME}stitch/{}-clips.mp4", clips.len()))
    }

    fn provider_name(&self) -> &'static str {
        "placeholder"
    }
}
