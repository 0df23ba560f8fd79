//! Trait definitions for the external rendering and stitching capabilities.

use async_trait::async_trait;
use beatreel_core::{RenderClip, RenderPrompt};
use beatreel_error::{RenderError, StitchError};

/// External capability that turns one beat's prompt into a video clip.
///
/// The core issues exactly one call per beat. Retries, if any, belong to the
/// implementation; failures are reported through [`RenderError`].
#[async_trait]
pub trait RenderDriver: Send + Sync {
    /// Render a single beat.
    async fn render(&self, prompt: &RenderPrompt) -> Result<RenderClip, RenderError>;

    /// Provider name (e.g., "http", "placeholder").
    fn provider_name(&self) -> &'static str;
}

/// External capability that combines ordered clips into one artifact.
#[async_trait]
pub trait StitchDriver: Send + Sync {
    /// Combine clips, given in playback order, and return the artifact reference.
    async fn stitch(&self, clips: &[String]) -> Result<String, StitchError>;

    /// Provider name (e.g., "http", "placeholder").
    fn provider_name(&self) -> &'static str;
}
