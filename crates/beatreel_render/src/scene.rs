//! Rendering of a single beat.

use beatreel_core::{RenderDirectives, RenderPrompt, SceneRender, StoryBeat};
use beatreel_error::{RenderError, RenderErrorKind};
use beatreel_interface::RenderDriver;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, instrument, warn};

/// Renders one beat through the rendering capability.
///
/// A scene renderer is built per request: it carries that request's
/// pass-through directives and combines them with each beat's metadata.
/// [`render`](Self::render) never fails; every outcome is folded into the
/// returned [`SceneRender`].
#[derive(Clone)]
pub struct SceneRenderer {
    driver: Arc<dyn RenderDriver>,
    directives: RenderDirectives,
    timeout: Option<Duration>,
}

impl std::fmt::Debug for SceneRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SceneRenderer")
            .field("provider", &self.driver.provider_name())
            .field("directives", &self.directives)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl SceneRenderer {
    /// Create a renderer without a timeout.
    pub fn new(driver: Arc<dyn RenderDriver>, directives: RenderDirectives) -> Self {
        Self {
            driver,
            directives,
            timeout: None,
        }
    }

    /// Give up on a render after `timeout`, marking the beat failed.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Directives sent with every beat.
    pub fn directives(&self) -> &RenderDirectives {
        &self.directives
    }

    /// Render one beat and report its terminal status.
    #[instrument(
        skip(self, beat),
        fields(beat_id = %beat.id(), provider = self.driver.provider_name())
    )]
    pub async fn render(&self, beat: &StoryBeat) -> SceneRender {
        let render = SceneRender::pending(beat.id().clone()).begin();
        let prompt = RenderPrompt::for_beat(beat, &self.directives);

        let outcome = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, self.driver.render(&prompt))
                .await
                .unwrap_or_else(|_| {
                    Err(RenderError::new(RenderErrorKind::Timeout {
                        seconds: limit.as_secs(),
                    }))
                }),
            None => self.driver.render(&prompt).await,
        };

        match outcome {
            Ok(clip) if clip.video_url().trim().is_empty() => {
                warn!("Render returned an empty video reference");
                render.fail("Render service returned an empty video reference")
            }
            Ok(clip) => {
                info!(video_url = %clip.video_url(), "Scene rendered");
                render.complete(clip.video_url().clone())
            }
            Err(e) => {
                warn!(error = %e, "Scene render failed");
                render.fail(e.kind.to_string())
            }
        }
    }
}
