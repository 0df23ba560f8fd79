//! Concurrent fan-out of scene renders.

use crate::SceneRenderer;
use beatreel_core::{RenderSet, SceneRender, StoryBeat};
use futures::future::join_all;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::{error, info, instrument};

/// Renders every beat of a plan concurrently and waits for all of them.
///
/// One task is launched per beat up front. At most `max_concurrent` of them
/// call the rendering capability at any moment; the rest wait for a slot. The
/// join never short-circuits: a failed, timed-out or panicking render only
/// affects its own beat, and the returned [`RenderSet`] holds exactly one
/// terminal render per beat.
#[derive(Debug, Clone)]
pub struct RenderOrchestrator {
    renderer: Arc<SceneRenderer>,
    max_concurrent: usize,
}

impl RenderOrchestrator {
    /// Create an orchestrator; `max_concurrent` below one is raised to one.
    pub fn new(renderer: SceneRenderer, max_concurrent: usize) -> Self {
        Self {
            renderer: Arc::new(renderer),
            max_concurrent: max_concurrent.max(1),
        }
    }

    /// Render all beats and collect their outcomes.
    #[instrument(skip(self, beats), fields(beats = beats.len(), max_concurrent = self.max_concurrent))]
    pub async fn run(&self, beats: &[StoryBeat]) -> RenderSet {
        let slots = Arc::new(Semaphore::new(self.max_concurrent));

        let handles: Vec<_> = beats
            .iter()
            .cloned()
            .map(|beat| {
                let renderer = Arc::clone(&self.renderer);
                let slots = Arc::clone(&slots);
                tokio::spawn(async move {
                    let _permit = match slots.acquire_owned().await {
                        Ok(permit) => permit,
                        Err(_) => {
                            return SceneRender::pending(beat.id().clone())
                                .fail("Render slots closed before the beat could start");
                        }
                    };
                    renderer.render(&beat).await
                })
            })
            .collect();

        let joined = join_all(handles).await;

        let renders: Vec<SceneRender> = beats
            .iter()
            .zip(joined)
            .map(|(beat, outcome)| match outcome {
                Ok(render) => render,
                Err(e) => {
                    error!(beat_id = %beat.id(), error = %e, "Render task aborted");
                    SceneRender::pending(beat.id().clone())
                        .fail(format!("Render task aborted: {}", e))
                }
            })
            .collect();

        let renders = RenderSet::new(renders);
        info!(
            completed = renders.completed().count(),
            failed = renders.failed().count(),
            "All scene renders finished"
        );
        renders
    }
}
