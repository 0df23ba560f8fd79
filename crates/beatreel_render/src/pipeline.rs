//! End-to-end generation flow.

use crate::{RenderOrchestrator, SceneRenderer, Stitcher};
use beatreel_core::{GenerationDraft, GenerationRequest, GenerationResult, ReelConfig, StoryBeat};
use beatreel_error::{BeatreelResult, ValidationError};
use beatreel_interface::{RenderDriver, StitchDriver};
use beatreel_planner::BeatPlanner;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, instrument};
use uuid::Uuid;

/// Accepts a request, plans its beats, renders them and stitches the result.
///
/// Validation and planning failures are returned as errors before any render
/// call is made. Render and stitch failures never are: they are recorded per
/// beat and in the stitch outcome of the returned [`GenerationResult`].
#[derive(Clone)]
pub struct GenerationPipeline {
    config: ReelConfig,
    planner: BeatPlanner,
    render_driver: Arc<dyn RenderDriver>,
    stitch_driver: Arc<dyn StitchDriver>,
}

impl std::fmt::Debug for GenerationPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenerationPipeline")
            .field("config", &self.config)
            .field("render_provider", &self.render_driver.provider_name())
            .field("stitch_provider", &self.stitch_driver.provider_name())
            .finish()
    }
}

impl GenerationPipeline {
    /// Create a pipeline over the given capabilities.
    ///
    /// # Errors
    ///
    /// Returns an error when the configuration is inconsistent.
    pub fn new(
        config: ReelConfig,
        render_driver: Arc<dyn RenderDriver>,
        stitch_driver: Arc<dyn StitchDriver>,
    ) -> BeatreelResult<Self> {
        config.validate()?;
        let planner = BeatPlanner::new(config.planner.clone())?;
        Ok(Self {
            config,
            planner,
            render_driver,
            stitch_driver,
        })
    }

    /// Replace the planner, e.g. to plug in other classification steps.
    pub fn with_planner(mut self, planner: BeatPlanner) -> Self {
        self.planner = planner;
        self
    }

    /// Configuration in use.
    pub fn config(&self) -> &ReelConfig {
        &self.config
    }

    /// Validate a draft against the configured defaults and limits.
    pub fn accept(&self, draft: GenerationDraft) -> Result<GenerationRequest, ValidationError> {
        GenerationRequest::accept(draft, &self.config.defaults, &self.config.request)
    }

    /// Accept and plan a draft without rendering anything.
    ///
    /// # Errors
    ///
    /// Returns a validation or planning error.
    #[instrument(skip(self, draft))]
    pub fn plan_only(&self, draft: GenerationDraft) -> BeatreelResult<Vec<StoryBeat>> {
        let request = self.accept(draft)?;
        let beats = self
            .planner
            .plan_script(request.script(), *request.target_duration())?;
        Ok(beats)
    }

    /// Run the whole flow for one draft under a fresh job identifier.
    ///
    /// # Errors
    ///
    /// Returns a validation or planning error; nothing is rendered in that case.
    pub async fn generate(&self, draft: GenerationDraft) -> BeatreelResult<GenerationResult> {
        self.generate_job(Uuid::new_v4(), Utc::now(), draft).await
    }

    /// Run the whole flow under a caller-chosen job identifier and timestamp.
    ///
    /// # Errors
    ///
    /// Returns a validation or planning error; nothing is rendered in that case.
    #[instrument(skip_all, fields(job_id = %job_id))]
    pub async fn generate_job(
        &self,
        job_id: Uuid,
        requested_at: DateTime<Utc>,
        draft: GenerationDraft,
    ) -> BeatreelResult<GenerationResult> {
        let request = self.accept(draft)?;
        let beats = self
            .planner
            .plan_script(request.script(), *request.target_duration())?;

        let renderer = SceneRenderer::new(
            Arc::clone(&self.render_driver),
            request.directives().clone(),
        )
        .with_timeout(self.config.render.timeout_secs.map(Duration::from_secs));
        let renders = RenderOrchestrator::new(renderer, self.config.render.max_concurrent)
            .run(&beats)
            .await;

        let stitch = Stitcher::new(Arc::clone(&self.stitch_driver), self.config.stitch.policy)
            .stitch(&beats, &renders)
            .await;

        let result = GenerationResult::new(job_id, requested_at, beats, renders, stitch);
        info!(
            beats = result.beats().len(),
            combined = result.combined_video_url().is_some(),
            "Generation finished"
        );
        Ok(result)
    }
}
