//! Combining completed clips into one artifact.

use beatreel_core::{RenderSet, StitchOutcome, StitchPolicy, StoryBeat};
use beatreel_interface::StitchDriver;
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

/// Hands completed clips, in beat order, to the stitching capability.
///
/// The [`StitchPolicy`] decides what failed beats mean: with
/// [`StitchPolicy::BestEffort`] they are skipped, with
/// [`StitchPolicy::RequireAll`] any failure vetoes the combined artifact.
/// When no beat completed the outcome is
/// [`StitchOutcome::NoCompletedSegments`] under either policy.
#[derive(Clone)]
pub struct Stitcher {
    driver: Arc<dyn StitchDriver>,
    policy: StitchPolicy,
}

impl std::fmt::Debug for Stitcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stitcher")
            .field("provider", &self.driver.provider_name())
            .field("policy", &self.policy)
            .finish()
    }
}

impl Stitcher {
    /// Create a stitcher.
    pub fn new(driver: Arc<dyn StitchDriver>, policy: StitchPolicy) -> Self {
        Self { driver, policy }
    }

    /// Policy in force.
    pub fn policy(&self) -> StitchPolicy {
        self.policy
    }

    /// Stitch the completed renders of `beats`, ordered by beat order.
    #[instrument(skip(self, beats, renders), fields(beats = beats.len(), policy = %self.policy))]
    pub async fn stitch(&self, beats: &[StoryBeat], renders: &RenderSet) -> StitchOutcome {
        let mut ordered: Vec<&StoryBeat> = beats.iter().collect();
        ordered.sort_by_key(|beat| *beat.order());

        let mut clips = Vec::new();
        let mut skipped = Vec::new();
        for beat in ordered {
            let clip = renders
                .get(beat.id())
                .filter(|render| render.is_completed())
                .and_then(|render| render.video_url().clone());
            match clip {
                Some(url) => clips.push(url),
                None => skipped.push(beat.id().clone()),
            }
        }

        if clips.is_empty() {
            info!("No completed segments to stitch");
            return StitchOutcome::NoCompletedSegments;
        }

        if self.policy == StitchPolicy::RequireAll && !skipped.is_empty() {
            warn!(failed = skipped.len(), "Stitching vetoed by failed beats");
            return StitchOutcome::Vetoed {
                failed_beats: skipped,
            };
        }

        match self.driver.stitch(&clips).await {
            Ok(url) if url.trim().is_empty() => {
                warn!("Stitch returned an empty artifact reference");
                StitchOutcome::Failed {
                    message: "Stitch service returned an empty artifact reference".to_string(),
                }
            }
            Ok(url) => {
                info!(
                    url = %url,
                    segments = clips.len(),
                    skipped = skipped.len(),
                    "Combined video ready"
                );
                StitchOutcome::Stitched {
                    url,
                    segment_count: clips.len(),
                    skipped_beats: skipped,
                }
            }
            Err(e) => {
                error!(error = %e, "Stitching failed");
                StitchOutcome::Failed {
                    message: e.kind.to_string(),
                }
            }
        }
    }
}
