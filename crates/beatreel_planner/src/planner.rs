//! Beat planning: turning scene units into a timed beat sequence.

use crate::allocate::allocate;
use crate::text::{derive_summary, derive_title};
use crate::{LexicalToneClassifier, SceneLocationExtractor, SceneUnit, Segmenter};
use beatreel_core::{PlannerConfig, StoryBeat, StoryBeatBuilder, UNSPECIFIED_LOCATION};
use beatreel_error::{PlanningError, PlanningErrorKind};
use beatreel_interface::{LocationExtractor, ToneClassifier};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Converts a script into an ordered, timed sequence of [`StoryBeat`]s.
///
/// Planning is deterministic: the same script, target and settings always
/// produce the same beats, identifiers included.
///
/// # Examples
///
/// ```
/// use beatreel_core::PlannerConfig;
/// use beatreel_planner::BeatPlanner;
///
/// let planner = BeatPlanner::new(PlannerConfig::default()).expect("valid settings");
/// let script = "Fade in:\n\nA storm gathers over the harbor.\n\nCut to:\n\nThe lighthouse keeper climbs the tower stairs.";
/// let beats = planner.plan_script(script, 120.0).expect("beats");
///
/// assert_eq!(beats.len(), 2);
/// assert_eq!(beats[0].id(), "beat-01");
/// let total: f64 = beats.iter().map(|b| *b.duration_seconds()).sum();
/// assert!((total - 120.0).abs() < 1e-6);
/// ```
#[derive(Clone)]
pub struct BeatPlanner {
    config: PlannerConfig,
    segmenter: Segmenter,
    tone: Arc<dyn ToneClassifier>,
    location: Arc<dyn LocationExtractor>,
}

impl std::fmt::Debug for BeatPlanner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BeatPlanner")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl BeatPlanner {
    /// Create a planner with the lexical tone classifier and the setting-noun
    /// location extractor.
    ///
    /// # Errors
    ///
    /// Returns [`PlanningErrorKind::InvalidConfiguration`] when the settings
    /// are inconsistent.
    pub fn new(config: PlannerConfig) -> Result<Self, PlanningError> {
        config.validate().map_err(|e| {
            PlanningError::new(PlanningErrorKind::InvalidConfiguration(e.message))
        })?;
        Ok(Self {
            segmenter: Segmenter::new(&config),
            config,
            tone: Arc::new(LexicalToneClassifier),
            location: Arc::new(SceneLocationExtractor),
        })
    }

    /// Replace the tone classification step.
    pub fn with_tone_classifier(mut self, classifier: Arc<dyn ToneClassifier>) -> Self {
        self.tone = classifier;
        self
    }

    /// Replace the location extraction step.
    pub fn with_location_extractor(mut self, extractor: Arc<dyn LocationExtractor>) -> Self {
        self.location = extractor;
        self
    }

    /// Planner settings.
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Split a script into ordered scene units.
    pub fn segment(&self, script: &str) -> Vec<SceneUnit> {
        self.segmenter.segment(script)
    }

    /// Plan beats for already segmented units.
    ///
    /// Adjacent units are merged (smallest combined pair first) until every
    /// beat can receive the duration floor within the target, then durations
    /// are allocated in proportion to each unit's word count. Returns an empty
    /// list only when `units` is empty.
    ///
    /// # Errors
    ///
    /// Returns [`PlanningErrorKind::InvalidBeat`] if a planned beat fails its
    /// invariants (blank id, non-positive duration).
    #[instrument(skip(self, units), fields(units = units.len()))]
    pub fn plan(
        &self,
        units: &[SceneUnit],
        target_duration: f64,
    ) -> Result<Vec<StoryBeat>, PlanningError> {
        if units.is_empty() {
            debug!("No scene units to plan");
            return Ok(Vec::new());
        }

        let budget = if target_duration.is_finite() && target_duration > 0.0 {
            target_duration
        } else {
            0.0
        };
        let limit = self.beat_limit(budget);
        let merged = merge_to_limit(units.to_vec(), limit);
        if merged.len() < units.len() {
            debug!(
                from = units.len(),
                to = merged.len(),
                limit,
                "Merged scene units to fit the duration floor"
            );
        }

        let weights: Vec<f64> = merged
            .iter()
            .map(|unit| unit.word_count().max(1) as f64)
            .collect();
        let durations = allocate(
            &weights,
            budget,
            self.config.min_beat_seconds,
            self.config.ceiling_ratio,
        );

        let beats: Vec<StoryBeat> = merged
            .iter()
            .zip(durations)
            .enumerate()
            .map(|(position, (unit, duration))| self.beat_for(position, unit, duration))
            .collect::<Result<_, _>>()?;

        let total: f64 = beats.iter().map(|b| *b.duration_seconds()).sum();
        if (total - budget).abs() > budget * self.config.tolerance_ratio {
            warn!(
                total_seconds = total,
                target_seconds = budget,
                "Duration floor forces the plan past its target"
            );
        }

        info!(beats = beats.len(), total_seconds = total, "Planned story beats");
        Ok(beats)
    }

    /// Segment a script and plan its beats.
    ///
    /// # Errors
    ///
    /// Returns [`PlanningErrorKind::NoBeats`] when the script yields no
    /// scene units, or any error from [`plan`](Self::plan).
    pub fn plan_script(
        &self,
        script: &str,
        target_duration: f64,
    ) -> Result<Vec<StoryBeat>, PlanningError> {
        let units = self.segment(script);
        let beats = self.plan(&units, target_duration)?;
        if beats.is_empty() {
            warn!("Script yielded no scene units");
            return Err(PlanningError::new(PlanningErrorKind::NoBeats));
        }
        Ok(beats)
    }

    fn beat_limit(&self, budget: f64) -> usize {
        let by_floor = (budget / self.config.min_beat_seconds).floor();
        let by_floor = if by_floor.is_finite() && by_floor >= 1.0 {
            by_floor as usize
        } else {
            1
        };
        by_floor.min(self.config.max_beats).max(1)
    }

    fn beat_for(
        &self,
        position: usize,
        unit: &SceneUnit,
        duration: f64,
    ) -> Result<StoryBeat, PlanningError> {
        let order = self.config.base_order + position as u32;
        let id = format!("beat-{order:02}");

        let cued_text = match unit.transition() {
            Some(label) => format!("{label}. {}", unit.text()),
            None => unit.text().clone(),
        };
        let location = self
            .location
            .extract_with_slugline(unit.text(), unit.slugline().as_deref())
            .unwrap_or_else(|| UNSPECIFIED_LOCATION.to_string());

        StoryBeatBuilder::default()
            .id(id.clone())
            .order(order)
            .title(derive_title(unit.text(), self.config.title_max_words))
            .summary(derive_summary(unit.text(), self.config.summary_max_chars))
            .duration_seconds(duration)
            .emotional_tone(self.tone.classify(&cued_text))
            .location(location)
            .build()
            .map_err(|e| {
                warn!(beat_id = %id, error = %e, "Planned beat rejected");
                PlanningError::new(PlanningErrorKind::InvalidBeat {
                    beat_id: id.clone(),
                    reason: e.kind().to_string(),
                })
            })
    }
}

/// Merge adjacent units until at most `limit` remain.
///
/// The adjacent pair with the fewest combined words is merged first; ties go
/// to the leftmost pair.
fn merge_to_limit(mut units: Vec<SceneUnit>, limit: usize) -> Vec<SceneUnit> {
    while units.len() > limit.max(1) {
        let counts: Vec<usize> = units.iter().map(SceneUnit::word_count).collect();
        let Some(pair) = (0..units.len() - 1).min_by_key(|&i| counts[i] + counts[i + 1]) else {
            break;
        };
        let next = units.remove(pair + 1);
        units[pair].absorb(next);
    }
    units
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit(text: &str) -> SceneUnit {
        SceneUnit::new(0, text, None, None)
    }

    #[test]
    fn test_merge_picks_smallest_pair() {
        let units = vec![
            unit("one two three four five"),
            unit("six seven"),
            unit("eight nine"),
            unit("ten eleven twelve thirteen"),
        ];
        let merged = merge_to_limit(units, 3);
        assert_eq!(merged.len(), 3);
        assert_eq!(merged[1].text(), "six seven eight nine");
    }

    #[test]
    fn test_merge_ties_go_left() {
        let units = vec![unit("a b"), unit("c d"), unit("e f")];
        let merged = merge_to_limit(units, 2);
        assert_eq!(merged[0].text(), "a b c d");
        assert_eq!(merged[1].text(), "e f");
    }

    #[test]
    fn test_beat_limit_respects_floor_and_cap() {
        let planner = BeatPlanner::new(PlannerConfig::default()).expect("valid settings");
        assert_eq!(planner.beat_limit(480.0), 60);
        assert_eq!(planner.beat_limit(20.0), 5);
        assert_eq!(planner.beat_limit(2.0), 1);
        assert_eq!(planner.beat_limit(0.0), 1);
    }
}
