//! Planned scene units.

use beatreel_error::BuilderError;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Location reported when no setting cue is found in a beat's text.
pub const UNSPECIFIED_LOCATION: &str = "unspecified";

/// Categorical mood label attached to each beat.
///
/// The label set is fixed so that downstream prompts and displays can rely on it.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Default,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum EmotionalTone {
    /// Danger, pursuit, pressure
    Tense,
    /// Laughter, celebration, warmth
    Joyful,
    /// Loss, grief, solitude
    Melancholic,
    /// Secrets, discovery, the unknown
    Mysterious,
    /// Victory, release, resolution
    Triumphant,
    /// Dawn, promise, new beginnings
    Hopeful,
    /// Memory, aftermath, quiet contemplation
    Reflective,
    /// No dominant cue
    #[default]
    Neutral,
}

/// One planned, timed scene unit derived from the source script.
///
/// Beats are created once by the planner and never mutated afterwards; the
/// renderer and stitcher only read them.
///
/// # Examples
///
/// ```
/// use beatreel_core::{EmotionalTone, StoryBeatBuilder};
///
/// let beat = StoryBeatBuilder::default()
///     .id("beat-01")
///     .order(1u32)
///     .title("The camera glides above a sleeping city")
///     .summary("The camera glides above a sleeping city as dawn ignites the horizon.")
///     .duration_seconds(42.5)
///     .emotional_tone(EmotionalTone::Hopeful)
///     .location("sleeping city")
///     .build()
///     .expect("valid beat");
///
/// assert_eq!(beat.id(), "beat-01");
/// assert_eq!(*beat.order(), 1);
/// ```
#[derive(
    Debug, Clone, PartialEq, Serialize, Deserialize, Getters, derive_builder::Builder,
)]
#[serde(rename_all = "camelCase")]
#[builder(setter(into), build_fn(private, name = "build_internal"))]
pub struct StoryBeat {
    /// Identifier unique within one generation request.
    id: String,

    /// Timeline position; contiguous and strictly increasing across a plan.
    order: u32,

    /// Short human-readable label.
    title: String,

    /// Condensed restatement of the scene.
    summary: String,

    /// Allocated runtime in seconds; always positive and finite.
    duration_seconds: f64,

    /// Inferred mood label.
    emotional_tone: EmotionalTone,

    /// Inferred setting, or [`UNSPECIFIED_LOCATION`].
    location: String,
}

impl StoryBeat {
    /// Create a beat from its parts without checking them.
    ///
    /// Use [`StoryBeatBuilder`] where the parts come from computation.
    pub fn new(
        id: impl Into<String>,
        order: u32,
        title: impl Into<String>,
        summary: impl Into<String>,
        duration_seconds: f64,
        emotional_tone: EmotionalTone,
        location: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            order,
            title: title.into(),
            summary: summary.into(),
            duration_seconds,
            emotional_tone,
            location: location.into(),
        }
    }

    /// Check the invariants every planned beat must hold.
    ///
    /// # Errors
    ///
    /// Returns a [`BuilderError`] naming the first offending field.
    pub fn check(&self) -> Result<(), BuilderError> {
        if self.id.trim().is_empty() {
            return Err(BuilderError::invalid("id", "must not be empty"));
        }
        if !self.duration_seconds.is_finite() || self.duration_seconds <= 0.0 {
            return Err(BuilderError::invalid(
                "duration_seconds",
                format!("must be positive and finite, got {}", self.duration_seconds),
            ));
        }
        Ok(())
    }

    /// Whether a location cue was found for this beat.
    pub fn has_location(&self) -> bool {
        self.location != UNSPECIFIED_LOCATION
    }
}

impl StoryBeatBuilder {
    /// Build the beat, checking its invariants.
    ///
    /// # Errors
    ///
    /// Returns a [`BuilderError`] when a field is unset, the id is blank, or
    /// the duration is not positive and finite.
    pub fn build(&self) -> Result<StoryBeat, BuilderError> {
        let beat = self.build_internal().map_err(|e| match e {
            StoryBeatBuilderError::UninitializedField(field) => BuilderError::missing(field),
            StoryBeatBuilderError::ValidationError(reason) => BuilderError::invalid("beat", reason),
        })?;
        beat.check()?;
        Ok(beat)
    }
}
