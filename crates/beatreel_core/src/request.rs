//! Caller payloads and the accepted generation request.

use crate::{GenerationDefaults, RequestLimits};
use beatreel_error::{ValidationError, ValidationErrorKind};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Partial request as supplied by a caller.
///
/// Every field is optional; missing directives are filled from
/// [`GenerationDefaults`] when the draft is accepted.
///
/// # Examples
///
/// ```
/// use beatreel_core::GenerationDraft;
///
/// let draft = GenerationDraft::from_script("Fade in: the city wakes under a copper sky.");
/// assert!(draft.target_duration.is_none());
/// assert!(draft.visual_style.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationDraft {
    /// Raw prose script
    #[serde(default)]
    pub script: Option<String>,
    /// Requested total runtime in seconds
    #[serde(default)]
    pub target_duration: Option<f64>,
    /// Visual style directive
    #[serde(default)]
    pub visual_style: Option<String>,
    /// Music style directive
    #[serde(default)]
    pub music_style: Option<String>,
    /// Voice profile identifier
    #[serde(default)]
    pub voice_profile: Option<String>,
    /// Whether the rendering capability may refine prompts on its own
    #[serde(default)]
    pub auto_refine: Option<bool>,
}

impl GenerationDraft {
    /// Draft carrying only a script.
    pub fn from_script(script: impl Into<String>) -> Self {
        Self {
            script: Some(script.into()),
            ..Self::default()
        }
    }
}

/// Directives passed through to the rendering capability untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct RenderDirectives {
    visual_style: String,
    music_style: String,
    voice_profile: String,
    auto_refine: bool,
}

impl RenderDirectives {
    /// Create directives from explicit values.
    pub fn new(
        visual_style: impl Into<String>,
        music_style: impl Into<String>,
        voice_profile: impl Into<String>,
        auto_refine: bool,
    ) -> Self {
        Self {
            visual_style: visual_style.into(),
            music_style: music_style.into(),
            voice_profile: voice_profile.into(),
            auto_refine,
        }
    }
}

impl From<&GenerationDefaults> for RenderDirectives {
    fn from(defaults: &GenerationDefaults) -> Self {
        Self::new(
            defaults.visual_style.clone(),
            defaults.music_style.clone(),
            defaults.voice_profile.clone(),
            defaults.auto_refine,
        )
    }
}

/// A validated generation request. Immutable once accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    /// Script text as supplied (not trimmed).
    script: String,
    /// Target total runtime in seconds.
    target_duration: f64,
    /// Pass-through directives for the rendering capability.
    #[serde(flatten)]
    directives: RenderDirectives,
}

impl GenerationRequest {
    /// Validate a draft and fill in defaults.
    ///
    /// The script length check counts characters of the trimmed script; the
    /// accepted request keeps the script exactly as supplied. Blank directives
    /// are treated as absent.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] when the script is missing or too short, or
    /// when the target duration is non-positive, non-finite or out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use beatreel_core::{GenerationDefaults, GenerationDraft, GenerationRequest, RequestLimits};
    ///
    /// let defaults = GenerationDefaults::default();
    /// let limits = RequestLimits::default();
    ///
    /// let short = GenerationDraft::from_script("x".repeat(19));
    /// assert!(GenerationRequest::accept(short, &defaults, &limits).is_err());
    ///
    /// let ok = GenerationDraft::from_script("x".repeat(20));
    /// let request = GenerationRequest::accept(ok, &defaults, &limits).unwrap();
    /// assert_eq!(*request.target_duration(), 480.0);
    /// ```
    pub fn accept(
        draft: GenerationDraft,
        defaults: &GenerationDefaults,
        limits: &RequestLimits,
    ) -> Result<Self, ValidationError> {
        let script = draft
            .script
            .ok_or_else(|| ValidationError::new(ValidationErrorKind::MissingScript))?;

        let length = script.trim().chars().count();
        if length < limits.min_script_chars {
            return Err(ValidationError::new(ValidationErrorKind::ScriptTooShort {
                minimum: limits.min_script_chars,
                actual: length,
            }));
        }

        let target_duration = draft
            .target_duration
            .unwrap_or(defaults.target_duration_secs);
        if !target_duration.is_finite() || target_duration <= 0.0 {
            return Err(ValidationError::new(
                ValidationErrorKind::InvalidTargetDuration(target_duration),
            ));
        }
        if target_duration < limits.min_target_duration_secs
            || target_duration > limits.max_target_duration_secs
        {
            return Err(ValidationError::new(
                ValidationErrorKind::TargetDurationOutOfRange {
                    value: target_duration,
                    minimum: limits.min_target_duration_secs,
                    maximum: limits.max_target_duration_secs,
                },
            ));
        }

        let directives = RenderDirectives::new(
            non_blank(draft.visual_style).unwrap_or_else(|| defaults.visual_style.clone()),
            non_blank(draft.music_style).unwrap_or_else(|| defaults.music_style.clone()),
            non_blank(draft.voice_profile).unwrap_or_else(|| defaults.voice_profile.clone()),
            draft.auto_refine.unwrap_or(defaults.auto_refine),
        );

        debug!(
            script_chars = length,
            target_duration,
            auto_refine = directives.auto_refine,
            "Accepted generation request"
        );

        Ok(Self {
            script,
            target_duration,
            directives,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
