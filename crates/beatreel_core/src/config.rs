//! Configuration value objects.
//!
//! These are plain serde structures. Loading them from TOML files and the
//! environment lives in `beatreel_config`; everything here can also be built
//! in code and passed explicitly into the planning and orchestration entry points.

use crate::StitchPolicy;
use beatreel_error::ConfigError;
use serde::{Deserialize, Serialize};

/// Directive defaults applied when a request leaves a field out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationDefaults {
    /// Target runtime in seconds
    pub target_duration_secs: f64,
    /// Visual style directive
    pub visual_style: String,
    /// Music style directive
    pub music_style: String,
    /// Voice profile identifier
    pub voice_profile: String,
    /// Auto-refine flag
    pub auto_refine: bool,
}

impl Default for GenerationDefaults {
    fn default() -> Self {
        Self {
            target_duration_secs: 480.0,
            visual_style: "Neo-cinematic realism with volumetric lighting".to_string(),
            music_style: "Atmospheric orchestral".to_string(),
            voice_profile: "narrator-vivid".to_string(),
            auto_refine: true,
        }
    }
}

/// Bounds enforced when a request is accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestLimits {
    /// Minimum trimmed script length in characters
    pub min_script_chars: usize,
    /// Smallest accepted target duration in seconds
    pub min_target_duration_secs: f64,
    /// Largest accepted target duration in seconds
    pub max_target_duration_secs: f64,
}

impl Default for RequestLimits {
    fn default() -> Self {
        Self {
            min_script_chars: 20,
            min_target_duration_secs: 120.0,
            max_target_duration_secs: 5400.0,
        }
    }
}

/// Tunables for segmentation and duration allocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Order assigned to the first beat
    pub base_order: u32,
    /// Per-beat duration floor in seconds
    pub min_beat_seconds: f64,
    /// Per-beat ceiling as a multiple of the mean beat duration
    pub ceiling_ratio: f64,
    /// Allowed relative divergence of the total from the target
    pub tolerance_ratio: f64,
    /// Hard cap on the number of beats in one plan
    pub max_beats: usize,
    /// Longest sentence run kept in one unit before splitting
    pub max_sentences_per_unit: usize,
    /// Units with fewer words are folded into a neighbour
    pub min_unit_words: usize,
    /// Longest title in words
    pub title_max_words: usize,
    /// Longest summary in characters
    pub summary_max_chars: usize,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            base_order: 1,
            min_beat_seconds: 4.0,
            ceiling_ratio: 2.5,
            tolerance_ratio: 0.02,
            max_beats: 60,
            max_sentences_per_unit: 6,
            min_unit_words: 3,
            title_max_words: 8,
            summary_max_chars: 280,
        }
    }
}

impl PlannerConfig {
    /// Check internal consistency.
    ///
    /// # Errors
    ///
    /// Returns an error describing the first inconsistent field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.min_beat_seconds.is_finite() || self.min_beat_seconds <= 0.0 {
            return Err(ConfigError::new(format!(
                "planner.min_beat_seconds must be positive, got {}",
                self.min_beat_seconds
            )));
        }
        if !self.ceiling_ratio.is_finite() || self.ceiling_ratio < 1.0 {
            return Err(ConfigError::new(format!(
                "planner.ceiling_ratio must be at least 1.0, got {}",
                self.ceiling_ratio
            )));
        }
        if !self.tolerance_ratio.is_finite() || self.tolerance_ratio <= 0.0 {
            return Err(ConfigError::new(format!(
                "planner.tolerance_ratio must be positive, got {}",
                self.tolerance_ratio
            )));
        }
        if self.max_beats == 0 {
            return Err(ConfigError::new("planner.max_beats must be at least 1"));
        }
        if self.max_sentences_per_unit == 0 {
            return Err(ConfigError::new(
                "planner.max_sentences_per_unit must be at least 1",
            ));
        }
        if self.title_max_words == 0 || self.summary_max_chars == 0 {
            return Err(ConfigError::new(
                "planner title and summary limits must be non-zero",
            ));
        }
        Ok(())
    }
}

/// Scene rendering settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Per-render timeout in seconds; `None` waits indefinitely
    pub timeout_secs: Option<u64>,
    /// Maximum number of render calls in flight at once
    pub max_concurrent: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            timeout_secs: Some(600),
            max_concurrent: 8,
        }
    }
}

/// Stitching settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StitchConfig {
    /// How failed beats affect stitching
    pub policy: StitchPolicy,
}

/// Locations of the external rendering and stitching capabilities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointConfig {
    /// Base URL of the render service
    pub render_url: String,
    /// Base URL of the stitch service
    pub stitch_url: String,
    /// Environment variable holding a bearer token, if any
    pub api_key_env: Option<String>,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            render_url: "http://127.0.0.1:8088".to_string(),
            stitch_url: "http://127.0.0.1:8088".to_string(),
            api_key_env: Some("BEATREEL_API_KEY".to_string()),
        }
    }
}

/// Top-level Beatreel configuration.
///
/// # Examples
///
/// ```
/// use beatreel_core::{ReelConfig, StitchPolicy};
///
/// let config = ReelConfig::default();
/// assert!(config.validate().is_ok());
/// assert_eq!(config.stitch.policy, StitchPolicy::BestEffort);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReelConfig {
    /// Request defaults
    pub defaults: GenerationDefaults,
    /// Request acceptance bounds
    pub request: RequestLimits,
    /// Planner tunables
    pub planner: PlannerConfig,
    /// Render settings
    pub render: RenderConfig,
    /// Stitch settings
    pub stitch: StitchConfig,
    /// Capability endpoints
    pub endpoints: EndpointConfig,
}

impl ReelConfig {
    /// Check every section for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns an error describing the first inconsistent value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.planner.validate()?;

        let limits = &self.request;
        if limits.min_script_chars == 0 {
            return Err(ConfigError::new("request.min_script_chars must be at least 1"));
        }
        if !(limits.min_target_duration_secs > 0.0
            && limits.min_target_duration_secs <= limits.max_target_duration_secs)
        {
            return Err(ConfigError::new(format!(
                "request duration bounds are inverted or non-positive: {}..{}",
                limits.min_target_duration_secs, limits.max_target_duration_secs
            )));
        }
        let default_duration = self.defaults.target_duration_secs;
        if default_duration < limits.min_target_duration_secs
            || default_duration > limits.max_target_duration_secs
        {
            return Err(ConfigError::new(format!(
                "defaults.target_duration_secs {} lies outside the request bounds",
                default_duration
            )));
        }
        if self.render.max_concurrent == 0 {
            return Err(ConfigError::new("render.max_concurrent must be at least 1"));
        }
        if self.render.timeout_secs == Some(0) {
            return Err(ConfigError::new("render.timeout_secs must be positive when set"));
        }
        Ok(())
    }
}
