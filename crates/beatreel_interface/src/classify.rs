//! Pluggable text classification steps used by the beat planner.

use beatreel_core::EmotionalTone;

/// Maps scene text to a mood label.
///
/// Implementations must be deterministic so that planning is reproducible.
pub trait ToneClassifier: Send + Sync {
    /// Classify the given text.
    fn classify(&self, text: &str) -> EmotionalTone;
}

/// Finds the setting a scene takes place in.
///
/// Implementations must be deterministic so that planning is reproducible.
pub trait LocationExtractor: Send + Sync {
    /// Extract a setting reference, or `None` when the text has no location cue.
    fn extract(&self, text: &str) -> Option<String>;

    /// Extract a setting for a scene that may open with a slugline heading
    /// (`ARCHIVE BASEMENT - MORNING`).
    ///
    /// The planner always calls this entry point. The default ignores the
    /// heading and defers to [`extract`](Self::extract).
    fn extract_with_slugline(&self, text: &str, slugline: Option<&str>) -> Option<String> {
        let _ = slugline;
        self.extract(text)
    }
}
