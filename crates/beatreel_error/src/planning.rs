//! Beat planning error types.

/// Specific error conditions for beat planning.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum PlanningErrorKind {
    /// Segmentation produced no usable scene units
    #[display("Unable to derive story beats from the provided script.")]
    NoBeats,
    /// Planner settings are inconsistent
    #[display("Invalid planner configuration: {}", _0)]
    InvalidConfiguration(String),
    /// A planned beat failed its own invariants
    #[display("Planned beat {} is invalid: {}", beat_id, reason)]
    InvalidBeat {
        /// Identifier of the rejected beat
        beat_id: String,
        /// Which invariant it broke
        reason: String,
    },
}

/// Planning error with source location.
///
/// # Examples
///
/// ```
/// use beatreel_error::{PlanningError, PlanningErrorKind};
///
/// let err = PlanningError::new(PlanningErrorKind::NoBeats);
/// assert!(format!("{}", err).contains("story beats"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Planning Error: {} at line {} in {}", kind, line, file)]
pub struct PlanningError {
    /// The specific error condition
    pub kind: PlanningErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl PlanningError {
    /// Create a new PlanningError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: PlanningErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// User-facing reason, without source location.
    pub fn reason(&self) -> String {
        self.kind.to_string()
    }
}
