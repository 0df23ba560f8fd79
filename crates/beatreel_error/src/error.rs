//! Top-level error wrapper types.

use crate::{
    BuilderError, ConfigError, JsonError, PlanningError, RenderError, StitchError,
    ValidationError,
};

/// Every error condition the Beatreel crates can surface.
///
/// # Examples
///
/// ```
/// use beatreel_error::{BeatreelError, ConfigError};
///
/// let config_err = ConfigError::new("Missing section");
/// let err: BeatreelError = config_err.into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum BeatreelErrorKind {
    /// Request rejected before planning
    #[from(ValidationError)]
    Validation(ValidationError),
    /// No beats could be derived
    #[from(PlanningError)]
    Planning(PlanningError),
    /// External render call failed
    #[from(RenderError)]
    Render(RenderError),
    /// External stitch call failed
    #[from(StitchError)]
    Stitch(StitchError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Builder error
    #[from(BuilderError)]
    Builder(BuilderError),
}

/// Beatreel error with kind discrimination.
///
/// # Examples
///
/// ```
/// use beatreel_error::{BeatreelErrorKind, BeatreelResult, PlanningError, PlanningErrorKind};
///
/// fn plan() -> BeatreelResult<()> {
///     Err(PlanningError::new(PlanningErrorKind::NoBeats))?
/// }
///
/// let err = plan().unwrap_err();
/// assert!(matches!(err.kind(), BeatreelErrorKind::Planning(_)));
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Beatreel Error: {}", _0)]
pub struct BeatreelError(Box<BeatreelErrorKind>);

impl BeatreelError {
    /// Create a new error from a kind.
    pub fn new(kind: BeatreelErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &BeatreelErrorKind {
        &self.0
    }

    /// Whether the request was rejected at the boundary or by the planner.
    ///
    /// These failures are terminal for a request and carry a user-facing reason.
    pub fn is_request_failure(&self) -> bool {
        matches!(
            self.kind(),
            BeatreelErrorKind::Validation(_) | BeatreelErrorKind::Planning(_)
        )
    }

    /// The reason to show a caller, stripped of source locations where one exists.
    pub fn user_message(&self) -> String {
        match self.kind() {
            BeatreelErrorKind::Validation(e) => e.reason(),
            BeatreelErrorKind::Planning(e) => e.reason(),
            other => other.to_string(),
        }
    }
}

// Generic From implementation for any type that converts to BeatreelErrorKind
impl<T> From<T> for BeatreelError
where
    T: Into<BeatreelErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Beatreel operations.
pub type BeatreelResult<T> = std::result::Result<T, BeatreelError>;
