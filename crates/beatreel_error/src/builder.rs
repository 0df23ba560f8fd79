//! Errors raised while assembling a value with a builder.

/// Why a builder refused to produce its value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum BuilderErrorKind {
    /// A required field was never set
    #[display("{} is required", _0)]
    MissingField(String),

    /// A field was set to a value the target type does not allow
    #[display("{} is invalid: {}", field, reason)]
    InvalidField {
        /// Offending field
        field: String,
        /// What is wrong with it
        reason: String,
    },
}

/// Builder error with location tracking.
///
/// # Examples
///
/// ```
/// use beatreel_error::{BuilderError, BuilderErrorKind};
///
/// let err = BuilderError::new(BuilderErrorKind::MissingField("duration_seconds".into()));
/// assert!(err.to_string().contains("duration_seconds is required"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Builder Error: {} at line {} in {}", kind, line, file)]
pub struct BuilderError {
    kind: BuilderErrorKind,
    line: u32,
    file: &'static str,
}

impl BuilderError {
    /// Create a new builder error with caller location tracking.
    #[track_caller]
    pub fn new(kind: BuilderErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// A required field was left unset.
    #[track_caller]
    pub fn missing(field: impl Into<String>) -> Self {
        Self::new(BuilderErrorKind::MissingField(field.into()))
    }

    /// A field holds a disallowed value.
    #[track_caller]
    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::new(BuilderErrorKind::InvalidField {
            field: field.into(),
            reason: reason.into(),
        })
    }

    /// Get the error kind.
    pub fn kind(&self) -> &BuilderErrorKind {
        &self.kind
    }
}
