//! Request validation error types.

/// Reasons a generation request is rejected before any planning work.
#[derive(Debug, Clone, PartialEq, derive_more::Display)]
pub enum ValidationErrorKind {
    /// No script was supplied
    #[display("Script is required.")]
    MissingScript,
    /// Trimmed script is shorter than the minimum length
    #[display("Script must contain at least {} characters (got {}).", minimum, actual)]
    ScriptTooShort {
        /// Minimum accepted character count
        minimum: usize,
        /// Character count after trimming
        actual: usize,
    },
    /// Target duration is zero, negative, or not a finite number
    #[display("Target duration must be a positive number of seconds (got {}).", _0)]
    InvalidTargetDuration(f64),
    /// Target duration falls outside the accepted bounds
    #[display(
        "Target duration must be between {} and {} seconds (got {}).",
        minimum,
        maximum,
        value
    )]
    TargetDurationOutOfRange {
        /// Requested duration in seconds
        value: f64,
        /// Lower bound in seconds
        minimum: f64,
        /// Upper bound in seconds
        maximum: f64,
    },
}

/// Validation error with source location.
///
/// # Examples
///
/// ```
/// use beatreel_error::{ValidationError, ValidationErrorKind};
///
/// let err = ValidationError::new(ValidationErrorKind::MissingScript);
/// assert!(format!("{}", err).contains("Script is required"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Validation Error: {} at line {} in {}", kind, line, file)]
pub struct ValidationError {
    /// The specific error condition
    pub kind: ValidationErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl ValidationError {
    /// Create a new ValidationError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ValidationErrorKind) -> Self {
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
