//! Errors raised by the external rendering capability.

/// Specific failure conditions of a single scene render call.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum RenderErrorKind {
    /// Transport-level failure
    #[display("HTTP error: {}", _0)]
    Http(String),
    /// Render service answered with a non-success status
    #[display("Render service returned {}: {}", status, message)]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body or message
        message: String,
    },
    /// Response body could not be decoded
    #[display("Failed to parse render response: {}", _0)]
    Parse(String),
    /// Render service refused the prompt
    #[display("Render rejected: {}", _0)]
    Rejected(String),
    /// Response decoded but lacks a usable video reference
    #[display("Malformed render result: {}", _0)]
    MalformedResponse(String),
    /// Render did not finish in time
    #[display("Render timed out after {} seconds", seconds)]
    Timeout {
        /// Timeout that elapsed
        seconds: u64,
    },
}

/// Render error with source location.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Render Error: {} at line {} in {}", kind, line, file)]
pub struct RenderError {
    /// The specific error condition
    pub kind: RenderErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl RenderError {
    /// Create a new RenderError with automatic location tracking.
    ///
    /// # Examples
    ///
    /// ```
    /// use beatreel_error::{RenderError, RenderErrorKind};
    ///
    /// let err = RenderError::new(RenderErrorKind::Timeout { seconds: 30 });
    /// assert!(format!("{}", err).contains("30 seconds"));
    /// ```
    #[track_caller]
    pub fn new(kind: RenderErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
