//! Errors raised by the external stitching capability.

/// Specific failure conditions of a stitch call.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum StitchErrorKind {
    /// Transport-level failure
    #[display("HTTP error: {}", _0)]
    Http(String),
    /// Stitch service answered with a non-success status
    #[display("Stitch service returned {}: {}", status, message)]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body or message
        message: String,
    },
    /// Response body could not be decoded
    #[display("Failed to parse stitch response: {}", _0)]
    Parse(String),
    /// Response decoded but lacks a usable artifact reference
    #[display("Malformed stitch result: {}", _0)]
    MalformedResponse(String),
    /// Nothing was handed over to combine
    #[display("No segments to stitch")]
    NoSegments,
}

/// Stitch error with source location.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Stitch Error: {} at line {} in {}", kind, line, file)]
pub struct StitchError {
    /// The specific error condition
    pub kind: StitchErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl StitchError {
    /// Create a new StitchError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StitchErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
