//! Configuration error types.

use std::fmt;

/// A configuration value that could not be loaded or does not make sense.
#[derive(Debug, Clone, derive_more::Error)]
pub struct ConfigError {
    /// What is wrong
    pub message: String,
    /// Source the bad value came from, when known (a file path, `environment`)
    pub origin: Option<String>,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ConfigError {
    /// Create a new ConfigError with the given message at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use beatreel_error::ConfigError;
    ///
    /// let err = ConfigError::new("render.max_concurrent must be at least 1")
    ///     .with_origin("./beatreel.toml");
    /// assert_eq!(err.origin.as_deref(), Some("./beatreel.toml"));
    /// assert!(err.to_string().contains("(./beatreel.toml)"));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            origin: None,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Attach the source the configuration was read from.
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.origin {
            Some(origin) => write!(
                f,
                "Configuration Error ({}): {} at line {} in {}",
                origin, self.message, self.line, self.file
            ),
            None => write!(
                f,
                "Configuration Error: {} at line {} in {}",
                self.message, self.line, self.file
            ),
        }
    }
}
