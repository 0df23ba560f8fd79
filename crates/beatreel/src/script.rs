//! Where a script comes from.

use beatreel_error::{BeatreelResult, ValidationError, ValidationErrorKind};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Path argument that means "read standard input".
pub const STDIN_MARKER: &str = "-";

/// Source of a script: a file on disk or standard input.
///
/// # Examples
///
/// ```
/// use beatreel::ScriptSource;
///
/// assert_eq!(ScriptSource::from_arg("-"), ScriptSource::Stdin);
/// assert!(matches!(ScriptSource::from_arg("pilot.txt"), ScriptSource::File(_)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptSource {
    /// Read from standard input
    Stdin,
    /// Read from a file
    File(PathBuf),
}

impl ScriptSource {
    /// Interpret a command-line argument.
    pub fn from_arg(arg: impl AsRef<Path>) -> Self {
        let arg = arg.as_ref();
        if arg.as_os_str() == STDIN_MARKER {
            Self::Stdin
        } else {
            Self::File(arg.to_path_buf())
        }
    }

    /// Read the whole script.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationErrorKind::MissingScript`] when the source cannot be
    /// read.
    pub fn read(&self) -> BeatreelResult<String> {
        self.read_from(std::io::stdin().lock())
    }

    /// Read the script, taking standard input from `stdin`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationErrorKind::MissingScript`] when the source cannot be
    /// read.
    pub fn read_from(&self, mut stdin: impl Read) -> BeatreelResult<String> {
        let script = match self {
            Self::Stdin => {
                let mut buffer = String::new();
                stdin.read_to_string(&mut buffer).map_err(|e| {
                    warn!(error = %e, "Failed to read script from stdin");
                    ValidationError::new(ValidationErrorKind::MissingScript)
                })?;
                buffer
            }
            Self::File(path) => std::fs::read_to_string(path).map_err(|e| {
                warn!(path = %path.display(), error = %e, "Failed to read script file");
                ValidationError::new(ValidationErrorKind::MissingScript)
            })?,
        };
        debug!(chars = script.chars().count(), "Script loaded");
        Ok(script)
    }
}
