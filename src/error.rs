//! Error types for pomotodo.

use thiserror::Error;

/// Errors surfaced by pomotodo.
///
/// State-machine and task-list operations never fail; everything here comes
/// from settings validation, the settings file, or the terminal.
#[derive(Debug, Error)]
pub enum PomoError {
    /// Configuration could not be located, read, or written.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A setting value was rejected at the apply boundary.
    #[error("Invalid {field}: {reason}")]
    InvalidSetting {
        /// Human-readable field name.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// Underlying I/O failure.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization or parse failure.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Terminal setup, drawing, or input failure.
    #[error("Terminal error: {0}")]
    Terminal(String),
}

impl From<serde_json::Error> for PomoError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e.to_string())
    }
}

impl PomoError {
    /// Shorthand for an [`PomoError::InvalidSetting`].
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidSetting {
            field,
            reason: reason.into(),
        }
    }
}
