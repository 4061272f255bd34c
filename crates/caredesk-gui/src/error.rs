//! GUI-specific error types.

use thiserror::Error;

/// Errors surfaced to the user by the dashboard.
///
/// Directory failures are terminal per request: the page drops its loading
/// flag and shows the error with a retry action instead of swallowing it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GuiError {
    /// A directory call failed.
    #[error("Directory request failed: {reason}")]
    Directory {
        /// Description of what went wrong.
        reason: String,
    },

    /// Generic operation error with context.
    #[error("{operation} failed: {reason}")]
    Operation {
        /// Name of the operation that failed.
        operation: String,
        /// Description of what went wrong.
        reason: String,
    },
}

impl GuiError {
    /// Create a directory error from any error source.
    pub fn directory(err: impl std::fmt::Display) -> Self {
        Self::Directory {
            reason: err.to_string(),
        }
    }

    /// Create a general operation error.
    pub fn operation(operation: impl Into<String>, err: impl std::fmt::Display) -> Self {
        Self::Operation {
            operation: operation.into(),
            reason: err.to_string(),
        }
    }

    /// A user-facing suggestion for resolving this error.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::Directory { .. } => {
                Some("The hospital directory may be offline. Retry in a moment.")
            }
            Self::Operation { .. } => None,
        }
    }
}
