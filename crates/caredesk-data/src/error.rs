//! Data layer errors.

use thiserror::Error;

/// Errors surfaced by the data layer.
///
/// Directory calls are the only fallible operations; repository reads over
/// in-memory data cannot fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DataError {
    /// The directory collaborator could not serve a request.
    #[error("directory unavailable while {operation}")]
    DirectoryUnavailable {
        /// The operation that was attempted, e.g. "listing specialties".
        operation: String,
    },
}
