//! Model construction errors.

use thiserror::Error;

/// Errors raised while constructing validated model types.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// Patient identifiers must be non-empty after trimming.
    #[error("invalid patient id: {0:?}")]
    InvalidPatientId(String),

    /// Staff identifiers must be non-empty after trimming.
    #[error("invalid staff id: {0:?}")]
    InvalidStaffId(String),
}
