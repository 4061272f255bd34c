//! Listing construction errors.

use thiserror::Error;

/// Errors raised while constructing listing view models.
///
/// Rendering itself never fails: malformed row data degrades to the Empty
/// state. Only column-set construction is validated, because a duplicate
/// column key would break row identity downstream.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ListingError {
    /// Two columns in one set share the same key.
    #[error("duplicate column key: {key}")]
    DuplicateColumnKey {
        /// The key that appeared more than once.
        key: &'static str,
    },

    /// A column set must contain at least one column.
    #[error("column set is empty")]
    EmptyColumnSet,
}
