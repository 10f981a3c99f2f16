//! Error types for row binding.

use boardkit_columns::ColumnError;
use thiserror::Error;

/// Result type for binding operations.
pub type BindResult<T> = Result<T, BindError>;

/// Errors that can occur while validating a row type or binding items.
#[derive(Debug, Error)]
pub enum BindError {
    /// The row type declares more than one reserved composite field of
    /// the same kind. Raised once per row type, before any item is
    /// bound.
    #[error("row configuration error: {0}")]
    Configuration(String),

    /// A column value failed to parse or encode.
    #[error(transparent)]
    Column(#[from] ColumnError),
}
