//! Error types for column value parsing and encoding.

use boardkit_types::ColumnKind;
use thiserror::Error;

/// Result type for column value operations.
pub type ColumnResult<T> = Result<T, ColumnError>;

/// Errors that can occur while parsing or encoding column values.
#[derive(Debug, Error)]
pub enum ColumnError {
    /// The type tag has no read format, or the kind has no write
    /// format. Raised both when parsing an unrecognized reading and
    /// when encoding a write-unsupported kind.
    #[error("unsupported column type: {0}")]
    UnsupportedColumnType(ColumnKind),

    /// Raw text does not match the expected shape for its kind, or a
    /// value is in a state its write grammar cannot express.
    #[error("malformed {kind} value: {reason}")]
    MalformedValue {
        kind: ColumnKind,
        reason: String,
    },

    /// A column value of one kind was assigned to a field declared as
    /// another kind.
    #[error("expected a {expected} column value, found {found}")]
    KindMismatch {
        expected: ColumnKind,
        found: ColumnKind,
    },

    /// The mutation encoder's own output failed to parse as JSON.
    /// This is a self-check against encoder defects, not input
    /// validation.
    #[error("encoded column values are not valid JSON: {0}")]
    EncodingValidation(#[from] serde_json::Error),
}

impl ColumnError {
    pub(crate) fn malformed(kind: ColumnKind, reason: impl Into<String>) -> Self {
        Self::MalformedValue {
            kind,
            reason: reason.into(),
        }
    }
}
