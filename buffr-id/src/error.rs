//! Error types for identifier parsing and validation.

use thiserror::Error;

/// Identifier-specific errors.
///
/// Every way a candidate string can fail the identifier grammar maps to one
/// variant, so callers can report exactly what was wrong with an id they
/// received over the wire.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IdError {
    /// The identifier does not carry the expected prefix.
    #[error("invalid identifier prefix: {0:?}")]
    InvalidPrefix(String),

    /// The identifier does not have exactly six delimited fields.
    #[error("expected 6 delimited fields, found {0}")]
    FieldCount(usize),

    /// Unrecognized entity-type tag.
    #[error("unknown entity type tag: {0:?}")]
    UnknownEntityType(String),

    /// Unrecognized project tag.
    #[error("unknown project tag: {0:?}")]
    UnknownProject(String),

    /// Unrecognized or unsupported country code.
    #[error("unknown country code: {0:?}")]
    UnknownCountry(String),

    /// Opaque segment is not exactly eight uppercase hex characters.
    #[error("malformed opaque segment: {0:?}")]
    MalformedOpaque(String),

    /// Timestamp segment is not a plain decimal number of Unix seconds.
    #[error("malformed timestamp segment: {0:?}")]
    MalformedTimestamp(String),
}

/// Result type for identifier operations.
pub type IdResult<T> = Result<T, IdError>;
