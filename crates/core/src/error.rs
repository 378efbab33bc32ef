//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type JetstreamResult<T> = Result<T, JetstreamError>;

/// Domain-level error.
///
/// Only two failure kinds exist; both are terminal for the request that
/// triggered them and carry no server-side consequence.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum JetstreamError {
    /// A referenced device (or other resource) does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// Input was malformed (e.g. wrong JSON shape, unknown enum value).
    #[error("bad request: {0}")]
    BadRequest(String),
}

impl JetstreamError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    /// Stable error code as exposed on the wire.
    pub fn code(&self) -> &'static str {
        match self {
            JetstreamError::NotFound(_) => "NotFound",
            JetstreamError::BadRequest(_) => "BadRequest",
        }
    }
}
