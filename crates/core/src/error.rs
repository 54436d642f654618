//! Service error model.

use thiserror::Error;

/// Result type used across the service layer.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Service-level error.
///
/// One taxonomy for every core operation. The boundary layer owns the
/// mapping to transport status codes (validation/conflict -> 400,
/// authentication -> 401, authorization -> 403, not-found -> 404,
/// internal -> 500); nothing in this workspace speaks HTTP.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// A value failed validation (malformed or missing input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A uniqueness or state conflict (duplicate signup email, duplicate
    /// save, delete of a record that was never saved).
    #[error("conflict: {0}")]
    Conflict(String),

    /// The caller could not be authenticated (missing, invalid or
    /// expired token; bad login credentials).
    #[error("authentication failed: {0}")]
    Authentication(String),

    /// The authenticated caller may not act on the target resource.
    #[error("not authorized: {0}")]
    Authorization(String),

    /// A requested resource does not exist.
    #[error("not found")]
    NotFound,

    /// An underlying primitive failed (hashing, signing, store access).
    #[error("internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn authentication(msg: impl Into<String>) -> Self {
        Self::Authentication(msg.into())
    }

    pub fn authorization(msg: impl Into<String>) -> Self {
        Self::Authorization(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

/// Failure reported by an external store capability.
///
/// Stores are injected collaborators (credential store, saved-holiday
/// store); any failure they report is surfaced immediately and never
/// retried by the core.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The store could not serve the request (I/O failure, poisoned
    /// lock, lost connection).
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }
}

impl From<StoreError> for ServiceError {
    fn from(err: StoreError) -> Self {
        ServiceError::Internal(err.to_string())
    }
}
