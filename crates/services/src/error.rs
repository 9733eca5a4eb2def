//! Shared error types for the services crate.

use thiserror::Error;

use eduquiz_core::model::SessionError;
use storage::session_store::StorageError;

/// Failures of a single API call, classified the way the UI reacts to
/// them: unauthorized tears the session down, conflicts and bad requests
/// carry a server-supplied message, everything else is retried manually.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum ApiError {
    /// HTTP 401. Forces session teardown and a redirect to login.
    #[error("unauthorized")]
    Unauthorized,

    /// HTTP 409 with the server's conflict reason.
    #[error("conflict: {0}")]
    Conflict(String),

    /// HTTP 400 with the server's message, passed through verbatim.
    #[error("{0}")]
    BadRequest(String),

    /// HTTP 404 with the server's message.
    #[error("{0}")]
    NotFound(String),

    /// HTTP 5xx, or any status the client has no specific handling for.
    #[error("server error: {0}")]
    Server(String),

    /// No response received at all.
    #[error("the server could not be reached")]
    Unreachable,

    /// A 2xx response whose body does not have the promised shape.
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl ApiError {
    /// True for responses that must invalidate the stored session.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::InvalidResponse(err.to_string())
        } else {
            // Connect/timeout/body errors: nothing usable came back.
            ApiError::Unreachable
        }
    }
}

/// Errors emitted by `AuthService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AuthServiceError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl AuthServiceError {
    /// True when the failure came from an unauthorized response.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, AuthServiceError::Api(api) if api.is_unauthorized())
    }
}
