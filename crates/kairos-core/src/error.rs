//! The structured error type for Kairos.
//!
//! [`AppError`] is the only error a handler or model is expected to raise
//! intentionally. Validation failures (binding, domain) carry a 400, route
//! misses a 404, and everything else is the unexpected class: answered with
//! a generic 500 at the dispatch boundary and escalated to the fault channel
//! instead of being swallowed.

use http::StatusCode;
use thiserror::Error;

use crate::Response;

/// Result type alias using [`AppError`].
pub type AppResult<T> = Result<T, AppError>;

/// Standard error type for the Kairos service.
///
/// Carries a human-readable message and maps onto an HTTP status code.
/// Intentional failures are raised where they are detected and caught only
/// at the dispatch boundary.
///
/// # Example
///
/// ```
/// use kairos_core::AppError;
/// use http::StatusCode;
///
/// fn check_zone(name: &str) -> Result<(), AppError> {
///     if name.is_empty() {
///         return Err(AppError::validation("invalid timezone"));
///     }
///     Ok(())
/// }
///
/// let err = check_zone("").unwrap_err();
/// assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
/// ```
#[derive(Error, Debug)]
pub enum AppError {
    /// Request validation failed (bad body shape, unknown zone, bad date,
    /// missing path parameter inside a matched handler).
    #[error("{message}")]
    Validation {
        /// Human-readable reason, rendered to the client.
        message: String,
    },

    /// A requested resource or route does not exist.
    #[error("{message}")]
    NotFound {
        /// Human-readable reason, rendered to the client.
        message: String,
    },

    /// Unexpected internal failure. Never rendered verbatim to the client;
    /// the source is forwarded to the operational fault channel.
    #[error("{message}")]
    Internal {
        /// Human-readable summary.
        message: String,
        /// The underlying error, if any.
        #[source]
        source: Option<anyhow::Error>,
    },
}

impl AppError {
    /// Creates a validation error (400).
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Creates a not-found error (404).
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Creates an internal error (500).
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
            source: None,
        }
    }

    /// Creates an internal error wrapping a source error.
    pub fn internal_with_source(
        message: impl Into<String>,
        source: impl Into<anyhow::Error>,
    ) -> Self {
        Self::Internal {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Returns the message carried by this error.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Validation { message }
            | Self::NotFound { message }
            | Self::Internal { message, .. } => message,
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns `true` for the unexpected class of failures.
    ///
    /// Unexpected failures are answered with a fixed 500 body and escalated;
    /// they must not leak their message to the client.
    #[must_use]
    pub const fn is_unexpected(&self) -> bool {
        matches!(self, Self::Internal { .. })
    }

    /// Renders this error as a `{"reason": message}` response with the
    /// carried status code.
    #[must_use]
    pub fn to_response(&self) -> Response {
        Response::error(self.message(), self.status_code())
    }
}
