//! API gateway error types.

use thiserror::Error;

/// Errors from the analysis service boundary.
///
/// Every named operation resolves to either a typed payload or one of these;
/// transport and status problems never cross the gateway as panics or raw
/// reqwest errors the caller has to re-inspect.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP transport error (timeout, connection refused, TLS failure).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Status {
        /// HTTP status code returned by the service.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// Failed to parse a service response.
    #[error("parse error: {0}")]
    Parse(String),
}
