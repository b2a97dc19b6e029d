/// Errors from the API client layer.
use thiserror::Error;

/// Normalized failures for a single API request.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure: DNS, connection refused, reset, or timeout.
    #[error("connection failed: {0}")]
    ConnectionFailed(#[source] reqwest::Error),

    /// The response body was not valid JSON.
    #[error("Failed to parse response JSON: {message}")]
    ParseFailed {
        /// Underlying parser message.
        message: String,
        /// HTTP status received along with the malformed body.
        status_code: u16,
    },

    /// The server answered with a non-success status.
    #[error("HTTP {status_code}")]
    HttpStatus {
        /// The offending status code.
        status_code: u16,
    },

    /// The request URL could not be constructed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    /// Whether this is a transport-level connection failure, as opposed to
    /// an application-level HTTP error status.
    #[must_use]
    pub fn is_connection(&self) -> bool {
        matches!(self, Self::ConnectionFailed(_))
    }
}
