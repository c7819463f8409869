//! Typed errors for the TMDB API client.

use reqwest::StatusCode;

/// Error returned by TMDB API operations.
///
/// HTTP-level failures keep their status code so callers can classify
/// them without inspecting message text.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Client construction or configuration failure.
    #[error("invalid client configuration: {0}")]
    Config(&'static str),

    /// Transport-level failure (connect, timeout, TLS, ...).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-success HTTP response.
    #[error("TMDB API error (HTTP {status}): {message}")]
    Status {
        /// HTTP status code of the response.
        status: StatusCode,
        /// Message from the TMDB error body, or the raw body text.
        message: String,
    },

    /// Response body did not decode as the expected JSON shape.
    #[error("failed to decode JSON response from {path}: {source}")]
    Decode {
        /// Request path that produced the body.
        path: String,
        /// Underlying decode error.
        source: serde_json::Error,
    },

    /// HTTP 429 persisted through all retry attempts.
    #[error("TMDB API rate limit exceeded after {retries} retries: {path}")]
    RateLimited {
        /// Number of retries performed.
        retries: u32,
        /// Request path that was rate limited.
        path: String,
    },

    /// Request URL could not be constructed.
    #[error("failed to build request URL: {0}")]
    Url(#[from] url::ParseError),
}

impl ApiError {
    /// HTTP status code of the failure, when one was received.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(err) => err.status(),
            _ => None,
        }
    }

    /// Whether the failure happened before any HTTP response arrived.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}
