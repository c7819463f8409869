//! Catalog error classification.
//!
//! Failures are classified from the typed [`ApiError`] — HTTP status codes
//! and transport errors — never from message text.

use std::fmt;

use moviedb_api::ApiError;

/// Broad category of a catalog failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request never completed (connect, timeout, DNS, ...).
    Network,
    /// The server rejected the credentials (HTTP 401).
    Unauthorized,
    /// The requested resource does not exist (HTTP 404).
    NotFound,
    /// Anything else.
    Unknown,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Network => "network error",
            Self::Unauthorized => "unauthorized",
            Self::NotFound => "not found",
            Self::Unknown => "unknown error",
        };
        f.write_str(text)
    }
}

/// A classified catalog failure.
///
/// Carries the [`ErrorKind`] for dispatch plus a user-facing message,
/// with the originating [`ApiError`] attached as the source.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct CatalogError {
    /// Failure category.
    pub kind: ErrorKind,
    /// User-facing message.
    pub message: String,
    /// Underlying API error.
    #[source]
    pub source: ApiError,
}

impl From<ApiError> for CatalogError {
    fn from(source: ApiError) -> Self {
        let (kind, message) = classify(&source);
        Self {
            kind,
            message,
            source,
        }
    }
}

/// Maps an [`ApiError`] to a kind and user-facing message.
fn classify(error: &ApiError) -> (ErrorKind, String) {
    match error.status().map(|status| status.as_u16()) {
        Some(401) => (ErrorKind::Unauthorized, String::from("Unauthorized access")),
        Some(404) => (ErrorKind::NotFound, String::from("Resource not found")),
        _ if error.is_transport() => {
            (ErrorKind::Network, String::from("No internet connection"))
        }
        _ => (ErrorKind::Unknown, error.to_string()),
    }
}
