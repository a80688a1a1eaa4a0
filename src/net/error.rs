//! Error type shared by the auth and data clients.

use thiserror::Error;

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure of a Supabase request, with a `Display` meant for the UI.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The service answered with a non-success status and (usually) a
    /// human-readable body. The message is what the user sees.
    #[error("{message}")]
    Service { status: u16, message: String },
    /// The request never completed: network down, DNS, CORS.
    #[error("could not reach the server, check your connection")]
    Transport(String),
    /// The response arrived but did not match the expected shape.
    #[error("unexpected response from the server")]
    Decode(String),
    /// Browser-only operation called from a non-browser build.
    #[error("not available outside the browser")]
    Unsupported,
}

impl ApiError {
    pub fn service(status: u16, message: impl Into<String>) -> Self {
        Self::Service { status, message: message.into() }
    }

    /// True when the service definitively rejected our credentials, as
    /// opposed to being unreachable or broken. The session keeper signs
    /// out on rejection but keeps the session across outages.
    pub fn is_auth_rejection(&self) -> bool {
        matches!(self, Self::Service { status, .. } if matches!(status, 400 | 401 | 403))
    }
}
