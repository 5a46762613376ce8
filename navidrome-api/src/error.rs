//! Error types for the Navidrome API client.

use thiserror::Error;

/// Errors that can occur when interacting with a Subsonic/Navidrome server.
#[derive(Debug, Error)]
pub enum NavidromeError {
    /// Network-level failure (connection refused, DNS, TLS, body read, etc.).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-2xx HTTP status.
    #[error("HTTP error: {status} {reason}")]
    Transport {
        /// Numeric HTTP status code.
        status: u16,
        /// Canonical status text (e.g. `Internal Server Error`).
        reason: String,
    },

    /// The envelope carried `"status": "failed"`.
    ///
    /// Common Subsonic codes:
    /// - `40` — wrong username or password
    /// - `50` — user not authorized
    /// - `70` — requested data not found
    #[error("Navidrome API error: {message}")]
    Api {
        /// Subsonic error code, when the server sent one.
        code: Option<i64>,
        /// Server-supplied message, or `Unknown API error`.
        message: String,
    },

    /// Malformed JSON body or unexpected envelope shape.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// File I/O error (config or recent-search storage).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// No server URL or credentials are configured. Run `login` first.
    #[error("server is not configured")]
    NotConfigured,

    /// Catch-all for other errors (e.g. missing config directory).
    #[error("{0}")]
    Other(String),
}

impl NavidromeError {
    /// Server message for [`NavidromeError::Api`], `None` for every other kind.
    pub fn api_message(&self) -> Option<&str> {
        match self {
            Self::Api { message, .. } => Some(message),
            _ => None,
        }
    }
}

/// Convenience alias for `Result<T, NavidromeError>`.
pub type Result<T> = std::result::Result<T, NavidromeError>;
