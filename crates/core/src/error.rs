use serde::Deserialize;
use thiserror::Error;

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, GoogleApiError>;

/// Errors surfaced by the Google API clients and the token store.
#[derive(Debug, Error)]
pub enum GoogleApiError {
    /// The HTTP request itself failed (connect, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Google returned a non-success status.
    #[error("Google API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// The stored token is unusable and cannot be refreshed.
    #[error("token error: {0}")]
    Token(String),

    /// A date/time field could not be parsed as RFC 3339.
    #[error("invalid datetime {value:?}: {reason}")]
    InvalidDateTime { value: String, reason: String },

    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error envelope Google wraps failures in: `{"error": {"code", "message"}}`.
#[derive(Debug, Deserialize)]
struct GoogleErrorBody {
    error: GoogleErrorDetail,
}

#[derive(Debug, Deserialize)]
struct GoogleErrorDetail {
    #[serde(default)]
    message: String,
}

impl GoogleApiError {
    /// Build an API error from a non-success response, pulling the message
    /// out of Google's error envelope when the body carries one.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = match serde_json::from_str::<GoogleErrorBody>(body) {
            Ok(envelope) if !envelope.error.message.is_empty() => envelope.error.message,
            _ => body.to_string(),
        };
        Self::Api { status, message }
    }

    pub fn invalid_datetime(value: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        Self::InvalidDateTime {
            value: value.into(),
            reason: reason.to_string(),
        }
    }
}
