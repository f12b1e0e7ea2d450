//! Error types for the Toolgate SDK.

use serde::{Deserialize, Serialize};

/// Result type for SDK operations.
pub type ToolgateResult<T> = Result<T, ToolgateError>;

/// Error types that can occur when using the Toolgate SDK.
#[derive(Debug, thiserror::Error)]
pub enum ToolgateError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend returned an error response.
    #[error("API error (status {status}): {message}")]
    Api {
        status: u16,
        message: String,
        details: Option<String>,
    },

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Connection timeout.
    #[error("Request timed out")]
    Timeout,

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl ToolgateError {
    /// Check if this error is retryable.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Http(_) | Self::Timeout => true,
            Self::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// Create an API error from a status code and response body.
    pub fn from_response(status: u16, body: &str) -> Self {
        // The backend wraps failures in `{ error, details? }`
        if let Ok(envelope) = serde_json::from_str::<ErrorResponse>(body) {
            Self::Api {
                status,
                message: envelope.error,
                details: envelope.details,
            }
        } else {
            Self::Api {
                status,
                message: body.to_string(),
                details: None,
            }
        }
    }
}

/// Error response from the Toolgate API.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}
