//! Google OAuth token management.
//!
//! Loads the authorized-user `token.json` produced by the installed-app
//! OAuth flow, serves the access token while it is fresh, and refreshes
//! it through the token endpoint when it is not. Rotated tokens are
//! written back to disk so the file stays usable across restarts.

use crate::error::{GoogleApiError, Result};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tokio::sync::Mutex;

/// OAuth scopes the backend operates under.
pub const SCOPES: &[&str] = &[
    "https://www.googleapis.com/auth/calendar",
    "https://mail.google.com/",
];

/// Tokens within this window of their expiry are refreshed eagerly.
const EXPIRY_SKEW_SECS: i64 = 60;

/// The serde image of Google's authorized-user `token.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorizedUser {
    /// Current access token.
    pub token: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    pub token_uri: String,
    pub client_id: String,
    pub client_secret: String,
    #[serde(default)]
    pub scopes: Vec<String>,
    /// Access token expiry, RFC 3339. Absent means unknown, which is
    /// treated as already stale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
struct RefreshGrantResponse {
    access_token: String,
    #[serde(default)]
    expires_in: Option<i64>,
}

/// Shared access-token source for the Google API clients.
pub struct TokenStore {
    path: PathBuf,
    http: reqwest::Client,
    state: Mutex<AuthorizedUser>,
}

impl TokenStore {
    /// Load the authorized-user file from disk.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let raw = std::fs::read_to_string(&path)?;
        let user: AuthorizedUser = serde_json::from_str(&raw)?;
        Ok(Self {
            path,
            http: reqwest::Client::new(),
            state: Mutex::new(user),
        })
    }

    /// Return a usable access token, refreshing it first if it is stale.
    pub async fn access_token(&self) -> Result<String> {
        let mut user = self.state.lock().await;

        if let Some(expiry) = user.expiry {
            if expiry - Duration::seconds(EXPIRY_SKEW_SECS) > Utc::now() {
                return Ok(user.token.clone());
            }
        }

        let refresh_token = user.refresh_token.clone().ok_or_else(|| {
            GoogleApiError::Token(
                "access token is expired and no refresh_token is present".to_string(),
            )
        })?;

        tracing::debug!(token_uri = %user.token_uri, "refreshing access token");

        let params = [
            ("client_id", user.client_id.as_str()),
            ("client_secret", user.client_secret.as_str()),
            ("refresh_token", refresh_token.as_str()),
            ("grant_type", "refresh_token"),
        ];
        let response = self.http.post(&user.token_uri).form(&params).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GoogleApiError::from_response(status.as_u16(), &body));
        }

        let grant: RefreshGrantResponse = response.json().await?;
        user.token = grant.access_token;
        user.expiry = grant
            .expires_in
            .map(|secs| Utc::now() + Duration::seconds(secs));

        if let Err(err) = self.persist(&user) {
            tracing::warn!(path = %self.path.display(), error = %err, "failed to write rotated token back to disk");
        }

        Ok(user.token.clone())
    }

    fn persist(&self, user: &AuthorizedUser) -> Result<()> {
        let raw = serde_json::to_string_pretty(user)?;
        std::fs::write(&self.path, raw)?;
        Ok(())
    }
}
