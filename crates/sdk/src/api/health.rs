//! Health API endpoints.

use crate::client::ToolgateClient;
use crate::error::ToolgateResult;
use serde::{Deserialize, Serialize};

/// Health API for checking server status.
pub struct HealthApi<'a> {
    client: &'a ToolgateClient,
}

impl<'a> HealthApi<'a> {
    pub(crate) fn new(client: &'a ToolgateClient) -> Self {
        Self { client }
    }

    /// Check health status.
    pub async fn check(&self) -> ToolgateResult<HealthCheck> {
        self.client.http.get("/health").await
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthCheck {
    pub status: String,
    pub service: String,
    pub version: String,
    pub timestamp: String,
}
