//! Main client for the Toolgate SDK.

use crate::api::{CalendarApi, EmailsApi, HealthApi};
use crate::config::{ClientConfig, RetryConfig};
use crate::error::{ToolgateError, ToolgateResult};
use crate::transport::HttpTransport;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Main client for interacting with the Toolgate API.
#[derive(Clone)]
pub struct ToolgateClient {
    pub(crate) http: HttpTransport,
}

impl ToolgateClient {
    /// Create a new client builder.
    pub fn builder() -> ToolgateClientBuilder {
        ToolgateClientBuilder::new()
    }

    /// Create a client from configuration.
    fn from_config(config: ClientConfig) -> ToolgateResult<Self> {
        let http = HttpTransport::new(Arc::new(config))?;

        Ok(Self { http })
    }

    /// Get the health API.
    pub fn health(&self) -> HealthApi<'_> {
        HealthApi::new(self)
    }

    /// Get the emails API.
    pub fn emails(&self) -> EmailsApi<'_> {
        EmailsApi::new(self)
    }

    /// Get the calendar API.
    pub fn calendar(&self) -> CalendarApi<'_> {
        CalendarApi::new(self)
    }
}

/// Builder for creating a ToolgateClient.
pub struct ToolgateClientBuilder {
    base_url: Option<String>,
    timeout: Duration,
    retry_config: RetryConfig,
}

impl ToolgateClientBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            base_url: None,
            timeout: Duration::from_secs(30),
            retry_config: RetryConfig::default(),
        }
    }

    /// Set the base URL of the Toolgate server.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the retry configuration.
    pub fn retry_config(mut self, config: RetryConfig) -> Self {
        self.retry_config = config;
        self
    }

    /// Build the client.
    pub fn build(self) -> ToolgateResult<ToolgateClient> {
        let base_url_str = self
            .base_url
            .ok_or_else(|| ToolgateError::Config("base_url is required".to_string()))?;

        let base_url = Url::parse(&base_url_str)?;

        let config = ClientConfig {
            base_url,
            timeout: self.timeout,
            retry_config: self.retry_config,
        };

        ToolgateClient::from_config(config)
    }
}

impl Default for ToolgateClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
