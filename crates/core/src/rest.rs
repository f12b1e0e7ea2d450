//! Bearer-authenticated transport shared by the Google API clients.

use crate::auth::TokenStore;
use crate::error::{GoogleApiError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;
use url::Url;

/// Thin wrapper over `reqwest` that attaches a fresh access token to
/// every request and maps non-success responses to [`GoogleApiError`].
#[derive(Clone)]
pub struct GoogleRest {
    base_url: Url,
    http: reqwest::Client,
    tokens: Arc<TokenStore>,
}

impl GoogleRest {
    pub fn new(base_url: Url, http: reqwest::Client, tokens: Arc<TokenStore>) -> Self {
        Self {
            base_url,
            http,
            tokens,
        }
    }

    fn build_url(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path)?)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> Result<T> {
        let url = self.build_url(path)?;
        let token = self.tokens.access_token().await?;
        debug!(url = %url, "GET request");

        let response = self
            .http
            .get(url)
            .query(query)
            .bearer_auth(token)
            .send()
            .await?;
        Self::decode(response).await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        query: &[(&str, &str)],
        body: &B,
    ) -> Result<T> {
        let url = self.build_url(path)?;
        let token = self.tokens.access_token().await?;
        debug!(url = %url, "POST request");

        let response = self
            .http
            .post(url)
            .query(query)
            .bearer_auth(token)
            .json(body)
            .send()
            .await?;
        Self::decode(response).await
    }

    pub async fn put<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> Result<T> {
        let url = self.build_url(path)?;
        let token = self.tokens.access_token().await?;
        debug!(url = %url, "PUT request");

        let response = self
            .http
            .put(url)
            .bearer_auth(token)
            .json(body)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GoogleApiError::from_response(status.as_u16(), &body));
        }
        Ok(response.json().await?)
    }
}
