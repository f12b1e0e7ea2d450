//! Email API endpoints.

use crate::client::ToolgateClient;
use crate::error::ToolgateResult;
use toolgate_core::types::{EmailList, GmailMessage, ReplyRequest};

/// Emails API for listing and replying to Gmail messages.
pub struct EmailsApi<'a> {
    client: &'a ToolgateClient,
}

impl<'a> EmailsApi<'a> {
    pub(crate) fn new(client: &'a ToolgateClient) -> Self {
        Self { client }
    }

    /// List recent emails, optionally filtered by label.
    pub async fn list(&self, label: Option<&str>) -> ToolgateResult<EmailList> {
        match label {
            Some(label) => {
                self.client
                    .http
                    .get_with_query("/emails", &[("label", label)])
                    .await
            }
            None => self.client.http.get("/emails").await,
        }
    }

    /// Reply to an email in its thread.
    pub async fn reply(&self, request: &ReplyRequest) -> ToolgateResult<GmailMessage> {
        self.client.http.post("/emails/reply", request).await
    }
}
