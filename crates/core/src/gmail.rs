//! Gmail operations: listing recent messages and replying in-thread.

use crate::auth::TokenStore;
use crate::error::Result;
use crate::mime::MimeMessage;
use crate::rest::GoogleRest;
use crate::types::{EmailList, EmailSummary, GmailMessage, ReplyRequest};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://gmail.googleapis.com";

const MESSAGES_PATH: &str = "/gmail/v1/users/me/messages";

/// Listings are capped to the most recent messages.
const MAX_RESULTS: &str = "10";

// Wire shapes for the slices of the Gmail REST resources we touch.

#[derive(Debug, Deserialize)]
struct MessageListResponse {
    #[serde(default)]
    messages: Vec<MessageRef>,
}

#[derive(Debug, Deserialize)]
struct MessageRef {
    id: String,
}

#[derive(Debug, Deserialize)]
struct Message {
    id: String,
    #[serde(default)]
    snippet: String,
    #[serde(default)]
    payload: Option<MessagePayload>,
}

#[derive(Debug, Deserialize)]
struct MessagePayload {
    #[serde(default)]
    headers: Vec<MessageHeader>,
}

#[derive(Debug, Deserialize)]
struct MessageHeader {
    #[serde(default)]
    name: String,
    #[serde(default)]
    value: String,
}

/// Client for the Gmail REST API.
#[derive(Clone)]
pub struct GmailClient {
    rest: GoogleRest,
}

impl GmailClient {
    pub fn new(base_url: Url, http: reqwest::Client, tokens: Arc<TokenStore>) -> Self {
        Self {
            rest: GoogleRest::new(base_url, http, tokens),
        }
    }

    /// List up to the 10 most recent emails, optionally restricted to a
    /// label, with each message fetched in full and projected down to
    /// the fields agents act on.
    pub async fn list(&self, label: Option<&str>) -> Result<EmailList> {
        let query = label.map(|l| format!("label:{l}")).unwrap_or_default();
        let listing: MessageListResponse = self
            .rest
            .get(
                MESSAGES_PATH,
                &[("q", query.as_str()), ("maxResults", MAX_RESULTS)],
            )
            .await?;

        if listing.messages.is_empty() {
            return Ok(EmailList {
                emails: Vec::new(),
                count: 0,
            });
        }

        let mut emails = Vec::with_capacity(listing.messages.len());
        for reference in &listing.messages {
            let message = self.get_message(&reference.id).await?;
            emails.push(project(message));
        }

        tracing::info!(count = emails.len(), "listed emails");
        Ok(EmailList {
            count: emails.len(),
            emails,
        })
    }

    /// Reply to an email in its thread.
    ///
    /// The subject is derived from the referenced message's snippet with
    /// a `Re: ` prefix, and the threading headers point back at the
    /// referenced message id.
    pub async fn reply(&self, request: &ReplyRequest) -> Result<GmailMessage> {
        let original = self.get_message(&request.message_id).await?;
        let subject = reply_subject(&original.snippet);

        let mime = MimeMessage::new()
            .header("To", &request.to)
            .header("From", "me")
            .header("Subject", &subject)
            .header("In-Reply-To", &request.message_id)
            .header("References", &request.message_id)
            .body(&request.body);

        let payload = json!({
            "raw": mime.encode(),
            "threadId": request.message_id,
        });

        let sent: GmailMessage = self
            .rest
            .post(&format!("{MESSAGES_PATH}/send"), &[], &payload)
            .await?;

        tracing::info!(message_id = %sent.id, "reply sent");
        Ok(sent)
    }

    async fn get_message(&self, id: &str) -> Result<Message> {
        self.rest
            .get(&format!("{MESSAGES_PATH}/{id}"), &[("format", "full")])
            .await
    }
}

/// Project a full Gmail message down to `{ email_id, snippet, subject, from }`.
///
/// Header names are matched case-insensitively, the first occurrence
/// wins, and absent headers degrade to empty strings.
fn project(message: Message) -> EmailSummary {
    let mut subject = String::new();
    let mut from = String::new();

    if let Some(payload) = &message.payload {
        for header in &payload.headers {
            match header.name.to_ascii_lowercase().as_str() {
                "subject" if subject.is_empty() => subject = header.value.clone(),
                "from" if from.is_empty() => from = header.value.clone(),
                _ => {}
            }
            if !subject.is_empty() && !from.is_empty() {
                break;
            }
        }
    }

    EmailSummary {
        email_id: message.id,
        snippet: message.snippet,
        subject,
        from,
    }
}

/// Prefix `Re: ` unless the subject already carries one.
fn reply_subject(subject: &str) -> String {
    if subject.to_ascii_lowercase().starts_with("re:") {
        subject.to_string()
    } else {
        format!("Re: {subject}")
    }
}
