//! Minimal RFC 2822 message assembly for Gmail's `raw` send format.

use base64::engine::general_purpose::URL_SAFE;
use base64::Engine;

/// An outgoing message built up from headers and a plain-text body.
#[derive(Debug, Clone, Default)]
pub struct MimeMessage {
    headers: Vec<(String, String)>,
    body: String,
}

impl MimeMessage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a header. Headers are emitted in insertion order.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Render the message with CRLF line endings and a blank line
    /// separating headers from the body.
    pub fn to_rfc2822(&self) -> String {
        let mut out = String::new();
        for (name, value) in &self.headers {
            out.push_str(name);
            out.push_str(": ");
            out.push_str(value);
            out.push_str("\r\n");
        }
        out.push_str("\r\n");
        out.push_str(&self.body);
        out
    }

    /// Base64url-encode the rendered message, as the Gmail API expects
    /// in the `raw` field.
    pub fn encode(&self) -> String {
        URL_SAFE.encode(self.to_rfc2822().as_bytes())
    }
}
