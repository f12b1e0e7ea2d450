use serde::{Deserialize, Serialize};

/// One Gmail message projected down to the fields agents act on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmailSummary {
    pub email_id: String,
    pub snippet: String,
    pub subject: String,
    pub from: String,
}

/// Listing of recent emails.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailList {
    pub emails: Vec<EmailSummary>,
    pub count: usize,
}

/// Request to reply to an existing email.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplyRequest {
    /// ID of the email to reply to.
    pub message_id: String,
    /// Recipient email address.
    pub to: String,
    /// Reply content.
    pub body: String,
    /// Reply to all recipients.
    #[serde(default)]
    pub reply_all: bool,
}

/// Gmail's response to a sent message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GmailMessage {
    pub id: String,
    #[serde(rename = "threadId")]
    pub thread_id: Option<String>,
    #[serde(rename = "labelIds", skip_serializing_if = "Option::is_none")]
    pub label_ids: Option<Vec<String>>,
}

/// A calendar event start/end, mirroring Google's `EventDateTime`.
///
/// Exactly one of `date` (all-day) or `date_time` is expected to be set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventTime {
    /// The date in `yyyy-mm-dd` format, for all-day events.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Combined date-time value, RFC 3339.
    #[serde(rename = "dateTime", skip_serializing_if = "Option::is_none")]
    pub date_time: Option<String>,
    /// IANA time zone the time is specified in.
    #[serde(rename = "timeZone", skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
}

impl EventTime {
    /// The value agents see: the timed form when present, the all-day
    /// date otherwise.
    pub fn effective(&self) -> Option<&str> {
        self.date_time.as_deref().or(self.date.as_deref())
    }
}

/// An event attendee.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventAttendee {
    pub email: String,
}

/// Request to create a calendar event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEventRequest {
    /// The event's title.
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The (inclusive) start time of the event.
    pub start: EventTime,
    /// The (exclusive) end time of the event.
    pub end: EventTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attendees: Option<Vec<EventAttendee>>,
    /// Reminder settings, passed through to Google verbatim.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reminders: Option<serde_json::Value>,
    /// RRULE/EXRULE/RDATE/EXDATE lines for a recurring event.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurrence: Option<Vec<String>>,
}

/// Simplified view of a freshly created event.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedEvent {
    pub event_id: Option<String>,
    pub html_link: Option<String>,
    pub summary: Option<String>,
    pub status: Option<String>,
    pub created: Option<String>,
    pub updated: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub time_zone: Option<String>,
}

/// Fields an update may change; absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<EventTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<EventTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// One calendar event projected down to the fields agents act on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventSummary {
    #[serde(rename = "eventId")]
    pub event_id: Option<String>,
    pub summary: String,
    pub start: Option<String>,
    pub end: Option<String>,
}

/// Listing of today's events.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventList {
    pub events: Vec<EventSummary>,
}
