//! Google Calendar operations: listing today's events, creating events
//! pinned to today, and updating existing events.

use crate::auth::TokenStore;
use crate::error::{GoogleApiError, Result};
use crate::rest::GoogleRest;
use crate::types::{CreateEventRequest, CreatedEvent, EventList, EventPatch, EventSummary, EventTime};
use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde::Deserialize;
use std::sync::Arc;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://www.googleapis.com";

const EVENTS_PATH: &str = "/calendar/v3/calendars/primary/events";

/// Listings are capped to the first events of the day.
const MAX_RESULTS: &str = "10";

/// Slice of the Calendar event resource we touch.
#[derive(Debug, Clone, Deserialize)]
struct Event {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    summary: Option<String>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    created: Option<String>,
    #[serde(default)]
    updated: Option<String>,
    #[serde(default, rename = "htmlLink")]
    html_link: Option<String>,
    #[serde(default)]
    start: Option<EventTime>,
    #[serde(default)]
    end: Option<EventTime>,
}

#[derive(Debug, Deserialize)]
struct EventsResponse {
    #[serde(default)]
    items: Vec<Event>,
}

/// Client for the Google Calendar REST API, scoped to the primary
/// calendar.
#[derive(Clone)]
pub struct CalendarClient {
    rest: GoogleRest,
}

impl CalendarClient {
    pub fn new(base_url: Url, http: reqwest::Client, tokens: Arc<TokenStore>) -> Self {
        Self {
            rest: GoogleRest::new(base_url, http, tokens),
        }
    }

    /// List today's events, ordered by start time.
    ///
    /// The request window covers the whole UTC day; events whose start
    /// date (in their own offset) is not today are dropped from the
    /// result, matching the recurring-event expansion the API performs.
    pub async fn list_today(&self) -> Result<EventList> {
        let now = Utc::now();
        let today = now.date_naive();
        let start_of_day = today
            .and_hms_opt(0, 0, 0)
            .and_then(|t| t.and_local_timezone(Utc).single())
            .ok_or_else(|| GoogleApiError::invalid_datetime(today.to_string(), "day start"))?;
        let end_of_day = today
            .and_hms_micro_opt(23, 59, 59, 999_999)
            .and_then(|t| t.and_local_timezone(Utc).single())
            .ok_or_else(|| GoogleApiError::invalid_datetime(today.to_string(), "day end"))?;

        let time_min = start_of_day.to_rfc3339_opts(SecondsFormat::Micros, false);
        let time_max = end_of_day.to_rfc3339_opts(SecondsFormat::Micros, false);

        let response: EventsResponse = self
            .rest
            .get(
                EVENTS_PATH,
                &[
                    ("timeMin", time_min.as_str()),
                    ("timeMax", time_max.as_str()),
                    ("maxResults", MAX_RESULTS),
                    ("singleEvents", "true"),
                    ("orderBy", "startTime"),
                ],
            )
            .await?;

        let events: Vec<EventSummary> = response
            .items
            .into_iter()
            .filter(|event| {
                event
                    .start
                    .as_ref()
                    .is_some_and(|start| starts_on(start, today))
            })
            .map(project_summary)
            .collect();

        tracing::info!(count = events.len(), "listed today's events");
        Ok(EventList { events })
    }

    /// Create an event on the primary calendar, notifying attendees.
    ///
    /// Timed start/end values are pinned to today's date; the time of
    /// day and UTC offset of the request are preserved.
    pub async fn create(&self, request: &CreateEventRequest) -> Result<CreatedEvent> {
        let today = Utc::now().date_naive();

        let mut event = request.clone();
        if let Some(raw) = event.start.date_time.take() {
            event.start.date_time = Some(pin_to_day(&raw, today)?);
        }
        if let Some(raw) = event.end.date_time.take() {
            event.end.date_time = Some(pin_to_day(&raw, today)?);
        }

        let created: Event = self
            .rest
            .post(EVENTS_PATH, &[("sendUpdates", "all")], &event)
            .await?;

        tracing::info!(event_id = ?created.id, "created calendar event");
        Ok(project_created(created))
    }

    /// Update the given fields of an event and return Google's response
    /// unmodified.
    pub async fn update(&self, event_id: &str, patch: &EventPatch) -> Result<serde_json::Value> {
        let updated = self
            .rest
            .put(&format!("{EVENTS_PATH}/{event_id}"), patch)
            .await?;
        tracing::info!(event_id, "updated calendar event");
        Ok(updated)
    }
}

/// Whether an event starts on the given date.
///
/// Timed events are compared in their own offset; all-day events by
/// their literal date. Unparseable values never match.
fn starts_on(start: &EventTime, day: NaiveDate) -> bool {
    match (&start.date_time, &start.date) {
        (Some(raw), _) => DateTime::parse_from_rfc3339(raw)
            .map(|parsed| parsed.date_naive() == day)
            .unwrap_or(false),
        (None, Some(raw)) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map(|parsed| parsed == day)
            .unwrap_or(false),
        (None, None) => false,
    }
}

/// Replace the date portion of an RFC 3339 value with the given day,
/// keeping its time of day and UTC offset.
fn pin_to_day(raw: &str, day: NaiveDate) -> Result<String> {
    let parsed = DateTime::parse_from_rfc3339(raw)
        .map_err(|err| GoogleApiError::invalid_datetime(raw, err))?;
    let pinned = day
        .and_time(parsed.time())
        .and_local_timezone(*parsed.offset())
        .single()
        .ok_or_else(|| GoogleApiError::invalid_datetime(raw, "ambiguous local time"))?;
    Ok(pinned.to_rfc3339())
}

fn project_summary(event: Event) -> EventSummary {
    EventSummary {
        event_id: event.id,
        summary: event.summary.unwrap_or_else(|| "No Title".to_string()),
        start: event.start.and_then(|s| s.effective().map(String::from)),
        end: event.end.and_then(|e| e.effective().map(String::from)),
    }
}

fn project_created(event: Event) -> CreatedEvent {
    CreatedEvent {
        event_id: event.id,
        html_link: event.html_link,
        summary: event.summary,
        status: event.status,
        created: event.created,
        updated: event.updated,
        start: event.start.as_ref().and_then(|s| s.date_time.clone()),
        end: event.end.as_ref().and_then(|e| e.date_time.clone()),
        time_zone: event.start.as_ref().and_then(|s| s.time_zone.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{AuthorizedUser, SCOPES};
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_tokens(dir: &tempfile::TempDir) -> Arc<TokenStore> {
        let user = AuthorizedUser {
            token: "test-token".to_string(),
            refresh_token: Some("refresh".to_string()),
            token_uri: "http://unreachable.invalid/token".to_string(),
            client_id: "client-id".to_string(),
            client_secret: "client-secret".to_string(),
            scopes: SCOPES.iter().map(|s| s.to_string()).collect(),
            expiry: Some(Utc::now() + chrono::Duration::hours(1)),
        };
        let path = dir.path().join("token.json");
        std::fs::write(&path, serde_json::to_string(&user).unwrap()).unwrap();
        Arc::new(TokenStore::load(&path).unwrap())
    }

    fn client_for(server: &MockServer, dir: &tempfile::TempDir) -> CalendarClient {
        CalendarClient::new(
            Url::parse(&server.uri()).unwrap(),
            reqwest::Client::new(),
            test_tokens(dir),
        )
    }

    fn timed(raw: &str) -> EventTime {
        EventTime {
            date_time: Some(raw.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_pin_to_day_replaces_date_and_keeps_time_and_offset() {
        let day = NaiveDate::from_ymd_opt(2025, 9, 28).unwrap();
        let pinned = pin_to_day("2025-09-22T09:30:00+08:00", day).unwrap();
        assert_eq!(pinned, "2025-09-28T09:30:00+08:00");
    }

    #[test]
    fn test_pin_to_day_handles_zulu_suffix() {
        let day = NaiveDate::from_ymd_opt(2025, 9, 28).unwrap();
        let pinned = pin_to_day("2025-09-22T17:45:00Z", day).unwrap();
        assert_eq!(pinned, "2025-09-28T17:45:00+00:00");
    }

    #[test]
    fn test_pin_to_day_rejects_garbage() {
        let day = NaiveDate::from_ymd_opt(2025, 9, 28).unwrap();
        match pin_to_day("not-a-datetime", day) {
            Err(GoogleApiError::InvalidDateTime { value, .. }) => {
                assert_eq!(value, "not-a-datetime");
            }
            other => panic!("expected InvalidDateTime, got {other:?}"),
        }
    }

    #[test]
    fn test_starts_on_compares_in_event_offset() {
        let day = NaiveDate::from_ymd_opt(2025, 9, 22).unwrap();

        assert!(starts_on(&timed("2025-09-22T09:00:00+08:00"), day));
        assert!(!starts_on(&timed("2025-09-21T23:30:00+08:00"), day));
        // 2025-09-21T23:30 UTC is already the 22nd in +08:00.
        assert!(starts_on(&timed("2025-09-22T07:30:00+08:00"), day));

        let all_day = EventTime {
            date: Some("2025-09-22".to_string()),
            ..Default::default()
        };
        assert!(starts_on(&all_day, day));

        assert!(!starts_on(&timed("garbage"), day));
        assert!(!starts_on(&EventTime::default(), day));
    }

    #[test]
    fn test_project_summary_defaults_title() {
        let event = Event {
            id: Some("e1".to_string()),
            summary: None,
            status: None,
            created: None,
            updated: None,
            html_link: None,
            start: Some(timed("2025-09-22T09:00:00Z")),
            end: None,
        };
        let summary = project_summary(event);
        assert_eq!(summary.summary, "No Title");
        assert_eq!(summary.start.as_deref(), Some("2025-09-22T09:00:00Z"));
        assert!(summary.end.is_none());
    }

    #[tokio::test]
    async fn test_list_today_filters_out_other_days() {
        let server = MockServer::start().await;
        let today = Utc::now().date_naive();
        let yesterday = today.pred_opt().unwrap();

        Mock::given(method("GET"))
            .and(path("/calendar/v3/calendars/primary/events"))
            .and(query_param("singleEvents", "true"))
            .and(query_param("orderBy", "startTime"))
            .and(query_param("maxResults", "10"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "items": [
                    {
                        "id": "today-1",
                        "summary": "Planning",
                        "start": {"dateTime": format!("{today}T09:00:00+00:00")},
                        "end": {"dateTime": format!("{today}T10:00:00+00:00")}
                    },
                    {
                        "id": "stale-1",
                        "summary": "Left over from yesterday",
                        "start": {"dateTime": format!("{yesterday}T09:00:00+00:00")},
                        "end": {"dateTime": format!("{yesterday}T10:00:00+00:00")}
                    },
                    {
                        "id": "today-2",
                        "start": {"date": today.to_string()},
                        "end": {"date": today.to_string()}
                    }
                ]
            })))
            .mount(&server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let listing = client_for(&server, &dir).list_today().await.unwrap();

        assert_eq!(listing.events.len(), 2);
        assert_eq!(listing.events[0].event_id.as_deref(), Some("today-1"));
        assert_eq!(listing.events[0].summary, "Planning");
        assert_eq!(listing.events[1].summary, "No Title");
        assert_eq!(listing.events[1].start.as_deref(), Some(today.to_string().as_str()));
    }

    #[tokio::test]
    async fn test_create_pins_times_to_today_and_notifies() {
        let server = MockServer::start().await;
        let today = Utc::now().date_naive();

        Mock::given(method("POST"))
            .and(path("/calendar/v3/calendars/primary/events"))
            .and(query_param("sendUpdates", "all"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "created-1",
                "htmlLink": "https://calendar.google.com/event?eid=created-1",
                "summary": "Test Event",
                "status": "confirmed",
                "created": "2025-09-22T00:00:00.000Z",
                "updated": "2025-09-22T00:00:00.000Z",
                "start": {"dateTime": format!("{today}T09:00:00+08:00"), "timeZone": "Asia/Kuala_Lumpur"},
                "end": {"dateTime": format!("{today}T10:00:00+08:00"), "timeZone": "Asia/Kuala_Lumpur"}
            })))
            .mount(&server)
            .await;

        let request = CreateEventRequest {
            summary: "Test Event".to_string(),
            location: Some("Meeting Room 1".to_string()),
            description: None,
            start: EventTime {
                date_time: Some("2025-09-22T09:00:00+08:00".to_string()),
                time_zone: Some("Asia/Kuala_Lumpur".to_string()),
                ..Default::default()
            },
            end: EventTime {
                date_time: Some("2025-09-22T10:00:00+08:00".to_string()),
                time_zone: Some("Asia/Kuala_Lumpur".to_string()),
                ..Default::default()
            },
            attendees: Some(vec![crate::types::EventAttendee {
                email: "attendee@example.com".to_string(),
            }]),
            reminders: None,
            recurrence: None,
        };

        let dir = tempfile::tempdir().unwrap();
        let created = client_for(&server, &dir).create(&request).await.unwrap();
        assert_eq!(created.event_id.as_deref(), Some("created-1"));
        assert_eq!(created.status.as_deref(), Some("confirmed"));
        assert_eq!(created.time_zone.as_deref(), Some("Asia/Kuala_Lumpur"));

        // The body that went out carries today's date with the original
        // wall-clock time and offset.
        let requests = server.received_requests().await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
        assert_eq!(
            body["start"]["dateTime"],
            format!("{today}T09:00:00+08:00")
        );
        assert_eq!(body["end"]["dateTime"], format!("{today}T10:00:00+08:00"));
        assert_eq!(body["attendees"][0]["email"], "attendee@example.com");
    }

    #[tokio::test]
    async fn test_update_puts_only_provided_fields() {
        let server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path("/calendar/v3/calendars/primary/events/e42"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "e42",
                "summary": "Testing",
                "status": "confirmed"
            })))
            .mount(&server)
            .await;

        let patch = EventPatch {
            summary: Some("Testing".to_string()),
            ..Default::default()
        };

        let dir = tempfile::tempdir().unwrap();
        let updated = client_for(&server, &dir).update("e42", &patch).await.unwrap();
        assert_eq!(updated["summary"], "Testing");

        let requests = server.received_requests().await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
        assert_eq!(body, serde_json::json!({"summary": "Testing"}));
    }

    #[tokio::test]
    async fn test_create_rejects_malformed_datetime() {
        let server = MockServer::start().await;
        let request = CreateEventRequest {
            summary: "Broken".to_string(),
            location: None,
            description: None,
            start: timed("yesterday at nine"),
            end: timed("2025-09-22T10:00:00+08:00"),
            attendees: None,
            reminders: None,
            recurrence: None,
        };

        let dir = tempfile::tempdir().unwrap();
        let err = client_for(&server, &dir).create(&request).await.unwrap_err();
        assert!(matches!(err, GoogleApiError::InvalidDateTime { .. }));
    }
}
