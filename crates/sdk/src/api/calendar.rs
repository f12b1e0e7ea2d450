//! Calendar API endpoints.

use crate::client::ToolgateClient;
use crate::error::ToolgateResult;
use toolgate_core::types::{CreateEventRequest, CreatedEvent, EventList, EventPatch};

/// Calendar API for listing, creating, and updating events.
pub struct CalendarApi<'a> {
    client: &'a ToolgateClient,
}

impl<'a> CalendarApi<'a> {
    pub(crate) fn new(client: &'a ToolgateClient) -> Self {
        Self { client }
    }

    /// List today's events on the primary calendar.
    pub async fn list_today(&self) -> ToolgateResult<EventList> {
        self.client.http.get("/calendar/events").await
    }

    /// Create an event. The backend pins the date to today while
    /// preserving the requested time of day.
    pub async fn create(&self, request: &CreateEventRequest) -> ToolgateResult<CreatedEvent> {
        self.client.http.post("/calendar/events", request).await
    }

    /// Update the given fields of an event.
    pub async fn update(
        &self,
        event_id: &str,
        patch: &EventPatch,
    ) -> ToolgateResult<serde_json::Value> {
        self.client
            .http
            .put(&format!("/calendar/events/{event_id}"), patch)
            .await
    }
}
