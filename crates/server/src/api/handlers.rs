use super::ApiResult;
use crate::config::AppState;
use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;
use toolgate_core::types::{
    CreateEventRequest, CreatedEvent, EmailList, EventList, EventPatch, GmailMessage, ReplyRequest,
};

/// Query filters for the email listing
#[derive(Debug, Deserialize)]
pub struct EmailFilters {
    /// Filter by label
    pub label: Option<String>,
}

/// Get emails filtered by label with detailed information
pub async fn get_emails(
    State(state): State<Arc<AppState>>,
    Query(filters): Query<EmailFilters>,
) -> ApiResult<Json<EmailList>> {
    let emails = state.gmail.list(filters.label.as_deref()).await?;
    Ok(Json(emails))
}

/// Reply to an email
pub async fn reply_to_email(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ReplyRequest>,
) -> ApiResult<Json<GmailMessage>> {
    tracing::debug!(message_id = %request.message_id, "reply requested");
    let sent = state.gmail.reply(&request).await?;
    Ok(Json(sent))
}

/// Get calendar events for today
pub async fn get_calendar_events(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<EventList>> {
    let events = state.calendar.list_today().await?;
    Ok(Json(events))
}

/// Create a new calendar event. The date is always set to today while
/// preserving the requested time.
pub async fn create_calendar_event(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateEventRequest>,
) -> ApiResult<Json<CreatedEvent>> {
    let created = state.calendar.create(&request).await?;
    Ok(Json(created))
}

/// Update a calendar event
pub async fn update_calendar_event(
    State(state): State<Arc<AppState>>,
    Path(event_id): Path<String>,
    Json(patch): Json<EventPatch>,
) -> ApiResult<Json<serde_json::Value>> {
    let updated = state.calendar.update(&event_id, &patch).await?;
    Ok(Json(updated))
}
