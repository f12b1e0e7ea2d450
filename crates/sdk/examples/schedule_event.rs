//! Create a calendar event through the backend.
//!
//! The backend pins the event to today's date, keeping the requested
//! time of day, and notifies attendees.
//!
//! Run with: cargo run --example schedule_event

use toolgate_sdk::{CreateEventRequest, EventAttendee, EventTime, ToolgateClient, ToolgateResult};

#[tokio::main]
async fn main() -> ToolgateResult<()> {
    tracing_subscriber::fmt::init();

    let client = ToolgateClient::builder()
        .base_url("http://127.0.0.1:8000")
        .build()?;

    let request = CreateEventRequest {
        summary: "Hackathon sync".to_string(),
        location: Some("Meeting Room 1".to_string()),
        description: Some("Agent-scheduled check-in".to_string()),
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
        attendees: Some(vec![EventAttendee {
            email: "attendee@example.com".to_string(),
        }]),
        reminders: None,
        recurrence: None,
    };

    let created = client.calendar().create(&request).await?;
    println!(
        "Created event {} ({})",
        created.event_id.as_deref().unwrap_or("?"),
        created.status.as_deref().unwrap_or("unknown"),
    );
    if let Some(link) = created.html_link {
        println!("View it at {link}");
    }

    Ok(())
}
