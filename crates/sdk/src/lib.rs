//! # Toolgate SDK
//!
//! Rust SDK for Toolgate - Google Workspace tool calls for AI agents.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use toolgate_sdk::{ToolgateClient, ToolgateResult};
//!
//! #[tokio::main]
//! async fn main() -> ToolgateResult<()> {
//!     // Build client
//!     let client = ToolgateClient::builder()
//!         .base_url("http://127.0.0.1:8000")
//!         .build()?;
//!
//!     // Check health
//!     let health = client.health().check().await?;
//!     println!("Server status: {}", health.status);
//!
//!     // List starred emails
//!     let emails = client.emails().list(Some("STARRED")).await?;
//!     println!("Found {} emails", emails.count);
//!
//!     // List today's calendar events
//!     let events = client.calendar().list_today().await?;
//!     println!("Found {} events", events.events.len());
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod transport;

// Re-export main client
pub use client::{ToolgateClient, ToolgateClientBuilder};
pub use config::{ClientConfig, RetryConfig};
pub use error::{ToolgateError, ToolgateResult};

// Re-export core types for convenience
pub use toolgate_core::types::{
    CreateEventRequest, CreatedEvent, EmailList, EmailSummary, EventAttendee, EventList,
    EventPatch, EventSummary, EventTime, GmailMessage, ReplyRequest,
};
