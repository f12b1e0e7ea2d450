//! Basic SDK usage example.
//!
//! This example demonstrates how to connect to a Toolgate server, check
//! its health, and read emails and calendar events.
//!
//! Run with: cargo run --example basic_usage

use toolgate_sdk::{ToolgateClient, ToolgateResult};
use std::time::Duration;

#[tokio::main]
async fn main() -> ToolgateResult<()> {
    // Initialize tracing for debug output
    tracing_subscriber::fmt::init();

    // Build the client with configuration
    let client = ToolgateClient::builder()
        .base_url("http://127.0.0.1:8000")
        .timeout(Duration::from_secs(30))
        .build()?;

    // Check server health
    println!("Checking server health...");
    let health = client.health().check().await?;
    println!("Server status: {} ({} {})", health.status, health.service, health.version);

    // List recent emails in the inbox
    println!("\nListing inbox emails...");
    let emails = client.emails().list(Some("INBOX")).await?;
    println!("Found {} emails", emails.count);

    for email in emails.emails.iter().take(5) {
        println!("  {} — {} ({})", email.email_id, email.subject, email.from);
    }

    // List today's calendar events
    println!("\nListing today's events...");
    let events = client.calendar().list_today().await?;
    println!("Found {} events", events.events.len());

    for event in &events.events {
        println!(
            "  {}: {} ({} - {})",
            event.event_id.as_deref().unwrap_or("?"),
            event.summary,
            event.start.as_deref().unwrap_or("?"),
            event.end.as_deref().unwrap_or("?"),
        );
    }

    println!("\nBasic usage example completed successfully!");
    Ok(())
}
