//! Typed API surfaces of the Toolgate backend.

mod calendar;
mod emails;
mod health;

pub use calendar::CalendarApi;
pub use emails::EmailsApi;
pub use health::{HealthApi, HealthCheck};
