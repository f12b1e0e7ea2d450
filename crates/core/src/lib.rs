// Core types and Google API clients for the Toolgate tool-call backend

pub mod auth;
pub mod calendar;
pub mod error;
pub mod gmail;
pub mod mime;
pub mod rest;
pub mod types;

pub use error::{GoogleApiError, Result};
pub use types::*;
