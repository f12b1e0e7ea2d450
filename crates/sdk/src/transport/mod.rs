//! Transport layer for the Toolgate SDK.

pub mod http;

pub use http::HttpTransport;
