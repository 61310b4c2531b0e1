//! HTTP transport for the depot client
//!
//! This crate provides the JSON transport the API bindings sit on: a
//! `HttpTransport` trait with a reqwest-backed implementation, mock support
//! for offline tests, and backoff calculation for transient-failure retries.

pub mod backoff;
pub mod client;
pub mod config;
pub mod errors;
pub mod types;

// Re-export main types for convenience
pub use backoff::Backoff;
pub use client::{HttpManager, HttpResponse, HttpTransport};
pub use config::HttpConfig;
pub use errors::HttpError;
pub use types::{HttpMethod, HttpMethodError};
