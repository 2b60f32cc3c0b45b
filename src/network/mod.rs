//! HTTP networking module
//!
//! Provides the HTTP client used to reach the remote API.

mod client;

pub use client::{ApiResponse, HttpClient};
