//! API
//!
//! HTTP client for the Taskly REST service.

pub mod client;

pub use client::*;
