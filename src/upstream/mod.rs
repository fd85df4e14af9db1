//! Upstream API subsystem.
//!
//! # Data Flow
//! ```text
//! /rockets handler
//!     → client.rs (GET upstream URL, buffer full body)
//!     → payload.rs (validate JSON, render tab-indented copy for logs)
//!     → raw bytes handed back to the handler for relay
//! ```
//!
//! # Design Decisions
//! - One fixed URL, no retries, no caching
//! - Body is buffered in full before any status or JSON check
//! - The parsed value is diagnostic only; raw bytes are what gets relayed

pub mod client;
pub mod payload;

pub use client::{UpstreamClient, UpstreamError, UpstreamResponse};
pub use payload::{pretty_print, PayloadError};
