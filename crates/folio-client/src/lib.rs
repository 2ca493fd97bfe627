//! HTTP client for the folio chat backend.
//!
//! Two POST endpoints (plain chat and selected-text chat) plus a health
//! probe, dispatched with a per-request timeout and bounded exponential
//! backoff. The client holds no state between calls beyond its reqwest
//! connection pool, so a single instance is safe to share.

pub mod client;
pub mod config;
pub mod error;

pub use client::ChatApiClient;
pub use config::ChatConfig;
pub use error::{ChatError, Result};
