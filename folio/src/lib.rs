//! # Folio - book-site reading assistant, client core
//!
//! Folio is the conversation core behind an embedded "ask the book" chat
//! widget: a persisted conversation thread, a resilient HTTP client for the
//! chat backend, and the state machine that keeps the conversation usable
//! through network and storage failures.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use folio::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = ChatApiClient::new(ChatConfig::from_env())?;
//!     let store = ThreadStore::new(FileBackend::new("/tmp/folio")?);
//!     let mut session = ChatSession::new(client, store);
//!
//!     let state = session.send("What does chapter 2 cover?").await;
//!     for message in &state.messages {
//!         println!("{:?}: {}", message.sender, message.content);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! Folio consists of several composable crates:
//!
//! - **folio-types**: Thread/message model, wire payloads, id generation
//! - **folio-store**: Single-slot thread persistence over pluggable backends
//! - **folio-client**: Chat API client with bounded retry and health checks
//! - **folio-session**: Conversation state machine and orchestration
//!
//! The chat backend itself (retrieval, answer generation) is an external
//! service; folio only speaks its REST contract.

// Re-export all public APIs
pub use folio_client as client;
pub use folio_session as session;
pub use folio_store as store;
pub use folio_types as types;

// Re-export commonly used types
pub use folio_client::{ChatApiClient, ChatConfig, ChatError};
pub use folio_session::{ChatSession, ChatState};
pub use folio_store::{FileBackend, MemoryBackend, StorageBackend, ThreadStore};
pub use folio_types::{ChatResponse, DeliveryStatus, Message, Sender, Source, Thread};

/// Convenient prelude with commonly used types
pub mod prelude {
    pub use crate::client::{ChatApiClient, ChatConfig};
    pub use crate::session::{ChatSession, ChatState};
    pub use crate::store::{FileBackend, MemoryBackend, ThreadStore};
    pub use crate::types::{DeliveryStatus, Message, Sender, Thread};
    pub use anyhow::Result;
}
