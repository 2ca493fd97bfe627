//! Shared conversation types for the folio reading-assistant client.
//!
//! Everything here is plain data: the persisted thread model, the wire
//! payloads exchanged with the chat backend, and id generation. Behavior
//! lives in `folio-store`, `folio-client` and `folio-session`.

pub mod api;
pub mod ids;
pub mod message;
pub mod thread;

pub use api::{ChatRequest, ChatResponse, ErrorResponse, SelectedTextChatRequest, Source};
pub use message::{DeliveryStatus, Message, Sender};
pub use thread::Thread;
