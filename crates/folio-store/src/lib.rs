//! Single-slot conversation persistence for the folio chat client.
//!
//! The store keeps at most one [`folio_types::Thread`] under a fixed key in
//! an injected key-value backend, the way a browser widget keeps its
//! conversation in local storage. Every operation is defensive: storage can
//! be unavailable, full, or corrupted, and none of that may break the chat
//! experience. Failures degrade to "did not persist" plus a log line; the
//! in-memory conversation continues unaffected.

pub mod backend;
pub mod error;
pub mod store;

pub use backend::{FileBackend, MemoryBackend, StorageBackend};
pub use error::{BackendError, Result};
pub use store::{ThreadStore, DEFAULT_THREAD_TIMEOUT, THREAD_STORAGE_KEY};
