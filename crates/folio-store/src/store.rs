use std::time::Duration;

use folio_types::{Message, Thread};
use tracing::{debug, warn};

use crate::backend::StorageBackend;
use crate::error::BackendError;

/// Fixed storage key: the store holds at most one conversation thread.
pub const THREAD_STORAGE_KEY: &str = "folio_chat_thread";

/// Threads idle longer than this are evicted on read (24 hours).
pub const DEFAULT_THREAD_TIMEOUT: Duration = Duration::from_millis(86_400_000);

const PROBE_KEY: &str = "__storage_test__";

/// Persists a single conversation thread under [`THREAD_STORAGE_KEY`].
///
/// One thread per store is a deliberate constraint inherited from the
/// original one-slot-per-browser design, not an implementation shortcut.
/// No operation here returns an error: failures are logged and collapse to
/// `false`/`None` so callers can fall back to in-memory behavior.
pub struct ThreadStore {
    backend: Box<dyn StorageBackend>,
    timeout: Duration,
}

impl ThreadStore {
    pub fn new(backend: impl StorageBackend + 'static) -> Self {
        Self {
            backend: Box::new(backend),
            timeout: DEFAULT_THREAD_TIMEOUT,
        }
    }

    /// Override the idle expiry window.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Read the stored thread, evicting it when expired.
    ///
    /// Unreadable or unparsable entries are treated as absent.
    pub fn get_thread(&self) -> Option<Thread> {
        let raw = match self.backend.load(THREAD_STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(err) => {
                warn!("failed to read thread from storage: {err}");
                return None;
            }
        };

        let thread: Thread = match serde_json::from_str(&raw) {
            Ok(thread) => thread,
            Err(err) => {
                warn!("discarding unparsable stored thread: {err}");
                return None;
            }
        };

        if thread.is_expired(self.timeout) {
            debug!(thread_id = %thread.thread_id, "stored thread expired, evicting");
            self.clear_thread();
            return None;
        }

        Some(thread)
    }

    /// Persist the thread wholesale, overwriting the slot.
    ///
    /// A quota failure clears the slot so the next exchange starts clean.
    pub fn save_thread(&self, thread: &Thread) -> bool {
        let raw = match serde_json::to_string(thread) {
            Ok(raw) => raw,
            Err(err) => {
                warn!("failed to serialize thread: {err}");
                return false;
            }
        };

        match self.backend.store(THREAD_STORAGE_KEY, &raw) {
            Ok(()) => true,
            Err(BackendError::QuotaExceeded) => {
                warn!("storage quota exceeded, clearing stored thread");
                self.clear_thread();
                false
            }
            Err(err) => {
                warn!("failed to save thread: {err}");
                false
            }
        }
    }

    /// Mint a new thread, persist it best-effort, and return it regardless.
    pub fn create_thread(&self) -> Thread {
        let thread = Thread::new();
        self.save_thread(&thread);
        thread
    }

    /// Append a message to the live thread, creating one if none exists.
    pub fn add_message(&self, message: Message) -> bool {
        let mut thread = self
            .get_thread()
            .unwrap_or_else(|| self.create_thread());
        thread.messages.push(message);
        thread.touch();
        self.save_thread(&thread)
    }

    /// Refresh the activity timestamp. `false` when no thread exists.
    pub fn update_last_activity(&self) -> bool {
        let Some(mut thread) = self.get_thread() else {
            return false;
        };
        thread.touch();
        self.save_thread(&thread)
    }

    /// Rewrite the stored thread id (and its messages) to `new_id`.
    ///
    /// Used when the backend assigns the authoritative conversation id for
    /// a thread that was minted client-side.
    pub fn adopt_thread_id(&self, new_id: &str) -> bool {
        let Some(mut thread) = self.get_thread() else {
            return false;
        };
        if thread.thread_id == new_id {
            return true;
        }
        thread.thread_id = new_id.to_string();
        for message in &mut thread.messages {
            message.thread_id = new_id.to_string();
        }
        self.save_thread(&thread)
    }

    /// Unconditionally remove the stored entry.
    pub fn clear_thread(&self) {
        if let Err(err) = self.backend.remove(THREAD_STORAGE_KEY) {
            warn!("failed to clear stored thread: {err}");
        }
    }

    /// Messages of the live thread; empty when none is stored.
    pub fn messages(&self) -> Vec<Message> {
        self.get_thread()
            .map(|thread| thread.messages)
            .unwrap_or_default()
    }

    /// Probe the backend with a throwaway write/remove.
    pub fn is_storage_available(&self) -> bool {
        self.backend.store(PROBE_KEY, PROBE_KEY).is_ok() && self.backend.remove(PROBE_KEY).is_ok()
    }
}
