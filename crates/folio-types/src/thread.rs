use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use crate::ids;
use crate::message::Message;

/// A persisted conversation session.
///
/// Messages are append-only from the client's perspective; insertion order
/// is chronological order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Thread {
    pub thread_id: String,
    pub created_at: DateTime<Utc>,
    pub last_activity: DateTime<Utc>,
    pub messages: Vec<Message>,
}

impl Thread {
    /// Mint a new thread with a client-side id and empty history.
    pub fn new() -> Self {
        Self::with_id(ids::generate())
    }

    pub fn with_id(thread_id: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            thread_id: thread_id.into(),
            created_at: now,
            last_activity: now,
            messages: Vec::new(),
        }
    }

    /// Refresh `last_activity` to now.
    pub fn touch(&mut self) {
        self.last_activity = Utc::now();
    }

    /// Whether the thread has been idle longer than `timeout`.
    pub fn is_expired(&self, timeout: Duration) -> bool {
        let timeout = TimeDelta::from_std(timeout).unwrap_or(TimeDelta::MAX);
        Utc::now() - self.last_activity > timeout
    }
}

impl Default for Thread {
    fn default() -> Self {
        Self::new()
    }
}
