use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids;

/// Who produced a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Ai,
    /// Rendered notices (e.g. a failure banner), never sent to the backend.
    System,
}

/// Delivery state of a message as the renderer tracks it.
///
/// Movement is monotonic: `Sent` -> `Delivered` or `Sent` -> `Error`.
/// The store itself appends whatever it is given and does not enforce this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryStatus {
    Sent,
    Delivered,
    Error,
}

/// One turn in a conversation. Belongs to exactly one thread.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub message_id: String,
    pub thread_id: String,
    pub content: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
    pub status: DeliveryStatus,
}

impl Message {
    fn build(
        thread_id: impl Into<String>,
        content: impl Into<String>,
        sender: Sender,
        status: DeliveryStatus,
    ) -> Self {
        Self {
            message_id: ids::generate(),
            thread_id: thread_id.into(),
            content: content.into(),
            sender,
            timestamp: Utc::now(),
            status,
        }
    }

    /// A user turn, starting in `Sent` until the backend answers.
    pub fn user(thread_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self::build(thread_id, content, Sender::User, DeliveryStatus::Sent)
    }

    /// An assistant turn. Already delivered by construction.
    pub fn ai(thread_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self::build(thread_id, content, Sender::Ai, DeliveryStatus::Delivered)
    }

    /// A rendered system notice.
    pub fn system(thread_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self::build(thread_id, content, Sender::System, DeliveryStatus::Delivered)
    }

    pub fn with_status(mut self, status: DeliveryStatus) -> Self {
        self.status = status;
        self
    }
}
