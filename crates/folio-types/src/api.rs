//! Wire payloads for the chat backend's REST contract.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /api/v1/chat`.
///
/// `thread_id` is omitted entirely for a brand-new conversation; the
/// backend mints one and returns it in [`ChatResponse`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thread_id: Option<String>,
}

impl ChatRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            thread_id: None,
        }
    }

    pub fn with_thread_id(mut self, thread_id: impl Into<String>) -> Self {
        self.thread_id = Some(thread_id.into());
        self
    }
}

/// Body of `POST /api/v1/chat/selected-text`: a chat request carrying a
/// user-highlighted excerpt as additional context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectedTextChatRequest {
    pub message: String,
    pub selected_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thread_id: Option<String>,
}

impl SelectedTextChatRequest {
    pub fn new(message: impl Into<String>, selected_text: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            selected_text: selected_text.into(),
            thread_id: None,
        }
    }

    pub fn with_thread_id(mut self, thread_id: impl Into<String>) -> Self {
        self.thread_id = Some(thread_id.into());
        self
    }
}

/// Successful answer from either chat endpoint.
///
/// `thread_id` is the authoritative conversation id; clients adopt it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub answer: String,
    pub thread_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<Source>>,
}

/// A retrieved passage backing an answer, for citation display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Source {
    pub text: String,
    pub score: f32,
    #[serde(default)]
    pub metadata: Value,
}

/// Error envelope the backend returns on non-2xx statuses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}
