use folio_types::{DeliveryStatus, Message, Source, Thread};

/// Immutable snapshot of a conversation as a renderer sees it.
///
/// Transitions consume the snapshot and return the next one; each is pure
/// and independently testable. Delivery status moves monotonically:
/// `sent` -> `delivered` or `sent` -> `error`, never backwards.
#[derive(Debug, Clone, Default)]
pub struct ChatState {
    pub messages: Vec<Message>,
    /// Backend-authoritative conversation id, once known.
    pub thread_id: Option<String>,
    /// A request is in flight; renderers show the typing indicator and
    /// disable further submission.
    pub is_processing: bool,
    pub last_error: Option<String>,
    /// Citations backing the latest assistant reply.
    pub sources: Vec<Source>,
}

impl ChatState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the snapshot from a persisted thread.
    pub fn hydrated(thread: Thread) -> Self {
        Self {
            thread_id: Some(thread.thread_id),
            messages: thread.messages,
            ..Self::default()
        }
    }

    /// A user turn was submitted; the request is now outstanding.
    pub fn submitted(mut self, message: Message) -> Self {
        self.messages.push(message);
        self.is_processing = true;
        self.last_error = None;
        self
    }

    /// The backend answered: confirm the user turn, append the reply,
    /// adopt the authoritative thread id.
    pub fn delivered(
        mut self,
        user_message_id: &str,
        reply: Message,
        thread_id: String,
        sources: Vec<Source>,
    ) -> Self {
        self.mark(user_message_id, DeliveryStatus::Delivered);
        self.messages.push(reply);
        self.thread_id = Some(thread_id);
        self.sources = sources;
        self.is_processing = false;
        self
    }

    /// The request ultimately failed: flag the user turn and render the
    /// notice so the conversation view stays usable.
    pub fn failed(mut self, user_message_id: &str, notice: Message) -> Self {
        self.mark(user_message_id, DeliveryStatus::Error);
        self.last_error = Some(notice.content.clone());
        self.messages.push(notice);
        self.is_processing = false;
        self
    }

    /// Drop the oldest turns beyond `max_history`.
    pub fn trimmed(mut self, max_history: usize) -> Self {
        if self.messages.len() > max_history {
            let excess = self.messages.len() - max_history;
            self.messages.drain(..excess);
        }
        self
    }

    pub fn cleared(self) -> Self {
        Self::default()
    }

    fn mark(&mut self, message_id: &str, status: DeliveryStatus) {
        for message in &mut self.messages {
            if message.message_id == message_id && message.status == DeliveryStatus::Sent {
                message.status = status;
            }
        }
    }
}
