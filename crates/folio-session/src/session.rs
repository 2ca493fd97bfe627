use folio_client::ChatApiClient;
use folio_store::ThreadStore;
use folio_types::{DeliveryStatus, Message};
use tracing::{debug, warn};

use crate::state::ChatState;

/// Rendered into the conversation when a request ultimately fails.
pub const ERROR_NOTICE: &str = "⚠️ Error talking to assistant";

/// Drives one conversation: builds requests, applies state transitions,
/// and persists exchanges best-effort.
///
/// Construct once at application start and pass by reference to whatever
/// renders it. Sends take `&mut self`, so overlapping requests from one
/// widget are impossible by construction; `is_processing` on the state is
/// purely a rendering flag.
pub struct ChatSession {
    client: ChatApiClient,
    store: ThreadStore,
    state: ChatState,
}

impl ChatSession {
    /// Hydrates from the stored thread when persistence is enabled.
    pub fn new(client: ChatApiClient, store: ThreadStore) -> Self {
        let state = if client.config().enable_message_persistence {
            store
                .get_thread()
                .map(ChatState::hydrated)
                .unwrap_or_default()
        } else {
            ChatState::new()
        };
        Self {
            client,
            store,
            state,
        }
    }

    pub fn state(&self) -> &ChatState {
        &self.state
    }

    /// Whether renderers should show the typing indicator right now.
    pub fn show_typing(&self) -> bool {
        self.state.is_processing && self.client.config().enable_typing_indicator
    }

    /// Reachability of the backend; never errors.
    pub async fn backend_reachable(&self) -> bool {
        self.client.health_check().await
    }

    /// Send a plain chat message and return the resulting snapshot.
    pub async fn send(&mut self, text: &str) -> &ChatState {
        self.dispatch(text, None).await
    }

    /// Send a message scoped to a highlighted excerpt. When the feature is
    /// disabled by configuration the excerpt is silently dropped.
    pub async fn send_with_selection(&mut self, text: &str, excerpt: &str) -> &ChatState {
        if self.client.config().enable_selected_text {
            self.dispatch(text, Some(excerpt)).await
        } else {
            self.dispatch(text, None).await
        }
    }

    /// Drop the stored thread and start over.
    pub fn reset(&mut self) {
        self.store.clear_thread();
        self.state = self.state.clone().cleared();
    }

    async fn dispatch(&mut self, text: &str, excerpt: Option<&str>) -> &ChatState {
        let text = text.trim();
        if text.is_empty() {
            return &self.state;
        }

        let thread_id = self.state.thread_id.clone();
        let user_message = Message::user(thread_id.clone().unwrap_or_default(), text);
        let user_message_id = user_message.message_id.clone();
        self.state = self.state.clone().submitted(user_message.clone());

        let result = match excerpt {
            Some(excerpt) => {
                self.client
                    .send_selected_text_message(text, excerpt, thread_id.as_deref())
                    .await
            }
            None => self.client.send_message(text, thread_id.as_deref()).await,
        };

        match result {
            Ok(response) => {
                let reply = Message::ai(response.thread_id.clone(), response.answer.clone());
                let sources = if self.client.config().enable_source_citations {
                    response.sources.unwrap_or_default()
                } else {
                    Vec::new()
                };

                self.persist_exchange(&response.thread_id, &user_message, &reply);
                self.state = self
                    .state
                    .clone()
                    .delivered(&user_message_id, reply, response.thread_id, sources)
                    .trimmed(self.client.config().max_history);
            }
            Err(err) => {
                warn!("chat request failed: {err}");
                let notice = Message::system(thread_id.unwrap_or_default(), ERROR_NOTICE);
                self.state = self.state.clone().failed(&user_message_id, notice);
            }
        }

        &self.state
    }

    /// Best-effort persistence of a confirmed exchange. The stored slot is
    /// renamed to the backend-authoritative id first so the message
    /// ownership invariant holds.
    fn persist_exchange(&self, thread_id: &str, user_message: &Message, reply: &Message) {
        if !self.client.config().enable_message_persistence {
            return;
        }
        if !self.store.is_storage_available() {
            debug!("storage unavailable, conversation stays in memory only");
            return;
        }

        match self.store.get_thread() {
            Some(stored) if stored.thread_id == thread_id => {}
            Some(_) => {
                self.store.adopt_thread_id(thread_id);
            }
            None => {
                self.store.create_thread();
                self.store.adopt_thread_id(thread_id);
            }
        }

        let mut user_message = user_message.clone();
        user_message.thread_id = thread_id.to_string();
        user_message.status = DeliveryStatus::Delivered;
        self.store.add_message(user_message);
        self.store.add_message(reply.clone());
    }
}
