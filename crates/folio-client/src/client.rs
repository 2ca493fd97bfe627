use folio_types::{ChatRequest, ChatResponse, ErrorResponse, SelectedTextChatRequest};
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::Serialize;
use tokio::time::sleep;
use tracing::{debug, warn};

use crate::config::ChatConfig;
use crate::error::{ChatError, Result};

/// Client for the chat backend's REST endpoints.
///
/// Construct one at application start and share it by reference. It is
/// stateless between calls apart from the connection pool, so concurrent
/// use is safe; keeping one request in flight per input widget is a UI
/// policy, not enforced here.
pub struct ChatApiClient {
    http: reqwest::Client,
    config: ChatConfig,
}

impl ChatApiClient {
    pub fn new(config: ChatConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.request_timeout)
            .build()
            .map_err(|err| ChatError::Transport(err.to_string()))?;

        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ChatConfig {
        &self.config
    }

    /// Send a plain chat message.
    ///
    /// `thread_id` is `None` for a brand-new conversation; the backend
    /// mints the id and returns it in the response.
    pub async fn send_message(
        &self,
        message: &str,
        thread_id: Option<&str>,
    ) -> Result<ChatResponse> {
        let url = format!("{}/api/v1/chat", self.config.base_url);
        let mut request = ChatRequest::new(message);
        if let Some(thread_id) = thread_id {
            request = request.with_thread_id(thread_id);
        }
        self.make_request(&url, &request).await
    }

    /// Send a chat message scoped to a highlighted excerpt.
    ///
    /// An empty excerpt falls back to the plain endpoint; an excerpt
    /// outside the configured length bounds fails fast.
    pub async fn send_selected_text_message(
        &self,
        message: &str,
        selected_text: &str,
        thread_id: Option<&str>,
    ) -> Result<ChatResponse> {
        if selected_text.is_empty() {
            return self.send_message(message, thread_id).await;
        }

        let len = selected_text.chars().count();
        if len < self.config.min_selected_text_len || len > self.config.max_selected_text_len {
            return Err(ChatError::SelectionLength {
                len,
                min: self.config.min_selected_text_len,
                max: self.config.max_selected_text_len,
            });
        }

        let url = format!("{}/api/v1/chat/selected-text", self.config.base_url);
        let mut request = SelectedTextChatRequest::new(message, selected_text);
        if let Some(thread_id) = thread_id {
            request = request.with_thread_id(thread_id);
        }
        self.make_request(&url, &request).await
    }

    /// Reachability probe against the health endpoint.
    ///
    /// Every failure collapses to `false`; this never errors.
    pub async fn health_check(&self) -> bool {
        let url = format!("{}/api/v1/health", self.config.base_url);
        match self.http.get(&url).send().await {
            Ok(response) => response.status().is_success(),
            Err(err) => {
                debug!("health check failed: {err}");
                false
            }
        }
    }

    /// Dispatch with bounded retry: delay before attempt n+1 is
    /// `2^n * retry_base_delay`, up to `max_retry_attempts` total attempts.
    async fn make_request<B: Serialize>(&self, url: &str, body: &B) -> Result<ChatResponse> {
        let mut attempt: u32 = 1;
        loop {
            match self.send_once(url, body).await {
                Ok(response) => return Ok(response),
                Err(err) => {
                    if err.is_retryable() && attempt < self.config.max_retry_attempts {
                        let delay = self
                            .config
                            .retry_base_delay
                            .saturating_mul(2u32.saturating_pow(attempt));
                        warn!(attempt, ?delay, "chat request failed, retrying: {err}");
                        sleep(delay).await;
                        attempt += 1;
                        continue;
                    }
                    return Err(err);
                }
            }
        }
    }

    async fn send_once<B: Serialize>(&self, url: &str, body: &B) -> Result<ChatResponse> {
        let response = self.http.post(url).json(body).send().await.map_err(|err| {
            if err.is_timeout() {
                ChatError::Timeout
            } else {
                ChatError::Transport(err.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            // Prefer the backend's error envelope when it sent one.
            let message = match response.json::<ErrorResponse>().await {
                Ok(envelope) => envelope.message,
                Err(_) => status
                    .canonical_reason()
                    .unwrap_or("unknown status")
                    .to_string(),
            };
            return Err(ChatError::Http { status, message });
        }

        response.json::<ChatResponse>().await.map_err(|err| {
            if err.is_timeout() {
                ChatError::Timeout
            } else {
                ChatError::InvalidPayload(err.to_string())
            }
        })
    }
}
