//! Environment-driven client configuration.
//!
//! Every knob has a default; `CHAT_*` variables override them. Invalid
//! values are clamped with a warning rather than rejected, so a bad
//! deployment variable can degrade the experience but never break it.

use std::time::Duration;

use tracing::warn;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30_000;
const DEFAULT_MAX_RETRY_ATTEMPTS: u32 = 3;
const DEFAULT_RETRY_DELAY_MS: u64 = 1_000;
const DEFAULT_MAX_HISTORY: usize = 50;
const DEFAULT_THREAD_TIMEOUT_MS: u64 = 86_400_000;
const DEFAULT_MIN_SELECTED_TEXT_LEN: usize = 10;
const DEFAULT_MAX_SELECTED_TEXT_LEN: usize = 1_000;

#[derive(Debug, Clone)]
pub struct ChatConfig {
    pub base_url: String,
    pub request_timeout: Duration,
    /// Total attempts per request, the first one included.
    pub max_retry_attempts: u32,
    pub retry_base_delay: Duration,
    /// Rendered conversation length cap.
    pub max_history: usize,
    /// Idle window after which a stored thread is discarded.
    pub thread_timeout: Duration,
    pub enable_typing_indicator: bool,
    pub enable_message_persistence: bool,
    pub enable_selected_text: bool,
    pub enable_source_citations: bool,
    pub min_selected_text_len: usize,
    pub max_selected_text_len: usize,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: Duration::from_millis(DEFAULT_REQUEST_TIMEOUT_MS),
            max_retry_attempts: DEFAULT_MAX_RETRY_ATTEMPTS,
            retry_base_delay: Duration::from_millis(DEFAULT_RETRY_DELAY_MS),
            max_history: DEFAULT_MAX_HISTORY,
            thread_timeout: Duration::from_millis(DEFAULT_THREAD_TIMEOUT_MS),
            enable_typing_indicator: true,
            enable_message_persistence: true,
            enable_selected_text: true,
            enable_source_citations: true,
            min_selected_text_len: DEFAULT_MIN_SELECTED_TEXT_LEN,
            max_selected_text_len: DEFAULT_MAX_SELECTED_TEXT_LEN,
        }
    }
}

impl ChatConfig {
    /// Load configuration from `CHAT_*` environment variables, falling back
    /// to defaults, then clamp inconsistent values.
    pub fn from_env() -> Self {
        let mut config = Self {
            base_url: env_string("CHAT_API_BASE_URL", DEFAULT_BASE_URL),
            request_timeout: Duration::from_millis(env_u64(
                "CHAT_REQUEST_TIMEOUT_MS",
                DEFAULT_REQUEST_TIMEOUT_MS,
            )),
            max_retry_attempts: env_u64(
                "CHAT_MAX_RETRY_ATTEMPTS",
                u64::from(DEFAULT_MAX_RETRY_ATTEMPTS),
            ) as u32,
            retry_base_delay: Duration::from_millis(env_u64(
                "CHAT_RETRY_DELAY_MS",
                DEFAULT_RETRY_DELAY_MS,
            )),
            max_history: env_u64("CHAT_MAX_HISTORY", DEFAULT_MAX_HISTORY as u64) as usize,
            thread_timeout: Duration::from_millis(env_u64(
                "CHAT_THREAD_TIMEOUT_MS",
                DEFAULT_THREAD_TIMEOUT_MS,
            )),
            enable_typing_indicator: env_flag("CHAT_ENABLE_TYPING_INDICATOR", true),
            enable_message_persistence: env_flag("CHAT_ENABLE_MESSAGE_PERSISTENCE", true),
            enable_selected_text: env_flag("CHAT_ENABLE_SELECTED_TEXT", true),
            enable_source_citations: env_flag("CHAT_ENABLE_SOURCE_CITATIONS", true),
            min_selected_text_len: env_u64(
                "CHAT_MIN_SELECTED_TEXT_LENGTH",
                DEFAULT_MIN_SELECTED_TEXT_LEN as u64,
            ) as usize,
            max_selected_text_len: env_u64(
                "CHAT_MAX_SELECTED_TEXT_LENGTH",
                DEFAULT_MAX_SELECTED_TEXT_LEN as u64,
            ) as usize,
        };
        config.clamp();
        config
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_max_retry_attempts(mut self, attempts: u32) -> Self {
        self.max_retry_attempts = attempts;
        self
    }

    pub fn with_retry_base_delay(mut self, delay: Duration) -> Self {
        self.retry_base_delay = delay;
        self
    }

    fn clamp(&mut self) {
        if self.max_history == 0 {
            warn!("CHAT_MAX_HISTORY must be positive, using default {DEFAULT_MAX_HISTORY}");
            self.max_history = DEFAULT_MAX_HISTORY;
        }
        if self.max_retry_attempts == 0 {
            warn!("CHAT_MAX_RETRY_ATTEMPTS must be positive, using 1");
            self.max_retry_attempts = 1;
        }
        if self.max_selected_text_len < self.min_selected_text_len {
            warn!(
                "CHAT_MAX_SELECTED_TEXT_LENGTH below the minimum, widening to {}",
                self.min_selected_text_len * 100
            );
            self.max_selected_text_len = self.min_selected_text_len * 100;
        }
    }
}

fn env_string(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn env_u64(key: &str, default: u64) -> u64 {
    match std::env::var(key) {
        Ok(value) => value.parse().unwrap_or_else(|_| {
            warn!("{key}={value} is not a number, using default {default}");
            default
        }),
        Err(_) => default,
    }
}

fn env_flag(key: &str, default: bool) -> bool {
    match std::env::var(key).as_deref() {
        Ok("true") | Ok("1") => true,
        Ok("false") | Ok("0") => false,
        Ok(other) => {
            warn!("{key}={other} is not a boolean, using default {default}");
            default
        }
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_documented_contract() {
        let config = ChatConfig::default();
        assert_eq!(config.request_timeout, Duration::from_millis(30_000));
        assert_eq!(config.max_retry_attempts, 3);
        assert_eq!(config.retry_base_delay, Duration::from_millis(1_000));
        assert_eq!(config.max_history, 50);
        assert_eq!(config.thread_timeout, Duration::from_millis(86_400_000));
        assert_eq!(config.min_selected_text_len, 10);
        assert_eq!(config.max_selected_text_len, 1_000);
        assert!(config.enable_message_persistence);
    }

    #[test]
    fn clamp_repairs_inconsistent_values() {
        let mut config = ChatConfig {
            max_history: 0,
            max_retry_attempts: 0,
            min_selected_text_len: 20,
            max_selected_text_len: 5,
            ..ChatConfig::default()
        };
        config.clamp();

        assert_eq!(config.max_history, DEFAULT_MAX_HISTORY);
        assert_eq!(config.max_retry_attempts, 1);
        assert_eq!(config.max_selected_text_len, 2_000);
    }

    #[test]
    fn env_overrides_apply() {
        std::env::set_var("CHAT_API_BASE_URL", "https://books.example.com");
        std::env::set_var("CHAT_MAX_RETRY_ATTEMPTS", "5");
        std::env::set_var("CHAT_ENABLE_SOURCE_CITATIONS", "false");

        let config = ChatConfig::from_env();
        assert_eq!(config.base_url, "https://books.example.com");
        assert_eq!(config.max_retry_attempts, 5);
        assert!(!config.enable_source_citations);

        std::env::remove_var("CHAT_API_BASE_URL");
        std::env::remove_var("CHAT_MAX_RETRY_ATTEMPTS");
        std::env::remove_var("CHAT_ENABLE_SOURCE_CITATIONS");
    }
}
