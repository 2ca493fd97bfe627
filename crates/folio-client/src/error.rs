use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChatError {
    /// No response within the configured window.
    #[error("request timeout")]
    Timeout,

    /// The backend answered with a non-success status.
    #[error("HTTP {status}: {message}")]
    Http { status: StatusCode, message: String },

    /// Network unreachable, connection reset, and friends.
    #[error("transport error: {0}")]
    Transport(String),

    /// A 2xx response whose body did not parse as a chat response.
    #[error("invalid response payload: {0}")]
    InvalidPayload(String),

    /// Selected-text excerpt outside the configured length bounds.
    #[error("selected text length {len} outside bounds {min}..={max}")]
    SelectionLength { len: usize, min: usize, max: usize },
}

impl ChatError {
    /// Whether the failure is judged safe to retry under backoff.
    ///
    /// Timeouts and transport failures always retry; HTTP failures retry
    /// only on statuses signalling a transient server-side condition.
    pub fn is_retryable(&self) -> bool {
        match self {
            ChatError::Timeout | ChatError::Transport(_) => true,
            ChatError::Http { status, .. } => is_retryable_status(*status),
            ChatError::InvalidPayload(_) | ChatError::SelectionLength { .. } => false,
        }
    }
}

fn is_retryable_status(status: StatusCode) -> bool {
    matches!(
        status,
        StatusCode::REQUEST_TIMEOUT
            | StatusCode::TOO_MANY_REQUESTS
            | StatusCode::INTERNAL_SERVER_ERROR
            | StatusCode::BAD_GATEWAY
            | StatusCode::SERVICE_UNAVAILABLE
            | StatusCode::GATEWAY_TIMEOUT
    )
}

pub type Result<T> = std::result::Result<T, ChatError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn http(status: StatusCode) -> ChatError {
        ChatError::Http {
            status,
            message: String::new(),
        }
    }

    #[test]
    fn timeouts_and_transport_failures_retry() {
        assert!(ChatError::Timeout.is_retryable());
        assert!(ChatError::Transport("connection reset".into()).is_retryable());
    }

    #[test]
    fn server_class_statuses_retry_client_errors_do_not() {
        assert!(http(StatusCode::INTERNAL_SERVER_ERROR).is_retryable());
        assert!(http(StatusCode::SERVICE_UNAVAILABLE).is_retryable());
        assert!(http(StatusCode::TOO_MANY_REQUESTS).is_retryable());

        assert!(!http(StatusCode::BAD_REQUEST).is_retryable());
        assert!(!http(StatusCode::NOT_FOUND).is_retryable());
        assert!(!http(StatusCode::UNAUTHORIZED).is_retryable());
    }

    #[test]
    fn payload_and_validation_failures_never_retry() {
        assert!(!ChatError::InvalidPayload("truncated".into()).is_retryable());
        assert!(!ChatError::SelectionLength {
            len: 3,
            min: 10,
            max: 1000
        }
        .is_retryable());
    }
}
