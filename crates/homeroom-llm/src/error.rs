use thiserror::Error;

/// Unified error type for completion requests.
///
/// Classification drives the retry policy: only `TransientUnavailable` and
/// `Network` are worth another attempt, everything else surfaces at once.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("authentication error: {0}")]
    Auth(String),

    #[error("service temporarily unavailable: {message}")]
    TransientUnavailable {
        /// HTTP status when the server answered; `None` for a timeout.
        status: Option<u16>,
        message: String,
    },

    #[error("network error: {0}")]
    Network(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("api error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("config error: {0}")]
    Config(String),
}

impl ClientError {
    /// Whether a fresh attempt may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ClientError::TransientUnavailable { .. } | ClientError::Network(_)
        )
    }

    pub(crate) fn timeout(message: impl Into<String>) -> Self {
        ClientError::TransientUnavailable {
            status: None,
            message: message.into(),
        }
    }

    pub(crate) fn unavailable(status: u16, message: impl Into<String>) -> Self {
        ClientError::TransientUnavailable {
            status: Some(status),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_transient_and_network_are_retryable() {
        assert!(ClientError::unavailable(503, "overloaded").is_retryable());
        assert!(ClientError::timeout("attempt timed out").is_retryable());
        assert!(ClientError::Network("connection refused".into()).is_retryable());

        assert!(!ClientError::Auth("bad key".into()).is_retryable());
        assert!(!ClientError::Parse("no candidates".into()).is_retryable());
        assert!(!ClientError::Api {
            status: 400,
            message: "bad request".into()
        }
        .is_retryable());
    }
}
