use std::time::Duration;

/// Default completion endpoint root.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default model when the config does not name one.
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Per-attempt request bound; exceeding it counts as a transient failure.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Environment variable consulted when no config file provides a key.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Provider configuration
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Base URL for the API
    pub base_url: String,
    /// API key sent as the `key` query parameter
    pub api_key: String,
    /// Model to request completions from
    pub model: String,
    /// Per-attempt request timeout
    pub timeout: Duration,
}

impl ProviderConfig {
    /// Create a config with defaults for everything but the key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Read the API key from the environment, if set and non-empty.
    pub fn from_env() -> Option<Self> {
        std::env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .map(Self::new)
    }

    /// Set the model
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set a custom base URL (for compatible endpoints)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the per-attempt timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
