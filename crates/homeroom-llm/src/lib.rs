pub mod client;
pub mod config;
pub mod error;
pub mod transport;
pub mod wire;

// Re-export core types
pub use client::{backoff_delay, ResilientClient, MAX_ATTEMPTS};
pub use config::ProviderConfig;
pub use error::{ClientError, Result};
pub use transport::{CompletionTransport, HttpTransport};
