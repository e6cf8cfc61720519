pub mod chat;
pub mod error;
pub mod transcript;
pub mod types;

// Re-export core types
pub use chat::{CompletionReply, CompletionRequest};
pub use error::{CoreError, Result};
pub use transcript::Transcript;
pub use types::{Message, MessageId, Role};
