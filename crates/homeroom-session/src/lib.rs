mod action;
mod error;
mod handler;
mod types;

pub use action::Action;
pub use error::{SessionError, SessionResult};
pub use handler::{Download, Outcome, SessionHandler};
pub use types::SessionState;
