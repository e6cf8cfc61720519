use thiserror::Error;

use homeroom_core::CoreError;
use homeroom_llm::ClientError;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error(transparent)]
    Transcript(#[from] CoreError),

    #[error("no idea category selected yet")]
    IdeaNotSelected,

    #[error("an idea category was already selected")]
    IdeaAlreadySelected,
}

pub type SessionResult<T> = Result<T, SessionError>;
