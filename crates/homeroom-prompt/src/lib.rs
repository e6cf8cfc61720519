mod category;
mod idea;
mod persona;
mod reward;

pub use category::Category;
pub use idea::IdeaKind;
pub use persona::persona_prompt;
pub use reward::{is_praise, PRAISE_KEYWORDS};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PromptError {
    #[error("unknown category: {0}")]
    UnknownCategory(String),
}

pub type PromptResult<T> = Result<T, PromptError>;
