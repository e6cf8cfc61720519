use thiserror::Error;

/// Unified error type for core transcript operations
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("invalid role: {0}")]
    InvalidRole(String),

    #[error("transcript already holds a system message")]
    SystemAlreadyPresent,

    #[error("malformed transcript line {line_no}: {line}")]
    MalformedLine { line_no: usize, line: String },
}

pub type Result<T> = std::result::Result<T, CoreError>;
