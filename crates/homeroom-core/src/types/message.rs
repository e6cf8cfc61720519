use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

use crate::error::CoreError;

/// Unique message identifier
pub type MessageId = String;

/// Message role in the conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

impl Role {
    /// Korean label used when a transcript is exported (선생님/학생).
    /// System turns never appear in an export.
    pub fn export_label(&self) -> &'static str {
        match self {
            Role::System => "시스템",
            Role::User => "학생",
            Role::Assistant => "선생님",
        }
    }

    /// Reverse of [`Role::export_label`], plus the wire-level names.
    pub fn from_label(label: &str) -> crate::Result<Self> {
        match label {
            "학생" | "user" => Ok(Role::User),
            "선생님" | "assistant" => Ok(Role::Assistant),
            "시스템" | "system" => Ok(Role::System),
            other => Err(CoreError::InvalidRole(other.to_string())),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::System => write!(f, "system"),
            Role::User => write!(f, "user"),
            Role::Assistant => write!(f, "assistant"),
        }
    }
}

impl FromStr for Role {
    type Err = CoreError;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s {
            "system" => Ok(Role::System),
            "user" => Ok(Role::User),
            "assistant" => Ok(Role::Assistant),
            other => Err(CoreError::InvalidRole(other.to_string())),
        }
    }
}

/// One turn of the mentoring conversation.
/// Immutable after creation; the transcript only ever appends or clears.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub role: Role,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Message {
    fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role,
            content: content.into(),
            created_at: Utc::now(),
        }
    }

    /// Create a system message
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    /// Create a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    /// Create an assistant message
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }

    pub fn is_system(&self) -> bool {
        self.role == Role::System
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trips_through_str() {
        for role in [Role::System, Role::User, Role::Assistant] {
            assert_eq!(role.to_string().parse::<Role>().unwrap(), role);
        }
    }

    #[test]
    fn unknown_role_is_rejected() {
        let err = "tool".parse::<Role>().unwrap_err();
        assert!(matches!(err, CoreError::InvalidRole(ref r) if r == "tool"));
    }

    #[test]
    fn export_labels_round_trip() {
        assert_eq!(Role::from_label("선생님").unwrap(), Role::Assistant);
        assert_eq!(Role::from_label("학생").unwrap(), Role::User);
    }
}
