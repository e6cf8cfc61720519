use chrono::{DateTime, Utc};

use homeroom_core::Transcript;
use homeroom_prompt::{persona_prompt, Category};

/// State owned by one interactive mentoring session.
///
/// Created when the session starts, dropped when it ends; never shared
/// across sessions and never persisted.
#[derive(Debug, Clone)]
pub struct SessionState {
    /// Conversation log, system instruction at index 0
    pub transcript: Transcript,
    /// Active mentoring topic
    pub category: Category,
    /// Whether the first idea turn has been submitted and acknowledged;
    /// free-form chat is gated on this.
    pub idea_selected: bool,
    /// Session creation time
    pub created_at: DateTime<Utc>,
    /// Last activity timestamp
    pub last_activity: DateTime<Utc>,
}

impl SessionState {
    /// Create a fresh session for a topic.
    pub fn new(category: Category) -> Self {
        let now = Utc::now();
        Self {
            transcript: Transcript::new(persona_prompt(category)),
            category,
            idea_selected: false,
            created_at: now,
            last_activity: now,
        }
    }

    /// Update last activity timestamp
    pub fn touch(&mut self) {
        self.last_activity = Utc::now();
    }

    /// Switch topics: the system instruction is regenerated wholesale, the
    /// student's turns are preserved.
    pub fn set_category(&mut self, category: Category) {
        self.category = category;
        self.transcript.set_system(persona_prompt(category));
    }

    /// Wipe the conversation and start over on the current topic.
    pub fn clear(&mut self) {
        self.transcript.reset(persona_prompt(self.category));
        self.idea_selected = false;
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(Category::default())
    }
}
