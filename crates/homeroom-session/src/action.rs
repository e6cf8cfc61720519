use homeroom_prompt::{Category, IdeaKind};

/// One discrete user interaction, dispatched by the UI layer.
#[derive(Debug, Clone)]
pub enum Action {
    /// Pick or switch the mentoring topic
    SelectCategory(Category),
    /// Submit the first idea pick; opens free-form chat once acknowledged
    SubmitIdea(IdeaKind),
    /// Send a free-form chat message; only valid after `SubmitIdea`
    SubmitChat(String),
    /// Export the counseling journal
    SaveLog,
    /// Wipe the conversation and start over
    ClearLog,
}
