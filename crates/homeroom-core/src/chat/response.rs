/// Successful completion result: the assistant's next utterance.
#[derive(Debug, Clone)]
pub struct CompletionReply {
    pub model: String,
    text: String,
}

impl CompletionReply {
    /// Create a new reply; the client guarantees the text is non-empty.
    pub fn new(model: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            text: text.into(),
        }
    }

    /// The reply text
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }
}
