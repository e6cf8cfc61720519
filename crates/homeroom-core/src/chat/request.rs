use crate::types::Message;

/// One completion request: the system instruction carried separately from
/// the conversational turns, matching the endpoint's request shape.
///
/// The instruction is rebuilt from the active category on every call, so a
/// request never carries a stale persona.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub model: String,
    pub system_instruction: String,
    pub turns: Vec<Message>,
}

impl CompletionRequest {
    /// Create a new completion request
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            system_instruction: String::new(),
            turns: Vec::new(),
        }
    }

    /// Set the system instruction
    pub fn with_system_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.system_instruction = instruction.into();
        self
    }

    /// Add a conversational turn; system turns are ignored here since the
    /// instruction travels in its own field.
    pub fn with_turn(mut self, message: Message) -> Self {
        if !message.is_system() {
            self.turns.push(message);
        }
        self
    }

    /// Add multiple turns
    pub fn with_turns(mut self, messages: impl IntoIterator<Item = Message>) -> Self {
        for message in messages {
            if !message.is_system() {
                self.turns.push(message);
            }
        }
        self
    }
}
