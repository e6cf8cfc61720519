use chrono::NaiveDate;

use crate::error::{CoreError, Result};
use crate::types::{Message, Role};

/// Ordered, append-only conversation log for one mentoring session.
///
/// Invariant: exactly one system message, always at index 0. The system
/// turn is replaced wholesale when the category changes; user/assistant
/// turns are only ever appended, never mutated or reordered.
#[derive(Debug, Clone)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    /// Create a transcript seeded with a system instruction.
    pub fn new(system_text: impl Into<String>) -> Self {
        Self {
            messages: vec![Message::system(system_text)],
        }
    }

    /// Append a user or assistant turn.
    ///
    /// System turns go through [`Transcript::set_system`]; appending a
    /// second one fails with `SystemAlreadyPresent`.
    pub fn append(&mut self, message: Message) -> Result<()> {
        if message.is_system() {
            return Err(CoreError::SystemAlreadyPresent);
        }
        self.messages.push(message);
        Ok(())
    }

    /// Replace the system instruction at index 0 with a fresh one.
    pub fn set_system(&mut self, system_text: impl Into<String>) {
        self.messages[0] = Message::system(system_text);
    }

    /// Drop all turns except a fresh system message with the given text.
    pub fn reset(&mut self, system_text: impl Into<String>) {
        self.messages.clear();
        self.messages.push(Message::system(system_text));
    }

    /// The system instruction currently in force.
    pub fn system_text(&self) -> &str {
        &self.messages[0].content
    }

    /// All turns, system included, in insertion order.
    pub fn all(&self) -> &[Message] {
        &self.messages
    }

    /// Non-system turns in insertion order, for rendering and for the
    /// completion request. Restartable and side-effect free.
    pub fn visible(&self) -> impl Iterator<Item = &Message> {
        self.messages.iter().filter(|m| !m.is_system())
    }

    /// Number of non-system turns.
    pub fn visible_len(&self) -> usize {
        self.visible().count()
    }

    pub fn is_empty(&self) -> bool {
        self.visible_len() == 0
    }

    /// Serialize the visible turns as `[<label>] <content>` lines, the
    /// counseling-journal format students download.
    pub fn export(&self) -> String {
        let mut out = String::new();
        for message in self.visible() {
            out.push('[');
            out.push_str(message.role.export_label());
            out.push_str("] ");
            out.push_str(&message.content);
            out.push('\n');
        }
        out
    }

    /// Parse an exported journal back into ordered (role, content) pairs.
    ///
    /// A line that does not open a new `[label] ` entry is treated as a
    /// continuation of the previous turn's content.
    pub fn parse_export(text: &str) -> Result<Vec<(Role, String)>> {
        let mut turns: Vec<(Role, String)> = Vec::new();
        for (idx, line) in text.lines().enumerate() {
            match parse_entry_line(line) {
                Some((label, rest)) => {
                    let role = Role::from_label(label)?;
                    turns.push((role, rest.to_string()));
                }
                None => match turns.last_mut() {
                    Some((_, content)) => {
                        content.push('\n');
                        content.push_str(line);
                    }
                    None => {
                        return Err(CoreError::MalformedLine {
                            line_no: idx + 1,
                            line: line.to_string(),
                        })
                    }
                },
            }
        }
        Ok(turns)
    }

    /// Journal file name for a given date, e.g. `창업멘토링_20260826.txt`.
    pub fn export_file_name(date: NaiveDate) -> String {
        format!("창업멘토링_{}.txt", date.format("%Y%m%d"))
    }
}

fn parse_entry_line(line: &str) -> Option<(&str, &str)> {
    let rest = line.strip_prefix('[')?;
    let (label, rest) = rest.split_once("] ")?;
    Some((label, rest))
}
