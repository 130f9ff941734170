//! Draft buffer and UI event vocabulary.
//!
//! # Invariants
//! - The buffer stores keystrokes verbatim; normalization happens only on
//!   submission.
//! - `Enter` and `AddClicked` are distinct events with one shared handler.

use crate::model::task::TaskId;

/// Uncommitted text for the next task.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftInput {
    buffer: String,
}

impl DraftInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole buffer, as a host text field reports edits.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.buffer = text.into();
    }

    pub fn push_char(&mut self, ch: char) {
        self.buffer.push(ch);
    }

    /// Removes the last character, if any.
    pub fn pop_char(&mut self) -> Option<char> {
        self.buffer.pop()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }
}

/// One discrete user action delivered by a host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// Text field reported its full new value.
    Edit(String),
    /// Single printable keystroke.
    Key(char),
    Backspace,
    /// Submission via the Enter key while the field has focus.
    Enter,
    /// Submission via the add control.
    AddClicked,
    Toggle(TaskId),
    Delete(TaskId),
}
