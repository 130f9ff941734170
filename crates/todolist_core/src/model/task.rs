//! Task domain model.
//!
//! # Responsibility
//! - Define the record for one user-entered todo item.
//! - Validate text and identity at construction and deserialization.
//!
//! # Invariants
//! - `id` is stable and never reused for another task.
//! - `text` is stored untrimmed but is never empty or whitespace-only.
//! - `text` is immutable after creation; only `completed` changes.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a task within a session.
pub type TaskId = Uuid;

/// Validation failures for task construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Text is empty after trimming surrounding whitespace.
    EmptyText,
    /// Caller-provided ID is the nil UUID.
    NilId,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyText => write!(f, "task text must not be empty or whitespace-only"),
            Self::NilId => write!(f, "task id must not be the nil uuid"),
        }
    }
}

impl Error for TaskValidationError {}

/// One todo item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TaskRecord")]
pub struct Task {
    pub id: TaskId,
    text: String,
    pub completed: bool,
}

/// Unvalidated wire shape used only as the deserialization entry point.
#[derive(Deserialize)]
struct TaskRecord {
    id: TaskId,
    text: String,
    #[serde(default)]
    completed: bool,
}

impl TryFrom<TaskRecord> for Task {
    type Error = TaskValidationError;

    fn try_from(record: TaskRecord) -> Result<Self, Self::Error> {
        let mut task = Task::with_id(record.id, record.text)?;
        task.completed = record.completed;
        Ok(task)
    }
}

impl Task {
    /// Creates an incomplete task with a freshly generated ID.
    ///
    /// # Errors
    /// - `EmptyText` when `text` is blank.
    pub fn new(text: impl Into<String>) -> Result<Self, TaskValidationError> {
        Self::with_id(Uuid::new_v4(), text)
    }

    /// Creates an incomplete task with a caller-provided ID.
    ///
    /// # Errors
    /// - `NilId` when `id` is nil.
    /// - `EmptyText` when `text` is blank.
    pub fn with_id(id: TaskId, text: impl Into<String>) -> Result<Self, TaskValidationError> {
        if id.is_nil() {
            return Err(TaskValidationError::NilId);
        }
        let text = text.into();
        if is_blank(&text) {
            return Err(TaskValidationError::EmptyText);
        }
        Ok(Self {
            id,
            text,
            completed: false,
        })
    }

    /// Display text exactly as the user entered it.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Flips the completion flag.
    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}

/// Returns whether `text` would be rejected as task text.
///
/// The trimmed set matches ECMAScript `String.prototype.trim`: Unicode
/// whitespace plus U+FEFF, but not U+0085.
pub fn is_blank(text: &str) -> bool {
    text.trim_matches(is_trimmed_char).is_empty()
}

fn is_trimmed_char(ch: char) -> bool {
    (ch.is_whitespace() && ch != '\u{85}') || ch == '\u{feff}'
}
