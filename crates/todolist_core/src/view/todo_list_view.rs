//! Single-owner todo list view.
//!
//! # Responsibility
//! - Route `UiEvent`s to the draft buffer or the task store.
//! - Run every event to completion before the next one is accepted.
//!
//! # Invariants
//! - `submit` is the only path from draft to store.
//! - A rejected submission leaves both the store and the draft untouched.

use crate::input::draft::{DraftInput, UiEvent};
use crate::model::task::{TaskId, TaskValidationError};
use crate::store::task_store::TaskStore;
use crate::view::config::ViewConfig;
use crate::view::render::{build_view_model, ViewModel};
use log::debug;

/// Result of applying one `UiEvent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    /// Draft buffer changed.
    DraftChanged,
    /// Submission created a task.
    Appended(TaskId),
    /// Submission was blank; nothing changed.
    Rejected,
    Toggled(TaskId),
    Removed(TaskId),
    /// Event had no effect (unknown ID, backspace on empty draft).
    Ignored,
}

/// Owns the state of one todo list view for its whole lifetime.
#[derive(Debug, Default)]
pub struct TodoListView {
    store: TaskStore,
    draft: DraftInput,
    config: ViewConfig,
}

impl TodoListView {
    /// Creates an empty view with default copy.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ViewConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Applies one event synchronously.
    pub fn handle(&mut self, event: UiEvent) -> EventOutcome {
        match event {
            UiEvent::Edit(text) => {
                self.draft.set_text(text);
                EventOutcome::DraftChanged
            }
            UiEvent::Key(ch) => {
                self.draft.push_char(ch);
                EventOutcome::DraftChanged
            }
            UiEvent::Backspace => match self.draft.pop_char() {
                Some(_) => EventOutcome::DraftChanged,
                None => EventOutcome::Ignored,
            },
            UiEvent::Enter | UiEvent::AddClicked => match self.submit() {
                Ok(id) => EventOutcome::Appended(id),
                Err(_) => EventOutcome::Rejected,
            },
            UiEvent::Toggle(id) => {
                if self.store.toggle(id) {
                    EventOutcome::Toggled(id)
                } else {
                    EventOutcome::Ignored
                }
            }
            UiEvent::Delete(id) => match self.store.remove(id) {
                Some(_) => EventOutcome::Removed(id),
                None => EventOutcome::Ignored,
            },
        }
    }

    /// Commits the draft as a new task.
    ///
    /// # Errors
    /// - `EmptyText` when the draft is blank; the draft is retained.
    pub fn submit(&mut self) -> Result<TaskId, TaskValidationError> {
        let id = self.store.append(self.draft.as_str())?.id;
        self.draft.clear();
        debug!("event=draft_submit module=view status=ok task_id={id}");
        Ok(id)
    }

    /// Re-derives the presentation state.
    pub fn view_model(&self) -> ViewModel {
        build_view_model(&self.store, &self.draft, &self.config)
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    pub fn draft(&self) -> &DraftInput {
        &self.draft
    }

    pub fn config(&self) -> &ViewConfig {
        &self.config
    }
}
