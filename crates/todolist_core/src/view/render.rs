//! Pure presentation derivation.
//!
//! `build_view_model` is the only bridge from state to display; hosts render
//! the returned `ViewModel` and hold no state of their own.

use crate::input::draft::DraftInput;
use crate::model::task::{Task, TaskId};
use crate::store::task_store::TaskStore;
use crate::view::config::ViewConfig;
use serde::Serialize;

const MARK_COMPLETE_LABEL: &str = "Mark complete";
const MARK_INCOMPLETE_LABEL: &str = "Mark incomplete";
const DELETE_LABEL: &str = "Delete todo";
const ADD_LABEL: &str = "Add todo";

/// Display-ready state of one task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskRow {
    pub id: TaskId,
    pub text: String,
    pub completed: bool,
    /// Accessible label of the toggle control; describes the action.
    pub toggle_label: &'static str,
    pub delete_label: &'static str,
}

/// Display-ready state of the whole list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewModel {
    pub title: String,
    pub placeholder: String,
    pub draft: String,
    pub add_label: &'static str,
    /// Rows in insertion order.
    pub rows: Vec<TaskRow>,
    /// `Some` exactly when there are no rows.
    pub empty_message: Option<String>,
    pub remaining: usize,
}

/// Derives the view model from current state.
pub fn build_view_model(store: &TaskStore, draft: &DraftInput, config: &ViewConfig) -> ViewModel {
    let rows = store.iter().map(task_row).collect::<Vec<_>>();
    let empty_message = rows.is_empty().then(|| config.empty_message.clone());

    ViewModel {
        title: config.title.clone(),
        placeholder: config.placeholder.clone(),
        draft: draft.as_str().to_string(),
        add_label: ADD_LABEL,
        rows,
        empty_message,
        remaining: store.remaining_count(),
    }
}

fn task_row(task: &Task) -> TaskRow {
    TaskRow {
        id: task.id,
        text: task.text().to_string(),
        completed: task.completed,
        toggle_label: if task.completed {
            MARK_INCOMPLETE_LABEL
        } else {
            MARK_COMPLETE_LABEL
        },
        delete_label: DELETE_LABEL,
    }
}

/// Plain-text rendering for terminal hosts.
///
/// Layout: title, input line (draft or placeholder), then either the empty
/// message or 1-based rows with `[x]`/`[ ]` markers and a remaining count.
pub fn render_text(view: &ViewModel) -> String {
    let mut lines = Vec::with_capacity(view.rows.len() + 3);
    lines.push(view.title.clone());

    if view.draft.is_empty() {
        lines.push(format!("> ({})", view.placeholder));
    } else {
        lines.push(format!("> {}", view.draft));
    }

    match &view.empty_message {
        Some(message) => lines.push(format!("  {message}")),
        None => {
            for (index, row) in view.rows.iter().enumerate() {
                let marker = if row.completed { "[x]" } else { "[ ]" };
                lines.push(format!("{:>3}. {marker} {}", index + 1, single_line(&row.text)));
            }
            lines.push(format!("  {} remaining", view.remaining));
        }
    }

    let mut rendered = lines.join("\n");
    rendered.push('\n');
    rendered
}

fn single_line(text: &str) -> String {
    text.replace(['\n', '\r'], " ")
}
