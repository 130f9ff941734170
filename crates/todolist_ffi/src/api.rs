//! FFI use-case API for the todo list host UI.
//!
//! # Responsibility
//! - Expose one opaque `TodoSession` per rendered view; no global state.
//! - Map core types to plain DTOs with string IDs.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Unknown or malformed task IDs are benign no-ops.

use flutter_rust_bridge::frb;
use todolist_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    EventOutcome, TaskRow, TodoListView, UiEvent, ViewConfig, ViewModel,
};
use uuid::Uuid;

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Exposes core crate version.
#[frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory for rolling log files.
///
/// # FFI contract
/// - Idempotent for the same `level + log_dir`.
/// - Never panics; returns empty string on success and error message on failure.
#[frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// One task row ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoItem {
    /// Stable task ID in string form.
    pub task_id: String,
    pub text: String,
    pub completed: bool,
    /// Accessible label of the toggle control.
    pub toggle_label: String,
    pub delete_label: String,
}

/// Full display state of one view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoSnapshot {
    pub title: String,
    pub placeholder: String,
    pub draft: String,
    pub add_label: String,
    /// Items in insertion order.
    pub items: Vec<TodoItem>,
    /// Present only when `items` is empty.
    pub empty_message: Option<String>,
    pub remaining: u32,
}

/// Opaque handle owning the state of one rendered todo list.
#[frb(opaque)]
pub struct TodoSession {
    view: TodoListView,
}

impl TodoSession {
    /// Creates a session with default copy.
    #[frb(sync)]
    pub fn new() -> Self {
        Self {
            view: TodoListView::new(),
        }
    }

    /// Creates a session from JSON view config.
    ///
    /// Falls back to defaults when `config_json` is malformed.
    #[frb(sync)]
    pub fn with_config_json(config_json: String) -> Self {
        let config = ViewConfig::from_json_str(&config_json).unwrap_or_else(|err| {
            log::warn!("event=session_config module=ffi status=fallback error={err}");
            ViewConfig::default()
        });
        Self {
            view: TodoListView::with_config(config),
        }
    }

    /// Mirrors the text field's full value into the draft.
    #[frb(sync)]
    pub fn set_draft(&mut self, text: String) -> TodoSnapshot {
        self.view.handle(UiEvent::Edit(text));
        self.snapshot()
    }

    /// Commits the draft; `via_enter` only distinguishes the trigger in logs.
    ///
    /// Returns the created item, or `None` when the draft was blank.
    #[frb(sync)]
    pub fn submit(&mut self, via_enter: bool) -> Option<TodoItem> {
        let event = if via_enter {
            UiEvent::Enter
        } else {
            UiEvent::AddClicked
        };
        log::debug!("event=session_submit module=ffi via_enter={via_enter}");
        match self.view.handle(event) {
            EventOutcome::Appended(id) => self
                .view
                .view_model()
                .rows
                .into_iter()
                .find(|row| row.id == id)
                .map(to_todo_item),
            _ => None,
        }
    }

    /// Flips completion; returns `false` when the ID is unknown or malformed.
    #[frb(sync)]
    pub fn toggle(&mut self, task_id: String) -> bool {
        match parse_task_id(&task_id) {
            Some(id) => matches!(self.view.handle(UiEvent::Toggle(id)), EventOutcome::Toggled(_)),
            None => false,
        }
    }

    /// Deletes a task; returns `false` when the ID is unknown or malformed.
    #[frb(sync)]
    pub fn delete(&mut self, task_id: String) -> bool {
        match parse_task_id(&task_id) {
            Some(id) => matches!(self.view.handle(UiEvent::Delete(id)), EventOutcome::Removed(_)),
            None => false,
        }
    }

    #[frb(sync)]
    pub fn snapshot(&self) -> TodoSnapshot {
        to_snapshot(self.view.view_model())
    }
}

impl Default for TodoSession {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_task_id(raw: &str) -> Option<Uuid> {
    match Uuid::parse_str(raw.trim()) {
        Ok(id) => Some(id),
        Err(_) => {
            log::debug!("event=task_id_parse module=ffi status=noop");
            None
        }
    }
}

fn to_todo_item(row: TaskRow) -> TodoItem {
    TodoItem {
        task_id: row.id.to_string(),
        text: row.text,
        completed: row.completed,
        toggle_label: row.toggle_label.to_string(),
        delete_label: row.delete_label.to_string(),
    }
}

fn to_snapshot(view: ViewModel) -> TodoSnapshot {
    TodoSnapshot {
        title: view.title,
        placeholder: view.placeholder,
        draft: view.draft,
        add_label: view.add_label.to_string(),
        items: view.rows.into_iter().map(to_todo_item).collect(),
        empty_message: view.empty_message,
        remaining: u32::try_from(view.remaining).unwrap_or(u32::MAX),
    }
}

#[cfg(test)]
mod tests {
    use super::{core_version, init_logging, ping, TodoSession};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "/tmp/logs".to_string());
        assert!(!error.is_empty());
    }

    #[test]
    fn submit_creates_item_and_clears_draft() {
        let mut session = TodoSession::new();
        let draft_view = session.set_draft("Buy milk".to_string());
        assert_eq!(draft_view.draft, "Buy milk");

        let item = session.submit(true).expect("non-blank draft should submit");
        assert_eq!(item.text, "Buy milk");
        assert!(!item.completed);
        assert_eq!(item.toggle_label, "Mark complete");

        let snapshot = session.snapshot();
        assert_eq!(snapshot.draft, "");
        assert_eq!(snapshot.items, vec![item]);
        assert_eq!(snapshot.empty_message, None);
    }

    #[test]
    fn blank_submit_returns_none_and_keeps_draft() {
        let mut session = TodoSession::new();
        session.set_draft("   ".to_string());

        assert!(session.submit(false).is_none());
        let snapshot = session.snapshot();
        assert_eq!(snapshot.draft, "   ");
        assert!(snapshot.items.is_empty());
        assert_eq!(
            snapshot.empty_message.as_deref(),
            Some("No tasks yet. Add one above!")
        );
    }

    #[test]
    fn toggle_and_delete_accept_only_known_ids() {
        let mut session = TodoSession::new();
        session.set_draft("A".to_string());
        let item = session.submit(false).unwrap();

        assert!(!session.toggle("not-a-uuid".to_string()));
        assert!(session.toggle(item.task_id.clone()));
        assert_eq!(session.snapshot().items[0].toggle_label, "Mark incomplete");
        assert_eq!(session.snapshot().remaining, 0);

        assert!(session.delete(item.task_id.clone()));
        assert!(!session.delete(item.task_id));
        assert!(session.snapshot().items.is_empty());
    }

    #[test]
    fn sessions_are_independent() {
        let mut first = TodoSession::new();
        let second = TodoSession::with_config_json(r#"{"title": "Other"}"#.to_string());
        first.set_draft("only here".to_string());
        first.submit(true);

        assert_eq!(first.snapshot().items.len(), 1);
        assert!(second.snapshot().items.is_empty());
        assert_eq!(second.snapshot().title, "Other");
    }

    #[test]
    fn malformed_config_falls_back_to_defaults() {
        let session = TodoSession::with_config_json("not json".to_string());
        assert_eq!(session.snapshot().title, "Woltbot Todos");
    }
}
