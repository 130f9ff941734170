//! Core state and presentation logic for the todo list widget.
//! Hosts (FFI, terminal) forward user events here and render the result.

pub mod input;
pub mod logging;
pub mod model;
pub mod store;
pub mod view;

pub use input::draft::{DraftInput, UiEvent};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::task::{Task, TaskId, TaskValidationError};
pub use store::task_store::TaskStore;
pub use view::config::{ConfigError, ViewConfig};
pub use view::render::{build_view_model, render_text, TaskRow, ViewModel};
pub use view::todo_list_view::{EventOutcome, TodoListView};

/// Minimal health-check API for host integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
