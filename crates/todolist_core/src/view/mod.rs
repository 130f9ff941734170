//! Todo list view: state owner, configuration and presentation.
//!
//! # Responsibility
//! - Own one `TaskStore` plus `DraftInput` per view instance.
//! - Apply UI events synchronously, then re-derive the view model.
//! - Keep presentation a pure function of state; no business logic in render.
//!
//! # Invariants
//! - The draft is cleared only after a successful append.
//! - Both submission triggers run the identical append path.

pub mod config;
pub mod render;
pub mod todo_list_view;
