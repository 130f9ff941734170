//! Domain model for the todo list.
//!
//! # Responsibility
//! - Define the canonical task record rendered by every host.
//! - Enforce creation-time invariants in one place.
//!
//! # Invariants
//! - Every task is identified by a stable `TaskId`.
//! - Task text is never blank.

pub mod task;
