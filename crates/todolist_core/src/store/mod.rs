//! Session-scoped task storage.
//!
//! # Responsibility
//! - Hold the authoritative ordered task sequence for one view.
//! - Expose the only mutating operations: append, toggle and remove.
//!
//! # Invariants
//! - Order is insertion order; no operation reorders tasks.
//! - Unknown IDs are benign no-ops, never errors.

pub mod task_store;
