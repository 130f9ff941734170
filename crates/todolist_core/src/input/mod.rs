//! User input collection.
//!
//! # Responsibility
//! - Buffer keystrokes for the task being composed.
//! - Define the discrete UI events a host forwards to the view.

pub mod draft;
