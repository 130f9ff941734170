//! In-memory ordered task store.
//!
//! # Responsibility
//! - Append validated tasks with session-unique IDs.
//! - Toggle and remove tasks by ID while preserving relative order.
//!
//! # Invariants
//! - An ID issued once is never issued again in the same store, even after
//!   the task holding it was removed. IDs pack a per-store random tag with a
//!   monotonic sequence number, so uniqueness needs no bookkeeping.
//! - Logs carry IDs and counts only, never task text.

use crate::model::task::{is_blank, Task, TaskId, TaskValidationError};
use log::debug;
use uuid::Uuid;

/// Ordered collection of all tasks in the current session.
#[derive(Debug)]
pub struct TaskStore {
    tasks: Vec<Task>,
    /// High half of every ID issued by this store.
    session_tag: u64,
    /// Low half of the next ID; starts at 1 so no ID is nil.
    next_seq: u64,
}

impl Default for TaskStore {
    fn default() -> Self {
        Self {
            tasks: Vec::new(),
            session_tag: Uuid::new_v4().as_u64_pair().0,
            next_seq: 1,
        }
    }
}

impl TaskStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new incomplete task at the end of the sequence.
    ///
    /// The untrimmed `text` is stored as given.
    ///
    /// # Errors
    /// - `EmptyText` when `text` is blank; the store is left unchanged.
    pub fn append(&mut self, text: impl Into<String>) -> Result<&Task, TaskValidationError> {
        let text = text.into();
        if is_blank(&text) {
            debug!("event=task_append module=store status=rejected reason=empty_text");
            return Err(TaskValidationError::EmptyText);
        }

        let task = Task::with_id(self.next_id(), text)?;
        debug!(
            "event=task_append module=store status=ok task_id={} len={}",
            task.id,
            self.tasks.len() + 1
        );

        let index = self.tasks.len();
        self.tasks.push(task);
        Ok(&self.tasks[index])
    }

    /// Flips `completed` on the task with `id`.
    ///
    /// Returns `false` when no task matches; the store is unchanged then.
    pub fn toggle(&mut self, id: TaskId) -> bool {
        match self.tasks.iter_mut().find(|task| task.id == id) {
            Some(task) => {
                task.toggle();
                debug!(
                    "event=task_toggle module=store status=ok task_id={} completed={}",
                    id, task.completed
                );
                true
            }
            None => {
                debug!("event=task_toggle module=store status=noop task_id={id}");
                false
            }
        }
    }

    /// Removes the task with `id`, keeping the remainder in order.
    ///
    /// Returns the removed task, or `None` when no task matches.
    pub fn remove(&mut self, id: TaskId) -> Option<Task> {
        let Some(index) = self.position(id) else {
            debug!("event=task_remove module=store status=noop task_id={id}");
            return None;
        };
        let removed = self.tasks.remove(index);
        debug!(
            "event=task_remove module=store status=ok task_id={} len={}",
            id,
            self.tasks.len()
        );
        Some(removed)
    }

    /// Tasks in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Zero-based index of the task with `id`.
    pub fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|task| task.completed).count()
    }

    pub fn remaining_count(&self) -> usize {
        self.len() - self.completed_count()
    }

    fn next_id(&mut self) -> TaskId {
        let id = Uuid::from_u64_pair(self.session_tag, self.next_seq);
        self.next_seq += 1;
        id
    }
}

impl<'a> IntoIterator for &'a TaskStore {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
