//! Derived task statistics
//!
//! A pure read-only projection of the collection; no state of its own.

use serde::Serialize;

use crate::task::Task;

/// Counts derived from the task collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TaskStats {
    /// All tasks
    pub total: usize,
    /// Tasks marked completed
    pub completed: usize,
    /// Tasks still open
    pub remaining: usize,
}

impl TaskStats {
    /// Derive statistics from an ordered task slice.
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let completed = tasks.iter().filter(|t| t.completed).count();
        Self {
            total: tasks.len(),
            completed,
            remaining: tasks.len() - completed,
        }
    }
}
