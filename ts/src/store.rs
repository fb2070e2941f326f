//! Task store - the canonical collection and its mutations
//!
//! Mutations arrive either through the [`Action`] dispatch interface
//! or the named convenience methods; both paths are synchronous and
//! total. Unknown ids are ignored rather than reported - the UI treats
//! invalid operations as no-ops by contract.

use tracing::debug;

use crate::task::{Task, TaskId};

/// A mutation request against the store.
///
/// One variant per operation the UI can dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Append a new task. The caller guarantees `data` is non-empty.
    Create { data: String },
    /// Replace the text and editing flag of the matching task.
    Edit {
        id: TaskId,
        data: String,
        is_editing: bool,
    },
    /// Remove the matching task from the collection.
    Delete { id: TaskId },
    /// Mark the matching task completed.
    Perform { id: TaskId },
    /// Mark the matching task not completed.
    Unperform { id: TaskId },
}

/// Owns the ordered task collection.
///
/// Insertion order is preserved and defines display order. Every
/// mutation replaces the collection with a freshly built one; readers
/// holding a clone of the previous snapshot are never aliased.
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
    next_id: TaskId,
}

impl TaskStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// The ordered collection, oldest first.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Number of tasks.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Look up a task by id.
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Apply a mutation.
    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::Create { data } => {
                self.create_task(data);
            }
            Action::Edit { id, data, is_editing } => self.edit_task(id, data, is_editing),
            Action::Delete { id } => self.delete_task(id),
            Action::Perform { id } => self.perform_task(id),
            Action::Unperform { id } => self.unperform_task(id),
        }
    }

    /// Append a new task and return its id.
    ///
    /// Ids come from a monotonic counter and are never reused, so a
    /// create after any number of deletes still yields a fresh id.
    pub fn create_task(&mut self, data: impl Into<String>) -> TaskId {
        let id = self.next_id;
        self.next_id += 1;

        let mut tasks: Vec<Task> = self.tasks.clone();
        tasks.push(Task::new(id, data));
        self.tasks = tasks;

        debug!(id, total = self.tasks.len(), "task created");
        id
    }

    /// Replace the text and editing flag of the task matching `id`.
    ///
    /// No-op when `id` is not in the collection.
    pub fn edit_task(&mut self, id: TaskId, data: impl Into<String>, is_editing: bool) {
        if self.get(id).is_none() {
            debug!(id, "edit ignored: unknown id");
            return;
        }
        let data = data.into();
        self.tasks = self
            .tasks
            .iter()
            .map(|t| {
                if t.id == id {
                    Task {
                        data: data.clone(),
                        is_editing,
                        ..t.clone()
                    }
                } else {
                    t.clone()
                }
            })
            .collect();
        debug!(id, is_editing, "task edited");
    }

    /// Remove the task matching `id`. No tombstone; no-op on unknown id.
    pub fn delete_task(&mut self, id: TaskId) {
        let before = self.tasks.len();
        self.tasks = self.tasks.iter().filter(|t| t.id != id).cloned().collect();
        if self.tasks.len() == before {
            debug!(id, "delete ignored: unknown id");
        } else {
            debug!(id, total = self.tasks.len(), "task deleted");
        }
    }

    /// Set `completed = true` on the matching task.
    pub fn perform_task(&mut self, id: TaskId) {
        self.set_completed(id, true);
    }

    /// Set `completed = false` on the matching task.
    pub fn unperform_task(&mut self, id: TaskId) {
        self.set_completed(id, false);
    }

    fn set_completed(&mut self, id: TaskId, completed: bool) {
        if self.get(id).is_none() {
            debug!(id, completed, "completion change ignored: unknown id");
            return;
        }
        self.tasks = self
            .tasks
            .iter()
            .map(|t| {
                if t.id == id {
                    Task {
                        completed,
                        ..t.clone()
                    }
                } else {
                    t.clone()
                }
            })
            .collect();
        debug!(id, completed, "task completion changed");
    }
}
