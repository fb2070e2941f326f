//! Task record
//!
//! The unit the whole UI revolves around: a short text line with a
//! completion flag and a transient editing flag.

use serde::{Deserialize, Serialize};

/// Maximum task text length, counted in characters.
///
/// Input beyond the cap is rejected at the UI boundary, never
/// truncated, so a stored `data` longer than this cannot exist.
pub const MAX_TASK_LEN: usize = 40;

/// Unique, stable task identifier.
///
/// Assigned at creation from a monotonic counter and never reused,
/// even after the task is deleted.
pub type TaskId = u64;

/// A single task on the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier
    pub id: TaskId,

    /// Text content (at most [`MAX_TASK_LEN`] characters)
    pub data: String,

    /// Whether the task has been performed
    #[serde(default)]
    pub completed: bool,

    /// True while the text holds uncommitted, focus-held edits.
    /// Transient view-cycle state; excluded from serialized forms.
    #[serde(default, skip_serializing)]
    pub is_editing: bool,
}

impl Task {
    /// Create a fresh task: not completed, not being edited.
    pub fn new(id: TaskId, data: impl Into<String>) -> Self {
        Self {
            id,
            data: data.into(),
            completed: false,
            is_editing: false,
        }
    }
}
