//! todostore - centralized task state for the taskman UI
//!
//! Holds the single source of truth: an ordered collection of [`Task`]
//! records plus the mutation operations that replace it. Views consume
//! the collection read-only and derive whatever they need from it
//! ([`TaskStats`] being the canonical example).
//!
//! # Design
//!
//! - **Insertion order is display order**: tasks render oldest first.
//! - **Total operations**: mutations against an unknown id are silent
//!   no-ops, never errors.
//! - **Snapshot semantics**: every mutation rebuilds the collection
//!   instead of aliasing the previous one.

pub mod stats;
pub mod store;
pub mod task;

pub use stats::TaskStats;
pub use store::{Action, TaskStore};
pub use task::{MAX_TASK_LEN, Task, TaskId};
