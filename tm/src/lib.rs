//! taskman - single-page task manager for the terminal
//!
//! A paginated, editable, checkable task list with a statistics panel,
//! rendered as a full-screen TUI. The canonical collection lives in
//! the [`todostore`] crate; everything here is view state and event
//! plumbing.
//!
//! # Modules
//!
//! - [`cli`] - command-line interface
//! - [`config`] - configuration types and loading
//! - [`seed`] - optional initial task list loaded at startup
//! - [`tui`] - terminal UI: state, key handling, pagination, rendering

pub mod cli;
pub mod config;
pub mod seed;
pub mod tui;

pub use cli::{Cli, Command, OutputFormat};
pub use config::{Config, UiConfig};
pub use seed::{SeedTask, load_seed};
pub use tui::{App, AppState, Mode, TuiRunner};
