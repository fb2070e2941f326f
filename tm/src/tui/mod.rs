//! Terminal user interface for taskman
//!
//! A single page: add-task input, the paginated task list with
//! checkboxes and inline editing, the pagination strip, and a
//! statistics panel. Key handling lives in [`app`], derivations in
//! [`state`] and [`pagination`], drawing in [`views`].

mod app;
mod events;
pub mod pagination;
mod runner;
pub mod state;
mod views;

pub use app::App;
pub use events::{Event, EventHandler};
pub use runner::TuiRunner;
pub use state::{AppState, Mode};

use std::io::{self, Stdout};

use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use eyre::Result;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use todostore::TaskStore;

use crate::config::UiConfig;

/// Terminal type alias
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to normal mode
pub fn restore() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the task list over the given store until the user quits.
pub async fn run(store: TaskStore, ui: UiConfig) -> Result<()> {
    let terminal = init()?;

    // Restore the terminal even on early return/error
    struct TerminalGuard;
    impl Drop for TerminalGuard {
        fn drop(&mut self) {
            let _ = restore();
        }
    }
    let _guard = TerminalGuard;

    let mut runner = TuiRunner::new(terminal, store, ui);
    runner.run().await
}
