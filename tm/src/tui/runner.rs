//! TUI runner - main loop that owns the terminal
//!
//! The runner draws a frame, waits for the next event, hands keys to
//! the App, and checks the quit flag. Every mutation is applied and
//! rendered before the next event is read, so no partial update is
//! ever visible.

use std::time::Duration;

use eyre::Result;
use tracing::debug;

use todostore::TaskStore;

use crate::config::UiConfig;

use super::Tui;
use super::app::App;
use super::events::{Event, EventHandler};
use super::views;

/// Redraw cadence while idle (~30 FPS)
const TICK_RATE: Duration = Duration::from_millis(33);

/// TUI runner that manages the terminal and event loop
pub struct TuiRunner {
    /// Application state and key handling
    app: App,
    /// Terminal handle
    terminal: Tui,
    /// Event handler
    event_handler: EventHandler,
}

impl TuiRunner {
    /// Create a runner around a store and view config.
    pub fn new(terminal: Tui, store: TaskStore, ui: UiConfig) -> Self {
        Self {
            app: App::new(store, ui),
            terminal,
            event_handler: EventHandler::new(TICK_RATE),
        }
    }

    /// Run the TUI main loop
    pub async fn run(&mut self) -> Result<()> {
        loop {
            self.terminal.draw(|frame| views::render(self.app.state(), frame))?;

            match self.event_handler.next().await? {
                Event::Tick => {}
                Event::Key(key_event) => {
                    if self.app.handle_key(key_event) {
                        break;
                    }
                }
                Event::Resize(width, height) => {
                    debug!(width, height, "terminal resized");
                }
            }

            if self.app.state().should_quit {
                break;
            }
        }

        Ok(())
    }
}
