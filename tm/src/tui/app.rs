//! TUI application - event handling over the state
//!
//! The App struct owns the AppState and handles all keyboard events.
//! It does not do any rendering - that's delegated to the views module.
//! Each event is applied synchronously: by the time the next event is
//! read, the store, the window, and the statistics all agree.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use todostore::TaskStore;

use crate::config::UiConfig;

use super::state::{AppState, Mode};

/// TUI application
#[derive(Debug)]
pub struct App {
    /// Application state
    state: AppState,
}

impl App {
    /// Create an application around a store.
    pub fn new(store: TaskStore, ui: UiConfig) -> Self {
        Self {
            state: AppState::new(store, ui),
        }
    }

    /// Get reference to state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Get mutable reference to state
    pub fn state_mut(&mut self) -> &mut AppState {
        &mut self.state
    }

    /// Handle a key event
    ///
    /// Returns true if the application should exit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Ctrl+C force-quits from any mode
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        match self.state.mode.clone() {
            Mode::Normal => self.handle_normal_key(key),
            Mode::NewTask => self.handle_new_task_key(key),
            Mode::EditTask { .. } => self.handle_edit_key(key),
            Mode::Help => self.handle_help_key(key),
        }

        false
    }

    /// Handle key in normal mode
    fn handle_normal_key(&mut self, key: KeyEvent) {
        match key.code {
            // === Quit ===
            KeyCode::Char('q') | KeyCode::Esc => {
                self.state.should_quit = true;
            }

            // === Help ===
            KeyCode::Char('?') | KeyCode::F(1) => {
                self.state.mode = Mode::Help;
            }

            // === New task ===
            KeyCode::Char('n') | KeyCode::Char('a') => {
                self.state.mode = Mode::NewTask;
            }

            // === Selection within the window ===
            KeyCode::Up | KeyCode::Char('k') => self.state.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.state.select_next(),
            KeyCode::Char('g') => self.state.select_first(),
            KeyCode::Char('G') => self.state.select_last(),

            // === Page navigation ===
            KeyCode::Left | KeyCode::Char('h') => self.state.prev_page(),
            KeyCode::Right | KeyCode::Char('l') => self.state.next_page(),
            KeyCode::Home => self.state.goto_page(0),
            KeyCode::End => self.state.goto_page(usize::MAX),

            // === Direct page selection from the strip (1-9) ===
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(d) = c.to_digit(10)
                    && d > 0
                {
                    self.state.goto_page((d - 1) as usize);
                }
            }

            // === Task actions ===
            KeyCode::Char(' ') | KeyCode::Char('x') => self.state.toggle_selected(),
            KeyCode::Enter | KeyCode::Char('e') => self.state.begin_edit(),
            KeyCode::Delete | KeyCode::Char('d') => self.state.delete_selected(),

            _ => {}
        }
    }

    /// Handle key while typing into the new-task input
    fn handle_new_task_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                // Leave the input; the buffer is kept
                self.state.mode = Mode::Normal;
            }
            KeyCode::Enter => {
                // Commit the buffer; empty input is ignored
                self.state.submit_input();
            }
            KeyCode::Backspace => {
                self.state.pop_input_char();
            }
            KeyCode::Char(c) => {
                self.state.push_input_char(c);
            }
            _ => {}
        }
    }

    /// Handle key while editing a task's text
    fn handle_edit_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.state.commit_edit();
            }
            // Enter is suppressed while editing: no newline, no submit
            KeyCode::Enter => {}
            KeyCode::Backspace => {
                self.state.edit_pop_char();
            }
            KeyCode::Char(c) => {
                self.state.edit_push_char(c);
            }
            _ => {}
        }
    }

    /// Handle key in help mode
    fn handle_help_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => {
                self.state.mode = Mode::Normal;
            }
            _ => {}
        }
    }
}
