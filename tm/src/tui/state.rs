//! TUI application state
//!
//! Pure data and derivations for the task list view. No rendering
//! logic here. The store handle is owned explicitly; the visible
//! window and the statistics are derived on demand rather than cached,
//! so there is no view-local copy to fall out of sync.

use todostore::{Task, TaskId, TaskStats, TaskStore};

use crate::config::UiConfig;
use crate::tui::pagination;

/// Interaction mode (modal)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Mode {
    /// Normal navigation mode
    #[default]
    Normal,
    /// Typing into the new-task input
    NewTask,
    /// Editing the text of an existing task
    EditTask { id: TaskId },
    /// Help overlay
    Help,
}

/// Main TUI application state
#[derive(Debug)]
pub struct AppState {
    /// Canonical task collection
    pub store: TaskStore,
    /// Current interaction mode
    pub mode: Mode,
    /// New-task text buffer
    pub input_value: String,
    /// Page cursor into the windowed collection
    pub page: usize,
    /// Selection cursor within the visible window
    pub selected: usize,
    /// Should the app quit
    pub should_quit: bool,
    /// View tuning (page size, length cap, strip shape)
    pub ui: UiConfig,
}

impl AppState {
    /// Create state around an existing store.
    pub fn new(store: TaskStore, ui: UiConfig) -> Self {
        Self {
            store,
            mode: Mode::default(),
            input_value: String::new(),
            page: 0,
            selected: 0,
            should_quit: false,
            ui,
        }
    }

    // === Derived view data ===

    /// Total page count for the current collection.
    pub fn page_count(&self) -> usize {
        pagination::page_count(self.store.len(), self.ui.page_size)
    }

    /// The slice of tasks visible on the current page.
    pub fn visible_tasks(&self) -> &[Task] {
        let range = pagination::window(self.store.len(), self.page, self.ui.page_size);
        &self.store.tasks()[range]
    }

    /// Statistics over the whole collection.
    pub fn stats(&self) -> TaskStats {
        TaskStats::from_tasks(self.store.tasks())
    }

    /// The task under the selection cursor, if the window is non-empty.
    pub fn selected_task(&self) -> Option<&Task> {
        self.visible_tasks().get(self.selected)
    }

    // === Selection ===

    pub fn select_next(&mut self) {
        let max = self.visible_tasks().len();
        if max > 0 && self.selected < max - 1 {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.visible_tasks().len().saturating_sub(1);
    }

    /// Keep both cursors within bounds after a mutation.
    fn clamp_cursors(&mut self) {
        self.page = pagination::clamp_page(self.page, self.store.len(), self.ui.page_size);
        self.selected = self.selected.min(self.visible_tasks().len().saturating_sub(1));
    }

    // === Pagination ===

    /// Jump to a specific page (clamped).
    pub fn goto_page(&mut self, page: usize) {
        self.page = pagination::clamp_page(page, self.store.len(), self.ui.page_size);
        self.clamp_cursors();
    }

    pub fn next_page(&mut self) {
        self.goto_page(self.page + 1);
    }

    pub fn prev_page(&mut self) {
        self.goto_page(self.page.saturating_sub(1));
    }

    // === New-task input ===

    /// Append to the new-task buffer; a keystroke past the length cap
    /// is rejected outright, never truncated.
    pub fn push_input_char(&mut self, c: char) {
        if self.input_value.chars().count() < self.ui.max_task_len {
            self.input_value.push(c);
        }
    }

    pub fn pop_input_char(&mut self) {
        self.input_value.pop();
    }

    /// Commit the new-task buffer: create the task, clear the buffer,
    /// and jump to the last page so the new task is visible.
    ///
    /// Empty input is ignored (the caller-side contract of create).
    pub fn submit_input(&mut self) {
        if self.input_value.is_empty() {
            return;
        }
        let data = std::mem::take(&mut self.input_value);
        self.store.create_task(data);
        self.page = pagination::last_page(self.store.len(), self.ui.page_size);
        self.selected = self.visible_tasks().len().saturating_sub(1);
    }

    // === Task operations ===

    /// Toggle completion of the selected task: dispatch the negation
    /// of the store's own flag. The store is the single source of
    /// truth for the checkbox, so no shadow state exists to diverge.
    pub fn toggle_selected(&mut self) {
        if let Some(task) = self.selected_task() {
            let id = task.id;
            if task.completed {
                self.store.unperform_task(id);
            } else {
                self.store.perform_task(id);
            }
        }
    }

    /// Delete the selected task and clamp the page cursor: removing
    /// the last task of the last page steps the cursor back, never
    /// below page 0.
    pub fn delete_selected(&mut self) {
        if let Some(task) = self.selected_task() {
            let id = task.id;
            self.store.delete_task(id);
            self.clamp_cursors();
        }
    }

    /// Enter edit mode on the selected task.
    ///
    /// Completed tasks are locked: their text cannot take focus.
    pub fn begin_edit(&mut self) {
        if let Some(task) = self.selected_task()
            && !task.completed
        {
            let id = task.id;
            self.mode = Mode::EditTask { id };
        }
    }

    /// Append to the edited task's text. Every accepted keystroke
    /// dispatches immediately with `is_editing = true`; one past the
    /// cap dispatches nothing.
    pub fn edit_push_char(&mut self, c: char) {
        if let Mode::EditTask { id } = self.mode
            && let Some(task) = self.store.get(id)
        {
            if task.data.chars().count() >= self.ui.max_task_len {
                return;
            }
            let mut data = task.data.clone();
            data.push(c);
            self.store.edit_task(id, data, true);
        }
    }

    /// Remove the last character of the edited task's text.
    pub fn edit_pop_char(&mut self) {
        if let Mode::EditTask { id } = self.mode
            && let Some(task) = self.store.get(id)
        {
            let mut data = task.data.clone();
            data.pop();
            self.store.edit_task(id, data, true);
        }
    }

    /// Leave edit mode, committing with `is_editing = false`.
    pub fn commit_edit(&mut self) {
        if let Mode::EditTask { id } = self.mode {
            if let Some(task) = self.store.get(id) {
                let data = task.data.clone();
                self.store.edit_task(id, data, false);
            }
            self.mode = Mode::Normal;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with(n: usize) -> AppState {
        let mut store = TaskStore::new();
        for i in 0..n {
            store.create_task(format!("task {}", i + 1));
        }
        AppState::new(store, UiConfig::default())
    }

    #[test]
    fn test_visible_window_follows_page() {
        let mut state = state_with(7);

        let page0: Vec<_> = state.visible_tasks().iter().map(|t| t.data.clone()).collect();
        assert_eq!(page0, ["task 1", "task 2", "task 3", "task 4", "task 5"]);

        state.next_page();
        let page1: Vec<_> = state.visible_tasks().iter().map(|t| t.data.clone()).collect();
        assert_eq!(page1, ["task 6", "task 7"]);
    }

    #[test]
    fn test_submit_jumps_to_last_page() {
        // 5 tasks fill page 0; the 6th opens page 1 and must be visible
        let mut state = state_with(5);
        state.input_value = "task 6".to_string();
        state.submit_input();

        assert_eq!(state.store.len(), 6);
        assert_eq!(state.page, 1);
        assert_eq!(state.selected_task().unwrap().data, "task 6");
        assert!(state.input_value.is_empty());
    }

    #[test]
    fn test_submit_empty_input_is_ignored() {
        let mut state = state_with(2);
        state.submit_input();
        assert_eq!(state.store.len(), 2);
    }

    #[test]
    fn test_delete_last_task_on_last_page_clamps_cursor() {
        // 6 tasks, page 1 holds one task; deleting it drops a page
        let mut state = state_with(6);
        state.goto_page(1);
        assert_eq!(state.visible_tasks().len(), 1);

        state.delete_selected();

        assert_eq!(state.store.len(), 5);
        assert_eq!(state.page_count(), 1);
        assert_eq!(state.page, 0);
    }

    #[test]
    fn test_delete_everything_never_goes_negative() {
        let mut state = state_with(1);
        state.delete_selected();

        assert!(state.store.is_empty());
        assert_eq!(state.page, 0);
        assert_eq!(state.selected, 0);
        assert!(state.selected_task().is_none());

        // A second delete with nothing selected is a no-op
        state.delete_selected();
        assert!(state.store.is_empty());
    }

    #[test]
    fn test_input_cap_rejects_not_truncates() {
        let mut state = state_with(0);
        for _ in 0..40 {
            state.push_input_char('x');
        }
        let before = state.input_value.clone();

        state.push_input_char('y');

        // The 41st character is never accepted
        assert_eq!(state.input_value, before);
        assert_eq!(state.input_value.chars().count(), 40);
    }

    #[test]
    fn test_toggle_dispatches_negation_of_store_flag() {
        let mut state = state_with(1);

        state.toggle_selected();
        assert!(state.selected_task().unwrap().completed);

        state.toggle_selected();
        assert!(!state.selected_task().unwrap().completed);
    }

    #[test]
    fn test_edit_keystrokes_dispatch_live_then_commit() {
        let mut state = state_with(1);
        state.begin_edit();
        assert!(matches!(state.mode, Mode::EditTask { .. }));

        state.edit_push_char('!');
        let task = &state.store.tasks()[0];
        assert_eq!(task.data, "task 1!");
        assert!(task.is_editing, "keystroke must dispatch live-editing state");

        state.commit_edit();
        let task = &state.store.tasks()[0];
        assert_eq!(task.data, "task 1!");
        assert!(!task.is_editing, "commit must clear the editing flag");
        assert_eq!(state.mode, Mode::Normal);
    }

    #[test]
    fn test_edit_cap_drops_keystroke() {
        let mut state = state_with(0);
        state.input_value = "x".repeat(40);
        state.submit_input();
        state.begin_edit();

        state.edit_push_char('y');
        assert_eq!(state.store.tasks()[0].data.chars().count(), 40);
        // The rejected keystroke must not have dispatched at all
        assert!(!state.store.tasks()[0].is_editing);
    }

    #[test]
    fn test_completed_task_is_edit_locked() {
        let mut state = state_with(1);
        state.toggle_selected();

        state.begin_edit();
        assert_eq!(state.mode, Mode::Normal, "completed task must not take focus");
    }

    #[test]
    fn test_selection_stays_inside_window() {
        let mut state = state_with(7);
        state.next_page(); // window holds 2 tasks

        state.select_next();
        state.select_next();
        state.select_next();
        assert_eq!(state.selected, 1);

        state.select_prev();
        state.select_prev();
        state.select_prev();
        assert_eq!(state.selected, 0);

        state.select_last();
        assert_eq!(state.selected, 1);
        state.select_first();
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_goto_page_clamps() {
        let mut state = state_with(7);
        state.goto_page(99);
        assert_eq!(state.page, 1);

        state.prev_page();
        state.prev_page();
        assert_eq!(state.page, 0);
    }
}
