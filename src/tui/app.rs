//! Board application state and key handling.
//!
//! The board is a small state machine over the task store. `Normal` mode
//! navigates; grabbing a task enters `Dragging`, which tracks the drop
//! target until the task is dropped (a status move) or the drag is
//! cancelled. Edit and create modes hold a scratch buffer that only touches
//! the store on commit; delete goes through a confirm modal.

use crossterm::event::KeyCode;

use crate::models::{Status, Task};
use crate::store::TaskStore;

use super::notifications::Toasts;

/// Interaction mode of the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Navigating the columns
    Normal,
    /// A task has been picked up; `target` is the column it would drop into
    Dragging { task_id: String, target: Status },
    /// Inline rename with a scratch copy of the name
    Editing { task_id: String, scratch: String },
    /// New-task input line
    Creating { scratch: String },
    /// Delete confirmation modal
    ConfirmDelete { task_id: String },
}

/// Board application state.
pub struct BoardApp {
    pub store: TaskStore,
    pub mode: Mode,
    pub toasts: Toasts,
    /// Index into `Status::ALL`
    pub selected_column: usize,
    /// Row within the selected column's filtered view
    pub selected_row: usize,
    pub should_quit: bool,
}

impl BoardApp {
    pub fn new(store: TaskStore) -> Self {
        Self {
            store,
            mode: Mode::Normal,
            toasts: Toasts::new(),
            selected_column: 0,
            selected_row: 0,
            should_quit: false,
        }
    }

    /// Status of the selected column.
    pub fn column(&self) -> Status {
        Status::ALL[self.selected_column]
    }

    /// Tasks in the selected column, in creation order.
    pub fn column_tasks(&self) -> Vec<&Task> {
        self.store.by_status(self.column())
    }

    /// The selected task, if the column is non-empty.
    pub fn selected_task(&self) -> Option<&Task> {
        self.column_tasks().get(self.selected_row).copied()
    }

    /// Handle one key press.
    pub fn handle_key(&mut self, key: KeyCode) {
        match self.mode.clone() {
            Mode::Normal => self.handle_normal_key(key),
            Mode::Dragging { task_id, target } => self.handle_drag_key(key, task_id, target),
            Mode::Editing { task_id, scratch } => self.handle_edit_key(key, task_id, scratch),
            Mode::Creating { scratch } => self.handle_create_key(key, scratch),
            Mode::ConfirmDelete { task_id } => self.handle_confirm_key(key, task_id),
        }
    }

    fn handle_normal_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('h') | KeyCode::Left => self.select_column_left(),
            KeyCode::Char('l') | KeyCode::Right => self.select_column_right(),
            KeyCode::Char('j') | KeyCode::Down => self.select_next(),
            KeyCode::Char('k') | KeyCode::Up => self.select_previous(),
            KeyCode::Char('n') => {
                self.mode = Mode::Creating {
                    scratch: String::new(),
                };
            }
            KeyCode::Char('e') => {
                if let Some(task) = self.selected_task() {
                    self.mode = Mode::Editing {
                        task_id: task.id.clone(),
                        scratch: task.name.clone(),
                    };
                }
            }
            KeyCode::Char('d') => {
                if let Some(task) = self.selected_task() {
                    self.mode = Mode::ConfirmDelete {
                        task_id: task.id.clone(),
                    };
                }
            }
            KeyCode::Char(' ') | KeyCode::Enter => {
                // Pick up the selected task; the drag starts over its own column
                if let Some(task) = self.selected_task() {
                    self.mode = Mode::Dragging {
                        task_id: task.id.clone(),
                        target: task.status,
                    };
                }
            }
            _ => {}
        }
    }

    fn handle_drag_key(&mut self, key: KeyCode, task_id: String, target: Status) {
        match key {
            KeyCode::Char('h') | KeyCode::Left => {
                let idx = status_index(target);
                if idx > 0 {
                    self.mode = Mode::Dragging {
                        task_id,
                        target: Status::ALL[idx - 1],
                    };
                }
            }
            KeyCode::Char('l') | KeyCode::Right => {
                let idx = status_index(target);
                if idx + 1 < Status::ALL.len() {
                    self.mode = Mode::Dragging {
                        task_id,
                        target: Status::ALL[idx + 1],
                    };
                }
            }
            KeyCode::Char(' ') | KeyCode::Enter => {
                self.drop_task(&task_id, target);
                self.mode = Mode::Normal;
            }
            KeyCode::Esc => {
                // Cancelled drag: list unchanged
                self.mode = Mode::Normal;
            }
            _ => {}
        }
    }

    fn drop_task(&mut self, task_id: &str, target: Status) {
        let source = match self.store.get(task_id) {
            Ok(task) => task.status,
            Err(e) => {
                self.toasts.error(e.to_string());
                return;
            }
        };

        // Dropping back on the source column is a no-op
        if source != target {
            match self.store.move_status(task_id, target) {
                Ok(task) => self
                    .toasts
                    .success(format!("Moved \"{}\" to {}", task.name, target.label())),
                Err(e) => self.toasts.error(e.to_string()),
            }
        }

        // Follow the task to wherever it landed
        self.selected_column = status_index(target);
        self.selected_row = self
            .column_tasks()
            .iter()
            .position(|t| t.id == task_id)
            .unwrap_or(0);
    }

    fn handle_edit_key(&mut self, key: KeyCode, task_id: String, mut scratch: String) {
        match key {
            KeyCode::Enter => match self.store.rename(&task_id, &scratch) {
                Ok(task) => {
                    self.toasts
                        .success(format!("Renamed to \"{}\"", task.name));
                    self.mode = Mode::Normal;
                }
                Err(e) => {
                    // Keep editing so the user can fix the name
                    self.toasts.error(e.to_string());
                    self.mode = Mode::Editing { task_id, scratch };
                }
            },
            KeyCode::Esc => {
                // Discard the scratch copy; no store mutation
                self.mode = Mode::Normal;
            }
            KeyCode::Backspace => {
                scratch.pop();
                self.mode = Mode::Editing { task_id, scratch };
            }
            KeyCode::Char(c) => {
                scratch.push(c);
                self.mode = Mode::Editing { task_id, scratch };
            }
            _ => self.mode = Mode::Editing { task_id, scratch },
        }
    }

    fn handle_create_key(&mut self, key: KeyCode, mut scratch: String) {
        match key {
            KeyCode::Enter => match self.store.create(&scratch) {
                Ok(task) => {
                    self.toasts.success(format!("Created \"{}\"", task.name));
                    self.mode = Mode::Normal;
                }
                Err(e) => {
                    self.toasts.error(e.to_string());
                    self.mode = Mode::Creating { scratch };
                }
            },
            KeyCode::Esc => self.mode = Mode::Normal,
            KeyCode::Backspace => {
                scratch.pop();
                self.mode = Mode::Creating { scratch };
            }
            KeyCode::Char(c) => {
                scratch.push(c);
                self.mode = Mode::Creating { scratch };
            }
            _ => self.mode = Mode::Creating { scratch },
        }
    }

    fn handle_confirm_key(&mut self, key: KeyCode, task_id: String) {
        match key {
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                match self.store.delete(&task_id) {
                    Ok(task) => self.toasts.success(format!("Deleted \"{}\"", task.name)),
                    Err(e) => self.toasts.error(e.to_string()),
                }
                self.mode = Mode::Normal;
                self.clamp_selection();
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                // Declined: no-op
                self.mode = Mode::Normal;
            }
            _ => self.mode = Mode::ConfirmDelete { task_id },
        }
    }

    fn select_column_left(&mut self) {
        if self.selected_column > 0 {
            self.selected_column -= 1;
            self.clamp_selection();
        }
    }

    fn select_column_right(&mut self) {
        if self.selected_column + 1 < Status::ALL.len() {
            self.selected_column += 1;
            self.clamp_selection();
        }
    }

    fn select_next(&mut self) {
        let len = self.column_tasks().len();
        if len > 0 {
            self.selected_row = (self.selected_row + 1).min(len - 1);
        }
    }

    fn select_previous(&mut self) {
        self.selected_row = self.selected_row.saturating_sub(1);
    }

    fn clamp_selection(&mut self) {
        let len = self.column_tasks().len();
        self.selected_row = self.selected_row.min(len.saturating_sub(1));
    }

    /// The task currently being dragged, if any.
    pub fn dragging(&self) -> Option<(&str, Status)> {
        match &self.mode {
            Mode::Dragging { task_id, target } => Some((task_id.as_str(), *target)),
            _ => None,
        }
    }
}

fn status_index(status: Status) -> usize {
    Status::ALL
        .iter()
        .position(|s| *s == status)
        .unwrap_or_default()
}
