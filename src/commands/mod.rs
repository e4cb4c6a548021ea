//! Command implementations for the taskdeck CLI.
//!
//! Each command returns a result struct implementing [`Output`], which main
//! prints as JSON (default) or human-readable text (`-H`). Business rules
//! live in the store; this layer does argument parsing, confirmation
//! prompts, and presentation.

use crate::action_log::{self, ActionLog};
use crate::models::{Status, Task};
use crate::storage::Storage;
use crate::store::TaskStore;
use crate::Result;
use serde::Serialize;
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Command results that can be serialized to JSON or formatted for humans.
pub trait Output {
    /// Serialize to a JSON string.
    fn to_json(&self) -> String;

    /// Format for human-readable output.
    fn to_human(&self) -> String;
}

fn json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| String::from("{}"))
}

fn open_store(board_path: &Path) -> Result<TaskStore> {
    TaskStore::open(Storage::open(board_path)?)
}

// === init ===

#[derive(Debug, Serialize)]
pub struct InitResult {
    pub initialized: bool,
    pub root: String,
}

impl Output for InitResult {
    fn to_json(&self) -> String {
        json(self)
    }

    fn to_human(&self) -> String {
        if self.initialized {
            format!("Initialized taskdeck board (data: {})", self.root)
        } else {
            format!("Board already initialized (data: {})", self.root)
        }
    }
}

/// Initialize storage for a board. Idempotent.
pub fn init(board_path: &Path) -> Result<InitResult> {
    let existed = Storage::exists(board_path)?;
    let storage = Storage::init(board_path)?;
    Ok(InitResult {
        initialized: !existed,
        root: storage.root().display().to_string(),
    })
}

// === create ===

#[derive(Debug, Serialize)]
pub struct CreateResult {
    #[serde(flatten)]
    pub task: Task,
}

impl Output for CreateResult {
    fn to_json(&self) -> String {
        json(self)
    }

    fn to_human(&self) -> String {
        format!("Created task {} \"{}\"", self.task.id, self.task.name)
    }
}

/// Create a task in the todo column.
pub fn create(board_path: &Path, name: &str) -> Result<CreateResult> {
    let mut store = open_store(board_path)?;
    let task = store.create(name)?;
    Ok(CreateResult { task })
}

// === list ===

#[derive(Debug, Serialize)]
pub struct ListResult {
    pub count: usize,
    pub tasks: Vec<Task>,
}

impl Output for ListResult {
    fn to_json(&self) -> String {
        json(self)
    }

    fn to_human(&self) -> String {
        if self.tasks.is_empty() {
            return "No tasks".to_string();
        }
        let mut lines: Vec<String> = self
            .tasks
            .iter()
            .map(|t| format!("{}  {:<8}  {}", t.id, t.status.as_str(), t.name))
            .collect();
        lines.push(format!("{} task(s)", self.count));
        lines.join("\n")
    }
}

/// List tasks, optionally filtered to one column.
pub fn list(board_path: &Path, status: Option<&str>) -> Result<ListResult> {
    let store = open_store(board_path)?;
    let tasks: Vec<Task> = match status {
        Some(s) => {
            let status: Status = s.parse()?;
            store.by_status(status).into_iter().cloned().collect()
        }
        None => store.tasks().to_vec(),
    };
    Ok(ListResult {
        count: tasks.len(),
        tasks,
    })
}

// === show ===

#[derive(Debug, Serialize)]
pub struct ShowResult {
    #[serde(flatten)]
    pub task: Task,
}

impl Output for ShowResult {
    fn to_json(&self) -> String {
        json(self)
    }

    fn to_human(&self) -> String {
        format!(
            "id:     {}\nname:   {}\nstatus: {}",
            self.task.id, self.task.name, self.task.status
        )
    }
}

/// Show a single task by ID.
pub fn show(board_path: &Path, id: &str) -> Result<ShowResult> {
    let store = open_store(board_path)?;
    let task = store.get(id)?.clone();
    Ok(ShowResult { task })
}

// === rename ===

#[derive(Debug, Serialize)]
pub struct RenameResult {
    #[serde(flatten)]
    pub task: Task,
}

impl Output for RenameResult {
    fn to_json(&self) -> String {
        json(self)
    }

    fn to_human(&self) -> String {
        format!("Renamed task {} to \"{}\"", self.task.id, self.task.name)
    }
}

/// Rename a task (re-validated like create).
pub fn rename(board_path: &Path, id: &str, new_name: &str) -> Result<RenameResult> {
    let mut store = open_store(board_path)?;
    let task = store.rename(id, new_name)?;
    Ok(RenameResult { task })
}

// === move ===

#[derive(Debug, Serialize)]
pub struct MoveResult {
    #[serde(flatten)]
    pub task: Task,
}

impl Output for MoveResult {
    fn to_json(&self) -> String {
        json(self)
    }

    fn to_human(&self) -> String {
        format!("Moved task {} to {}", self.task.id, self.task.status)
    }
}

/// Move a task to another column.
pub fn move_task(board_path: &Path, id: &str, status: &str) -> Result<MoveResult> {
    let status: Status = status.parse()?;
    let mut store = open_store(board_path)?;
    let task = store.move_status(id, status)?;
    Ok(MoveResult { task })
}

// === delete ===

#[derive(Debug, Serialize)]
pub struct DeleteResult {
    pub deleted: bool,
    pub id: String,
    pub name: String,
}

impl Output for DeleteResult {
    fn to_json(&self) -> String {
        json(self)
    }

    fn to_human(&self) -> String {
        if self.deleted {
            format!("Deleted task {} \"{}\"", self.id, self.name)
        } else {
            format!("Aborted; task {} not deleted", self.id)
        }
    }
}

/// Delete a task, asking for confirmation on stdin unless `force` is set.
/// Declining (or EOF) is a no-op reported as `deleted: false`.
pub fn delete(board_path: &Path, id: &str, force: bool) -> Result<DeleteResult> {
    let mut store = open_store(board_path)?;
    let task = store.get(id)?.clone();

    if !force && !confirm_delete(&task)? {
        return Ok(DeleteResult {
            deleted: false,
            id: task.id,
            name: task.name,
        });
    }

    let task = store.delete(id)?;
    Ok(DeleteResult {
        deleted: true,
        id: task.id,
        name: task.name,
    })
}

fn confirm_delete(task: &Task) -> Result<bool> {
    // Prompt on stderr so JSON output on stdout stays machine-readable
    eprint!("Delete task {} \"{}\"? [y/N] ", task.id, task.name);
    io::stderr().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}

// === log ===

#[derive(Debug, Serialize)]
pub struct LogResult {
    pub count: usize,
    pub entries: Vec<ActionLog>,
}

impl Output for LogResult {
    fn to_json(&self) -> String {
        json(self)
    }

    fn to_human(&self) -> String {
        if self.entries.is_empty() {
            return "No actions logged".to_string();
        }
        self.entries
            .iter()
            .map(|e| {
                let outcome = if e.success {
                    "ok".to_string()
                } else {
                    format!("error: {}", e.error.as_deref().unwrap_or("unknown"))
                };
                format!(
                    "{}  {:<8}  {}  ({}ms)",
                    e.timestamp.format("%Y-%m-%d %H:%M:%S"),
                    e.command,
                    outcome,
                    e.duration_ms
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Show the action audit trail for a board.
pub fn log(board_path: &Path) -> Result<LogResult> {
    let storage = Storage::open(board_path)?;
    let entries = action_log::read_log(&storage)?;
    Ok(LogResult {
        count: entries.len(),
        entries,
    })
}
