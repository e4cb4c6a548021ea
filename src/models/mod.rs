//! Data models for taskdeck entities.
//!
//! The board holds exactly one kind of entity: `Task`, a named work item in
//! one of three columns. The persisted form is a JSON array of tasks with
//! only these three fields, so the struct carries nothing else.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Board column a task lives in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Todo,
    Progress,
    Done,
}

impl Status {
    /// All statuses in board-column order.
    pub const ALL: [Status; 3] = [Status::Todo, Status::Progress, Status::Done];

    /// Serialized form, as stored in the snapshot.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Todo => "todo",
            Status::Progress => "progress",
            Status::Done => "done",
        }
    }

    /// Column header label.
    pub fn label(&self) -> &'static str {
        match self {
            Status::Todo => "To Do",
            Status::Progress => "In Progress",
            Status::Done => "Done",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "todo" => Ok(Status::Todo),
            "progress" | "in-progress" | "in_progress" => Ok(Status::Progress),
            "done" => Ok(Status::Done),
            other => Err(Error::InvalidStatus(other.to_string())),
        }
    }
}

/// A work item on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier (UUID v4), immutable once assigned
    pub id: String,

    /// Display name (3-20 chars, unique at creation)
    pub name: String,

    /// Current board column
    #[serde(default)]
    pub status: Status,
}

impl Task {
    /// Create a new task in the todo column with a fresh ID.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            status: Status::Todo,
        }
    }
}
