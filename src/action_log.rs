//! Action logging for taskdeck commands.
//!
//! Every CLI invocation appends one JSONL entry to `actions.jsonl` in the
//! board's data directory. Logging never fails a command: any error here is
//! at most a warning on stderr.

use crate::storage::Storage;
use crate::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

/// Log file name inside the board's data directory.
pub const LOG_FILE: &str = "actions.jsonl";

/// Environment variable that disables logging when set to `0`.
pub const LOG_ENV: &str = "TD_ACTION_LOG";

/// A single action log entry.
#[derive(Debug, Serialize, Deserialize)]
pub struct ActionLog {
    /// When the action occurred
    pub timestamp: DateTime<Utc>,

    /// Command name (e.g., "create", "move")
    pub command: String,

    /// Command arguments as JSON
    pub args: serde_json::Value,

    /// Whether the command succeeded
    pub success: bool,

    /// Error message if the command failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Command execution duration in milliseconds
    pub duration_ms: u64,
}

/// Append an action to the board's log.
pub fn log_action(
    board_path: &Path,
    command: &str,
    args: serde_json::Value,
    success: bool,
    error: Option<String>,
    duration_ms: u64,
) {
    if std::env::var(LOG_ENV).as_deref() == Ok("0") {
        return;
    }

    // No storage, no log: commands against an uninitialized board leave
    // no trail, there is nowhere to put one.
    let Ok(storage) = Storage::open(board_path) else {
        return;
    };

    let entry = ActionLog {
        timestamp: Utc::now(),
        command: command.to_string(),
        args,
        success,
        error,
        duration_ms,
    };

    if let Err(e) = write_entry(&storage.root().join(LOG_FILE), &entry) {
        eprintln!("Warning: Failed to write action log: {}", e);
    }
}

fn write_entry(path: &Path, entry: &ActionLog) -> std::io::Result<()> {
    let json = serde_json::to_string(entry)?;
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{}", json)
}

/// Read the full action trail for a board, oldest first.
///
/// Unparseable lines are skipped rather than failing the read.
pub fn read_log(storage: &Storage) -> Result<Vec<ActionLog>> {
    let path = storage.root().join(LOG_FILE);
    if !path.exists() {
        return Ok(Vec::new());
    }

    let file = std::fs::File::open(&path)?;
    let reader = BufReader::new(file);
    let mut entries = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        if let Ok(entry) = serde_json::from_str::<ActionLog>(&line) {
            entries.push(entry);
        }
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestEnv;

    #[test]
    fn write_and_read_entries() {
        let env = TestEnv::new();
        let storage = env.init_storage();

        let entry = ActionLog {
            timestamp: Utc::now(),
            command: "create".to_string(),
            args: serde_json::json!({"name": "Write spec"}),
            success: true,
            error: None,
            duration_ms: 3,
        };
        write_entry(&storage.root().join(LOG_FILE), &entry).unwrap();

        let entries = read_log(&storage).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].command, "create");
        assert!(entries[0].success);
    }

    #[test]
    fn empty_log_reads_empty() {
        let env = TestEnv::new();
        let storage = env.init_storage();
        assert!(read_log(&storage).unwrap().is_empty());
    }

    #[test]
    fn garbage_lines_are_skipped() {
        let env = TestEnv::new();
        let storage = env.init_storage();
        let path = storage.root().join(LOG_FILE);
        std::fs::write(&path, "not json\n").unwrap();

        let entry = ActionLog {
            timestamp: Utc::now(),
            command: "delete".to_string(),
            args: serde_json::Value::Null,
            success: false,
            error: Some("Task not found: x".to_string()),
            duration_ms: 1,
        };
        write_entry(&path, &entry).unwrap();

        let entries = read_log(&storage).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].command, "delete");
    }
}
