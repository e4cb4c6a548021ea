//! Storage layer for taskdeck data.
//!
//! Each board directory gets its own data directory under
//! `<data_dir>/taskdeck/<hash>/`, where `<hash>` is derived from the
//! canonicalized board path. The whole board lives in one file there:
//! `tasks.json`, a JSON array of tasks written in full on every mutation.
//! The action audit trail (`actions.jsonl`) sits alongside it.

use crate::models::Task;
use crate::{Error, Result};
use sha2::{Digest, Sha256};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Snapshot file name - the one "storage key" of the board.
pub const TASKS_FILE: &str = "tasks.json";

/// Environment variable overriding the base data directory.
pub const DATA_DIR_ENV: &str = "TD_DATA_DIR";

/// Storage manager for a single board.
pub struct Storage {
    /// Root directory for this board's data
    root: PathBuf,
}

impl Storage {
    /// Open storage for the given board path.
    pub fn open(board_path: &Path) -> Result<Self> {
        Self::open_with_data_dir(board_path, &resolve_data_dir()?)
    }

    /// Open storage using an explicit base data directory (for tests).
    pub fn open_with_data_dir(board_path: &Path, data_dir: &Path) -> Result<Self> {
        let root = storage_dir(board_path, data_dir)?;
        if !root.exists() {
            return Err(Error::NotInitialized);
        }
        Ok(Self { root })
    }

    /// Initialize storage for a new board.
    pub fn init(board_path: &Path) -> Result<Self> {
        Self::init_with_data_dir(board_path, &resolve_data_dir()?)
    }

    /// Initialize storage using an explicit base data directory (for tests).
    pub fn init_with_data_dir(board_path: &Path, data_dir: &Path) -> Result<Self> {
        let root = storage_dir(board_path, data_dir)?;
        fs::create_dir_all(&root)?;

        let tasks_path = root.join(TASKS_FILE);
        if !tasks_path.exists() {
            fs::write(&tasks_path, "[]")?;
        }

        Ok(Self { root })
    }

    /// Check whether storage exists for the given board path.
    pub fn exists(board_path: &Path) -> Result<bool> {
        let root = storage_dir(board_path, &resolve_data_dir()?)?;
        Ok(root.exists())
    }

    /// Load the full task list.
    ///
    /// An absent or unparseable snapshot loads as the empty list; a corrupt
    /// file must never take the board down at startup.
    pub fn load_tasks(&self) -> Result<Vec<Task>> {
        let path = self.root.join(TASKS_FILE);
        let contents = match fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        Ok(serde_json::from_str(&contents).unwrap_or_default())
    }

    /// Persist the full task list, replacing the previous snapshot.
    pub fn save_tasks(&self, tasks: &[Task]) -> Result<()> {
        let path = self.root.join(TASKS_FILE);
        let json = serde_json::to_string(tasks)?;
        fs::write(&path, json)?;
        Ok(())
    }

    /// Root directory for this board's data.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

/// Resolve the base data directory: `TD_DATA_DIR` env var, else the
/// platform data dir.
fn resolve_data_dir() -> Result<PathBuf> {
    if let Some(dir) = env::var_os(DATA_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }
    dirs::data_dir()
        .map(|d| d.join("taskdeck"))
        .ok_or_else(|| Error::Other("Could not determine data directory".to_string()))
}

/// Compute the per-board storage directory under the base data dir.
fn storage_dir(board_path: &Path, data_dir: &Path) -> Result<PathBuf> {
    let canonical = board_path
        .canonicalize()
        .map_err(|e| Error::Other(format!("Could not canonicalize board path: {}", e)))?;

    let mut hasher = Sha256::new();
    hasher.update(canonical.to_string_lossy().as_bytes());
    let hash_hex = format!("{:x}", hasher.finalize());

    Ok(data_dir.join(&hash_hex[..12]))
}
