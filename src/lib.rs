//! taskdeck - a local task board for the terminal.
//!
//! This library backs the `td` CLI: task CRUD over a three-column board
//! (todo / progress / done) with a single JSON snapshot per board directory.

pub mod action_log;
pub mod cli;
pub mod commands;
pub mod models;
pub mod storage;
pub mod store;
#[cfg(feature = "tui")]
pub mod tui;
pub mod validate;


/// Library-level error type for taskdeck operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Not initialized: run `td init` first")]
    NotInitialized,

    #[error("Task not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Validation(#[from] validate::ValidationError),

    #[error("Invalid status '{0}' (expected todo, progress, or done)")]
    InvalidStatus(String),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for taskdeck operations.
pub type Result<T> = std::result::Result<T, Error>;
