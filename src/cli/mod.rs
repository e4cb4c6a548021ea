//! CLI argument definitions for taskdeck.

use clap::{Parser, Subcommand};

/// taskdeck - a local task board for the terminal.
///
/// Run `td init` once per board directory, then manage tasks with
/// `create`, `list`, `move`, `rename`, and `delete`, or open the
/// interactive board with `td board`.
#[derive(Parser, Debug)]
#[command(name = "td")]
#[command(author, version, about = "A local task board: three columns, one command", long_about = None)]
pub struct Cli {
    /// Output in human-readable format instead of JSON
    #[arg(short = 'H', long = "human", global = true)]
    pub human_readable: bool,

    /// Operate on the board for <path> instead of the current directory.
    /// Can also be set via the TD_BOARD environment variable.
    #[arg(short = 'C', long = "board", global = true, env = "TD_BOARD")]
    pub board_path: Option<std::path::PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize storage for this board (idempotent)
    Init,

    /// Create a task in the todo column
    Create {
        /// Task name (3-20 characters, unique)
        name: String,
    },

    /// List tasks
    List {
        /// Only show one column (todo, progress, done)
        #[arg(short, long)]
        status: Option<String>,
    },

    /// Show a single task
    Show {
        /// Task ID
        id: String,
    },

    /// Rename a task
    Rename {
        /// Task ID
        id: String,

        /// New name (validated like create)
        name: String,
    },

    /// Move a task to another column
    Move {
        /// Task ID
        id: String,

        /// Target column (todo, progress, done)
        status: String,
    },

    /// Delete a task (asks for confirmation)
    Delete {
        /// Task ID
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Show the action audit trail
    Log,

    /// Open the interactive board
    #[cfg(feature = "tui")]
    Board,
}
