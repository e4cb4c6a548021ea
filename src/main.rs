//! taskdeck CLI - a local task board for the terminal.

use clap::Parser;
use std::env;
use std::path::{Path, PathBuf};
use std::process;
use std::time::Instant;
use taskdeck::cli::{Cli, Commands};
use taskdeck::commands::{self, Output};
use taskdeck::{action_log, Error};

fn main() {
    let cli = Cli::parse();
    let human = cli.human_readable;

    // Determine board path: --board flag > TD_BOARD env (via clap) > cwd
    let board_path = resolve_board_path(cli.board_path, human);

    // Serialize command for logging
    let (cmd_name, args_json) = serialize_command(&cli.command);

    let start = Instant::now();
    let result = run_command(cli.command, &board_path, human);
    let duration = start.elapsed().as_millis() as u64;

    let (success, error) = match &result {
        Ok(_) => (true, None),
        Err(e) => (false, Some(e.to_string())),
    };

    // Log the action (silently skipped when logging is disabled or fails)
    action_log::log_action(&board_path, &cmd_name, args_json, success, error, duration);

    if let Err(e) = result {
        if human {
            eprintln!("Error: {}", e);
        } else {
            eprintln!("{}", serde_json::json!({ "error": e.to_string() }));
        }
        process::exit(1);
    }
}

/// Resolve the board path from the explicit flag/env value, falling back to
/// the current working directory.
fn resolve_board_path(explicit_path: Option<PathBuf>, human: bool) -> PathBuf {
    match explicit_path {
        Some(path) => {
            if !path.exists() {
                if human {
                    eprintln!("Error: Board path does not exist: {}", path.display());
                } else {
                    eprintln!(
                        "{}",
                        serde_json::json!({
                            "error": format!("Board path does not exist: {}", path.display())
                        })
                    );
                }
                process::exit(1);
            }
            path
        }
        None => env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    }
}

/// Command name and arguments for the action log.
fn serialize_command(command: &Commands) -> (String, serde_json::Value) {
    match command {
        Commands::Init => ("init".to_string(), serde_json::Value::Null),
        Commands::Create { name } => ("create".to_string(), serde_json::json!({ "name": name })),
        Commands::List { status } => ("list".to_string(), serde_json::json!({ "status": status })),
        Commands::Show { id } => ("show".to_string(), serde_json::json!({ "id": id })),
        Commands::Rename { id, name } => (
            "rename".to_string(),
            serde_json::json!({ "id": id, "name": name }),
        ),
        Commands::Move { id, status } => (
            "move".to_string(),
            serde_json::json!({ "id": id, "status": status }),
        ),
        Commands::Delete { id, force } => (
            "delete".to_string(),
            serde_json::json!({ "id": id, "force": force }),
        ),
        Commands::Log => ("log".to_string(), serde_json::Value::Null),
        #[cfg(feature = "tui")]
        Commands::Board => ("board".to_string(), serde_json::Value::Null),
    }
}

fn run_command(command: Commands, board_path: &Path, human: bool) -> Result<(), Error> {
    match command {
        Commands::Init => {
            let result = commands::init(board_path)?;
            output(&result, human);
        }

        Commands::Create { name } => {
            let result = commands::create(board_path, &name)?;
            output(&result, human);
        }

        Commands::List { status } => {
            let result = commands::list(board_path, status.as_deref())?;
            output(&result, human);
        }

        Commands::Show { id } => {
            let result = commands::show(board_path, &id)?;
            output(&result, human);
        }

        Commands::Rename { id, name } => {
            let result = commands::rename(board_path, &id, &name)?;
            output(&result, human);
        }

        Commands::Move { id, status } => {
            let result = commands::move_task(board_path, &id, &status)?;
            output(&result, human);
        }

        Commands::Delete { id, force } => {
            let result = commands::delete(board_path, &id, force)?;
            output(&result, human);
        }

        Commands::Log => {
            let result = commands::log(board_path)?;
            output(&result, human);
        }

        #[cfg(feature = "tui")]
        Commands::Board => {
            taskdeck::tui::run_board(board_path)?;
        }
    }

    Ok(())
}

fn output<T: Output>(result: &T, human: bool) {
    if human {
        println!("{}", result.to_human());
    } else {
        println!("{}", result.to_json());
    }
}
