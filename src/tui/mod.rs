//! Interactive terminal board.
//!
//! `td board` runs a full-screen three-column view over the task store.
//! The event loop is synchronous: handlers run to completion between
//! renders, and every store mutation persists before the next frame.

pub mod app;
pub mod board;
pub mod notifications;

use std::io::{self, stdout};
use std::path::Path;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::prelude::*;

use crate::storage::Storage;
use crate::store::TaskStore;
use crate::Result;

use app::BoardApp;

/// Setup the terminal for board mode.
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout());
    Terminal::new(backend)
}

/// Restore the terminal to normal mode.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Run the interactive board for the given board directory.
pub fn run_board(board_path: &Path) -> Result<()> {
    let store = TaskStore::open(Storage::open(board_path)?)?;
    let mut app = BoardApp::new(store);

    let mut terminal = setup_terminal()?;
    let result = run_loop(&mut terminal, &mut app);

    // Always restore, even if the loop errored
    restore_terminal()?;
    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut BoardApp,
) -> Result<()> {
    loop {
        app.toasts.prune();
        terminal.draw(|frame| board::render(app, frame))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key.code);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
