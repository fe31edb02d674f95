//! Terminal setup and teardown
//!
//! Handles entering and leaving the alternate screen, including a panic hook
//! that restores the terminal on crash.

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;
use std::sync::Once;

use crate::error::{TrackerError, TrackerResult};

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

static PANIC_HOOK: Once = Once::new();

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> TrackerResult<Tui> {
    PANIC_HOOK.call_once(|| {
        let original_hook = panic::take_hook();
        panic::set_hook(Box::new(move |panic_info| {
            let _ = restore_terminal_impl();
            original_hook(panic_info);
        }));
    });

    enable_raw_mode().map_err(tui_error)?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(tui_error)?;

    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend).map_err(tui_error)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> TrackerResult<()> {
    restore_terminal_impl().map_err(tui_error)
}

fn restore_terminal_impl() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

fn tui_error(err: io::Error) -> TrackerError {
    TrackerError::Tui(err.to_string())
}
