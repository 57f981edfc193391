//! Terminal application wrapper with RAII setup/teardown.

use std::io::{self, Stdout};

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

/// Type alias for the terminal with crossterm backend.
pub type TuiTerminal = Terminal<CrosstermBackend<Stdout>>;

/// RAII wrapper for terminal setup and teardown.
///
/// Enables raw mode and the alternate screen on creation and restores the
/// terminal on drop (even on panic), so a cancelled prompt never leaves the
/// shell in raw mode.
pub struct TerminalApp {
    terminal: TuiTerminal,
}

impl TerminalApp {
    pub fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(Self { terminal })
    }

    /// Returns a mutable reference to the underlying terminal.
    pub fn terminal(&mut self) -> &mut TuiTerminal {
        &mut self.terminal
    }
}

impl Drop for TerminalApp {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}
