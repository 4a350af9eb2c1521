//! Raw-mode terminal setup that is undone on drop

use std::io::{self, Stdout};

use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{debug, warn};
use ratatui::{backend::CrosstermBackend, Terminal};

pub type AppTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Owns the interactive terminal. Dropping it leaves raw mode and the
/// alternate screen, also when the event loop bails out through `?`.
pub struct TerminalGuard {
    terminal: AppTerminal,
}

impl TerminalGuard {
    pub fn enter() -> io::Result<TerminalGuard> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        let entered = execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
            .and_then(|()| Terminal::new(CrosstermBackend::new(stdout)));

        match entered {
            Ok(terminal) => {
                debug!("Entered raw mode and alternate screen");
                Ok(TerminalGuard { terminal })
            }
            Err(e) => {
                if let Err(restore_err) = restore() {
                    warn!("Failed to restore terminal after setup error: {restore_err}");
                }
                Err(e)
            }
        }
    }

    pub fn terminal(&mut self) -> &mut AppTerminal {
        &mut self.terminal
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        match restore() {
            Ok(()) => debug!("Terminal restored"),
            Err(e) => warn!("Failed to restore terminal: {e}"),
        }
    }
}

/// Leave raw mode and the alternate screen and show the cursor.
/// Harmless when raw mode was never entered.
pub fn restore() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture, Show)
}
