//! Raw-mode terminal handling for the field host.
//!
//! The field is drawn on the alternate screen so the user's scrollback is
//! left as it was once the host exits.

use std::io::{self, IsTerminal, Stdout};

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::{NumfieldError, Result};

/// Ratatui terminal drawing to stdout through crossterm.
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Puts stdout in raw mode on the alternate screen and wraps it for drawing.
///
/// # Errors
///
/// Returns [`NumfieldError::Io`] when stdout is redirected or any step of the
/// switch fails. A failure after raw mode was enabled disables it again.
pub fn setup_terminal() -> Result<Tui> {
    let mut stdout = io::stdout();
    if !stdout.is_terminal() {
        return Err(NumfieldError::Io("stdout is not a terminal".to_string()));
    }

    enable_raw_mode().map_err(|e| NumfieldError::Io(format!("raw mode unavailable: {e}")))?;

    let attached = execute!(stdout, EnterAlternateScreen)
        .map_err(|e| format!("alternate screen unavailable: {e}"))
        .and_then(|()| {
            Terminal::new(CrosstermBackend::new(stdout))
                .map_err(|e| format!("terminal backend unavailable: {e}"))
        });

    attached.map_err(|msg| {
        let _ = disable_raw_mode();
        NumfieldError::Io(msg)
    })
}

/// Leaves the alternate screen, drops raw mode, and shows the cursor again.
///
/// # Errors
///
/// Returns [`NumfieldError::Io`] on the first step that fails.
pub fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
