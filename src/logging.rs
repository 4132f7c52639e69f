//! Tracing subscriber setup for the binary.
//!
//! The TUI owns the terminal, so log output only goes to a file.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing::Level;

/// Installs a global fmt subscriber appending to `path`.
///
/// Does nothing when `path` is `None`.
///
/// # Errors
///
/// Returns [`NumfieldError::Io`](crate::NumfieldError::Io) if the file
/// cannot be opened or a global subscriber is already installed.
pub fn init_tracing(path: Option<&Path>) -> crate::Result<()> {
    let Some(path) = path else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| crate::NumfieldError::Io(format!("failed to open {}: {e}", path.display())))?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(Level::DEBUG)
        .try_init()
        .map_err(|e| crate::NumfieldError::Io(format!("failed to install tracing subscriber: {e}")))
}
