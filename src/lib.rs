//! Numeric text field for terminal UIs.
//!
//! A single widget: numeric input with a floating placeholder label,
//! thousands-separator formatting, and range validation on commit, plus the
//! small Ratatui host that renders it.

pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod tui;

pub use config::{AppConfig, FieldConfig};
pub use error::{NumfieldError, Result, ValidationError};
pub use tui::input::{FieldState, NumericInput};
