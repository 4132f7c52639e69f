//! Terminal User Interface hosting the numeric field.
//!
//! Provides a Ratatui-based TUI that shows a heading and one numeric
//! field, driven by a synchronous crossterm event loop.

pub mod app;
pub mod components;
pub mod event;
pub mod input;
pub mod terminal;
pub mod ui;

pub use app::App;
pub use event::{Action, Event, read_event, update};
pub use terminal::{Tui, restore_terminal, setup_terminal};
pub use ui::render;
