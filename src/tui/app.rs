//! Application state for the TUI.

use tracing::debug;

use crate::config::FieldConfig;
use crate::error::ValidationError;

use super::input::NumericInput;

/// Central application state container.
pub struct App {
    /// Label rendered above the field.
    pub heading: String,
    /// The numeric field.
    pub field: NumericInput,
    /// Current input mode.
    pub mode: Mode,
    /// Flag to signal application should quit.
    pub should_quit: bool,
}

impl App {
    /// Creates an App with an empty, unfocused field.
    pub fn new(heading: impl Into<String>, field: FieldConfig) -> Self {
        Self {
            heading: heading.into(),
            field: NumericInput::new(field),
            mode: Mode::Normal,
            should_quit: false,
        }
    }

    /// Gives the field focus and starts editing.
    pub fn focus_field(&mut self) {
        if self.mode != Mode::Insert {
            self.mode = Mode::Insert;
            self.field.on_focus();
        }
    }

    /// Takes focus away from the field, committing its text.
    ///
    /// Returns `None` when the field was not focused.
    pub fn blur_field(&mut self) -> Option<Result<f64, ValidationError>> {
        if self.mode != Mode::Insert {
            return None;
        }
        self.mode = Mode::Normal;
        let outcome = self.field.on_blur();
        debug!(?outcome, "field blurred");
        Some(outcome)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_HEADING, FieldConfig::default())
    }
}

/// Input mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    /// Field unfocused; keys drive the app.
    #[default]
    Normal,
    /// Field focused; keys edit the text.
    Insert,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_and_blur_follow_mode() {
        let mut app = App::default();
        assert_eq!(app.blur_field(), None);

        app.focus_field();
        assert_eq!(app.mode, Mode::Insert);
        assert!(app.field.is_focused());

        app.field.on_change("77");
        assert_eq!(app.blur_field(), Some(Ok(77.0)));
        assert_eq!(app.mode, Mode::Normal);
        assert!(!app.field.is_focused());
    }

    #[test]
    fn refocusing_does_not_touch_text() {
        let mut app = App::default();
        app.focus_field();
        app.field.on_change("5");
        app.focus_field();
        assert_eq!(app.field.as_str(), "5");
    }
}
