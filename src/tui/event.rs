//! Event handling for the TUI.

use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::error::ValidationError;

use super::app::{App, Mode};

/// Events that can occur in the application.
#[derive(Debug)]
pub enum Event {
    /// A key was pressed.
    Key(KeyEvent),
    /// Terminal was resized.
    Resize(u16, u16),
}

/// Outcomes the caller may want to report.
#[derive(Debug, PartialEq)]
pub enum Action {
    /// The field lost focus and committed its text.
    Committed(Result<f64, ValidationError>),
}

/// Waits up to `timeout` for the next relevant terminal event.
///
/// Key releases and repeats, mouse, focus, and paste events are skipped.
///
/// # Errors
///
/// Returns [`NumfieldError::Io`](crate::NumfieldError::Io) if polling or
/// reading the terminal fails.
pub fn read_event(timeout: Duration) -> crate::Result<Option<Event>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }
    Ok(match event::read()? {
        CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Some(Event::Key(key)),
        CrosstermEvent::Resize(w, h) => Some(Event::Resize(w, h)),
        _ => None,
    })
}

/// Updates application state based on an event.
pub fn update(app: &mut App, event: Event) -> Option<Action> {
    match event {
        Event::Key(key) => handle_key(app, key),
        Event::Resize(_, _) => None,
    }
}

/// Handles key press events.
fn handle_key(app: &mut App, key: KeyEvent) -> Option<Action> {
    // Global keys (work in any mode)
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return None;
    }

    match app.mode {
        Mode::Normal => handle_normal_mode(app, key),
        Mode::Insert => handle_insert_mode(app, key),
    }
}

/// Handles keys in normal mode.
fn handle_normal_mode(app: &mut App, key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Char('q') if key.modifiers.is_empty() => {
            app.should_quit = true;
        }
        KeyCode::Char('i') | KeyCode::Enter | KeyCode::Tab => {
            app.focus_field();
        }
        _ => {}
    }
    None
}

/// Handles keys in insert mode (field focused).
fn handle_insert_mode(app: &mut App, key: KeyEvent) -> Option<Action> {
    if matches!(
        key.code,
        KeyCode::Enter | KeyCode::Esc | KeyCode::Tab | KeyCode::BackTab
    ) {
        return app.blur_field().map(Action::Committed);
    }

    let field = &mut app.field;
    match key.code {
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            field.insert(c);
        }
        KeyCode::Backspace => {
            field.backspace();
        }
        KeyCode::Delete => {
            field.delete();
        }
        KeyCode::Left => field.move_left(),
        KeyCode::Right => field.move_right(),
        KeyCode::Home => field.move_home(),
        KeyCode::End => field.move_end(),
        _ => {}
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(app: &mut App, code: KeyCode) -> Option<Action> {
        update(app, Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn typing_in_normal_mode_is_ignored() {
        let mut app = App::default();
        type_text(&mut app, "12");
        assert_eq!(app.field.as_str(), "");
        assert_eq!(app.mode, Mode::Normal);
    }

    #[test]
    fn enter_focuses_then_commits() {
        let mut app = App::default();
        press(&mut app, KeyCode::Enter);
        assert!(app.field.is_focused());

        type_text(&mut app, "150000");
        let action = press(&mut app, KeyCode::Enter);
        assert_eq!(
            action,
            Some(Action::Committed(Err(ValidationError::OutOfRange {
                min: -100000,
                max: 100000
            })))
        );
        assert_eq!(app.field.as_str(), "100 000");
    }

    #[test]
    fn tab_focuses_and_blurs() {
        let mut app = App::default();
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.mode, Mode::Insert);
        type_text(&mut app, "42");
        assert_eq!(press(&mut app, KeyCode::Tab), Some(Action::Committed(Ok(42.0))));
        assert_eq!(app.mode, Mode::Normal);
    }

    #[test]
    fn q_types_nothing_and_quits_only_in_normal_mode() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('i'));
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        assert_eq!(app.field.as_str(), "");

        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn ctrl_c_quits_while_editing() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('i'));
        update(
            &mut app,
            Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        );
        assert!(app.should_quit);
    }

    #[test]
    fn editing_keys_reach_the_field() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('i'));
        type_text(&mut app, "1234");
        press(&mut app, KeyCode::Home);
        press(&mut app, KeyCode::Delete);
        press(&mut app, KeyCode::End);
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Char('-'));
        assert_eq!(app.field.as_str(), "23");
        press(&mut app, KeyCode::Right);
        assert_eq!(app.field.cursor(), 2);
    }
}
