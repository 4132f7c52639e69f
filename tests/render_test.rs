//! Rendering tests against Ratatui's test backend.

mod common;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use numfield::tui::components::numeric_field;
use numfield::tui::{App, Event, render, update};
use numfield::{FieldConfig, NumericInput};
use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

use common::{field, row_text, typed};

fn draw_field(input: &NumericInput) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(40, 4)).expect("test terminal");
    terminal
        .draw(|frame| numeric_field::render(frame, frame.area(), input))
        .expect("draw");
    terminal.backend().buffer().clone()
}

#[test]
fn test_placeholder_sits_inside_empty_unfocused_field() {
    let buffer = draw_field(&field());
    assert!(!row_text(&buffer, 0).contains("Enter a number"));
    assert!(row_text(&buffer, 1).contains("Enter a number"));
}

#[test]
fn test_placeholder_floats_when_focused() {
    let mut input = field();
    input.on_focus();
    let buffer = draw_field(&input);
    assert!(row_text(&buffer, 0).contains("Enter a number"));
    assert!(!row_text(&buffer, 1).contains("Enter a number"));
}

#[test]
fn test_committed_value_and_error_are_shown() {
    let mut input = typed("150000");
    input.on_blur().unwrap_err();
    let buffer = draw_field(&input);

    assert!(row_text(&buffer, 0).contains("Enter a number"));
    assert!(row_text(&buffer, 1).contains("100 000"));
    assert!(row_text(&buffer, 3).contains("value must be between -100000 and 100000"));
}

#[test]
fn test_no_error_line_after_valid_commit() {
    let mut input = typed("42");
    input.on_blur().unwrap();
    let buffer = draw_field(&input);
    assert!(row_text(&buffer, 1).contains("42"));
    assert_eq!(row_text(&buffer, 3).trim(), "");
}

#[test]
fn test_field_grows_with_content() {
    let mut input = NumericInput::new(FieldConfig::new(0, i64::MAX, "n").unwrap());
    input.on_change("1234567890123456789");
    let buffer = draw_field(&input);
    let row = row_text(&buffer, 1);
    assert!(row.contains("1234567890123456789"), "{row}");
}

#[test]
fn test_app_renders_heading_and_help() {
    let mut app = App::default();
    update(
        &mut app,
        Event::Key(KeyEvent::new(KeyCode::Char('i'), KeyModifiers::NONE)),
    );

    let mut terminal = Terminal::new(TestBackend::new(60, 10)).expect("test terminal");
    terminal.draw(|frame| render(frame, &app)).expect("draw");
    let buffer = terminal.backend().buffer();

    assert!(row_text(buffer, 0).contains("Enter a number"));
    assert!(row_text(buffer, 9).contains("commit"));
}
