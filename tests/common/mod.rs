//! Shared test utilities.

#![allow(dead_code)]

use numfield::{FieldConfig, NumericInput};
use ratatui::buffer::Buffer;

/// Lower bound used by the host application.
pub const MIN: i64 = -100_000;

/// Upper bound used by the host application.
pub const MAX: i64 = 100_000;

/// A field configured like the host application's.
pub fn field() -> NumericInput {
    NumericInput::new(FieldConfig::new(MIN, MAX, "Enter a number").expect("valid bounds"))
}

/// A field after typing `text` one keystroke at a time.
pub fn typed(text: &str) -> NumericInput {
    let mut input = field();
    for c in text.chars() {
        input.insert(c);
    }
    input
}

/// Collects the symbols of one buffer row into a string.
pub fn row_text(buffer: &Buffer, y: u16) -> String {
    (0..buffer.area.width)
        .map(|x| buffer[(x, y)].symbol())
        .collect()
}
