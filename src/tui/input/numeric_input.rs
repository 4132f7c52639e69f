//! Numeric input field state and event handling.
//!
//! The field only ever holds an optional minus followed by digits while the
//! user types. Committing (losing focus) parses, validates, clamps, and
//! reformats the text, recording a [`ValidationError`] when the value had to
//! be replaced.

use tracing::{debug, trace};
use unicode_width::UnicodeWidthStr;

use crate::config::FieldConfig;
use crate::error::ValidationError;
use crate::format::{format_number, is_accepted, parse_number, strip_whitespace};

/// Narrowest the field is ever drawn, in terminal cells.
pub const MIN_WIDTH: u16 = 20;

/// Cells added around the measured text (borders and margins).
pub const WIDTH_PADDING: u16 = 4;

/// Text measured in place of an empty buffer.
const EMPTY_MEASURE: &str = "0";

/// Validity state of the field. Focus is tracked separately.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FieldState {
    /// Nothing typed or committed yet.
    #[default]
    Empty,
    /// The last change was an accepted keystroke.
    Typing,
    /// The last commit succeeded.
    CommittedValid,
    /// The last commit replaced the text and recorded an error.
    CommittedError,
}

/// State for a numeric input field.
#[derive(Clone, Debug)]
pub struct NumericInput {
    config: FieldConfig,
    buffer: String,
    /// Cursor position (character index).
    cursor: usize,
    error: Option<ValidationError>,
    focused: bool,
    width: u16,
    state: FieldState,
}

impl NumericInput {
    /// Creates an empty, unfocused field.
    pub fn new(config: FieldConfig) -> Self {
        let mut input = Self {
            config,
            buffer: String::new(),
            cursor: 0,
            error: None,
            focused: false,
            width: MIN_WIDTH,
            state: FieldState::Empty,
        };
        input.update_width();
        input
    }

    /// Replaces the text with `raw` once whitespace is stripped, if the
    /// result is a valid in-progress number.
    ///
    /// An accepted change clears any error. A rejected one leaves everything
    /// untouched and is not an error. Returns whether the change was accepted.
    pub fn on_change(&mut self, raw: &str) -> bool {
        self.apply_edit(raw.to_string(), raw.chars().count())
    }

    /// Marks the field focused.
    pub fn on_focus(&mut self) {
        trace!("numeric field focused");
        self.focused = true;
    }

    /// Unfocuses and commits the field.
    ///
    /// The text is replaced with the formatted committed value: the parsed
    /// number, the number clamped into range, or the minimum when nothing
    /// parsed.
    ///
    /// # Errors
    ///
    /// Returns (and records) [`ValidationError::NotANumber`] if the text does
    /// not parse, or [`ValidationError::OutOfRange`] if it falls outside the
    /// bounds. Both are already recovered when returned.
    pub fn on_blur(&mut self) -> Result<f64, ValidationError> {
        self.focused = false;

        let min = self.config.min();
        let max = self.config.max();
        let (lower, upper) = (min as f64, max as f64);
        let text = strip_whitespace(&self.buffer);

        let (value, outcome) = match parse_number(&text) {
            None => (lower, Err(ValidationError::NotANumber)),
            Some(v) if v < lower || v > upper => (
                v.clamp(lower, upper),
                Err(ValidationError::OutOfRange { min, max }),
            ),
            Some(v) => (v, Ok(v)),
        };

        self.set_buffer(format_number(value));
        self.error = outcome.err();
        self.state = if self.error.is_some() {
            FieldState::CommittedError
        } else {
            FieldState::CommittedValid
        };

        debug!(input = %text, committed = %self.buffer, error = ?self.error, "numeric field committed");
        outcome
    }

    /// Inserts a character at the cursor position.
    pub fn insert(&mut self, c: char) -> bool {
        let mut candidate = self.buffer.clone();
        candidate.insert(self.byte_offset(self.cursor), c);
        self.apply_edit(candidate, self.cursor + 1)
    }

    /// Deletes the character before the cursor (backspace).
    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let mut candidate = self.buffer.clone();
        candidate.remove(self.byte_offset(self.cursor - 1));
        self.apply_edit(candidate, self.cursor - 1)
    }

    /// Deletes the character at the cursor position (delete).
    pub fn delete(&mut self) -> bool {
        if self.cursor >= self.char_len() {
            return false;
        }
        let mut candidate = self.buffer.clone();
        candidate.remove(self.byte_offset(self.cursor));
        self.apply_edit(candidate, self.cursor)
    }

    /// Moves the cursor left.
    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Moves the cursor right.
    pub fn move_right(&mut self) {
        if self.cursor < self.char_len() {
            self.cursor += 1;
        }
    }

    /// Moves the cursor to the beginning.
    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    /// Moves the cursor to the end.
    pub fn move_end(&mut self) {
        self.cursor = self.char_len();
    }

    /// Returns the current text.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Returns whether the text is empty.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Numeric value of the current text, if it parses.
    pub fn value(&self) -> Option<f64> {
        parse_number(&strip_whitespace(&self.buffer))
    }

    /// Cursor position (character index).
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Error recorded by the last commit, if it has not been typed over.
    pub fn error(&self) -> Option<ValidationError> {
        self.error
    }

    /// Whether the field has focus.
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Whether the label sits above the text rather than in its place.
    pub fn is_label_floating(&self) -> bool {
        self.focused || !self.is_empty()
    }

    /// Width the field should be drawn at, in terminal cells.
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Current validity state.
    pub fn state(&self) -> FieldState {
        self.state
    }

    /// The configuration this field was built with.
    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    /// Strips whitespace from `candidate` and adopts it if acceptable.
    ///
    /// `cursor` is a character index into `candidate`; it is shifted left by
    /// the whitespace removed before it.
    fn apply_edit(&mut self, candidate: String, cursor: usize) -> bool {
        let text = strip_whitespace(&candidate);
        if !is_accepted(&text) {
            trace!(candidate = %candidate, "keystroke rejected");
            return false;
        }

        let cursor = candidate
            .chars()
            .take(cursor)
            .filter(|c| !c.is_whitespace())
            .count();

        trace!(text = %text, "keystroke accepted");
        self.set_buffer(text);
        self.cursor = cursor;
        self.error = None;
        self.state = FieldState::Typing;
        true
    }

    /// Replaces the text, parks the cursor at its end, and resizes.
    fn set_buffer(&mut self, text: String) {
        self.buffer = text;
        self.cursor = self.char_len();
        self.update_width();
    }

    fn update_width(&mut self) {
        let shown = if self.is_empty() {
            EMPTY_MEASURE
        } else {
            self.buffer.as_str()
        };
        let measured = u16::try_from(shown.width()).unwrap_or(u16::MAX);
        self.width = measured.saturating_add(WIDTH_PADDING).max(MIN_WIDTH);
    }

    fn char_len(&self) -> usize {
        self.buffer.chars().count()
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.buffer
            .char_indices()
            .nth(char_index)
            .map_or(self.buffer.len(), |(i, _)| i)
    }
}
