//! Numeric field component.
//!
//! Draws the field box at its measured width, centered in `area`, with the
//! error line (if any) below it. `area` should be at least
//! [`FIELD_HEIGHT`] rows tall.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::tui::input::NumericInput;

/// Rows used by the box (3) plus the error line (1).
pub const FIELD_HEIGHT: u16 = 4;

/// Label and border color while focused.
const ACCENT: Color = Color::Rgb(0x76, 0x88, 0xf0);

/// Label color while unfocused.
const MUTED: Color = Color::Rgb(0xaa, 0xaa, 0xaa);

/// Renders the field.
pub fn render(frame: &mut Frame, area: Rect, input: &NumericInput) {
    let width = input.width().min(area.width);
    let box_area = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y,
        width,
        height: area.height.min(3),
    };

    let (border_color, label_color) = if input.is_focused() {
        (ACCENT, ACCENT)
    } else {
        (Color::DarkGray, MUTED)
    };

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .padding(Padding::horizontal(1));

    let placeholder = input.config().placeholder();
    let body = if input.is_label_floating() {
        block = block.title(Span::styled(
            format!(" {placeholder} "),
            Style::default().fg(label_color).add_modifier(Modifier::DIM),
        ));
        Line::from(input.as_str())
    } else {
        Line::from(Span::styled(placeholder, Style::default().fg(label_color)))
    };

    let inner = block.inner(box_area);
    frame.render_widget(block, box_area);
    frame.render_widget(Paragraph::new(body), inner);

    if input.is_focused() {
        let before: String = input.as_str().chars().take(input.cursor()).collect();
        let offset = u16::try_from(before.width()).unwrap_or(u16::MAX);
        let cursor_x = inner.x.saturating_add(offset).min(box_area.right().saturating_sub(1));
        frame.set_cursor_position((cursor_x, inner.y));
    }

    if let Some(error) = input.error()
        && area.height > 3
    {
        let error_area = Rect {
            y: area.y + 3,
            height: 1,
            ..area
        };
        let para = Paragraph::new(error.to_string())
            .style(Style::default().fg(Color::Red))
            .alignment(Alignment::Center);
        frame.render_widget(para, error_area);
    }
}
