//! Main UI rendering coordinator.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::Paragraph,
};

use super::app::{App, Mode};
use super::components::numeric_field::{self, FIELD_HEIGHT};

/// Renders the entire application UI.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),            // Heading
            Constraint::Length(1),            // Spacer
            Constraint::Length(FIELD_HEIGHT), // Field and error line
            Constraint::Min(0),
            Constraint::Length(1), // Keybindings help
        ])
        .split(area);

    let heading = Paragraph::new(app.heading.as_str()).alignment(Alignment::Center);
    frame.render_widget(heading, main_layout[0]);

    numeric_field::render(frame, main_layout[2], &app.field);

    render_keybindings(frame, main_layout[4], app);
}

/// Renders the keybindings help line.
fn render_keybindings(frame: &mut Frame, area: Rect, app: &App) {
    let help = match app.mode {
        Mode::Insert => "[0-9 -]type [Enter/Esc/Tab]commit [Ctrl-C]quit",
        Mode::Normal => "[i/Enter]edit [q]quit",
    };

    let para = Paragraph::new(help).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(para, area);
}
