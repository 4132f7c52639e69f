use std::time::Duration;

use numfield::NumfieldError;
use numfield::config::fetch_config;
use numfield::logging::init_tracing;
use numfield::tui::{Action, App, Tui, read_event, render, restore_terminal, setup_terminal, update};
use tracing::info;

/// How long to wait for input before redrawing anyway.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

fn main() -> Result<(), NumfieldError> {
    let config = fetch_config()?;
    init_tracing(config.log_file.as_deref())?;

    info!(
        min = config.field.min(),
        max = config.field.max(),
        placeholder = config.field.placeholder(),
        "starting numfield"
    );

    let mut app = App::new(config.heading, config.field);
    let mut terminal = setup_terminal()?;
    let result = run(&mut terminal, &mut app);
    restore_terminal(&mut terminal)?;

    info!(value = ?app.field.value(), "numfield exited");
    result
}

fn run(terminal: &mut Tui, app: &mut App) -> Result<(), NumfieldError> {
    while !app.should_quit {
        terminal.draw(|frame| render(frame, app))?;

        if let Some(event) = read_event(POLL_INTERVAL)?
            && let Some(Action::Committed(outcome)) = update(app, event)
        {
            match outcome {
                Ok(value) => info!(value, "value committed"),
                Err(err) => info!(%err, shown = app.field.as_str(), "value replaced"),
            }
        }
    }
    Ok(())
}
