//! Event handling for the timer TUI.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyModifiers};

use crate::error::TomataError;
use crate::tui::app::App;

/// Action to take after handling an event.
pub enum Action {
    /// Quit the application.
    Quit,
    /// Start or pause the countdown.
    Toggle,
    /// Reset the current period.
    Reset,
    /// Skip to the next period.
    Skip,
}

/// Handle terminal events.
///
/// Polls with a sub-second timeout so the run loop can observe second
/// boundaries between key presses.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn handle_events(app: &mut App) -> Result<Option<Action>, TomataError> {
    if event::poll(Duration::from_millis(100))
        .map_err(|e| TomataError::Config(format!("Event poll failed: {e}")))?
    {
        if let Event::Key(key) =
            event::read().map_err(|e| TomataError::Config(format!("Event read failed: {e}")))?
        {
            // Handle Ctrl+C
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                return Ok(Some(Action::Quit));
            }

            match key.code {
                // Quit
                KeyCode::Char('q') | KeyCode::Esc => {
                    return Ok(Some(Action::Quit));
                }

                // Start / pause
                KeyCode::Char(' ') | KeyCode::Enter => {
                    return Ok(Some(Action::Toggle));
                }

                // Reset current period
                KeyCode::Char('r') => {
                    return Ok(Some(Action::Reset));
                }

                // Skip to next period
                KeyCode::Char('s') => {
                    return Ok(Some(Action::Skip));
                }

                // Help
                KeyCode::Char('?') => {
                    app.status = Some(
                        "space:start/pause | r:reset | s:skip | q:quit".to_string(),
                    );
                }

                _ => {}
            }
        }
    }

    Ok(None)
}
