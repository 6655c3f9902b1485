//! Terminal User Interface (TUI) for the focus timer.
//!
//! Owns the only scheduling primitive in the program: a 1-second tick
//! that advances the countdown while it is running. Built with ratatui
//! and crossterm.

mod app;
mod event;
mod ui;

pub use app::App;

use std::io;
use std::time::{Duration, Instant};

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use crate::engine::{FocusTimer, Notifier};
use crate::error::TomataError;
use crate::history::HistoryStore;

/// One decrement per elapsed second.
const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Run the timer TUI.
///
/// # Errors
///
/// Returns an error if the terminal fails to initialize or the event
/// loop fails.
pub fn run(
    timer: FocusTimer,
    notifier: Box<dyn Notifier>,
    store: HistoryStore,
) -> Result<(), TomataError> {
    // Setup terminal
    enable_raw_mode().map_err(|e| TomataError::Config(format!("Failed to enable raw mode: {e}")))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(|e| TomataError::Config(format!("Failed to setup terminal: {e}")))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)
        .map_err(|e| TomataError::Config(format!("Failed to create terminal: {e}")))?;

    // Create app state and run main loop
    let mut app = App::new(timer, notifier, store);
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    result
}

/// Run the main application loop.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), TomataError> {
    let mut last_tick = Instant::now();

    loop {
        // Draw UI
        terminal
            .draw(|frame| ui::render(frame, app))
            .map_err(|e| TomataError::Config(format!("Failed to draw: {e}")))?;

        // Handle events
        if let Some(action) = event::handle_events(app)? {
            match action {
                event::Action::Quit => app.quit(),
                event::Action::Toggle => app.toggle(),
                event::Action::Reset => app.reset(),
                event::Action::Skip => app.skip(),
            }
        }

        if app.should_quit {
            break;
        }

        // Tick once per elapsed second, only while running. While paused
        // the anchor keeps moving, so resuming never replays paused time.
        if app.timer().is_running() {
            if last_tick.elapsed() >= TICK_INTERVAL {
                app.on_tick();
                last_tick = Instant::now();
            }
        } else {
            last_tick = Instant::now();
        }
    }

    Ok(())
}
