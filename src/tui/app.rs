//! Application state for the timer TUI.
//!
//! `App` wires the pure timer to its side effects: the completion
//! notifier and the session history. The run loop owns the clock and
//! calls `on_tick` once per elapsed second while the timer runs.

use chrono::{DateTime, Duration, Utc};

use crate::engine::{FocusTimer, Notifier, SessionKind, Transition};
use crate::history::{HistoryStore, SessionRecord};

/// Application state.
pub struct App {
    /// The countdown state machine.
    timer: FocusTimer,
    /// Completion signal sink.
    notifier: Box<dyn Notifier>,
    /// Session history.
    store: HistoryStore,
    /// When the current period first started running.
    period_started_at: Option<DateTime<Utc>>,
    /// Status message to display.
    pub status: Option<String>,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl App {
    /// Create a new app instance.
    #[must_use]
    pub fn new(timer: FocusTimer, notifier: Box<dyn Notifier>, store: HistoryStore) -> Self {
        Self {
            timer,
            notifier,
            store,
            period_started_at: None,
            status: Some("Press space to start, ? for help".to_string()),
            should_quit: false,
        }
    }

    /// The timer, for rendering and tick scheduling.
    #[must_use]
    pub const fn timer(&self) -> &FocusTimer {
        &self.timer
    }

    /// Start or pause the countdown.
    pub fn toggle(&mut self) {
        let was_running = self.timer.is_running();
        self.timer.toggle();

        if self.timer.is_running() {
            if self.period_started_at.is_none() {
                self.period_started_at = Some(Utc::now());
            }
            self.status = Some(format!("{} running", self.timer.kind()));
        } else if was_running {
            self.status = Some("Paused".to_string());
        }
    }

    /// Advance the countdown by one second.
    pub fn on_tick(&mut self) {
        if let Some(transition) = self.timer.tick() {
            let duration = i64::from(self.timer.config().duration_of(transition.finished));
            self.finish_period(transition, duration);
        }
    }

    /// Restore the current period to its full duration.
    ///
    /// A work period reset after some progress counts as abandoned.
    pub fn reset(&mut self) {
        self.abandon_current();
        self.timer.reset();
        self.period_started_at = None;
        self.status = Some(format!("{} reset", self.timer.kind()));
    }

    /// End the current period immediately.
    pub fn skip(&mut self) {
        let elapsed = i64::from(self.timer.elapsed_seconds());
        let transition = self.timer.skip();
        self.finish_period(transition, elapsed);
    }

    /// Quit, abandoning any in-progress work period.
    pub fn quit(&mut self) {
        self.abandon_current();
        self.should_quit = true;
    }

    /// Handle a completed period: signal once, record once.
    fn finish_period(&mut self, transition: Transition, duration_seconds: i64) {
        self.notifier
            .period_complete(transition.finished, transition.next);

        let ended_at = Utc::now();
        let started_at = self
            .period_started_at
            .take()
            .unwrap_or_else(|| ended_at - Duration::seconds(duration_seconds));

        let mut record = SessionRecord::new(
            transition.finished,
            started_at,
            ended_at,
            duration_seconds,
            true,
        );

        if let Err(e) = self.store.insert(&mut record) {
            self.status = Some(format!("History error: {e}"));
        } else {
            self.status = Some(format!(
                "{} complete. Up next: {} (space to start)",
                transition.finished, transition.next
            ));
        }
    }

    /// Record an in-progress work period as abandoned.
    ///
    /// Breaks are not worth recording when cut short.
    fn abandon_current(&mut self) {
        let elapsed = i64::from(self.timer.elapsed_seconds());
        if self.timer.kind() != SessionKind::Work || elapsed == 0 {
            return;
        }

        let ended_at = Utc::now();
        let started_at = self
            .period_started_at
            .take()
            .unwrap_or_else(|| ended_at - Duration::seconds(elapsed));

        let mut record =
            SessionRecord::new(SessionKind::Work, started_at, ended_at, elapsed, false);

        if let Err(e) = self.store.insert(&mut record) {
            self.status = Some(format!("History error: {e}"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::notify::MockNotifier;
    use crate::engine::TimerConfig;
    use crate::storage::Database;

    fn test_store() -> HistoryStore {
        HistoryStore::with_database(Database::open_in_memory().unwrap())
    }

    fn short_timer() -> FocusTimer {
        FocusTimer::new(TimerConfig::new(3, 2, 4, 4))
    }

    fn app_expecting_signals(times: usize) -> App {
        let mut mock = MockNotifier::new();
        mock.expect_period_complete().times(times).return_const(());
        App::new(short_timer(), Box::new(mock), test_store())
    }

    #[test]
    fn test_run_out_signals_once_and_records() {
        let mut app = app_expecting_signals(1);

        app.toggle();
        for _ in 0..3 {
            app.on_tick();
        }

        // Transition fired: paused on a short break, one recorded work period
        assert!(!app.timer().is_running());
        assert_eq!(app.timer().kind(), SessionKind::ShortBreak);

        let records = app.store.recent(10).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].kind, SessionKind::Work);
        assert!(records[0].completed);
        assert_eq!(records[0].duration_seconds, 3);
    }

    #[test]
    fn test_ticks_after_transition_do_nothing() {
        let mut app = app_expecting_signals(1);

        app.toggle();
        for _ in 0..10 {
            app.on_tick();
        }

        assert_eq!(app.store.recent(10).unwrap().len(), 1);
    }

    #[test]
    fn test_skip_signals_and_records_elapsed() {
        let mut app = app_expecting_signals(1);

        app.toggle();
        app.on_tick();
        app.skip();

        let records = app.store.recent(10).unwrap();
        assert_eq!(records.len(), 1);
        assert!(records[0].completed);
        assert_eq!(records[0].duration_seconds, 1);
    }

    #[test]
    fn test_reset_records_abandoned_work() {
        let mut app = app_expecting_signals(0);

        app.toggle();
        app.on_tick();
        app.reset();

        assert_eq!(app.timer().remaining_seconds(), 3);
        assert!(!app.timer().is_running());

        let records = app.store.recent(10).unwrap();
        assert_eq!(records.len(), 1);
        assert!(!records[0].completed);
        assert_eq!(records[0].duration_seconds, 1);
    }

    #[test]
    fn test_quit_without_progress_records_nothing() {
        let mut app = app_expecting_signals(0);

        app.quit();

        assert!(app.should_quit);
        assert!(app.store.recent(10).unwrap().is_empty());
    }

    #[test]
    fn test_quit_mid_work_records_abandoned() {
        let mut app = app_expecting_signals(0);

        app.toggle();
        app.on_tick();
        app.on_tick();
        app.quit();

        let records = app.store.recent(10).unwrap();
        assert_eq!(records.len(), 1);
        assert!(!records[0].completed);
        assert_eq!(records[0].duration_seconds, 2);
    }

    #[test]
    fn test_toggle_pauses_without_recording() {
        let mut app = app_expecting_signals(0);

        app.toggle();
        app.on_tick();
        app.toggle();

        assert!(!app.timer().is_running());
        assert!(app.store.recent(10).unwrap().is_empty());

        // Paused: ticks must not advance the countdown
        app.on_tick();
        assert_eq!(app.timer().remaining_seconds(), 2);
    }
}
