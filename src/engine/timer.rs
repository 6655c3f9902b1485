//! The countdown state machine.
//!
//! [`FocusTimer`] owns the Pomodoro cadence: work periods alternate with
//! short breaks, and every Nth completed work period earns a long break.
//! The timer is pure state; scheduling the 1-second ticks and reacting to
//! completed periods belongs to the caller (see `crate::tui`).

use super::session::SessionKind;

/// Timer durations and cadence, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerConfig {
    /// Work period length in seconds.
    pub work_seconds: u32,
    /// Short break length in seconds.
    pub short_break_seconds: u32,
    /// Long break length in seconds.
    pub long_break_seconds: u32,
    /// Completed work periods between long breaks.
    pub sessions_before_long_break: u32,
}

impl TimerConfig {
    /// Create a config, validating all values are positive.
    ///
    /// # Panics
    ///
    /// Panics if any duration or the session threshold is zero. A zero
    /// duration is a programming error, not a recoverable condition.
    #[must_use]
    pub fn new(
        work_seconds: u32,
        short_break_seconds: u32,
        long_break_seconds: u32,
        sessions_before_long_break: u32,
    ) -> Self {
        assert!(work_seconds > 0, "work duration must be positive");
        assert!(short_break_seconds > 0, "short break duration must be positive");
        assert!(long_break_seconds > 0, "long break duration must be positive");
        assert!(
            sessions_before_long_break > 0,
            "sessions before long break must be positive"
        );

        Self {
            work_seconds,
            short_break_seconds,
            long_break_seconds,
            sessions_before_long_break,
        }
    }

    /// Get the full duration for a session kind, in seconds.
    #[must_use]
    pub const fn duration_of(&self, kind: SessionKind) -> u32 {
        match kind {
            SessionKind::Work => self.work_seconds,
            SessionKind::ShortBreak => self.short_break_seconds,
            SessionKind::LongBreak => self.long_break_seconds,
        }
    }
}

impl Default for TimerConfig {
    /// Classic Pomodoro cadence: 25/5/15 minutes, long break every 4th.
    fn default() -> Self {
        Self::new(25 * 60, 5 * 60, 15 * 60, 4)
    }
}

/// A completed period transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// The period that just ended.
    pub finished: SessionKind,
    /// The period now loaded (not running until started).
    pub next: SessionKind,
}

/// The Pomodoro countdown state machine.
#[derive(Debug, Clone)]
pub struct FocusTimer {
    config: TimerConfig,
    kind: SessionKind,
    remaining_seconds: u32,
    running: bool,
    completed_work_sessions: u32,
}

impl FocusTimer {
    /// Create a new timer: a full, paused work period.
    #[must_use]
    pub const fn new(config: TimerConfig) -> Self {
        Self {
            kind: SessionKind::Work,
            remaining_seconds: config.work_seconds,
            running: false,
            completed_work_sessions: 0,
            config,
        }
    }

    /// Start (or resume) the countdown.
    ///
    /// No-op when the period is already at zero; the transition logic owns
    /// that boundary, never a decrement below it.
    pub fn start(&mut self) {
        if self.remaining_seconds > 0 {
            self.running = true;
        }
    }

    /// Pause the countdown. Idempotent.
    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Flip between running and paused.
    pub fn toggle(&mut self) {
        if self.running {
            self.pause();
        } else {
            self.start();
        }
    }

    /// Restore the current period to its full duration, paused.
    ///
    /// The session kind and the completed-work count are left untouched;
    /// resetting a period does not un-complete earlier ones.
    pub fn reset(&mut self) {
        self.running = false;
        self.remaining_seconds = self.config.duration_of(self.kind);
    }

    /// End the current period immediately, as if it counted down to zero.
    pub fn skip(&mut self) -> Transition {
        self.advance()
    }

    /// Advance the countdown by one second.
    ///
    /// Only decrements while running; returns the transition when this tick
    /// finished the period. Ticks at zero are a no-op, so a transition can
    /// never fire twice for the same period.
    pub fn tick(&mut self) -> Option<Transition> {
        if !self.running || self.remaining_seconds == 0 {
            return None;
        }

        self.remaining_seconds -= 1;
        if self.remaining_seconds == 0 {
            Some(self.advance())
        } else {
            None
        }
    }

    /// The single transition function.
    ///
    /// Work earns a break (long every Nth completion), breaks lead back to
    /// work. The next period is loaded full and paused; the user starts it
    /// explicitly.
    fn advance(&mut self) -> Transition {
        let finished = self.kind;

        if finished == SessionKind::Work {
            self.completed_work_sessions += 1;
        }

        let next = match finished {
            SessionKind::Work => {
                if self.completed_work_sessions % self.config.sessions_before_long_break == 0 {
                    SessionKind::LongBreak
                } else {
                    SessionKind::ShortBreak
                }
            }
            SessionKind::ShortBreak | SessionKind::LongBreak => SessionKind::Work,
        };

        self.kind = next;
        self.remaining_seconds = self.config.duration_of(next);
        self.running = false;

        Transition { finished, next }
    }

    /// What the next transition would produce, without mutating state.
    ///
    /// Display-only projection: applies the same modulo logic as
    /// `advance`, counting the in-progress work period as completed.
    #[must_use]
    pub const fn next_kind(&self) -> SessionKind {
        match self.kind {
            SessionKind::Work => {
                if (self.completed_work_sessions + 1) % self.config.sessions_before_long_break == 0
                {
                    SessionKind::LongBreak
                } else {
                    SessionKind::ShortBreak
                }
            }
            SessionKind::ShortBreak | SessionKind::LongBreak => SessionKind::Work,
        }
    }

    /// Current session kind.
    #[must_use]
    pub const fn kind(&self) -> SessionKind {
        self.kind
    }

    /// Seconds remaining in the current period.
    #[must_use]
    pub const fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    /// Seconds elapsed in the current period.
    #[must_use]
    pub const fn elapsed_seconds(&self) -> u32 {
        self.config.duration_of(self.kind) - self.remaining_seconds
    }

    /// Whether the countdown is running.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Work periods completed so far this run.
    #[must_use]
    pub const fn completed_work_sessions(&self) -> u32 {
        self.completed_work_sessions
    }

    /// The timer's configuration.
    #[must_use]
    pub const fn config(&self) -> &TimerConfig {
        &self.config
    }

    /// Progress through the current period (0.0 - 1.0).
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress(&self) -> f64 {
        let total = self.config.duration_of(self.kind);
        1.0 - (f64::from(self.remaining_seconds) / f64::from(total))
    }

    /// Format remaining time as MM:SS.
    #[must_use]
    pub fn format_remaining(&self) -> String {
        crate::core::duration::format_mmss(self.remaining_seconds)
    }
}

impl Default for FocusTimer {
    fn default() -> Self {
        Self::new(TimerConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Second-scale durations keep the run-out tests fast.
    fn short_config() -> TimerConfig {
        TimerConfig::new(5, 2, 3, 4)
    }

    /// Run the current period down to zero, returning the transition.
    fn run_out(timer: &mut FocusTimer) -> Transition {
        timer.start();
        loop {
            if let Some(t) = timer.tick() {
                return t;
            }
        }
    }

    #[test]
    fn test_initial_state() {
        let timer = FocusTimer::default();
        assert_eq!(timer.kind(), SessionKind::Work);
        assert_eq!(timer.remaining_seconds(), 1500);
        assert!(!timer.is_running());
        assert_eq!(timer.completed_work_sessions(), 0);
    }

    #[test]
    fn test_tick_decrements_while_running() {
        let mut timer = FocusTimer::new(short_config());
        timer.start();
        assert!(timer.tick().is_none());
        assert_eq!(timer.remaining_seconds(), 4);
    }

    #[test]
    fn test_no_ticks_while_paused() {
        let mut timer = FocusTimer::new(short_config());
        timer.start();
        timer.tick();
        timer.pause();

        for _ in 0..10 {
            assert!(timer.tick().is_none());
        }
        assert_eq!(timer.remaining_seconds(), 4);
    }

    #[test]
    fn test_pause_is_idempotent() {
        let mut timer = FocusTimer::new(short_config());
        timer.pause();
        timer.pause();
        assert!(!timer.is_running());
    }

    #[test]
    fn test_toggle_flips_running() {
        let mut timer = FocusTimer::new(short_config());
        timer.toggle();
        assert!(timer.is_running());
        timer.toggle();
        assert!(!timer.is_running());
    }

    #[test]
    fn test_work_completion_counts_sessions() {
        let mut timer = FocusTimer::new(short_config());

        for n in 1..=6 {
            assert_eq!(timer.kind(), SessionKind::Work);
            run_out(&mut timer);
            assert_eq!(timer.completed_work_sessions(), n);
            if timer.kind().is_break() {
                run_out(&mut timer);
            }
        }
    }

    #[test]
    fn test_long_break_every_fourth_work_session() {
        let mut timer = FocusTimer::new(short_config());

        for n in 1..=8 {
            let t = run_out(&mut timer);
            assert_eq!(t.finished, SessionKind::Work);
            if n % 4 == 0 {
                assert_eq!(timer.kind(), SessionKind::LongBreak);
                assert_eq!(timer.remaining_seconds(), 3);
            } else {
                assert_eq!(timer.kind(), SessionKind::ShortBreak);
                assert_eq!(timer.remaining_seconds(), 2);
            }
            run_out(&mut timer);
        }
    }

    #[test]
    fn test_break_completion_returns_to_work() {
        let mut timer = FocusTimer::default();
        timer.skip();
        assert!(timer.kind().is_break());

        let t = timer.skip();
        assert_eq!(t.next, SessionKind::Work);
        assert_eq!(timer.kind(), SessionKind::Work);
        assert_eq!(timer.remaining_seconds(), 1500);
    }

    #[test]
    fn test_transition_stops_the_countdown() {
        let mut timer = FocusTimer::new(short_config());
        run_out(&mut timer);
        assert!(!timer.is_running());
        assert!(timer.tick().is_none());
    }

    #[test]
    fn test_reset_preserves_kind_and_count() {
        let mut timer = FocusTimer::new(short_config());
        timer.skip();
        timer.skip();
        assert_eq!(timer.completed_work_sessions(), 1);
        assert_eq!(timer.kind(), SessionKind::Work);

        timer.start();
        timer.tick();
        timer.tick();
        timer.reset();

        assert!(!timer.is_running());
        assert_eq!(timer.kind(), SessionKind::Work);
        assert_eq!(timer.completed_work_sessions(), 1);
        assert_eq!(timer.remaining_seconds(), 5);
    }

    #[test]
    fn test_skip_matches_natural_run_out() {
        let mut natural = FocusTimer::new(short_config());
        let mut skipped = FocusTimer::new(short_config());

        let natural_t = run_out(&mut natural);

        skipped.start();
        skipped.tick();
        let skipped_t = skipped.skip();

        assert_eq!(natural_t, skipped_t);
        assert_eq!(natural.kind(), skipped.kind());
        assert_eq!(natural.remaining_seconds(), skipped.remaining_seconds());
        assert_eq!(natural.is_running(), skipped.is_running());
        assert_eq!(
            natural.completed_work_sessions(),
            skipped.completed_work_sessions()
        );
    }

    #[test]
    fn test_four_work_sessions_earn_long_break() {
        let mut timer = FocusTimer::default();

        for _ in 0..3 {
            assert_eq!(timer.kind(), SessionKind::Work);
            timer.skip();
            assert_eq!(timer.kind(), SessionKind::ShortBreak);
            timer.skip();
        }

        assert_eq!(timer.kind(), SessionKind::Work);
        timer.skip();

        assert_eq!(timer.kind(), SessionKind::LongBreak);
        assert_eq!(timer.remaining_seconds(), 900);
        assert_eq!(timer.completed_work_sessions(), 4);
    }

    #[test]
    fn test_next_kind_from_initial_state() {
        let timer = FocusTimer::default();
        assert_eq!(timer.next_kind(), SessionKind::ShortBreak);
    }

    #[test]
    fn test_next_kind_matches_advance() {
        let mut timer = FocusTimer::new(short_config());

        for _ in 0..10 {
            let predicted = timer.next_kind();
            let t = timer.skip();
            assert_eq!(t.next, predicted);
        }
    }

    #[test]
    fn test_next_kind_does_not_mutate() {
        let timer = FocusTimer::default();
        let before = (
            timer.kind(),
            timer.remaining_seconds(),
            timer.completed_work_sessions(),
        );
        let _ = timer.next_kind();
        assert_eq!(
            before,
            (
                timer.kind(),
                timer.remaining_seconds(),
                timer.completed_work_sessions()
            )
        );
    }

    #[test]
    fn test_start_at_zero_is_noop() {
        let mut timer = FocusTimer::new(short_config());
        timer.remaining_seconds = 0;

        timer.start();
        assert!(!timer.is_running());

        timer.running = true;
        assert!(timer.tick().is_none());
        assert_eq!(timer.remaining_seconds(), 0);
        assert_eq!(timer.completed_work_sessions(), 0);
    }

    #[test]
    fn test_progress() {
        let mut timer = FocusTimer::new(TimerConfig::new(100, 2, 3, 4));
        assert!(timer.progress().abs() < f64::EPSILON);

        timer.start();
        for _ in 0..50 {
            timer.tick();
        }
        assert!((timer.progress() - 0.5).abs() < 0.01);
    }

    #[test]
    fn test_format_remaining() {
        let timer = FocusTimer::default();
        assert_eq!(timer.format_remaining(), "25:00");
    }

    #[test]
    #[should_panic(expected = "work duration must be positive")]
    fn test_zero_duration_rejected() {
        let _ = TimerConfig::new(0, 300, 900, 4);
    }

    #[test]
    #[should_panic(expected = "sessions before long break must be positive")]
    fn test_zero_threshold_rejected() {
        let _ = TimerConfig::new(1500, 300, 900, 0);
    }
}
