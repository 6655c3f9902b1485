//! Completion signals.
//!
//! The engine does not care how the user is told a period ended; it fires
//! one notification per transition through this trait and moves on.

use std::io::Write;

use super::session::SessionKind;

#[cfg(test)]
use mockall::automock;

/// Receives one fire-and-forget signal per completed period.
#[cfg_attr(test, automock)]
pub trait Notifier {
    /// Called exactly once when a period ends, naturally or by skip.
    fn period_complete(&self, finished: SessionKind, next: SessionKind);
}

/// Rings the terminal bell.
pub struct BellNotifier;

impl Notifier for BellNotifier {
    fn period_complete(&self, _finished: SessionKind, _next: SessionKind) {
        // Failure to ring is not worth surfacing.
        let mut stdout = std::io::stdout();
        let _ = stdout.write_all(b"\x07");
        let _ = stdout.flush();
    }
}

/// Swallows all signals (for `--mute`).
pub struct SilentNotifier;

impl Notifier for SilentNotifier {
    fn period_complete(&self, _finished: SessionKind, _next: SessionKind) {}
}
