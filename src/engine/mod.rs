//! The focus timer engine.
//!
//! A countdown state machine cycling through work and break periods:
//! - Explicit session kinds with a single transition function
//! - Pure core, free of clocks and I/O
//! - Completion signals delegated to a [`Notifier`]

pub mod notify;
pub mod session;
pub mod timer;

pub use notify::{BellNotifier, Notifier, SilentNotifier};
pub use session::SessionKind;
pub use timer::{FocusTimer, TimerConfig, Transition};
