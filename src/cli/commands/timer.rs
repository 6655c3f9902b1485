//! Interactive timer command.

use crate::cli::args::TimerArgs;
use crate::config::{Config, TimerSettings};
use crate::core::duration::parse_duration;
use crate::engine::{BellNotifier, FocusTimer, Notifier, SilentNotifier, TimerConfig};
use crate::error::TomataError;
use crate::history::HistoryStore;
use crate::tui;

/// Run the interactive focus timer.
///
/// # Errors
///
/// Returns an error if a duration flag is invalid, the history database
/// cannot be opened, or the terminal cannot be set up.
pub fn timer(args: &TimerArgs, config: &Config) -> Result<String, TomataError> {
    let timer_config = build_timer_config(args, &config.timer)?;

    let notifier: Box<dyn Notifier> = if args.mute || !config.timer.bell {
        Box::new(SilentNotifier)
    } else {
        Box::new(BellNotifier)
    };

    let store = HistoryStore::open()?;

    tui::run(FocusTimer::new(timer_config), notifier, store)?;

    Ok(String::new())
}

/// Merge CLI flags over the configured cadence.
fn build_timer_config(
    args: &TimerArgs,
    settings: &TimerSettings,
) -> Result<TimerConfig, TomataError> {
    let mut tc = settings.to_timer_config()?;

    if let Some(s) = &args.work {
        tc.work_seconds = parse_duration_flag(s, "work")?;
    }
    if let Some(s) = &args.break_duration {
        tc.short_break_seconds = parse_duration_flag(s, "break")?;
    }
    if let Some(s) = &args.long_break_duration {
        tc.long_break_seconds = parse_duration_flag(s, "long break")?;
    }
    if let Some(n) = args.sessions {
        if n == 0 {
            return Err(TomataError::Config(
                "--sessions must be at least 1".to_string(),
            ));
        }
        tc.sessions_before_long_break = n;
    }

    Ok(tc)
}

fn parse_duration_flag(s: &str, flag: &str) -> Result<u32, TomataError> {
    let duration = parse_duration(s)
        .ok_or_else(|| TomataError::Config(format!("Invalid {flag} duration: {s}")))?;

    u32::try_from(duration.num_seconds())
        .map_err(|_| TomataError::Config(format!("{flag} duration is out of range: {s}")))
}
