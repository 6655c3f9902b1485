//! Session kinds for the focus timer.

use serde::{Deserialize, Serialize};

/// Kind of timer period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionKind {
    /// Focused work period (25 minutes by default)
    Work,
    /// Short break (5 minutes by default)
    ShortBreak,
    /// Long break (15 minutes by default)
    LongBreak,
}

impl SessionKind {
    /// Get display name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Work => "Work",
            Self::ShortBreak => "Short Break",
            Self::LongBreak => "Long Break",
        }
    }

    /// Check if this is a break kind.
    #[must_use]
    pub const fn is_break(&self) -> bool {
        matches!(self, Self::ShortBreak | Self::LongBreak)
    }

    /// Stable string form, used for storage and filters.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Work => "work",
            Self::ShortBreak => "short_break",
            Self::LongBreak => "long_break",
        }
    }

    /// Parse a kind from user input.
    ///
    /// Accepts the stable form plus common shorthands; returns `None` for
    /// anything else.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "work" | "w" => Some(Self::Work),
            "short" | "short_break" | "short-break" | "sb" => Some(Self::ShortBreak),
            "long" | "long_break" | "long-break" | "lb" => Some(Self::LongBreak),
            _ => None,
        }
    }
}

impl std::fmt::Display for SessionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
