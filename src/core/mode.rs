//! Timer phases.

use serde::{Deserialize, Serialize};

/// One of the three Pomodoro phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Mode {
    /// Work interval
    Focus,
    /// Short break between focus sessions
    ShortBreak,
    /// Long break after every fourth focus session
    LongBreak,
}

impl Mode {
    /// All modes in display order.
    pub const ALL: [Self; 3] = [Self::Focus, Self::ShortBreak, Self::LongBreak];

    /// Parse a mode from user input.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "focus" | "pomodoro" | "pomo" | "f" => Some(Self::Focus),
            "short" | "short-break" | "shortbreak" | "sb" => Some(Self::ShortBreak),
            "long" | "long-break" | "longbreak" | "lb" => Some(Self::LongBreak),
            _ => None,
        }
    }

    /// Get display name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Focus => "Focus",
            Self::ShortBreak => "Short Break",
            Self::LongBreak => "Long Break",
        }
    }

    /// Check if this is a break mode.
    #[must_use]
    pub const fn is_break(&self) -> bool {
        matches!(self, Self::ShortBreak | Self::LongBreak)
    }

    /// Position in [`Mode::ALL`].
    #[must_use]
    pub const fn index(&self) -> usize {
        match self {
            Self::Focus => 0,
            Self::ShortBreak => 1,
            Self::LongBreak => 2,
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
