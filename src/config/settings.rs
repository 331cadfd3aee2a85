//! Timer settings.
//!
//! Settings are loaded from `~/.pomotodo/settings.json`, a flat record:
//!
//! ```json
//! { "pomodoro": 25, "shortBreak": 5, "longBreak": 15,
//!   "autoStart": false, "soundEnabled": true }
//! ```
//!
//! Missing fields keep their defaults and unknown fields are ignored.

use serde::{Deserialize, Serialize};

use crate::core::Mode;
use crate::error::PomoError;

/// Longest accepted phase duration, in minutes.
pub const MAX_DURATION_MINUTES: u32 = 24 * 60;

/// Configured minutes per mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Durations {
    /// Focus duration in minutes.
    #[serde(rename = "pomodoro", default = "default_focus_minutes")]
    pub focus: u32,
    /// Short break duration in minutes.
    #[serde(rename = "shortBreak", default = "default_short_break_minutes")]
    pub short_break: u32,
    /// Long break duration in minutes.
    #[serde(rename = "longBreak", default = "default_long_break_minutes")]
    pub long_break: u32,
}

/// The persisted settings record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Minutes per mode.
    #[serde(flatten)]
    pub durations: Durations,
    /// Start the next phase automatically after a completion.
    #[serde(default)]
    pub auto_start: bool,
    /// Play the completion cue.
    #[serde(default = "default_true")]
    pub sound_enabled: bool,
}

// Default value functions for serde
const fn default_focus_minutes() -> u32 {
    25
}

const fn default_short_break_minutes() -> u32 {
    5
}

const fn default_long_break_minutes() -> u32 {
    15
}

const fn default_true() -> bool {
    true
}

impl Default for Durations {
    fn default() -> Self {
        Self {
            focus: default_focus_minutes(),
            short_break: default_short_break_minutes(),
            long_break: default_long_break_minutes(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            durations: Durations::default(),
            auto_start: false,
            sound_enabled: default_true(),
        }
    }
}

impl Durations {
    /// Minutes configured for `mode`.
    #[must_use]
    pub const fn minutes(&self, mode: Mode) -> u32 {
        match mode {
            Mode::Focus => self.focus,
            Mode::ShortBreak => self.short_break,
            Mode::LongBreak => self.long_break,
        }
    }

    /// Full length of `mode` in seconds.
    #[must_use]
    pub const fn seconds(&self, mode: Mode) -> u32 {
        self.minutes(mode).saturating_mul(60)
    }

    /// Check that every duration is within `1..=MAX_DURATION_MINUTES`.
    ///
    /// # Errors
    ///
    /// Returns `PomoError::InvalidSetting` naming the first bad field.
    pub fn validate(&self) -> Result<(), PomoError> {
        for mode in Mode::ALL {
            check_minutes(field_name(mode), i64::from(self.minutes(mode)))?;
        }
        Ok(())
    }
}

impl Settings {
    /// Check the record before it is applied or saved.
    ///
    /// # Errors
    ///
    /// Returns `PomoError::InvalidSetting` if a duration is out of range.
    pub fn validate(&self) -> Result<(), PomoError> {
        self.durations.validate()
    }

    /// Return a copy with the given overrides applied and validated.
    ///
    /// # Errors
    ///
    /// Returns `PomoError::InvalidSetting` if the result is out of range.
    pub fn merged(&self, patch: &SettingsPatch) -> Result<Self, PomoError> {
        let mut next = *self;
        if let Some(m) = patch.focus {
            next.durations.focus = m;
        }
        if let Some(m) = patch.short_break {
            next.durations.short_break = m;
        }
        if let Some(m) = patch.long_break {
            next.durations.long_break = m;
        }
        if let Some(flag) = patch.auto_start {
            next.auto_start = flag;
        }
        if let Some(flag) = patch.sound_enabled {
            next.sound_enabled = flag;
        }
        next.validate()?;
        Ok(next)
    }

    /// Load settings from a specific path.
    ///
    /// If the settings file doesn't exist, returns the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be parsed or holds
    /// out-of-range values.
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, PomoError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            PomoError::Config(format!(
                "Failed to read settings file {}: {e}",
                path.display()
            ))
        })?;

        let settings: Self = serde_json::from_str(&contents).map_err(|e| {
            PomoError::Config(format!(
                "Failed to parse settings file {}: {e}",
                path.display()
            ))
        })?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings are invalid or cannot be written.
    pub fn save_to_path(&self, path: &std::path::Path) -> Result<(), PomoError> {
        self.validate()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| PomoError::Config(format!("Failed to serialize settings: {e}")))?;

        std::fs::write(path, contents).map_err(|e| {
            PomoError::Config(format!(
                "Failed to write settings file {}: {e}",
                path.display()
            ))
        })
    }
}

/// Optional overrides for `settings set`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SettingsPatch {
    pub focus: Option<u32>,
    pub short_break: Option<u32>,
    pub long_break: Option<u32>,
    pub auto_start: Option<bool>,
    pub sound_enabled: Option<bool>,
}

impl SettingsPatch {
    /// True when no override was given.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.focus.is_none()
            && self.short_break.is_none()
            && self.long_break.is_none()
            && self.auto_start.is_none()
            && self.sound_enabled.is_none()
    }
}

/// Raw text from the interactive settings form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsForm {
    pub focus: String,
    pub short_break: String,
    pub long_break: String,
    pub auto_start: bool,
    pub sound_enabled: bool,
}

impl SettingsForm {
    /// Pre-fill the form from the current settings.
    #[must_use]
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            focus: settings.durations.focus.to_string(),
            short_break: settings.durations.short_break.to_string(),
            long_break: settings.durations.long_break.to_string(),
            auto_start: settings.auto_start,
            sound_enabled: settings.sound_enabled,
        }
    }

    /// Parse and validate the form.
    ///
    /// # Errors
    ///
    /// Returns `PomoError::InvalidSetting` for non-numeric, non-positive, or
    /// oversized durations.
    pub fn parse(&self) -> Result<Settings, PomoError> {
        Ok(Settings {
            durations: Durations {
                focus: parse_minutes(field_name(Mode::Focus), &self.focus)?,
                short_break: parse_minutes(field_name(Mode::ShortBreak), &self.short_break)?,
                long_break: parse_minutes(field_name(Mode::LongBreak), &self.long_break)?,
            },
            auto_start: self.auto_start,
            sound_enabled: self.sound_enabled,
        })
    }
}

const fn field_name(mode: Mode) -> &'static str {
    match mode {
        Mode::Focus => "focus duration",
        Mode::ShortBreak => "short break duration",
        Mode::LongBreak => "long break duration",
    }
}

/// Parse a duration field in minutes.
///
/// # Errors
///
/// Returns `PomoError::InvalidSetting` if the text is not a whole number in
/// `1..=MAX_DURATION_MINUTES`.
pub fn parse_minutes(field: &'static str, input: &str) -> Result<u32, PomoError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(PomoError::invalid(field, "is required"));
    }

    let minutes: i64 = input
        .parse()
        .map_err(|_| PomoError::invalid(field, format!("'{input}' is not a whole number of minutes")))?;

    check_minutes(field, minutes)?;
    u32::try_from(minutes).map_err(|_| PomoError::invalid(field, "is out of range"))
}

fn check_minutes(field: &'static str, minutes: i64) -> Result<(), PomoError> {
    if minutes < 1 {
        return Err(PomoError::invalid(field, "must be at least 1 minute"));
    }
    if minutes > i64::from(MAX_DURATION_MINUTES) {
        return Err(PomoError::invalid(
            field,
            format!("must be at most {MAX_DURATION_MINUTES} minutes"),
        ));
    }
    Ok(())
}
