//! Configuration management for pomotodo.
//!
//! This module handles loading and saving settings from `~/.pomotodo/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{
    parse_minutes, Durations, Settings, SettingsForm, SettingsPatch, MAX_DURATION_MINUTES,
};
