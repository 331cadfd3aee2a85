use std::path::Path;

use chrono::Duration;
use colored::Colorize;

use crate::config::Settings;
use crate::core::{format_duration, Mode};

fn on_off(flag: bool) -> colored::ColoredString {
    if flag {
        "on".green()
    } else {
        "off".dimmed()
    }
}

/// Format settings as a labelled list
pub fn format_settings_pretty(settings: &Settings, title: &str, path: &Path) -> String {
    let mut output = format!("{}\n", title.bold());
    output.push_str(&"─".repeat(40));
    output.push('\n');

    for mode in Mode::ALL {
        let minutes = settings.durations.minutes(mode);
        output.push_str(&format!(
            "  {:<12} {}\n",
            mode.display_name(),
            format_duration(Duration::minutes(i64::from(minutes))).cyan()
        ));
    }

    output.push_str(&format!("  {:<12} {}\n", "Auto-start", on_off(settings.auto_start)));
    output.push_str(&format!("  {:<12} {}\n", "Sound", on_off(settings.sound_enabled)));
    output.push_str(&format!("  {}", path.display().to_string().dimmed()));

    output
}
