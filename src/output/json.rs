//! JSON output formatting for pomotodo.

use std::path::Path;

use serde::Serialize;
use serde_json::json;

use crate::config::Settings;
use crate::error::PomoError;

/// Format settings as JSON
///
/// The `settings` object has the same shape as the settings file.
///
/// # Errors
///
/// Returns `PomoError::Parse` if JSON serialization fails.
pub fn format_settings_json(settings: &Settings, path: &Path) -> Result<String, PomoError> {
    let output = json!({
        "path": path.display().to_string(),
        "settings": settings
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format a file location as JSON
///
/// # Errors
///
/// Returns `PomoError::Parse` if JSON serialization fails.
pub fn format_path_json(path: &Path) -> Result<String, PomoError> {
    to_json(&json!({ "path": path.display().to_string() }))
}

/// Generic JSON serialization for any serializable type
///
/// # Errors
///
/// Returns `PomoError::Parse` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, PomoError> {
    Ok(serde_json::to_string_pretty(value)?)
}
