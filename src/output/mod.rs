//! Output formatting for pomotodo.
//!
//! This module provides formatters for displaying settings in various formats.

mod json;
mod pretty;

use std::path::Path;

use crate::cli::args::OutputFormat;
use crate::config::Settings;
use crate::error::PomoError;

pub use json::*;
pub use pretty::*;

/// Format settings based on output format
///
/// # Errors
///
/// Returns `PomoError::Parse` if JSON serialization fails.
pub fn format_settings(
    settings: &Settings,
    title: &str,
    path: &Path,
    format: OutputFormat,
) -> Result<String, PomoError> {
    match format {
        OutputFormat::Pretty => Ok(format_settings_pretty(settings, title, path)),
        OutputFormat::Json => format_settings_json(settings, path),
    }
}

/// Format the settings file location based on output format
///
/// # Errors
///
/// Returns `PomoError::Parse` if JSON serialization fails.
pub fn format_path(path: &Path, format: OutputFormat) -> Result<String, PomoError> {
    match format {
        OutputFormat::Pretty => Ok(path.display().to_string()),
        OutputFormat::Json => format_path_json(path),
    }
}
