//! Log setup.
//!
//! `RUST_LOG` overrides the default filter in both modes.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::PomoError;

/// Default filter for interactive sessions.
pub const TUI_DEFAULT_FILTER: &str = "info";

/// Default filter for one-shot commands.
pub const CLI_DEFAULT_FILTER: &str = "warn";

fn filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Log to stderr. Used by one-shot commands.
pub fn init_stderr() {
    // A subscriber may already be installed (e.g. in tests).
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(CLI_DEFAULT_FILTER))
        .with_writer(std::io::stderr)
        .try_init();
}

/// Log to `path`, appending. Used while the alternate screen is active.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened.
pub fn init_file(path: &Path) -> Result<(), PomoError> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| {
            PomoError::Config(format!("Failed to open log file {}: {e}", path.display()))
        })?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(TUI_DEFAULT_FILTER))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();
    Ok(())
}
