//! Path resolution for pomotodo data files.
//!
//! All pomotodo data is stored in `~/.pomotodo/`:
//! - `settings.json` - Persisted timer settings
//! - `pomotodo.log` - Log output of interactive sessions

use std::path::PathBuf;

use crate::error::PomoError;

/// Paths to pomotodo data files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.pomotodo/`
    pub root: PathBuf,
    /// Settings file: `~/.pomotodo/settings.json`
    pub settings_file: PathBuf,
    /// Log file: `~/.pomotodo/pomotodo.log`
    pub log_file: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, PomoError> {
        let home = std::env::var("HOME")
            .map_err(|_| PomoError::Config("Could not determine home directory".to_string()))?;

        Ok(Self::with_root(PathBuf::from(home).join(".pomotodo")))
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            settings_file: root.join("settings.json"),
            log_file: root.join("pomotodo.log"),
            root,
        }
    }

    /// Ensure the root directory exists.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), PomoError> {
        if !self.root.exists() {
            std::fs::create_dir_all(&self.root).map_err(|e| {
                PomoError::Config(format!(
                    "Failed to create directory {}: {e}",
                    self.root.display()
                ))
            })?;
        }

        Ok(())
    }
}
