//! Settings commands.

use crate::cli::args::{OutputFormat, SettingsCommands};
use crate::config::{Paths, Settings, SettingsPatch};
use crate::error::PomoError;
use crate::output::{format_path, format_settings};

/// Execute settings subcommands
///
/// # Errors
///
/// Returns an error if the settings file cannot be read or written, or if
/// a new value is out of range.
pub fn settings(
    paths: &Paths,
    cmd: SettingsCommands,
    format: OutputFormat,
) -> Result<String, PomoError> {
    match cmd {
        SettingsCommands::Show => {
            let settings = Settings::load_from_path(&paths.settings_file)?;
            format_settings(&settings, "Settings", &paths.settings_file, format)
        }
        SettingsCommands::Set(args) => {
            let patch = SettingsPatch::from(&args);
            if patch.is_empty() {
                return Err(PomoError::Config(
                    "Nothing to change; pass at least one option (see --help)".to_string(),
                ));
            }
            let settings = Settings::load_from_path(&paths.settings_file)?.merged(&patch)?;
            save(paths, &settings)?;
            format_settings(&settings, "Settings saved", &paths.settings_file, format)
        }
        SettingsCommands::Reset => {
            let settings = Settings::default();
            save(paths, &settings)?;
            format_settings(&settings, "Settings reset", &paths.settings_file, format)
        }
        SettingsCommands::Path => format_path(&paths.settings_file, format),
    }
}

fn save(paths: &Paths, settings: &Settings) -> Result<(), PomoError> {
    paths.ensure_dirs()?;
    settings.save_to_path(&paths.settings_file)?;
    tracing::info!(path = %paths.settings_file.display(), "settings saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::SetSettingsArgs;
    use tempfile::TempDir;

    fn paths(dir: &TempDir) -> Paths {
        Paths::with_root(dir.path().join(".pomotodo"))
    }

    #[test]
    fn test_show_defaults_without_file() {
        let dir = TempDir::new().unwrap();
        let paths = paths(&dir);

        let output = settings(&paths, SettingsCommands::Show, OutputFormat::Json).unwrap();

        assert!(output.contains("\"pomodoro\": 25"));
        assert!(!paths.settings_file.exists());
    }

    #[test]
    fn test_set_merges_and_persists() {
        let dir = TempDir::new().unwrap();
        let paths = paths(&dir);

        let args = SetSettingsArgs {
            focus: Some(50),
            auto_start: Some(true),
            ..SetSettingsArgs::default()
        };
        settings(&paths, SettingsCommands::Set(args), OutputFormat::Json).unwrap();

        let args = SetSettingsArgs {
            short_break: Some(10),
            ..SetSettingsArgs::default()
        };
        settings(&paths, SettingsCommands::Set(args), OutputFormat::Json).unwrap();

        let saved = Settings::load_from_path(&paths.settings_file).unwrap();
        assert_eq!(saved.durations.focus, 50);
        assert_eq!(saved.durations.short_break, 10);
        assert_eq!(saved.durations.long_break, 15);
        assert!(saved.auto_start);
    }

    #[test]
    fn test_set_rejects_out_of_range_without_writing() {
        let dir = TempDir::new().unwrap();
        let paths = paths(&dir);

        let args = SetSettingsArgs {
            long_break: Some(0),
            ..SetSettingsArgs::default()
        };
        let err = settings(&paths, SettingsCommands::Set(args), OutputFormat::Pretty).unwrap_err();

        assert!(matches!(err, PomoError::InvalidSetting { .. }));
        assert!(!paths.settings_file.exists());
    }

    #[test]
    fn test_set_without_options_fails() {
        let dir = TempDir::new().unwrap();
        let paths = paths(&dir);

        let result = settings(
            &paths,
            SettingsCommands::Set(SetSettingsArgs::default()),
            OutputFormat::Pretty,
        );

        assert!(matches!(result, Err(PomoError::Config(_))));
    }

    #[test]
    fn test_reset_writes_defaults() {
        let dir = TempDir::new().unwrap();
        let paths = paths(&dir);
        let args = SetSettingsArgs {
            focus: Some(45),
            ..SetSettingsArgs::default()
        };
        settings(&paths, SettingsCommands::Set(args), OutputFormat::Json).unwrap();

        settings(&paths, SettingsCommands::Reset, OutputFormat::Json).unwrap();

        let saved = Settings::load_from_path(&paths.settings_file).unwrap();
        assert_eq!(saved, Settings::default());
    }

    #[test]
    fn test_path_pretty() {
        let dir = TempDir::new().unwrap();
        let paths = paths(&dir);

        let output = settings(&paths, SettingsCommands::Path, OutputFormat::Pretty).unwrap();

        assert!(output.ends_with("settings.json"));
    }
}
