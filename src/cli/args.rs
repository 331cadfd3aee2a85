use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::SettingsPatch;
use crate::core::Mode;
use crate::notify::CueProfile;

#[derive(Parser)]
#[command(name = "pomotodo")]
#[command(about = "A terminal Pomodoro timer with a built-in task list")]
#[command(long_about = "pomotodo - A terminal Pomodoro timer

Alternates focus sessions with short and long breaks, tracks the task you
are working on, and keeps running totals for the day.

QUICK START:
  pomotodo                          Open the timer
  pomotodo settings show            Show the saved durations
  pomotodo settings set --focus 50  Lengthen focus sessions

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

For more information on a specific command, run:
  pomotodo <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output (default),
    /// or 'json' for machine-readable output suitable for scripting.
    #[arg(short, long, value_enum, default_value = "pretty", global = true)]
    pub output: OutputFormat,

    /// Completion cue played when a phase ends
    #[arg(long, value_enum, env = "POMOTODO_CUE", default_value = "single", global = true)]
    pub cue: CueProfile,

    /// Your name, shown in the greeting and the terminal title
    #[arg(long, env = "POMOTODO_NAME", global = true)]
    pub name: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive timer (default)
    ///
    /// Keys:
    ///   space       start / pause
    ///   r           reset the countdown
    ///   1 / 2 / 3   focus / short break / long break
    ///   a           add a task
    ///   Enter       work on the highlighted task
    ///   c           toggle the highlighted task done
    ///   d           delete the highlighted task
    ///   s           edit settings
    ///   q           quit
    Tui {
        /// Phase to open in (focus, short, long)
        #[arg(long, short = 'm', value_parser = parse_mode)]
        mode: Option<Mode>,
    },

    /// View or change the saved timer settings
    ///
    /// Settings live in ~/.pomotodo/settings.json.
    ///
    /// # Examples
    ///
    ///   pomotodo settings show
    ///   pomotodo settings set --focus 50 --short-break 10
    ///   pomotodo settings set --auto-start true
    ///   pomotodo settings reset
    #[command(alias = "config")]
    Settings(SettingsArgs),

    /// Generate shell completions
    ///
    /// Outputs a completion script for the given shell.
    ///
    /// Example: pomotodo completions bash > ~/.bash_completion.d/pomotodo
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Parse a mode name given on the command line.
fn parse_mode(s: &str) -> Result<Mode, String> {
    Mode::parse(s).ok_or_else(|| format!("unknown mode '{s}' (expected focus, short or long)"))
}

/// Arguments for the settings command.
#[derive(Args)]
pub struct SettingsArgs {
    #[command(subcommand)]
    pub command: SettingsCommands,
}

/// Settings subcommands.
#[derive(Subcommand)]
pub enum SettingsCommands {
    /// Print the current settings
    Show,

    /// Change one or more settings
    ///
    /// Durations are whole minutes between 1 and 1440.
    Set(SetSettingsArgs),

    /// Restore the default settings
    Reset,

    /// Print the settings file location
    Path,
}

/// Arguments for `settings set`.
#[derive(Args, Debug, Default)]
pub struct SetSettingsArgs {
    /// Focus duration in minutes
    #[arg(long, short = 'f')]
    pub focus: Option<u32>,

    /// Short break duration in minutes
    #[arg(long, short = 's')]
    pub short_break: Option<u32>,

    /// Long break duration in minutes
    #[arg(long, short = 'l')]
    pub long_break: Option<u32>,

    /// Start the next phase automatically (true/false)
    #[arg(long)]
    pub auto_start: Option<bool>,

    /// Play a cue when a phase ends (true/false)
    #[arg(long)]
    pub sound: Option<bool>,
}

impl From<&SetSettingsArgs> for SettingsPatch {
    fn from(args: &SetSettingsArgs) -> Self {
        Self {
            focus: args.focus,
            short_break: args.short_break,
            long_break: args.long_break,
            auto_start: args.auto_start,
            sound_enabled: args.sound,
        }
    }
}
