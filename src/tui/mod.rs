//! Terminal User Interface (TUI) for pomotodo.
//!
//! The interactive widget: countdown, mode tabs, task list and settings
//! form. Built with ratatui and crossterm.

mod app;
mod clock;
mod event;
mod ui;

pub use app::{App, InputMode, SettingsEditor, SettingsField};
pub use clock::Ticker;

use std::io;
use std::path::PathBuf;
use std::time::Instant;

use crossterm::{
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::prelude::*;

use crate::config::Settings;
use crate::core::Mode;
use crate::error::PomoError;
use crate::notify::{CueProfile, TerminalBell};

/// Startup options for the interactive timer.
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Completion cue.
    pub cue: CueProfile,
    /// Phase to open in; focus when unset.
    pub mode: Option<Mode>,
    /// Name for the greeting and window title.
    pub name: Option<String>,
}

/// Run the TUI application.
///
/// # Errors
///
/// Returns an error if the TUI fails to initialize or run.
pub fn run(settings: Settings, settings_path: PathBuf, options: Options) -> Result<(), PomoError> {
    let Options { cue, mode, name } = options;

    // Setup terminal
    enable_raw_mode()
        .map_err(|e| PomoError::Terminal(format!("Failed to enable raw mode: {e}")))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(|e| PomoError::Terminal(format!("Failed to setup terminal: {e}")))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)
        .map_err(|e| PomoError::Terminal(format!("Failed to create terminal: {e}")))?;

    // Create app state and run main loop
    let mut app = App::new(
        settings,
        settings_path,
        Box::new(TerminalBell::stdout()),
        cue,
        Instant::now(),
    );
    app.name = name;
    if let Some(mode) = mode {
        app.switch_mode(mode, Instant::now());
    }
    tracing::info!(cue = ?cue, mode = %app.pomodoro.session().mode(), "interactive session started");
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    let stats = app.pomodoro.session().stats();
    tracing::info!(
        sessions = stats.completed_focus_sessions,
        focus_minutes = stats.total_focus_minutes,
        tasks = stats.completed_tasks,
        "interactive session ended"
    );

    result
}

/// Run the main application loop.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), PomoError> {
    let mut title = String::new();
    loop {
        app.on_tick(Instant::now());

        // Keep the window title on the countdown
        let next_title = ui::window_title(app);
        if next_title != title {
            execute!(io::stdout(), SetTitle(&next_title))
                .map_err(|e| PomoError::Terminal(format!("Failed to set title: {e}")))?;
            title = next_title;
        }

        // Draw UI
        terminal
            .draw(|frame| ui::render(frame, app))
            .map_err(|e| PomoError::Terminal(format!("Failed to draw: {e}")))?;

        // Handle events
        if let Some(action) = event::handle_events(app)? {
            let now = Instant::now();
            match action {
                event::Action::Quit => app.should_quit = true,
                event::Action::ToggleTimer => app.toggle_timer(now),
                event::Action::Reset => app.reset(now),
                event::Action::SwitchMode(mode) => app.switch_mode(mode, now),
                event::Action::SaveSettings => app.submit_settings(now),
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
