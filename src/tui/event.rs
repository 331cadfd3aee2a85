//! Event handling for the TUI.

use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::core::Mode;
use crate::error::PomoError;
use crate::tui::app::{App, InputMode};

const HELP: &str =
    "space:start/pause | r:reset | 1/2/3:mode | a:add | Enter:select | c:done | d:delete | s:settings | q:quit";

/// Action to take after handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Quit the application.
    Quit,
    /// Start or pause the timer.
    ToggleTimer,
    /// Reset the countdown.
    Reset,
    /// Switch to another mode.
    SwitchMode(Mode),
    /// Submit the settings form.
    SaveSettings,
}

/// Handle terminal events.
///
/// Returns an action to take, or None if no action is needed.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn handle_events(app: &mut App) -> Result<Option<Action>, PomoError> {
    // Poll for events with a small timeout
    if event::poll(Duration::from_millis(100))
        .map_err(|e| PomoError::Terminal(format!("Event poll failed: {e}")))?
    {
        if let Event::Key(key) =
            event::read().map_err(|e| PomoError::Terminal(format!("Event read failed: {e}")))?
        {
            if key.kind != KeyEventKind::Press {
                return Ok(None);
            }
            return Ok(handle_key(app, key, Instant::now()));
        }
    }

    Ok(None)
}

/// Dispatch a single key press according to the input mode.
pub fn handle_key(app: &mut App, key: KeyEvent, now: Instant) -> Option<Action> {
    // Handle Ctrl+C
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match app.input_mode {
        InputMode::Normal => handle_normal(app, key.code, now),
        InputMode::AddingTask => {
            handle_task_input(app, key.code, now);
            None
        }
        InputMode::Settings => handle_settings(app, key.code),
    }
}

fn handle_normal(app: &mut App, code: KeyCode, now: Instant) -> Option<Action> {
    match code {
        // Quit
        KeyCode::Char('q') | KeyCode::Esc => return Some(Action::Quit),

        // Timer
        KeyCode::Char(' ') => return Some(Action::ToggleTimer),
        KeyCode::Char('r') => return Some(Action::Reset),
        KeyCode::Char('1') => return Some(Action::SwitchMode(Mode::Focus)),
        KeyCode::Char('2') => return Some(Action::SwitchMode(Mode::ShortBreak)),
        KeyCode::Char('3') => return Some(Action::SwitchMode(Mode::LongBreak)),

        // Navigation - vim style
        KeyCode::Char('j') | KeyCode::Down => app.cursor_down(),
        KeyCode::Char('k') | KeyCode::Up => app.cursor_up(),
        KeyCode::Char('g') | KeyCode::Home => app.cursor_first(),
        KeyCode::Char('G') | KeyCode::End => app.cursor_last(),

        // Tasks
        KeyCode::Char('a') => app.begin_add_task(),
        KeyCode::Enter => app.select_at_cursor(now),
        KeyCode::Char('c' | 'x') => app.toggle_at_cursor(now),
        KeyCode::Char('d') | KeyCode::Delete => app.delete_at_cursor(now),

        // Settings
        KeyCode::Char('s') => app.open_settings(),

        // Help
        KeyCode::Char('?') => app.notify(HELP, now),

        _ => {}
    }
    None
}

fn handle_task_input(app: &mut App, code: KeyCode, now: Instant) {
    match code {
        KeyCode::Enter => app.submit_task(now),
        KeyCode::Esc => app.cancel_input(),
        KeyCode::Backspace => {
            app.task_input.pop();
        }
        KeyCode::Char(c) => app.task_input.push(c),
        _ => {}
    }
}

fn handle_settings(app: &mut App, code: KeyCode) -> Option<Action> {
    if code == KeyCode::Enter {
        return Some(Action::SaveSettings);
    }
    if code == KeyCode::Esc {
        app.cancel_input();
        return None;
    }

    let editor = app.settings_editor.as_mut()?;
    match code {
        KeyCode::Tab | KeyCode::Down => editor.field = editor.field.next(),
        KeyCode::BackTab | KeyCode::Up => editor.field = editor.field.previous(),
        KeyCode::Backspace => editor.backspace(),
        KeyCode::Char(' ') if editor.field.is_toggle() => editor.toggle(),
        KeyCode::Char(c) if c.is_ascii_digit() || c == '-' => editor.push_char(c),
        _ => {}
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    use crate::config::Settings;
    use crate::notify::{CueProfile, Silent};
    use crate::tui::app::SettingsField;

    fn press(app: &mut App, code: KeyCode) -> Option<Action> {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE), Instant::now())
    }

    fn app(dir: &TempDir) -> App {
        App::new(
            Settings::default(),
            dir.path().join("settings.json"),
            Box::new(Silent),
            CueProfile::Single,
            Instant::now(),
        )
    }

    #[test]
    fn test_timer_keys_map_to_actions() {
        let dir = TempDir::new().unwrap();
        let mut app = app(&dir);

        assert_eq!(press(&mut app, KeyCode::Char(' ')), Some(Action::ToggleTimer));
        assert_eq!(press(&mut app, KeyCode::Char('r')), Some(Action::Reset));
        assert_eq!(
            press(&mut app, KeyCode::Char('3')),
            Some(Action::SwitchMode(Mode::LongBreak))
        );
        assert_eq!(press(&mut app, KeyCode::Char('q')), Some(Action::Quit));
    }

    #[test]
    fn test_ctrl_c_quits_from_any_mode() {
        let dir = TempDir::new().unwrap();
        let mut app = app(&dir);
        app.begin_add_task();

        let action = handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            Instant::now(),
        );

        assert_eq!(action, Some(Action::Quit));
    }

    #[test]
    fn test_typing_a_task() {
        let dir = TempDir::new().unwrap();
        let mut app = app(&dir);

        press(&mut app, KeyCode::Char('a'));
        for c in "tea q".chars() {
            assert_eq!(press(&mut app, KeyCode::Char(c)), None);
        }
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.tasks().len(), 1);
        assert_eq!(app.tasks()[0].text, "tea");
        assert_eq!(app.input_mode, InputMode::Normal);
    }

    #[test]
    fn test_settings_keys() {
        let dir = TempDir::new().unwrap();
        let mut app = app(&dir);

        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.input_mode, InputMode::Settings);

        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char('0'));
        press(&mut app, KeyCode::Char('q'));
        assert_eq!(app.input_mode, InputMode::Settings);

        let editor = app.settings_editor.as_ref().unwrap();
        assert_eq!(editor.field, SettingsField::ShortBreak);
        assert_eq!(editor.form.short_break, "50");

        assert_eq!(press(&mut app, KeyCode::Enter), Some(Action::SaveSettings));
        assert_eq!(press(&mut app, KeyCode::Esc), None);
        assert_eq!(app.input_mode, InputMode::Normal);
        assert!(app.settings_editor.is_none());
    }
}
