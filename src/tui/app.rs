//! Application state for the TUI.

use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver};
use std::time::Instant;

use crate::config::{Settings, SettingsForm};
use crate::core::{ChannelSubscriber, Event, LogSubscriber, Mode, Pomodoro, Task, TaskId};
use crate::notify::{Chime, CueProfile, Notifier};
use crate::tui::clock::Ticker;

/// What the keyboard is currently editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Timer and task-list shortcuts.
    Normal,
    /// Typing a new task.
    AddingTask,
    /// The settings form is open.
    Settings,
}

/// A field of the settings form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsField {
    Focus,
    ShortBreak,
    LongBreak,
    AutoStart,
    Sound,
}

impl SettingsField {
    pub const ALL: [Self; 5] = [
        Self::Focus,
        Self::ShortBreak,
        Self::LongBreak,
        Self::AutoStart,
        Self::Sound,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Focus => "Focus (min)",
            Self::ShortBreak => "Short break (min)",
            Self::LongBreak => "Long break (min)",
            Self::AutoStart => "Auto-start",
            Self::Sound => "Sound",
        }
    }

    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Focus => Self::ShortBreak,
            Self::ShortBreak => Self::LongBreak,
            Self::LongBreak => Self::AutoStart,
            Self::AutoStart => Self::Sound,
            Self::Sound => Self::Focus,
        }
    }

    #[must_use]
    pub const fn previous(self) -> Self {
        match self {
            Self::Focus => Self::Sound,
            Self::ShortBreak => Self::Focus,
            Self::LongBreak => Self::ShortBreak,
            Self::AutoStart => Self::LongBreak,
            Self::Sound => Self::AutoStart,
        }
    }

    #[must_use]
    pub const fn is_toggle(self) -> bool {
        matches!(self, Self::AutoStart | Self::Sound)
    }
}

/// The settings form being edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsEditor {
    pub form: SettingsForm,
    pub field: SettingsField,
}

impl SettingsEditor {
    #[must_use]
    pub fn new(settings: &Settings) -> Self {
        Self {
            form: SettingsForm::from_settings(settings),
            field: SettingsField::Focus,
        }
    }

    /// Display value of `field`.
    #[must_use]
    pub fn value(&self, field: SettingsField) -> String {
        match field {
            SettingsField::Focus => self.form.focus.clone(),
            SettingsField::ShortBreak => self.form.short_break.clone(),
            SettingsField::LongBreak => self.form.long_break.clone(),
            SettingsField::AutoStart => on_off(self.form.auto_start).to_string(),
            SettingsField::Sound => on_off(self.form.sound_enabled).to_string(),
        }
    }

    fn text_mut(&mut self) -> Option<&mut String> {
        match self.field {
            SettingsField::Focus => Some(&mut self.form.focus),
            SettingsField::ShortBreak => Some(&mut self.form.short_break),
            SettingsField::LongBreak => Some(&mut self.form.long_break),
            SettingsField::AutoStart | SettingsField::Sound => None,
        }
    }

    /// Type a character into the focused text field.
    pub fn push_char(&mut self, c: char) {
        if let Some(text) = self.text_mut() {
            text.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(text) = self.text_mut() {
            text.pop();
        }
    }

    /// Flip the focused toggle field.
    pub fn toggle(&mut self) {
        match self.field {
            SettingsField::AutoStart => self.form.auto_start = !self.form.auto_start,
            SettingsField::Sound => self.form.sound_enabled = !self.form.sound_enabled,
            _ => {}
        }
    }
}

const fn on_off(flag: bool) -> &'static str {
    if flag {
        "on"
    } else {
        "off"
    }
}

/// Application state.
pub struct App {
    /// The timer and task list.
    pub pomodoro: Pomodoro,
    /// Events published by the timer since the last frame.
    events: Receiver<Event>,
    notifier: Notifier<Box<dyn Chime>>,
    ticker: Ticker,
    /// Where saved settings are written.
    settings_path: PathBuf,
    /// Highlighted row in the task list.
    pub cursor: usize,
    pub input_mode: InputMode,
    /// Text of the task being typed.
    pub task_input: String,
    pub settings_editor: Option<SettingsEditor>,
    /// Status message to display.
    pub status: Option<String>,
    /// Name used in the greeting and the window title.
    pub name: Option<String>,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl App {
    /// Create a new app instance.
    #[must_use]
    pub fn new(
        settings: Settings,
        settings_path: PathBuf,
        chime: Box<dyn Chime>,
        profile: CueProfile,
        now: Instant,
    ) -> Self {
        let (tx, rx) = mpsc::channel();
        let mut pomodoro = Pomodoro::new(settings);
        pomodoro.subscribe(ChannelSubscriber(tx));
        pomodoro.subscribe(LogSubscriber);

        Self {
            pomodoro,
            events: rx,
            notifier: Notifier::new(chime, profile),
            ticker: Ticker::every_second(now),
            settings_path,
            cursor: 0,
            input_mode: InputMode::Normal,
            task_input: String::new(),
            settings_editor: None,
            status: None,
            name: None,
            should_quit: false,
        }
    }

    /// Advance the clock to `now` and process pending events.
    pub fn on_tick(&mut self, now: Instant) {
        for _ in 0..self.ticker.elapsed_ticks(now) {
            self.pomodoro.advance();
        }
        self.drain_events(now);
    }

    fn drain_events(&mut self, now: Instant) {
        let sound_enabled = self.pomodoro.settings().sound_enabled;
        while let Ok(event) = self.events.try_recv() {
            self.notifier.handle(&event, sound_enabled, now);
        }
        self.status = self.notifier.current(now).map(str::to_string);
    }

    /// Show a transient message.
    pub fn notify(&mut self, message: impl Into<String>, now: Instant) {
        self.notifier.post(message, now);
        self.status = self.notifier.current(now).map(str::to_string);
    }

    /// Start or pause the timer.
    pub fn toggle_timer(&mut self, now: Instant) {
        let was_running = self.pomodoro.session().is_running();
        self.pomodoro.toggle();
        if !was_running && self.pomodoro.session().is_running() {
            // A fresh start gets a full first second.
            self.ticker.restart(now);
        }
        self.drain_events(now);
    }

    pub fn reset(&mut self, now: Instant) {
        self.pomodoro.reset();
        self.drain_events(now);
    }

    pub fn switch_mode(&mut self, mode: Mode, now: Instant) {
        self.pomodoro.switch_mode(mode);
        self.drain_events(now);
    }

    /// Tasks in display order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        self.pomodoro.tasks().tasks()
    }

    /// Task under the cursor.
    #[must_use]
    pub fn task_at_cursor(&self) -> Option<TaskId> {
        self.tasks().get(self.cursor).map(|t| t.id)
    }

    /// Move selection up.
    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move selection down.
    pub fn cursor_down(&mut self) {
        if self.cursor + 1 < self.tasks().len() {
            self.cursor += 1;
        }
    }

    /// Jump to first item.
    pub fn cursor_first(&mut self) {
        self.cursor = 0;
    }

    /// Jump to last item.
    pub fn cursor_last(&mut self) {
        self.cursor = self.tasks().len().saturating_sub(1);
    }

    fn clamp_cursor(&mut self) {
        let len = self.tasks().len();
        if self.cursor >= len {
            self.cursor = len.saturating_sub(1);
        }
    }

    /// Make the task under the cursor the current task.
    pub fn select_at_cursor(&mut self, now: Instant) {
        if let Some(id) = self.task_at_cursor() {
            self.pomodoro.select_task(id);
            self.drain_events(now);
        }
    }

    /// Complete or reopen the task under the cursor.
    pub fn toggle_at_cursor(&mut self, now: Instant) {
        if let Some(id) = self.task_at_cursor() {
            self.pomodoro.toggle_complete(id);
            self.drain_events(now);
        }
    }

    /// Delete the task under the cursor.
    pub fn delete_at_cursor(&mut self, now: Instant) {
        if let Some(id) = self.task_at_cursor() {
            self.pomodoro.delete_task(id);
            self.clamp_cursor();
            self.drain_events(now);
        }
    }

    /// Start typing a new task.
    pub fn begin_add_task(&mut self) {
        self.task_input.clear();
        self.input_mode = InputMode::AddingTask;
    }

    /// Add the typed task; blank input is dropped.
    pub fn submit_task(&mut self, now: Instant) {
        let text = std::mem::take(&mut self.task_input);
        if self.pomodoro.add_task(&text).is_some() {
            self.cursor_last();
        }
        self.input_mode = InputMode::Normal;
        self.drain_events(now);
    }

    /// Leave text entry without changes.
    pub fn cancel_input(&mut self) {
        self.task_input.clear();
        self.settings_editor = None;
        self.input_mode = InputMode::Normal;
    }

    /// Open the settings form pre-filled with the current settings.
    pub fn open_settings(&mut self) {
        self.settings_editor = Some(SettingsEditor::new(self.pomodoro.settings()));
        self.input_mode = InputMode::Settings;
    }

    /// Validate, persist and apply the settings form.
    ///
    /// A rejected form stays open and the error is shown as a notice.
    pub fn submit_settings(&mut self, now: Instant) {
        let Some(editor) = &self.settings_editor else {
            return;
        };

        let settings = match editor.form.parse() {
            Ok(settings) => settings,
            Err(e) => {
                self.notify(e.to_string(), now);
                return;
            }
        };

        if let Err(e) = self.save_settings(&settings) {
            tracing::warn!(error = %e, "failed to save settings");
            self.notify(e.to_string(), now);
            return;
        }

        self.pomodoro.apply_settings(settings);
        self.settings_editor = None;
        self.input_mode = InputMode::Normal;
        self.drain_events(now);
    }

    fn save_settings(&self, settings: &Settings) -> Result<(), crate::error::PomoError> {
        if let Some(parent) = self.settings_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        settings.save_to_path(&self.settings_path)?;
        tracing::info!(path = %self.settings_path.display(), "settings saved");
        Ok(())
    }
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("pomodoro", &self.pomodoro)
            .field("cursor", &self.cursor)
            .field("input_mode", &self.input_mode)
            .field("status", &self.status)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tempfile::TempDir;

    use crate::notify::Silent;

    fn app(dir: &TempDir) -> (App, Instant) {
        let now = Instant::now();
        let app = App::new(
            Settings::default(),
            dir.path().join("settings.json"),
            Box::new(Silent),
            CueProfile::Single,
            now,
        );
        (app, now)
    }

    #[test]
    fn test_clock_drives_countdown() {
        let dir = TempDir::new().unwrap();
        let (mut app, now) = app(&dir);

        app.toggle_timer(now);
        app.on_tick(now + Duration::from_millis(3500));

        assert_eq!(app.pomodoro.session().remaining_seconds(), 1497);
    }

    #[test]
    fn test_paused_clock_does_not_count() {
        let dir = TempDir::new().unwrap();
        let (mut app, now) = app(&dir);

        app.on_tick(now + Duration::from_secs(10));

        assert_eq!(app.pomodoro.session().remaining_seconds(), 1500);
    }

    #[test]
    fn test_completion_posts_notice() {
        let dir = TempDir::new().unwrap();
        let (mut app, now) = app(&dir);

        app.toggle_timer(now);
        app.on_tick(now + Duration::from_secs(1500));

        assert_eq!(app.status.as_deref(), Some("Focus completed!"));
        assert_eq!(app.pomodoro.session().mode(), Mode::ShortBreak);
    }

    #[test]
    fn test_completion_notice_survives_auto_start() {
        let dir = TempDir::new().unwrap();
        let now = Instant::now();
        let mut app = App::new(
            Settings {
                auto_start: true,
                ..Settings::default()
            },
            dir.path().join("settings.json"),
            Box::new(Silent),
            CueProfile::Single,
            now,
        );

        app.toggle_timer(now);
        app.on_tick(now + Duration::from_secs(1500));

        assert_eq!(app.status.as_deref(), Some("Focus completed!"));
        assert_eq!(app.pomodoro.session().pending_auto_start(), Some(3));

        app.on_tick(now + Duration::from_secs(1503));
        assert!(app.pomodoro.session().is_running());
        assert_eq!(app.pomodoro.session().mode(), Mode::ShortBreak);
    }

    #[test]
    fn test_add_select_and_complete_via_cursor() {
        let dir = TempDir::new().unwrap();
        let (mut app, now) = app(&dir);

        app.begin_add_task();
        app.task_input.push_str("first");
        app.submit_task(now);
        app.begin_add_task();
        app.task_input.push_str("second");
        app.submit_task(now);

        assert_eq!(app.cursor, 1);
        app.select_at_cursor(now);
        assert_eq!(app.pomodoro.current_task_text(), Some("second"));

        app.toggle_at_cursor(now);
        assert_eq!(app.pomodoro.session().stats().completed_tasks, 1);

        app.delete_at_cursor(now);
        assert_eq!(app.cursor, 0);
        assert_eq!(app.tasks().len(), 1);
    }

    #[test]
    fn test_blank_task_is_dropped() {
        let dir = TempDir::new().unwrap();
        let (mut app, now) = app(&dir);

        app.begin_add_task();
        app.task_input.push_str("   ");
        app.submit_task(now);

        assert!(app.tasks().is_empty());
        assert_eq!(app.input_mode, InputMode::Normal);
    }

    #[test]
    fn test_settings_form_saves_and_applies() {
        let dir = TempDir::new().unwrap();
        let (mut app, now) = app(&dir);

        app.open_settings();
        let editor = app.settings_editor.as_mut().unwrap();
        editor.backspace();
        editor.backspace();
        editor.push_char('4');
        editor.push_char('0');
        editor.field = SettingsField::AutoStart;
        editor.toggle();
        app.submit_settings(now);

        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.pomodoro.settings().durations.focus, 40);
        assert!(app.pomodoro.settings().auto_start);
        assert_eq!(app.pomodoro.session().remaining_seconds(), 2400);
        assert_eq!(app.status.as_deref(), Some("Settings saved!"));

        let saved = Settings::load_from_path(&dir.path().join("settings.json")).unwrap();
        assert_eq!(saved, *app.pomodoro.settings());
    }

    #[test]
    fn test_invalid_settings_form_is_rejected() {
        let dir = TempDir::new().unwrap();
        let (mut app, now) = app(&dir);

        app.open_settings();
        let editor = app.settings_editor.as_mut().unwrap();
        editor.field = SettingsField::ShortBreak;
        editor.backspace();
        editor.push_char('x');
        app.submit_settings(now);

        assert_eq!(app.input_mode, InputMode::Settings);
        assert_eq!(app.pomodoro.settings().durations.short_break, 5);
        assert!(app
            .status
            .as_deref()
            .is_some_and(|s| s.contains("short break duration")));
        assert!(!dir.path().join("settings.json").exists());
    }

    #[test]
    fn test_settings_field_cycle() {
        let mut field = SettingsField::Focus;
        for _ in 0..SettingsField::ALL.len() {
            field = field.next();
        }
        assert_eq!(field, SettingsField::Focus);
        assert_eq!(SettingsField::Focus.previous(), SettingsField::Sound);
    }
}
