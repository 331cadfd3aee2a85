//! The widget's single state object.
//!
//! [`Pomodoro`] owns the session state machine and the task list, keeps the
//! current-task reference consistent between them, and publishes every
//! change to its subscribers. Construct one at startup and pass it to the
//! driver; there is no global instance.

use crate::config::Settings;
use crate::core::events::{Event, Subscriber, View};
use crate::core::mode::Mode;
use crate::core::session::{SessionState, Tick};
use crate::core::tasks::{TaskId, TaskList};

/// Timer plus task list.
pub struct Pomodoro {
    session: SessionState,
    tasks: TaskList,
    subscribers: Vec<Box<dyn Subscriber>>,
}

impl Pomodoro {
    /// Create a paused focus session with an empty task list.
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        Self {
            session: SessionState::new(settings),
            tasks: TaskList::new(),
            subscribers: Vec::new(),
        }
    }

    /// Register a subscriber for all future changes.
    pub fn subscribe(&mut self, subscriber: impl Subscriber + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Start the countdown. Cancels a scheduled automatic start.
    pub fn start(&mut self) {
        self.cancel_auto_start();
        if self.session.start() {
            self.emit(Event::Started);
        }
    }

    /// Pause the countdown. Cancels a scheduled automatic start.
    pub fn pause(&mut self) {
        self.cancel_auto_start();
        if self.session.pause() {
            self.emit(Event::Paused);
        }
    }

    /// Start when paused, pause when running.
    pub fn toggle(&mut self) {
        if self.session.is_running() {
            self.pause();
        } else {
            self.start();
        }
    }

    /// Pause and refill the countdown. Cancels a scheduled automatic start.
    pub fn reset(&mut self) {
        self.cancel_auto_start();
        self.session.reset();
        self.emit(Event::Reset);
    }

    /// Count one second while running, completing the phase at zero.
    pub fn tick(&mut self) {
        match self.session.tick() {
            Tick::Idle => {}
            Tick::Counted(left) => self.emit(Event::Ticked(left)),
            Tick::Expired => self.complete_session(),
        }
    }

    /// Advance one second of wall time.
    ///
    /// Ticks while running; otherwise counts down a scheduled automatic
    /// start and fires it when due.
    pub fn advance(&mut self) {
        if self.session.is_running() {
            self.tick();
        } else if self.session.advance_auto_start() {
            tracing::debug!(mode = %self.session.mode(), "auto-start fired");
            if self.session.start() {
                self.emit(Event::Started);
            }
        }
    }

    /// Finish the current phase now.
    ///
    /// A finished focus session completes the current task, if any.
    pub fn complete_session(&mut self) {
        let completion = self.session.complete();

        if let Some(id) = completion.completed_task {
            if self.tasks.complete(id) {
                self.emit(Event::TaskToggled {
                    id,
                    completed: true,
                });
            }
        }

        self.emit(Event::ModeSwitched(completion.next));
        self.emit(Event::SessionCompleted {
            finished: completion.finished,
            next: completion.next,
            completed_task: completion.completed_task,
        });

        if completion.auto_start_armed {
            if let Some(delay_secs) = self.session.pending_auto_start() {
                self.emit(Event::AutoStartScheduled { delay_secs });
            }
        }
    }

    /// Pause and switch to `mode`. Cancels a scheduled automatic start.
    pub fn switch_mode(&mut self, mode: Mode) {
        self.cancel_auto_start();
        self.session.switch_mode(mode);
        self.emit(Event::ModeSwitched(mode));
    }

    /// Replace the configuration.
    ///
    /// Callers validate first; see [`Settings::validate`]. If the active
    /// mode's duration changed the countdown restarts. Turning auto-start off
    /// cancels a scheduled start.
    pub fn apply_settings(&mut self, settings: Settings) {
        if !settings.auto_start {
            self.cancel_auto_start();
        }
        let restarted = self.session.apply_settings(settings);
        self.emit(Event::SettingsApplied { restarted });
    }

    /// Append a task. Blank text is ignored.
    pub fn add_task(&mut self, text: &str) -> Option<TaskId> {
        let id = self.tasks.add(text)?;
        self.emit(Event::TaskAdded(id));
        Some(id)
    }

    /// Make `id` the current task.
    ///
    /// Unknown or completed ids leave nothing selected and clear the current
    /// task.
    pub fn select_task(&mut self, id: TaskId) {
        let selected = self.tasks.select(id);
        self.session.set_current_task(selected);
        self.emit(Event::TaskSelected(selected));
    }

    /// Flip completion of `id`. Unknown ids are ignored.
    ///
    /// Completing the current task detaches it and counts it; reopening a
    /// task never re-attaches it.
    pub fn toggle_complete(&mut self, id: TaskId) {
        let Some(completed) = self.tasks.toggle(id) else {
            return;
        };
        if completed {
            self.session.complete_task(id);
        }
        self.emit(Event::TaskToggled { id, completed });
    }

    /// Remove `id`. Unknown ids are ignored.
    pub fn delete_task(&mut self, id: TaskId) {
        if self.tasks.remove(id).is_none() {
            return;
        }
        self.session.release_task(id);
        self.emit(Event::TaskDeleted(id));
    }

    /// Snapshot for rendering.
    #[must_use]
    pub fn view(&self) -> View {
        View {
            mode: self.session.mode(),
            remaining_seconds: self.session.remaining_seconds(),
            total_seconds: self.session.total_seconds(),
            running: self.session.is_running(),
            session_count: self.session.session_count(),
            current_task_text: self.current_task_text().map(str::to_string),
            tasks: self.tasks.tasks().to_vec(),
            stats: self.session.stats(),
        }
    }

    /// Text of the current task, if one is attached.
    #[must_use]
    pub fn current_task_text(&self) -> Option<&str> {
        self.session
            .current_task()
            .and_then(|id| self.tasks.get(id))
            .map(|t| t.text.as_str())
    }

    #[must_use]
    pub const fn session(&self) -> &SessionState {
        &self.session
    }

    #[must_use]
    pub const fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    #[must_use]
    pub const fn settings(&self) -> &Settings {
        self.session.settings()
    }

    fn cancel_auto_start(&mut self) {
        if self.session.cancel_auto_start() {
            self.emit(Event::AutoStartCancelled);
        }
    }

    fn emit(&mut self, event: Event) {
        if self.subscribers.is_empty() {
            return;
        }
        let view = self.view();
        for subscriber in &mut self.subscribers {
            subscriber.on_event(&event, &view);
        }
    }
}

impl Default for Pomodoro {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl std::fmt::Debug for Pomodoro {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pomodoro")
            .field("session", &self.session)
            .field("tasks", &self.tasks)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
