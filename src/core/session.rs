//! Session state machine.
//!
//! Tracks the active mode, the countdown, and the counters that advance as
//! focus sessions and breaks complete. Running/paused is a flag orthogonal
//! to the mode.

use crate::config::{Durations, Settings};
use crate::core::mode::Mode;
use crate::core::tasks::TaskId;

/// Cooldown before an automatic start, in seconds.
pub const AUTO_START_DELAY_SECS: u32 = 3;

/// Every n-th completed focus session is followed by a long break.
pub const SESSIONS_UNTIL_LONG_BREAK: u32 = 4;

/// Result of a single tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// The timer is paused; nothing happened.
    Idle,
    /// One second was counted; carries the seconds left.
    Counted(u32),
    /// The countdown reached zero.
    Expired,
}

/// What a completed phase led to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completion {
    /// The mode that just finished.
    pub finished: Mode,
    /// The mode now active.
    pub next: Mode,
    /// The current task, if one was attached to a finished focus session.
    pub completed_task: Option<TaskId>,
    /// Whether an automatic start was scheduled.
    pub auto_start_armed: bool,
}

/// Counters shown as statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub completed_focus_sessions: u32,
    pub total_focus_minutes: u32,
    pub completed_tasks: u32,
}

/// Timer state.
#[derive(Debug, Clone)]
pub struct SessionState {
    mode: Mode,
    remaining_seconds: u32,
    running: bool,
    session_count: u32,
    stats: Stats,
    current_task: Option<TaskId>,
    settings: Settings,
    /// Seconds left before a scheduled automatic start.
    pending_auto_start: Option<u32>,
}

impl SessionState {
    /// Create a paused focus session with a full countdown.
    #[must_use]
    pub const fn new(settings: Settings) -> Self {
        Self {
            mode: Mode::Focus,
            remaining_seconds: settings.durations.seconds(Mode::Focus),
            running: false,
            session_count: 1,
            stats: Stats {
                completed_focus_sessions: 0,
                total_focus_minutes: 0,
                completed_tasks: 0,
            },
            current_task: None,
            settings,
            pending_auto_start: None,
        }
    }

    /// Start counting down.
    ///
    /// Returns false if the timer was already running.
    pub fn start(&mut self) -> bool {
        if self.running {
            return false;
        }
        self.running = true;
        true
    }

    /// Stop counting down.
    ///
    /// Returns false if the timer was already paused.
    pub fn pause(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.running = false;
        true
    }

    /// Pause and refill the countdown for the current mode.
    pub fn reset(&mut self) {
        self.pause();
        self.remaining_seconds = self.total_seconds();
    }

    /// Count one second.
    ///
    /// The countdown never goes below zero; reaching zero reports
    /// [`Tick::Expired`] and the caller completes the session.
    pub fn tick(&mut self) -> Tick {
        if !self.running {
            return Tick::Idle;
        }

        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
        if self.remaining_seconds == 0 {
            Tick::Expired
        } else {
            Tick::Counted(self.remaining_seconds)
        }
    }

    /// Finish the current phase and move to the next one.
    pub fn complete(&mut self) -> Completion {
        self.pause();

        let finished = self.mode;
        let mut completed_task = None;

        let next = if finished == Mode::Focus {
            self.stats.completed_focus_sessions += 1;
            self.stats.total_focus_minutes += self.settings.durations.focus;

            if let Some(id) = self.current_task.take() {
                self.stats.completed_tasks += 1;
                completed_task = Some(id);
            }

            if self.stats.completed_focus_sessions % SESSIONS_UNTIL_LONG_BREAK == 0 {
                Mode::LongBreak
            } else {
                Mode::ShortBreak
            }
        } else {
            self.session_count += 1;
            Mode::Focus
        };

        self.switch_mode(next);

        let auto_start_armed = self.settings.auto_start;
        if auto_start_armed {
            self.pending_auto_start = Some(AUTO_START_DELAY_SECS);
        }

        Completion {
            finished,
            next,
            completed_task,
            auto_start_armed,
        }
    }

    /// Pause and switch to `mode` with a full countdown.
    pub fn switch_mode(&mut self, mode: Mode) {
        self.pause();
        self.mode = mode;
        self.remaining_seconds = self.total_seconds();
    }

    /// Replace the configuration.
    ///
    /// Returns true when the active mode's duration changed, in which case
    /// the countdown restarts from the new full duration.
    pub fn apply_settings(&mut self, settings: Settings) -> bool {
        let before = self.settings.durations.minutes(self.mode);
        self.settings = settings;

        let restarted = settings.durations.minutes(self.mode) != before;
        if restarted {
            self.remaining_seconds = self.total_seconds();
        }
        restarted
    }

    /// Count one second off a scheduled automatic start.
    ///
    /// Returns true when the cooldown has elapsed; the schedule is cleared.
    pub fn advance_auto_start(&mut self) -> bool {
        match self.pending_auto_start {
            Some(left) if left <= 1 => {
                self.pending_auto_start = None;
                true
            }
            Some(left) => {
                self.pending_auto_start = Some(left - 1);
                false
            }
            None => false,
        }
    }

    /// Drop a scheduled automatic start.
    ///
    /// Returns true if one was pending.
    pub fn cancel_auto_start(&mut self) -> bool {
        self.pending_auto_start.take().is_some()
    }

    /// Attach or detach the current task.
    pub fn set_current_task(&mut self, id: Option<TaskId>) {
        self.current_task = id;
    }

    /// Detach `id` if it is the current task.
    ///
    /// Returns true if it was.
    pub fn release_task(&mut self, id: TaskId) -> bool {
        if self.current_task == Some(id) {
            self.current_task = None;
            true
        } else {
            false
        }
    }

    /// Detach `id` because it was completed by hand, counting it.
    ///
    /// Returns true if it was the current task.
    pub fn complete_task(&mut self, id: TaskId) -> bool {
        let released = self.release_task(id);
        if released {
            self.stats.completed_tasks += 1;
        }
        released
    }

    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub const fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    /// Full length of the current mode in seconds.
    #[must_use]
    pub const fn total_seconds(&self) -> u32 {
        self.settings.durations.seconds(self.mode)
    }

    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    #[must_use]
    pub const fn session_count(&self) -> u32 {
        self.session_count
    }

    #[must_use]
    pub const fn stats(&self) -> Stats {
        self.stats
    }

    #[must_use]
    pub const fn current_task(&self) -> Option<TaskId> {
        self.current_task
    }

    #[must_use]
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    #[must_use]
    pub const fn durations(&self) -> &Durations {
        &self.settings.durations
    }

    /// Seconds left before a scheduled automatic start.
    #[must_use]
    pub const fn pending_auto_start(&self) -> Option<u32> {
        self.pending_auto_start
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_completion(state: &mut SessionState) -> Completion {
        state.start();
        loop {
            if state.tick() == Tick::Expired {
                return state.complete();
            }
        }
    }

    #[test]
    fn test_new_state() {
        let state = SessionState::default();

        assert_eq!(state.mode(), Mode::Focus);
        assert_eq!(state.remaining_seconds(), 1500);
        assert!(!state.is_running());
        assert_eq!(state.session_count(), 1);
        assert_eq!(state.stats(), Stats::default());
    }

    #[test]
    fn test_start_pause_are_idempotent() {
        let mut state = SessionState::default();

        assert!(state.start());
        assert!(!state.start());
        assert!(state.is_running());

        assert!(state.pause());
        assert!(!state.pause());
        assert!(!state.is_running());
    }

    #[test]
    fn test_tick_while_paused_is_idle() {
        let mut state = SessionState::default();

        assert_eq!(state.tick(), Tick::Idle);
        assert_eq!(state.remaining_seconds(), 1500);
    }

    #[test]
    fn test_ticks_strictly_decrease_until_expiry() {
        let mut state = SessionState::default();
        state.start();

        let mut last = state.remaining_seconds();
        let mut expiries = 0;
        for _ in 0..1500 {
            match state.tick() {
                Tick::Counted(left) => {
                    assert!(left < last);
                    last = left;
                }
                Tick::Expired => expiries += 1,
                Tick::Idle => panic!("timer stopped while running"),
            }
        }

        assert_eq!(expiries, 1);
        assert_eq!(state.remaining_seconds(), 0);
    }

    #[test]
    fn test_focus_completion_scenario() {
        let mut state = SessionState::default();

        let completion = run_to_completion(&mut state);

        assert_eq!(completion.finished, Mode::Focus);
        assert_eq!(completion.next, Mode::ShortBreak);
        assert_eq!(state.stats().completed_focus_sessions, 1);
        assert_eq!(state.stats().total_focus_minutes, 25);
        assert_eq!(state.mode(), Mode::ShortBreak);
        assert_eq!(state.remaining_seconds(), 300);
        assert!(!state.is_running());
    }

    #[test]
    fn test_every_fourth_focus_gets_long_break() {
        let mut state = SessionState::default();

        for round in 1..=8 {
            let focus = run_to_completion(&mut state);
            assert_eq!(focus.finished, Mode::Focus);
            if round % 4 == 0 {
                assert_eq!(focus.next, Mode::LongBreak);
            } else {
                assert_eq!(focus.next, Mode::ShortBreak);
            }

            let count_before = state.session_count();
            let rest = run_to_completion(&mut state);
            assert!(rest.finished.is_break());
            assert_eq!(rest.next, Mode::Focus);
            assert_eq!(state.session_count(), count_before + 1);
        }

        assert_eq!(state.stats().completed_focus_sessions, 8);
        assert_eq!(state.stats().total_focus_minutes, 200);
    }

    #[test]
    fn test_reset_refills_without_touching_counters() {
        let mut state = SessionState::default();
        run_to_completion(&mut state);
        state.start();
        state.tick();
        state.tick();

        state.reset();

        assert!(!state.is_running());
        assert_eq!(state.mode(), Mode::ShortBreak);
        assert_eq!(state.remaining_seconds(), 300);
        assert_eq!(state.stats().completed_focus_sessions, 1);
    }

    #[test]
    fn test_switch_mode_pauses_and_refills() {
        let mut state = SessionState::default();
        state.start();
        state.tick();

        state.switch_mode(Mode::LongBreak);

        assert!(!state.is_running());
        assert_eq!(state.mode(), Mode::LongBreak);
        assert_eq!(state.remaining_seconds(), 900);
    }

    #[test]
    fn test_apply_settings_restarts_only_on_change() {
        let mut state = SessionState::default();
        state.start();
        state.tick();

        let mut settings = *state.settings();
        settings.durations.short_break = 10;
        assert!(!state.apply_settings(settings));
        assert_eq!(state.remaining_seconds(), 1499);

        settings.durations.focus = 30;
        assert!(state.apply_settings(settings));
        assert_eq!(state.remaining_seconds(), 1800);
        assert!(state.is_running());
    }

    #[test]
    fn test_completion_takes_current_task() {
        let mut state = SessionState::default();
        state.set_current_task(Some(TaskId(7)));

        let completion = run_to_completion(&mut state);

        assert_eq!(completion.completed_task, Some(TaskId(7)));
        assert_eq!(state.current_task(), None);
        assert_eq!(state.stats().completed_tasks, 1);
    }

    #[test]
    fn test_break_completion_keeps_current_task() {
        let mut state = SessionState::default();
        state.switch_mode(Mode::ShortBreak);
        state.set_current_task(Some(TaskId(1)));

        let completion = run_to_completion(&mut state);

        assert_eq!(completion.completed_task, None);
        assert_eq!(state.current_task(), Some(TaskId(1)));
    }

    #[test]
    fn test_auto_start_cooldown() {
        let mut state = SessionState::new(Settings {
            auto_start: true,
            ..Settings::default()
        });

        let completion = run_to_completion(&mut state);
        assert!(completion.auto_start_armed);
        assert_eq!(state.pending_auto_start(), Some(AUTO_START_DELAY_SECS));

        assert!(!state.advance_auto_start());
        assert!(!state.advance_auto_start());
        assert!(state.advance_auto_start());
        assert_eq!(state.pending_auto_start(), None);
        assert!(!state.advance_auto_start());
    }

    #[test]
    fn test_no_auto_start_when_disabled() {
        let mut state = SessionState::default();

        let completion = run_to_completion(&mut state);

        assert!(!completion.auto_start_armed);
        assert_eq!(state.pending_auto_start(), None);
        assert!(!state.cancel_auto_start());
    }

    #[test]
    fn test_complete_task_counts_only_current() {
        let mut state = SessionState::default();
        state.set_current_task(Some(TaskId(2)));

        assert!(!state.complete_task(TaskId(3)));
        assert_eq!(state.stats().completed_tasks, 0);

        assert!(state.complete_task(TaskId(2)));
        assert_eq!(state.current_task(), None);
        assert_eq!(state.stats().completed_tasks, 1);
    }
}
