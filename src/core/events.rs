//! State-change notifications.
//!
//! Every operation on [`crate::core::Pomodoro`] that changes something
//! publishes an [`Event`] together with a [`View`] of the new state to all
//! registered [`Subscriber`]s.

use std::sync::mpsc::Sender;

use crate::core::mode::Mode;
use crate::core::session::Stats;
use crate::core::tasks::{Task, TaskId};

/// Something that changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Started,
    Paused,
    Reset,
    /// One second was counted; carries the seconds left.
    Ticked(u32),
    ModeSwitched(Mode),
    SessionCompleted {
        finished: Mode,
        next: Mode,
        completed_task: Option<TaskId>,
    },
    AutoStartScheduled { delay_secs: u32 },
    AutoStartCancelled,
    SettingsApplied { restarted: bool },
    TaskAdded(TaskId),
    /// The selection changed; `None` means nothing is selected.
    TaskSelected(Option<TaskId>),
    TaskToggled { id: TaskId, completed: bool },
    TaskDeleted(TaskId),
}

impl Event {
    /// Transient message for the notice area, if this event warrants one.
    ///
    /// A scheduled auto-start posts nothing so the completion notice stays up;
    /// the timer shows the pending countdown instead.
    #[must_use]
    pub fn notice(&self) -> Option<String> {
        match self {
            // Names the phase that just ended, not the one switched into.
            Self::SessionCompleted { finished, .. } => Some(format!("{finished} completed!")),
            Self::SettingsApplied { .. } => Some("Settings saved!".to_string()),
            _ => None,
        }
    }
}

/// Everything a render surface needs after a change.
#[derive(Debug, Clone, PartialEq)]
pub struct View {
    pub mode: Mode,
    pub remaining_seconds: u32,
    pub total_seconds: u32,
    pub running: bool,
    pub session_count: u32,
    pub current_task_text: Option<String>,
    pub tasks: Vec<Task>,
    pub stats: Stats,
}

/// Receives every state change.
pub trait Subscriber {
    fn on_event(&mut self, event: &Event, view: &View);
}

impl<F> Subscriber for F
where
    F: FnMut(&Event, &View),
{
    fn on_event(&mut self, event: &Event, view: &View) {
        self(event, view);
    }
}

/// Forwards events to a channel; a closed receiver is ignored.
#[derive(Debug, Clone)]
pub struct ChannelSubscriber(pub Sender<Event>);

impl Subscriber for ChannelSubscriber {
    fn on_event(&mut self, event: &Event, _view: &View) {
        let _ = self.0.send(event.clone());
    }
}

/// Mirrors events into the log.
#[derive(Debug, Default)]
pub struct LogSubscriber;

impl Subscriber for LogSubscriber {
    fn on_event(&mut self, event: &Event, view: &View) {
        match event {
            Event::Ticked(_) => {}
            Event::SessionCompleted {
                finished,
                next,
                completed_task,
            } => {
                tracing::info!(
                    %finished,
                    %next,
                    task = ?completed_task,
                    sessions = view.stats.completed_focus_sessions,
                    focus_minutes = view.stats.total_focus_minutes,
                    "session completed"
                );
            }
            other => {
                tracing::debug!(
                    event = ?other,
                    mode = %view.mode,
                    remaining = view.remaining_seconds,
                    running = view.running,
                    "state changed"
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    fn empty_view() -> View {
        View {
            mode: Mode::Focus,
            remaining_seconds: 1500,
            total_seconds: 1500,
            running: false,
            session_count: 1,
            current_task_text: None,
            tasks: Vec::new(),
            stats: Stats::default(),
        }
    }

    #[test]
    fn test_completion_notice_names_finished_mode() {
        let event = Event::SessionCompleted {
            finished: Mode::Focus,
            next: Mode::ShortBreak,
            completed_task: None,
        };
        assert_eq!(event.notice().as_deref(), Some("Focus completed!"));
        assert_eq!(Event::Started.notice(), None);
    }

    #[test]
    fn test_auto_start_schedule_posts_no_notice() {
        let event = Event::AutoStartScheduled { delay_secs: 3 };
        assert_eq!(event.notice(), None);
    }

    #[test]
    fn test_channel_subscriber_forwards() {
        let (tx, rx) = mpsc::channel();
        let mut sub = ChannelSubscriber(tx);

        sub.on_event(&Event::Paused, &empty_view());

        assert_eq!(rx.try_recv().unwrap(), Event::Paused);
    }

    #[test]
    fn test_channel_subscriber_ignores_closed_receiver() {
        let (tx, rx) = mpsc::channel::<Event>();
        drop(rx);
        let mut sub = ChannelSubscriber(tx);

        sub.on_event(&Event::Reset, &empty_view());
    }

    #[test]
    fn test_closure_subscriber() {
        let mut seen = Vec::new();
        {
            let mut sub = |event: &Event, _: &View| seen.push(event.clone());
            sub.on_event(&Event::Started, &empty_view());
        }
        assert_eq!(seen, vec![Event::Started]);
    }
}
