//! Timer and task-list core.
//!
//! Pure state transitions with no terminal or file access. Rendering, sound
//! and persistence hang off the [`Subscriber`] list and the config module.

pub mod events;
mod format;
mod mode;
pub mod pomodoro;
pub mod session;
pub mod tasks;

pub use events::{ChannelSubscriber, Event, LogSubscriber, Subscriber, View};
pub use format::{format_clock, format_duration, format_duration_mmss, format_hours_minutes, progress};
pub use mode::Mode;
pub use pomodoro::Pomodoro;
pub use session::{
    Completion, SessionState, Stats, Tick, AUTO_START_DELAY_SECS, SESSIONS_UNTIL_LONG_BREAK,
};
pub use tasks::{Task, TaskId, TaskList};
