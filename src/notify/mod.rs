//! Completion cues and transient notices.

mod cue;
mod notice;

pub use cue::{Chime, CueProfile, Silent, TerminalBell, Tone};
pub use notice::{Notice, NoticeBoard, Notifier, NOTICE_TTL};

#[cfg(test)]
pub use cue::MockChime;
