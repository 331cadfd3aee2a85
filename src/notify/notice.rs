//! Transient notices and the completion notifier.

use std::time::{Duration, Instant};

use crate::core::Event;
use crate::notify::cue::{Chime, CueProfile};

/// How long a notice stays visible.
pub const NOTICE_TTL: Duration = Duration::from_secs(3);

/// A message shown until it expires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub posted_at: Instant,
}

/// Holds at most one notice; a new one replaces the old.
#[derive(Debug, Clone)]
pub struct NoticeBoard {
    current: Option<Notice>,
    ttl: Duration,
}

impl NoticeBoard {
    #[must_use]
    pub const fn new(ttl: Duration) -> Self {
        Self { current: None, ttl }
    }

    /// Show `message` from `now`.
    pub fn post(&mut self, message: impl Into<String>, now: Instant) {
        self.current = Some(Notice {
            message: message.into(),
            posted_at: now,
        });
    }

    /// The message visible at `now`, dropping it once expired.
    pub fn current(&mut self, now: Instant) -> Option<&str> {
        let expired = self
            .current
            .as_ref()
            .is_some_and(|n| now.saturating_duration_since(n.posted_at) >= self.ttl);
        if expired {
            self.current = None;
        }
        self.current.as_ref().map(|n| n.message.as_str())
    }
}

impl Default for NoticeBoard {
    fn default() -> Self {
        Self::new(NOTICE_TTL)
    }
}

/// Turns state-machine events into notices and cues.
#[derive(Debug)]
pub struct Notifier<C: Chime> {
    chime: C,
    profile: CueProfile,
    board: NoticeBoard,
}

impl<C: Chime> Notifier<C> {
    pub fn new(chime: C, profile: CueProfile) -> Self {
        Self {
            chime,
            profile,
            board: NoticeBoard::default(),
        }
    }

    /// React to `event`.
    ///
    /// Completions post a notice and, when `sound_enabled`, play the cue.
    /// A failing chime is logged and otherwise ignored.
    pub fn handle(&mut self, event: &Event, sound_enabled: bool, now: Instant) {
        if let Some(message) = event.notice() {
            self.board.post(message, now);
        }

        if matches!(event, Event::SessionCompleted { .. }) && sound_enabled {
            if let Err(e) = self.chime.play(self.profile.tones()) {
                tracing::warn!(error = %e, "failed to play completion cue");
            }
        }
    }

    /// Post an arbitrary message, e.g. a rejected settings form.
    pub fn post(&mut self, message: impl Into<String>, now: Instant) {
        self.board.post(message, now);
    }

    /// The notice visible at `now`.
    pub fn current(&mut self, now: Instant) -> Option<&str> {
        self.board.current(now)
    }
}
