//! Audible completion cues.

use std::io::Write;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::PomoError;

/// A single tone of a cue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tone {
    pub frequency_hz: u32,
    pub duration_ms: u32,
}

const SINGLE: [Tone; 1] = [Tone {
    frequency_hz: 800,
    duration_ms: 500,
}];

// C5, E5, G5
const TRIPLE: [Tone; 3] = [
    Tone {
        frequency_hz: 523,
        duration_ms: 200,
    },
    Tone {
        frequency_hz: 659,
        duration_ms: 200,
    },
    Tone {
        frequency_hz: 784,
        duration_ms: 300,
    },
];

/// Which cue to play when a phase completes.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CueProfile {
    /// One short beep.
    #[default]
    Single,
    /// Three ascending tones.
    Triple,
}

impl CueProfile {
    /// Tones making up this cue.
    #[must_use]
    pub const fn tones(self) -> &'static [Tone] {
        match self {
            Self::Single => &SINGLE,
            Self::Triple => &TRIPLE,
        }
    }
}

/// Something that can play a cue.
#[cfg_attr(test, mockall::automock)]
pub trait Chime {
    /// Play `tones` in order.
    ///
    /// # Errors
    ///
    /// Returns an error if the output device cannot be written.
    fn play(&mut self, tones: &[Tone]) -> Result<(), PomoError>;
}

impl<C: Chime + ?Sized> Chime for Box<C> {
    fn play(&mut self, tones: &[Tone]) -> Result<(), PomoError> {
        (**self).play(tones)
    }
}

/// Rings the terminal bell once per tone.
///
/// Terminals have no pitch control, so only the tone count is audible.
#[derive(Debug)]
pub struct TerminalBell<W: Write> {
    out: W,
}

impl<W: Write> TerminalBell<W> {
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    /// Consume the bell and return the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl TerminalBell<std::io::Stdout> {
    /// Bell on standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> Chime for TerminalBell<W> {
    fn play(&mut self, tones: &[Tone]) -> Result<(), PomoError> {
        for _ in tones {
            self.out.write_all(b"\x07")?;
        }
        self.out.flush()?;
        Ok(())
    }
}

/// Plays nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl Chime for Silent {
    fn play(&mut self, _tones: &[Tone]) -> Result<(), PomoError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profiles_differ_in_tone_count() {
        assert_eq!(CueProfile::Single.tones().len(), 1);
        assert_eq!(CueProfile::Single.tones()[0].frequency_hz, 800);
        assert_eq!(CueProfile::Triple.tones().len(), 3);
    }

    #[test]
    fn test_terminal_bell_rings_per_tone() {
        let mut bell = TerminalBell::new(Vec::new());

        bell.play(CueProfile::Triple.tones()).unwrap();

        assert_eq!(bell.into_inner(), b"\x07\x07\x07".to_vec());
    }

    #[test]
    fn test_cue_profile_parses_from_cli_value() {
        assert_eq!(
            CueProfile::from_str("triple", true).unwrap(),
            CueProfile::Triple
        );
    }
}
