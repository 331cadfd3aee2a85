//! Command implementations for pomotodo.
//!
//! The interactive timer lives in [`crate::tui`]; these are the one-shot
//! commands.

mod completions;
mod settings;

pub use completions::completions;
pub use settings::settings;
