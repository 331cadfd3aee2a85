//! pomotodo - A terminal Pomodoro timer with a built-in task list
//!
//! This crate provides the focus/break session state machine, an in-memory
//! task list, persisted timer settings and an interactive terminal widget.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod notify;
pub mod output;
pub mod tui;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::PomoError;
pub use crate::core::Pomodoro;
