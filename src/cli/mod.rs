//! Command-line interface for pomotodo.

pub mod args;
pub mod commands;
