//! Pitchroom CLI library.
//!
//! Command definitions and handlers for the `pitchroom` binary: submit a
//! pitch document through the extraction pipeline, browse stored
//! submissions, track review stages and export for reporting.

pub mod cli;
pub mod commands;
pub mod notify;

pub use cli::{Cli, Command};
pub use notify::LogNotifier;
