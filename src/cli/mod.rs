//! Command-line interface
//!
//! Argument parsing and command handlers for the `envgate` binary.

pub mod args;
pub mod commands;
