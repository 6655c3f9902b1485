//! Command-line interface for tomata.

pub mod args;
pub mod commands;
