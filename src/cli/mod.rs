//! CLI module
//!
//! Command-line interface: parse arguments, resolve configuration, run the
//! probe and print the result.

mod commands;
mod runner;

pub use commands::Cli;
pub use runner::{Runner, NO_RESULTS_MESSAGE};
