//! Library exports for seekpath-cli.
//!
//! This module exports the CLI structure for use by benchmarks and
//! documentation tooling.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

pub use cli::Cli;
