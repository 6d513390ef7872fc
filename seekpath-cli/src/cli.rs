//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CanonicalCommand, ClassifyCommand, CompletionsCommand, DirsCommand, EqualCommand, FindCommand,
    MkdirCommand, RelativeCommand, SearchPathsCommand, SplitCommand, ValidateCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Inspect paths and resolve files against search paths.
#[derive(Parser)]
#[command(name = "seekpath")]
#[command(version, about = "Inspect paths and resolve files against search paths", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Directory holding the user configuration file
    #[arg(long, value_name = "PATH", global = true, env = "SEEKPATH_CONFIG_DIR")]
    pub config_dir: Option<PathBuf>,

    /// Replace the configured search paths (`;`-delimited)
    #[arg(long, value_name = "PATHS", global = true, allow_hyphen_values = true)]
    pub search_paths: Option<String>,

    /// Override the data directory
    #[arg(long, value_name = "PATH", global = true)]
    pub data_dir: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Report whether a path is fully qualified or explicitly relative
    Classify(ClassifyCommand),

    /// Print the canonical form of a path
    Canonical(CanonicalCommand),

    /// Check whether two paths name the same location
    Equal(EqualCommand),

    /// Show the filename, extension, basename and directory of a path
    Split(SplitCommand),

    /// Express one path relative to another
    Relative(RelativeCommand),

    /// Locate a file through the search paths or the data directory
    Find(FindCommand),

    /// Show the effective search paths
    SearchPaths(SearchPathsCommand),

    /// Show the working, executable, temporary, home and data directories
    Dirs(DirsCommand),

    /// Create a directory and any missing parents
    Mkdir(MkdirCommand),

    /// Validate a configuration file
    Validate(ValidateCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
