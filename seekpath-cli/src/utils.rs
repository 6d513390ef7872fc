//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including configuration loading, locator construction and output
//! formatting.

use crate::error::CliError;
use clap::ValueEnum;
use seekpath::os::{FileSystem, OsFileSystem};
use seekpath::{Config, ConfigBuilder, Locator, OutputFormat, Platform};
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Directory holding the user `config.yaml`.
    pub config_dir: Option<PathBuf>,

    /// Search paths replacing the configured ones.
    pub search_paths: Option<String>,

    /// Data directory replacing the configured one.
    pub data_dir: Option<String>,
}

/// Output format selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum FormatArg {
    /// Plain text
    Human,
    /// JSON
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Human => OutputFormat::Human,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

/// Path rules selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum PlatformArg {
    /// Rules of the host system
    Native,
    /// POSIX rules (`/` only)
    Posix,
    /// Windows rules (`\` and `/`, drive letters)
    Windows,
}

impl From<PlatformArg> for Platform {
    fn from(arg: PlatformArg) -> Self {
        match arg {
            PlatformArg::Native => Platform::native(),
            PlatformArg::Posix => Platform::Posix,
            PlatformArg::Windows => Platform::Windows,
        }
    }
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (applied later by [`build_locator`])
/// 2. Environment variables
/// 3. Configuration files
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();
    if let Some(ref dir) = global.config_dir {
        builder = builder.with_config_dir(dir);
    }

    builder.build().map_err(|e| CliError::Config(e.to_string()))
}

/// Build the locator for this invocation.
///
/// `--search-paths` replaces the configured search paths entirely and must
/// be valid; configured entries that do not exist are only warned about.
pub fn build_locator(global: &GlobalOptions, config: &Config) -> Result<Locator, CliError> {
    let mut locator = Locator::from_config(config, OsFileSystem);

    if let Some(ref value) = global.search_paths {
        if !locator.set_search_paths(value) {
            return Err(CliError::InvalidArguments(format!(
                "--search-paths {value:?} names no existing directory or includes one that does not exist"
            )));
        }
    }

    if let Some(ref data_dir) = global.data_dir {
        locator.set_data_dir(Some(data_dir.clone()));
    }

    Ok(locator)
}

/// Pick the output format: command-line flag, then configuration, then human.
pub fn resolve_format(flag: Option<FormatArg>, config: &Config) -> OutputFormat {
    flag.map(OutputFormat::from)
        .or(config.output_format)
        .unwrap_or_default()
}

/// The working directory in native form with a trailing separator.
pub fn working_dir() -> Result<String, CliError> {
    OsFileSystem.current_dir().map_err(CliError::from)
}

/// Write `value` to stdout as pretty-printed JSON.
pub fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    serde_json::to_writer_pretty(&mut handle, value)?;
    writeln!(handle)?;
    Ok(())
}
