//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `SEEKPATH_*` environment variables that
//! override configuration file values.

use crate::config::schema::{Config, OutputFormat};
use crate::error::{Error, Result};
use crate::search::DELIMITER;
use std::env;

/// Extra search paths, `;`-delimited.
pub const SEARCH_PATHS_VAR: &str = "SEEKPATH_SEARCH_PATHS";
/// Data directory override.
pub const DATA_DIR_VAR: &str = "SEEKPATH_DATA_DIR";
/// Output format override (`human` or `json`).
pub const OUTPUT_FORMAT_VAR: &str = "SEEKPATH_OUTPUT_FORMAT";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use seekpath::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// Reads the `SEEKPATH_*` variables from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable holds an invalid value.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        Self::apply_from(config, |name| env::var(name).ok())
    }

    /// Apply overrides read through `lookup` instead of the process
    /// environment.
    ///
    /// Search paths are appended after any already configured; the data
    /// directory and output format replace existing values.
    ///
    /// # Errors
    ///
    /// Returns an error if `SEEKPATH_OUTPUT_FORMAT` is not a known format.
    pub fn apply_from<F>(config: &mut Config, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(SEARCH_PATHS_VAR) {
            let entries = Self::parse_search_paths(&value);
            if !entries.is_empty() {
                config
                    .search_paths
                    .get_or_insert_with(Vec::new)
                    .extend(entries);
            }
        }

        if let Some(data_dir) = lookup(DATA_DIR_VAR) {
            if !data_dir.is_empty() {
                config.data_dir = Some(data_dir);
            }
        }

        if let Some(format) = lookup(OUTPUT_FORMAT_VAR) {
            config.output_format = Some(Self::parse_output_format(&format)?);
        }

        Ok(())
    }

    /// Split a `;`-delimited list, dropping empty entries.
    fn parse_search_paths(s: &str) -> Vec<String> {
        s.split(DELIMITER)
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(String::from)
            .collect()
    }

    fn parse_output_format(s: &str) -> Result<OutputFormat> {
        s.parse().map_err(|message| Error::Validation {
            field: OUTPUT_FORMAT_VAR.into(),
            message,
        })
    }
}
