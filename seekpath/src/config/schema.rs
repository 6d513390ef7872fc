//! Configuration schema definitions.
//!
//! This module defines the configuration structure for seekpath: the
//! initial search paths, the data directory and the preferred output
//! format of the command-line tool.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Complete configuration structure.
///
/// Every field is optional so that partial configurations from several
/// sources can be layered on top of each other.
///
/// # Examples
///
/// ```
/// use seekpath::config::Config;
///
/// let config = Config {
///     search_paths: Some(vec!["./assets".to_string()]),
///     ..Default::default()
/// };
/// assert!(config.data_dir.is_none());
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Directories searched for files, in priority order.
    ///
    /// Relative entries are resolved against the working directory when the
    /// locator is built.
    pub search_paths: Option<Vec<String>>,

    /// Directory holding installed application data.
    pub data_dir: Option<String>,

    /// Output format for reporting commands.
    pub output_format: Option<OutputFormat>,
}

/// Output format for command results.
///
/// # Examples
///
/// ```
/// use seekpath::config::OutputFormat;
///
/// let format = OutputFormat::Json;
/// assert_eq!(format.to_string(), "json");
/// assert_eq!("human".parse::<OutputFormat>().unwrap(), OutputFormat::Human);
/// ```
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text meant for people.
    #[default]
    Human,
    /// JSON output format.
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Human => write!(f, "human"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "human" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            other => Err(format!(
                "unknown output format '{other}' (expected 'human' or 'json')"
            )),
        }
    }
}
