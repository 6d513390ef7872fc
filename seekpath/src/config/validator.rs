//! Configuration validation.
//!
//! Checks are purely textual; whether a search path actually exists is
//! decided later, when the entries are registered with the locator.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::search::DELIMITER;

/// Validates configuration values.
///
/// # Examples
///
/// ```
/// use seekpath::config::{Config, ConfigValidator};
///
/// let config = Config::default();
/// ConfigValidator::validate(&config).unwrap();
///
/// let bad = Config { data_dir: Some(String::new()), ..Default::default() };
/// assert!(ConfigValidator::validate(&bad).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the first offending field.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref search_paths) = config.search_paths {
            for (index, entry) in search_paths.iter().enumerate() {
                Self::validate_search_path(index, entry)?;
            }
        }

        if let Some(ref data_dir) = config.data_dir {
            Self::validate_path_text("data_dir", data_dir)?;
        }

        Ok(())
    }

    fn validate_search_path(index: usize, entry: &str) -> Result<()> {
        let field = format!("search_paths[{index}]");
        Self::validate_path_text(&field, entry)?;

        if entry.contains(DELIMITER) {
            return Err(Error::Validation {
                field,
                message: format!("Cannot contain the '{DELIMITER}' delimiter; list entries separately"),
            });
        }

        Ok(())
    }

    /// Non-empty after trimming, and no null bytes.
    fn validate_path_text(field: &str, value: &str) -> Result<()> {
        if value.trim().is_empty() {
            return Err(Error::Validation {
                field: field.into(),
                message: "Cannot be empty or only whitespace".into(),
            });
        }

        if value.contains('\0') {
            return Err(Error::Validation {
                field: field.into(),
                message: "Cannot contain null bytes".into(),
            });
        }

        Ok(())
    }
}
