//! Configuration merging and precedence handling.
//!
//! This module implements hierarchical merging of configuration sources.
//! Search paths accumulate across sources; every other field is replaced
//! by the higher-precedence value.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use seekpath::config::{Config, ConfigMerger};
///
/// let low = Config { data_dir: Some("/low".to_string()), ..Default::default() };
/// let high = Config { data_dir: Some("/high".to_string()), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.data_dir, Some("/high".to_string()));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple configuration sources into final config.
    ///
    /// Sources should be provided in order from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();

        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }

        result
    }

    /// Merge source config into target (source overwrites target).
    ///
    /// # Merging Rules
    ///
    /// - `search_paths`: source entries are appended after the target's
    /// - other fields: source overwrites if `Some`
    pub fn merge_into(target: &mut Config, source: &Config) {
        if let Some(ref source_paths) = source.search_paths {
            match &mut target.search_paths {
                Some(target_paths) => target_paths.extend(source_paths.iter().cloned()),
                None => target.search_paths.clone_from(&source.search_paths),
            }
        }

        if source.data_dir.is_some() {
            target.data_dir.clone_from(&source.data_dir);
        }

        if source.output_format.is_some() {
            target.output_format = source.output_format;
        }
    }
}
