//! Configuration system for seekpath.
//!
//! This module provides hierarchical configuration with support for:
//! - YAML configuration files (user config and project files)
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//! - Validation
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`SEEKPATH_*`)
//! 3. Private project config (`seekpath.local.yaml`)
//! 4. Project config (`seekpath.yaml`)
//! 5. User config (`~/.seekpath/config.yaml`)
//! 6. Built-in defaults
//!
//! Search paths from every source are kept, in the order above from lowest
//! to highest; other fields take the highest-precedence value.
//!
//! # Examples
//!
//! Basic usage with defaults:
//!
//! ```no_run
//! use seekpath::config::ConfigBuilder;
//!
//! let config = ConfigBuilder::new()
//!     .build()
//!     .unwrap();
//!
//! println!("Search paths: {:?}", config.search_paths);
//! ```
//!
//! Loading from a specific directory:
//!
//! ```no_run
//! use seekpath::config::ConfigBuilder;
//! use std::path::Path;
//!
//! let config = ConfigBuilder::new()
//!     .with_working_dir(Path::new("/path/to/project"))
//!     .build()
//!     .unwrap();
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types at module root
pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{default_config_dir, ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::{Config, OutputFormat};
pub use validator::ConfigValidator;
