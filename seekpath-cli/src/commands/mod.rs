//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `classify`: Report whether a path is fully qualified or explicitly relative
//! - `canonical`: Print the canonical form of a path
//! - `equal`: Check whether two paths name the same location
//! - `split`: Show the filename, extension, basename and directory of a path
//! - `relative`: Express one path relative to another
//! - `find`: Locate a file through the search paths or the data directory
//! - `search_paths`: Show the effective search paths
//! - `dirs`: Show the well-known directories
//! - `mkdir`: Create a directory and its parents
//! - `validate`: Validate a configuration file
//! - `completions`: Generate shell completion scripts

pub mod canonical;
pub mod classify;
pub mod completions;
pub mod dirs;
pub mod equal;
pub mod find;
pub mod mkdir;
pub mod relative;
pub mod search_paths;
pub mod split;
pub mod validate;

pub use canonical::CanonicalCommand;
pub use classify::ClassifyCommand;
pub use completions::CompletionsCommand;
pub use dirs::DirsCommand;
pub use equal::EqualCommand;
pub use find::FindCommand;
pub use mkdir::MkdirCommand;
pub use relative::RelativeCommand;
pub use search_paths::SearchPathsCommand;
pub use split::SplitCommand;
pub use validate::ValidateCommand;
