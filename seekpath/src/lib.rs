#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # seekpath
//!
//! Cross-platform path algebra and search-path based file resolution.
//!
//! Path strings are classified, canonicalized and compared under either
//! POSIX or Windows rules on any host, and files are located by trying a
//! prioritized list of search directories.
//!
//! ## Core Types
//!
//! - [`Platform`]: Separator rules and the path operations that depend on them
//! - [`SearchPaths`] and [`FileResolver`]: Search-path registry and lookup
//! - [`Locator`]: Owns the registry and data directory for an application
//! - [`FileSystem`] and [`OsFileSystem`]: Operating-system adapter
//! - [`Config`] and [`ConfigBuilder`]: Layered configuration
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use seekpath::{path, Platform};
//!
//! assert_eq!(path::canonical("foo/baz/../bar"), "foo/bar");
//! assert!(Platform::Windows.is_fully_qualified("C:\\Data"));
//! assert!(!Platform::Windows.is_fully_qualified("\\c:\\Foo"));
//! assert_eq!(Platform::Windows.canonical("a\\.\\b\\"), "a/b/");
//! ```

pub mod config;
pub mod error;
pub mod locator;
pub mod logging;
pub mod os;
pub mod path;
pub mod platform;
pub mod search;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder, OutputFormat};
pub use error::{Error, Result};
pub use locator::Locator;
pub use logging::{init_logger, LogLevel, Logger};
pub use os::{FileSystem, OsFileSystem};
pub use platform::{native_separator, valid_separators, Platform};
pub use search::{FileResolver, SearchPaths};
