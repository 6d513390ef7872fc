//! Search-path registry and file resolution.
//!
//! [`SearchPaths`] keeps an ordered list of existing directories, and
//! [`FileResolver`] looks names up against it (or against a single data
//! directory). Both work through the [`FileSystem`](crate::os::FileSystem)
//! adapter.
//!
//! # Examples
//!
//! ```
//! use seekpath::os::OsFileSystem;
//! use seekpath::{FileResolver, SearchPaths};
//!
//! let mut paths = SearchPaths::new();
//! let resolver = FileResolver::new(&OsFileSystem, &paths, None);
//! assert_eq!(resolver.find("fuubar"), "");
//!
//! assert!(!paths.set("", &OsFileSystem));
//! ```

mod registry;
mod resolver;

pub use registry::{SearchPaths, DELIMITER};
pub use resolver::FileResolver;
