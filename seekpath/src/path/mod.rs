//! String-based path algebra.
//!
//! This module answers questions about path strings without touching the
//! filesystem (apart from [`path_equal`], which asks for the working
//! directory).
//!
//! # Key Concepts
//!
//! ## Classification
//!
//! - **Fully qualified** paths locate something independent of the working
//!   directory: `/usr/lib` on POSIX, `C:\Data` or `\Data` on Windows.
//! - **Explicitly relative** paths start with `./` or `../`.
//! - Everything else (`foo/bar`, `""`, `\c:\Foo`) is neither.
//!
//! ## Canonical representation
//!
//! `.` segments are removed, `..` segments are collapsed where possible and
//! separators become `/`. Leading markers and a trailing separator survive.
//!
//! ## Platform rules
//!
//! Every operation is a method on [`Platform`](crate::Platform) so that
//! Windows and POSIX rules can be used on any host. The free functions
//! re-exported here apply the native platform.
//!
//! # Examples
//!
//! ```
//! use seekpath::path;
//!
//! assert!(path::is_explicitly_relative("./data"));
//! assert_eq!(path::canonical("foo/baz/../bar"), "foo/bar");
//! assert_eq!(path::extension("mesh.xml"), "xml");
//! assert_eq!(path::directory("some/other/foo.bar"), "some/other/");
//! ```

pub mod canonical;
pub mod classify;
pub mod equality;
pub mod parts;
pub mod relative;
mod segments;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use canonical::canonical;
pub use classify::{is_explicitly_relative, is_fully_qualified};
pub use equality::path_equal;
pub use parts::{basename, directory, extension, filename};
