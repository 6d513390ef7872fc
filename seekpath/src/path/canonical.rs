//! Canonical representation of path strings.
//!
//! Canonicalization here is purely textual: `.` segments are removed, `..`
//! segments are collapsed against the segment before them, and separators
//! are rewritten to `/`. Symlinks are never consulted. Three properties of
//! the input survive:
//!
//! - a leading root (`/`, `C:/`) or explicit-relative marker (`./`, `../`)
//! - a trailing separator
//! - leading `..` segments that have nothing left to cancel
//!
//! # Examples
//!
//! ```
//! use seekpath::Platform;
//!
//! let p = Platform::Posix;
//! assert_eq!(p.canonical("foo/baz/../bar"), "foo/bar");
//! assert_eq!(p.canonical("./././foo"), "./foo");
//! assert_eq!(p.canonical("./.././foo/"), "../foo/");
//! ```

use crate::path::segments::Segments;
use crate::platform::Platform;

impl Platform {
    /// The canonical representation of `path`, using `/` as separator.
    #[must_use]
    pub fn canonical(self, path: &str) -> String {
        Segments::parse(self, path).collapse().render()
    }

    /// The canonical representation of `path` after making it absolute
    /// against `cwd`.
    ///
    /// Fully qualified paths ignore `cwd`. An empty `cwd` leaves relative
    /// paths relative.
    ///
    /// # Examples
    ///
    /// ```
    /// use seekpath::Platform;
    ///
    /// let p = Platform::Posix;
    /// assert_eq!(p.absolute("/work/", "../lib/x"), "/lib/x");
    /// assert_eq!(p.absolute("/work", "/etc/./hosts"), "/etc/hosts");
    /// ```
    #[must_use]
    pub fn absolute(self, cwd: &str, path: &str) -> String {
        if self.is_fully_qualified(path) {
            self.canonical(path)
        } else {
            let joined = format!("{}{path}", self.with_trailing_separator(cwd));
            self.canonical(&joined)
        }
    }
}

/// [`Platform::canonical`] for the native platform.
#[must_use]
pub fn canonical(path: &str) -> String {
    Platform::native().canonical(path)
}
