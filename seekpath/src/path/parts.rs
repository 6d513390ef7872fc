//! Filename, extension, basename and directory accessors.
//!
//! All accessors slice the input as written; nothing is normalized.

use crate::platform::Platform;

impl Platform {
    /// Everything after the last separator.
    ///
    /// # Examples
    ///
    /// ```
    /// use seekpath::Platform;
    ///
    /// assert_eq!(Platform::Posix.filename("some/other/foo.bar"), "foo.bar");
    /// assert_eq!(Platform::Posix.filename("foo"), "foo");
    /// ```
    #[must_use]
    pub fn filename(self, path: &str) -> &str {
        match self.last_separator(path) {
            Some(index) => &path[index + 1..],
            None => path,
        }
    }

    /// Everything up to and including the last separator, or `""`.
    ///
    /// # Examples
    ///
    /// ```
    /// use seekpath::Platform;
    ///
    /// assert_eq!(Platform::Posix.directory("some/other/foo.bar"), "some/other/");
    /// assert_eq!(Platform::Posix.directory("../foo"), "../");
    /// assert_eq!(Platform::Posix.directory("foo"), "");
    /// ```
    #[must_use]
    pub fn directory(self, path: &str) -> &str {
        match self.last_separator(path) {
            Some(index) => &path[..=index],
            None => "",
        }
    }

    /// The filename suffix after its last `.`, or `""` without one.
    ///
    /// # Examples
    ///
    /// ```
    /// use seekpath::Platform;
    ///
    /// assert_eq!(Platform::Posix.extension("foo.baz.bar"), "bar");
    /// assert_eq!(Platform::Posix.extension("dir.d/README"), "");
    /// ```
    #[must_use]
    pub fn extension(self, path: &str) -> &str {
        let name = self.filename(path);
        name.rfind('.').map_or("", |index| &name[index + 1..])
    }

    /// The filename without its final `.suffix`.
    ///
    /// # Examples
    ///
    /// ```
    /// use seekpath::Platform;
    ///
    /// assert_eq!(Platform::Posix.basename("foo.baz.bar"), "foo.baz");
    /// assert_eq!(Platform::Posix.basename("/usr/bin/env"), "env");
    /// ```
    #[must_use]
    pub fn basename(self, path: &str) -> &str {
        let name = self.filename(path);
        name.rfind('.').map_or(name, |index| &name[..index])
    }

    // Separators are ASCII, so `index + 1` is a char boundary.
    fn last_separator(self, path: &str) -> Option<usize> {
        path.rfind(|c| self.is_separator(c))
    }
}

/// [`Platform::filename`] for the native platform.
#[must_use]
pub fn filename(path: &str) -> &str {
    Platform::native().filename(path)
}

/// [`Platform::directory`] for the native platform.
#[must_use]
pub fn directory(path: &str) -> &str {
    Platform::native().directory(path)
}

/// [`Platform::extension`] for the native platform.
#[must_use]
pub fn extension(path: &str) -> &str {
    Platform::native().extension(path)
}

/// [`Platform::basename`] for the native platform.
#[must_use]
pub fn basename(path: &str) -> &str {
    Platform::native().basename(path)
}
