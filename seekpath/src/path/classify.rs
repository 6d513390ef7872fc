//! Path classification: fully qualified, explicitly relative, or neither.
//!
//! These are pure string predicates over the first few characters of a path.
//! They never touch the filesystem.

use crate::platform::Platform;

impl Platform {
    /// Whether `path` identifies a location independent of the working
    /// directory.
    ///
    /// - POSIX: the first character is `/`.
    /// - Windows: the path starts with a separator not followed by a drive
    ///   letter, or with `<letter>:<separator>`.
    ///
    /// A separator followed by a drive letter (`\c:\Foo`) is malformed and
    /// never fully qualified.
    ///
    /// # Examples
    ///
    /// ```
    /// use seekpath::Platform;
    ///
    /// assert!(Platform::Posix.is_fully_qualified("/foo"));
    /// assert!(!Platform::Posix.is_fully_qualified("./foo"));
    ///
    /// assert!(Platform::Windows.is_fully_qualified("E:\\Foo\\Bar"));
    /// assert!(Platform::Windows.is_fully_qualified("\\foo"));
    /// assert!(!Platform::Windows.is_fully_qualified("\\c:\\Foo\\Bar"));
    /// ```
    #[must_use]
    pub fn is_fully_qualified(self, path: &str) -> bool {
        match self {
            Self::Posix => path.starts_with('/'),
            Self::Windows => match path.chars().next() {
                Some(c) if self.is_separator(c) => !starts_with_drive_letter(&path[1..]),
                Some(_) => self.drive_letter_root(path).is_some(),
                None => false,
            },
        }
    }

    /// Whether `path` starts with `./` or `../` (any valid separator).
    ///
    /// # Examples
    ///
    /// ```
    /// use seekpath::Platform;
    ///
    /// assert!(Platform::Posix.is_explicitly_relative("../foo"));
    /// assert!(!Platform::Posix.is_explicitly_relative(".\\foo"));
    /// assert!(Platform::Windows.is_explicitly_relative(".\\foo"));
    /// assert!(!Platform::Windows.is_explicitly_relative("foo"));
    /// ```
    #[must_use]
    pub fn is_explicitly_relative(self, path: &str) -> bool {
        path.strip_prefix("..")
            .or_else(|| path.strip_prefix('.'))
            .and_then(|rest| rest.chars().next())
            .is_some_and(|c| self.is_separator(c))
    }

    /// The drive letter of a `<letter>:<separator>` prefix, Windows only.
    pub(crate) fn drive_letter_root(self, path: &str) -> Option<char> {
        if self != Self::Windows {
            return None;
        }
        let mut chars = path.chars();
        let (Some(letter), Some(':'), Some(sep)) = (chars.next(), chars.next(), chars.next())
        else {
            return None;
        };
        (letter.is_ascii_alphabetic() && self.is_separator(sep)).then_some(letter)
    }
}

fn starts_with_drive_letter(s: &str) -> bool {
    let mut chars = s.chars();
    matches!(
        (chars.next(), chars.next()),
        (Some(letter), Some(':')) if letter.is_ascii_alphabetic()
    )
}

/// [`Platform::is_fully_qualified`] for the native platform.
#[must_use]
pub fn is_fully_qualified(path: &str) -> bool {
    Platform::native().is_fully_qualified(path)
}

/// [`Platform::is_explicitly_relative`] for the native platform.
#[must_use]
pub fn is_explicitly_relative(path: &str) -> bool {
    Platform::native().is_explicitly_relative(path)
}
