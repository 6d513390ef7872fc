//! Platform path conventions.
//!
//! [`Platform`] is the single place where Windows-like and POSIX-like rules
//! differ. Everything else in the crate asks a `Platform` value instead of
//! using conditional compilation, so both rule sets can be exercised on any
//! host.

use std::fmt;

/// Separators accepted on Windows-like platforms, native one first.
const WINDOWS_SEPARATORS: &[char] = &['\\', '/'];

/// Separators accepted on POSIX-like platforms.
const POSIX_SEPARATORS: &[char] = &['/'];

/// Path convention family.
///
/// # Examples
///
/// ```
/// use seekpath::Platform;
///
/// let windows = Platform::Windows;
/// assert_eq!(windows.native_separator(), '\\');
/// assert_eq!(windows.valid_separators(), &['\\', '/']);
///
/// let posix = Platform::Posix;
/// assert_eq!(posix.native_separator(), '/');
/// assert_eq!(posix.valid_separators(), &['/']);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    /// Unix, macOS and friends: `/` only, rooted paths start with `/`.
    Posix,
    /// Windows: `\` and `/`, drive letters.
    Windows,
}

impl Platform {
    /// The platform this binary was built for.
    #[must_use]
    pub const fn native() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else {
            Self::Posix
        }
    }

    /// The separator written when producing native output.
    #[must_use]
    pub const fn native_separator(self) -> char {
        match self {
            Self::Posix => '/',
            Self::Windows => '\\',
        }
    }

    /// All separators accepted when reading input; the native one is first.
    #[must_use]
    pub const fn valid_separators(self) -> &'static [char] {
        match self {
            Self::Posix => POSIX_SEPARATORS,
            Self::Windows => WINDOWS_SEPARATORS,
        }
    }

    /// Whether `c` separates path segments on this platform.
    #[must_use]
    pub fn is_separator(self, c: char) -> bool {
        self.valid_separators().contains(&c)
    }

    /// Whether `path` ends with any valid separator.
    #[must_use]
    pub fn ends_with_separator(self, path: &str) -> bool {
        path.chars().next_back().is_some_and(|c| self.is_separator(c))
    }

    /// Rewrite every valid separator in `path` to the native one.
    #[must_use]
    pub fn to_native(self, path: &str) -> String {
        let native = self.native_separator();
        path.chars()
            .map(|c| if self.is_separator(c) { native } else { c })
            .collect()
    }

    /// Return `path` ending in exactly one native separator.
    ///
    /// An empty input stays empty.
    #[must_use]
    pub fn with_trailing_separator(self, path: &str) -> String {
        if path.is_empty() {
            return String::new();
        }
        let mut out = path
            .trim_end_matches(|c| self.is_separator(c))
            .to_string();
        out.push(self.native_separator());
        out
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Posix => write!(f, "posix"),
            Self::Windows => write!(f, "windows"),
        }
    }
}

/// The native separator of [`Platform::native`].
///
/// # Examples
///
/// ```
/// assert_eq!(seekpath::native_separator(), seekpath::valid_separators()[0]);
/// ```
#[must_use]
pub const fn native_separator() -> char {
    Platform::native().native_separator()
}

/// The valid separators of [`Platform::native`].
#[must_use]
pub const fn valid_separators() -> &'static [char] {
    Platform::native().valid_separators()
}
