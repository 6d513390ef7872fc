//! The ordered list of directories consulted by [`FileResolver`](super::FileResolver).
//!
//! Search paths travel as a single string of entries delimited by `;`.
//! Every entry has to exist when it is registered; a value containing one
//! bad entry is rejected as a whole.

use crate::os::FileSystem;
use crate::platform::Platform;

/// Delimiter between entries in the textual form.
pub const DELIMITER: char = ';';

/// Ordered, validated search directories.
///
/// Entries are stored with exactly one trailing native separator so that a
/// file name can be appended directly. Relative entries are resolved
/// against the working directory at registration time; changing directory
/// afterwards does not move them.
///
/// # Examples
///
/// ```
/// use seekpath::os::OsFileSystem;
/// use seekpath::SearchPaths;
///
/// let mut paths = SearchPaths::new();
/// assert!(!paths.set("", &OsFileSystem));
/// assert_eq!(paths.get(), "");
///
/// let temp = std::env::temp_dir();
/// assert!(paths.set(temp.to_str().unwrap(), &OsFileSystem));
/// assert_eq!(paths.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPaths {
    platform: Platform,
    entries: Vec<String>,
}

impl Default for SearchPaths {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchPaths {
    /// An empty registry using native path rules.
    #[must_use]
    pub fn new() -> Self {
        Self::with_platform(Platform::native())
    }

    /// An empty registry using the rules of `platform`.
    #[must_use]
    pub fn with_platform(platform: Platform) -> Self {
        Self {
            platform,
            entries: Vec::new(),
        }
    }

    /// The path rules applied to new entries.
    #[must_use]
    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// All entries joined with `;`, or `""` when there are none.
    #[must_use]
    pub fn get(&self) -> String {
        let mut delimiter = [0u8; 4];
        self.entries.join(DELIMITER.encode_utf8(&mut delimiter))
    }

    /// Replace the registry with the entries in `value`.
    ///
    /// The registry is cleared first. It stays empty and `false` is
    /// returned when `value` holds no entries or any entry does not exist.
    pub fn set(&mut self, value: &str, fs: &dyn FileSystem) -> bool {
        self.entries.clear();
        match self.parse(value, fs) {
            Some(entries) => {
                self.entries = entries;
                true
            }
            None => false,
        }
    }

    /// Append the entries in `value`.
    ///
    /// Returns `true` if `value` held at least one entry and every entry
    /// exists. Otherwise nothing is appended.
    pub fn add(&mut self, value: &str, fs: &dyn FileSystem) -> bool {
        match self.parse(value, fs) {
            Some(entries) => {
                self.entries.extend(entries);
                true
            }
            None => false,
        }
    }

    /// The normalized entries in search order.
    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    fn parse(&self, value: &str, fs: &dyn FileSystem) -> Option<Vec<String>> {
        let tokens: Vec<&str> = value
            .split(DELIMITER)
            .filter(|token| !token.is_empty())
            .collect();
        if tokens.is_empty() {
            log::debug!("Ignoring empty search path value");
            return None;
        }

        let mut entries = Vec::with_capacity(tokens.len());
        for token in tokens {
            let Some(entry) = self.normalize(token, fs) else {
                log::warn!("Rejecting search paths {value:?}: cannot resolve {token:?}");
                return None;
            };
            if !fs.path_exists(&entry) {
                log::warn!("Rejecting search paths {value:?}: {entry} does not exist");
                return None;
            }
            entries.push(entry);
        }
        Some(entries)
    }

    fn normalize(&self, token: &str, fs: &dyn FileSystem) -> Option<String> {
        let platform = self.platform;
        if platform.is_fully_qualified(token) {
            return Some(platform.with_trailing_separator(token));
        }

        let cwd = match fs.current_dir() {
            Ok(cwd) => cwd,
            Err(e) => {
                log::debug!("Working directory unavailable: {e}");
                return None;
            }
        };
        let resolved = platform.to_native(&platform.absolute(&cwd, token));
        Some(platform.with_trailing_separator(&resolved))
    }
}
