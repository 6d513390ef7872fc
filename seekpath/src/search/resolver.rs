//! File lookup over the search paths and the data directory.

use crate::os::FileSystem;
use crate::platform::Platform;
use crate::search::SearchPaths;

/// Borrowed view that answers "where is this file?".
///
/// A resolver is cheap to create; build one whenever the registry or data
/// directory changes. Lookups report a miss as an empty string.
pub struct FileResolver<'a> {
    fs: &'a dyn FileSystem,
    search_paths: &'a SearchPaths,
    data_dir: Option<&'a str>,
}

impl<'a> FileResolver<'a> {
    /// Create a resolver over `search_paths` and an optional data directory.
    #[must_use]
    pub fn new(
        fs: &'a dyn FileSystem,
        search_paths: &'a SearchPaths,
        data_dir: Option<&'a str>,
    ) -> Self {
        Self {
            fs,
            search_paths,
            data_dir,
        }
    }

    fn platform(&self) -> Platform {
        self.search_paths.platform()
    }

    /// Locate `name`.
    ///
    /// Fully-qualified and explicitly-relative names are checked as written
    /// and never combined with the search paths. Any other name is tried
    /// under each search path in order; the first existing candidate wins.
    /// Returns `""` when nothing matches.
    #[must_use]
    pub fn find(&self, name: &str) -> String {
        if name.is_empty() {
            return String::new();
        }

        let platform = self.platform();
        if platform.is_fully_qualified(name) || platform.is_explicitly_relative(name) {
            return self.probe(name.to_string()).unwrap_or_default();
        }

        self.search_paths
            .entries()
            .iter()
            .find_map(|entry| self.probe(format!("{entry}{name}")))
            .unwrap_or_default()
    }

    /// Whether [`find`](Self::find) locates `name`.
    #[must_use]
    pub fn file_exists(&self, name: &str) -> bool {
        !self.find(name).is_empty()
    }

    /// Locate `name` inside the data directory only.
    ///
    /// Returns `""` when no data directory is configured or the file is
    /// missing.
    #[must_use]
    pub fn find_in_data_dir(&self, name: &str) -> String {
        let Some(data_dir) = self.data_dir.filter(|dir| !dir.is_empty()) else {
            log::debug!("No data directory configured; cannot look up {name:?}");
            return String::new();
        };
        if name.is_empty() {
            return String::new();
        }

        let base = self.platform().with_trailing_separator(data_dir);
        self.probe(format!("{base}{name}")).unwrap_or_default()
    }

    /// Whether [`find_in_data_dir`](Self::find_in_data_dir) locates `name`.
    #[must_use]
    pub fn file_exists_in_data_dir(&self, name: &str) -> bool {
        !self.find_in_data_dir(name).is_empty()
    }

    fn probe(&self, candidate: String) -> Option<String> {
        if !self.fs.path_exists(&candidate) {
            log::debug!("Probe miss: {candidate}");
            return None;
        }
        log::debug!("Probe hit: {candidate}");

        let platform = self.platform();
        if !platform.ends_with_separator(&candidate) && self.fs.is_dir(&candidate) {
            let mut dir = candidate;
            dir.push(platform.native_separator());
            return Some(dir);
        }
        Some(candidate)
    }
}
