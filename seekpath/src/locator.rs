//! Composition root tying the registry, resolver and OS adapter together.

use crate::config::Config;
use crate::error::Result;
use crate::os::{FileSystem, OsFileSystem};
use crate::platform::Platform;
use crate::search::{FileResolver, SearchPaths};

/// Owns the search paths and data directory for one application.
///
/// A `Locator` replaces process-wide state: create one at startup (usually
/// with [`Locator::from_config`]) and pass it to whatever needs to find
/// files.
///
/// # Examples
///
/// ```
/// use seekpath::Locator;
///
/// let mut locator = Locator::new();
/// assert_eq!(locator.get_search_paths(), "");
/// assert_eq!(locator.find("fuubar"), "");
///
/// let temp = std::env::temp_dir();
/// assert!(locator.set_search_paths(temp.to_str().unwrap()));
/// ```
#[derive(Debug)]
pub struct Locator<F: FileSystem = OsFileSystem> {
    fs: F,
    search_paths: SearchPaths,
    data_dir: Option<String>,
}

impl Locator<OsFileSystem> {
    /// A locator over the real filesystem with no search paths and no data
    /// directory.
    #[must_use]
    pub fn new() -> Self {
        Self::with_file_system(OsFileSystem)
    }
}

impl Default for Locator<OsFileSystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: FileSystem> Locator<F> {
    /// A locator over `fs` with native path rules.
    pub fn with_file_system(fs: F) -> Self {
        Self::with_platform(fs, Platform::native())
    }

    /// A locator over `fs` applying the rules of `platform`.
    pub fn with_platform(fs: F, platform: Platform) -> Self {
        Self {
            fs,
            search_paths: SearchPaths::with_platform(platform),
            data_dir: None,
        }
    }

    /// Build a locator from a resolved configuration.
    ///
    /// Search-path entries are registered one at a time; entries that do
    /// not exist are skipped with a warning.
    pub fn from_config(config: &Config, fs: F) -> Self {
        let mut locator = Self::with_file_system(fs);
        for entry in config.search_paths.iter().flatten() {
            if !locator.add_search_paths(entry) {
                log::warn!("Skipping configured search path {entry:?}");
            }
        }
        locator.data_dir.clone_from(&config.data_dir);
        locator
    }

    /// The file system adapter.
    pub fn file_system(&self) -> &F {
        &self.fs
    }

    /// The path rules in effect.
    pub fn platform(&self) -> Platform {
        self.search_paths.platform()
    }

    /// The search-path registry.
    pub fn search_paths(&self) -> &SearchPaths {
        &self.search_paths
    }

    /// Current search paths joined with `;`.
    pub fn get_search_paths(&self) -> String {
        self.search_paths.get()
    }

    /// Replace the search paths. See [`SearchPaths::set`].
    pub fn set_search_paths(&mut self, value: &str) -> bool {
        self.search_paths.set(value, &self.fs)
    }

    /// Append search paths. See [`SearchPaths::add`].
    pub fn add_search_paths(&mut self, value: &str) -> bool {
        self.search_paths.add(value, &self.fs)
    }

    /// The configured data directory.
    pub fn data_dir(&self) -> Option<&str> {
        self.data_dir.as_deref()
    }

    /// Set or clear the data directory.
    pub fn set_data_dir(&mut self, data_dir: Option<String>) {
        self.data_dir = data_dir;
    }

    /// A resolver borrowing the current state.
    pub fn resolver(&self) -> FileResolver<'_> {
        FileResolver::new(&self.fs, &self.search_paths, self.data_dir.as_deref())
    }

    /// See [`FileResolver::find`].
    pub fn find(&self, name: &str) -> String {
        self.resolver().find(name)
    }

    /// See [`FileResolver::file_exists`].
    pub fn file_exists(&self, name: &str) -> bool {
        self.resolver().file_exists(name)
    }

    /// See [`FileResolver::find_in_data_dir`].
    pub fn find_in_data_dir(&self, name: &str) -> String {
        self.resolver().find_in_data_dir(name)
    }

    /// See [`FileResolver::file_exists_in_data_dir`].
    pub fn file_exists_in_data_dir(&self, name: &str) -> bool {
        self.resolver().file_exists_in_data_dir(name)
    }

    /// Whether `a` and `b` name the same location, reading relative paths
    /// against the adapter's working directory.
    pub fn path_equal(&self, a: &str, b: &str) -> bool {
        let cwd = self.fs.current_dir().unwrap_or_default();
        self.platform().path_equal_from(&cwd, a, b)
    }

    /// Express `to` relative to the directory `from`.
    ///
    /// See [`Platform::make_relative_from`].
    pub fn make_relative(&self, from: &str, to: &str) -> String {
        let cwd = self.fs.current_dir().unwrap_or_default();
        self.platform().make_relative_from(&cwd, from, to)
    }

    /// Create `path` and any missing parents.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn make_directory(&self, path: &str) -> Result<()> {
        log::debug!("Creating directory {path}");
        self.fs.create_dir(path)
    }
}
