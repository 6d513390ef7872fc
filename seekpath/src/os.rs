//! Operating-system adapter.
//!
//! The resolver only needs a handful of facts from the operating system:
//! a few well-known directories, whether a path exists, and the ability to
//! create a directory. They are gathered behind the [`FileSystem`] trait so
//! the algorithms can be tested without touching the real filesystem.
//!
//! Every directory reported by the adapter is fully qualified and ends with
//! the native separator.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::platform::Platform;

/// Facts about the host filesystem consumed by the resolver.
#[cfg_attr(test, mockall::automock)]
pub trait FileSystem {
    /// The current working directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be determined or is not
    /// valid UTF-8.
    fn current_dir(&self) -> Result<String>;

    /// The directory containing the running executable.
    ///
    /// # Errors
    ///
    /// Returns an error if the executable location cannot be determined.
    fn executable_dir(&self) -> Result<String>;

    /// The temporary directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the location is not valid UTF-8.
    fn temp_dir(&self) -> Result<String>;

    /// The user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    fn home_dir(&self) -> Result<String>;

    /// Whether anything exists at `path`.
    fn path_exists(&self, path: &str) -> bool;

    /// Whether `path` is an existing directory.
    fn is_dir(&self, path: &str) -> bool;

    /// Create `path` and any missing parents. Succeeds if it already exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    fn create_dir(&self, path: &str) -> Result<()>;
}

/// [`FileSystem`] backed by `std::env`, `std::fs` and the `home` crate.
///
/// # Examples
///
/// ```
/// use seekpath::os::{FileSystem, OsFileSystem};
///
/// let fs = OsFileSystem;
/// let temp = fs.temp_dir().unwrap();
/// assert!(seekpath::path::is_fully_qualified(&temp));
/// assert!(temp.ends_with(seekpath::native_separator()));
/// assert!(fs.path_exists(&temp));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
    fn current_dir(&self) -> Result<String> {
        let cwd = env::current_dir()?;
        directory_string(&cwd)
    }

    fn executable_dir(&self) -> Result<String> {
        let exe = env::current_exe()?;
        let parent = exe.parent().ok_or_else(|| Error::InvalidPath {
            path: exe.clone(),
            reason: "Executable has no parent directory".to_string(),
        })?;
        directory_string(parent)
    }

    fn temp_dir(&self) -> Result<String> {
        directory_string(&env::temp_dir())
    }

    fn home_dir(&self) -> Result<String> {
        let home = home::home_dir().ok_or_else(|| Error::NotFound {
            resource: "home directory".to_string(),
        })?;
        directory_string(&home)
    }

    fn path_exists(&self, path: &str) -> bool {
        !path.is_empty() && Path::new(path).exists()
    }

    fn is_dir(&self, path: &str) -> bool {
        !path.is_empty() && Path::new(path).is_dir()
    }

    fn create_dir(&self, path: &str) -> Result<()> {
        if path.is_empty() {
            return Err(Error::InvalidPath {
                path: PathBuf::new(),
                reason: "Cannot create a directory with an empty name".to_string(),
            });
        }
        fs::create_dir_all(path).map_err(|e| Error::from_io(path, e))
    }
}

/// Render a directory as UTF-8 with a trailing native separator.
fn directory_string(path: &Path) -> Result<String> {
    let text = path.to_str().ok_or_else(|| Error::InvalidPath {
        path: path.to_path_buf(),
        reason: "Path contains invalid UTF-8".to_string(),
    })?;
    Ok(Platform::native().with_trailing_separator(text))
}
