//! Common test utilities for integration tests.
//!
//! This module provides a temporary directory tree builder and an
//! environment variable guard for testing the seekpath library.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A temporary directory populated with files for resolution tests.
///
/// The tree is removed when the value is dropped.
pub struct TestTree {
    root: TempDir,
}

#[allow(dead_code)]
impl TestTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self {
            root: tempfile::tempdir().expect("failed to create temporary directory"),
        }
    }

    /// Root of the tree.
    pub fn path(&self) -> &Path {
        self.root.path()
    }

    /// Create a file (and its parent directories) with `contents`.
    pub fn file(self, relative: &str, contents: &str) -> Self {
        let path = self.root.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create parent directories");
        }
        fs::write(&path, contents).expect("failed to write fixture file");
        self
    }

    /// Create a directory.
    pub fn dir(self, relative: &str) -> Self {
        fs::create_dir_all(self.root.path().join(relative)).expect("failed to create directory");
        self
    }

    /// Absolute path of `relative` inside the tree.
    pub fn join(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    /// Absolute path of `relative` as a string.
    pub fn str(&self, relative: &str) -> String {
        self.join(relative)
            .to_str()
            .expect("temporary path is not UTF-8")
            .to_string()
    }

    /// Absolute directory path of `relative` with a trailing native separator.
    pub fn dir_str(&self, relative: &str) -> String {
        seekpath::Platform::native().with_trailing_separator(&self.str(relative))
    }
}

/// RAII guard for setting and restoring environment variables.
///
/// Tests using this guard must be marked `#[serial]`.
pub struct EnvGuard {
    key: String,
    old_value: Option<String>,
}

#[allow(dead_code)]
impl EnvGuard {
    /// Set `key` to `value` until the guard is dropped.
    pub fn set(key: &str, value: &str) -> Self {
        let old_value = env::var(key).ok();
        env::set_var(key, value);
        Self {
            key: key.to_string(),
            old_value,
        }
    }

    /// Remove `key` until the guard is dropped.
    pub fn remove(key: &str) -> Self {
        let old_value = env::var(key).ok();
        env::remove_var(key);
        Self {
            key: key.to_string(),
            old_value,
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match &self.old_value {
            Some(val) => env::set_var(&self.key, val),
            None => env::remove_var(&self.key),
        }
    }
}

/// Clear every `SEEKPATH_*` variable for the lifetime of the returned guards.
#[allow(dead_code)]
pub fn clear_seekpath_env_vars() -> Vec<EnvGuard> {
    [
        "SEEKPATH_SEARCH_PATHS",
        "SEEKPATH_DATA_DIR",
        "SEEKPATH_OUTPUT_FORMAT",
        "SEEKPATH_LOG_MODE",
        "SEEKPATH_CONFIG_DIR",
    ]
    .iter()
    .map(|k| EnvGuard::remove(k))
    .collect()
}

/// Run `f` with the process working directory set to `dir`.
///
/// Tests using this helper must be marked `#[serial]`.
#[allow(dead_code)]
pub fn in_dir<T>(dir: &Path, f: impl FnOnce() -> T) -> T {
    let saved = env::current_dir().expect("failed to read working directory");
    env::set_current_dir(dir).expect("failed to change working directory");
    let result = f();
    env::set_current_dir(saved).expect("failed to restore working directory");
    result
}
