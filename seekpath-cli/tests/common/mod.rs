//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builder helpers that isolate configuration
//! - Fixture helpers for files and directories

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables that would leak the developer's setup into a test.
const SEEKPATH_VARS: &[&str] = &[
    "SEEKPATH_SEARCH_PATHS",
    "SEEKPATH_DATA_DIR",
    "SEEKPATH_OUTPUT_FORMAT",
    "SEEKPATH_CONFIG_DIR",
    "SEEKPATH_LOG_MODE",
];

/// Test environment with an isolated working and configuration directory.
///
/// Every command runs with the temporary directory as its working directory
/// and an empty configuration directory, so no user or project configuration
/// outside the test is picked up.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Path to the user configuration directory
    pub config_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        // Resolve symlinked temp roots (macOS /var) so reported paths match.
        let temp_path = if cfg!(windows) {
            temp_dir.path().to_path_buf()
        } else {
            temp_dir
                .path()
                .canonicalize()
                .expect("Failed to canonicalize temp dir")
        };
        let config_dir = temp_path.join(".seekpath");
        std::fs::create_dir_all(&config_dir).expect("Failed to create config dir");

        Self {
            temp_dir,
            temp_path,
            config_dir,
        }
    }

    /// Get a bare command builder without pre-configured flags.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("seekpath").expect("Failed to find seekpath binary");
        for var in SEEKPATH_VARS {
            cmd.env_remove(var);
        }
        cmd.current_dir(&self.temp_path);
        cmd
    }

    /// Get a command builder with the configuration directory pre-configured.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--config-dir").arg(&self.config_dir);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Create a subdirectory in the test environment.
    pub fn create_dir(&self, name: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    /// Create a file (and its parents) in the test environment.
    pub fn create_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Write the user configuration file.
    pub fn write_user_config(&self, yaml: &str) {
        std::fs::write(self.config_dir.join("config.yaml"), yaml)
            .expect("Failed to write user config");
    }

    /// Run `seekpath` with `args` and return stdout, asserting success.
    pub fn run_ok(&self, args: &[&str]) -> String {
        let output = self
            .command()
            .args(args)
            .output()
            .expect("Failed to run seekpath");

        assert!(
            output.status.success(),
            "seekpath {args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        String::from_utf8(output.stdout).expect("Invalid UTF-8 in output")
    }
}

/// Render a directory the way seekpath reports it: native separators and a
/// trailing separator.
#[allow(dead_code)]
pub fn dir_string(path: &Path) -> String {
    let mut s = path.to_string_lossy().into_owned();
    if !s.ends_with(std::path::MAIN_SEPARATOR) {
        s.push(std::path::MAIN_SEPARATOR);
    }
    s
}
