//! Integration tests for argument errors, configuration errors and exit codes.

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_version() {
    let env = TestEnv::new();
    env.command_bare()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("seekpath"));
}

#[test]
fn test_missing_subcommand() {
    let env = TestEnv::new();
    env.command_bare().assert().failure().code(2);
}

#[test]
fn test_unknown_platform_rejected() {
    let env = TestEnv::new();
    env.command()
        .args(["classify", "/a", "--platform", "plan9"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn test_invalid_search_paths_flag() {
    let env = TestEnv::new();
    env.command()
        .args(["--search-paths", "definitely-missing-dir", "search-paths"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Invalid arguments"));
}

#[test]
fn test_broken_user_config() {
    let env = TestEnv::new();
    env.write_user_config("search_paths: [unclosed\n");

    env.command()
        .args(["search-paths"])
        .assert()
        .code(7)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_invalid_config_entry() {
    let env = TestEnv::new();
    env.write_user_config("data_dir: \"\"\n");

    env.command().args(["dirs"]).assert().code(7);
}

#[test]
fn test_invalid_env_output_format() {
    let env = TestEnv::new();
    env.command()
        .env("SEEKPATH_OUTPUT_FORMAT", "xml")
        .args(["classify", "/a"])
        .assert()
        .code(7);
}

#[test]
fn test_missing_configured_entry_only_warns() {
    let env = TestEnv::new();
    let real = env.create_dir("real");
    env.write_user_config(&format!(
        "search_paths:\n  - /definitely/not/here\n  - {:?}\n",
        real.to_string_lossy()
    ));

    env.command()
        .args(["search-paths"])
        .assert()
        .success()
        .stdout(predicate::str::contains("real"))
        .stderr(predicate::str::contains("/definitely/not/here"));
}

#[test]
fn test_find_data_without_data_dir() {
    let env = TestEnv::new();
    env.command()
        .env("SEEKPATH_DATA_DIR", "")
        .args(["find", "x", "--data"])
        .assert()
        .failure();
}

#[test]
fn test_successful_run_writes_nothing_to_stderr() {
    let env = TestEnv::new();
    env.command()
        .args(["classify", "/a", "--platform", "posix"])
        .assert()
        .success()
        .stderr("");
}
