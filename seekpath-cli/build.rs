//! Build script for seekpath-cli.
//!
//! This script generates the man page at build time using clap_mangen.
//! The generated page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
fn build_cli() -> Command {
    Command::new("seekpath")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Inspect paths and resolve files against search paths")
        .long_about(
            "Cross-platform path inspection and file lookup through an ordered list of search paths",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config-dir")
                .long("config-dir")
                .help("Directory holding the user configuration file")
                .value_name("PATH")
                .global(true)
                .env("SEEKPATH_CONFIG_DIR"),
        )
        .arg(
            Arg::new("search-paths")
                .long("search-paths")
                .help("Replace the configured search paths (';'-delimited)")
                .value_name("PATHS")
                .global(true),
        )
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .help("Override the data directory")
                .value_name("PATH")
                .global(true),
        )
        .subcommands(vec![
            Command::new("classify")
                .about("Report whether a path is fully qualified or explicitly relative"),
            Command::new("canonical")
                .about("Print the canonical form of a path")
                .long_about("Collapse separators and resolve '.' and '..' segments lexically"),
            Command::new("equal")
                .about("Check whether two paths name the same location")
                .long_about("Exit with status 1 when the two paths name different locations"),
            Command::new("split")
                .about("Show the filename, extension, basename and directory of a path"),
            Command::new("relative").about("Express one path relative to another"),
            Command::new("find")
                .about("Locate a file through the search paths or the data directory")
                .long_about("Print the first match and exit with status 1 when nothing is found"),
            Command::new("search-paths").about("Show the effective search paths"),
            Command::new("dirs")
                .about("Show the working, executable, temporary, home and data directories"),
            Command::new("mkdir").about("Create a directory and any missing parents"),
            Command::new("validate")
                .about("Validate a configuration file")
                .long_about("Check a seekpath configuration file for errors"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("seekpath.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
