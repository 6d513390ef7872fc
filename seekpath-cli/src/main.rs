//! Main entry point for the seekpath CLI.
//!
//! The commands expose the seekpath library from the shell:
//! - path inspection: `classify`, `canonical`, `equal`, `split`, `relative`
//! - file lookup: `find`, `search-paths`, `dirs`
//! - housekeeping: `mkdir`, `validate`, `completions`

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = seekpath::init_logger(cli.verbose, cli.quiet).install() {
        eprintln!("Warning: could not install logger: {e}");
    }

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        config_dir: cli.config_dir,
        search_paths: cli.search_paths,
        data_dir: cli.data_dir,
    };

    let result = match cli.command {
        cli::Command::Classify(cmd) => cmd.execute(&global),
        cli::Command::Canonical(cmd) => cmd.execute(&global),
        cli::Command::Equal(cmd) => cmd.execute(&global),
        cli::Command::Split(cmd) => cmd.execute(&global),
        cli::Command::Relative(cmd) => cmd.execute(&global),
        cli::Command::Find(cmd) => cmd.execute(&global),
        cli::Command::SearchPaths(cmd) => cmd.execute(&global),
        cli::Command::Dirs(cmd) => cmd.execute(&global),
        cli::Command::Mkdir(cmd) => cmd.execute(&global),
        cli::Command::Validate(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            if !global.quiet {
                eprintln!("Error: {e}");
            }
            std::process::exit(e.exit_code());
        }
    }
}
