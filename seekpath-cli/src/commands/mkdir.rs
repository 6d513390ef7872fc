//! Command to create a directory.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use seekpath::Locator;

/// Create a directory and any missing parents.
#[derive(Args)]
pub struct MkdirCommand {
    /// Directory to create
    #[arg(value_name = "PATH", allow_hyphen_values = true)]
    pub path: String,
}

impl MkdirCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        Locator::new().make_directory(&self.path)?;
        if global.verbose {
            eprintln!("Created {}", self.path);
        }
        Ok(())
    }
}
