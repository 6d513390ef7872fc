//! Command to express one path relative to another.

use crate::error::CliError;
use crate::utils::{working_dir, GlobalOptions, PlatformArg};
use clap::Args;
use seekpath::Platform;

/// Express TO relative to the directory FROM.
#[derive(Args)]
pub struct RelativeCommand {
    /// Directory to start from
    #[arg(value_name = "FROM", allow_hyphen_values = true)]
    pub from: String,

    /// Path to reach
    #[arg(value_name = "TO", allow_hyphen_values = true)]
    pub to: String,

    /// Path rules to apply
    #[arg(long, value_enum, default_value = "native")]
    pub platform: PlatformArg,
}

impl RelativeCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let cwd = working_dir()?;
        let platform = Platform::from(self.platform);
        println!("{}", platform.make_relative_from(&cwd, &self.from, &self.to));
        Ok(())
    }
}
