//! Command to check whether two paths name the same location.

use crate::error::CliError;
use crate::utils::{working_dir, GlobalOptions, PlatformArg};
use clap::Args;
use seekpath::Platform;

/// Check whether two paths name the same location.
///
/// Exits with status 1 when they differ.
#[derive(Args)]
pub struct EqualCommand {
    /// First path
    #[arg(value_name = "A", allow_hyphen_values = true)]
    pub a: String,

    /// Second path
    #[arg(value_name = "B", allow_hyphen_values = true)]
    pub b: String,

    /// Path rules to apply
    #[arg(long, value_enum, default_value = "native")]
    pub platform: PlatformArg,
}

impl EqualCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let cwd = working_dir()?;
        let platform = Platform::from(self.platform);

        if platform.path_equal_from(&cwd, &self.a, &self.b) {
            if !global.quiet {
                println!("equal");
            }
            Ok(())
        } else {
            Err(CliError::SemanticFailure(format!(
                "{:?} and {:?} name different locations",
                self.a, self.b
            )))
        }
    }
}
