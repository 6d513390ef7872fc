//! Command to classify a path.

use crate::error::CliError;
use crate::utils::{
    load_configuration, print_json, resolve_format, FormatArg, GlobalOptions, PlatformArg,
};
use clap::Args;
use seekpath::{OutputFormat, Platform};

/// Report whether a path is fully qualified or explicitly relative.
#[derive(Args)]
pub struct ClassifyCommand {
    /// Path to classify
    #[arg(value_name = "PATH", allow_hyphen_values = true)]
    pub path: String,

    /// Path rules to apply
    #[arg(long, value_enum, default_value = "native")]
    pub platform: PlatformArg,

    /// Output format
    #[arg(long, value_enum, ignore_case = true)]
    pub format: Option<FormatArg>,
}

impl ClassifyCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let platform = Platform::from(self.platform);
        let fully_qualified = platform.is_fully_qualified(&self.path);
        let explicitly_relative = platform.is_explicitly_relative(&self.path);

        match resolve_format(self.format, &config) {
            OutputFormat::Json => print_json(&serde_json::json!({
                "path": self.path,
                "platform": platform.to_string(),
                "fully_qualified": fully_qualified,
                "explicitly_relative": explicitly_relative,
            })),
            OutputFormat::Human => {
                let kind = if fully_qualified {
                    "fully-qualified"
                } else if explicitly_relative {
                    "explicitly-relative"
                } else {
                    "relative"
                };
                println!("{kind}");
                Ok(())
            }
        }
    }
}
