//! Command to print the canonical form of a path.

use crate::error::CliError;
use crate::utils::{
    load_configuration, print_json, resolve_format, FormatArg, GlobalOptions, PlatformArg,
};
use clap::Args;
use seekpath::{OutputFormat, Platform};

/// Print the canonical form of a path.
#[derive(Args)]
pub struct CanonicalCommand {
    /// Path to canonicalize
    #[arg(value_name = "PATH", allow_hyphen_values = true)]
    pub path: String,

    /// Path rules to apply
    #[arg(long, value_enum, default_value = "native")]
    pub platform: PlatformArg,

    /// Use the platform's native separator instead of '/'
    #[arg(long)]
    pub native: bool,

    /// Output format
    #[arg(long, value_enum, ignore_case = true)]
    pub format: Option<FormatArg>,
}

impl CanonicalCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let platform = Platform::from(self.platform);

        let mut canonical = platform.canonical(&self.path);
        if self.native {
            canonical = platform.to_native(&canonical);
        }

        match resolve_format(self.format, &config) {
            OutputFormat::Json => print_json(&serde_json::json!({
                "path": self.path,
                "canonical": canonical,
            })),
            OutputFormat::Human => {
                println!("{canonical}");
                Ok(())
            }
        }
    }
}
