//! Command to show the components of a path.

use crate::error::CliError;
use crate::utils::{
    load_configuration, print_json, resolve_format, FormatArg, GlobalOptions, PlatformArg,
};
use clap::Args;
use seekpath::{OutputFormat, Platform};

/// Show the filename, extension, basename and directory of a path.
#[derive(Args)]
pub struct SplitCommand {
    /// Path to split
    #[arg(value_name = "PATH", allow_hyphen_values = true)]
    pub path: String,

    /// Path rules to apply
    #[arg(long, value_enum, default_value = "native")]
    pub platform: PlatformArg,

    /// Output format
    #[arg(long, value_enum, ignore_case = true)]
    pub format: Option<FormatArg>,
}

impl SplitCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let platform = Platform::from(self.platform);
        let path = self.path.as_str();

        let parts = [
            ("filename", platform.filename(path)),
            ("extension", platform.extension(path)),
            ("basename", platform.basename(path)),
            ("directory", platform.directory(path)),
        ];

        match resolve_format(self.format, &config) {
            OutputFormat::Json => {
                let object: serde_json::Map<String, serde_json::Value> = parts
                    .iter()
                    .map(|(key, value)| ((*key).to_string(), (*value).into()))
                    .collect();
                print_json(&object)
            }
            OutputFormat::Human => {
                for (key, value) in parts {
                    println!("{key}: {value}");
                }
                Ok(())
            }
        }
    }
}
