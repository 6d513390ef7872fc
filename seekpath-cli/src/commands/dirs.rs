//! Command to show the well-known directories.

use crate::error::CliError;
use crate::utils::{
    build_locator, load_configuration, print_json, resolve_format, FormatArg, GlobalOptions,
};
use clap::Args;
use seekpath::os::FileSystem;
use seekpath::OutputFormat;

/// Show the working, executable, temporary, home and data directories.
#[derive(Args)]
pub struct DirsCommand {
    /// Output format
    #[arg(long, value_enum, ignore_case = true)]
    pub format: Option<FormatArg>,
}

impl DirsCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let locator = build_locator(global, &config)?;
        let fs = locator.file_system();

        let entries = [
            ("working", fs.current_dir().ok()),
            ("executable", fs.executable_dir().ok()),
            ("temp", fs.temp_dir().ok()),
            ("home", fs.home_dir().ok()),
            ("data", locator.data_dir().map(String::from)),
        ];

        match resolve_format(self.format, &config) {
            OutputFormat::Json => {
                let object: serde_json::Map<String, serde_json::Value> = entries
                    .into_iter()
                    .map(|(key, value)| (key.to_string(), value.into()))
                    .collect();
                print_json(&object)
            }
            OutputFormat::Human => {
                for (key, value) in entries {
                    println!("{key}: {}", value.as_deref().unwrap_or("(unavailable)"));
                }
                Ok(())
            }
        }
    }
}
