//! Command to locate a file.

use crate::error::CliError;
use crate::utils::{
    build_locator, load_configuration, print_json, resolve_format, FormatArg, GlobalOptions,
};
use clap::Args;
use seekpath::OutputFormat;

/// Locate a file through the search paths or the data directory.
///
/// Exits with status 1 when the file cannot be found.
#[derive(Args)]
pub struct FindCommand {
    /// File name, relative to a search path, or a fully-qualified or
    /// explicitly-relative path
    #[arg(value_name = "NAME", allow_hyphen_values = true)]
    pub name: String,

    /// Look in the data directory instead of the search paths
    #[arg(long)]
    pub data: bool,

    /// Output format
    #[arg(long, value_enum, ignore_case = true)]
    pub format: Option<FormatArg>,
}

impl FindCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let locator = build_locator(global, &config)?;

        if self.data && locator.data_dir().is_none() {
            return Err(CliError::Config(
                "No data directory configured (use --data-dir or SEEKPATH_DATA_DIR)".to_string(),
            ));
        }

        let found = if self.data {
            locator.find_in_data_dir(&self.name)
        } else {
            locator.find(&self.name)
        };

        if found.is_empty() {
            let place = if self.data {
                "the data directory"
            } else {
                "the search paths"
            };
            return Err(CliError::SemanticFailure(format!(
                "{:?} not found in {place}",
                self.name
            )));
        }

        match resolve_format(self.format, &config) {
            OutputFormat::Json => print_json(&serde_json::json!({
                "name": self.name,
                "path": found,
            })),
            OutputFormat::Human => {
                println!("{found}");
                Ok(())
            }
        }
    }
}
