//! Command to show the effective search paths.

use crate::error::CliError;
use crate::utils::{
    build_locator, load_configuration, print_json, resolve_format, FormatArg, GlobalOptions,
};
use clap::Args;
use seekpath::OutputFormat;

/// Show the search paths in effect after configuration is applied.
#[derive(Args)]
pub struct SearchPathsCommand {
    /// Print the `;`-delimited form on one line
    #[arg(long)]
    pub joined: bool,

    /// Output format
    #[arg(long, value_enum, ignore_case = true)]
    pub format: Option<FormatArg>,
}

impl SearchPathsCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let locator = build_locator(global, &config)?;

        match resolve_format(self.format, &config) {
            OutputFormat::Json => print_json(&serde_json::json!({
                "search_paths": locator.search_paths().entries(),
                "joined": locator.get_search_paths(),
            })),
            OutputFormat::Human => {
                if self.joined {
                    println!("{}", locator.get_search_paths());
                } else {
                    for entry in locator.search_paths().entries() {
                        println!("{entry}");
                    }
                }
                Ok(())
            }
        }
    }
}
