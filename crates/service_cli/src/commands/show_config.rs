//! Config command implementation
//!
//! Prints the effective configuration after file loading and environment
//! overrides, in the layout `isearch.toml` accepts.

use crate::config::CliConfig;
use crate::Result;

/// Run the config command
pub fn run(config: &CliConfig) -> Result<String> {
    let rendered = config.to_toml()?;
    print!("{}", rendered);
    Ok(rendered)
}
