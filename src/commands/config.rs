//! Config command - inspect the effective configuration

use crate::{RentrError, cli::ConfigCommands, config::RentrConfig, output::OutputWriter};

type Result<T> = std::result::Result<T, RentrError>;

/// Execute a config subcommand
///
/// # Errors
/// Returns `RentrError` if the config path cannot be determined or the config cannot be serialized
pub fn execute(config: &RentrConfig, command: ConfigCommands, out: &dyn OutputWriter) -> Result<()> {
    match command {
        ConfigCommands::Show => out.write(config.to_toml()?.trim_end()),
        ConfigCommands::Path => out.write(&RentrConfig::config_path()?.display().to_string()),
    }
    Ok(())
}
