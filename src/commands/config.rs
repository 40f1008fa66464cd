//! Config command

use std::io::Write;
use std::path::Path;

use super::Result;
use crate::MusicTagError;
use crate::cli::ConfigCommands;
use crate::config::MusicTagConfig;

/// Execute the config command - set or print a configuration value
///
/// `set` persists the whole configuration to `config_path`.
///
/// # Errors
/// Returns an error for a malformed `KEY=VALUE`, an unknown key or value,
/// or if the configuration cannot be saved
pub fn execute(
    mut config: MusicTagConfig,
    command: &ConfigCommands,
    config_path: &Path,
    quiet: bool,
    out: &mut impl Write,
) -> Result<()> {
    match command {
        ConfigCommands::Set { setting } => {
            let (key, value) = setting.split_once('=').ok_or_else(|| {
                MusicTagError::InvalidInput("Invalid format. Use: music-tag config set key=value".into())
            })?;
            let key = key.trim();
            let value = value.trim();

            config.set(key, value)?;
            config.save_to(config_path)?;
            if !quiet {
                writeln!(out, "Set {key} = {}", config.get(key)?)?;
            }
        }
        ConfigCommands::Get { key } => {
            writeln!(out, "{}", config.get(key)?)?;
        }
    }
    Ok(())
}
