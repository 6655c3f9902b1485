//! Configuration command.

use crate::cli::args::{ConfigCommands, OutputFormat};
use crate::config::{Config, Paths};
use crate::error::TomataError;
use crate::output::to_json;

/// Execute config subcommands.
///
/// # Errors
///
/// Returns an error if the config cannot be serialized or written.
pub fn config(
    cmd: ConfigCommands,
    config: &Config,
    format: OutputFormat,
) -> Result<String, TomataError> {
    match cmd {
        ConfigCommands::Show => show(config, format),
        ConfigCommands::Init { force } => init(config, force),
        ConfigCommands::Path => {
            let paths = Paths::new()?;
            Ok(paths.config_file.display().to_string())
        }
    }
}

/// Print the effective configuration.
fn show(config: &Config, format: OutputFormat) -> Result<String, TomataError> {
    match format {
        OutputFormat::Json => to_json(config),
        OutputFormat::Pretty => {
            let yaml = serde_yaml::to_string(config)
                .map_err(|e| TomataError::Config(format!("Failed to serialize config: {e}")))?;
            Ok(yaml.trim_end().to_string())
        }
    }
}

/// Write the effective configuration to the config file.
fn init(config: &Config, force: bool) -> Result<String, TomataError> {
    let paths = Paths::new()?;
    paths.ensure_dirs()?;

    if paths.config_file.exists() && !force {
        return Err(TomataError::Config(format!(
            "Config file already exists: {}\nUse --force to overwrite.",
            paths.config_file.display()
        )));
    }

    config.save_to_path(&paths.config_file)?;
    Ok(format!("Wrote {}", paths.config_file.display()))
}
