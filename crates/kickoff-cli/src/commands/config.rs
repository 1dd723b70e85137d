//! `kickoff config`: inspect configuration values.

use kickoff_core::domain::EXIT_SUCCESS;

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(cmd: ConfigCommands, config: &AppConfig, output: &OutputManager) -> CliResult<i32> {
    match cmd {
        ConfigCommands::Get { key } => show_key(config, &key, output)?,
        ConfigCommands::List => show_all(config, output)?,
        ConfigCommands::Path => output.print(&AppConfig::config_path().display().to_string())?,
    }
    Ok(EXIT_SUCCESS)
}

fn show_key(config: &AppConfig, key: &str, output: &OutputManager) -> CliResult<()> {
    let value = lookup(config, key)?;
    output.print(&format!("{key} = {value:?}"))?;
    Ok(())
}

/// Effective settings as TOML, in the same shape the config file takes.
fn show_all(config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let rendered = toml::to_string_pretty(config).map_err(|e| CliError::ConfigError {
        message: format!("cannot render settings as TOML: {e}"),
        source: Some(Box::new(e)),
    })?;
    output.header("Effective settings:")?;
    output.print(rendered.trim_end())?;
    Ok(())
}

fn lookup(config: &AppConfig, key: &str) -> CliResult<String> {
    config.get(key).ok_or_else(|| CliError::ConfigError {
        message: format!("no setting named '{key}' (try logging.data_folder or output.no_color)"),
        source: None,
    })
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn data_folder_override_is_reported() {
        let mut cfg = AppConfig::default();
        cfg.logging.data_folder = Some(PathBuf::from("/var/kickoff"));
        assert_eq!(lookup(&cfg, "logging.data_folder").unwrap(), "/var/kickoff");
    }

    #[test]
    fn unknown_setting_is_a_config_error() {
        let err = lookup(&AppConfig::default(), "does.not.exist").unwrap_err();
        assert!(matches!(err, CliError::ConfigError { .. }));
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn colour_is_on_by_default() {
        assert_eq!(lookup(&AppConfig::default(), "output.no_color").unwrap(), "false");
    }
}
