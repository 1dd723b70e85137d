//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by reference.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. Environment variables `KICKOFF__<SECTION>__<KEY>` (a `.env` file in the
//!    working folder is loaded first)
//! 2. Config file (`--config FILE`, else the platform config location)
//! 3. Built-in defaults (always present)

use std::path::PathBuf;

use anyhow::{Context, bail};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Prefix of the configuration environment variables.
pub const ENV_PREFIX: &str = "KICKOFF";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Where run logs are kept.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Overrides the platform data folder; logs go to `<data_folder>/logs/`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_folder: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub no_color: bool,
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "kickoff", "kickoff")
}

impl AppConfig {
    /// Load configuration from the config file and environment.
    ///
    /// `config_file` is the path passed via `--config` and must exist. The
    /// default location is optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(path) => {
                if !path.is_file() {
                    bail!("config file '{}' does not exist", path.display());
                }
                (path.clone(), true)
            }
            None => (Self::config_path(), false),
        };
        debug!(path = %path.display(), required, "Loading configuration");

        let settings = config::Config::builder()
            .add_source(
                config::File::new(&path.to_string_lossy(), config::FileFormat::Toml)
                    .required(required),
            )
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()
            .with_context(|| format!("Failed to read configuration from '{}'", path.display()))?;

        settings
            .try_deserialize()
            .context("Invalid configuration values")
    }

    /// Folder holding `logs/`: the configured override, else the platform
    /// data folder of kickoff.
    pub fn data_folder(&self) -> Option<PathBuf> {
        self.logging
            .data_folder
            .clone()
            .filter(|p| !p.as_os_str().is_empty())
            .or_else(|| project_dirs().map(|d| d.data_dir().to_path_buf()))
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.kickoff.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        project_dirs()
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".kickoff.toml"))
    }

    /// Value of a dotted key, rendered for display.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "logging.data_folder" => Some(
                self.data_folder()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default(),
            ),
            "output.no_color" => Some(self.output.no_color.to_string()),
            _ => None,
        }
    }
}
