//! Command handlers, one module per subcommand.
//!
//! Every handler returns the process exit code as an `i32`; `main` turns it
//! into an OS status.

use std::path::PathBuf;

use kickoff_core::domain::EXIT_NOT_RUN;

use crate::{
    cli::{self, Commands, GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

pub mod completions;
pub mod config;
pub mod logs;
pub mod run;

/// Dispatch to the correct command handler.
pub fn dispatch(
    command: Commands,
    global: &GlobalArgs,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<i32> {
    // `run` renders its own usage through the parameter resolver.
    if global.help && !matches!(command, Commands::Run(_)) {
        output.print_raw(&cli::usage(Some(command.name())))?;
        return Ok(EXIT_NOT_RUN);
    }

    match command {
        Commands::Run(args) => run::execute(args, global, config, output),
        Commands::Logs(args) => logs::execute(args, config, output),
        Commands::Completions(args) => completions::execute(args, output),
        Commands::Config(cmd) => config::execute(cmd, config, output),
    }
}

/// The data folder runs log into, or a configuration error when the platform
/// has none and no override is set.
pub fn data_folder(config: &AppConfig) -> CliResult<PathBuf> {
    config.data_folder().ok_or_else(|| CliError::ConfigError {
        message: "could not determine a data folder for run logs".into(),
        source: None,
    })
}
