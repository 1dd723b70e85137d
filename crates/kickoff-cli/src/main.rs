//! # Kickoff CLI
//!
//! Idempotent project starter.
//!
//! ## Startup sequence
//!
//! 1. Parse CLI arguments (clap handles `--version` early-exit).
//! 2. Initialise the tracing subscriber (logging).
//! 3. Load configuration (file + env + defaults).
//! 4. Build the [`OutputManager`].
//! 5. Dispatch to the appropriate command handler.
//! 6. Translate any [`CliError`] into a user-facing message and exit code.
//!
//! ## Exit codes
//!
//! | Code | Meaning                                        |
//! |------|------------------------------------------------|
//! |  0   | Success                                        |
//! | 255  | Not run: usage shown or project already exists |
//! |  1   | Internal / system error                        |
//! |  2   | User / input error                             |
//! |  4   | Configuration error                            |

use std::io::IsTerminal as _;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info, instrument};

use crate::{
    cli::{Cli, Commands},
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    // Load .env before anything else, including tracing init.
    let _ = dotenvy::dotenv();

    // ── 1. Parse arguments ────────────────────────────────────────────────
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --version also arrives here, on stdout with status 0.
            let _ = e.print();
            return ExitCode::from(if e.use_stderr() { 2 } else { 0 });
        }
    };

    // ── 2. Initialise tracing ─────────────────────────────────────────────
    if let Err(e) = init_logging(&cli.global) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::from(1);
    }

    debug!(
        verbose = cli.global.verbose,
        help = cli.global.help,
        no_color = cli.global.no_color,
        "CLI started"
    );

    // ── 3. Load configuration ─────────────────────────────────────────────
    let config = match AppConfig::load(cli.global.config.as_ref()) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %format!("{e:#}"), "Configuration rejected");
            eprintln!("Failed to load configuration: {e:#}");
            return ExitCode::from(4);
        }
    };

    // ── 4. Build output manager ───────────────────────────────────────────
    let output = OutputManager::new(&cli.global, &config);
    let verbose = cli.global.verbose > 0;
    let color = output.supports_color();

    // ── 5. Dispatch + 6. Error handling ──────────────────────────────────
    match run(cli, config, output) {
        Ok(code) => {
            info!(code, "Kickoff finished");
            exit_status(code)
        }
        Err(e) => handle_error(e, verbose, color),
    }
}

/// Dispatch to the command, running the project when none was named.
#[instrument(skip_all)]
fn run(cli: Cli, config: AppConfig, output: OutputManager) -> CliResult<i32> {
    let Cli {
        global,
        run,
        command,
    } = cli;
    let command = match command {
        None => Commands::Run(run),
        Some(command) if run.project_folder.is_none() => command,
        Some(command) => {
            return Err(CliError::InvalidInput {
                message: format!(
                    "a project folder cannot come before the '{}' subcommand",
                    command.name()
                ),
                source: None,
            });
        }
    };
    commands::dispatch(command, &global, &config, &output)
}

/// OS status for a command exit code; `-1` becomes 255.
fn exit_status(code: i32) -> ExitCode {
    ExitCode::from(status_byte(code))
}

fn status_byte(code: i32) -> u8 {
    (code & 0xff) as u8
}

/// Translate a `CliError` into a user message and an appropriate exit code.
fn handle_error(err: CliError, verbose: bool, color: bool) -> ExitCode {
    err.log();

    let color = color && std::io::stderr().is_terminal();
    eprint!("{}", err.render(verbose, color));

    ExitCode::from(err.exit_code())
}

// ── tests ─────────────────────────────────────────────────────────────────────
