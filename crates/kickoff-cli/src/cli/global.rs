//! Global arguments that apply to every subcommand.
//!
//! Declared here and flattened into [`super::Cli`] so that `-v`, `-?`, etc.
//! are available on any invocation without repetition

use clap::{ArgAction, Args, builder::FalseyValueParser};
use std::path::PathBuf;

/// Global arguments for all commands.
#[derive(Debug, Default, Args)]
pub struct GlobalArgs {
    /// Show usage and exit without doing anything.
    ///
    /// Replaces clap's generated help flag so that `-?` works and the exit
    /// code is the "not run" code.
    #[arg(
        short = '?',
        long = "help",
        action = ArgAction::SetTrue,
        global = true,
        help = "Show usage information"
    )]
    pub help: bool,

    /// Echo diagnostics and increase logging verbosity.
    ///
    /// Any `-v` echoes the run's diagnostic lines to the console. Repeat it to
    /// raise the tracing level.
    #[arg(
        short = 'v',
        long = "verbose",
        action = ArgAction::Count,
        global = true,
        help = "Show diagnostic output (-v), raise log level (-vv, -vvv)",
        long_help = "Show diagnostic output and increase logging verbosity:
    (none)  - Output only, warnings and errors logged
    -v      - Echo diagnostic lines to the console
    -vv     - Also log info events
    -vvv    - Also log debug events
    -vvvv   - Trace level (very verbose)"
    )]
    pub verbose: u8,

    /// Disable ANSI colour codes.
    ///
    /// Automatically honoured when `NO_COLOR` is set in the environment
    /// (see <https://no-color.org>). Any value other than an explicit false
    /// such as `0`, `no` or `off` turns colour off.
    #[arg(
        long = "no-color",
        action = ArgAction::SetTrue,
        value_parser = FalseyValueParser::new(),
        global = true,
        env = "NO_COLOR",
        help = "Disable colored output"
    )]
    pub no_color: bool,

    /// Configuration file path.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Configuration file path"
    )]
    pub config: Option<PathBuf>,
}
