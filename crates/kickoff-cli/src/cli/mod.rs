//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
///
/// Without a subcommand, `kickoff [FOLDER]` behaves like `kickoff run [FOLDER]`.
/// A first positional that names a subcommand is parsed as that subcommand.
#[derive(Debug, Parser)]
#[command(
    name    = "kickoff",
    bin_name = "kickoff",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Create a new project",
    long_about = "Kickoff makes sure a folder holds the starter files of a project: \
                  project.json, README.md, LICENSE, .gitignore, sources/ and tests/. \
                  Nothing that already exists is overwritten.",
    after_help = "EXAMPLES:\n\
        \x20 kickoff                 # current folder\n\
        \x20 kickoff ../my-lib -v    # show each step\n\
        \x20 kickoff logs --latest\n\
        \x20 kickoff completions bash > ~/.local/share/bash-completion/completions/kickoff",
    disable_help_flag       = true,
    disable_help_subcommand = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Arguments of the default `run` action.
    #[command(flatten)]
    pub run: RunArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create the project (the default action).
    #[command(
        about = "Create a project in a folder",
        disable_help_flag = true,
        after_help = "EXAMPLES:\n\
            \x20 kickoff run\n\
            \x20 kickoff run path/to/project --verbose"
    )]
    Run(RunArgs),

    /// Inspect the logs written by previous runs.
    #[command(
        about = "Show run logs",
        disable_help_flag = true,
        after_help = "EXAMPLES:\n\
            \x20 kickoff logs\n\
            \x20 kickoff logs --latest\n\
            \x20 kickoff logs --latest --path"
    )]
    Logs(LogsArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        disable_help_flag = true,
        after_help = "EXAMPLES:\n\
            \x20 kickoff completions bash > ~/.local/share/bash-completion/completions/kickoff\n\
            \x20 kickoff completions zsh  > ~/.zfunc/_kickoff\n\
            \x20 kickoff completions fish > ~/.config/fish/completions/kickoff.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the kickoff configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        disable_help_flag = true,
        disable_help_subcommand = true,
        after_help = "EXAMPLES:\n\
            \x20 kickoff config get logging.data_folder\n\
            \x20 kickoff config list\n\
            \x20 kickoff config path"
    )]
    Config(ConfigCommands),
}

impl Commands {
    /// Subcommand name as typed on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Run(_) => "run",
            Self::Logs(_) => "logs",
            Self::Completions(_) => "completions",
            Self::Config(_) => "config",
        }
    }
}

// ── run ───────────────────────────────────────────────────────────────────────

/// Arguments for `kickoff run`.
#[derive(Debug, Default, Clone, Args)]
pub struct RunArgs {
    /// Folder to create the project in; relative paths resolve against the
    /// current folder.
    #[arg(
        value_name = "PROJECT-FOLDER-PATH",
        help = "Project folder (default: current folder)"
    )]
    pub project_folder: Option<PathBuf>,
}

// ── logs ──────────────────────────────────────────────────────────────────────

/// Arguments for `kickoff logs`.
#[derive(Debug, Default, Args)]
pub struct LogsArgs {
    /// Only the most recent log.
    #[arg(long = "latest", help = "Show the most recent log only")]
    pub latest: bool,

    /// Print file paths instead of contents.
    #[arg(long = "path", help = "Print log file paths instead of contents")]
    pub path: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `kickoff completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `kickoff config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    #[command(disable_help_flag = true)]
    Get {
        /// Dotted key path, e.g. `logging.data_folder`.
        key: String,
    },
    /// Print all configuration values.
    #[command(disable_help_flag = true)]
    List,
    /// Print the path to the default configuration file.
    #[command(disable_help_flag = true)]
    Path,
}

/// Rendered help of the top-level command, or of `subcommand` when given.
pub fn usage(subcommand: Option<&str>) -> String {
    let mut command = Cli::command();
    if let Some(name) = subcommand {
        if let Some(sub) = command.find_subcommand_mut(name) {
            return sub.render_help().to_string();
        }
    }
    command.render_help().to_string()
}

// ── tests ─────────────────────────────────────────────────────────────────────
