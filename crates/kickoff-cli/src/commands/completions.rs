//! Shell completion generation.

use clap::CommandFactory;
use clap_complete::{generate, shells};
use kickoff_core::domain::EXIT_SUCCESS;

use crate::{
    cli::{Cli, CompletionsArgs, Shell},
    error::CliResult,
    output::OutputManager,
};

const BIN_NAME: &str = "kickoff";

pub fn execute(args: CompletionsArgs, output: &OutputManager) -> CliResult<i32> {
    let mut cmd = Cli::command();
    let mut out = output.writer();

    match args.shell {
        Shell::Bash => generate(shells::Bash, &mut cmd, BIN_NAME, &mut out),
        Shell::Zsh => generate(shells::Zsh, &mut cmd, BIN_NAME, &mut out),
        Shell::Fish => generate(shells::Fish, &mut cmd, BIN_NAME, &mut out),
        Shell::PowerShell => generate(shells::PowerShell, &mut cmd, BIN_NAME, &mut out),
        Shell::Elvish => generate(shells::Elvish, &mut cmd, BIN_NAME, &mut out),
    };

    Ok(EXIT_SUCCESS)
}
