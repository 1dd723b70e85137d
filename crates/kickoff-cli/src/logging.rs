//! Tracing subscriber initialisation.
//!
//! Only the CLI crate is allowed to call [`init_logging`]; `kickoff-core`
//! only *emits* spans and events and never touches subscribers.
//!
//! # Verbosity mapping
//!
//! The first `-v` turns on the run's diagnostic stream, so the tracing level
//! starts moving with the second one.
//!
//! | Flag(s)   | Filter level |
//! |-----------|--------------|
//! | (none)    | WARN         |
//! | `-v`      | WARN         |
//! | `-vv`     | INFO         |
//! | `-vvv`    | DEBUG        |
//! | `-vvvv`   | TRACE        |
//!
//! `RUST_LOG` overrides all of the above if set.

use std::io::IsTerminal as _;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::GlobalArgs;

/// Initialise the global tracing subscriber.
///
/// Must be called exactly once, before any tracing macros fire.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let level = derive_level(args.verbose);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "kickoff={level},kickoff_core={level},kickoff_adapters={level}"
        ))
    });

    let use_ansi = !args.no_color && std::io::stderr().is_terminal();

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_ansi(use_ansi)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))?;

    Ok(())
}

/// Translate the verbosity counter to a level string.
fn derive_level(verbose: u8) -> &'static str {
    match verbose {
        0 | 1 => "warn",
        2 => "info",
        3 => "debug",
        _ => "trace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_default() {
        assert_eq!(derive_level(0), "warn");
    }

    #[test]
    fn first_verbose_leaves_level_alone() {
        assert_eq!(derive_level(1), "warn");
    }

    #[test]
    fn level_verbose_two() {
        assert_eq!(derive_level(2), "info");
    }

    #[test]
    fn level_verbose_three() {
        assert_eq!(derive_level(3), "debug");
    }

    #[test]
    fn level_verbose_four_plus() {
        assert_eq!(derive_level(4), "trace");
        assert_eq!(derive_level(10), "trace");
    }
}
