//! Output management and formatting.

use std::io;

use console::Term;
use owo_colors::OwoColorize;

use crate::cli::GlobalArgs;
use crate::config::AppConfig;

/// Console output of the auxiliary commands, and the raw stdout handle the
/// run command writes through.
pub struct OutputManager {
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        Self {
            no_color: args.no_color || config.output.no_color,
            term: Term::stdout(),
        }
    }

    /// The terminal as a raw `io::Write` sink.
    ///
    /// Clones share the underlying stdout handle.
    pub fn writer(&self) -> Term {
        self.term.clone()
    }

    /// A line of plain text.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        self.term.write_line(msg)
    }

    /// Text written as-is, without adding a line break.
    pub fn print_raw(&self, text: &str) -> io::Result<()> {
        self.term.write_str(text)
    }

    /// `ℹ <msg>` in blue.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        let line = if self.no_color {
            format!("\u{2139} {msg}")
        } else {
            format!("{} {}", "\u{2139}".blue().bold(), msg.blue())
        };
        self.term.write_line(&line)
    }

    /// Section title in bold cyan.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.no_color {
            return self.term.write_line(text);
        }
        self.term.write_line(&text.cyan().bold().to_string())
    }

    /// `true` if ANSI colours are enabled.
    pub fn supports_color(&self) -> bool {
        !self.no_color
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
