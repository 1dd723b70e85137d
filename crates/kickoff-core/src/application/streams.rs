//! Output, diagnostic, and log-file streams of a run.
//!
//! A run writes to two console-facing streams: the plain output stream and a
//! verbosity-gated diagnostic stream. [`LogStreams`] tees both into the run's
//! log file; the log file always receives every diagnostic line, whether or
//! not the console echo is enabled.

use std::fmt;
use std::io::{self, Write};
use std::path::PathBuf;

use tracing::warn;

use crate::{application::ApplicationError, error::KickoffResult};

/// Marker written at the start of every diagnostic line.
pub const VERBOSE_PREFIX: &str = "VERBOSE: ";

/// Console side of the diagnostic stream.
pub struct VerboseStream {
    sink: Box<dyn Write + Send>,
    enabled: bool,
}

impl VerboseStream {
    /// An enabled diagnostic stream writing to `sink`.
    pub fn new(sink: impl Write + Send + 'static) -> Self {
        Self {
            sink: Box::new(sink),
            enabled: true,
        }
    }

    /// Discards everything and reports itself as not verbose.
    pub fn disabled() -> Self {
        Self {
            sink: Box::new(io::sink()),
            enabled: false,
        }
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn write_str(&mut self, text: &str) -> io::Result<()> {
        if self.enabled {
            self.sink.write_all(text.as_bytes())?;
        }
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.sink.flush()
    }
}

impl Default for VerboseStream {
    fn default() -> Self {
        Self::disabled()
    }
}

impl fmt::Debug for VerboseStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VerboseStream")
            .field("enabled", &self.enabled)
            .finish_non_exhaustive()
    }
}

/// Open log file of one run.
///
/// Flushed and closed when dropped, so every exit path of a run releases it.
struct LogFile {
    path: PathBuf,
    writer: Box<dyn Write + Send>,
    closed: bool,
}

impl LogFile {
    fn write_str(&mut self, text: &str) -> io::Result<()> {
        self.writer.write_all(text.as_bytes())
    }

    fn close(mut self) -> io::Result<()> {
        self.writer.flush()?;
        self.closed = true;
        Ok(())
    }
}

impl Drop for LogFile {
    fn drop(&mut self) {
        if self.closed {
            return;
        }
        if let Err(e) = self.writer.flush() {
            warn!(
                error = %e,
                path = %self.path.display(),
                "Failed to flush log file"
            );
        }
    }
}

/// The streams a run writes to, teed into its log file.
pub struct LogStreams {
    output: Box<dyn Write + Send>,
    verbose: VerboseStream,
    log: LogFile,
    verbose_line_start: bool,
}

impl LogStreams {
    pub fn new(
        output: Box<dyn Write + Send>,
        verbose: VerboseStream,
        log_path: PathBuf,
        log_writer: Box<dyn Write + Send>,
    ) -> Self {
        Self {
            output,
            verbose,
            log: LogFile {
                path: log_path,
                writer: log_writer,
                closed: false,
            },
            verbose_line_start: true,
        }
    }

    /// Write user-facing text without a line break.
    pub fn write_output(&mut self, text: &str) -> KickoffResult<()> {
        self.output
            .write_all(text.as_bytes())
            .map_err(|e| ApplicationError::stream("output", e))?;
        self.log
            .write_str(text)
            .map_err(|e| ApplicationError::stream("log", e))?;
        Ok(())
    }

    pub fn write_output_line(&mut self, text: &str) -> KickoffResult<()> {
        self.write_output(&format!("{text}\n"))
    }

    /// Write diagnostic text without a line break.
    pub fn write_verbose(&mut self, text: &str) -> KickoffResult<()> {
        self.emit_verbose(text, false)
    }

    /// Write diagnostic text and end the line. An empty `text` only ends the
    /// current line.
    pub fn write_verbose_line(&mut self, text: &str) -> KickoffResult<()> {
        self.emit_verbose(text, true)
    }

    fn emit_verbose(&mut self, text: &str, newline: bool) -> KickoffResult<()> {
        let mut rendered = String::with_capacity(VERBOSE_PREFIX.len() + text.len() + 1);
        if self.verbose_line_start && !text.is_empty() {
            rendered.push_str(VERBOSE_PREFIX);
        }
        rendered.push_str(text);
        if newline {
            rendered.push('\n');
        }
        if rendered.is_empty() {
            return Ok(());
        }
        self.verbose_line_start = rendered.ends_with('\n');

        self.verbose
            .write_str(&rendered)
            .map_err(|e| ApplicationError::stream("diagnostic", e))?;
        self.log
            .write_str(&rendered)
            .map_err(|e| ApplicationError::stream("log", e))?;
        Ok(())
    }

    /// Flush every stream and close the log file, returning its path.
    ///
    /// Dropping `LogStreams` without calling this still closes the log file;
    /// `finish` additionally reports flush failures.
    pub fn finish(mut self) -> KickoffResult<PathBuf> {
        self.output
            .flush()
            .map_err(|e| ApplicationError::stream("output", e))?;
        self.verbose
            .flush()
            .map_err(|e| ApplicationError::stream("diagnostic", e))?;

        let path = self.log.path.clone();
        self.log
            .close()
            .map_err(|e| ApplicationError::stream("log", e))?;
        Ok(path)
    }
}
