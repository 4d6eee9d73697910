//! # Diagnostic Output
//!
//! Writes each lint diagnostic as one line, either as a CI workflow-command
//! annotation (`::error::<message>`) or as plain text.
//!
//! Workflow commands are line-oriented, so multi-line messages are escaped:
//! `%` becomes `%25`, `\r` becomes `%0D`, `\n` becomes `%0A`.

use std::io::Write;

use avrolint_schema::{Diagnostic, Reporter};
use clap::ValueEnum;

/// How diagnostics are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// `::error::` workflow-command annotations.
    #[default]
    Github,
    /// `error: <message>` with the message verbatim.
    Plain,
}

/// Escape a message for use as workflow-command data.
pub fn escape_data(message: &str) -> String {
    message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// A [`Reporter`] that writes one line per diagnostic.
#[derive(Debug)]
pub struct AnnotationReporter<W: Write> {
    out: W,
    format: OutputFormat,
    written: usize,
}

impl<W: Write> AnnotationReporter<W> {
    /// Write to `out` in the given format.
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self {
            out,
            format,
            written: 0,
        }
    }

    /// Emit one error line.
    pub fn error(&mut self, message: &str) {
        let result = match self.format {
            OutputFormat::Github => writeln!(self.out, "::error::{}", escape_data(message)),
            OutputFormat::Plain => writeln!(self.out, "error: {message}"),
        };
        match result {
            Ok(()) => self.written += 1,
            Err(e) => tracing::warn!(error = %e, "failed to write diagnostic"),
        }
    }

    /// Number of lines written so far.
    pub fn written(&self) -> usize {
        self.written
    }

    /// Recover the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for AnnotationReporter<W> {
    fn report(&mut self, diagnostic: &Diagnostic) {
        self.error(&diagnostic.to_string());
    }
}
