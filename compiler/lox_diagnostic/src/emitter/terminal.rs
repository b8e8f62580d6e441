//! Plain-text emitter over any `io::Write`.

use std::io::{self, Write};

use super::{DiagnosticEmitter, ErrorCounts};
use crate::Diagnostic;

/// Writes each diagnostic on its own line(s).
///
/// Used with `io::Stderr` by the driver and with `Vec<u8>` in tests.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    counts: ErrorCounts,
}

impl<W: Write> TerminalEmitter<W> {
    pub fn new(writer: W) -> Self {
        TerminalEmitter {
            writer,
            counts: ErrorCounts::default(),
        }
    }
}

impl TerminalEmitter<io::Stderr> {
    /// Emitter writing to the process diagnostic stream.
    pub fn stderr() -> Self {
        TerminalEmitter::new(io::stderr())
    }
}

impl TerminalEmitter<Vec<u8>> {
    /// Emitter capturing into memory.
    pub fn buffer() -> Self {
        TerminalEmitter::new(Vec::new())
    }

    /// Everything written so far, as text.
    pub fn output(&self) -> String {
        String::from_utf8_lossy(&self.writer).into_owned()
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        self.counts.record(diagnostic.kind);
        // A closed diagnostic stream is not itself reportable anywhere.
        let _ = writeln!(self.writer, "{diagnostic}");
    }

    fn counts(&self) -> ErrorCounts {
        self.counts
    }

    fn reset(&mut self) {
        self.counts = ErrorCounts::default();
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }
}
