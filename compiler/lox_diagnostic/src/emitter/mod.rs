//! Diagnostic emitters.
//!
//! An emitter writes diagnostics somewhere and remembers what kinds it has
//! written, so the driver can pick an exit code after a whole-file run and
//! reset between interactive lines.

mod terminal;

pub use terminal::TerminalEmitter;

use crate::{Diagnostic, DiagnosticKind};

/// Running totals of emitted diagnostics.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ErrorCounts {
    pub syntax: usize,
    pub runtime: usize,
}

impl ErrorCounts {
    #[inline]
    pub fn record(&mut self, kind: DiagnosticKind) {
        match kind {
            DiagnosticKind::Syntax => self.syntax += 1,
            DiagnosticKind::Runtime => self.runtime += 1,
        }
    }

    #[inline]
    pub fn had_error(&self) -> bool {
        self.syntax > 0
    }

    #[inline]
    pub fn had_runtime_error(&self) -> bool {
        self.runtime > 0
    }

    #[inline]
    pub fn any(&self) -> bool {
        self.had_error() || self.had_runtime_error()
    }
}

/// Sink for diagnostics.
pub trait DiagnosticEmitter {
    /// Emit a single diagnostic.
    fn emit(&mut self, diagnostic: &Diagnostic);

    /// Counts of everything emitted since the last reset.
    fn counts(&self) -> ErrorCounts;

    /// Forget previously emitted errors (next interactive line).
    fn reset(&mut self);

    /// Flush any buffered output.
    fn flush(&mut self);

    /// Emit multiple diagnostics.
    fn emit_all(&mut self, diagnostics: &[Diagnostic]) {
        for diag in diagnostics {
            self.emit(diag);
        }
    }

    /// `[<line>] Error<context>: <message>`
    fn report_syntax_error(&mut self, line: u32, context: &str, message: &str) {
        self.emit(&Diagnostic::syntax(line, context, message));
    }

    /// `<message>` followed by `[line <line>]`
    fn report_runtime_error(&mut self, line: u32, message: &str) {
        self.emit(&Diagnostic::runtime(line, message));
    }
}
