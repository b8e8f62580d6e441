//! Diagnostic reporting for the Lox interpreter.
//!
//! The parser and evaluator never print. They hand back typed errors, the
//! driver converts them into [`Diagnostic`]s and sends those through a
//! [`DiagnosticEmitter`], which writes one of two fixed formats and keeps
//! track of whether a syntax or runtime error has been seen.
//!
//! ```text
//! [3] Error at ';': Expect expression.
//! Operands must be numbers.
//! [line 7]
//! ```

mod diagnostic;
pub mod emitter;

pub use diagnostic::{Diagnostic, DiagnosticKind};
pub use emitter::{DiagnosticEmitter, ErrorCounts, TerminalEmitter};
