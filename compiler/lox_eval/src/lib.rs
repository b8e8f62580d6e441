//! Tree-walking evaluator for Lox.
//!
//! Walks the statement list produced by `lox_parse` directly, resolving
//! variables through an arena of scope frames. `print` output goes through a
//! [`PrintHandlerImpl`] so it can be captured.
//!
//! Runtime errors abort the current run and come back as [`EvalError`]; the
//! interpreter and its root frame stay usable for the next run.

mod environment;
pub mod errors;
mod interpreter;
mod operators;
pub mod print_handler;
mod value;

pub use environment::{Environment, FrameId};
pub use errors::{EvalError, EvalErrorKind, EvalResult};
pub use interpreter::{ControlFlow, ExecResult, Interpreter, ScopedInterpreter};
pub use print_handler::{
    buffer_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl, SharedPrintHandler,
    StdoutPrintHandler,
};
pub use value::Value;
