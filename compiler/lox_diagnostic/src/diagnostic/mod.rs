//! The diagnostic value and its two rendering formats.

use std::fmt;

/// Which phase produced the diagnostic.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    /// Scanner or parser error. Renders as `[<line>] Error<context>: <message>`.
    Syntax,
    /// Evaluation error. Renders as `<message>` then `[line <line>]`.
    Runtime,
}

/// A reportable error.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub line: u32,
    /// Location context for syntax errors: empty, `" at end"` or
    /// `" at '<lexeme>'"`. Always empty for runtime errors.
    pub context: String,
    pub message: String,
}

impl Diagnostic {
    /// Syntax error with explicit context.
    pub fn syntax(line: u32, context: impl Into<String>, message: impl Into<String>) -> Self {
        Diagnostic {
            kind: DiagnosticKind::Syntax,
            line,
            context: context.into(),
            message: message.into(),
        }
    }

    /// Runtime error.
    pub fn runtime(line: u32, message: impl Into<String>) -> Self {
        Diagnostic {
            kind: DiagnosticKind::Runtime,
            line,
            context: String::new(),
            message: message.into(),
        }
    }

    /// Context string pointing at a token: `" at end"` for the end-of-input
    /// marker, `" at '<lexeme>'"` otherwise.
    pub fn token_context(lexeme: &str, is_eof: bool) -> String {
        if is_eof {
            " at end".to_string()
        } else {
            format!(" at '{lexeme}'")
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            DiagnosticKind::Syntax => {
                write!(f, "[{}] Error{}: {}", self.line, self.context, self.message)
            }
            DiagnosticKind::Runtime => write!(f, "{}\n[line {}]", self.message, self.line),
        }
    }
}
