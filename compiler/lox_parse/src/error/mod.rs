//! Parse errors.

use lox_diagnostic::Diagnostic;
use lox_ir::Token;

/// A syntax error anchored at a token.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("[{line}] Error{context}: {message}")]
pub struct ParseError {
    pub line: u32,
    /// `" at end"` or `" at '<lexeme>'"`.
    pub context: String,
    pub message: &'static str,
}

impl ParseError {
    /// Error pointing at `token`.
    pub fn at(token: &Token, message: &'static str) -> Self {
        ParseError {
            line: token.line,
            context: Diagnostic::token_context(&token.lexeme, token.is_eof()),
            message,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::syntax(self.line, self.context.clone(), self.message)
    }
}

pub(crate) const EXPECT_EXPRESSION: &str = "Expect expression.";
pub(crate) const MISSING_LEFT_OPERAND: &str = "Missing left operand.";
pub(crate) const INVALID_ASSIGNMENT_TARGET: &str = "Invalid assignment target.";
