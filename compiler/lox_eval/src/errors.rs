//! Runtime errors and their constructors.
//!
//! Every runtime error carries the line of the token that caused it. The
//! evaluator only builds errors through the factory functions below.

use lox_diagnostic::Diagnostic;
use lox_ir::Token;

use crate::Value;

/// What went wrong at runtime. `Display` is the user-facing message.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalErrorKind {
    #[error("Operand must be a number.")]
    OperandMustBeNumber,
    #[error("Operands must be numbers.")]
    OperandsMustBeNumbers,
    #[error("Operands must be two numbers or two strings.")]
    OperandsMustBeNumbersOrStrings,
    #[error("Undefined variable '{name}'.")]
    UndefinedVariable { name: String },
    #[error("Break statement not enclosed.")]
    BreakOutsideLoop,
}

/// A runtime error.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{kind}")]
pub struct EvalError {
    pub kind: EvalErrorKind,
    pub line: u32,
}

impl EvalError {
    #[inline]
    pub fn from_kind(kind: EvalErrorKind, line: u32) -> Self {
        EvalError { kind, line }
    }

    /// Message followed by `[line N]`.
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::runtime(self.line, self.kind.to_string())
    }
}

/// Result of evaluating an expression.
pub type EvalResult = Result<Value, EvalError>;

/// Unary `-` applied to a non-number.
#[cold]
pub fn operand_must_be_number(op: &Token) -> EvalError {
    EvalError::from_kind(EvalErrorKind::OperandMustBeNumber, op.line)
}

/// Arithmetic or comparison on non-numbers.
#[cold]
pub fn operands_must_be_numbers(op: &Token) -> EvalError {
    EvalError::from_kind(EvalErrorKind::OperandsMustBeNumbers, op.line)
}

/// `+` on anything but two numbers or two strings.
#[cold]
pub fn operands_must_be_numbers_or_strings(op: &Token) -> EvalError {
    EvalError::from_kind(EvalErrorKind::OperandsMustBeNumbersOrStrings, op.line)
}

/// Read of or assignment to a name no frame defines.
#[cold]
pub fn undefined_variable(name: &Token) -> EvalError {
    EvalError::from_kind(
        EvalErrorKind::UndefinedVariable {
            name: name.lexeme.clone(),
        },
        name.line,
    )
}

/// `break` executed with no loop running.
#[cold]
pub fn break_outside_loop(keyword: &Token) -> EvalError {
    EvalError::from_kind(EvalErrorKind::BreakOutsideLoop, keyword.line)
}
