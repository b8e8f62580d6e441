//! Unary operator implementations.

use lox_ir::{Token, TokenKind};

use crate::errors::operand_must_be_number;
use crate::{EvalResult, Value};

/// Apply a prefix operator to an evaluated operand.
pub(crate) fn evaluate_unary(op: &Token, operand: Value) -> EvalResult {
    match op.kind {
        TokenKind::Minus => match operand {
            Value::Number(n) => Ok(Value::Number(-n)),
            _ => Err(operand_must_be_number(op)),
        },
        TokenKind::Bang => Ok(Value::Bool(!operand.is_truthy())),
        other => unreachable!("no unary rule for operator {other:?}"),
    }
}
