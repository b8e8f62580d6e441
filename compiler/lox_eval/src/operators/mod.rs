//! Operator implementations for the evaluator.
//!
//! Dispatch is a match on the operator token's kind. The operator set is
//! fixed by the grammar, so an operator with no rule here is a parser defect.

mod unary;

pub(crate) use unary::evaluate_unary;

use lox_ir::{Token, TokenKind};

use crate::errors::{operands_must_be_numbers, operands_must_be_numbers_or_strings};
use crate::{EvalError, EvalResult, Value};

/// Apply a binary operator to two evaluated operands.
pub(crate) fn evaluate_binary(op: &Token, left: Value, right: Value) -> EvalResult {
    match op.kind {
        TokenKind::Plus => add(op, left, right),
        TokenKind::EqualEqual => Ok(Value::Bool(left == right)),
        TokenKind::BangEqual => Ok(Value::Bool(left != right)),
        TokenKind::Minus
        | TokenKind::Star
        | TokenKind::Slash
        | TokenKind::Greater
        | TokenKind::GreaterEqual
        | TokenKind::Less
        | TokenKind::LessEqual => {
            let (a, b) = numbers(op, &left, &right)?;
            Ok(numeric(op.kind, a, b))
        }
        other => unreachable!("no binary rule for operator {other:?}"),
    }
}

/// `+`: number sum or string concatenation.
fn add(op: &Token, left: Value, right: Value) -> EvalResult {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
        (Value::Str(mut a), Value::Str(b)) => {
            a.push_str(&b);
            Ok(Value::Str(a))
        }
        _ => Err(operands_must_be_numbers_or_strings(op)),
    }
}

#[inline]
fn numbers(op: &Token, left: &Value, right: &Value) -> Result<(f64, f64), EvalError> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok((*a, *b)),
        _ => Err(operands_must_be_numbers(op)),
    }
}

/// Arithmetic and comparison on two numbers. Division follows IEEE 754,
/// so dividing by zero yields an infinity or `NaN`.
fn numeric(kind: TokenKind, a: f64, b: f64) -> Value {
    match kind {
        TokenKind::Minus => Value::Number(a - b),
        TokenKind::Star => Value::Number(a * b),
        TokenKind::Slash => Value::Number(a / b),
        TokenKind::Greater => Value::Bool(a > b),
        TokenKind::GreaterEqual => Value::Bool(a >= b),
        TokenKind::Less => Value::Bool(a < b),
        TokenKind::LessEqual => Value::Bool(a <= b),
        other => unreachable!("{other:?} is not a numeric operator"),
    }
}
