//! Expression parsing.
//!
//! Precedence climbing from assignment (loosest) down to primary. Binary
//! levels are left-associative; assignment is right-associative.

use lox_ir::{Expr, Literal, TokenKind};
use lox_stack::ensure_sufficient_stack;

use super::operators;
use crate::error::{EXPECT_EXPRESSION, INVALID_ASSIGNMENT_TARGET, MISSING_LEFT_OPERAND};
use crate::recovery::TokenSet;
use crate::{PResult, ParseError, Parser};

impl Parser<'_> {
    /// Parse an expression.
    ///
    /// Uses `ensure_sufficient_stack` so deeply nested groupings do not
    /// overflow the native stack.
    pub(crate) fn expression(&mut self) -> PResult<Expr> {
        ensure_sufficient_stack(|| self.assignment())
    }

    fn assignment(&mut self) -> PResult<Expr> {
        let expr = self.logic_or()?;

        if !self.cursor.check(TokenKind::Equal) {
            return Ok(expr);
        }
        let equals = self.cursor.advance();
        let value = self.expression()?;

        match expr {
            Expr::Variable { name } => Ok(Expr::assign(name, value)),
            // Reported without unwinding: the right-hand side parsed fine and
            // the statement can still finish.
            other => {
                self.record(ParseError::at(equals, INVALID_ASSIGNMENT_TARGET));
                Ok(other)
            }
        }
    }

    fn logic_or(&mut self) -> PResult<Expr> {
        let mut expr = self.logic_and()?;
        while self.cursor.check(TokenKind::Or) {
            let op = self.cursor.advance().clone();
            let right = self.logic_and()?;
            expr = Expr::logical(expr, op, right);
        }
        Ok(expr)
    }

    fn logic_and(&mut self) -> PResult<Expr> {
        let mut expr = self.equality()?;
        while self.cursor.check(TokenKind::And) {
            let op = self.cursor.advance().clone();
            let right = self.equality()?;
            expr = Expr::logical(expr, op, right);
        }
        Ok(expr)
    }

    fn equality(&mut self) -> PResult<Expr> {
        self.binary_level(operators::EQUALITY, Self::comparison)
    }

    fn comparison(&mut self) -> PResult<Expr> {
        self.binary_level(operators::COMPARISON, Self::term)
    }

    fn term(&mut self) -> PResult<Expr> {
        self.binary_level(operators::TERM, Self::factor)
    }

    fn factor(&mut self) -> PResult<Expr> {
        self.binary_level(operators::FACTOR, Self::unary)
    }

    /// One left-associative binary precedence level.
    ///
    /// When the level opens with one of its own operators (and that operator
    /// cannot start a unary expression), the left operand is absent: the node
    /// is still built with `left: None` and "Missing left operand." is
    /// reported at the operator, so the rest of the expression parses.
    fn binary_level(
        &mut self,
        ops: TokenSet,
        operand: fn(&mut Self) -> PResult<Expr>,
    ) -> PResult<Expr> {
        let current = self.cursor.current_kind();
        let dangling = ops.contains(current) && !operators::UNARY.contains(current);

        let mut left = if dangling { None } else { Some(operand(self)?) };

        while ops.contains(self.cursor.current_kind()) {
            let op = self.cursor.advance();
            let right = operand(self)?;
            left = Some(match left {
                Some(left) => Expr::binary(left, op.clone(), right),
                None => {
                    self.record(ParseError::at(op, MISSING_LEFT_OPERAND));
                    Expr::Binary {
                        left: None,
                        op: op.clone(),
                        right: Box::new(right),
                    }
                }
            });
        }

        // A dangling level always enters the loop, so `left` is set here.
        left.ok_or_else(|| ParseError::at(self.cursor.current(), EXPECT_EXPRESSION))
    }

    fn unary(&mut self) -> PResult<Expr> {
        if operators::UNARY.contains(self.cursor.current_kind()) {
            let op = self.cursor.advance().clone();
            let right = ensure_sufficient_stack(|| self.unary())?;
            return Ok(Expr::unary(op, right));
        }
        self.primary()
    }

    fn primary(&mut self) -> PResult<Expr> {
        let token = self.cursor.current();
        let expr = match token.kind {
            TokenKind::False => Expr::literal(Literal::Bool(false)),
            TokenKind::True => Expr::literal(Literal::Bool(true)),
            TokenKind::Nil => Expr::literal(Literal::Nil),
            TokenKind::Number | TokenKind::String => {
                Expr::literal(token.literal.clone().unwrap_or(Literal::Nil))
            }
            TokenKind::Identifier => Expr::variable(token.clone()),
            TokenKind::LeftParen => {
                self.cursor.advance();
                let inner = self.expression()?;
                self.consume(TokenKind::RightParen, "Expect ')' after expression.")?;
                return Ok(Expr::grouping(inner));
            }
            _ => return Err(ParseError::at(token, EXPECT_EXPRESSION)),
        };
        self.cursor.advance();
        Ok(expr)
    }
}
