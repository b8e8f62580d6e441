//! Recursive-descent parser for Lox.
//!
//! Tokens in, statements out. Each grammar rule is a method returning
//! `Result`; a failed rule unwinds to the nearest declaration, which records
//! the error, resynchronizes at a statement boundary and carries on, so one
//! pass reports every independent syntax error. Errors are collected in the
//! [`ParseResult`], never printed here.
//!
//! Entry points: [`parse`] for a whole program and [`parse_expression`] for
//! an interactive line holding a single expression.

mod cursor;
mod error;
mod grammar;
mod recovery;

use lox_ir::{Expr, Stmt, Token, TokenKind};
use tracing::{debug, trace};

pub use cursor::Cursor;
pub use error::ParseError;
pub use recovery::{synchronize, TokenSet, STATEMENT_START};

/// Result of one parse step.
pub(crate) type PResult<T> = Result<T, ParseError>;

/// Statements that parsed plus every syntax error found.
#[derive(Clone, Debug, PartialEq)]
pub struct ParseResult {
    pub statements: Vec<Stmt>,
    pub errors: Vec<ParseError>,
}

impl ParseResult {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// The program, or the errors if there were any.
    ///
    /// A program with any syntax error is never evaluated, even though
    /// recovery may have produced statements for the rest of it.
    pub fn into_program(self) -> Result<Vec<Stmt>, Vec<ParseError>> {
        if self.errors.is_empty() {
            Ok(self.statements)
        } else {
            Err(self.errors)
        }
    }
}

/// Parse a whole program: `declaration* Eof`.
pub fn parse(tokens: &[Token]) -> ParseResult {
    Parser::new(tokens).parse_program()
}

/// Parse `tokens` as exactly one expression followed by `Eof`.
pub fn parse_expression(tokens: &[Token]) -> Result<Expr, Vec<ParseError>> {
    Parser::new(tokens).parse_single_expression()
}

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    errors: Vec<ParseError>,
    /// Set when an error is recorded; further errors are dropped until the
    /// parser resynchronizes, so one malformed statement reports once.
    panic_mode: bool,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
            errors: Vec::new(),
            panic_mode: false,
        }
    }

    pub fn parse_program(mut self) -> ParseResult {
        let mut statements = Vec::new();
        while !self.cursor.is_at_end() {
            if let Some(stmt) = self.declaration() {
                statements.push(stmt);
            }
        }
        debug!(
            statements = statements.len(),
            errors = self.errors.len(),
            "parsed program"
        );
        ParseResult {
            statements,
            errors: self.errors,
        }
    }

    pub fn parse_single_expression(mut self) -> Result<Expr, Vec<ParseError>> {
        match self.expression() {
            Ok(expr) => {
                if !self.cursor.is_at_end() {
                    let error = ParseError::at(self.cursor.current(), "Expect end of expression.");
                    self.record(error);
                }
                if self.errors.is_empty() {
                    Ok(expr)
                } else {
                    Err(self.errors)
                }
            }
            Err(error) => {
                self.record(error);
                Err(self.errors)
            }
        }
    }

    /// Record a syntax error unless one is already pending for this
    /// statement.
    pub(crate) fn record(&mut self, error: ParseError) {
        if self.panic_mode {
            trace!(%error, "suppressed while recovering");
            return;
        }
        self.panic_mode = true;
        self.errors.push(error);
    }

    /// Skip to the next statement boundary and leave panic mode.
    ///
    /// `start` is where the failed declaration began; when nothing was
    /// consumed the offending token is skipped first so parsing always
    /// makes progress.
    pub(crate) fn recover(&mut self, start: usize) {
        if self.cursor.position() == start {
            self.cursor.advance();
        }
        synchronize(&mut self.cursor);
        self.panic_mode = false;
    }

    /// Consume a token of `kind` or fail with `message` at the current token.
    pub(crate) fn consume(&mut self, kind: TokenKind, message: &'static str) -> PResult<Token> {
        if self.cursor.check(kind) {
            Ok(self.cursor.advance().clone())
        } else {
            Err(ParseError::at(self.cursor.current(), message))
        }
    }

    /// Consume the current token if it is `kind`.
    pub(crate) fn eat(&mut self, kind: TokenKind) -> bool {
        if self.cursor.check(kind) {
            self.cursor.advance();
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests;
