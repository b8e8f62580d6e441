//! Token cursor for navigating the token stream.
//!
//! Provides low-level token access and consumption. The cursor never moves
//! past the trailing `Eof` token, so `current()` is always valid once the
//! stream holds that marker.

use lox_ir::{Token, TokenKind};
use tracing::trace;

/// Stand-in for streams that arrive without their end marker.
static MISSING_EOF: Token = Token {
    kind: TokenKind::Eof,
    lexeme: String::new(),
    literal: None,
    line: 1,
};

/// Cursor for navigating tokens.
pub struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at the start of the token stream.
    pub fn new(tokens: &'a [Token]) -> Self {
        Cursor { tokens, pos: 0 }
    }

    /// Current position in the token stream.
    ///
    /// Compared before and after a failed parse step to tell whether any
    /// token was consumed.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// The token under the cursor.
    #[inline]
    pub fn current(&self) -> &'a Token {
        self.tokens
            .get(self.pos)
            .or_else(|| self.tokens.last())
            .unwrap_or(&MISSING_EOF)
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    /// Kind of the most recently consumed token, `None` at the start.
    #[inline]
    pub fn previous_kind(&self) -> Option<TokenKind> {
        self.pos
            .checked_sub(1)
            .and_then(|prev| self.tokens.get(prev))
            .map(|token| token.kind)
    }

    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current_kind() == kind
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.current_kind() == TokenKind::Eof
    }

    /// Consume the current token and return it.
    ///
    /// At `Eof` the cursor stays put and keeps returning the end marker.
    pub fn advance(&mut self) -> &'a Token {
        let token = self.current();
        trace!(pos = self.pos, kind = %token.kind.display_name(), line = token.line, "advance");
        if !token.is_eof() {
            self.pos += 1;
        }
        token
    }
}
