//! Error recovery for the parser.
//!
//! Token sets with O(1) membership and the statement-boundary
//! synchronization used after a syntax error.

use lox_ir::TokenKind;
use tracing::debug;

use crate::cursor::Cursor;

// TokenSet is a u64 bitset indexed by discriminant.
const _: () = assert!(
    TokenKind::MAX_DISCRIMINANT < 64,
    "TokenSet uses u64 bitset; all discriminant indices must be < 64"
);

/// A set of token kinds as a bitset over `TokenKind` discriminants.
///
/// ```ignore
/// const ADDITIVE: TokenSet = TokenSet::new()
///     .with(TokenKind::Plus)
///     .with(TokenKind::Minus);
///
/// if ADDITIVE.contains(TokenKind::Plus) {
///     // O(1) lookup
/// }
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TokenSet(u64);

impl TokenSet {
    /// Create an empty token set.
    #[inline]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Add a token kind to this set (builder pattern for const contexts).
    #[inline]
    #[must_use]
    pub const fn with(self, kind: TokenKind) -> Self {
        Self(self.0 | (1u64 << kind.discriminant_index()))
    }

    #[inline]
    pub const fn contains(&self, kind: TokenKind) -> bool {
        (self.0 & (1u64 << kind.discriminant_index())) != 0
    }
}

/// Tokens that begin a statement. Recovery stops in front of these.
///
/// Includes the reserved keywords the grammar never accepts, so a stray
/// `class` or `return` also marks a restart point.
pub const STATEMENT_START: TokenSet = TokenSet::new()
    .with(TokenKind::Class)
    .with(TokenKind::Fun)
    .with(TokenKind::Var)
    .with(TokenKind::For)
    .with(TokenKind::If)
    .with(TokenKind::While)
    .with(TokenKind::Print)
    .with(TokenKind::Return)
    .with(TokenKind::Break);

/// Discard tokens up to the next statement boundary.
///
/// Stops right after a consumed `;`, in front of a [`STATEMENT_START`]
/// token, or at `Eof`. Returns the number of tokens skipped.
pub fn synchronize(cursor: &mut Cursor<'_>) -> usize {
    let mut skipped = 0;
    while !cursor.is_at_end() {
        if cursor.previous_kind() == Some(TokenKind::Semicolon)
            || STATEMENT_START.contains(cursor.current_kind())
        {
            break;
        }
        cursor.advance();
        skipped += 1;
    }
    debug!(
        skipped,
        resume_at = %cursor.current_kind(),
        line = cursor.current().line,
        "synchronized"
    );
    skipped
}

#[cfg(test)]
mod tests;
