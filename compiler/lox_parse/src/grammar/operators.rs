//! Operator token sets, one per binary precedence level.

use lox_ir::TokenKind;

use crate::recovery::TokenSet;

pub(crate) const EQUALITY: TokenSet = TokenSet::new()
    .with(TokenKind::BangEqual)
    .with(TokenKind::EqualEqual);

pub(crate) const COMPARISON: TokenSet = TokenSet::new()
    .with(TokenKind::Greater)
    .with(TokenKind::GreaterEqual)
    .with(TokenKind::Less)
    .with(TokenKind::LessEqual);

pub(crate) const TERM: TokenSet = TokenSet::new()
    .with(TokenKind::Minus)
    .with(TokenKind::Plus);

pub(crate) const FACTOR: TokenSet = TokenSet::new()
    .with(TokenKind::Slash)
    .with(TokenKind::Star);

pub(crate) const UNARY: TokenSet = TokenSet::new()
    .with(TokenKind::Bang)
    .with(TokenKind::Minus);
