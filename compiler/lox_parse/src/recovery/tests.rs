use super::*;
use lox_ir::Token;

fn tokens(source: &str) -> Vec<Token> {
    lox_lexer::scan(source).tokens
}

#[test]
fn test_token_set_membership() {
    const SET: TokenSet = TokenSet::new()
        .with(TokenKind::Plus)
        .with(TokenKind::Minus);

    assert!(SET.contains(TokenKind::Plus));
    assert!(SET.contains(TokenKind::Minus));
    assert!(!SET.contains(TokenKind::Star));
    assert!(!TokenSet::new().contains(TokenKind::Plus));
}

#[test]
fn test_token_set_spans_first_and_last_kinds() {
    let set = TokenSet::new()
        .with(TokenKind::LeftParen)
        .with(TokenKind::Eof);

    assert!(set.contains(TokenKind::LeftParen));
    assert!(set.contains(TokenKind::Eof));
    assert!(!set.contains(TokenKind::RightParen));
}

#[test]
fn test_statement_start_covers_reserved_words() {
    for kind in [
        TokenKind::Class,
        TokenKind::Fun,
        TokenKind::For,
        TokenKind::Return,
        TokenKind::Break,
    ] {
        assert!(STATEMENT_START.contains(kind), "{kind:?}");
    }
    assert!(!STATEMENT_START.contains(TokenKind::Identifier));
}

#[test]
fn test_synchronize_stops_after_semicolon() {
    let tokens = tokens("1 2 3; x");
    let mut cursor = Cursor::new(&tokens);

    assert_eq!(synchronize(&mut cursor), 4);
    assert!(cursor.check(TokenKind::Identifier));
}

#[test]
fn test_synchronize_stops_before_statement_keyword() {
    let tokens = tokens("a b print c;");
    let mut cursor = Cursor::new(&tokens);

    assert_eq!(synchronize(&mut cursor), 2);
    assert!(cursor.check(TokenKind::Print));
}

#[test]
fn test_synchronize_reaches_eof() {
    let tokens = tokens("a b c");
    let mut cursor = Cursor::new(&tokens);

    assert_eq!(synchronize(&mut cursor), 3);
    assert!(cursor.is_at_end());
}
