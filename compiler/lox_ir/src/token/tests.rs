use super::*;
use pretty_assertions::assert_eq;

#[test]
fn eof_discriminant_is_the_maximum() {
    assert_eq!(TokenKind::Eof.discriminant_index(), TokenKind::MAX_DISCRIMINANT);
    assert!(TokenKind::While.discriminant_index() < TokenKind::MAX_DISCRIMINANT);
    assert!(TokenKind::MAX_DISCRIMINANT < 64);
}

#[test]
fn integral_numbers_display_without_fraction() {
    assert_eq!(Literal::Number(4.0).to_string(), "4");
    assert_eq!(Literal::Number(4.5).to_string(), "4.5");
    assert_eq!(Literal::Number(-0.25).to_string(), "-0.25");
}

#[test]
fn literal_display_forms() {
    assert_eq!(Literal::Nil.to_string(), "nil");
    assert_eq!(Literal::Bool(false).to_string(), "false");
    assert_eq!(Literal::Str("hi there".into()).to_string(), "hi there");
}

#[test]
fn token_dump_includes_literal() {
    let token = Token::new(TokenKind::Number, "12", Some(Literal::Number(12.0)), 3);
    assert_eq!(token.to_string(), "Number 12 12");

    let ident = Token::simple(TokenKind::Identifier, "answer", 1);
    assert_eq!(ident.to_string(), "Identifier answer");
}

#[test]
fn eof_token_has_empty_lexeme() {
    let eof = Token::eof(9);
    assert!(eof.is_eof());
    assert_eq!(eof.lexeme, "");
    assert_eq!(eof.line, 9);
}
