//! Logos-generated token recognizer.
//!
//! `RawToken` only classifies; the scanner in `lib.rs` turns each match into
//! a `lox_ir::Token` with its lexeme, literal value and line. The lexer
//! `extras` field is the current line number, bumped by newlines and by
//! strings that span lines.

use logos::{Lexer, Logos, Skip};

use lox_ir::TokenKind;

#[derive(Logos, Copy, Clone, Debug, PartialEq, Eq)]
#[logos(extras = u32)]
#[logos(skip r"[ \t\r]+")]
pub(crate) enum RawToken {
    #[token("\n", newline)]
    Newline,

    #[regex(r"//[^\n]*", logos::skip)]
    Comment,

    #[token("(")]
    LeftParen,
    #[token(")")]
    RightParen,
    #[token("{")]
    LeftBrace,
    #[token("}")]
    RightBrace,
    #[token(",")]
    Comma,
    #[token(".")]
    Dot,
    #[token("-")]
    Minus,
    #[token("+")]
    Plus,
    #[token(";")]
    Semicolon,
    #[token("/")]
    Slash,
    #[token("*")]
    Star,

    #[token("!")]
    Bang,
    #[token("!=")]
    BangEqual,
    #[token("=")]
    Equal,
    #[token("==")]
    EqualEqual,
    #[token(">")]
    Greater,
    #[token(">=")]
    GreaterEqual,
    #[token("<")]
    Less,
    #[token("<=")]
    LessEqual,

    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Identifier,
    #[regex(r#""[^"]*""#, count_lines)]
    String,
    /// A `"` with no closing quote before end of input.
    #[regex(r#""[^"]*"#, count_lines)]
    UnterminatedString,
    #[regex(r"[0-9]+(\.[0-9]+)?")]
    Number,

    #[token("and")]
    And,
    #[token("break")]
    Break,
    #[token("class")]
    Class,
    #[token("else")]
    Else,
    #[token("false")]
    False,
    #[token("for")]
    For,
    #[token("fun")]
    Fun,
    #[token("if")]
    If,
    #[token("nil")]
    Nil,
    #[token("or")]
    Or,
    #[token("print")]
    Print,
    #[token("return")]
    Return,
    #[token("super")]
    Super,
    #[token("this")]
    This,
    #[token("true")]
    True,
    #[token("var")]
    Var,
    #[token("while")]
    While,
}

fn newline(lex: &mut Lexer<RawToken>) -> Skip {
    lex.extras = lex.extras.saturating_add(1);
    Skip
}

fn count_lines(lex: &mut Lexer<RawToken>) {
    let newlines = lex.slice().bytes().filter(|&b| b == b'\n').count();
    lex.extras = lex
        .extras
        .saturating_add(u32::try_from(newlines).unwrap_or(u32::MAX));
}

impl RawToken {
    /// Token kind for a recognized lexeme.
    ///
    /// `None` for the variants that never reach the token list (skipped
    /// trivia and the unterminated-string error).
    pub(crate) fn kind(self) -> Option<TokenKind> {
        let kind = match self {
            RawToken::Newline | RawToken::Comment | RawToken::UnterminatedString => return None,
            RawToken::LeftParen => TokenKind::LeftParen,
            RawToken::RightParen => TokenKind::RightParen,
            RawToken::LeftBrace => TokenKind::LeftBrace,
            RawToken::RightBrace => TokenKind::RightBrace,
            RawToken::Comma => TokenKind::Comma,
            RawToken::Dot => TokenKind::Dot,
            RawToken::Minus => TokenKind::Minus,
            RawToken::Plus => TokenKind::Plus,
            RawToken::Semicolon => TokenKind::Semicolon,
            RawToken::Slash => TokenKind::Slash,
            RawToken::Star => TokenKind::Star,
            RawToken::Bang => TokenKind::Bang,
            RawToken::BangEqual => TokenKind::BangEqual,
            RawToken::Equal => TokenKind::Equal,
            RawToken::EqualEqual => TokenKind::EqualEqual,
            RawToken::Greater => TokenKind::Greater,
            RawToken::GreaterEqual => TokenKind::GreaterEqual,
            RawToken::Less => TokenKind::Less,
            RawToken::LessEqual => TokenKind::LessEqual,
            RawToken::Identifier => TokenKind::Identifier,
            RawToken::String => TokenKind::String,
            RawToken::Number => TokenKind::Number,
            RawToken::And => TokenKind::And,
            RawToken::Break => TokenKind::Break,
            RawToken::Class => TokenKind::Class,
            RawToken::Else => TokenKind::Else,
            RawToken::False => TokenKind::False,
            RawToken::For => TokenKind::For,
            RawToken::Fun => TokenKind::Fun,
            RawToken::If => TokenKind::If,
            RawToken::Nil => TokenKind::Nil,
            RawToken::Or => TokenKind::Or,
            RawToken::Print => TokenKind::Print,
            RawToken::Return => TokenKind::Return,
            RawToken::Super => TokenKind::Super,
            RawToken::This => TokenKind::This,
            RawToken::True => TokenKind::True,
            RawToken::Var => TokenKind::Var,
            RawToken::While => TokenKind::While,
        };
        Some(kind)
    }
}
