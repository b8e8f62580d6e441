//! Scanner for Lox.
//!
//! Turns source text into the token list the parser consumes. The list
//! always ends with exactly one `Eof` token carrying the last line number.
//! Lexical errors do not stop scanning: each bad character or unterminated
//! string is recorded and scanning resumes after it, so one pass surfaces
//! every lexical problem.

mod raw_token;

use logos::Logos;
use tracing::debug;

use lox_diagnostic::Diagnostic;
use lox_ir::{Literal, Token, TokenKind};

use raw_token::RawToken;

/// A lexical error.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("[{line}] Error: {message}")]
pub struct ScanError {
    pub line: u32,
    pub message: &'static str,
}

impl ScanError {
    /// Lexical errors use the syntax format with no location context.
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::syntax(self.line, "", self.message)
    }
}

/// Scanner output: tokens plus any lexical errors.
#[derive(Clone, Debug, PartialEq)]
pub struct ScanResult {
    pub tokens: Vec<Token>,
    pub errors: Vec<ScanError>,
}

impl ScanResult {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Scan `source` into tokens.
pub fn scan(source: &str) -> ScanResult {
    let mut lexer = RawToken::lexer_with_extras(source, 1);
    let mut tokens = Vec::new();
    let mut errors = Vec::new();

    while let Some(result) = lexer.next() {
        let line = lexer.extras;
        match result {
            Ok(RawToken::UnterminatedString) => errors.push(ScanError {
                line,
                message: "Unterminated string.",
            }),
            Ok(raw) => {
                if let Some(kind) = raw.kind() {
                    tokens.push(make_token(kind, lexer.slice(), line));
                }
            }
            Err(()) => errors.push(ScanError {
                line,
                message: "Unexpected character.",
            }),
        }
    }

    tokens.push(Token::eof(lexer.extras));
    debug!(tokens = tokens.len(), errors = errors.len(), "scanned source");

    ScanResult { tokens, errors }
}

fn make_token(kind: TokenKind, lexeme: &str, line: u32) -> Token {
    let literal = match kind {
        TokenKind::String => Some(Literal::Str(lexeme[1..lexeme.len() - 1].to_string())),
        // The regex only admits digits with an optional fraction, which
        // always parses.
        TokenKind::Number => lexeme.parse::<f64>().ok().map(Literal::Number),
        _ => None,
    };
    Token::new(kind, lexeme, literal, line)
}
