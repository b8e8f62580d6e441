//! Parser tests over scanned source.

mod expressions;

use lox_ir::printer::print_stmt;

use crate::{parse, ParseResult};

fn parse_source(source: &str) -> ParseResult {
    let scanned = lox_lexer::scan(source);
    assert!(!scanned.has_errors(), "scan errors: {:?}", scanned.errors);
    parse(&scanned.tokens)
}

/// Printed form of every statement; fails the test on any syntax error.
fn parse_ok(source: &str) -> Vec<String> {
    let result = parse_source(source);
    assert!(
        result.errors.is_empty(),
        "unexpected errors for {source:?}: {:?}",
        result.errors
    );
    result.statements.iter().map(print_stmt).collect()
}

/// Rendered syntax errors, in report order.
fn parse_errors(source: &str) -> Vec<String> {
    parse_source(source)
        .errors
        .iter()
        .map(ToString::to_string)
        .collect()
}
