use pretty_assertions::assert_eq;

use super::parse_ok;
use crate::parse_expression;
use lox_ir::printer::print_expr;

fn expr(source: &str) -> String {
    let mut printed = parse_ok(&format!("{source};"));
    assert_eq!(printed.len(), 1);
    printed.remove(0)
}

#[test]
fn test_factor_binds_tighter_than_term() {
    assert_eq!(expr("1 + 2 * 3 - 4"), "(; (- (+ 1 (* 2 3)) 4))");
    assert_eq!(expr("8 / 4 / 2"), "(; (/ (/ 8 4) 2))");
}

#[test]
fn test_comparison_and_equality() {
    assert_eq!(expr("1 < 2 == true"), "(; (== (< 1 2) true))");
    assert_eq!(expr("a >= b != c <= d"), "(; (!= (>= a b) (<= c d)))");
}

#[test]
fn test_unary_nests() {
    assert_eq!(expr("!-x"), "(; (! (- x)))");
    assert_eq!(expr("- -1"), "(; (- (- 1)))");
    assert_eq!(expr("-a * b"), "(; (* (- a) b))");
}

#[test]
fn test_grouping_overrides_precedence() {
    assert_eq!(expr("(1 + 2) * 3"), "(; (* (group (+ 1 2)) 3))");
}

#[test]
fn test_and_binds_tighter_than_or() {
    assert_eq!(expr("a or b and c"), "(; (or a (and b c)))");
    assert_eq!(expr("a and b or c"), "(; (or (and a b) c))");
}

#[test]
fn test_assignment_is_right_associative() {
    assert_eq!(expr("a = b = 1"), "(; (= a (= b 1)))");
    assert_eq!(expr("a = b or c"), "(; (= a (or b c)))");
}

#[test]
fn test_literals() {
    assert_eq!(
        parse_ok(r#"nil; true; false; 4.5; "hi";"#),
        vec!["(; nil)", "(; true)", "(; false)", "(; 4.5)", "(; hi)"]
    );
}

#[test]
fn test_parse_expression_accepts_bare_expression() {
    let tokens = lox_lexer::scan("1 + 2").tokens;
    let parsed = parse_expression(&tokens).map(|e| print_expr(&e));
    assert_eq!(parsed, Ok("(+ 1 2)".to_string()));
}

#[test]
fn test_parse_expression_rejects_trailing_tokens() {
    let tokens = lox_lexer::scan("1 + 2;").tokens;
    let errors = parse_expression(&tokens).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].to_string(), "[1] Error at ';': Expect end of expression.");
}

#[test]
fn test_parse_expression_rejects_empty_input() {
    let tokens = lox_lexer::scan("").tokens;
    let errors = parse_expression(&tokens).unwrap_err();
    assert_eq!(errors[0].to_string(), "[1] Error at end: Expect expression.");
}

#[test]
fn test_deeply_nested_grouping() {
    let depth = 5_000;
    let source = format!("{}1{};", "(".repeat(depth), ")".repeat(depth));
    let result = super::parse_source(&source);
    assert!(result.errors.is_empty());
    assert_eq!(result.statements.len(), 1);
}
