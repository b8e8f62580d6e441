use super::*;
use crate::print_handler::buffer_handler;
use crate::EvalErrorKind;
use pretty_assertions::assert_eq;

fn program(source: &str) -> Vec<Stmt> {
    let scanned = lox_lexer::scan(source);
    assert!(!scanned.has_errors(), "{:?}", scanned.errors);
    lox_parse::parse(&scanned.tokens)
        .into_program()
        .unwrap_or_else(|errors| panic!("syntax errors in {source:?}: {errors:?}"))
}

fn interpreter() -> Interpreter {
    Interpreter::with_print_handler(buffer_handler())
}

/// Run `source` on a fresh interpreter; returns printed output and outcome.
fn run(source: &str) -> (String, Result<(), EvalError>) {
    let mut interp = interpreter();
    let result = interp.execute_program(&program(source));
    (interp.print_handler().get_output(), result)
}

fn output(source: &str) -> String {
    let (out, result) = run(source);
    if let Err(error) = result {
        panic!("runtime error in {source:?}: {error}");
    }
    out
}

fn runtime_error(source: &str) -> EvalError {
    match run(source).1 {
        Err(error) => error,
        Ok(()) => panic!("expected a runtime error from {source:?}"),
    }
}

#[test]
fn test_literals_evaluate_to_themselves() {
    assert_eq!(
        output(r#"print nil; print true; print false; print 12; print "str";"#),
        "nil\ntrue\nfalse\n12\nstr\n"
    );
}

#[test]
fn test_number_display() {
    assert_eq!(output("print 4.0; print 4.5; print 10 / 4;"), "4\n4.5\n2.5\n");
}

#[test]
fn test_addition() {
    assert_eq!(output(r#"print 1 + 2; print "a" + "b";"#), "3\nab\n");
    assert_eq!(
        runtime_error(r#"print 1 + "a";"#).kind,
        EvalErrorKind::OperandsMustBeNumbersOrStrings
    );
    assert_eq!(
        runtime_error(r#"print "a" + 1;"#).kind,
        EvalErrorKind::OperandsMustBeNumbersOrStrings
    );
}

#[test]
fn test_equality() {
    assert_eq!(
        output(r#"print 1 == "1"; print nil == nil; print nil != false; print "a" == "a";"#),
        "false\ntrue\ntrue\ntrue\n"
    );
}

#[test]
fn test_truthiness_via_not() {
    assert_eq!(
        output(r#"print !nil; print !false; print !0; print !"";"#),
        "true\ntrue\nfalse\nfalse\n"
    );
}

#[test]
fn test_grouping_evaluates_inner() {
    assert_eq!(output("print (1 + 2) * 3; print -(4);"), "9\n-4\n");
}

#[test]
fn test_unary_minus_needs_number() {
    let error = runtime_error("print -\"x\";");
    assert_eq!(error.kind, EvalErrorKind::OperandMustBeNumber);
    assert_eq!(error.to_string(), "Operand must be a number.");
}

#[test]
fn test_comparison_needs_numbers() {
    assert_eq!(
        runtime_error("print 1 < \"2\";").kind,
        EvalErrorKind::OperandsMustBeNumbers
    );
}

#[test]
fn test_logical_returns_operand_values() {
    assert_eq!(
        output(r#"print nil or "yes"; print 1 or 2; print nil and 1; print 1 and 2;"#),
        "yes\n1\nnil\n2\n"
    );
}

#[test]
fn test_logical_short_circuits_on_evaluated_left() {
    // The right side would fail if evaluated.
    assert_eq!(output("print true or undefined_name;"), "true\n");
    assert_eq!(output("print false and undefined_name;"), "false\n");

    // Left is a grouping whose value is falsy, so `or` must evaluate the right.
    assert_eq!(output("var a = false; print (a) or \"right\";"), "right\n");
}

#[test]
fn test_short_circuit_skips_side_effects() {
    assert_eq!(
        output("var a = 1; true or (a = 2); false and (a = 3); print a;"),
        "1\n"
    );
}

#[test]
fn test_block_shadowing() {
    assert_eq!(
        output("var a = 1; { var a = 2; print a; } print a;"),
        "2\n1\n"
    );
}

#[test]
fn test_assignment_through_scopes() {
    assert_eq!(output("var a; a = 5; print a;"), "5\n");
    assert_eq!(output("var a = 1; { a = 2; } print a;"), "2\n");
    assert_eq!(output("var a; var b; a = b = 3; print a + b;"), "6\n");
}

#[test]
fn test_assign_undefined_fails() {
    let error = runtime_error("b = 5;");
    assert_eq!(
        error.kind,
        EvalErrorKind::UndefinedVariable { name: "b".into() }
    );
    assert_eq!(error.to_diagnostic().to_string(), "Undefined variable 'b'.\n[line 1]");
}

#[test]
fn test_read_undefined_fails_with_line() {
    let error = runtime_error("var a = 1;\n\nprint c;");
    assert_eq!(error.line, 3);
}

#[test]
fn test_uninitialized_var_is_nil() {
    assert_eq!(output("var a; print a;"), "nil\n");
}

#[test]
fn test_redeclaration_overwrites() {
    assert_eq!(output("var a = 1; var a = \"two\"; print a;"), "two\n");
}

#[test]
fn test_if_else() {
    assert_eq!(
        output("if (1) print \"then\"; else print \"else\"; if (nil) print \"no\"; else print \"yes\";"),
        "then\nyes\n"
    );
    assert_eq!(output("if (false) print 1;"), "");
}

#[test]
fn test_while_loop() {
    assert_eq!(
        output("var i = 0; while (i < 3) { print i; i = i + 1; }"),
        "0\n1\n2\n"
    );
}

#[test]
fn test_break_ends_loop() {
    let (out, result) = run("while (true) { break; } print \"after\";");
    assert_eq!(result, Ok(()));
    assert_eq!(out, "after\n");
}

#[test]
fn test_break_skips_rest_of_body() {
    assert_eq!(
        output("var i = 0; while (true) { i = i + 1; if (i == 3) break; print i; } print \"done\";"),
        "1\n2\ndone\n"
    );
}

#[test]
fn test_break_outside_loop_fails() {
    let error = runtime_error("print 1;\nbreak;");
    assert_eq!(error.kind, EvalErrorKind::BreakOutsideLoop);
    assert_eq!(error.line, 2);
    assert_eq!(error.to_string(), "Break statement not enclosed.");
}

#[test]
fn test_break_in_block_outside_loop_fails() {
    assert_eq!(
        runtime_error("{ if (true) { break; } }").kind,
        EvalErrorKind::BreakOutsideLoop
    );
}

#[test]
fn test_nested_break_ends_only_inner_loop() {
    let source = "
        var i = 0;
        while (i < 3) {
            var j = 0;
            while (true) {
                if (j == 2) break;
                j = j + 1;
            }
            print i + j;
            i = i + 1;
        }
        print \"end\";
    ";
    assert_eq!(output(source), "2\n3\n4\nend\n");
}

#[test]
fn test_break_after_inner_loop_still_ends_outer() {
    let source = "
        var n = 0;
        while (true) {
            while (true) { break; }
            n = n + 1;
            if (n == 2) break;
        }
        print n;
    ";
    assert_eq!(output(source), "2\n");
}

#[test]
fn test_runtime_error_stops_remaining_statements() {
    let (out, result) = run("print 1; print -nil; print 2;");
    assert_eq!(out, "1\n");
    assert!(result.is_err());
}

#[test]
fn test_frames_released_after_error_and_break() {
    let mut interp = interpreter();
    let _ = interp.execute_program(&program("{ { var x = 1; print -\"no\"; } }"));
    assert_eq!(interp.environment().depth(), 1);

    interp
        .execute_program(&program("while (true) { { { break; } } }"))
        .unwrap();
    assert_eq!(interp.environment().depth(), 1);
}

#[test]
fn test_loop_depth_restored_after_error_in_loop() {
    let mut interp = interpreter();
    assert!(interp
        .execute_program(&program("while (true) { print -nil; }"))
        .is_err());

    let error = interp.execute_program(&program("break;")).unwrap_err();
    assert_eq!(error.kind, EvalErrorKind::BreakOutsideLoop);
}

#[test]
fn test_root_frame_persists_across_runs() {
    let mut interp = interpreter();
    interp.execute_program(&program("var a = 1;")).unwrap();
    let _ = interp.execute_program(&program("a = 2; print nope;"));
    interp.execute_program(&program("print a;")).unwrap();
    assert_eq!(interp.print_handler().get_output(), "2\n");
}

#[test]
fn test_evaluate_single_expression_prints_value() {
    let mut interp = interpreter();
    interp.execute_program(&program("var a = 20;")).unwrap();

    let tokens = lox_lexer::scan("a + 1").tokens;
    let expr = lox_parse::parse_expression(&tokens).unwrap();
    let value = interp.evaluate_single_expression(&expr).unwrap();

    assert_eq!(value, Value::Number(21.0));
    assert_eq!(interp.print_handler().get_output(), "21\n");
}

#[test]
fn test_deep_nesting_does_not_overflow() {
    let depth = 2_000;
    let source = format!("{}print 1;{}", "{".repeat(depth), "}".repeat(depth));
    assert_eq!(output(&source), "1\n");
}
