//! Parenthesized prefix rendering of syntax trees.
//!
//! `1 + -(2)` renders as `(+ 1 (- (group 2)))`. Output is for traces,
//! `lox --ast` and test assertions; nothing parses it back.

use std::fmt::Write;

use crate::{Expr, Stmt};

/// Render an expression.
pub fn print_expr(expr: &Expr) -> String {
    let mut out = String::new();
    write_expr(&mut out, expr);
    out
}

/// Render a statement.
pub fn print_stmt(stmt: &Stmt) -> String {
    let mut out = String::new();
    write_stmt(&mut out, stmt);
    out
}

fn write_expr(out: &mut String, expr: &Expr) {
    match expr {
        Expr::Literal(literal) => {
            let _ = write!(out, "{literal}");
        }
        Expr::Grouping(inner) => parenthesize(out, "group", &[&**inner]),
        Expr::Unary { op, right } => parenthesize(out, &op.lexeme, &[&**right]),
        Expr::Binary { left, op, right } => {
            out.push('(');
            out.push_str(&op.lexeme);
            out.push(' ');
            match left {
                Some(left) => write_expr(out, left),
                None => out.push_str("<missing>"),
            }
            out.push(' ');
            write_expr(out, right);
            out.push(')');
        }
        Expr::Logical { left, op, right } => parenthesize(out, &op.lexeme, &[&**left, &**right]),
        Expr::Variable { name } => out.push_str(&name.lexeme),
        Expr::Assign { name, value } => {
            let _ = write!(out, "(= {} ", name.lexeme);
            write_expr(out, value);
            out.push(')');
        }
    }
}

fn parenthesize(out: &mut String, name: &str, exprs: &[&Expr]) {
    out.push('(');
    out.push_str(name);
    for expr in exprs {
        out.push(' ');
        write_expr(out, expr);
    }
    out.push(')');
}

fn write_stmt(out: &mut String, stmt: &Stmt) {
    match stmt {
        Stmt::Expression(expr) => parenthesize(out, ";", &[expr]),
        Stmt::Print(expr) => parenthesize(out, "print", &[expr]),
        Stmt::Var { name, initializer } => {
            let _ = write!(out, "(var {}", name.lexeme);
            if let Some(init) = initializer {
                out.push(' ');
                write_expr(out, init);
            }
            out.push(')');
        }
        Stmt::Block(statements) => {
            out.push_str("(block");
            for inner in statements {
                out.push(' ');
                write_stmt(out, inner);
            }
            out.push(')');
        }
        Stmt::If {
            condition,
            then_branch,
            else_branch,
        } => {
            out.push_str("(if ");
            write_expr(out, condition);
            out.push(' ');
            write_stmt(out, then_branch);
            if let Some(else_branch) = else_branch {
                out.push(' ');
                write_stmt(out, else_branch);
            }
            out.push(')');
        }
        Stmt::While { condition, body } => {
            out.push_str("(while ");
            write_expr(out, condition);
            out.push(' ');
            write_stmt(out, body);
            out.push(')');
        }
        Stmt::Break { .. } => out.push_str("(break)"),
    }
}
