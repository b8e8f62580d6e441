//! The tree-walking interpreter.
//!
//! `evaluate` handles expressions and `execute` handles statements; each is
//! one exhaustive match over the node variants. Statement execution returns
//! a [`ControlFlow`] so a `break` travels up through blocks and `if`s until
//! the nearest enclosing `while` consumes it.

mod scope_guard;

pub use scope_guard::ScopedInterpreter;

use lox_ir::{Expr, Stmt, TokenKind};
use lox_stack::ensure_sufficient_stack;
use tracing::trace;

use crate::errors::break_outside_loop;
use crate::operators::{evaluate_binary, evaluate_unary};
use crate::print_handler::{stdout_handler, SharedPrintHandler};
use crate::{Environment, EvalError, EvalResult, Value};

/// How a statement finished.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ControlFlow {
    /// Ran to completion; continue with the next statement.
    Normal,
    /// A `break` ran; unwind to the innermost loop.
    Break,
}

/// Result of executing a statement.
pub type ExecResult = Result<ControlFlow, EvalError>;

/// Evaluator state: the scope frames, the output sink and how many loops
/// are currently running.
pub struct Interpreter {
    pub(crate) env: Environment,
    print_handler: SharedPrintHandler,
    loop_depth: usize,
}

impl Interpreter {
    /// Interpreter printing to stdout.
    pub fn new() -> Self {
        Self::with_print_handler(stdout_handler())
    }

    pub fn with_print_handler(print_handler: SharedPrintHandler) -> Self {
        Interpreter {
            env: Environment::new(),
            print_handler,
            loop_depth: 0,
        }
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    pub fn environment(&self) -> &Environment {
        &self.env
    }

    /// Run a program against the root frame.
    ///
    /// Stops at the first runtime error. Bindings made before the error
    /// stay in the root frame.
    #[tracing::instrument(level = "debug", skip_all, fields(statements = program.len()))]
    pub fn execute_program(&mut self, program: &[Stmt]) -> Result<(), EvalError> {
        for stmt in program {
            match self.execute(stmt)? {
                ControlFlow::Normal => {}
                ControlFlow::Break => unreachable!("break escaped to top level with no loop running"),
            }
        }
        Ok(())
    }

    /// Evaluate one expression and print its value.
    pub fn evaluate_single_expression(&mut self, expr: &Expr) -> EvalResult {
        let value = self.evaluate(expr)?;
        self.print_handler.println(&value.to_string());
        Ok(value)
    }

    /// Evaluate an expression.
    pub fn evaluate(&mut self, expr: &Expr) -> EvalResult {
        ensure_sufficient_stack(|| self.evaluate_inner(expr))
    }

    fn evaluate_inner(&mut self, expr: &Expr) -> EvalResult {
        match expr {
            Expr::Literal(literal) => Ok(Value::from(literal)),
            Expr::Grouping(inner) => self.evaluate(inner),
            Expr::Unary { op, right } => {
                let operand = self.evaluate(right)?;
                evaluate_unary(op, operand)
            }
            Expr::Binary { left, op, right } => {
                let Some(left) = left else {
                    unreachable!("binary node with no left operand reached evaluation");
                };
                let left = self.evaluate(left)?;
                let right = self.evaluate(right)?;
                evaluate_binary(op, left, right)
            }
            Expr::Logical { left, op, right } => {
                let left = self.evaluate(left)?;
                let short_circuit = match op.kind {
                    TokenKind::Or => left.is_truthy(),
                    TokenKind::And => !left.is_truthy(),
                    other => unreachable!("{other:?} is not a logical operator"),
                };
                if short_circuit {
                    Ok(left)
                } else {
                    self.evaluate(right)
                }
            }
            Expr::Variable { name } => self.env.get(name),
            Expr::Assign { name, value } => {
                let value = self.evaluate(value)?;
                self.env.assign(name, value.clone())?;
                Ok(value)
            }
        }
    }

    /// Execute a statement.
    pub fn execute(&mut self, stmt: &Stmt) -> ExecResult {
        ensure_sufficient_stack(|| self.execute_inner(stmt))
    }

    fn execute_inner(&mut self, stmt: &Stmt) -> ExecResult {
        match stmt {
            Stmt::Expression(expr) => {
                self.evaluate(expr)?;
            }
            Stmt::Print(expr) => {
                let value = self.evaluate(expr)?;
                self.print_handler.println(&value.to_string());
            }
            Stmt::Var { name, initializer } => {
                let value = match initializer {
                    Some(init) => self.evaluate(init)?,
                    None => Value::Nil,
                };
                trace!(name = %name.lexeme, %value, "define");
                self.env.define(&name.lexeme, value);
            }
            Stmt::Block(statements) => return self.execute_block(statements),
            Stmt::If {
                condition,
                then_branch,
                else_branch,
            } => {
                if self.evaluate(condition)?.is_truthy() {
                    return self.execute(then_branch);
                }
                if let Some(else_branch) = else_branch {
                    return self.execute(else_branch);
                }
            }
            Stmt::While { condition, body } => {
                self.loop_depth += 1;
                let result = self.run_loop(condition, body);
                self.loop_depth -= 1;
                result?;
            }
            Stmt::Break { keyword } => {
                if self.loop_depth == 0 {
                    return Err(break_outside_loop(keyword));
                }
                return Ok(ControlFlow::Break);
            }
        }
        Ok(ControlFlow::Normal)
    }

    /// Run `statements` in a fresh child frame.
    ///
    /// The frame is released on every exit: normal completion, `break`, or
    /// a runtime error.
    fn execute_block(&mut self, statements: &[Stmt]) -> ExecResult {
        let mut scoped = self.scoped();
        for stmt in statements {
            if scoped.execute(stmt)? == ControlFlow::Break {
                return Ok(ControlFlow::Break);
            }
        }
        Ok(ControlFlow::Normal)
    }

    /// Loop until the condition is falsy or the body breaks. A break from
    /// the body ends this loop only.
    fn run_loop(&mut self, condition: &Expr, body: &Stmt) -> Result<(), EvalError> {
        while self.evaluate(condition)?.is_truthy() {
            if self.execute(body)? == ControlFlow::Break {
                break;
            }
        }
        Ok(())
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
