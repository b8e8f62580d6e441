//! One interpreter session: scan, parse and run source text, reporting
//! errors through a diagnostic emitter.
//!
//! File mode hands the whole script to [`Session::run_source`]; the prompt
//! feeds each line to [`Session::run_line`]. Both share one interpreter, so
//! the root frame persists for the life of the session.

use lox_diagnostic::{DiagnosticEmitter, ErrorCounts};
use lox_eval::Interpreter;
use lox_ir::printer::{print_expr, print_stmt};
use lox_ir::Token;
use lox_lexer::ScanError;
use lox_parse::ParseError;
use tracing::debug;

use crate::DriverConfig;

pub struct Session<E: DiagnosticEmitter> {
    interpreter: Interpreter,
    emitter: E,
    show_tokens: bool,
    show_ast: bool,
}

impl<E: DiagnosticEmitter> Session<E> {
    pub fn new(interpreter: Interpreter, emitter: E) -> Self {
        Session {
            interpreter,
            emitter,
            show_tokens: false,
            show_ast: false,
        }
    }

    /// Apply the dump flags from `config`.
    #[must_use]
    pub fn configured(mut self, config: &DriverConfig) -> Self {
        self.show_tokens = config.tokens;
        self.show_ast = config.ast;
        self
    }

    pub fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }

    pub fn emitter(&self) -> &E {
        &self.emitter
    }

    /// Write the interactive prompt, without a newline.
    pub fn prompt(&self) {
        self.interpreter.print_handler().print("> ");
    }

    /// Run a whole program. Nothing is evaluated if scanning or parsing
    /// reported any error.
    ///
    /// Returns the errors emitted by this run on top of earlier ones.
    pub fn run_source(&mut self, source: &str) -> ErrorCounts {
        if let Some(tokens) = self.scan(source) {
            self.run_program(&tokens);
        }
        self.emitter.flush();
        self.emitter.counts()
    }

    /// Run one interactive line.
    ///
    /// A line that is exactly one expression is evaluated and its value
    /// printed; anything else runs as a program. Error counts start fresh
    /// for every line.
    pub fn run_line(&mut self, line: &str) -> ErrorCounts {
        self.emitter.reset();
        if let Some(tokens) = self.scan(line) {
            match lox_parse::parse_expression(&tokens) {
                Ok(expr) => {
                    debug!("line is a single expression");
                    if self.show_ast {
                        self.dump(&print_expr(&expr));
                    }
                    if let Err(error) = self.interpreter.evaluate_single_expression(&expr) {
                        self.emitter.emit(&error.to_diagnostic());
                    }
                }
                Err(_) => self.run_program(&tokens),
            }
        }
        self.emitter.flush();
        self.emitter.counts()
    }

    /// Scan `source`, reporting lexical errors. `None` if there were any.
    fn scan(&mut self, source: &str) -> Option<Vec<Token>> {
        let scanned = lox_lexer::scan(source);
        if self.show_tokens {
            for token in &scanned.tokens {
                self.dump(&token.to_string());
            }
        }
        let diagnostics: Vec<_> = scanned.errors.iter().map(ScanError::to_diagnostic).collect();
        self.emitter.emit_all(&diagnostics);
        (!scanned.has_errors()).then_some(scanned.tokens)
    }

    fn run_program(&mut self, tokens: &[Token]) {
        let program = match lox_parse::parse(tokens).into_program() {
            Ok(program) => program,
            Err(errors) => {
                let diagnostics: Vec<_> = errors.iter().map(ParseError::to_diagnostic).collect();
                self.emitter.emit_all(&diagnostics);
                return;
            }
        };

        if self.show_ast {
            for stmt in &program {
                self.dump(&print_stmt(stmt));
            }
        }

        if let Err(error) = self.interpreter.execute_program(&program) {
            self.emitter.emit(&error.to_diagnostic());
        }
    }

    fn dump(&self, text: &str) {
        self.interpreter.print_handler().println(text);
    }
}
