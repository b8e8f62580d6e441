//! Declaration and statement parsing.

use lox_ir::{Stmt, TokenKind};
use lox_stack::ensure_sufficient_stack;

use crate::{PResult, Parser};

impl Parser<'_> {
    /// Parse one declaration, recovering from any syntax error inside it.
    ///
    /// Returns `None` when the declaration failed to parse; the error is
    /// recorded and the cursor sits at the next statement boundary.
    pub(crate) fn declaration(&mut self) -> Option<Stmt> {
        ensure_sufficient_stack(|| self.declaration_inner())
    }

    fn declaration_inner(&mut self) -> Option<Stmt> {
        let start = self.cursor.position();
        let result = if self.eat(TokenKind::Var) {
            self.var_declaration()
        } else {
            self.statement()
        };

        match result {
            Ok(stmt) => {
                // The statement ended on its own boundary even when it
                // reported an error without unwinding (bad assignment target,
                // missing operand), so the next declaration reports afresh.
                self.panic_mode = false;
                Some(stmt)
            }
            Err(error) => {
                self.record(error);
                self.recover(start);
                None
            }
        }
    }

    fn var_declaration(&mut self) -> PResult<Stmt> {
        let name = self.consume(TokenKind::Identifier, "Expect variable name.")?;
        let initializer = if self.eat(TokenKind::Equal) {
            Some(self.expression()?)
        } else {
            None
        };
        self.consume(TokenKind::Semicolon, "Expect ';' after variable declaration.")?;
        Ok(Stmt::Var { name, initializer })
    }

    fn statement(&mut self) -> PResult<Stmt> {
        ensure_sufficient_stack(|| self.statement_inner())
    }

    fn statement_inner(&mut self) -> PResult<Stmt> {
        match self.cursor.current_kind() {
            TokenKind::Print => {
                self.cursor.advance();
                self.print_statement()
            }
            TokenKind::LeftBrace => {
                self.cursor.advance();
                Ok(Stmt::Block(self.block()?))
            }
            TokenKind::If => {
                self.cursor.advance();
                self.if_statement()
            }
            TokenKind::While => {
                self.cursor.advance();
                self.while_statement()
            }
            TokenKind::Break => {
                let keyword = self.cursor.advance().clone();
                self.consume(TokenKind::Semicolon, "Expect ';' after 'break'.")?;
                Ok(Stmt::Break { keyword })
            }
            _ => self.expression_statement(),
        }
    }

    fn print_statement(&mut self) -> PResult<Stmt> {
        let value = self.expression()?;
        self.consume(TokenKind::Semicolon, "Expect ';' after value.")?;
        Ok(Stmt::Print(value))
    }

    fn expression_statement(&mut self) -> PResult<Stmt> {
        let expr = self.expression()?;
        self.consume(TokenKind::Semicolon, "Expect ';' after expression.")?;
        Ok(Stmt::Expression(expr))
    }

    /// Body of a block after its `{`.
    ///
    /// Declarations inside recover on their own, so one bad line does not
    /// discard the rest of the block.
    fn block(&mut self) -> PResult<Vec<Stmt>> {
        let mut statements = Vec::new();
        while !self.cursor.check(TokenKind::RightBrace) && !self.cursor.is_at_end() {
            if let Some(stmt) = self.declaration() {
                statements.push(stmt);
            }
        }
        self.consume(TokenKind::RightBrace, "Expect '}' after block.")?;
        Ok(statements)
    }

    fn if_statement(&mut self) -> PResult<Stmt> {
        self.consume(TokenKind::LeftParen, "Expect '(' after 'if'.")?;
        let condition = self.expression()?;
        self.consume(TokenKind::RightParen, "Expect ')' after if condition.")?;

        let then_branch = Box::new(self.statement()?);
        let else_branch = if self.eat(TokenKind::Else) {
            Some(Box::new(self.statement()?))
        } else {
            None
        };

        Ok(Stmt::If {
            condition,
            then_branch,
            else_branch,
        })
    }

    fn while_statement(&mut self) -> PResult<Stmt> {
        self.consume(TokenKind::LeftParen, "Expect '(' after 'while'.")?;
        let condition = self.expression()?;
        self.consume(TokenKind::RightParen, "Expect ')' after condition.")?;
        let body = Box::new(self.statement()?);
        Ok(Stmt::While { condition, body })
    }
}
