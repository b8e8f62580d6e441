//! Lox IR - token and syntax tree types.
//!
//! This crate is the contract between the pipeline stages:
//! - `Token` / `TokenKind` / `Literal`: scanner output, parser input
//! - `Expr` / `Stmt`: parser output, evaluator input
//! - `printer`: parenthesized prefix rendering for debugging
//!
//! The syntax tree is a plain owned tree (`Box` children). Nodes are built
//! once by the parser and only ever borrowed afterwards.

pub mod ast;
pub mod printer;
mod token;

pub use ast::{Expr, Stmt};
pub use token::{Literal, Token, TokenKind};
