//! Syntax tree node types.
//!
//! Two closed variant sets, one per syntactic category. The grammar is fixed,
//! so consumers match exhaustively instead of going through a visitor trait.

use crate::{Literal, Token};

/// Expression node.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    /// `123`, `"abc"`, `true`, `nil`
    Literal(Literal),

    /// `( expr )`
    Grouping(Box<Expr>),

    /// `!expr`, `-expr`
    Unary { op: Token, right: Box<Expr> },

    /// Arithmetic, comparison and equality operators.
    ///
    /// `left` is `None` only when the parser met an operator with nothing in
    /// front of it (`* 2`). The parser reports that as a syntax error, so a
    /// tree that reaches evaluation always has `Some`.
    Binary {
        left: Option<Box<Expr>>,
        op: Token,
        right: Box<Expr>,
    },

    /// Short-circuiting `and` / `or`.
    Logical {
        left: Box<Expr>,
        op: Token,
        right: Box<Expr>,
    },

    /// Variable read.
    Variable { name: Token },

    /// `name = value`; right-associative, evaluates to the assigned value.
    Assign { name: Token, value: Box<Expr> },
}

impl Expr {
    pub fn literal(value: Literal) -> Self {
        Expr::Literal(value)
    }

    pub fn grouping(inner: Expr) -> Self {
        Expr::Grouping(Box::new(inner))
    }

    pub fn unary(op: Token, right: Expr) -> Self {
        Expr::Unary {
            op,
            right: Box::new(right),
        }
    }

    pub fn binary(left: Expr, op: Token, right: Expr) -> Self {
        Expr::Binary {
            left: Some(Box::new(left)),
            op,
            right: Box::new(right),
        }
    }

    pub fn logical(left: Expr, op: Token, right: Expr) -> Self {
        Expr::Logical {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    pub fn variable(name: Token) -> Self {
        Expr::Variable { name }
    }

    pub fn assign(name: Token, value: Expr) -> Self {
        Expr::Assign {
            name,
            value: Box::new(value),
        }
    }
}

/// Statement node.
#[derive(Clone, Debug, PartialEq)]
pub enum Stmt {
    /// `expr ;`
    Expression(Expr),

    /// `print expr ;`
    Print(Expr),

    /// `var name ( = initializer )? ;`
    Var {
        name: Token,
        initializer: Option<Expr>,
    },

    /// `{ declaration* }`
    Block(Vec<Stmt>),

    /// `if ( condition ) then_branch ( else else_branch )?`
    If {
        condition: Expr,
        then_branch: Box<Stmt>,
        else_branch: Option<Box<Stmt>>,
    },

    /// `while ( condition ) body`
    While { condition: Expr, body: Box<Stmt> },

    /// `break ;` - keeps its keyword token for error lines.
    Break { keyword: Token },
}
