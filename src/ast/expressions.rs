use std::fmt::Display;

use crate::{errors::errors::Error, Span, IMPL_NODE};

use super::{ast::Expr, values::Literal};

// LITERALS

/// Literal Expression
/// A value written directly in the source, or the result of folding an expression.
#[derive(Debug, Clone, PartialEq)]
pub struct LiteralExpr {
    pub value: Literal,
    pub span: Span,
    pub error: Option<Error>,
}

IMPL_NODE!(LiteralExpr);

/// Variable Reference
/// Represents a use of a variable by name, e.g. `LinkColor`.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableReference {
    pub name: String,
    pub span: Span,
    pub error: Option<Error>,
}

IMPL_NODE!(VariableReference);

// COMPLEX

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
}

impl Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operator::Add => write!(f, "+"),
            Operator::Subtract => write!(f, "-"),
            Operator::Multiply => write!(f, "*"),
        }
    }
}

/// Binary Expression
/// Represents a binary operation between two expressions in the AST.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub left: Box<Expr>,
    pub operator: Operator,
    pub right: Box<Expr>,
    pub span: Span,
    pub error: Option<Error>,
}

IMPL_NODE!(BinaryExpr);
