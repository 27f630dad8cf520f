use std::fmt::Display;

use crate::{errors::errors::Error, Span, IMPL_NODE};

use super::ast::{Expr, Stmt};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// `a`, `p`
    Tag(String),
    /// `#menu`, stored without the `#`
    Id(String),
    /// `.active`, stored without the `.`
    Class(String),
}

impl Display for Selector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Selector::Tag(tag) => write!(f, "{}", tag),
            Selector::Id(id) => write!(f, "#{}", id),
            Selector::Class(class) => write!(f, ".{}", class),
        }
    }
}

/// Style Rule
/// Selectors followed by a block of statements: `a, #menu { ... }`.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleRule {
    pub selectors: Vec<Selector>,
    pub body: Vec<Stmt>,
    pub span: Span,
    pub error: Option<Error>,
}

IMPL_NODE!(StyleRule);

/// Declaration
/// A single `property: value;` pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    pub property: String,
    pub value: Expr,
    pub span: Span,
    pub error: Option<Error>,
}

IMPL_NODE!(Declaration);

/// Variable Assignment
/// `Name := value;`, binds in the innermost enclosing block.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableAssignment {
    pub name: String,
    pub value: Expr,
    pub span: Span,
    pub error: Option<Error>,
}

IMPL_NODE!(VariableAssignment);

/// If Clause
/// `if [condition] { ... } else { ... }`. Each branch is its own block.
#[derive(Debug, Clone, PartialEq)]
pub struct IfClause {
    pub condition: Expr,
    pub body: Vec<Stmt>,
    pub else_body: Option<Vec<Stmt>>,
    pub span: Span,
    pub error: Option<Error>,
}

IMPL_NODE!(IfClause);
