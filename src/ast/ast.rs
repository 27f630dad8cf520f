use crate::{errors::errors::Error, Span, IMPL_NODE};

use super::{
    expressions::{BinaryExpr, LiteralExpr, Operator, VariableReference},
    statements::{Declaration, IfClause, Selector, StyleRule, VariableAssignment},
    values::Literal,
};

/// Node Trait
///
/// Shared behaviour of every node in the tree: a source span and at most
/// one diagnostic, attached by the checker.
pub trait Node {
    /// Returns the span of the node.
    fn get_span(&self) -> &Span;
    /// Returns the diagnostic attached to this node, if any.
    fn get_error(&self) -> Option<&Error>;
    /// Attaches a diagnostic, replacing any previous one.
    fn set_error(&mut self, error: Error);
}

/// Root of the tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Stylesheet {
    pub body: Vec<Stmt>,
    pub span: Span,
    pub error: Option<Error>,
}

IMPL_NODE!(Stylesheet);

impl Stylesheet {
    pub fn new(body: Vec<Stmt>) -> Self {
        Stylesheet {
            body,
            span: Span::null(),
            error: None,
        }
    }

    /// Every diagnostic in the tree, in pre-order.
    pub fn collect_errors(&self) -> Vec<&Error> {
        let mut errors = vec![];
        if let Some(error) = &self.error {
            errors.push(error);
        }
        for stmt in &self.body {
            stmt.collect_errors(&mut errors);
        }
        errors
    }

    pub fn has_errors(&self) -> bool {
        !self.collect_errors().is_empty()
    }

    /// Number of conditionals left anywhere in the tree.
    pub fn count_conditionals(&self) -> usize {
        count_conditionals(&self.body)
    }
}

fn count_conditionals(body: &[Stmt]) -> usize {
    body.iter()
        .map(|stmt| match stmt {
            Stmt::StyleRule(rule) => count_conditionals(&rule.body),
            Stmt::IfClause(clause) => {
                1 + count_conditionals(&clause.body)
                    + clause.else_body.as_deref().map_or(0, count_conditionals)
            }
            Stmt::Declaration(_) | Stmt::VariableAssignment(_) => 0,
        })
        .sum()
}

/// Statements that may appear in a stylesheet or a block body.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    StyleRule(StyleRule),
    Declaration(Declaration),
    VariableAssignment(VariableAssignment),
    IfClause(IfClause),
}

impl Stmt {
    pub fn rule(selectors: Vec<Selector>, body: Vec<Stmt>) -> Self {
        Stmt::StyleRule(StyleRule {
            selectors,
            body,
            span: Span::null(),
            error: None,
        })
    }

    pub fn declaration(property: &str, value: Expr) -> Self {
        Stmt::Declaration(Declaration {
            property: property.to_string(),
            value,
            span: Span::null(),
            error: None,
        })
    }

    pub fn assignment(name: &str, value: Expr) -> Self {
        Stmt::VariableAssignment(VariableAssignment {
            name: name.to_string(),
            value,
            span: Span::null(),
            error: None,
        })
    }

    pub fn if_clause(condition: Expr, body: Vec<Stmt>, else_body: Option<Vec<Stmt>>) -> Self {
        Stmt::IfClause(IfClause {
            condition,
            body,
            else_body,
            span: Span::null(),
            error: None,
        })
    }

    pub fn as_node(&self) -> &dyn Node {
        match self {
            Stmt::StyleRule(rule) => rule,
            Stmt::Declaration(declaration) => declaration,
            Stmt::VariableAssignment(assignment) => assignment,
            Stmt::IfClause(clause) => clause,
        }
    }

    fn collect_errors<'a>(&'a self, errors: &mut Vec<&'a Error>) {
        if let Some(error) = self.as_node().get_error() {
            errors.push(error);
        }
        match self {
            Stmt::StyleRule(rule) => {
                for stmt in &rule.body {
                    stmt.collect_errors(errors);
                }
            }
            Stmt::Declaration(declaration) => declaration.value.collect_errors(errors),
            Stmt::VariableAssignment(assignment) => assignment.value.collect_errors(errors),
            Stmt::IfClause(clause) => {
                clause.condition.collect_errors(errors);
                for stmt in clause.body.iter().chain(clause.else_body.iter().flatten()) {
                    stmt.collect_errors(errors);
                }
            }
        }
    }
}

/// Expressions. After evaluation only `Literal` remains.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal(LiteralExpr),
    Variable(VariableReference),
    Binary(BinaryExpr),
}

impl Expr {
    pub fn literal(value: Literal) -> Self {
        Expr::Literal(LiteralExpr {
            value,
            span: Span::null(),
            error: None,
        })
    }

    pub fn variable(name: &str) -> Self {
        Expr::Variable(VariableReference {
            name: name.to_string(),
            span: Span::null(),
            error: None,
        })
    }

    pub fn binary(left: Expr, operator: Operator, right: Expr) -> Self {
        Expr::Binary(BinaryExpr {
            left: Box::new(left),
            operator,
            right: Box::new(right),
            span: Span::null(),
            error: None,
        })
    }

    pub fn pixel(value: i32) -> Self {
        Expr::literal(Literal::Pixel(value))
    }

    pub fn percentage(value: i32) -> Self {
        Expr::literal(Literal::Percentage(value))
    }

    pub fn scalar(value: i32) -> Self {
        Expr::literal(Literal::Scalar(value))
    }

    pub fn color(text: &str) -> Self {
        Expr::literal(Literal::Color(text.to_string()))
    }

    pub fn bool(value: bool) -> Self {
        Expr::literal(Literal::Bool(value))
    }

    /// The literal value, if this expression has been fully reduced.
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Expr::Literal(literal) => Some(&literal.value),
            Expr::Variable(_) | Expr::Binary(_) => None,
        }
    }

    pub fn as_node(&self) -> &dyn Node {
        match self {
            Expr::Literal(literal) => literal,
            Expr::Variable(variable) => variable,
            Expr::Binary(binary) => binary,
        }
    }

    pub fn as_node_mut(&mut self) -> &mut dyn Node {
        match self {
            Expr::Literal(literal) => literal,
            Expr::Variable(variable) => variable,
            Expr::Binary(binary) => binary,
        }
    }

    fn collect_errors<'a>(&'a self, errors: &mut Vec<&'a Error>) {
        if let Some(error) = self.as_node().get_error() {
            errors.push(error);
        }
        if let Expr::Binary(binary) = self {
            binary.left.collect_errors(errors);
            binary.right.collect_errors(errors);
        }
    }
}
