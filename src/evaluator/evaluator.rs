use std::collections::VecDeque;

use tracing::{debug, trace};

use crate::{
    ast::{
        ast::{Expr, Stmt, Stylesheet},
        expressions::{LiteralExpr, Operator},
        statements::IfClause,
        values::Literal,
    },
    errors::errors::{Error, ErrorImpl},
    scope::scope_stack::ScopeStack,
    Position,
};

/// Pending work for one block body.
///
/// A spliced branch is bracketed by `PushScope`/`PopScope` so it keeps its
/// own frame even though its statements land in the enclosing body.
#[derive(Debug)]
enum WorkItem {
    Stmt(Stmt),
    PushScope,
    PopScope,
}

#[derive(Debug, Default)]
pub struct Evaluator {
    pub scopes: ScopeStack<Literal>,
}

impl Evaluator {
    pub fn new() -> Self {
        Evaluator {
            scopes: ScopeStack::new(),
        }
    }

    /// Reduces every expression and removes every conditional in `stylesheet`.
    ///
    /// The tree is only replaced once the whole body transformed cleanly. On
    /// error `stylesheet` is left exactly as it was, annotations included.
    pub fn evaluate_stylesheet(&mut self, stylesheet: &mut Stylesheet) -> Result<(), Error> {
        self.scopes.push();
        match self.transform_body(stylesheet.body.clone()) {
            Ok(body) => {
                self.scopes.pop();
                stylesheet.body = body;
                Ok(())
            }
            Err(error) => {
                // Frames opened below the failure point are never popped
                self.scopes = ScopeStack::new();
                Err(error)
            }
        }
    }

    fn transform_body(&mut self, body: Vec<Stmt>) -> Result<Vec<Stmt>, Error> {
        let mut work: VecDeque<WorkItem> = body.into_iter().map(WorkItem::Stmt).collect();
        let mut output = Vec::with_capacity(work.len());

        while let Some(item) = work.pop_front() {
            match item {
                WorkItem::PushScope => self.scopes.push(),
                WorkItem::PopScope => {
                    self.scopes.pop();
                }
                WorkItem::Stmt(Stmt::IfClause(clause)) => {
                    let branch = self.select_branch(clause)?;

                    work.push_front(WorkItem::PopScope);
                    for stmt in branch.into_iter().rev() {
                        work.push_front(WorkItem::Stmt(stmt));
                    }
                    work.push_front(WorkItem::PushScope);
                }
                WorkItem::Stmt(Stmt::StyleRule(mut rule)) => {
                    self.scopes.push();
                    rule.body = self.transform_body(std::mem::take(&mut rule.body))?;
                    self.scopes.pop();
                    output.push(Stmt::StyleRule(rule));
                }
                WorkItem::Stmt(Stmt::VariableAssignment(mut assignment)) => {
                    let value = self.reduce_expr(&mut assignment.value)?;
                    trace!(name = %assignment.name, value = %value, "variable bound");
                    self.scopes.define(&assignment.name, value);
                    output.push(Stmt::VariableAssignment(assignment));
                }
                WorkItem::Stmt(Stmt::Declaration(mut declaration)) => {
                    self.reduce_expr(&mut declaration.value)?;
                    output.push(Stmt::Declaration(declaration));
                }
            }
        }

        Ok(output)
    }

    /// Evaluates the condition in the current scope and returns the chosen branch.
    fn select_branch(&mut self, mut clause: IfClause) -> Result<Vec<Stmt>, Error> {
        match self.reduce_expr(&mut clause.condition)? {
            Literal::Bool(true) => {
                debug!(statements = clause.body.len(), "if branch selected");
                Ok(clause.body)
            }
            Literal::Bool(false) => {
                let else_body = clause.else_body.unwrap_or_default();
                debug!(statements = else_body.len(), "else branch selected");
                Ok(else_body)
            }
            other => Err(Error::invariant(
                format!("if condition reduced to {} instead of a boolean", other.get_type()),
                clause.span.start,
            )),
        }
    }

    /// Replaces `expr` with the literal it reduces to, keeping its span.
    pub fn reduce_expr(&self, expr: &mut Expr) -> Result<Literal, Error> {
        let value = self.compute(expr)?;
        let span = expr.as_node().get_span().clone();
        *expr = Expr::Literal(LiteralExpr {
            value: value.clone(),
            span,
            error: None,
        });
        Ok(value)
    }

    fn compute(&self, expr: &Expr) -> Result<Literal, Error> {
        match expr {
            Expr::Literal(literal) => Ok(literal.value.clone()),
            Expr::Variable(variable) => match self.scopes.lookup(&variable.name) {
                Some(value) => Ok(value.clone()),
                None => Err(Error::invariant(
                    format!("variable `{}` has no value in scope", variable.name),
                    variable.span.start.clone(),
                )),
            },
            Expr::Binary(binary) => {
                let left = self.compute(&binary.left)?;
                let right = self.compute(&binary.right)?;
                apply_operator(binary.operator, left, right, binary.span.start.clone())
            }
        }
    }
}

fn arithmetic(operator: Operator, left: i32, right: i32) -> Option<i32> {
    match operator {
        Operator::Add => left.checked_add(right),
        Operator::Subtract => left.checked_sub(right),
        Operator::Multiply => left.checked_mul(right),
    }
}

/// Applies `operator` to two literals of kinds the checker accepts.
pub fn apply_operator(
    operator: Operator,
    left: Literal,
    right: Literal,
    position: Position,
) -> Result<Literal, Error> {
    use Literal::{Percentage, Pixel, Scalar};

    let result = match (operator, left, right) {
        (Operator::Add | Operator::Subtract, Pixel(a), Pixel(b)) => {
            arithmetic(operator, a, b).map(Pixel)
        }
        (Operator::Add | Operator::Subtract, Percentage(a), Percentage(b)) => {
            arithmetic(operator, a, b).map(Percentage)
        }
        (Operator::Add | Operator::Subtract, Scalar(a), Scalar(b)) => {
            arithmetic(operator, a, b).map(Scalar)
        }
        (Operator::Multiply, Scalar(a), Scalar(b)) => arithmetic(operator, a, b).map(Scalar),
        (Operator::Multiply, Pixel(a), Scalar(b)) | (Operator::Multiply, Scalar(a), Pixel(b)) => {
            arithmetic(operator, a, b).map(Pixel)
        }
        (Operator::Multiply, Percentage(a), Scalar(b))
        | (Operator::Multiply, Scalar(a), Percentage(b)) => {
            arithmetic(operator, a, b).map(Percentage)
        }
        (operator, left, right) => {
            return Err(Error::invariant(
                format!(
                    "cannot apply `{}` to {} and {}",
                    operator,
                    left.get_type(),
                    right.get_type()
                ),
                position,
            ))
        }
    };

    result.ok_or_else(|| Error::new(ErrorImpl::ArithmeticOverflow { operator }, position))
}

/// Reduces every expression in `stylesheet` to a literal and replaces every
/// conditional with the statements of the branch it selects.
///
/// Only meaningful for a stylesheet the checker accepted. Anything the
/// checker would have rejected surfaces here as an
/// `InternalInvariantViolation`; overflowing arithmetic is an
/// `ArithmeticOverflow`. Running it twice yields the same tree.
#[tracing::instrument(level = "debug", skip_all)]
pub fn evaluate(stylesheet: &mut Stylesheet) -> Result<(), Error> {
    let mut evaluator = Evaluator::new();
    evaluator.evaluate_stylesheet(stylesheet)?;

    debug!(statements = stylesheet.body.len(), "evaluation finished");
    Ok(())
}
