use tracing::debug;

use crate::{
    ast::{
        ast::{Expr, Node, Stmt, Stylesheet},
        expressions::Operator,
        values::ValueType,
    },
    errors::errors::{Error, ErrorImpl},
    scope::scope_stack::ScopeStack,
};

use super::properties::PropertyTable;

#[derive(Debug)]
pub struct TypeChecker<'a> {
    pub scopes: ScopeStack<ValueType>,
    pub properties: &'a PropertyTable,
    pub error_count: usize,
}

impl<'a> TypeChecker<'a> {
    pub fn new(properties: &'a PropertyTable) -> Self {
        TypeChecker {
            scopes: ScopeStack::new(),
            properties,
            error_count: 0,
        }
    }

    /// Attaches a diagnostic to `node`.
    fn record(&mut self, node: &mut dyn Node, error_impl: ErrorImpl) {
        let error = Error::new(error_impl, node.get_span().start.clone());
        debug!(error = %error, position = node.get_span().start.0, "diagnostic recorded");
        node.set_error(error);
        self.error_count += 1;
    }

    pub fn check_stylesheet(&mut self, stylesheet: &mut Stylesheet) {
        self.scopes.push();
        self.check_body(&mut stylesheet.body);
        self.scopes.pop();
    }

    fn check_body(&mut self, body: &mut [Stmt]) {
        for stmt in body.iter_mut() {
            self.check_stmt(stmt);
        }
    }

    fn check_stmt(&mut self, stmt: &mut Stmt) {
        match stmt {
            Stmt::StyleRule(rule) => {
                self.scopes.push();
                self.check_body(&mut rule.body);
                self.scopes.pop();
            }
            Stmt::VariableAssignment(assignment) => {
                let value_type = self.type_of(&mut assignment.value);
                if value_type.is_undefined() {
                    let variable = assignment.name.clone();
                    self.record(assignment, ErrorImpl::UndefinedAssignment { variable });
                }
                // Bound even when undefined
                self.scopes.define(&assignment.name, value_type);
            }
            Stmt::Declaration(declaration) => {
                let value_type = self.type_of(&mut declaration.value);
                if let Err(error_impl) = self.properties.check(&declaration.property, value_type) {
                    self.record(declaration, error_impl);
                }
            }
            Stmt::IfClause(clause) => {
                // Condition is typed in the enclosing scope
                let condition_type = self.type_of(&mut clause.condition);
                if condition_type != ValueType::Bool {
                    self.record(
                        clause,
                        ErrorImpl::IllegalConditionType {
                            received: condition_type,
                        },
                    );
                }

                self.scopes.push();
                self.check_body(&mut clause.body);
                self.scopes.pop();

                if let Some(else_body) = &mut clause.else_body {
                    self.scopes.push();
                    self.check_body(else_body);
                    self.scopes.pop();
                }
            }
        }
    }

    /// Computes the type of `expr`, annotating any node that violates a rule.
    pub fn type_of(&mut self, expr: &mut Expr) -> ValueType {
        match expr {
            Expr::Literal(literal) => literal.value.get_type(),
            Expr::Variable(variable) => {
                let found = self.scopes.lookup(&variable.name).copied();
                match found {
                    Some(value_type) => value_type,
                    None => {
                        let name = variable.name.clone();
                        self.record(variable, ErrorImpl::UndefinedVariable { variable: name });
                        ValueType::Undefined
                    }
                }
            }
            Expr::Binary(binary) => {
                let left = self.type_of(&mut binary.left);
                let right = self.type_of(&mut binary.right);

                match binary_type(binary.operator, left, right) {
                    Ok(value_type) => value_type,
                    Err(error_impl) => {
                        self.record(binary, error_impl);
                        ValueType::Undefined
                    }
                }
            }
        }
    }
}

/// Result type of `left operator right`.
pub fn binary_type(
    operator: Operator,
    left: ValueType,
    right: ValueType,
) -> Result<ValueType, ErrorImpl> {
    if left == ValueType::Color || right == ValueType::Color {
        return Err(ErrorImpl::ColorInArithmetic { operator });
    }

    let has_bool = left == ValueType::Bool || right == ValueType::Bool;

    match operator {
        Operator::Add | Operator::Subtract => {
            if left != right || has_bool {
                Err(ErrorImpl::OperandTypeMismatch {
                    operator,
                    left,
                    right,
                })
            } else {
                Ok(left)
            }
        }
        Operator::Multiply => {
            let has_scalar = left == ValueType::Scalar || right == ValueType::Scalar;
            if has_bool || !has_scalar {
                Err(ErrorImpl::MultiplicationNeedsScalar { left, right })
            } else if left == ValueType::Scalar {
                // Scalar * Scalar stays Scalar
                Ok(right)
            } else {
                Ok(left)
            }
        }
    }
}

/// Checks `stylesheet`, attaching a diagnostic to every offending node.
///
/// Returns the number of diagnostics recorded by this run. The stylesheet
/// passes when this is zero.
#[tracing::instrument(level = "debug", skip_all)]
pub fn type_check(stylesheet: &mut Stylesheet, properties: &PropertyTable) -> usize {
    let mut type_checker = TypeChecker::new(properties);
    type_checker.check_stylesheet(stylesheet);

    debug!(errors = type_checker.error_count, "type check finished");
    type_checker.error_count
}
