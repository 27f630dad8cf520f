use std::fmt::Display;

use thiserror::Error;

use crate::{
    ast::{expressions::Operator, values::ValueType},
    Position,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    /// Shorthand for the evaluator and generator, whose only errors are hard failures.
    pub fn invariant(message: impl Into<String>, position: Position) -> Self {
        Error::new(
            ErrorImpl::InternalInvariantViolation {
                message: message.into(),
            },
            position,
        )
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedTokenDetailed { .. } => "UnexpectedTokenDetailed",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::UndefinedVariable { .. } => "UndefinedVariable",
            ErrorImpl::UndefinedAssignment { .. } => "UndefinedAssignment",
            ErrorImpl::ColorInArithmetic { .. } => "ColorInArithmetic",
            ErrorImpl::OperandTypeMismatch { .. } => "OperandTypeMismatch",
            ErrorImpl::MultiplicationNeedsScalar { .. } => "MultiplicationNeedsScalar",
            ErrorImpl::IllegalConditionType { .. } => "IllegalConditionType",
            ErrorImpl::UnknownProperty { .. } => "UnknownProperty",
            ErrorImpl::PropertyTypeMismatch { .. } => "PropertyTypeMismatch",
            ErrorImpl::InternalInvariantViolation { .. } => "InternalInvariantViolation",
            ErrorImpl::ArithmeticOverflow { .. } => "ArithmeticOverflow",
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. }
            | ErrorImpl::UnexpectedToken { .. }
            | ErrorImpl::UnexpectedTokenDetailed { .. }
            | ErrorImpl::NumberParseError { .. } => ErrorKind::Syntax,
            ErrorImpl::UndefinedVariable { .. } => ErrorKind::UndefinedVariable,
            ErrorImpl::UndefinedAssignment { .. }
            | ErrorImpl::ColorInArithmetic { .. }
            | ErrorImpl::OperandTypeMismatch { .. }
            | ErrorImpl::MultiplicationNeedsScalar { .. } => ErrorKind::TypeMismatch,
            ErrorImpl::IllegalConditionType { .. } => ErrorKind::IllegalConditionType,
            ErrorImpl::UnknownProperty { .. } | ErrorImpl::PropertyTypeMismatch { .. } => {
                ErrorKind::DisallowedProperty
            }
            ErrorImpl::InternalInvariantViolation { .. } => ErrorKind::InternalInvariantViolation,
            ErrorImpl::ArithmeticOverflow { .. } => ErrorKind::Overflow,
        }
    }

    /// Whether this error stops the pipeline outright instead of being collected.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::InternalInvariantViolation | ErrorKind::Overflow
        )
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::UnexpectedToken { token } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, did you miss a semicolon?",
                token
            )),
            ErrorImpl::UnexpectedTokenDetailed { token, message } => {
                ErrorTip::Suggestion(format!("Unexpected token: `{}`, {}", token, message))
            }
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::UndefinedVariable { variable } => ErrorTip::Suggestion(format!(
                "Variable `{}` is not assigned in this or any enclosing block",
                variable
            )),
            ErrorImpl::UndefinedAssignment { variable } => ErrorTip::Suggestion(format!(
                "The value assigned to `{}` has no valid type",
                variable
            )),
            ErrorImpl::ColorInArithmetic { .. } => {
                ErrorTip::Suggestion(String::from("Colors cannot be used in arithmetic"))
            }
            ErrorImpl::OperandTypeMismatch { left, right, .. } => ErrorTip::Suggestion(format!(
                "Both operands need the same non-boolean type, received `{}` and `{}`",
                left, right
            )),
            ErrorImpl::MultiplicationNeedsScalar { .. } => ErrorTip::Suggestion(String::from(
                "At least one side of `*` must be a plain number",
            )),
            ErrorImpl::IllegalConditionType { received } => ErrorTip::Suggestion(format!(
                "Expected condition type `{}`, received `{}`",
                ValueType::Bool,
                received
            )),
            ErrorImpl::UnknownProperty { property } => {
                ErrorTip::Suggestion(format!("Property `{}` is not allowed", property))
            }
            ErrorImpl::PropertyTypeMismatch {
                property,
                expected,
                received,
            } => ErrorTip::Suggestion(format!(
                "Property `{}` expects {}, received `{}`",
                property, expected, received
            )),
            ErrorImpl::InternalInvariantViolation { .. } => ErrorTip::Suggestion(String::from(
                "The stylesheet reached evaluation without passing the checker",
            )),
            ErrorImpl::ArithmeticOverflow { .. } => {
                ErrorTip::Suggestion(String::from("The result does not fit in a 32-bit integer"))
            }
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.internal_error)
    }
}

impl std::error::Error for Error {}

/// Coarse classification of errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Syntax,
    UndefinedVariable,
    TypeMismatch,
    IllegalConditionType,
    DisallowedProperty,
    InternalInvariantViolation,
    Overflow,
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("unexpected token: {token:?}")]
    UnexpectedToken { token: String },
    #[error("unexpected token ({message}): {token:?}")]
    UnexpectedTokenDetailed { token: String, message: String },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("variable {variable:?} is not defined")]
    UndefinedVariable { variable: String },
    #[error("right-hand side of variable {variable:?} has an undefined type")]
    UndefinedAssignment { variable: String },
    #[error("colors cannot be used in `{operator}`")]
    ColorInArithmetic { operator: Operator },
    #[error("operands of `{operator}` must share one non-boolean type, found {left} and {right}")]
    OperandTypeMismatch {
        operator: Operator,
        left: ValueType,
        right: ValueType,
    },
    #[error("multiplication needs a scalar operand and no booleans, found {left} and {right}")]
    MultiplicationNeedsScalar { left: ValueType, right: ValueType },
    #[error("if condition must be a boolean, found {received}")]
    IllegalConditionType { received: ValueType },
    #[error("property {property:?} is not allowed")]
    UnknownProperty { property: String },
    #[error("property {property:?} expects {expected}, found {received}")]
    PropertyTypeMismatch {
        property: String,
        expected: String,
        received: ValueType,
    },
    #[error("internal invariant violated: {message}")]
    InternalInvariantViolation { message: String },
    #[error("integer overflow in `{operator}`")]
    ArithmeticOverflow { operator: Operator },
}
