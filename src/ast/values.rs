//! Literal values and value types.
//!
//! A `Literal` is what every expression reduces to after evaluation.
//! A `ValueType` is what the checker computes for an expression without
//! evaluating it; `Undefined` marks an expression that could not be typed.

use std::fmt::Display;

/// A fully reduced value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Literal {
    Pixel(i32),
    Percentage(i32),
    Scalar(i32),
    /// Kept as the source text, e.g. `#ff0000`
    Color(String),
    Bool(bool),
}

impl Literal {
    pub fn get_type(&self) -> ValueType {
        match self {
            Literal::Pixel(_) => ValueType::Pixel,
            Literal::Percentage(_) => ValueType::Percentage,
            Literal::Scalar(_) => ValueType::Scalar,
            Literal::Color(_) => ValueType::Color,
            Literal::Bool(_) => ValueType::Bool,
        }
    }
}

/// Renders the literal the way it appears in the generated stylesheet.
impl Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Literal::Pixel(value) => write!(f, "{}px", value),
            Literal::Percentage(value) => write!(f, "{}%", value),
            Literal::Scalar(value) => write!(f, "{}", value),
            Literal::Color(text) => write!(f, "{}", text),
            Literal::Bool(true) => write!(f, "TRUE"),
            Literal::Bool(false) => write!(f, "FALSE"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    Pixel,
    Percentage,
    Scalar,
    Color,
    Bool,
    Undefined,
}

impl ValueType {
    pub fn is_undefined(&self) -> bool {
        *self == ValueType::Undefined
    }
}

impl Display for ValueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ValueType::Pixel => "pixel",
            ValueType::Percentage => "percentage",
            ValueType::Scalar => "scalar",
            ValueType::Color => "color",
            ValueType::Bool => "boolean",
            ValueType::Undefined => "undefined",
        };
        write!(f, "{}", name)
    }
}
