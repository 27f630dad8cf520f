//! Parser module for building the stylesheet tree.
//!
//! This module contains the parser that transforms a stream of tokens
//! into a `Stylesheet`. It uses a Pratt parser for expressions
//! with proper operator precedence and handles:
//!
//! - Statement parsing (style rules, declarations, assignments, if/else)
//! - Expression parsing (`+`, `-`, `*`, literals and variable references)
//! - Error reporting with source positions
//!
//! The parser uses NUD (null denotation) and LED (left denotation) functions
//! for expression parsing with binding power for precedence handling.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
