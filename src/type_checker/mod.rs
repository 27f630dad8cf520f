//! Type checking and semantic analysis module.
//!
//! This module checks a parsed stylesheet without evaluating it. It:
//!
//! - Computes the value type of every expression
//! - Resolves variable references through nested scopes
//! - Enforces the arithmetic operand rules
//! - Requires boolean `if` conditions
//! - Validates declarations against the allowed-property table
//!
//! The checker never stops at the first problem. Each violation is attached
//! to the offending node and the walk continues, so one run reports every
//! error in the stylesheet.

pub mod properties;
pub mod type_checker;

#[cfg(test)]
mod tests;
