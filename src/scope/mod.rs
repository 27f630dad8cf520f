//! Lexical scoping shared by the checker and the evaluator.
//!
//! A `ScopeStack` is a chain of frames mapping names to values. The checker
//! instantiates it with value types, the evaluator with literals; both push
//! and pop frames at the same points in the tree.

pub mod scope_stack;

#[cfg(test)]
mod tests;
