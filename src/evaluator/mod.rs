//! Evaluation of a checked stylesheet.
//!
//! The evaluator walks the tree with the same scoping as the checker,
//! folding every expression into a literal and inlining the selected branch
//! of every conditional. The result contains no variable references, no
//! binary operations and no `if` clauses.

pub mod evaluator;
