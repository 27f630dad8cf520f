/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the stylesheet tree
///
/// Submodules:
/// - ast: The root node, the statement and expression sum types and the `Node` trait
/// - expressions: Literal, variable reference and binary operation nodes
/// - statements: Style rule, declaration, assignment and conditional nodes
/// - values: Literal values and the value types the checker reasons about
pub mod ast;
pub mod expressions;
pub mod statements;
pub mod values;
