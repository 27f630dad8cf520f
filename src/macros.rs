//! Utility macros for the compiler.
//!
//! This module defines helper macros used throughout the compiler:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a default lexer handler for fixed-text tokens
//! - `IMPL_NODE!` - Implements the `Node` trait for a tree node struct
//!
//! These macros reduce boilerplate in the lexer and the tree definitions.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's string value
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Scalar, "42".to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $span:expr) => {
        Token {
            kind: $kind,
            value: $value,
            span: $span,
        }
    };
}

/// Creates a default lexer handler for fixed-text tokens.
///
/// Generates a handler function that creates a token with the given kind
/// and advances the lexer position by the token's length.
///
/// # Arguments
///
/// * `$kind` - The TokenKind to create
/// * `$value` - The literal string value (used for length calculation)
///
/// # Example
///
/// ```ignore
/// RegexPattern {
///     regex: Regex::new("^:=").unwrap(),
///     handler: MK_DEFAULT_HANDLER!(TokenKind::AssignmentOperator, ":="),
/// }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr, $value:literal) => {
        |lexer: &mut Lexer, _regex: &Regex| {
            let span = lexer.span_of($value.len());
            lexer.push(MK_TOKEN!($kind, String::from($value), span));
            lexer.advance_n($value.len());
        }
    };
}

/// Implements `Node` for a struct with `span` and `error` fields.
///
/// # Example
///
/// ```ignore
/// IMPL_NODE!(Declaration);
/// ```
#[macro_export]
macro_rules! IMPL_NODE {
    ($node:ty) => {
        impl $crate::ast::ast::Node for $node {
            fn get_span(&self) -> &$crate::Span {
                &self.span
            }
            fn get_error(&self) -> Option<&$crate::errors::errors::Error> {
                self.error.as_ref()
            }
            fn set_error(&mut self, error: $crate::errors::errors::Error) {
                self.error = Some(error);
            }
        }
    };
}
