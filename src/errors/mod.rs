//! Error types and error handling for the compiler.
//!
//! This module defines the error types used throughout the compilation
//! process. It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for the front end, the checker and the evaluator
//! - Classification of every variant into a small set of error kinds
//! - Helpful error messages and suggestions

pub mod errors;
