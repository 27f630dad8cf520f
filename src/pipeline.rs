//! The full source-to-CSS pipeline.

use std::sync::Arc;

use tracing::{debug, info};

use crate::{
    ast::ast::Stylesheet,
    errors::errors::Error,
    evaluator::evaluator::evaluate,
    generator::generator::generate,
    lexer::lexer::tokenize,
    parser::parser::parse,
    type_checker::{properties::PropertyTable, type_checker::type_check},
};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Options {
    pub properties: PropertyTable,
    /// Evaluate even when the checker reported errors. Evaluation will then
    /// usually stop at an invariant violation.
    pub evaluate_on_errors: bool,
}

/// Tokenizes, parses and checks `source`.
///
/// A syntax error is returned as `Err`; checker diagnostics stay attached to
/// the returned tree.
pub fn check(source: &str, file_name: &str, options: &Options) -> Result<Stylesheet, Error> {
    let tokens = tokenize(source.to_string(), Some(file_name.to_string()))?;
    let mut stylesheet = parse(tokens, Arc::new(file_name.to_string()))?;

    let error_count = type_check(&mut stylesheet, &options.properties);
    debug!(error_count, "checked {}", file_name);

    Ok(stylesheet)
}

/// Compiles `source` to CSS text.
///
/// On failure returns every checker diagnostic in tree order, or the single
/// syntax, invariant or overflow error that stopped the run.
#[tracing::instrument(level = "info", skip(source, options))]
pub fn compile(source: &str, file_name: &str, options: &Options) -> Result<String, Vec<Error>> {
    let mut stylesheet = check(source, file_name, options).map_err(|error| vec![error])?;

    if stylesheet.has_errors() && !options.evaluate_on_errors {
        let errors: Vec<Error> = stylesheet.collect_errors().into_iter().cloned().collect();
        info!(errors = errors.len(), "stylesheet rejected");
        return Err(errors);
    }

    evaluate(&mut stylesheet).map_err(|error| vec![error])?;
    let output = generate(&stylesheet).map_err(|error| vec![error])?;

    info!(bytes = output.len(), "compiled {}", file_name);
    Ok(output)
}
