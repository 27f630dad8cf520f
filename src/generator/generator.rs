use tracing::debug;

use crate::{
    ast::{
        ast::{Node, Stmt, Stylesheet},
        statements::{Declaration, StyleRule},
    },
    errors::errors::Error,
};

const INDENT: &str = "  ";

#[derive(Debug, Default)]
pub struct Generator {
    output: String,
}

impl Generator {
    pub fn new() -> Self {
        Generator {
            output: String::new(),
        }
    }

    pub fn generate_stylesheet(mut self, stylesheet: &Stylesheet) -> Result<String, Error> {
        for stmt in &stylesheet.body {
            self.generate_stmt(stmt, 0)?;
        }
        Ok(self.output)
    }

    fn generate_stmt(&mut self, stmt: &Stmt, level: usize) -> Result<(), Error> {
        match stmt {
            Stmt::StyleRule(rule) => self.generate_rule(rule, level),
            Stmt::Declaration(declaration) => self.generate_declaration(declaration, level),
            // Assignments only feed the evaluator
            Stmt::VariableAssignment(_) => Ok(()),
            Stmt::IfClause(clause) => Err(Error::invariant(
                "conditional left in an evaluated stylesheet",
                clause.get_span().start.clone(),
            )),
        }
    }

    fn generate_rule(&mut self, rule: &StyleRule, level: usize) -> Result<(), Error> {
        let selectors = rule
            .selectors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");

        self.output
            .push_str(&format!("{}{} {{\n", INDENT.repeat(level), selectors));
        for stmt in &rule.body {
            self.generate_stmt(stmt, level + 1)?;
        }
        self.output.push_str(&format!("{}}}\n", INDENT.repeat(level)));
        Ok(())
    }

    fn generate_declaration(&mut self, declaration: &Declaration, level: usize) -> Result<(), Error> {
        let Some(value) = declaration.value.as_literal() else {
            return Err(Error::invariant(
                format!("value of `{}` was not reduced to a literal", declaration.property),
                declaration.get_span().start.clone(),
            ));
        };

        self.output.push_str(&format!(
            "{}{}: {};\n",
            INDENT.repeat(level),
            declaration.property,
            value
        ));
        Ok(())
    }
}

/// Renders `stylesheet`, which must already be evaluated.
#[tracing::instrument(level = "debug", skip_all)]
pub fn generate(stylesheet: &Stylesheet) -> Result<String, Error> {
    let output = Generator::new().generate_stylesheet(stylesheet)?;

    debug!(bytes = output.len(), "generation finished");
    Ok(output)
}
