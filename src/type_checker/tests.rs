//! Unit tests for the type checker.

use std::sync::Arc;

use pretty_assertions::assert_eq;

use crate::{
    ast::{
        ast::{Expr, Node, Stmt, Stylesheet},
        expressions::Operator,
        statements::Selector,
        values::ValueType,
    },
    errors::errors::{ErrorImpl, ErrorKind},
    lexer::lexer::tokenize,
    parser::parser::parse,
};

use super::{
    properties::PropertyTable,
    type_checker::{binary_type, type_check, TypeChecker},
};

fn parse_source(source: &str) -> Stylesheet {
    let tokens = tokenize(source.to_string(), Some("test.icss".to_string())).unwrap();
    parse(tokens, Arc::new("test.icss".to_string())).unwrap()
}

fn check_source(source: &str) -> Stylesheet {
    let mut stylesheet = parse_source(source);
    type_check(&mut stylesheet, &PropertyTable::default());
    stylesheet
}

fn error_names(stylesheet: &Stylesheet) -> Vec<String> {
    stylesheet
        .collect_errors()
        .iter()
        .map(|error| error.get_error_name().to_string())
        .collect()
}

fn rule(body: Vec<Stmt>) -> Stmt {
    Stmt::rule(vec![Selector::Tag("a".to_string())], body)
}

#[test]
fn test_well_typed_stylesheet_passes() {
    let stylesheet = check_source("X := 3px;\na { width: X * 2; }");

    assert!(!stylesheet.has_errors());
}

#[test]
fn test_color_property_rejects_pixels() {
    let stylesheet = check_source("a { color: 12px; }");

    let Stmt::StyleRule(rule) = &stylesheet.body[0] else {
        panic!("Expected style rule");
    };
    let error = rule.body[0].as_node().get_error().unwrap();
    assert_eq!(error.kind(), ErrorKind::DisallowedProperty);
    assert_eq!(
        error.get_impl(),
        &ErrorImpl::PropertyTypeMismatch {
            property: "color".to_string(),
            expected: "color".to_string(),
            received: ValueType::Pixel,
        }
    );
}

#[test]
fn test_width_accepts_pixel_and_percentage_only() {
    let stylesheet = check_source("a { width: 10px; height: 50%; width: 3; height: TRUE; }");

    assert_eq!(
        error_names(&stylesheet),
        vec!["PropertyTypeMismatch", "PropertyTypeMismatch"]
    );
}

#[test]
fn test_unknown_property_always_errors() {
    let stylesheet = check_source("a { font-size: 10px; }");

    let errors = stylesheet.collect_errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0].get_impl(),
        &ErrorImpl::UnknownProperty {
            property: "font-size".to_string()
        }
    );
}

#[test]
fn test_undefined_variable_cascades_to_declaration() {
    let stylesheet = check_source("a { color: UnknownVar; }");

    // Declaration first: pre-order puts the parent before its value
    assert_eq!(
        error_names(&stylesheet),
        vec!["PropertyTypeMismatch", "UndefinedVariable"]
    );

    let Stmt::StyleRule(rule) = &stylesheet.body[0] else {
        panic!("Expected style rule");
    };
    let Stmt::Declaration(declaration) = &rule.body[0] else {
        panic!("Expected declaration");
    };
    assert_eq!(
        declaration.value.as_node().get_error().unwrap().kind(),
        ErrorKind::UndefinedVariable
    );
}

#[test]
fn test_color_in_arithmetic() {
    let mut stylesheet = Stylesheet::new(vec![Stmt::assignment(
        "X",
        Expr::binary(Expr::color("#ff0000"), Operator::Add, Expr::pixel(1)),
    )]);
    type_check(&mut stylesheet, &PropertyTable::default());

    assert_eq!(
        error_names(&stylesheet),
        vec!["UndefinedAssignment", "ColorInArithmetic"]
    );
}

#[test]
fn test_add_needs_matching_types() {
    let stylesheet = check_source("X := 1px + 1%;\nY := TRUE + TRUE;\nZ := 1 - 2;");

    assert_eq!(
        error_names(&stylesheet),
        vec![
            "UndefinedAssignment",
            "OperandTypeMismatch",
            "UndefinedAssignment",
            "OperandTypeMismatch",
        ]
    );
}

#[test]
fn test_multiply_needs_scalar() {
    let stylesheet = check_source("X := 2px * 3px;\nY := TRUE * 2;\nZ := 2 * 50%;");

    assert_eq!(
        error_names(&stylesheet),
        vec![
            "UndefinedAssignment",
            "MultiplicationNeedsScalar",
            "UndefinedAssignment",
            "MultiplicationNeedsScalar",
        ]
    );
}

#[test]
fn test_binary_type_rules() {
    assert_eq!(
        binary_type(Operator::Add, ValueType::Pixel, ValueType::Pixel),
        Ok(ValueType::Pixel)
    );
    assert_eq!(
        binary_type(Operator::Subtract, ValueType::Scalar, ValueType::Scalar),
        Ok(ValueType::Scalar)
    );
    assert_eq!(
        binary_type(Operator::Multiply, ValueType::Scalar, ValueType::Scalar),
        Ok(ValueType::Scalar)
    );
    assert_eq!(
        binary_type(Operator::Multiply, ValueType::Scalar, ValueType::Percentage),
        Ok(ValueType::Percentage)
    );
    assert_eq!(
        binary_type(Operator::Multiply, ValueType::Pixel, ValueType::Scalar),
        Ok(ValueType::Pixel)
    );
    assert!(binary_type(Operator::Multiply, ValueType::Color, ValueType::Scalar).is_err());
    assert!(binary_type(Operator::Add, ValueType::Bool, ValueType::Bool).is_err());
}

#[test]
fn test_undefined_operands_do_not_report_twice() {
    let stylesheet = check_source("X := A + B;");

    // Both sides resolve to undefined, which share a type
    assert_eq!(
        error_names(&stylesheet),
        vec!["UndefinedAssignment", "UndefinedVariable", "UndefinedVariable"]
    );
}

#[test]
fn test_non_boolean_condition_annotates_clause() {
    let stylesheet = check_source("UseLinkColor := 3px;\na { if [UseLinkColor] { width: 10px; } }");

    let Stmt::StyleRule(rule) = &stylesheet.body[1] else {
        panic!("Expected style rule");
    };
    let Stmt::IfClause(clause) = &rule.body[0] else {
        panic!("Expected if clause");
    };
    assert_eq!(
        clause.get_error().unwrap().get_impl(),
        &ErrorImpl::IllegalConditionType {
            received: ValueType::Pixel
        }
    );
    assert!(clause.condition.as_node().get_error().is_none());
}

#[test]
fn test_rule_scope_is_closed_after_rule() {
    let stylesheet = check_source("a { X := 1px; width: X; }\np { width: X; }");

    assert_eq!(
        error_names(&stylesheet),
        vec!["PropertyTypeMismatch", "UndefinedVariable"]
    );
}

#[test]
fn test_branch_scopes_are_separate() {
    let stylesheet = check_source(
        "a { if [TRUE] { X := 1px; } else { width: X; } }",
    );

    assert_eq!(
        error_names(&stylesheet),
        vec!["PropertyTypeMismatch", "UndefinedVariable"]
    );
}

#[test]
fn test_condition_uses_enclosing_scope() {
    let mut stylesheet = Stylesheet::new(vec![
        Stmt::assignment("Flag", Expr::bool(true)),
        rule(vec![Stmt::if_clause(
            Expr::variable("Flag"),
            vec![
                Stmt::assignment("Flag", Expr::pixel(1)),
                Stmt::declaration("width", Expr::variable("Flag")),
            ],
            None,
        )]),
    ]);

    assert_eq!(type_check(&mut stylesheet, &PropertyTable::default()), 0);
}

#[test]
fn test_erroneous_assignment_still_defines() {
    let stylesheet = check_source("X := #ff0000 * 2;\na { width: X; }");

    // `X` is known (as undefined) so no second undefined-variable report
    assert_eq!(
        error_names(&stylesheet),
        vec!["UndefinedAssignment", "ColorInArithmetic", "PropertyTypeMismatch"]
    );
}

#[test]
fn test_color_only_table() {
    let mut stylesheet = parse_source("a { color: #000000; background-color: #ffffff; }");
    let count = type_check(&mut stylesheet, &PropertyTable::color_only());

    assert_eq!(count, 1);
    assert_eq!(error_names(&stylesheet), vec!["UnknownProperty"]);
}

#[test]
fn test_custom_property_table() {
    let table = PropertyTable::new([("Opacity", vec![ValueType::Scalar])]);
    assert!(table.contains("opacity"));
    assert_eq!(table.accepted_types("OPACITY"), Some(&[ValueType::Scalar][..]));
    assert!(table.check("opacity", ValueType::Pixel).is_err());
}

#[test]
fn test_checker_leaves_scope_stack_balanced() {
    let table = PropertyTable::default();
    let mut type_checker = TypeChecker::new(&table);
    let mut stylesheet = check_source("a { if [TRUE] { width: 1px; } else { width: 2px; } }");

    type_checker.check_stylesheet(&mut stylesheet);
    assert!(type_checker.scopes.is_empty());
}

#[test]
fn test_every_error_reported_in_one_run() {
    let stylesheet = check_source(
        "X := 3px;\na { color: 12px; if [X] { width: Y; } }\np { font: 1px; }",
    );

    assert_eq!(
        error_names(&stylesheet),
        vec![
            "PropertyTypeMismatch",
            "IllegalConditionType",
            "PropertyTypeMismatch",
            "UndefinedVariable",
            "UnknownProperty",
        ]
    );
}
