//! Property-based tests for checking and evaluation.
//!
//! These tests use proptest to generate stylesheets and verify:
//! 1. Same-kind arithmetic evaluates to the right value and kind
//! 2. Every ill-typed binary operation is annotated and typed Undefined
//! 3. Evaluation removes every conditional and is idempotent

use icss::{
    ast::{
        ast::{Expr, Node, Stmt, Stylesheet},
        expressions::Operator,
        values::{Literal, ValueType},
    },
    errors::errors::ErrorKind,
    evaluator::evaluator::evaluate,
    generator::generator::generate,
    pipeline::{check, Options},
    type_checker::{
        properties::PropertyTable,
        type_checker::{binary_type, type_check},
    },
};
use proptest::prelude::*;

// -- Strategies --

fn operator_strategy() -> impl Strategy<Value = Operator> {
    prop_oneof![
        Just(Operator::Add),
        Just(Operator::Subtract),
        Just(Operator::Multiply),
    ]
}

fn value_type_strategy() -> impl Strategy<Value = ValueType> {
    prop_oneof![
        Just(ValueType::Pixel),
        Just(ValueType::Percentage),
        Just(ValueType::Scalar),
        Just(ValueType::Color),
        Just(ValueType::Bool),
    ]
}

fn sample_literal(value_type: ValueType) -> Expr {
    match value_type {
        ValueType::Pixel => Expr::pixel(4),
        ValueType::Percentage => Expr::percentage(4),
        ValueType::Scalar => Expr::scalar(4),
        ValueType::Color => Expr::color("#abcdef"),
        ValueType::Bool => Expr::bool(true),
        ValueType::Undefined => unreachable!("not generated"),
    }
}

/// Source text of a block body made of declarations and nested conditionals.
fn body_strategy() -> impl Strategy<Value = String> {
    let leaf = (0u32..1000).prop_map(|n| format!("width: {}px;", n));

    leaf.prop_recursive(4, 32, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 1..4).prop_map(|stmts| stmts.join(" ")),
            (
                any::<bool>(),
                inner.clone(),
                prop::option::of(inner.clone())
            )
                .prop_map(|(condition, body, else_body)| {
                    let condition = if condition { "TRUE" } else { "FALSE" };
                    match else_body {
                        Some(else_body) => {
                            format!("if [{}] {{ {} }} else {{ {} }}", condition, body, else_body)
                        }
                        None => format!("if [{}] {{ {} }}", condition, body),
                    }
                }),
            (any::<bool>(), inner).prop_map(|(flag, body)| {
                let flag = if flag { "TRUE" } else { "FALSE" };
                format!("Flag := {}; if [Flag] {{ {} }}", flag, body)
            }),
        ]
    })
}

// -- Properties --

proptest! {
    #[test]
    fn same_kind_arithmetic(
        a in 0i32..100_000,
        b in 0i32..100_000,
        subtract in any::<bool>(),
        unit in prop_oneof![Just("px"), Just("%"), Just("")],
    ) {
        let operator = if subtract { "-" } else { "+" };
        let source = format!("X := {}{} {} {}{};", a, unit, operator, b, unit);

        let mut stylesheet = check(&source, "prop.icss", &Options::default()).unwrap();
        prop_assert!(!stylesheet.has_errors());
        evaluate(&mut stylesheet).unwrap();

        let Stmt::VariableAssignment(assignment) = &stylesheet.body[0] else {
            panic!("Expected assignment");
        };
        let expected = if subtract { a - b } else { a + b };
        let expected = match unit {
            "px" => Literal::Pixel(expected),
            "%" => Literal::Percentage(expected),
            _ => Literal::Scalar(expected),
        };
        prop_assert_eq!(assignment.value.as_literal(), Some(&expected));
    }

    #[test]
    fn ill_typed_binary_is_annotated(
        operator in operator_strategy(),
        left in value_type_strategy(),
        right in value_type_strategy(),
    ) {
        prop_assume!(binary_type(operator, left, right).is_err());

        let mut stylesheet = Stylesheet::new(vec![Stmt::assignment(
            "X",
            Expr::binary(sample_literal(left), operator, sample_literal(right)),
        )]);
        let count = type_check(&mut stylesheet, &PropertyTable::default());
        prop_assert_eq!(count, 2);

        let Stmt::VariableAssignment(assignment) = &stylesheet.body[0] else {
            panic!("Expected assignment");
        };
        let binary_error = assignment.value.as_node().get_error().unwrap();
        prop_assert_eq!(binary_error.kind(), ErrorKind::TypeMismatch);
        prop_assert_eq!(
            assignment.get_error().unwrap().get_error_name(),
            "UndefinedAssignment"
        );
    }

    #[test]
    fn evaluation_removes_conditionals(body in body_strategy()) {
        let source = format!("a {{ {} }}", body);

        let mut stylesheet = check(&source, "prop.icss", &Options::default()).unwrap();
        prop_assert!(!stylesheet.has_errors());

        evaluate(&mut stylesheet).unwrap();
        prop_assert_eq!(stylesheet.count_conditionals(), 0);
        prop_assert!(generate(&stylesheet).is_ok());

        let once = stylesheet.clone();
        evaluate(&mut stylesheet).unwrap();
        prop_assert_eq!(stylesheet, once);
    }
}
