use pretty_assertions::assert_eq;

use crate::{
    ast::{
        ast::{Expr, Stmt, Stylesheet},
        expressions::Operator,
        statements::Selector,
    },
    errors::errors::ErrorKind,
};

use super::generator::generate;

fn tag(name: &str) -> Selector {
    Selector::Tag(name.to_string())
}

#[test]
fn test_single_rule() {
    let stylesheet = Stylesheet::new(vec![Stmt::rule(
        vec![tag("a")],
        vec![Stmt::declaration("width", Expr::pixel(6))],
    )]);

    assert_eq!(generate(&stylesheet).unwrap(), "a {\n  width: 6px;\n}\n");
}

#[test]
fn test_selectors_and_literal_forms() {
    let stylesheet = Stylesheet::new(vec![
        Stmt::assignment("Hidden", Expr::scalar(1)),
        Stmt::rule(
            vec![
                tag("p"),
                Selector::Id("menu".to_string()),
                Selector::Class("active".to_string()),
            ],
            vec![
                Stmt::declaration("color", Expr::color("#ff0000")),
                Stmt::declaration("width", Expr::percentage(50)),
                Stmt::assignment("Local", Expr::bool(true)),
                Stmt::declaration("height", Expr::scalar(3)),
                Stmt::declaration("flag", Expr::bool(false)),
            ],
        ),
    ]);

    assert_eq!(
        generate(&stylesheet).unwrap(),
        "p, #menu, .active {\n  color: #ff0000;\n  width: 50%;\n  height: 3;\n  flag: FALSE;\n}\n"
    );
}

#[test]
fn test_nested_rule_is_indented() {
    let stylesheet = Stylesheet::new(vec![Stmt::rule(
        vec![tag("a")],
        vec![
            Stmt::declaration("width", Expr::pixel(1)),
            Stmt::rule(
                vec![tag("p")],
                vec![Stmt::declaration("height", Expr::pixel(2))],
            ),
        ],
    )]);

    assert_eq!(
        generate(&stylesheet).unwrap(),
        "a {\n  width: 1px;\n  p {\n    height: 2px;\n  }\n}\n"
    );
}

#[test]
fn test_empty_stylesheet() {
    assert_eq!(generate(&Stylesheet::new(vec![])).unwrap(), "");
}

#[test]
fn test_unreduced_value_is_rejected() {
    let stylesheet = Stylesheet::new(vec![Stmt::rule(
        vec![tag("a")],
        vec![Stmt::declaration(
            "width",
            Expr::binary(Expr::pixel(1), Operator::Add, Expr::pixel(1)),
        )],
    )]);

    let error = generate(&stylesheet).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::InternalInvariantViolation);
}

#[test]
fn test_surviving_conditional_is_rejected() {
    let stylesheet = Stylesheet::new(vec![Stmt::rule(
        vec![tag("a")],
        vec![Stmt::if_clause(Expr::bool(true), vec![], None)],
    )]);

    let error = generate(&stylesheet).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::InternalInvariantViolation);
}
