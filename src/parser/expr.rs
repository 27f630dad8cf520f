use crate::{
    ast::{
        ast::Expr,
        expressions::{BinaryExpr, LiteralExpr, Operator, VariableReference},
        values::Literal,
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    Span,
};

use super::{lookups::BindingPower, parser::Parser};

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let Some(nud_fn) = parser.get_nud_lookup().get(&token_kind).copied() else {
        return Err(Error::new(
            ErrorImpl::UnexpectedTokenDetailed {
                token: parser.current_token().value.clone(),
                message: String::from("expected a value or a variable"),
            },
            parser.get_position(),
        ));
    };

    let mut left = nud_fn(parser)?;

    // While LED and current BP is less than BP of current token, continue parsing lhs
    while let Some(&next_bp) = parser.get_bp_lookup().get(&parser.current_token_kind()) {
        if next_bp <= bp {
            break;
        }

        let token_kind = parser.current_token_kind();
        let Some(led_fn) = parser.get_led_lookup().get(&token_kind).copied() else {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    token: parser.current_token().value.clone(),
                },
                parser.get_position(),
            ));
        };

        left = led_fn(parser, left, next_bp)?;
    }

    Ok(left)
}

fn parse_number(parser: &Parser, suffix: &str) -> Result<i32, Error> {
    let token = parser.current_token();
    token
        .value
        .trim_end_matches(suffix)
        .parse()
        .map_err(|_| {
            Error::new(
                ErrorImpl::NumberParseError {
                    token: token.value.clone(),
                },
                token.span.start.clone(),
            )
        })
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let value = match parser.current_token_kind() {
        TokenKind::PixelSize => Literal::Pixel(parse_number(parser, "px")?),
        TokenKind::Percentage => Literal::Percentage(parse_number(parser, "%")?),
        TokenKind::Scalar => Literal::Scalar(parse_number(parser, "")?),
        TokenKind::Color => Literal::Color(parser.current_token().value.clone()),
        TokenKind::True => Literal::Bool(true),
        TokenKind::False => Literal::Bool(false),
        TokenKind::CapitalIdent => {
            let token = parser.advance().clone();
            return Ok(Expr::Variable(VariableReference {
                name: token.value,
                span: token.span,
                error: None,
            }));
        }
        _ => {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    token: parser.current_token().value.clone(),
                },
                parser.get_position(),
            ))
        }
    };

    Ok(Expr::Literal(LiteralExpr {
        value,
        span: parser.advance().span.clone(),
        error: None,
    }))
}

pub fn parse_binary_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    let operator_token = parser.advance().clone();
    let operator = match operator_token.kind {
        TokenKind::Plus => Operator::Add,
        TokenKind::Dash => Operator::Subtract,
        TokenKind::Star => Operator::Multiply,
        _ => {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    token: operator_token.value,
                },
                operator_token.span.start,
            ))
        }
    };

    let right = parse_expr(parser, bp)?;

    Ok(Expr::Binary(BinaryExpr {
        span: Span {
            start: left.as_node().get_span().start.clone(),
            end: right.as_node().get_span().end.clone(),
        },
        left: Box::new(left),
        operator,
        right: Box::new(right),
        error: None,
    }))
}
