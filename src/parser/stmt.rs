use crate::{
    ast::{
        ast::Stmt,
        statements::{Declaration, IfClause, Selector, StyleRule, VariableAssignment},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
};

use super::parser::Parser;

pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    match parser.get_stmt_lookup().get(&parser.current_token_kind()).copied() {
        Some(stmt_fn) => stmt_fn(parser),
        None => Err(Error::new(
            ErrorImpl::UnexpectedTokenDetailed {
                token: parser.current_token().value.clone(),
                message: String::from("expected a selector, a declaration, an assignment or `if`"),
            },
            parser.get_position(),
        )),
    }
}

/// `{ stmt* }`
pub fn parse_block_body(parser: &mut Parser) -> Result<Vec<Stmt>, Error> {
    parser.expect(TokenKind::OpenCurly)?;

    let mut body = vec![];
    while parser.current_token_kind() != TokenKind::CloseCurly {
        if !parser.has_tokens() {
            return Err(Error::new(
                ErrorImpl::UnexpectedTokenDetailed {
                    token: parser.current_token().value.clone(),
                    message: String::from("block is missing its closing `}`"),
                },
                parser.get_position(),
            ));
        }
        body.push(parse_stmt(parser)?);
    }

    parser.expect(TokenKind::CloseCurly)?;
    Ok(body)
}

pub fn parse_variable_assignment_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let name_token = parser.expect(TokenKind::CapitalIdent)?;

    let error = Error::new(
        ErrorImpl::UnexpectedTokenDetailed {
            token: parser.current_token().value.clone(),
            message: String::from("expected `:=` after variable name"),
        },
        parser.get_position(),
    );
    parser.expect_error(TokenKind::AssignmentOperator, Some(error))?;

    let value = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::VariableAssignment(VariableAssignment {
        name: name_token.value,
        value,
        span: parser.span_from(name_token.span.start),
        error: None,
    }))
}

/// A lowercase identifier starts a declaration (`width: ...`) or a tag selector (`a { ... }`).
pub fn parse_lower_ident_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    if parser.peek_kind(1) == TokenKind::Colon {
        parse_declaration_stmt(parser)
    } else {
        parse_style_rule_stmt(parser)
    }
}

pub fn parse_declaration_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let property_token = parser.expect(TokenKind::LowerIdent)?;
    parser.expect(TokenKind::Colon)?;

    let value = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::Declaration(Declaration {
        property: property_token.value,
        value,
        span: parser.span_from(property_token.span.start),
        error: None,
    }))
}

fn parse_selector(parser: &mut Parser) -> Result<Selector, Error> {
    let token = parser.current_token().clone();
    let selector = match token.kind {
        TokenKind::LowerIdent => Selector::Tag(token.value),
        TokenKind::IdIdent => Selector::Id(token.value.trim_start_matches('#').to_string()),
        TokenKind::ClassIdent => Selector::Class(token.value.trim_start_matches('.').to_string()),
        _ => {
            return Err(Error::new(
                ErrorImpl::UnexpectedTokenDetailed {
                    token: token.value,
                    message: String::from("expected a selector"),
                },
                token.span.start,
            ))
        }
    };

    parser.advance();
    Ok(selector)
}

pub fn parse_style_rule_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.get_position();

    let mut selectors = vec![parse_selector(parser)?];
    while parser.current_token_kind() == TokenKind::Comma {
        parser.advance();
        selectors.push(parse_selector(parser)?);
    }

    let body = parse_block_body(parser)?;

    Ok(Stmt::StyleRule(StyleRule {
        selectors,
        body,
        span: parser.span_from(start),
        error: None,
    }))
}

pub fn parse_if_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.expect(TokenKind::If)?.span.start;

    parser.expect(TokenKind::OpenBracket)?;
    let condition = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::CloseBracket)?;

    let body = parse_block_body(parser)?;

    let else_body = if parser.current_token_kind() == TokenKind::Else {
        parser.advance();
        Some(parse_block_body(parser)?)
    } else {
        None
    };

    Ok(Stmt::IfClause(IfClause {
        condition,
        body,
        else_body,
        span: parser.span_from(start),
        error: None,
    }))
}
