use std::collections::HashMap;

use crate::{ast::ast::{Expr, Stmt}, errors::errors::Error, lexer::tokens::TokenKind};

use super::{expr::*, parser::Parser, stmt::*};

#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Default,
    Additive,
    Multiplicative,
}

pub type StmtHandler = fn(&mut Parser) -> Result<Stmt, Error>;
pub type NUDHandler = fn(&mut Parser) -> Result<Expr, Error>;
pub type LEDHandler = fn(&mut Parser, Expr, BindingPower) -> Result<Expr, Error>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Additive and multiplicative
    parser.led(TokenKind::Plus, BindingPower::Additive, parse_binary_expr);
    parser.led(TokenKind::Dash, BindingPower::Additive, parse_binary_expr);
    parser.led(TokenKind::Star, BindingPower::Multiplicative, parse_binary_expr);

    // Literals and variables
    parser.nud(TokenKind::PixelSize, parse_primary_expr);
    parser.nud(TokenKind::Percentage, parse_primary_expr);
    parser.nud(TokenKind::Scalar, parse_primary_expr);
    parser.nud(TokenKind::Color, parse_primary_expr);
    parser.nud(TokenKind::True, parse_primary_expr);
    parser.nud(TokenKind::False, parse_primary_expr);
    parser.nud(TokenKind::CapitalIdent, parse_primary_expr);

    // Statements
    parser.stmt(TokenKind::CapitalIdent, parse_variable_assignment_stmt);
    parser.stmt(TokenKind::LowerIdent, parse_lower_ident_stmt);
    parser.stmt(TokenKind::IdIdent, parse_style_rule_stmt);
    parser.stmt(TokenKind::ClassIdent, parse_style_rule_stmt);
    parser.stmt(TokenKind::If, parse_if_stmt);
}

// Lookup tables inside parser struct, so it's easier
pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
pub type NUDLookup = HashMap<TokenKind, NUDHandler>;
pub type LEDLookup = HashMap<TokenKind, LEDHandler>;
pub type BPLookup = HashMap<TokenKind, BindingPower>;
