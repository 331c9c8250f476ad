use crate::{
    ast::{ast::ExprWrapper, expressions::IntegerLiteral},
    errors::errors::{Error, ErrorImpl},
};

use super::{lookups::BindingPower, parser::Parser};

/// Pratt loop. Handlers start on their first token and leave the cursor on
/// their last one.
pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<ExprWrapper, Error> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let Some(&nud) = parser.get_nud_lookup().get(&token_kind) else {
        return Err(Error::new(
            ErrorImpl::NoPrefixHandler { kind: token_kind },
            parser.current_location(),
        ));
    };

    let mut left = nud(parser)?;

    // While the next token binds tighter than bp, fold it into the lhs
    while !parser.peek_token_kind().is_terminator() && parser.peek_binding_power() > bp {
        let token_kind = parser.peek_token_kind();
        let Some(&led) = parser.get_led_lookup().get(&token_kind) else {
            return Ok(left);
        };

        let operator_bp = parser.peek_binding_power();
        parser.advance();

        left = led(parser, left, operator_bp)?;
    }

    Ok(left)
}

pub fn parse_integer_literal(parser: &mut Parser) -> Result<ExprWrapper, Error> {
    let token = parser.current_token().clone();

    let Ok(value) = token.literal.parse::<i64>() else {
        return Err(Error::new(
            ErrorImpl::IntegerParse {
                literal: token.literal,
            },
            token.location,
        ));
    };

    Ok(ExprWrapper::new(IntegerLiteral { token, value }))
}
