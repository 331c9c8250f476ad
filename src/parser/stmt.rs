use crate::{
    ast::{
        ast::StmtWrapper,
        statements::{Block, Function, FunctionArgument, ImplicitVariableDefinition},
        types::Type,
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
};

use super::parser::Parser;

/// Dispatches on the current token. Kinds without a statement handler are
/// an InvalidStatement error.
pub fn parse_stmt(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    let kind = parser.current_token_kind();
    let Some(&handler) = parser.get_stmt_lookup().get(&kind) else {
        let token = parser.current_token();
        return Err(Error::new(
            ErrorImpl::InvalidStatement {
                kind,
                literal: token.literal.clone(),
            },
            token.location,
        ));
    };

    handler(parser)
}

/// Skips new lines and semicolons standing where a statement could start.
pub fn skip_empty_stmts(parser: &mut Parser) {
    while parser.current_token_kind().is_terminator() {
        parser.advance();
    }
}

pub fn parse_fn_decl_stmt(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    Ok(StmtWrapper::new(parse_fn_decl(parser)?))
}

/// `fn name(arg type, ...) [return_type] { ... }`
pub fn parse_fn_decl(parser: &mut Parser) -> Result<Function, Error> {
    let token = parser.current_token().clone();

    let name = parser.expect(TokenKind::Identifier)?.literal.clone();

    parser.expect(TokenKind::LParen)?;
    let arguments = parse_fn_arguments(parser)?;

    // A return type is told apart from the body by the `{` that must follow it
    let return_type = if parser.peek_token_kind() == TokenKind::Identifier {
        parser.advance();
        Some(Type(parser.current_token().literal.clone()))
    } else {
        None
    };

    parser.expect(TokenKind::LBrace)?;
    let body = parse_block(parser)?;

    Ok(Function {
        token,
        name,
        arguments,
        return_type,
        body,
    })
}

/// Parses `name type` pairs separated by commas, up to and including `)`.
fn parse_fn_arguments(parser: &mut Parser) -> Result<Vec<FunctionArgument>, Error> {
    let mut arguments = vec![];

    while parser.peek_token_kind() == TokenKind::Identifier {
        parser.advance();
        let name = parser.current_token().literal.clone();

        let type_ = Type(parser.expect(TokenKind::Identifier)?.literal.clone());
        arguments.push(FunctionArgument { name, type_ });

        if parser.peek_token_kind() != TokenKind::Comma {
            break;
        }
        parser.advance();
    }

    parser.expect(TokenKind::RParen)?;

    Ok(arguments)
}

pub fn parse_block_stmt(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    Ok(StmtWrapper::new(parse_block(parser)?))
}

/// Expects the current token to be `{`. Leaves the cursor after the
/// closing `}`. Any failing statement fails the whole block.
pub fn parse_block(parser: &mut Parser) -> Result<Block, Error> {
    let token = parser.current_token().clone();
    parser.advance();

    let mut statements = vec![];
    loop {
        skip_empty_stmts(parser);

        match parser.current_token_kind() {
            TokenKind::RBrace => break,
            TokenKind::EndOfInput => {
                return Err(Error::new(
                    ErrorImpl::UnexpectedToken {
                        expected: TokenKind::RBrace,
                        found: TokenKind::EndOfInput,
                    },
                    parser.current_location(),
                ));
            }
            _ => statements.push(parse_stmt(parser)?),
        }
    }

    parser.advance();

    Ok(Block { token, statements })
}

/// `name := expression` followed by a new line or `;`.
pub fn parse_implicit_var_def_stmt(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    let token = parser.current_token().clone();
    let name = token.literal.clone();

    parser.expect(TokenKind::Colon)?;
    parser.expect(TokenKind::Equal)?;

    // move onto the expression
    parser.advance();
    let value = parse_expr(parser, BindingPower::Lowest)?;

    if !parser.peek_token_kind().is_terminator() {
        return Err(Error::new(
            ErrorImpl::MissingTerminator {
                found: parser.peek_token_kind(),
            },
            parser.peek_token().location,
        ));
    }

    // past the expression and its terminator
    parser.advance();
    parser.advance();

    Ok(StmtWrapper::new(ImplicitVariableDefinition { token, name, value }))
}
