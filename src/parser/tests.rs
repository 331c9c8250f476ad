//! Unit tests for the parser module.
//!
//! This module contains tests for parsing the supported constructs:
//! - Function declarations
//! - Implicit variable definitions
//! - Nested blocks
//! - Error collection and recovery
//! - Registering extra expression handlers

use crate::{
    ast::{
        ast::{ExprWrapper, Node, Stmt, StmtType},
        expressions::IntegerLiteral,
        statements::{Block, Function, FunctionArgument, ImplicitVariableDefinition},
        types::Type,
    },
    errors::errors::{Error, ErrorImpl},
    lexer::{lexer::Lexer, tokens::TokenKind},
    Location,
};

use super::{
    expr::parse_expr,
    lookups::BindingPower,
    parser::{parse, Parser},
};

fn check_parser_errors(errors: &[Error]) {
    if errors.is_empty() {
        return;
    }

    for error in errors {
        eprintln!("parser error: {}", error);
    }
    panic!("parser has {} errors", errors.len());
}

fn integer_value(expr: &ExprWrapper) -> i64 {
    expr.downcast_ref::<IntegerLiteral>()
        .expect("expected an integer literal")
        .value
}

#[test]
fn test_parse_function_declaration() {
    let (program, errors) = parse("fn add(a int, b int) int {\n}\n");
    check_parser_errors(&errors);

    assert_eq!(program.len(), 1);
    let function = program.statements[0]
        .downcast_ref::<Function>()
        .expect("expected a function");

    assert_eq!(function.name, "add");
    assert_eq!(
        function.arguments,
        vec![
            FunctionArgument { name: String::from("a"), type_: Type::from("int") },
            FunctionArgument { name: String::from("b"), type_: Type::from("int") },
        ]
    );
    assert!(function.has_return_type());
    assert_eq!(function.return_type, Some(Type::from("int")));
    assert!(function.body.statements.is_empty());
    assert_eq!(function.get_location(), Location::new(1, 1));
}

#[test]
fn test_parse_function_without_arguments_or_return_type() {
    let (program, errors) = parse("fn main() {}");
    check_parser_errors(&errors);

    let function = program.statements[0].downcast_ref::<Function>().unwrap();
    assert_eq!(function.name, "main");
    assert!(function.arguments.is_empty());
    assert!(!function.has_return_type());
}

#[test]
fn test_parse_implicit_variable_definition() {
    let (program, errors) = parse("x := 42\n");
    check_parser_errors(&errors);

    assert_eq!(program.len(), 1);
    assert_eq!(program.statements[0].get_stmt_type(), StmtType::ImplicitVariableDefinition);

    let definition = program.statements[0]
        .downcast_ref::<ImplicitVariableDefinition>()
        .unwrap();
    assert_eq!(definition.name, "x");
    assert_eq!(integer_value(&definition.value), 42);
    assert_eq!(definition.value.get_location(), Location::new(1, 6));
}

#[test]
fn test_parse_definitions_with_semicolons() {
    let (program, errors) = parse("a := 1; b := 2;\n\n;c := 3\n");
    check_parser_errors(&errors);

    let names: Vec<&str> = program
        .iter()
        .map(|s| s.downcast_ref::<ImplicitVariableDefinition>().unwrap().name.as_str())
        .collect();
    assert_eq!(names, vec!["a", "b", "c"]);
}

#[test]
fn test_parse_function_body() {
    let source = "fn main() {\n    x := 1\n    {\n        y := 2;\n    }\n}\n";
    let (program, errors) = parse(source);
    check_parser_errors(&errors);

    let function = program.statements[0].downcast_ref::<Function>().unwrap();
    assert_eq!(function.body.statements.len(), 2);
    assert_eq!(
        function.body.statements[1].get_stmt_type(),
        StmtType::Block
    );

    let inner = function.body.statements[1].downcast_ref::<Block>().unwrap();
    assert_eq!(inner.get_location(), Location::new(3, 5));
    assert_eq!(inner.statements.len(), 1);

    assert_eq!(
        program.to_string(),
        "fn main() {\n    x := 1\n    {\n        y := 2\n    }\n}\n"
    );
}

#[test]
fn test_parse_multiple_functions() {
    let (program, errors) = parse("fn a() {}\nfn b(x int) {\n    y := 3\n}\n");
    check_parser_errors(&errors);

    assert_eq!(program.len(), 2);
    let second = program.statements[1].downcast_ref::<Function>().unwrap();
    assert_eq!(second.name, "b");
    assert_eq!(second.get_location(), Location::new(2, 1));
}

#[test]
fn test_parse_empty_program() {
    let (program, errors) = parse("\n\n");

    assert!(errors.is_empty());
    assert!(program.is_empty());
}

#[test]
fn test_missing_function_name() {
    let (program, errors) = parse("fn (a int) {}");

    assert!(!errors.is_empty());
    assert_eq!(
        errors[0],
        Error::new(
            ErrorImpl::UnexpectedToken {
                expected: TokenKind::Identifier,
                found: TokenKind::LParen,
            },
            Location::new(1, 4),
        )
    );
    assert!(program.iter().all(|s| s.downcast_ref::<Function>().is_none()));

    // No resynchronisation: the rest of the header is reparsed as statements
    assert_eq!(errors.len(), 5);
    assert_eq!(program.len(), 1);
    assert_eq!(program.statements[0].get_stmt_type(), StmtType::Block);
}

#[test]
fn test_integer_overflow() {
    let (program, errors) = parse("x := 9223372036854775808\n");

    assert!(program.is_empty());
    assert_eq!(errors[0].get_error_name(), "IntegerParse");
    assert!(errors[0].to_string().contains("\"9223372036854775808\""));
    assert_eq!(*errors[0].get_location(), Location::new(1, 6));
}

#[test]
fn test_largest_integer() {
    let (program, errors) = parse("x := 9223372036854775807\n");
    check_parser_errors(&errors);

    let definition = program.statements[0]
        .downcast_ref::<ImplicitVariableDefinition>()
        .unwrap();
    assert_eq!(integer_value(&definition.value), i64::MAX);
}

#[test]
fn test_missing_terminator() {
    let (program, errors) = parse("x := 1");

    assert!(program.is_empty());
    assert_eq!(
        errors[0].get_kind(),
        &ErrorImpl::MissingTerminator {
            found: TokenKind::EndOfInput
        }
    );
}

#[test]
fn test_invalid_statement_start() {
    let (program, errors) = parse("@\n42\n");

    assert!(program.is_empty());
    assert_eq!(errors.len(), 2);
    assert_eq!(
        errors[0].get_kind(),
        &ErrorImpl::InvalidStatement {
            kind: TokenKind::Illegal,
            literal: String::from("@")
        }
    );
    assert_eq!(*errors[1].get_location(), Location::new(2, 1));
}

#[test]
fn test_failed_statement_fails_block() {
    let (program, errors) = parse("fn main() {\n    x := \n}\n");

    assert!(program.is_empty());
    assert_eq!(
        errors[0].get_kind(),
        &ErrorImpl::NoPrefixHandler {
            kind: TokenKind::NewLine
        }
    );
    assert_eq!(errors.len(), 2);
}

#[test]
fn test_unclosed_block() {
    let (program, errors) = parse("fn main() {\n    x := 1\n");

    assert!(program.is_empty());
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0].get_kind(),
        &ErrorImpl::UnexpectedToken {
            expected: TokenKind::RBrace,
            found: TokenKind::EndOfInput
        }
    );
}

#[test]
fn test_missing_argument_type() {
    let (program, errors) = parse("fn f(a) {}\n");

    assert!(program.iter().all(|s| s.get_stmt_type() != StmtType::Function));
    assert_eq!(
        errors[0].get_kind(),
        &ErrorImpl::UnexpectedToken {
            expected: TokenKind::Identifier,
            found: TokenKind::RParen
        }
    );
}

#[test]
fn test_valid_statement_after_error() {
    let (program, errors) = parse("fn f(a) {}\nfn g() {}\n");

    assert!(!errors.is_empty());
    assert!(program
        .iter()
        .any(|s| s.downcast_ref::<Function>().is_some_and(|f| f.name == "g")));
}

#[test]
fn test_parser_primes_two_tokens() {
    let parser = Parser::new(Lexer::new("fn main"));

    assert_eq!(parser.current_token_kind(), TokenKind::Fn);
    assert_eq!(parser.peek_token_kind(), TokenKind::Identifier);
    assert_eq!(parser.peek_token().literal, "main");
    assert!(parser.errors().is_empty());
}

#[test]
fn test_expect_does_not_advance_on_mismatch() {
    let mut parser = Parser::new(Lexer::new("fn main"));

    assert!(parser.expect(TokenKind::LParen).is_err());
    assert_eq!(parser.current_token_kind(), TokenKind::Fn);

    assert_eq!(parser.expect(TokenKind::Identifier).unwrap().literal, "main");
    assert_eq!(parser.peek_token_kind(), TokenKind::EndOfInput);
}

/// Keeps the larger of two integers; stands in for a real binary operator.
fn parse_max_expr(
    parser: &mut Parser,
    left: ExprWrapper,
    bp: BindingPower,
) -> Result<ExprWrapper, Error> {
    parser.advance();
    let right = parse_expr(parser, bp)?;

    if integer_value(&left) >= integer_value(&right) {
        Ok(left)
    } else {
        Ok(right)
    }
}

#[test]
fn test_registered_infix_handler() {
    let mut parser = Parser::new(Lexer::new("x := 1, 5, 3\n"));
    parser.led(TokenKind::Comma, BindingPower::Comma, parse_max_expr);

    let program = parser.parse_program();
    check_parser_errors(parser.errors());

    let definition = program.statements[0]
        .downcast_ref::<ImplicitVariableDefinition>()
        .unwrap();
    assert_eq!(integer_value(&definition.value), 5);
    assert_eq!(definition.value.token_literal(), "5");
    assert_eq!(parser.get_bp_lookup().get(&TokenKind::Comma), Some(&BindingPower::Comma));
}

#[test]
fn test_unregistered_infix_stops_expression() {
    let (program, errors) = parse("x := 1, 5\n");

    assert!(program.is_empty());
    assert_eq!(
        errors[0].get_kind(),
        &ErrorImpl::MissingTerminator {
            found: TokenKind::Comma
        }
    );
}

#[test]
fn test_parse_expr_stops_at_terminator() {
    let mut parser = Parser::new(Lexer::new("7; 8"));
    parser.led(TokenKind::Semicolon, BindingPower::Call, parse_max_expr);

    let expr = parse_expr(&mut parser, BindingPower::Lowest).unwrap();

    assert_eq!(integer_value(&expr), 7);
    assert_eq!(parser.peek_token_kind(), TokenKind::Semicolon);
}

#[test]
fn test_parse_letter_outside_identifier_pattern_terminates() {
    let (program, errors) = parse("\u{c5c}\n");

    assert!(program.is_empty());
    assert!(!errors.is_empty());
    assert_eq!(*errors[0].get_location(), Location::new(1, 1));
}

#[test]
fn test_binding_power_ordering() {
    assert_eq!(BindingPower::default(), BindingPower::Lowest);
    assert!(BindingPower::Lowest < BindingPower::Comma);
    assert!(BindingPower::Comma < BindingPower::Call);
}
