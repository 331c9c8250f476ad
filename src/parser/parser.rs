//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the program entry points.
//! The parser keeps two tokens from the lexer, `current` and `peek`, and
//! maintains lookup tables for:
//! - Statement handlers
//! - NUD (null denotation) handlers for prefix expressions
//! - LED (left denotation) handlers for infix expressions
//! - Binding powers for operator precedence

use std::collections::HashMap;

use crate::{
    ast::statements::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    Location,
};

use super::{
    lookups::{
        create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup, NUDHandler, NUDLookup,
        StmtHandler, StmtLookup,
    },
    stmt::{parse_stmt, skip_empty_stmts},
};

/// The main parser structure that maintains parsing state.
///
/// Tokens are pulled from the lexer one at a time; every error that stops a
/// top-level statement is kept in `errors` in the order it was found.
pub struct Parser {
    /// Source of tokens
    lexer: Lexer,
    /// The token being parsed
    current: Token,
    /// One token of lookahead
    peek: Token,
    /// Number of times the cursor has moved
    consumed: usize,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup,
    /// Lookup table for expression binding powers (precedence)
    binding_power_lookup: BPLookup,
    /// Errors collected while parsing
    errors: Vec<Error>,
}

impl Parser {
    /// Creates a new Parser with the built-in grammar registered.
    ///
    /// Reads two tokens so that both `current` and `peek` are populated
    /// before the first parse call.
    pub fn new(mut lexer: Lexer) -> Self {
        let current = lexer.next_token();
        let peek = lexer.next_token();

        let mut parser = Parser {
            lexer,
            current,
            peek,
            consumed: 0,
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
            errors: vec![],
        };
        create_token_lookups(&mut parser);

        parser
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    /// Returns the lookahead token.
    pub fn peek_token(&self) -> &Token {
        &self.peek
    }

    /// Returns the kind of the lookahead token.
    pub fn peek_token_kind(&self) -> TokenKind {
        self.peek.kind
    }

    pub fn current_location(&self) -> Location {
        self.current.location
    }

    /// Shifts `peek` into `current` and pulls a new lookahead token.
    pub fn advance(&mut self) {
        let next = self.lexer.next_token();
        self.current = std::mem::replace(&mut self.peek, next);
        self.consumed += 1;
    }

    /// Advances onto the lookahead token if it is of the expected kind.
    ///
    /// # Returns
    ///
    /// Returns Ok with the new current token, otherwise an UnexpectedToken
    /// error located at the lookahead token. The cursor does not move on
    /// failure.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<&Token, Error> {
        if self.peek.kind != expected_kind {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    expected: expected_kind,
                    found: self.peek.kind,
                },
                self.peek.location,
            ));
        }

        self.advance();
        Ok(&self.current)
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        self.current.kind != TokenKind::EndOfInput
    }

    /// Errors collected so far, in the order they were found.
    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    /// Returns a reference to the binding power lookup table.
    pub fn get_bp_lookup(&self) -> &BPLookup {
        &self.binding_power_lookup
    }

    /// Binding power of the lookahead token; unregistered kinds bind lowest.
    pub fn peek_binding_power(&self) -> BindingPower {
        self.binding_power_lookup
            .get(&self.peek.kind)
            .copied()
            .unwrap_or_default()
    }

    /// Registers a left denotation (infix) handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `binding_power` - The precedence/binding power for this operator
    /// * `led_fn` - The handler function for this infix operator
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Parses top-level statements until the end of input.
    ///
    /// A failed statement is recorded in `errors` and left out of the
    /// program. If it failed without consuming anything, one token is
    /// skipped so the loop always makes progress.
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::default();

        loop {
            skip_empty_stmts(self);
            if !self.has_tokens() {
                break;
            }

            let consumed = self.consumed;
            match parse_stmt(self) {
                Ok(stmt) => program.statements.push(stmt),
                Err(error) => {
                    self.errors.push(error);
                    if self.consumed == consumed {
                        self.advance();
                    }
                }
            }
        }

        program
    }
}

/// Parses a whole source text.
///
/// # Returns
///
/// A tuple containing:
/// - The Program built from every statement that parsed
/// - Every error found, in discovery order
pub fn parse(source: &str) -> (Program, Vec<Error>) {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();

    (program, parser.errors)
}
