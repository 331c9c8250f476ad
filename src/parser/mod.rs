//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that pulls tokens from the lexer and
//! builds the AST. Statements are parsed by recursive descent and
//! expressions by a Pratt parser, both dispatched through lookup tables
//! keyed by token kind:
//!
//! - Statement parsing (functions, blocks, implicit variable definitions)
//! - Expression parsing (integer literals, plus any registered operators)
//! - Error collection: a failed statement is dropped and parsing carries on
//!
//! The parser uses NUD (null denotation) and LED (left denotation) functions
//! for expression parsing with binding power for precedence handling.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;

#[cfg(test)]
mod tests;
