//! Lexical analysis module for the front end.
//!
//! This module contains the lexer (tokenizer) that converts source text
//! into tokens on demand for the parser. It handles:
//!
//! - Single-character punctuation and significant new lines
//! - Recognition of keywords, identifiers and integer literals
//! - Line/column tracking for error reporting
//! - Unrecognised characters, which become `Illegal` tokens

pub mod lexer;
pub mod tokens;
