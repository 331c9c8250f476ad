use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::TokenKind, Location};

#[derive(Error, Debug, Clone, PartialEq)]
#[error("{internal_error} at {location}")]
pub struct Error {
    internal_error: ErrorImpl,
    location: Location,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, location: Location) -> Self {
        Error {
            internal_error: error_impl,
            location,
        }
    }

    pub fn get_location(&self) -> &Location {
        &self.location
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::InvalidStatement { .. } => "InvalidStatement",
            ErrorImpl::NoPrefixHandler { .. } => "NoPrefixHandler",
            ErrorImpl::IntegerParse { .. } => "IntegerParse",
            ErrorImpl::MissingTerminator { .. } => "MissingTerminator",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { expected, found } => ErrorTip::Suggestion(format!(
                "expected `{}` here, found `{}`",
                expected, found
            )),
            ErrorImpl::InvalidStatement {
                kind: TokenKind::Illegal,
                ..
            } => ErrorTip::None,
            ErrorImpl::InvalidStatement { literal, .. } => ErrorTip::Suggestion(format!(
                "`{}` cannot start a statement, expected `fn`, `{{` or a name",
                literal.escape_default()
            )),
            ErrorImpl::NoPrefixHandler { .. } => ErrorTip::None,
            ErrorImpl::IntegerParse { literal } => ErrorTip::Suggestion(format!(
                "Invalid integer: `{}`, is it above the 64-bit integer limit?",
                literal
            )),
            ErrorImpl::MissingTerminator { .. } => ErrorTip::Suggestion(String::from(
                "end the definition with a new line or `;`",
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("expected token {expected}, found {found}")]
    UnexpectedToken { expected: TokenKind, found: TokenKind },
    #[error("invalid token {kind} found with literal {literal:?}")]
    InvalidStatement { kind: TokenKind, literal: String },
    #[error("no prefix function for token {kind}")]
    NoPrefixHandler { kind: TokenKind },
    #[error("could not parse {literal:?} as integer")]
    IntegerParse { literal: String },
    #[error("variable definition expected new line or semicolon, found {found}")]
    MissingTerminator { found: TokenKind },
}
