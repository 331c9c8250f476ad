use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Location;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("fn", TokenKind::Fn);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Illegal,
    EndOfInput,

    NewLine,

    Semicolon, // ;
    Colon,     // :
    Equal,     // =
    Comma,     // ,
    LBrace,    // {
    RBrace,    // }
    LParen,    // (
    RParen,    // )

    Identifier,
    Integer,

    // Reserved
    Fn,
}

impl TokenKind {
    /// Single-character punctuation handled directly by the lexer's dispatch.
    pub fn from_punctuation(ch: char) -> Option<TokenKind> {
        match ch {
            ';' => Some(TokenKind::Semicolon),
            ':' => Some(TokenKind::Colon),
            '=' => Some(TokenKind::Equal),
            ',' => Some(TokenKind::Comma),
            '{' => Some(TokenKind::LBrace),
            '}' => Some(TokenKind::RBrace),
            '(' => Some(TokenKind::LParen),
            ')' => Some(TokenKind::RParen),
            _ => None,
        }
    }

    pub fn is_terminator(&self) -> bool {
        matches!(self, TokenKind::NewLine | TokenKind::Semicolon)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Returns the keyword kind for `literal`, or `Identifier` if it is not reserved.
pub fn lookup_identifier(literal: &str) -> TokenKind {
    RESERVED_LOOKUP
        .get(literal)
        .copied()
        .unwrap_or(TokenKind::Identifier)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Exact source text; empty for `EndOfInput`.
    pub literal: String,
    pub location: Location,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::Identifier | TokenKind::Integer | TokenKind::Illegal => {
                write!(f, "{}({:?})@{}", self.kind, self.literal, self.location)
            }
            _ => write!(f, "{}@{}", self.kind, self.location),
        }
    }
}
