use lazy_static::lazy_static;
use regex::Regex;

use crate::{Location, MK_TOKEN};

use super::tokens::{lookup_identifier, Token, TokenKind};

lazy_static! {
    static ref IDENTIFIER_PATTERN: Regex = Regex::new(r"^[\p{Alphabetic}_][\p{Alphabetic}0-9_]*").unwrap();
    static ref INTEGER_PATTERN: Regex = Regex::new(r"^[0-9]+").unwrap();
}

const LINE_TERMINATOR: char = '\n';

/// On-demand tokenizer over a single in-memory source buffer.
///
/// `ch` is the character at byte offset `pos`, or `None` once the input is
/// exhausted. `line`/`column` always describe `ch`.
#[derive(Debug, Clone)]
pub struct Lexer {
    source: String,
    ch: Option<char>,
    pos: usize,
    read_pos: usize,
    line: u32,
    column: u32,
}

impl Lexer {
    pub fn new(source: impl Into<String>) -> Lexer {
        let mut lexer = Lexer {
            source: source.into(),
            ch: None,
            pos: 0,
            read_pos: 0,
            line: 1,
            column: 1,
        };

        lexer.read_char();

        lexer
    }

    fn read_char(&mut self) {
        self.pos = self.read_pos;
        self.ch = self.source[self.read_pos..].chars().next();
        self.read_pos += self.ch.map_or(0, char::len_utf8);
    }

    /// Moves past the current character, keeping the line/column in step.
    fn advance(&mut self) {
        match self.ch {
            None => return,
            Some(LINE_TERMINATOR) => {
                self.line += 1;
                self.column = 1;
            }
            Some(_) => self.column += 1,
        }

        self.read_char();
    }

    fn location(&self) -> Location {
        Location::new(self.line, self.column)
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.ch {
            if ch == LINE_TERMINATOR || !ch.is_whitespace() {
                break;
            }
            self.advance();
        }
    }

    /// Consumes the run matched by `pattern` at the current offset.
    fn read_run(&mut self, pattern: &Regex) -> String {
        let matched = pattern
            .find(&self.source[self.pos..])
            .map(|m| m.as_str().to_string())
            .unwrap_or_default();

        for _ in matched.chars() {
            self.advance();
        }

        matched
    }

    fn read_single(&mut self, kind: TokenKind, ch: char, location: Location) -> Token {
        self.advance();
        MK_TOKEN!(kind, ch.to_string(), location)
    }

    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let location = self.location();

        let Some(ch) = self.ch else {
            return MK_TOKEN!(TokenKind::EndOfInput, String::new(), location);
        };

        if ch == LINE_TERMINATOR {
            return self.read_single(TokenKind::NewLine, ch, location);
        }

        if let Some(kind) = TokenKind::from_punctuation(ch) {
            return self.read_single(kind, ch, location);
        }

        // The pattern decides; a start char it rejects falls through to Illegal
        if is_identifier_start(ch) {
            let literal = self.read_run(&IDENTIFIER_PATTERN);
            if !literal.is_empty() {
                return MK_TOKEN!(lookup_identifier(&literal), literal, location);
            }
        }

        if ch.is_ascii_digit() {
            let literal = self.read_run(&INTEGER_PATTERN);
            return MK_TOKEN!(TokenKind::Integer, literal, location);
        }

        self.read_single(TokenKind::Illegal, ch, location)
    }
}

fn is_identifier_start(ch: char) -> bool {
    ch.is_alphabetic() || ch == '_'
}

/// Lexes the whole of `source`, ending with (and including) the first
/// `EndOfInput` token.
pub fn tokenize(source: impl Into<String>) -> Vec<Token> {
    let mut lexer = Lexer::new(source);
    let mut tokens = vec![];

    loop {
        let token = lexer.next_token();
        let done = token.kind == TokenKind::EndOfInput;
        tokens.push(token);

        if done {
            break;
        }
    }

    tokens
}
