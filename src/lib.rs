#![allow(clippy::module_inception)]

use std::fmt::Display;

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// Name used in diagnostics when the source did not come from a file.
pub const DEFAULT_FILE_NAME: &str = "shell";

/// A 1-based line/column pair. Columns count characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub line: u32,
    pub column: u32,
}

impl Location {
    pub fn new(line: u32, column: u32) -> Self {
        Location { line, column }
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

pub fn get_line_at_location(source: &str, location: Location) -> Option<&str> {
    if location.line == 0 {
        return None;
    }

    source
        .split('\n')
        .nth(location.line as usize - 1)
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
}


/// Renders a diagnostic for `error` against the source it was produced from.
///
/// ```text
/// Error: UnexpectedToken (expected `Identifier` here, found `LParen`)
/// -> main.th:1:4
///   |
/// 1 | fn (a int) {}
///   | ---^
/// ```
pub fn render_error(error: &Error, source: &str, file: Option<&str>) -> String {
    let location = *error.get_location();
    let line_text = get_line_at_location(source, location).unwrap_or("");

    let line_string = location.line.to_string();
    let padding = line_string.len() + 2;

    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!("Error: {} ({})\n", error.get_error_name(), error.get_tip()));
    }
    out.push_str(&format!("-> {}:{}\n", file.unwrap_or(DEFAULT_FILE_NAME), location));
    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = (location.column as usize)
        .saturating_sub(removed_whitespace)
        .max(1);

    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    out
}

pub fn display_error(error: &Error, source: &str, file: Option<&str>) {
    print!("{}", render_error(error, source, file));
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let mut start = 0;
    let mut removed = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += c.len_utf8();
            removed += 1;
        } else {
            break;
        }
    }

    (&string[start..], removed)
}
