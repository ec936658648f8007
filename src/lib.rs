#![allow(clippy::module_inception)]

use std::fmt::Display;

use crate::errors::errors::{Error, ErrorTip};

pub mod errors;
pub mod lexer;
pub mod macros;

extern crate regex;

/// A point in the source text, 1-based. As an end position it points just
/// past the last consumed character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub row: u32,
    pub col: u32,
}

impl Position {
    pub fn new(row: u32, col: u32) -> Self {
        Position { row, col }
    }

    pub fn origin() -> Self {
        Position { row: 1, col: 1 }
    }

    /// Moves past `c`. A newline starts the next row.
    pub fn advance(&mut self, c: char) {
        if c == '\n' {
            self.row += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.row, self.col)
    }
}

/// Returns the text of the 1-based `row`, without its line terminator.
pub fn get_line_at_row(source: &str, row: u32) -> Option<&str> {
    source
        .split('\n')
        .nth(row.checked_sub(1)? as usize)
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
}


/// Renders a diagnostic with the offending line and a caret under its column.
pub fn format_error(error: &Error, file: &str, source: &str) -> String {
    /*
        Error: UnrecognisedCharacter
        -> adder.circuit:2:10
          |
        2 | in a # b;
          | -----^
    */

    let position = error.get_position();
    let row = position.row.to_string();
    let padding = row.len() + 2;

    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!("Error: {} ({})\n", error.get_error_name(), error.get_tip()));
    }
    out.push_str(&format!("-> {}:{}\n", file, position));
    out.push_str(&format!("{:>padding$}\n", "|"));

    let line_text = get_line_at_row(source, position.row).unwrap_or_default();
    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    out.push_str(&format!("{} | {}\n", row, line_text_removed.trim_end()));

    let arrows = (position.col as usize).saturating_sub(removed_whitespace).max(1);
    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    out
}

pub fn display_error(error: &Error, file: &str, source: &str) {
    print!("{}", format_error(error, file, source));
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += 1;
        } else {
            break;
        }
    }

    (&string[start..], start)
}
