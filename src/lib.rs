#![allow(clippy::module_inception)]

use std::sync::Arc;

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod evaluator;
pub mod generator;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod pipeline;
pub mod scope;
pub mod type_checker;

extern crate regex;

/// Byte offset into a source file, plus the file's name.
#[derive(Debug, Clone, PartialEq)]
pub struct Position(pub u32, pub Arc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Arc::new(String::from("<null>")))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    /// Span used for nodes built in code rather than parsed from text.
    pub fn null() -> Self {
        Span {
            start: Position::null(),
            end: Position::null(),
        }
    }
}

/// Finds the line containing byte `position` in `content`.
///
/// Returns the 1-based line number, the line text and the offset of `position` within it.
pub fn get_line_at_position(content: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;

    if pos > content.len() {
        return None;
    }

    let mut start = 0;
    let mut line_number = 1;

    for line in content.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            let line_pos = pos - start;
            return Some((line_number, line.to_string(), line_pos));
        }

        start = end;
        line_number += 1;
    }

    // Position at EOF points just past the last line
    content
        .lines()
        .last()
        .map(|last| (line_number.saturating_sub(1).max(1), last.to_string(), last.len()))
}


/// Renders a diagnostic with the offending source line underneath it.
pub fn display_error(error: &Error, source: &str) -> String {
    /*
        Error: TypeMismatch (message)
        -> style.icss
           |
        20 | width: #ff0000;
           | -------^
    */

    let mut out = String::new();
    let position = error.get_position();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!("Error: {} ({})\n", error.get_error_name(), error.get_tip()));
    }
    out.push_str(&format!("-> {}\n", position.1));

    let Some((line, line_text, line_pos)) = get_line_at_position(source, position.0) else {
        return out;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim()));

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));
    out
}

/// Closing line printed after a batch of diagnostics.
pub fn summarize_errors(errors: &[Error]) -> String {
    match errors.iter().find(|error| error.is_fatal()) {
        Some(fatal) => format!("Compilation aborted: {}", fatal.get_error_name()),
        None => format!("{} error(s) found", errors.len()),
    }
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
