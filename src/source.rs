//! Line source for uptime input files.
//!
//! Reads the input into trimmed, non-blank lines. Blank and whitespace-only
//! lines are dropped wherever they occur; the physical line number is kept
//! for diagnostics.
//!
//! Only ASCII is treated as whitespace. A line ends at `\n`, `\r\n` or a bare
//! `\r`; trimming strips ASCII control characters and spaces; tokens split on
//! space, tab, line feed, vertical tab, form feed and carriage return. A
//! no-break space (U+00A0) is therefore part of a token.

use crate::error::{Result, UptimeError};
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;
use tracing::debug;

/// One trimmed, non-blank input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    /// 1-based physical line number in the input
    pub number: usize,
    pub text: String,
}

impl SourceLine {
    pub fn new(number: usize, text: impl Into<String>) -> Self {
        Self {
            number,
            text: text.into(),
        }
    }

    /// Whitespace-separated tokens of the line
    pub fn tokens(&self) -> Vec<&str> {
        self.text
            .split(is_token_separator)
            .filter(|token| !token.is_empty())
            .collect()
    }
}

fn is_token_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

/// Space and every ASCII control character below it
fn is_trimmable(c: char) -> bool {
    c <= ' '
}

/// Split on `\n`, `\r\n` and bare `\r`, without a trailing empty line
fn physical_lines(input: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = input;

    while !rest.is_empty() {
        match rest.find(['\n', '\r']) {
            Some(end) => {
                lines.push(&rest[..end]);
                let terminator = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[end + terminator..];
            }
            None => {
                lines.push(rest);
                break;
            }
        }
    }

    lines
}

/// Read the clean line sequence of a file
pub fn read_clean_lines(path: &Path) -> Result<Vec<SourceLine>> {
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => UptimeError::InputNotFound {
            path: path.to_path_buf(),
        },
        _ => UptimeError::Io(e),
    })?;

    let lines = clean_lines(BufReader::new(file))?;
    debug!(
        "Read {} non-blank lines from {}",
        lines.len(),
        path.display()
    );
    Ok(lines)
}

/// Collect trimmed, non-blank lines from any reader
///
/// Input that is not valid UTF-8 is an I/O error.
pub fn clean_lines<R: Read>(mut reader: R) -> Result<Vec<SourceLine>> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;
    Ok(clean_lines_from_str(&input))
}

/// Clean line sequence of an in-memory string
pub fn clean_lines_from_str(input: &str) -> Vec<SourceLine> {
    physical_lines(input)
        .into_iter()
        .enumerate()
        .filter_map(|(index, line)| {
            let trimmed = line.trim_matches(is_trimmable);
            (!trimmed.is_empty()).then(|| SourceLine::new(index + 1, trimmed))
        })
        .collect()
}
