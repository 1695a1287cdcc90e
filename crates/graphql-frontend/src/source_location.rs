use crate::Source;
use serde::Serialize;

/// A line/column pair identifying a position within a [`Source`].
///
/// Both fields are 1-indexed: the first character of a document is at
/// `{ line: 1, column: 1 }`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

/// Takes a `Source` and a character offset, and returns the corresponding
/// 1-indexed line and column as a [`SourceLocation`].
///
/// This is a pure projection recomputed on demand: it scans the line
/// terminators (`\r\n`, `\n`, or `\r`) that precede `position` and derives
/// the column from the end of the last one. Nothing is cached on the
/// `Source`.
pub fn get_location(source: &Source, position: usize) -> SourceLocation {
    let mut line = 1;
    let mut column = position + 1;

    let mut chars = source.body().chars().enumerate().peekable();
    while let Some((idx, ch)) = chars.next() {
        if idx >= position {
            break;
        }
        match ch {
            '\n' => {
                line += 1;
                column = position - idx;
            }
            '\r' => {
                // \r\n counts as a single terminator spanning two offsets.
                let end = if chars.peek().map(|&(_, c)| c) == Some('\n') {
                    chars.next();
                    idx + 2
                } else {
                    idx + 1
                };
                line += 1;
                column = (position + 1).saturating_sub(end);
            }
            _ => {}
        }
    }

    SourceLocation { line, column }
}

/// Splits a source body into its lines, treating `\r\n`, `\n`, and `\r` as
/// terminators. Terminators are not included in the returned slices; a body
/// of N terminators yields N+1 lines.
pub(crate) fn split_lines(body: &str) -> Vec<&str> {
    let bytes = body.as_bytes();
    let mut lines = Vec::new();
    let mut line_start = 0;

    let mut iter = memchr::memchr2_iter(b'\n', b'\r', bytes).peekable();
    while let Some(idx) = iter.next() {
        let term_len = if bytes[idx] == b'\r' && bytes.get(idx + 1) == Some(&b'\n') {
            // Consume the \n half of the pair from the iterator as well.
            iter.next();
            2
        } else {
            1
        };
        lines.push(&body[line_start..idx]);
        line_start = idx + term_len;
    }
    lines.push(&body[line_start..]);

    lines
}
