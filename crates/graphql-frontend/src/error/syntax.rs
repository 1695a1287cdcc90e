use super::GraphQLError;
use crate::source::Source;
use crate::source_location::SourceLocation;
use crate::source_location::get_location;
use crate::source_location::split_lines;
use std::fmt;

/// Builds the error for a syntax problem at `position` (a character
/// offset) in `source`.
///
/// The message embeds the resolved line/column pair and a rendered
/// excerpt of the offending region, so it is self-contained when
/// displayed without any of the error's structured fields.
pub fn syntax_error(
    source: &Source,
    position: usize,
    description: impl fmt::Display,
) -> GraphQLError {
    let location = get_location(source, position);
    let message = format!(
        "Syntax Error GraphQL request ({}:{}) {}\n\n{}",
        location.line,
        location.column,
        description,
        highlight_source_at_location(source, &location),
    );
    GraphQLError::new(
        message,
        &[],
        Some(source.clone()),
        vec![position],
        Vec::new(),
        None,
    )
}

/// Renders the line containing `location` with a caret under the column,
/// framed by the preceding and following lines when they exist.
///
/// Line numbers are right-aligned in a gutter wide enough for the widest
/// number that could appear, which is always the following line's.
fn highlight_source_at_location(source: &Source, location: &SourceLocation) -> String {
    let line = location.line;
    let pad_len = (line + 1).to_string().len();
    let lines = split_lines(source.body());
    let mut highlight = String::new();
    if line >= 2 {
        highlight.push_str(&format!("{:>pad_len$}: {}\n", line - 1, lines[line - 2]));
    }
    highlight.push_str(&format!("{:>pad_len$}: {}\n", line, lines[line - 1]));
    highlight.push_str(&format!("{}^\n", " ".repeat(location.column + pad_len + 1)));
    if line < lines.len() {
        highlight.push_str(&format!("{:>pad_len$}: {}\n", line + 1, lines[line]));
    }
    highlight
}
