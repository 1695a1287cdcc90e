//! Tests for resolving character offsets to line/column pairs and for
//! line splitting, including the `\r\n`, `\n`, and `\r` terminator mix.

use crate::Source;
use crate::SourceLocation;
use crate::get_location;
use crate::source_location::split_lines;
use proptest::prelude::*;

fn loc(body: &str, position: usize) -> SourceLocation {
    get_location(&Source::new(body), position)
}

#[test]
fn resolves_offsets_on_a_single_line() {
    assert_eq!(loc("", 0), SourceLocation { line: 1, column: 1 });
    assert_eq!(loc("foo", 0), SourceLocation { line: 1, column: 1 });
    assert_eq!(loc("foo", 2), SourceLocation { line: 1, column: 3 });
    assert_eq!(loc("foo", 3), SourceLocation { line: 1, column: 4 });
}

#[test]
fn resolves_offsets_across_lines() {
    assert_eq!(loc("a\nb", 2), SourceLocation { line: 2, column: 1 });
    assert_eq!(loc("a\rb", 2), SourceLocation { line: 2, column: 1 });
    assert_eq!(loc("a\r\nb", 3), SourceLocation { line: 2, column: 1 });
    assert_eq!(loc("a\n\rb", 3), SourceLocation { line: 3, column: 1 });
    assert_eq!(
        loc("one\ntwo\nthree", 9),
        SourceLocation { line: 3, column: 2 }
    );
}

/// An offset pointing at a terminator resolves to the column just past
/// the line's content.
#[test]
fn resolves_offsets_at_terminators() {
    assert_eq!(loc("a\nb", 1), SourceLocation { line: 1, column: 2 });
    assert_eq!(loc("ab\r\ncd", 2), SourceLocation { line: 1, column: 3 });
}

#[test]
fn splits_lines_on_each_terminator_style() {
    assert_eq!(split_lines(""), vec![""]);
    assert_eq!(split_lines("one line"), vec!["one line"]);
    assert_eq!(split_lines("a\nb"), vec!["a", "b"]);
    assert_eq!(split_lines("a\rb"), vec!["a", "b"]);
    assert_eq!(split_lines("a\r\nb"), vec!["a", "b"]);
    assert_eq!(split_lines("a\n\rb"), vec!["a", "", "b"]);
    assert_eq!(split_lines("a\n"), vec!["a", ""]);
    assert_eq!(split_lines("\n\n"), vec!["", "", ""]);
    assert_eq!(split_lines("a\r\n\r\nb"), vec!["a", "", "b"]);
}

proptest! {
    /// Resolution is a pure function of the body and offset, and the
    /// resolved line always indexes a real line of the body.
    #[test]
    fn location_is_pure_and_within_bounds(body in "[a-z \r\n\u{FEFF}\u{203B}]{0,60}", offset_seed in 0usize..100) {
        let source = Source::new(body.as_str());
        let char_count = body.chars().count();
        let position = offset_seed % (char_count + 1);
        let first = get_location(&source, position);
        let second = get_location(&source, position);
        prop_assert_eq!(first, second);
        prop_assert!(first.line >= 1);
        prop_assert!(first.line <= split_lines(&body).len());
    }
}
