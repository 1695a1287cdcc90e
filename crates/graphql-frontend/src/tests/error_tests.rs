//! Tests for error construction and projection: positional derivation
//! from nodes, field attribution via `located_error`, and the JSON
//! shape of formatted errors.

use crate::GraphQLError;
use crate::PathSegment;
use crate::Source;
use crate::ast::Definition;
use crate::ast::Node;
use crate::ast::Selection;
use crate::located_error;
use crate::parse;

fn bare_error(message: &str) -> GraphQLError {
    GraphQLError::new(message, &[], None, Vec::new(), Vec::new(), None)
}

/// Parses `{\n  field\n}` and returns the error built from its field
/// node.
fn error_at_field(message: &str) -> GraphQLError {
    let document = parse(&Source::new("{\n  field\n}")).unwrap();
    let Definition::Operation(operation) = &document.definitions[0] else {
        panic!("expected an operation definition");
    };
    let Selection::Field(field) = &operation.selection_set.selections[0] else {
        panic!("expected a field selection");
    };
    GraphQLError::new(message, &[field as &dyn Node], None, Vec::new(), Vec::new(), None)
}

// =============================================================================
// Construction
// =============================================================================

#[test]
fn is_displayed_as_its_message() {
    let error = bare_error("msg");
    assert_eq!(error.to_string(), "msg");
    assert!(error.locations().is_empty());
    assert!(error.positions().is_empty());
    assert!(error.path().is_empty());
    assert!(error.source().is_none());
    assert!(error.original_error().is_none());
}

/// Positions given explicitly resolve to locations against the given
/// source.
#[test]
fn converts_positions_to_locations() {
    let source = Source::new("{\n  field\n}");
    let error = GraphQLError::new("msg", &[], Some(source), vec![4], Vec::new(), None);
    assert_eq!(error.positions(), &[4]);
    assert_eq!(error.locations().len(), 1);
    assert_eq!(error.locations()[0].line, 2);
    assert_eq!(error.locations()[0].column, 3);
}

/// Nodes contribute their location start offsets and their source when
/// neither is given explicitly.
#[test]
fn derives_positions_from_nodes() {
    let error = error_at_field("msg");
    assert_eq!(error.positions(), &[4]);
    assert_eq!(error.locations()[0].line, 2);
    assert_eq!(error.locations()[0].column, 3);
    assert_eq!(error.source().unwrap().body(), "{\n  field\n}");
    assert_eq!(error.nodes().len(), 1);
    assert_eq!(error.nodes()[0].start, 4);
}

#[test]
fn preserves_a_wrapped_error() {
    let cause = bare_error("root cause");
    let error = GraphQLError::new(
        "outer",
        &[],
        None,
        Vec::new(),
        Vec::new(),
        Some(cause),
    );
    assert_eq!(error.original_error().unwrap().message(), "root cause");
}

// =============================================================================
// located_error
// =============================================================================

#[test]
fn attributes_an_error_to_a_field() {
    let cause = bare_error("boom");
    let path = vec![
        PathSegment::from("friends"),
        PathSegment::from(0),
        PathSegment::from("name"),
    ];
    let located = located_error(Some(cause), &[], path.clone());
    assert_eq!(located.message(), "boom");
    assert_eq!(located.path(), &path[..]);
    assert_eq!(located.original_error().unwrap().message(), "boom");
}

/// The first attribution wins: an error that already carries a path is
/// passed through untouched.
#[test]
fn does_not_reattribute_a_located_error() {
    let first_path = vec![PathSegment::from("a")];
    let already = located_error(Some(bare_error("boom")), &[], first_path.clone());
    let again = located_error(Some(already), &[], vec![PathSegment::from("b")]);
    assert_eq!(again.path(), &first_path[..]);
}

/// The underlying error's positional data survives attribution.
#[test]
fn keeps_positions_through_attribution() {
    let cause = error_at_field("boom");
    let located = located_error(Some(cause), &[], vec![PathSegment::from("field")]);
    assert_eq!(located.positions(), &[4]);
    assert_eq!(located.locations()[0].line, 2);
    assert_eq!(located.nodes().len(), 1);
}

#[test]
fn substitutes_a_placeholder_without_a_cause() {
    let located = located_error(None, &[], vec![PathSegment::from("field")]);
    assert_eq!(located.message(), "An unknown error occurred.");
    assert_eq!(located.path(), &[PathSegment::from("field")]);
    assert!(located.original_error().is_none());
}

// =============================================================================
// Formatting
// =============================================================================

#[test]
fn formats_a_bare_message() {
    let formatted = bare_error("msg").formatted();
    assert_eq!(
        serde_json::to_string(&formatted).unwrap(),
        r#"{"message":"msg"}"#
    );
}

#[test]
fn formats_locations() {
    let formatted = error_at_field("msg").formatted();
    assert_eq!(
        serde_json::to_string(&formatted).unwrap(),
        r#"{"message":"msg","locations":[{"line":2,"column":3}]}"#
    );
}

/// Path segments serialize as bare strings and numbers.
#[test]
fn formats_paths_untagged() {
    let error = GraphQLError::new(
        "msg",
        &[],
        None,
        Vec::new(),
        vec![
            PathSegment::from("path"),
            PathSegment::from(3),
            PathSegment::from("to"),
            PathSegment::from("field"),
        ],
        None,
    );
    assert_eq!(
        serde_json::to_string(&error.formatted()).unwrap(),
        r#"{"message":"msg","path":["path",3,"to","field"]}"#
    );
}
