//! Tests for the recursive descent parser: accepted documents, error
//! positions and messages, node locations, and the standalone value and
//! type entry points.

use crate::ParseOptions;
use crate::Source;
use crate::ast::*;
use crate::parse;
use crate::parse_type;
use crate::parse_value;
use crate::parse_with_options;
use crate::token::TokenKind;

fn parse_ok(body: &str) -> Document {
    parse(&Source::new(body)).unwrap_or_else(|error| panic!("{}", error.message()))
}

/// Parses `body` expecting failure, asserting on the `(L:C) description`
/// prefix of the message.
fn assert_parse_error(body: &str, line: usize, column: usize, description: &str) {
    let error = parse(&Source::new(body)).expect_err("expected a parse error");
    let expected = format!("Syntax Error GraphQL request ({line}:{column}) {description}");
    assert!(
        error.message().starts_with(&expected),
        "parsing {body:?}:\nwant prefix: {expected}\ngot: {}",
        error.message()
    );
}

// =============================================================================
// Operations and selections
// =============================================================================

#[test]
fn parses_shorthand_query() {
    let document = parse_ok("{ field }");
    assert_eq!(document.definitions.len(), 1);
    let Definition::Operation(operation) = &document.definitions[0] else {
        panic!("expected an operation definition");
    };
    assert_eq!(operation.operation, OperationType::Query);
    assert!(operation.name.is_none());
    let Selection::Field(field) = &operation.selection_set.selections[0] else {
        panic!("expected a field selection");
    };
    assert_eq!(field.name.value, "field");
    assert!(field.alias.is_none());
}

#[test]
fn parses_named_operations() {
    let document = parse_ok("query getIt { field }\nmutation setIt { field }\nsubscription watchIt { field }");
    let operations: Vec<(OperationType, &str)> = document
        .definitions
        .iter()
        .map(|definition| {
            let Definition::Operation(operation) = definition else {
                panic!("expected an operation definition");
            };
            (operation.operation, operation.name.as_ref().unwrap().value.as_str())
        })
        .collect();
    assert_eq!(
        operations,
        vec![
            (OperationType::Query, "getIt"),
            (OperationType::Mutation, "setIt"),
            (OperationType::Subscription, "watchIt"),
        ]
    );
}

#[test]
fn parses_aliases_arguments_and_directives() {
    let document = parse_ok("{ whoever123is: node(id: [123, 456]) @skip(if: false) { name } }");
    let Definition::Operation(operation) = &document.definitions[0] else {
        panic!("expected an operation definition");
    };
    let Selection::Field(field) = &operation.selection_set.selections[0] else {
        panic!("expected a field selection");
    };
    assert_eq!(field.alias.as_ref().unwrap().value, "whoever123is");
    assert_eq!(field.name.value, "node");
    assert_eq!(field.arguments.len(), 1);
    let Value::List(list) = &field.arguments[0].value else {
        panic!("expected a list argument value");
    };
    assert_eq!(list.values.len(), 2);
    assert_eq!(field.directives[0].name.value, "skip");
    assert!(field.selection_set.is_some());
}

#[test]
fn parses_variable_definitions_with_defaults() {
    let document = parse_ok("query q($id: ID!, $limit: Int = 10, $tags: [String] = [\"a\"]) { f }");
    let Definition::Operation(operation) = &document.definitions[0] else {
        panic!("expected an operation definition");
    };
    assert_eq!(operation.variable_definitions.len(), 3);
    let limit = &operation.variable_definitions[1];
    assert_eq!(limit.variable.name.value, "limit");
    assert!(matches!(limit.ty, Type::Named(_)));
    assert!(matches!(limit.default_value, Some(Value::Int(_))));
    let tags = &operation.variable_definitions[2];
    assert!(matches!(tags.default_value, Some(Value::List(_))));
}

#[test]
fn parses_fragments() {
    let document = parse_ok(
        "{ ...frag ... on User { name } ... @include(if: $cond) { id } }\nfragment frag on User { name }",
    );
    let Definition::Operation(operation) = &document.definitions[0] else {
        panic!("expected an operation definition");
    };
    let selections = &operation.selection_set.selections;
    assert!(matches!(&selections[0], Selection::FragmentSpread(spread) if spread.name.value == "frag"));
    let Selection::InlineFragment(on_user) = &selections[1] else {
        panic!("expected an inline fragment");
    };
    assert_eq!(on_user.type_condition.as_ref().unwrap().name.value, "User");
    let Selection::InlineFragment(bare) = &selections[2] else {
        panic!("expected an inline fragment");
    };
    assert!(bare.type_condition.is_none());
    assert_eq!(bare.directives[0].name.value, "include");
    let Definition::Fragment(fragment) = &document.definitions[1] else {
        panic!("expected a fragment definition");
    };
    assert_eq!(fragment.name.value, "frag");
    assert_eq!(fragment.type_condition.name.value, "User");
}

/// All value literal forms, nested, in one argument list.
#[test]
fn parses_value_literals() {
    let document = parse_ok(
        "{ f(a: 1, b: -1.5, c: \"str\", d: true, e: null, g: ENUM_VAL, h: [1, [2]], i: {j: {k: $var}}) }",
    );
    let Definition::Operation(operation) = &document.definitions[0] else {
        panic!("expected an operation definition");
    };
    let Selection::Field(field) = &operation.selection_set.selections[0] else {
        panic!("expected a field selection");
    };
    let values: Vec<&Value> = field.arguments.iter().map(|argument| &argument.value).collect();
    assert!(matches!(values[0], Value::Int(int) if int.value == "1"));
    assert!(matches!(values[1], Value::Float(float) if float.value == "-1.5"));
    assert!(matches!(values[2], Value::String(string) if string.value == "str"));
    assert!(matches!(values[3], Value::Boolean(boolean) if boolean.value));
    assert!(matches!(values[4], Value::Null(_)));
    assert!(matches!(values[5], Value::Enum(enum_value) if enum_value.value == "ENUM_VAL"));
    assert!(matches!(values[6], Value::List(_)));
    let Value::Object(object) = values[7] else {
        panic!("expected an object value");
    };
    assert_eq!(object.fields[0].name.value, "j");
}

// =============================================================================
// Parse errors
// =============================================================================

#[test]
fn provides_useful_errors() {
    assert_parse_error("{", 1, 2, "Expected Name, found <EOF>");
    assert_parse_error(
        "{ ...MissingOn }\nfragment MissingOn Type",
        2,
        20,
        "Expected \"on\", found Name \"Type\"",
    );
    assert_parse_error("{ field: {} }", 1, 10, "Expected Name, found {");
    assert_parse_error(
        "notanoperation Foo { field }",
        1,
        1,
        "Unexpected Name \"notanoperation\"",
    );
    assert_parse_error("...", 1, 1, "Unexpected ...");
}

#[test]
fn rejects_variables_in_constant_defaults() {
    assert_parse_error(
        "query Foo($x: String = $var) { field }",
        1,
        24,
        "Unexpected $",
    );
}

#[test]
fn rejects_on_as_fragment_name() {
    assert_parse_error("fragment on on on { on }", 1, 10, "Unexpected Name \"on\"");
    assert_parse_error("{ ...on }", 1, 9, "Expected Name, found }");
}

#[test]
fn rejects_unknown_operation_types() {
    assert_parse_error("notop Foo { field }", 1, 1, "Unexpected Name \"notop\"");
}

/// A lex error surfaces through parse with its original position.
#[test]
fn propagates_lex_errors() {
    assert_parse_error("{ field(arg: \"broken", 1, 21, "Unterminated string.");
}

#[test]
fn parse_errors_carry_source_and_positions() {
    let source = Source::new("{");
    let error = parse(&source).expect_err("expected a parse error");
    assert_eq!(error.positions(), &[1]);
    assert_eq!(error.locations().len(), 1);
    assert_eq!(error.locations()[0].line, 1);
    assert_eq!(error.locations()[0].column, 2);
    assert_eq!(error.source().unwrap().body(), "{");
}

// =============================================================================
// Locations
// =============================================================================

#[test]
fn annotates_nodes_with_locations() {
    let source = Source::new("{ field }");
    let document = parse(&source).unwrap();
    let document_loc = document.loc.as_ref().unwrap();
    assert_eq!((document_loc.start, document_loc.end), (0, 9));
    assert_eq!(document_loc.start_token.kind, TokenKind::Sof);
    assert_eq!(document_loc.end_token.kind, TokenKind::Eof);
    assert_eq!(document_loc.source, source);

    let Definition::Operation(operation) = &document.definitions[0] else {
        panic!("expected an operation definition");
    };
    let operation_loc = operation.loc.as_ref().unwrap();
    assert_eq!((operation_loc.start, operation_loc.end), (0, 9));
    let Selection::Field(field) = &operation.selection_set.selections[0] else {
        panic!("expected a field selection");
    };
    let field_loc = field.loc.as_ref().unwrap();
    assert_eq!((field_loc.start, field_loc.end), (2, 7));
}

#[test]
fn omits_locations_when_disabled() {
    let document = parse_with_options(
        &Source::new("{ field }"),
        ParseOptions { no_location: true },
    )
    .unwrap();
    assert!(document.loc.is_none());
    let Definition::Operation(operation) = &document.definitions[0] else {
        panic!("expected an operation definition");
    };
    assert!(operation.loc.is_none());
    assert!(operation.selection_set.loc.is_none());
}

// =============================================================================
// Standalone entry points
// =============================================================================

#[test]
fn parses_standalone_values() {
    let Value::List(list) = parse_value(&Source::new("[123 \"abc\"]")).unwrap() else {
        panic!("expected a list value");
    };
    assert!(matches!(&list.values[0], Value::Int(int) if int.value == "123"));
    assert!(matches!(&list.values[1], Value::String(string) if string.value == "abc"));
}

#[test]
fn rejects_trailing_input_after_standalone_value() {
    let error = parse_value(&Source::new("123 456")).expect_err("expected a parse error");
    assert!(
        error
            .message()
            .starts_with("Syntax Error GraphQL request (1:5) Expected <EOF>, found Int \"456\"")
    );
}

#[test]
fn parses_standalone_types() {
    assert!(matches!(
        parse_type(&Source::new("String")).unwrap(),
        Type::Named(_)
    ));
    let Type::List(list) = parse_type(&Source::new("[String]")).unwrap() else {
        panic!("expected a list type");
    };
    assert!(matches!(list.ty, Type::Named(_)));
    let Type::NonNull(non_null) = parse_type(&Source::new("[String!]!")).unwrap() else {
        panic!("expected a non-null type");
    };
    let Type::List(inner_list) = &non_null.ty else {
        panic!("expected a list type inside the non-null");
    };
    assert!(matches!(&inner_list.ty, Type::NonNull(_)));
}

// =============================================================================
// Type system definitions
// =============================================================================

#[test]
fn parses_schema_definition() {
    let document = parse_ok("schema { query: QueryRoot\n  mutation: MutationRoot }");
    let Definition::TypeSystem(TypeSystemDefinition::Schema(schema)) = &document.definitions[0]
    else {
        panic!("expected a schema definition");
    };
    assert_eq!(schema.operation_types.len(), 2);
    assert_eq!(schema.operation_types[0].operation, OperationType::Query);
    assert_eq!(schema.operation_types[0].ty.name.value, "QueryRoot");
    assert_eq!(schema.operation_types[1].operation, OperationType::Mutation);
}

#[test]
fn parses_object_type_definition() {
    let document = parse_ok(
        "type Foo implements Bar, Baz @onObject {\n  one: Type\n  two(argOne: InputType = {key: \"v\"}): [Type!]! @onField\n}",
    );
    let Definition::TypeSystem(TypeSystemDefinition::Type(TypeDefinition::Object(object))) =
        &document.definitions[0]
    else {
        panic!("expected an object type definition");
    };
    assert_eq!(object.name.value, "Foo");
    let interfaces: Vec<&str> = object
        .interfaces
        .iter()
        .map(|interface| interface.name.value.as_str())
        .collect();
    assert_eq!(interfaces, vec!["Bar", "Baz"]);
    assert_eq!(object.directives[0].name.value, "onObject");
    assert_eq!(object.fields.len(), 2);
    let two = &object.fields[1];
    assert_eq!(two.name.value, "two");
    assert_eq!(two.arguments.len(), 1);
    assert!(matches!(
        two.arguments[0].default_value,
        Some(Value::Object(_))
    ));
    assert!(matches!(two.ty, Type::NonNull(_)));
    assert_eq!(two.directives[0].name.value, "onField");
}

#[test]
fn parses_remaining_type_definitions() {
    let document = parse_ok(
        "scalar DateTime @onScalar\n\
         interface Named { name: String }\n\
         union Feed = Story | Article | Advert\n\
         enum Site @onEnum { DESKTOP MOBILE }\n\
         input InputType { key: String! answer: Int = 42 }\n\
         extend type Foo { seven: Type }\n\
         directive @skip(if: Boolean!) on FIELD | INLINE_FRAGMENT",
    );
    assert_eq!(document.definitions.len(), 7);
    let kinds: Vec<&Definition> = document.definitions.iter().collect();
    assert!(matches!(
        kinds[0],
        Definition::TypeSystem(TypeSystemDefinition::Type(TypeDefinition::Scalar(_)))
    ));
    assert!(matches!(
        kinds[1],
        Definition::TypeSystem(TypeSystemDefinition::Type(TypeDefinition::Interface(_)))
    ));
    let Definition::TypeSystem(TypeSystemDefinition::Type(TypeDefinition::Union(union))) = kinds[2]
    else {
        panic!("expected a union definition");
    };
    assert_eq!(union.types.len(), 3);
    let Definition::TypeSystem(TypeSystemDefinition::Type(TypeDefinition::Enum(site))) = kinds[3]
    else {
        panic!("expected an enum definition");
    };
    assert_eq!(site.values.len(), 2);
    assert!(matches!(
        kinds[4],
        Definition::TypeSystem(TypeSystemDefinition::Type(TypeDefinition::InputObject(_)))
    ));
    let Definition::TypeSystem(TypeSystemDefinition::TypeExtension(extension)) = kinds[5] else {
        panic!("expected a type extension");
    };
    assert_eq!(extension.definition.name.value, "Foo");
    let Definition::TypeSystem(TypeSystemDefinition::Directive(directive)) = kinds[6] else {
        panic!("expected a directive definition");
    };
    assert_eq!(directive.name.value, "skip");
    let locations: Vec<&str> = directive
        .locations
        .iter()
        .map(|location| location.value.as_str())
        .collect();
    assert_eq!(locations, vec!["FIELD", "INLINE_FRAGMENT"]);
}

#[test]
fn parses_union_with_leading_pipe() {
    let document = parse_ok("union Feed = | Story | Article");
    let Definition::TypeSystem(TypeSystemDefinition::Type(TypeDefinition::Union(union))) =
        &document.definitions[0]
    else {
        panic!("expected a union definition");
    };
    assert_eq!(union.types.len(), 2);
}
