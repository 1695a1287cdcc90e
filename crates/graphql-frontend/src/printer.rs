//! Prints an AST back out as canonical GraphQL text.
//!
//! The output uses two-space indentation, one blank line between
//! top-level definitions, and drops ignored tokens, so printing is a
//! normalization: re-parsing and re-printing the output yields the
//! same text.

use crate::ast::*;
use std::fmt::Write;

/// Renders a document. Ends with a single trailing newline.
pub fn print(document: &Document) -> String {
    let definitions: Vec<String> = document.definitions.iter().map(print_definition).collect();
    format!("{}\n", definitions.join("\n\n"))
}

/// Renders a value literal on one line.
pub fn print_value(value: &Value) -> String {
    match value {
        Value::Variable(variable) => format!("${}", variable.name.value),
        Value::Int(int) => int.value.clone(),
        Value::Float(float) => float.value.clone(),
        Value::String(string) => print_string(&string.value),
        Value::Boolean(boolean) => {
            if boolean.value {
                "true".to_string()
            } else {
                "false".to_string()
            }
        }
        Value::Null(_) => "null".to_string(),
        Value::Enum(enum_value) => enum_value.value.clone(),
        Value::List(list) => {
            let values: Vec<String> = list.values.iter().map(print_value).collect();
            format!("[{}]", values.join(", "))
        }
        Value::Object(object) => {
            let fields: Vec<String> = object
                .fields
                .iter()
                .map(|field| format!("{}: {}", field.name.value, print_value(&field.value)))
                .collect();
            format!("{{{}}}", fields.join(", "))
        }
    }
}

/// Renders a type reference, e.g. `[User!]!`.
pub fn print_type(ty: &Type) -> String {
    match ty {
        Type::Named(named) => named.name.value.clone(),
        Type::List(list) => format!("[{}]", print_type(&list.ty)),
        Type::NonNull(non_null) => format!("{}!", print_type(&non_null.ty)),
    }
}

fn print_definition(definition: &Definition) -> String {
    match definition {
        Definition::Operation(operation) => print_operation(operation),
        Definition::Fragment(fragment) => print_fragment_definition(fragment),
        Definition::TypeSystem(type_system) => print_type_system_definition(type_system),
    }
}

fn print_operation(operation: &OperationDefinition) -> String {
    // The query shorthand keeps its bare selection set form.
    if operation.operation == OperationType::Query
        && operation.name.is_none()
        && operation.variable_definitions.is_empty()
        && operation.directives.is_empty()
    {
        return print_selection_set(&operation.selection_set);
    }
    let variable_definitions: Vec<String> = operation
        .variable_definitions
        .iter()
        .map(print_variable_definition)
        .collect();
    let head = format!(
        "{}{}{}",
        operation.operation,
        wrap(" ", operation.name.as_ref().map(|name| name.value.as_str())),
        wrap_parens(&variable_definitions),
    );
    join(&[
        head,
        print_directives(&operation.directives),
        print_selection_set(&operation.selection_set),
    ])
}

fn print_variable_definition(definition: &VariableDefinition) -> String {
    let mut out = format!(
        "${}: {}",
        definition.variable.name.value,
        print_type(&definition.ty)
    );
    if let Some(default_value) = &definition.default_value {
        let _ = write!(out, " = {}", print_value(default_value));
    }
    out
}

fn print_selection_set(selection_set: &SelectionSet) -> String {
    let selections: Vec<String> = selection_set.selections.iter().map(print_selection).collect();
    block(&selections)
}

fn print_selection(selection: &Selection) -> String {
    match selection {
        Selection::Field(field) => print_field(field),
        Selection::FragmentSpread(spread) => join(&[
            format!("...{}", spread.name.value),
            print_directives(&spread.directives),
        ]),
        Selection::InlineFragment(inline) => join(&[
            "...".to_string(),
            wrap(
                "on ",
                inline.type_condition.as_ref().map(|ty| ty.name.value.as_str()),
            ),
            print_directives(&inline.directives),
            print_selection_set(&inline.selection_set),
        ]),
    }
}

fn print_field(field: &Field) -> String {
    let head = format!(
        "{}{}{}",
        field
            .alias
            .as_ref()
            .map(|alias| format!("{}: ", alias.value))
            .unwrap_or_default(),
        field.name.value,
        print_arguments(&field.arguments),
    );
    join(&[
        head,
        print_directives(&field.directives),
        field
            .selection_set
            .as_ref()
            .map(print_selection_set)
            .unwrap_or_default(),
    ])
}

fn print_arguments(arguments: &[Argument]) -> String {
    let arguments: Vec<String> = arguments
        .iter()
        .map(|argument| format!("{}: {}", argument.name.value, print_value(&argument.value)))
        .collect();
    wrap_parens(&arguments)
}

fn print_directives(directives: &[Directive]) -> String {
    let directives: Vec<String> = directives
        .iter()
        .map(|directive| {
            format!(
                "@{}{}",
                directive.name.value,
                print_arguments(&directive.arguments)
            )
        })
        .collect();
    directives.join(" ")
}

fn print_fragment_definition(fragment: &FragmentDefinition) -> String {
    join(&[
        format!(
            "fragment {} on {}",
            fragment.name.value, fragment.type_condition.name.value
        ),
        print_directives(&fragment.directives),
        print_selection_set(&fragment.selection_set),
    ])
}

// ============================================================================
// Type system definitions
// ============================================================================

fn print_type_system_definition(definition: &TypeSystemDefinition) -> String {
    match definition {
        TypeSystemDefinition::Schema(schema) => print_schema_definition(schema),
        TypeSystemDefinition::Type(type_definition) => print_type_definition(type_definition),
        TypeSystemDefinition::TypeExtension(extension) => {
            format!(
                "extend {}",
                print_object_type_definition(&extension.definition)
            )
        }
        TypeSystemDefinition::Directive(directive) => print_directive_definition(directive),
    }
}

fn print_type_definition(definition: &TypeDefinition) -> String {
    match definition {
        TypeDefinition::Scalar(scalar) => join(&[
            format!("scalar {}", scalar.name.value),
            print_directives(&scalar.directives),
        ]),
        TypeDefinition::Object(object) => print_object_type_definition(object),
        TypeDefinition::Interface(interface) => {
            let fields: Vec<String> = interface.fields.iter().map(print_field_definition).collect();
            join(&[
                format!("interface {}", interface.name.value),
                print_directives(&interface.directives),
                block(&fields),
            ])
        }
        TypeDefinition::Union(union) => {
            let members: Vec<String> = union
                .types
                .iter()
                .map(|member| member.name.value.clone())
                .collect();
            join(&[
                format!("union {}", union.name.value),
                print_directives(&union.directives),
                format!("= {}", members.join(" | ")),
            ])
        }
        TypeDefinition::Enum(enum_definition) => {
            let values: Vec<String> = enum_definition
                .values
                .iter()
                .map(|value| {
                    join(&[
                        value.name.value.clone(),
                        print_directives(&value.directives),
                    ])
                })
                .collect();
            join(&[
                format!("enum {}", enum_definition.name.value),
                print_directives(&enum_definition.directives),
                block(&values),
            ])
        }
        TypeDefinition::InputObject(input) => {
            let fields: Vec<String> = input.fields.iter().map(print_input_value).collect();
            join(&[
                format!("input {}", input.name.value),
                print_directives(&input.directives),
                block(&fields),
            ])
        }
    }
}

fn print_schema_definition(schema: &SchemaDefinition) -> String {
    let operation_types: Vec<String> = schema
        .operation_types
        .iter()
        .map(|operation_type| {
            format!(
                "{}: {}",
                operation_type.operation, operation_type.ty.name.value
            )
        })
        .collect();
    join(&[
        "schema".to_string(),
        print_directives(&schema.directives),
        block(&operation_types),
    ])
}

fn print_object_type_definition(object: &ObjectTypeDefinition) -> String {
    let interfaces: Vec<String> = object
        .interfaces
        .iter()
        .map(|interface| interface.name.value.clone())
        .collect();
    let fields: Vec<String> = object.fields.iter().map(print_field_definition).collect();
    join(&[
        format!("type {}", object.name.value),
        if interfaces.is_empty() {
            String::new()
        } else {
            format!("implements {}", interfaces.join(", "))
        },
        print_directives(&object.directives),
        block(&fields),
    ])
}

fn print_field_definition(field: &FieldDefinition) -> String {
    let arguments: Vec<String> = field.arguments.iter().map(print_input_value).collect();
    join(&[
        format!(
            "{}{}: {}",
            field.name.value,
            wrap_parens(&arguments),
            print_type(&field.ty)
        ),
        print_directives(&field.directives),
    ])
}

fn print_input_value(input_value: &InputValueDefinition) -> String {
    let mut out = format!(
        "{}: {}",
        input_value.name.value,
        print_type(&input_value.ty)
    );
    if let Some(default_value) = &input_value.default_value {
        let _ = write!(out, " = {}", print_value(default_value));
    }
    join(&[out, print_directives(&input_value.directives)])
}

fn print_directive_definition(directive: &DirectiveDefinition) -> String {
    let arguments: Vec<String> = directive.arguments.iter().map(print_input_value).collect();
    let locations: Vec<String> = directive
        .locations
        .iter()
        .map(|location| location.value.clone())
        .collect();
    format!(
        "directive @{}{} on {}",
        directive.name.value,
        wrap_parens(&arguments),
        locations.join(" | ")
    )
}

// ============================================================================
// Layout helpers
// ============================================================================

/// Joins the non-empty parts with single spaces.
fn join(parts: &[String]) -> String {
    parts
        .iter()
        .filter(|part| !part.is_empty())
        .cloned()
        .collect::<Vec<String>>()
        .join(" ")
}

/// Renders items as a braced block, one per line, indented two spaces.
/// An empty list renders as bare braces so definitions that allow zero
/// members keep re-parsing.
fn block(items: &[String]) -> String {
    if items.is_empty() {
        return "{}".to_string();
    }
    format!("{{\n  {}\n}}", items.join("\n").replace('\n', "\n  "))
}

/// `prefix` + `value` when the value is present, nothing otherwise.
fn wrap(prefix: &str, value: Option<&str>) -> String {
    match value {
        Some(value) => format!("{prefix}{value}"),
        None => String::new(),
    }
}

/// Items joined with `, ` inside parentheses, or nothing when empty.
fn wrap_parens(items: &[String]) -> String {
    if items.is_empty() {
        String::new()
    } else {
        format!("({})", items.join(", "))
    }
}

/// Renders a string literal with the escapes the lexer understands.
fn print_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for ch in value.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{0008}' => out.push_str("\\b"),
            '\u{000C}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            ch if (ch as u32) < 0x0020 => {
                let _ = write!(out, "\\u{:04X}", ch as u32);
            }
            ch => out.push(ch),
        }
    }
    out.push('"');
    out
}
