//! The abstract syntax tree produced by the parser.
//!
//! Every node owns an optional [`Location`] tying it back to the token
//! range and [`Source`] it was parsed from; parsing with location
//! tracking disabled leaves these `None`. Alternation points in the
//! grammar (definitions, selections, values, types) are enums, and
//! grammatically optional children are `Option`s or possibly-empty
//! `Vec`s.

use crate::source::Source;
use crate::token::Token;
use std::fmt;

/// The region of a [`Source`] a node was parsed from: the character
/// offsets spanned plus the first and last tokens of the node.
#[derive(Clone, Debug, PartialEq)]
pub struct Location {
    pub start: usize,
    pub end: usize,
    pub start_token: Token,
    pub end_token: Token,
    pub source: Source,
}

/// Anything with a place in the source text.
pub trait Node {
    fn loc(&self) -> Option<&Location>;
}

impl Node for Location {
    fn loc(&self) -> Option<&Location> {
        Some(self)
    }
}

macro_rules! impl_node {
    ($($ty:ident),* $(,)?) => {$(
        impl Node for $ty {
            fn loc(&self) -> Option<&Location> {
                self.loc.as_ref()
            }
        }
    )*};
}

macro_rules! impl_node_enum {
    ($ty:ident { $($variant:ident),* $(,)? }) => {
        impl Node for $ty {
            fn loc(&self) -> Option<&Location> {
                match self {
                    $($ty::$variant(node) => node.loc(),)*
                }
            }
        }
    };
}

// ============================================================================
// Names and documents
// ============================================================================

#[derive(Clone, Debug, PartialEq)]
pub struct Name {
    pub value: String,
    pub loc: Option<Location>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    pub definitions: Vec<Definition>,
    pub loc: Option<Location>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Definition {
    Operation(OperationDefinition),
    Fragment(FragmentDefinition),
    TypeSystem(TypeSystemDefinition),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OperationType {
    Query,
    Mutation,
    Subscription,
}

impl OperationType {
    pub fn as_str(self) -> &'static str {
        match self {
            OperationType::Query => "query",
            OperationType::Mutation => "mutation",
            OperationType::Subscription => "subscription",
        }
    }
}

impl fmt::Display for OperationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct OperationDefinition {
    pub operation: OperationType,
    pub name: Option<Name>,
    pub variable_definitions: Vec<VariableDefinition>,
    pub directives: Vec<Directive>,
    pub selection_set: SelectionSet,
    pub loc: Option<Location>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct VariableDefinition {
    pub variable: Variable,
    pub ty: Type,
    pub default_value: Option<Value>,
    pub loc: Option<Location>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Variable {
    pub name: Name,
    pub loc: Option<Location>,
}

// ============================================================================
// Selections
// ============================================================================

#[derive(Clone, Debug, PartialEq)]
pub struct SelectionSet {
    pub selections: Vec<Selection>,
    pub loc: Option<Location>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Selection {
    Field(Field),
    FragmentSpread(FragmentSpread),
    InlineFragment(InlineFragment),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    pub alias: Option<Name>,
    pub name: Name,
    pub arguments: Vec<Argument>,
    pub directives: Vec<Directive>,
    pub selection_set: Option<SelectionSet>,
    pub loc: Option<Location>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Argument {
    pub name: Name,
    pub value: Value,
    pub loc: Option<Location>,
}

// ============================================================================
// Fragments
// ============================================================================

#[derive(Clone, Debug, PartialEq)]
pub struct FragmentSpread {
    pub name: Name,
    pub directives: Vec<Directive>,
    pub loc: Option<Location>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct InlineFragment {
    pub type_condition: Option<NamedType>,
    pub directives: Vec<Directive>,
    pub selection_set: SelectionSet,
    pub loc: Option<Location>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FragmentDefinition {
    pub name: Name,
    pub type_condition: NamedType,
    pub directives: Vec<Directive>,
    pub selection_set: SelectionSet,
    pub loc: Option<Location>,
}

// ============================================================================
// Values
// ============================================================================

#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Variable(Variable),
    Int(IntValue),
    Float(FloatValue),
    String(StringValue),
    Boolean(BooleanValue),
    Null(NullValue),
    Enum(EnumValue),
    List(ListValue),
    Object(ObjectValue),
}

/// Integer literals keep their source spelling; no numeric conversion
/// happens at parse time.
#[derive(Clone, Debug, PartialEq)]
pub struct IntValue {
    pub value: String,
    pub loc: Option<Location>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FloatValue {
    pub value: String,
    pub loc: Option<Location>,
}

/// The value is the decoded string, with escape sequences resolved.
#[derive(Clone, Debug, PartialEq)]
pub struct StringValue {
    pub value: String,
    pub loc: Option<Location>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BooleanValue {
    pub value: bool,
    pub loc: Option<Location>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NullValue {
    pub loc: Option<Location>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EnumValue {
    pub value: String,
    pub loc: Option<Location>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ListValue {
    pub values: Vec<Value>,
    pub loc: Option<Location>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ObjectValue {
    pub fields: Vec<ObjectField>,
    pub loc: Option<Location>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ObjectField {
    pub name: Name,
    pub value: Value,
    pub loc: Option<Location>,
}

// ============================================================================
// Directives
// ============================================================================

#[derive(Clone, Debug, PartialEq)]
pub struct Directive {
    pub name: Name,
    pub arguments: Vec<Argument>,
    pub loc: Option<Location>,
}

// ============================================================================
// Type references
// ============================================================================

#[derive(Clone, Debug, PartialEq)]
pub enum Type {
    Named(NamedType),
    List(Box<ListType>),
    NonNull(Box<NonNullType>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct NamedType {
    pub name: Name,
    pub loc: Option<Location>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ListType {
    pub ty: Type,
    pub loc: Option<Location>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NonNullType {
    pub ty: Type,
    pub loc: Option<Location>,
}

// ============================================================================
// Type system definitions
// ============================================================================

#[derive(Clone, Debug, PartialEq)]
pub enum TypeSystemDefinition {
    Schema(SchemaDefinition),
    Type(TypeDefinition),
    TypeExtension(TypeExtensionDefinition),
    Directive(DirectiveDefinition),
}

#[derive(Clone, Debug, PartialEq)]
pub enum TypeDefinition {
    Scalar(ScalarTypeDefinition),
    Object(ObjectTypeDefinition),
    Interface(InterfaceTypeDefinition),
    Union(UnionTypeDefinition),
    Enum(EnumTypeDefinition),
    InputObject(InputObjectTypeDefinition),
}

#[derive(Clone, Debug, PartialEq)]
pub struct SchemaDefinition {
    pub directives: Vec<Directive>,
    pub operation_types: Vec<OperationTypeDefinition>,
    pub loc: Option<Location>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct OperationTypeDefinition {
    pub operation: OperationType,
    pub ty: NamedType,
    pub loc: Option<Location>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScalarTypeDefinition {
    pub name: Name,
    pub directives: Vec<Directive>,
    pub loc: Option<Location>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ObjectTypeDefinition {
    pub name: Name,
    pub interfaces: Vec<NamedType>,
    pub directives: Vec<Directive>,
    pub fields: Vec<FieldDefinition>,
    pub loc: Option<Location>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FieldDefinition {
    pub name: Name,
    pub arguments: Vec<InputValueDefinition>,
    pub ty: Type,
    pub directives: Vec<Directive>,
    pub loc: Option<Location>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct InputValueDefinition {
    pub name: Name,
    pub ty: Type,
    pub default_value: Option<Value>,
    pub directives: Vec<Directive>,
    pub loc: Option<Location>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct InterfaceTypeDefinition {
    pub name: Name,
    pub directives: Vec<Directive>,
    pub fields: Vec<FieldDefinition>,
    pub loc: Option<Location>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UnionTypeDefinition {
    pub name: Name,
    pub directives: Vec<Directive>,
    pub types: Vec<NamedType>,
    pub loc: Option<Location>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EnumTypeDefinition {
    pub name: Name,
    pub directives: Vec<Directive>,
    pub values: Vec<EnumValueDefinition>,
    pub loc: Option<Location>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EnumValueDefinition {
    pub name: Name,
    pub directives: Vec<Directive>,
    pub loc: Option<Location>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct InputObjectTypeDefinition {
    pub name: Name,
    pub directives: Vec<Directive>,
    pub fields: Vec<InputValueDefinition>,
    pub loc: Option<Location>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TypeExtensionDefinition {
    pub definition: ObjectTypeDefinition,
    pub loc: Option<Location>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveDefinition {
    pub name: Name,
    pub arguments: Vec<InputValueDefinition>,
    pub locations: Vec<Name>,
    pub loc: Option<Location>,
}

impl_node!(
    Name,
    Document,
    OperationDefinition,
    VariableDefinition,
    Variable,
    SelectionSet,
    Field,
    Argument,
    FragmentSpread,
    InlineFragment,
    FragmentDefinition,
    IntValue,
    FloatValue,
    StringValue,
    BooleanValue,
    NullValue,
    EnumValue,
    ListValue,
    ObjectValue,
    ObjectField,
    Directive,
    NamedType,
    ListType,
    NonNullType,
    SchemaDefinition,
    OperationTypeDefinition,
    ScalarTypeDefinition,
    ObjectTypeDefinition,
    FieldDefinition,
    InputValueDefinition,
    InterfaceTypeDefinition,
    UnionTypeDefinition,
    EnumTypeDefinition,
    EnumValueDefinition,
    InputObjectTypeDefinition,
    TypeExtensionDefinition,
    DirectiveDefinition,
);

impl_node_enum!(Definition {
    Operation,
    Fragment,
    TypeSystem
});
impl_node_enum!(Selection {
    Field,
    FragmentSpread,
    InlineFragment
});
impl_node_enum!(Value {
    Variable,
    Int,
    Float,
    String,
    Boolean,
    Null,
    Enum,
    List,
    Object
});
impl_node_enum!(Type {
    Named,
    List,
    NonNull
});
impl_node_enum!(TypeSystemDefinition {
    Schema,
    Type,
    TypeExtension,
    Directive
});
impl_node_enum!(TypeDefinition {
    Scalar,
    Object,
    Interface,
    Union,
    Enum,
    InputObject
});
