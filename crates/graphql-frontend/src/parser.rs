//! A recursive descent parser over [`Lexer`] producing the [`crate::ast`]
//! types, with a [`Location`] attached to every node unless disabled
//! via [`ParseOptions`].

use crate::ast::*;
use crate::error::GraphQLError;
use crate::error::syntax_error;
use crate::lexer::Lexer;
use crate::source::Source;
use crate::token::Token;
use crate::token::TokenKind;

/// Configuration accepted by [`parse_with_options`].
#[derive(Clone, Copy, Debug, Default)]
pub struct ParseOptions {
    /// When set, nodes carry no [`Location`]s. Useful when the tree is
    /// only compared structurally.
    pub no_location: bool,
}

/// Parses a GraphQL document.
pub fn parse(source: &Source) -> Result<Document, GraphQLError> {
    parse_with_options(source, ParseOptions::default())
}

/// Parses a GraphQL document with explicit options.
pub fn parse_with_options(
    source: &Source,
    options: ParseOptions,
) -> Result<Document, GraphQLError> {
    let mut parser = Parser::new(source.clone(), options);
    parser.parse_document()
}

/// Parses a standalone value literal, e.g. a default passed alongside
/// an operation. The source must contain exactly one value.
pub fn parse_value(source: &Source) -> Result<Value, GraphQLError> {
    let mut parser = Parser::new(source.clone(), ParseOptions::default());
    parser.expect(TokenKind::Sof)?;
    let value = parser.parse_value_literal(false)?;
    parser.expect(TokenKind::Eof)?;
    Ok(value)
}

/// Parses a standalone type reference such as `[User!]!`. The source
/// must contain exactly one type.
pub fn parse_type(source: &Source) -> Result<Type, GraphQLError> {
    let mut parser = Parser::new(source.clone(), ParseOptions::default());
    parser.expect(TokenKind::Sof)?;
    let ty = parser.parse_type_reference()?;
    parser.expect(TokenKind::Eof)?;
    Ok(ty)
}

struct Parser {
    lexer: Lexer,
    options: ParseOptions,
}

impl Parser {
    fn new(source: Source, options: ParseOptions) -> Self {
        Parser {
            lexer: Lexer::new(source),
            options,
        }
    }

    // ========================================================================
    // Primitives
    // ========================================================================

    /// True when the current token is of the given kind.
    fn peek(&self, kind: TokenKind) -> bool {
        self.lexer.token().kind == kind
    }

    /// The current token's value, or `""` for valueless tokens.
    fn token_value(&self) -> &str {
        self.lexer.token().value.as_deref().unwrap_or("")
    }

    /// Consumes the current token if it is of the given kind. Returns
    /// whether it matched.
    fn skip(&mut self, kind: TokenKind) -> Result<bool, GraphQLError> {
        let matched = self.peek(kind);
        if matched {
            self.lexer.advance()?;
        }
        Ok(matched)
    }

    /// Consumes and returns the current token, which must be of the
    /// given kind.
    fn expect(&mut self, kind: TokenKind) -> Result<Token, GraphQLError> {
        let token = self.lexer.token().clone();
        if token.kind == kind {
            self.lexer.advance()?;
            Ok(token)
        } else {
            Err(syntax_error(
                self.lexer.source(),
                token.start,
                format!("Expected {}, found {}", kind, token.desc()),
            ))
        }
    }

    /// Consumes and returns the current token, which must be a `Name`
    /// with the given value.
    fn expect_keyword(&mut self, value: &str) -> Result<Token, GraphQLError> {
        let token = self.lexer.token().clone();
        if token.kind == TokenKind::Name && token.value.as_deref() == Some(value) {
            self.lexer.advance()?;
            Ok(token)
        } else {
            Err(syntax_error(
                self.lexer.source(),
                token.start,
                format!("Expected \"{}\", found {}", value, token.desc()),
            ))
        }
    }

    /// The error for encountering `at_token` (or the current token)
    /// somewhere the grammar does not allow it.
    fn unexpected(&self, at_token: Option<&Token>) -> GraphQLError {
        let token = at_token.unwrap_or_else(|| self.lexer.token());
        syntax_error(
            self.lexer.source(),
            token.start,
            format!("Unexpected {}", token.desc()),
        )
    }

    /// The location spanning `start_token` through the most recently
    /// consumed token, or `None` when location tracking is off.
    fn loc(&self, start_token: &Token) -> Option<Location> {
        if self.options.no_location {
            return None;
        }
        let end_token = self.lexer.last_token().clone();
        Some(Location {
            start: start_token.start,
            end: end_token.end,
            start_token: start_token.clone(),
            end_token,
            source: self.lexer.source().clone(),
        })
    }

    /// Zero or more of `parse_one` between `open` and `close`.
    fn any<T>(
        &mut self,
        open: TokenKind,
        parse_one: fn(&mut Self) -> Result<T, GraphQLError>,
        close: TokenKind,
    ) -> Result<Vec<T>, GraphQLError> {
        self.expect(open)?;
        let mut nodes = Vec::new();
        while !self.skip(close)? {
            nodes.push(parse_one(self)?);
        }
        Ok(nodes)
    }

    /// One or more of `parse_one` between `open` and `close`.
    fn many<T>(
        &mut self,
        open: TokenKind,
        parse_one: fn(&mut Self) -> Result<T, GraphQLError>,
        close: TokenKind,
    ) -> Result<Vec<T>, GraphQLError> {
        self.expect(open)?;
        let mut nodes = vec![parse_one(self)?];
        while !self.skip(close)? {
            nodes.push(parse_one(self)?);
        }
        Ok(nodes)
    }

    // ========================================================================
    // Documents and operations
    // ========================================================================

    /// Document : Definition+
    fn parse_document(&mut self) -> Result<Document, GraphQLError> {
        let start = self.lexer.token().clone();
        self.expect(TokenKind::Sof)?;
        let mut definitions = Vec::new();
        loop {
            definitions.push(self.parse_definition()?);
            if self.skip(TokenKind::Eof)? {
                break;
            }
        }
        Ok(Document {
            definitions,
            loc: self.loc(&start),
        })
    }

    /// Definition :
    ///   - OperationDefinition
    ///   - FragmentDefinition
    ///   - TypeSystemDefinition
    fn parse_definition(&mut self) -> Result<Definition, GraphQLError> {
        if self.peek(TokenKind::BraceL) {
            return Ok(Definition::Operation(self.parse_operation_definition()?));
        }
        if self.peek(TokenKind::Name) {
            match self.token_value() {
                "query" | "mutation" | "subscription" => {
                    return Ok(Definition::Operation(self.parse_operation_definition()?));
                }
                "fragment" => {
                    return Ok(Definition::Fragment(self.parse_fragment_definition()?));
                }
                "schema" | "scalar" | "type" | "interface" | "union" | "enum" | "input"
                | "extend" | "directive" => {
                    return Ok(Definition::TypeSystem(self.parse_type_system_definition()?));
                }
                _ => {}
            }
        }
        Err(self.unexpected(None))
    }

    /// OperationDefinition :
    ///   - SelectionSet
    ///   - OperationType Name? VariableDefinitions? Directives? SelectionSet
    fn parse_operation_definition(&mut self) -> Result<OperationDefinition, GraphQLError> {
        let start = self.lexer.token().clone();
        if self.peek(TokenKind::BraceL) {
            let selection_set = self.parse_selection_set()?;
            return Ok(OperationDefinition {
                operation: OperationType::Query,
                name: None,
                variable_definitions: Vec::new(),
                directives: Vec::new(),
                selection_set,
                loc: self.loc(&start),
            });
        }
        let operation = self.parse_operation_type()?;
        let name = if self.peek(TokenKind::Name) {
            Some(self.parse_name()?)
        } else {
            None
        };
        let variable_definitions = self.parse_variable_definitions()?;
        let directives = self.parse_directives()?;
        let selection_set = self.parse_selection_set()?;
        Ok(OperationDefinition {
            operation,
            name,
            variable_definitions,
            directives,
            selection_set,
            loc: self.loc(&start),
        })
    }

    /// OperationType : one of query mutation subscription
    fn parse_operation_type(&mut self) -> Result<OperationType, GraphQLError> {
        let token = self.expect(TokenKind::Name)?;
        match token.value.as_deref() {
            Some("query") => Ok(OperationType::Query),
            Some("mutation") => Ok(OperationType::Mutation),
            Some("subscription") => Ok(OperationType::Subscription),
            _ => Err(self.unexpected(Some(&token))),
        }
    }

    /// VariableDefinitions : ( VariableDefinition+ )
    fn parse_variable_definitions(&mut self) -> Result<Vec<VariableDefinition>, GraphQLError> {
        if self.peek(TokenKind::ParenL) {
            self.many(
                TokenKind::ParenL,
                Self::parse_variable_definition,
                TokenKind::ParenR,
            )
        } else {
            Ok(Vec::new())
        }
    }

    /// VariableDefinition : Variable : Type DefaultValue?
    fn parse_variable_definition(&mut self) -> Result<VariableDefinition, GraphQLError> {
        let start = self.lexer.token().clone();
        let variable = self.parse_variable()?;
        self.expect(TokenKind::Colon)?;
        let ty = self.parse_type_reference()?;
        let default_value = if self.skip(TokenKind::Equals)? {
            Some(self.parse_const_value()?)
        } else {
            None
        };
        Ok(VariableDefinition {
            variable,
            ty,
            default_value,
            loc: self.loc(&start),
        })
    }

    /// Variable : $ Name
    fn parse_variable(&mut self) -> Result<Variable, GraphQLError> {
        let start = self.lexer.token().clone();
        self.expect(TokenKind::Dollar)?;
        let name = self.parse_name()?;
        Ok(Variable {
            name,
            loc: self.loc(&start),
        })
    }

    /// SelectionSet : { Selection+ }
    fn parse_selection_set(&mut self) -> Result<SelectionSet, GraphQLError> {
        let start = self.lexer.token().clone();
        let selections = self.many(TokenKind::BraceL, Self::parse_selection, TokenKind::BraceR)?;
        Ok(SelectionSet {
            selections,
            loc: self.loc(&start),
        })
    }

    /// Selection :
    ///   - Field
    ///   - FragmentSpread
    ///   - InlineFragment
    fn parse_selection(&mut self) -> Result<Selection, GraphQLError> {
        if self.peek(TokenKind::Spread) {
            self.parse_fragment()
        } else {
            Ok(Selection::Field(self.parse_field()?))
        }
    }

    /// Field : Alias? Name Arguments? Directives? SelectionSet?
    ///
    /// Alias : Name :
    fn parse_field(&mut self) -> Result<Field, GraphQLError> {
        let start = self.lexer.token().clone();
        let name_or_alias = self.parse_name()?;
        let (alias, name) = if self.skip(TokenKind::Colon)? {
            (Some(name_or_alias), self.parse_name()?)
        } else {
            (None, name_or_alias)
        };
        let arguments = self.parse_arguments()?;
        let directives = self.parse_directives()?;
        let selection_set = if self.peek(TokenKind::BraceL) {
            Some(self.parse_selection_set()?)
        } else {
            None
        };
        Ok(Field {
            alias,
            name,
            arguments,
            directives,
            selection_set,
            loc: self.loc(&start),
        })
    }

    /// Arguments : ( Argument+ )
    fn parse_arguments(&mut self) -> Result<Vec<Argument>, GraphQLError> {
        if self.peek(TokenKind::ParenL) {
            self.many(TokenKind::ParenL, Self::parse_argument, TokenKind::ParenR)
        } else {
            Ok(Vec::new())
        }
    }

    /// Argument : Name : Value
    fn parse_argument(&mut self) -> Result<Argument, GraphQLError> {
        let start = self.lexer.token().clone();
        let name = self.parse_name()?;
        self.expect(TokenKind::Colon)?;
        let value = self.parse_value_literal(false)?;
        Ok(Argument {
            name,
            value,
            loc: self.loc(&start),
        })
    }

    fn parse_name(&mut self) -> Result<Name, GraphQLError> {
        let token = self.expect(TokenKind::Name)?;
        Ok(Name {
            value: token.value.clone().unwrap_or_default(),
            loc: self.loc(&token),
        })
    }

    // ========================================================================
    // Fragments
    // ========================================================================

    /// Corresponds to both FragmentSpread and InlineFragment in the
    /// grammar:
    ///
    /// FragmentSpread : ... FragmentName Directives?
    ///
    /// InlineFragment : ... TypeCondition? Directives? SelectionSet
    fn parse_fragment(&mut self) -> Result<Selection, GraphQLError> {
        let start = self.lexer.token().clone();
        self.expect(TokenKind::Spread)?;
        if self.peek(TokenKind::Name) && self.token_value() != "on" {
            let name = self.parse_fragment_name()?;
            let directives = self.parse_directives()?;
            return Ok(Selection::FragmentSpread(FragmentSpread {
                name,
                directives,
                loc: self.loc(&start),
            }));
        }
        let type_condition = if self.peek(TokenKind::Name) && self.token_value() == "on" {
            self.lexer.advance()?;
            Some(self.parse_named_type()?)
        } else {
            None
        };
        let directives = self.parse_directives()?;
        let selection_set = self.parse_selection_set()?;
        Ok(Selection::InlineFragment(InlineFragment {
            type_condition,
            directives,
            selection_set,
            loc: self.loc(&start),
        }))
    }

    /// FragmentDefinition :
    ///   - fragment FragmentName on TypeCondition Directives? SelectionSet
    fn parse_fragment_definition(&mut self) -> Result<FragmentDefinition, GraphQLError> {
        let start = self.lexer.token().clone();
        self.expect_keyword("fragment")?;
        let name = self.parse_fragment_name()?;
        self.expect_keyword("on")?;
        let type_condition = self.parse_named_type()?;
        let directives = self.parse_directives()?;
        let selection_set = self.parse_selection_set()?;
        Ok(FragmentDefinition {
            name,
            type_condition,
            directives,
            selection_set,
            loc: self.loc(&start),
        })
    }

    /// FragmentName : Name but not `on`
    fn parse_fragment_name(&mut self) -> Result<Name, GraphQLError> {
        if self.peek(TokenKind::Name) && self.token_value() == "on" {
            return Err(self.unexpected(None));
        }
        self.parse_name()
    }

    // ========================================================================
    // Values
    // ========================================================================

    /// Value[Const] :
    ///   - [~Const] Variable
    ///   - IntValue
    ///   - FloatValue
    ///   - StringValue
    ///   - BooleanValue
    ///   - NullValue
    ///   - EnumValue
    ///   - ListValue[?Const]
    ///   - ObjectValue[?Const]
    fn parse_value_literal(&mut self, is_const: bool) -> Result<Value, GraphQLError> {
        let token = self.lexer.token().clone();
        match token.kind {
            TokenKind::BracketL => self.parse_list(is_const),
            TokenKind::BraceL => self.parse_object(is_const),
            TokenKind::Int => {
                self.lexer.advance()?;
                Ok(Value::Int(IntValue {
                    value: token.value.clone().unwrap_or_default(),
                    loc: self.loc(&token),
                }))
            }
            TokenKind::Float => {
                self.lexer.advance()?;
                Ok(Value::Float(FloatValue {
                    value: token.value.clone().unwrap_or_default(),
                    loc: self.loc(&token),
                }))
            }
            TokenKind::String => {
                self.lexer.advance()?;
                Ok(Value::String(StringValue {
                    value: token.value.clone().unwrap_or_default(),
                    loc: self.loc(&token),
                }))
            }
            TokenKind::Name => match token.value.as_deref() {
                Some("true") | Some("false") => {
                    self.lexer.advance()?;
                    Ok(Value::Boolean(BooleanValue {
                        value: token.value.as_deref() == Some("true"),
                        loc: self.loc(&token),
                    }))
                }
                Some("null") => {
                    self.lexer.advance()?;
                    Ok(Value::Null(NullValue {
                        loc: self.loc(&token),
                    }))
                }
                _ => {
                    self.lexer.advance()?;
                    Ok(Value::Enum(EnumValue {
                        value: token.value.clone().unwrap_or_default(),
                        loc: self.loc(&token),
                    }))
                }
            },
            TokenKind::Dollar if !is_const => Ok(Value::Variable(self.parse_variable()?)),
            _ => Err(self.unexpected(None)),
        }
    }

    fn parse_const_value(&mut self) -> Result<Value, GraphQLError> {
        self.parse_value_literal(true)
    }

    fn parse_nonconst_value(&mut self) -> Result<Value, GraphQLError> {
        self.parse_value_literal(false)
    }

    /// ListValue[Const] :
    ///   - [ ]
    ///   - [ Value[?Const]+ ]
    fn parse_list(&mut self, is_const: bool) -> Result<Value, GraphQLError> {
        let start = self.lexer.token().clone();
        let parse_item: fn(&mut Self) -> Result<Value, GraphQLError> = if is_const {
            Self::parse_const_value
        } else {
            Self::parse_nonconst_value
        };
        let values = self.any(TokenKind::BracketL, parse_item, TokenKind::BracketR)?;
        Ok(Value::List(ListValue {
            values,
            loc: self.loc(&start),
        }))
    }

    /// ObjectValue[Const] :
    ///   - { }
    ///   - { ObjectField[?Const]+ }
    fn parse_object(&mut self, is_const: bool) -> Result<Value, GraphQLError> {
        let start = self.lexer.token().clone();
        self.expect(TokenKind::BraceL)?;
        let mut fields = Vec::new();
        while !self.skip(TokenKind::BraceR)? {
            fields.push(self.parse_object_field(is_const)?);
        }
        Ok(Value::Object(ObjectValue {
            fields,
            loc: self.loc(&start),
        }))
    }

    /// ObjectField[Const] : Name : Value[?Const]
    fn parse_object_field(&mut self, is_const: bool) -> Result<ObjectField, GraphQLError> {
        let start = self.lexer.token().clone();
        let name = self.parse_name()?;
        self.expect(TokenKind::Colon)?;
        let value = self.parse_value_literal(is_const)?;
        Ok(ObjectField {
            name,
            value,
            loc: self.loc(&start),
        })
    }

    // ========================================================================
    // Directives
    // ========================================================================

    /// Directives : Directive+
    fn parse_directives(&mut self) -> Result<Vec<Directive>, GraphQLError> {
        let mut directives = Vec::new();
        while self.peek(TokenKind::At) {
            directives.push(self.parse_directive()?);
        }
        Ok(directives)
    }

    /// Directive : @ Name Arguments?
    fn parse_directive(&mut self) -> Result<Directive, GraphQLError> {
        let start = self.lexer.token().clone();
        self.expect(TokenKind::At)?;
        let name = self.parse_name()?;
        let arguments = self.parse_arguments()?;
        Ok(Directive {
            name,
            arguments,
            loc: self.loc(&start),
        })
    }

    // ========================================================================
    // Type references
    // ========================================================================

    /// Type :
    ///   - NamedType
    ///   - ListType
    ///   - NonNullType
    fn parse_type_reference(&mut self) -> Result<Type, GraphQLError> {
        let start = self.lexer.token().clone();
        let ty = if self.skip(TokenKind::BracketL)? {
            let inner = self.parse_type_reference()?;
            self.expect(TokenKind::BracketR)?;
            Type::List(Box::new(ListType {
                ty: inner,
                loc: self.loc(&start),
            }))
        } else {
            Type::Named(self.parse_named_type()?)
        };
        if self.skip(TokenKind::Bang)? {
            return Ok(Type::NonNull(Box::new(NonNullType {
                ty,
                loc: self.loc(&start),
            })));
        }
        Ok(ty)
    }

    /// NamedType : Name
    fn parse_named_type(&mut self) -> Result<NamedType, GraphQLError> {
        let start = self.lexer.token().clone();
        let name = self.parse_name()?;
        Ok(NamedType {
            name,
            loc: self.loc(&start),
        })
    }

    // ========================================================================
    // Type system definitions
    // ========================================================================

    /// TypeSystemDefinition :
    ///   - SchemaDefinition
    ///   - TypeDefinition
    ///   - TypeExtensionDefinition
    ///   - DirectiveDefinition
    fn parse_type_system_definition(&mut self) -> Result<TypeSystemDefinition, GraphQLError> {
        if self.peek(TokenKind::Name) {
            match self.token_value() {
                "schema" => {
                    return Ok(TypeSystemDefinition::Schema(self.parse_schema_definition()?));
                }
                "scalar" => {
                    return Ok(TypeSystemDefinition::Type(TypeDefinition::Scalar(
                        self.parse_scalar_type_definition()?,
                    )));
                }
                "type" => {
                    return Ok(TypeSystemDefinition::Type(TypeDefinition::Object(
                        self.parse_object_type_definition()?,
                    )));
                }
                "interface" => {
                    return Ok(TypeSystemDefinition::Type(TypeDefinition::Interface(
                        self.parse_interface_type_definition()?,
                    )));
                }
                "union" => {
                    return Ok(TypeSystemDefinition::Type(TypeDefinition::Union(
                        self.parse_union_type_definition()?,
                    )));
                }
                "enum" => {
                    return Ok(TypeSystemDefinition::Type(TypeDefinition::Enum(
                        self.parse_enum_type_definition()?,
                    )));
                }
                "input" => {
                    return Ok(TypeSystemDefinition::Type(TypeDefinition::InputObject(
                        self.parse_input_object_type_definition()?,
                    )));
                }
                "extend" => {
                    return Ok(TypeSystemDefinition::TypeExtension(
                        self.parse_type_extension_definition()?,
                    ));
                }
                "directive" => {
                    return Ok(TypeSystemDefinition::Directive(
                        self.parse_directive_definition()?,
                    ));
                }
                _ => {}
            }
        }
        Err(self.unexpected(None))
    }

    /// SchemaDefinition : schema Directives? { OperationTypeDefinition+ }
    fn parse_schema_definition(&mut self) -> Result<SchemaDefinition, GraphQLError> {
        let start = self.lexer.token().clone();
        self.expect_keyword("schema")?;
        let directives = self.parse_directives()?;
        let operation_types = self.many(
            TokenKind::BraceL,
            Self::parse_operation_type_definition,
            TokenKind::BraceR,
        )?;
        Ok(SchemaDefinition {
            directives,
            operation_types,
            loc: self.loc(&start),
        })
    }

    /// OperationTypeDefinition : OperationType : NamedType
    fn parse_operation_type_definition(&mut self) -> Result<OperationTypeDefinition, GraphQLError> {
        let start = self.lexer.token().clone();
        let operation = self.parse_operation_type()?;
        self.expect(TokenKind::Colon)?;
        let ty = self.parse_named_type()?;
        Ok(OperationTypeDefinition {
            operation,
            ty,
            loc: self.loc(&start),
        })
    }

    /// ScalarTypeDefinition : scalar Name Directives?
    fn parse_scalar_type_definition(&mut self) -> Result<ScalarTypeDefinition, GraphQLError> {
        let start = self.lexer.token().clone();
        self.expect_keyword("scalar")?;
        let name = self.parse_name()?;
        let directives = self.parse_directives()?;
        Ok(ScalarTypeDefinition {
            name,
            directives,
            loc: self.loc(&start),
        })
    }

    /// ObjectTypeDefinition :
    ///   - type Name ImplementsInterfaces? Directives? { FieldDefinition* }
    fn parse_object_type_definition(&mut self) -> Result<ObjectTypeDefinition, GraphQLError> {
        let start = self.lexer.token().clone();
        self.expect_keyword("type")?;
        let name = self.parse_name()?;
        let interfaces = self.parse_implements_interfaces()?;
        let directives = self.parse_directives()?;
        let fields = self.any(
            TokenKind::BraceL,
            Self::parse_field_definition,
            TokenKind::BraceR,
        )?;
        Ok(ObjectTypeDefinition {
            name,
            interfaces,
            directives,
            fields,
            loc: self.loc(&start),
        })
    }

    /// ImplementsInterfaces : implements NamedType+
    fn parse_implements_interfaces(&mut self) -> Result<Vec<NamedType>, GraphQLError> {
        let mut types = Vec::new();
        if self.peek(TokenKind::Name) && self.token_value() == "implements" {
            self.lexer.advance()?;
            loop {
                types.push(self.parse_named_type()?);
                if !self.peek(TokenKind::Name) {
                    break;
                }
            }
        }
        Ok(types)
    }

    /// FieldDefinition : Name ArgumentsDefinition? : Type Directives?
    fn parse_field_definition(&mut self) -> Result<FieldDefinition, GraphQLError> {
        let start = self.lexer.token().clone();
        let name = self.parse_name()?;
        let arguments = self.parse_argument_defs()?;
        self.expect(TokenKind::Colon)?;
        let ty = self.parse_type_reference()?;
        let directives = self.parse_directives()?;
        Ok(FieldDefinition {
            name,
            arguments,
            ty,
            directives,
            loc: self.loc(&start),
        })
    }

    /// ArgumentsDefinition : ( InputValueDefinition+ )
    fn parse_argument_defs(&mut self) -> Result<Vec<InputValueDefinition>, GraphQLError> {
        if self.peek(TokenKind::ParenL) {
            self.many(
                TokenKind::ParenL,
                Self::parse_input_value_def,
                TokenKind::ParenR,
            )
        } else {
            Ok(Vec::new())
        }
    }

    /// InputValueDefinition : Name : Type DefaultValue? Directives?
    fn parse_input_value_def(&mut self) -> Result<InputValueDefinition, GraphQLError> {
        let start = self.lexer.token().clone();
        let name = self.parse_name()?;
        self.expect(TokenKind::Colon)?;
        let ty = self.parse_type_reference()?;
        let default_value = if self.skip(TokenKind::Equals)? {
            Some(self.parse_const_value()?)
        } else {
            None
        };
        let directives = self.parse_directives()?;
        Ok(InputValueDefinition {
            name,
            ty,
            default_value,
            directives,
            loc: self.loc(&start),
        })
    }

    /// InterfaceTypeDefinition : interface Name Directives? { FieldDefinition* }
    fn parse_interface_type_definition(&mut self) -> Result<InterfaceTypeDefinition, GraphQLError> {
        let start = self.lexer.token().clone();
        self.expect_keyword("interface")?;
        let name = self.parse_name()?;
        let directives = self.parse_directives()?;
        let fields = self.any(
            TokenKind::BraceL,
            Self::parse_field_definition,
            TokenKind::BraceR,
        )?;
        Ok(InterfaceTypeDefinition {
            name,
            directives,
            fields,
            loc: self.loc(&start),
        })
    }

    /// UnionTypeDefinition : union Name Directives? = UnionMembers
    fn parse_union_type_definition(&mut self) -> Result<UnionTypeDefinition, GraphQLError> {
        let start = self.lexer.token().clone();
        self.expect_keyword("union")?;
        let name = self.parse_name()?;
        let directives = self.parse_directives()?;
        self.expect(TokenKind::Equals)?;
        let types = self.parse_union_members()?;
        Ok(UnionTypeDefinition {
            name,
            directives,
            types,
            loc: self.loc(&start),
        })
    }

    /// UnionMembers : |? NamedType ( | NamedType )*
    fn parse_union_members(&mut self) -> Result<Vec<NamedType>, GraphQLError> {
        self.skip(TokenKind::Pipe)?;
        let mut members = Vec::new();
        loop {
            members.push(self.parse_named_type()?);
            if !self.skip(TokenKind::Pipe)? {
                break;
            }
        }
        Ok(members)
    }

    /// EnumTypeDefinition : enum Name Directives? { EnumValueDefinition+ }
    fn parse_enum_type_definition(&mut self) -> Result<EnumTypeDefinition, GraphQLError> {
        let start = self.lexer.token().clone();
        self.expect_keyword("enum")?;
        let name = self.parse_name()?;
        let directives = self.parse_directives()?;
        let values = self.many(
            TokenKind::BraceL,
            Self::parse_enum_value_definition,
            TokenKind::BraceR,
        )?;
        Ok(EnumTypeDefinition {
            name,
            directives,
            values,
            loc: self.loc(&start),
        })
    }

    /// EnumValueDefinition : EnumValue Directives?
    fn parse_enum_value_definition(&mut self) -> Result<EnumValueDefinition, GraphQLError> {
        let start = self.lexer.token().clone();
        let name = self.parse_name()?;
        let directives = self.parse_directives()?;
        Ok(EnumValueDefinition {
            name,
            directives,
            loc: self.loc(&start),
        })
    }

    /// InputObjectTypeDefinition : input Name Directives? { InputValueDefinition* }
    fn parse_input_object_type_definition(
        &mut self,
    ) -> Result<InputObjectTypeDefinition, GraphQLError> {
        let start = self.lexer.token().clone();
        self.expect_keyword("input")?;
        let name = self.parse_name()?;
        let directives = self.parse_directives()?;
        let fields = self.any(
            TokenKind::BraceL,
            Self::parse_input_value_def,
            TokenKind::BraceR,
        )?;
        Ok(InputObjectTypeDefinition {
            name,
            directives,
            fields,
            loc: self.loc(&start),
        })
    }

    /// TypeExtensionDefinition : extend ObjectTypeDefinition
    fn parse_type_extension_definition(&mut self) -> Result<TypeExtensionDefinition, GraphQLError> {
        let start = self.lexer.token().clone();
        self.expect_keyword("extend")?;
        let definition = self.parse_object_type_definition()?;
        Ok(TypeExtensionDefinition {
            definition,
            loc: self.loc(&start),
        })
    }

    /// DirectiveDefinition :
    ///   - directive @ Name ArgumentsDefinition? on DirectiveLocations
    fn parse_directive_definition(&mut self) -> Result<DirectiveDefinition, GraphQLError> {
        let start = self.lexer.token().clone();
        self.expect_keyword("directive")?;
        self.expect(TokenKind::At)?;
        let name = self.parse_name()?;
        let arguments = self.parse_argument_defs()?;
        self.expect_keyword("on")?;
        let locations = self.parse_directive_locations()?;
        Ok(DirectiveDefinition {
            name,
            arguments,
            locations,
            loc: self.loc(&start),
        })
    }

    /// DirectiveLocations : |? Name ( | Name )*
    fn parse_directive_locations(&mut self) -> Result<Vec<Name>, GraphQLError> {
        self.skip(TokenKind::Pipe)?;
        let mut locations = Vec::new();
        loop {
            locations.push(self.parse_name()?);
            if !self.skip(TokenKind::Pipe)? {
                break;
            }
        }
        Ok(locations)
    }
}
