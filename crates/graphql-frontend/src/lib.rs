//! A GraphQL front-end: a history-preserving lexer, a recursive
//! descent parser, and source-located syntax diagnostics.
//!
//! The pieces compose in the obvious order. A [`Source`] wraps the
//! request text; [`Lexer`] scans it into a navigable token chain;
//! [`parse`] turns the chain into an [`ast::Document`] whose nodes
//! carry [`ast::Location`]s; and [`GraphQLError`] ties failures back
//! to lines and columns in the original text, with a rendered excerpt
//! in the message. [`print`] goes the other way, rendering an AST as
//! canonical GraphQL text.
//!
//! ```
//! use graphql_frontend::{Source, parse, print};
//!
//! let source = Source::new("{ user(id: 4) { name } }");
//! let document = parse(&source).unwrap();
//! assert_eq!(print(&document), "{\n  user(id: 4) {\n    name\n  }\n}\n");
//! ```

pub mod ast;
mod error;
mod lexer;
mod parser;
mod printer;
mod source;
mod source_location;
pub mod token;

pub use error::GraphQLError;
pub use error::GraphQLFormattedError;
pub use error::PathSegment;
pub use error::format_error;
pub use error::located_error;
pub use error::syntax_error;
pub use lexer::Lexer;
pub use parser::ParseOptions;
pub use parser::parse;
pub use parser::parse_type;
pub use parser::parse_value;
pub use parser::parse_with_options;
pub use printer::print;
pub use printer::print_type;
pub use printer::print_value;
pub use source::Source;
pub use source_location::SourceLocation;
pub use source_location::get_location;

#[cfg(test)]
mod tests;
