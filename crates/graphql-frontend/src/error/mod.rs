//! The unified error value produced by lexing, parsing, and (eventually)
//! execution, plus its construction helpers and transport projection.

mod format;
mod graphql_error;
mod located;
mod syntax;

pub use format::GraphQLFormattedError;
pub use format::format_error;
pub use graphql_error::GraphQLError;
pub use graphql_error::PathSegment;
pub use located::located_error;
pub use syntax::syntax_error;
