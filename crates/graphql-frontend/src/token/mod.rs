//! Token types shared by the lexer and the parser.

mod token;
mod token_kind;

pub use token::Token;
pub use token_kind::TokenKind;
