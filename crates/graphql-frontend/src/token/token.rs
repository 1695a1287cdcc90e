use crate::token::TokenKind;
use serde::Serialize;

/// A range of characters represented by a lexical token within a `Source`.
///
/// `start`/`end` are a half-open range of character offsets into the source
/// body; `line`/`column` are 1-indexed. `value` is the interpreted text for
/// value-bearing kinds (`Name`, `Int`, `Float`, `String`, `Comment`) and
/// `None` for punctuators and sentinels.
///
/// Tokens live in a doubly-linked chain owned by the lexer that produced
/// them, `<SOF>` first and `<EOF>` last, with ignored comment tokens
/// retained in between. `prev`/`next` are indices into that chain rather
/// than pointers; the chain only ever grows forward.
///
/// The serialized form exposes only `kind`, `line`, `column`, and `value`;
/// offsets and chain links are diagnostic-only.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    #[serde(skip)]
    pub start: usize,
    #[serde(skip)]
    pub end: usize,
    pub line: usize,
    pub column: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip)]
    pub prev: Option<usize>,
    #[serde(skip)]
    pub next: Option<usize>,
}

impl Token {
    pub(crate) fn new(
        kind: TokenKind,
        start: usize,
        end: usize,
        line: usize,
        column: usize,
        value: Option<String>,
    ) -> Self {
        Self {
            kind,
            start,
            end,
            line,
            column,
            value,
            prev: None,
            next: None,
        }
    }

    /// Describes this token as a string for error messages: `Kind "value"`
    /// for value-bearing tokens, or the kind alone for punctuators,
    /// sentinels, and empty values.
    pub fn desc(&self) -> String {
        match &self.value {
            Some(value) if !value.is_empty() => format!("{} \"{}\"", self.kind, value),
            _ => self.kind.to_string(),
        }
    }
}
