use std::sync::Arc;

/// A representation of source input to GraphQL.
///
/// The body is immutable once constructed. Cloning a `Source` is cheap and
/// shares the underlying text, so AST nodes and errors can each hold their
/// own copy for diagnostics without lifetime plumbing.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Source {
    body: Arc<str>,
}

impl Source {
    /// Creates a new `Source` from the given body text.
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            body: Arc::from(body.into().into_boxed_str()),
        }
    }

    /// Returns the raw source text.
    pub fn body(&self) -> &str {
        &self.body
    }
}

impl From<&str> for Source {
    fn from(body: &str) -> Self {
        Source::new(body)
    }
}

impl From<String> for Source {
    fn from(body: String) -> Self {
        Source::new(body)
    }
}
